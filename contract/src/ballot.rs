//! Vote casting — the core state transition of the ledger.
//!
//! Per (voter, election) pair the state machine is `NotVoted → Voted`,
//! terminal: no reversal operation exists. A successful cast increments
//! the candidate tally and flips the voter's entry in the voting record,
//! persisted together as a single write.

use crate::codec;
use crate::election::Election;
use crate::error::ContractError;
use ballot_store::StateStore;
use ballot_types::{Clock, ElectionId, VoterId};

/// Validates and applies vote casts against the store.
pub struct BallotProcessor<'a, S: StateStore + ?Sized, C: Clock> {
    store: &'a S,
    clock: &'a C,
}

impl<'a, S: StateStore + ?Sized, C: Clock> BallotProcessor<'a, S, C> {
    pub fn new(store: &'a S, clock: &'a C) -> Self {
        Self { store, clock }
    }

    /// Cast `voter_id`'s vote for `candidate` in `election_id`.
    ///
    /// Checks run in a fixed order against one read of the election record:
    /// voter exists, election exists and decodes, candidate is on the
    /// roster, the voter has not voted, and the current time lies inside
    /// the inclusive voting window. Not idempotent — a second cast by the
    /// same voter fails with [`ContractError::DuplicateVote`]; protection
    /// against concurrent duplicates is the hosting store's isolation
    /// contract, not re-checked here.
    pub fn cast_vote(
        &self,
        voter_id: &VoterId,
        election_id: &ElectionId,
        candidate: &str,
    ) -> Result<(), ContractError> {
        if !self.store.exists(voter_id.as_str())? {
            return Err(ContractError::VoterNotFound(voter_id.to_string()));
        }

        let mut election: Election = codec::read(self.store, election_id.as_str())?
            .ok_or_else(|| ContractError::ElectionNotFound(election_id.to_string()))?;

        if !election.candidates.iter().any(|c| c == candidate) {
            return Err(ContractError::InvalidCandidate {
                election: election_id.to_string(),
                candidate: candidate.to_string(),
            });
        }

        if election
            .has_voted
            .get(voter_id.as_str())
            .copied()
            .unwrap_or(false)
        {
            return Err(ContractError::DuplicateVote {
                voter: voter_id.to_string(),
                election: election_id.to_string(),
            });
        }

        let now = self.clock.now();
        if now < election.start_time {
            return Err(ContractError::ElectionNotStarted {
                election: election_id.to_string(),
                start: election.start_time,
            });
        }
        if now > election.end_time {
            return Err(ContractError::ElectionClosed {
                election: election_id.to_string(),
                end: election.end_time,
            });
        }

        *election.votes.entry(candidate.to_string()).or_insert(0) += 1;
        election.has_voted.insert(voter_id.to_string(), true);

        let bytes = codec::encode(election_id.as_str(), &election)?;
        self.store.put(election_id.as_str(), &bytes)?;
        tracing::info!(
            voter = %voter_id,
            election = %election_id,
            candidate,
            "vote recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::election::ElectionRegistry;
    use crate::voter::VoterRegistry;
    use ballot_nullables::{NullClock, NullStore};
    use ballot_store::StoreError;
    use chrono::{TimeZone, Utc};

    // Window: 2025-06-01 08:00 — 20:00 UTC. Clock starts at noon.
    const START: &str = "2025-06-01T08:00:00+00:00";
    const END: &str = "2025-06-01T20:00:00+00:00";

    fn noon_clock() -> NullClock {
        NullClock::at(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
    }

    fn setup(store: &NullStore) {
        VoterRegistry::new(store)
            .register(&VoterId::new("v1"), "Ada")
            .unwrap();
        ElectionRegistry::new(store)
            .register(
                &ElectionId::new("e1"),
                "General",
                &["Alice".to_string(), "Bob".to_string()],
                START,
                END,
            )
            .unwrap();
    }

    fn stored_election(store: &NullStore) -> Election {
        codec::read(store, "e1").unwrap().unwrap()
    }

    #[test]
    fn cast_vote_increments_tally_and_marks_voter() {
        let store = NullStore::new();
        let clock = noon_clock();
        setup(&store);

        BallotProcessor::new(&store, &clock)
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Alice")
            .unwrap();

        let election = stored_election(&store);
        assert_eq!(election.votes["Alice"], 1);
        assert_eq!(election.votes["Bob"], 0);
        assert_eq!(election.has_voted.get("v1"), Some(&true));
        assert_eq!(election.tally_total(), election.ballots_cast());
    }

    #[test]
    fn cast_vote_rejects_unregistered_voter() {
        let store = NullStore::new();
        let clock = noon_clock();
        setup(&store);

        let err = BallotProcessor::new(&store, &clock)
            .cast_vote(&VoterId::new("ghost"), &ElectionId::new("e1"), "Alice")
            .unwrap_err();
        assert!(matches!(err, ContractError::VoterNotFound(ref v) if v == "ghost"));
    }

    #[test]
    fn cast_vote_rejects_missing_election() {
        let store = NullStore::new();
        let clock = noon_clock();
        setup(&store);

        let err = BallotProcessor::new(&store, &clock)
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e404"), "Alice")
            .unwrap_err();
        assert!(matches!(err, ContractError::ElectionNotFound(ref e) if e == "e404"));
    }

    #[test]
    fn cast_vote_rejects_corrupt_election_record() {
        let store = NullStore::new();
        let clock = noon_clock();
        VoterRegistry::new(&store)
            .register(&VoterId::new("v1"), "Ada")
            .unwrap();
        store.insert_raw("e1", &b"{ corrupt"[..]);

        let err = BallotProcessor::new(&store, &clock)
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Alice")
            .unwrap_err();
        assert!(matches!(err, ContractError::Decoding { ref key, .. } if key == "e1"));
    }

    #[test]
    fn cast_vote_rejects_candidate_off_the_roster() {
        let store = NullStore::new();
        let clock = noon_clock();
        setup(&store);

        let err = BallotProcessor::new(&store, &clock)
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Mallory")
            .unwrap_err();
        assert!(matches!(
            err,
            ContractError::InvalidCandidate { ref candidate, .. } if candidate == "Mallory"
        ));
        assert_eq!(stored_election(&store).tally_total(), 0);
    }

    #[test]
    fn second_cast_by_same_voter_is_duplicate() {
        let store = NullStore::new();
        let clock = noon_clock();
        setup(&store);
        let processor = BallotProcessor::new(&store, &clock);

        processor
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Alice")
            .unwrap();
        // Switching candidates does not help.
        let err = processor
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Bob")
            .unwrap_err();
        assert!(matches!(err, ContractError::DuplicateVote { ref voter, .. } if voter == "v1"));

        let election = stored_election(&store);
        assert_eq!(election.votes["Alice"], 1);
        assert_eq!(election.votes["Bob"], 0);
    }

    #[test]
    fn cast_before_window_opens_is_not_started() {
        let store = NullStore::new();
        let clock = NullClock::at(Utc.with_ymd_and_hms(2025, 6, 1, 7, 59, 59).unwrap());
        setup(&store);

        let err = BallotProcessor::new(&store, &clock)
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Alice")
            .unwrap_err();
        assert!(matches!(err, ContractError::ElectionNotStarted { .. }));
    }

    #[test]
    fn cast_after_window_closes_is_closed() {
        let store = NullStore::new();
        let clock = NullClock::at(Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 1).unwrap());
        setup(&store);

        let err = BallotProcessor::new(&store, &clock)
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Alice")
            .unwrap_err();
        assert!(matches!(err, ContractError::ElectionClosed { .. }));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let store = NullStore::new();
        setup(&store);
        VoterRegistry::new(&store)
            .register(&VoterId::new("v2"), "Grace")
            .unwrap();

        let at_start = NullClock::at(Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap());
        BallotProcessor::new(&store, &at_start)
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Alice")
            .unwrap();

        let at_end = NullClock::at(Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap());
        BallotProcessor::new(&store, &at_end)
            .cast_vote(&VoterId::new("v2"), &ElectionId::new("e1"), "Bob")
            .unwrap();

        let election = stored_election(&store);
        assert_eq!(election.tally_total(), 2);
    }

    #[test]
    fn failed_write_leaves_no_partial_state() {
        let store = NullStore::new();
        let clock = noon_clock();
        setup(&store);

        store.fail_writes(true);
        let err = BallotProcessor::new(&store, &clock)
            .cast_vote(&VoterId::new("v1"), &ElectionId::new("e1"), "Alice")
            .unwrap_err();
        assert!(matches!(
            err,
            ContractError::Store(StoreError::Write { .. })
        ));

        store.fail_writes(false);
        let election = stored_election(&store);
        assert_eq!(election.tally_total(), 0);
        assert!(election.has_voted.is_empty());
    }
}
