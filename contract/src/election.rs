//! Election records and registration.

use crate::codec;
use crate::error::ContractError;
use ballot_store::StateStore;
use ballot_types::ElectionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A registered election.
///
/// Created with zero tallies and an empty voting record; mutated only by
/// successful vote casting, never deleted.
///
/// Invariants held across every state transition:
/// - `votes` keys are exactly the candidate set;
/// - a voter id maps to `true` in `has_voted` iff that voter cast a vote;
/// - the sum of `votes` equals the count of `true` entries in `has_voted`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    #[serde(rename = "electionID")]
    pub election_id: ElectionId,
    pub name: String,
    pub candidates: Vec<String>,
    pub votes: BTreeMap<String, u64>,
    #[serde(rename = "hasVoted")]
    pub has_voted: BTreeMap<String, bool>,
    /// Start of the voting window (inclusive).
    #[serde(rename = "startTime")]
    pub start_time: DateTime<Utc>,
    /// End of the voting window (inclusive).
    #[serde(rename = "endTime")]
    pub end_time: DateTime<Utc>,
}

impl Election {
    /// Total ballots counted across all candidates.
    pub fn tally_total(&self) -> u64 {
        self.votes.values().sum()
    }

    /// Number of voters recorded as having voted.
    pub fn ballots_cast(&self) -> u64 {
        self.has_voted.values().filter(|&&voted| voted).count() as u64
    }
}

/// Creates election records, enforcing uniqueness, window parsing, and the
/// candidate-roster constraints.
pub struct ElectionRegistry<'a, S: StateStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: StateStore + ?Sized> ElectionRegistry<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register a new election under `election_id`.
    ///
    /// `start_time` and `end_time` must be RFC 3339 date-times with a
    /// timezone offset; the roster must hold at least two distinct
    /// candidates and the window must be non-empty (`start < end`).
    /// Tallies start at zero and the voting record starts empty.
    pub fn register(
        &self,
        election_id: &ElectionId,
        name: &str,
        candidates: &[String],
        start_time: &str,
        end_time: &str,
    ) -> Result<(), ContractError> {
        if self.store.exists(election_id.as_str())? {
            return Err(ContractError::ElectionAlreadyExists(election_id.to_string()));
        }

        let start = parse_rfc3339(election_id, "startTime", start_time)?;
        let end = parse_rfc3339(election_id, "endTime", end_time)?;

        if candidates.len() < 2 {
            return Err(ContractError::InsufficientCandidates {
                election: election_id.to_string(),
                have: candidates.len(),
            });
        }
        let mut seen = HashSet::new();
        for candidate in candidates {
            if !seen.insert(candidate.as_str()) {
                return Err(ContractError::DuplicateCandidate {
                    election: election_id.to_string(),
                    candidate: candidate.clone(),
                });
            }
        }
        if start >= end {
            return Err(ContractError::EmptyVotingWindow {
                election: election_id.to_string(),
                start,
                end,
            });
        }

        let votes = candidates.iter().map(|c| (c.clone(), 0)).collect();
        let election = Election {
            election_id: election_id.clone(),
            name: name.to_string(),
            candidates: candidates.to_vec(),
            votes,
            has_voted: BTreeMap::new(),
            start_time: start,
            end_time: end,
        };

        let bytes = codec::encode(election_id.as_str(), &election)?;
        self.store.put(election_id.as_str(), &bytes)?;
        tracing::info!(
            election = %election_id,
            candidates = candidates.len(),
            "election registered"
        );
        Ok(())
    }
}

fn parse_rfc3339(
    election_id: &ElectionId,
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, ContractError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ContractError::InvalidTimestamp {
            election: election_id.to_string(),
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
