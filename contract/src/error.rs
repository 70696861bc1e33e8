use ballot_store::StoreError;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("voter already exists with voterID {0}")]
    VoterAlreadyExists(String),

    #[error("election already exists with electionID {0}")]
    ElectionAlreadyExists(String),

    #[error("no voter registered with voterID {0}")]
    VoterNotFound(String),

    #[error("no election registered with electionID {0}")]
    ElectionNotFound(String),

    #[error("invalid {field} for electionID {election}: {value:?} is not RFC 3339: {reason}")]
    InvalidTimestamp {
        election: String,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("election {election} requires at least 2 candidates, got {have}")]
    InsufficientCandidates { election: String, have: usize },

    #[error("candidate {candidate} appears more than once on the ballot for election {election}")]
    DuplicateCandidate { election: String, candidate: String },

    #[error("voting window for election {election} is empty: start {start} is not before end {end}")]
    EmptyVotingWindow {
        election: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("candidate {candidate} is not on the ballot for election {election}")]
    InvalidCandidate { election: String, candidate: String },

    #[error("voter {voter} has already voted in election {election}")]
    DuplicateVote { voter: String, election: String },

    #[error("election {election} has not started: voting opens at {start}")]
    ElectionNotStarted {
        election: String,
        start: DateTime<Utc>,
    },

    #[error("election {election} is closed: voting ended at {end}")]
    ElectionClosed { election: String, end: DateTime<Utc> },

    #[error("failed to encode record for key {key}: {reason}")]
    Encoding { key: String, reason: String },

    #[error("failed to decode record for key {key}: {reason}")]
    Decoding { key: String, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
