//! Identifier newtypes for the two ledger entities.
//!
//! Identifiers double as the store keys under which the records live, so
//! they are plain strings chosen by the caller — the core imposes no
//! format beyond non-emptiness at the call sites that need it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a registered voter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identifier string (also the store key).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VoterId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier of a registered election.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElectionId(String);

impl ElectionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identifier string (also the store key).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ElectionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ElectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
