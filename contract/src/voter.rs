//! Voter records and registration.

use crate::codec;
use crate::error::ContractError;
use ballot_store::StateStore;
use ballot_types::VoterId;
use serde::{Deserialize, Serialize};

/// A registered voter.
///
/// Created once at registration and never mutated or deleted by this core.
/// Eligibility is set at registration; revocation would be a new operation
/// on the hosting ledger, not a concern here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    #[serde(rename = "voterID")]
    pub voter_id: VoterId,
    pub name: String,
    #[serde(rename = "isEligibleForVote")]
    pub is_eligible_for_vote: bool,
}

/// Creates voter records, enforcing one record per voter id.
pub struct VoterRegistry<'a, S: StateStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: StateStore + ?Sized> VoterRegistry<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register a new voter under `voter_id`.
    ///
    /// Fails with [`ContractError::VoterAlreadyExists`] if any record is
    /// already stored under that id. The new voter is eligible.
    pub fn register(&self, voter_id: &VoterId, name: &str) -> Result<(), ContractError> {
        if self.store.exists(voter_id.as_str())? {
            return Err(ContractError::VoterAlreadyExists(voter_id.to_string()));
        }

        let voter = Voter {
            voter_id: voter_id.clone(),
            name: name.to_string(),
            is_eligible_for_vote: true,
        };

        let bytes = codec::encode(voter_id.as_str(), &voter)?;
        self.store.put(voter_id.as_str(), &bytes)?;
        tracing::info!(voter = %voter_id, "voter registered");
        Ok(())
    }
}
