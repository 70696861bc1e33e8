//! JSON codec for ledger records.
//!
//! Records are stored as JSON, matching the wire format the hosting ledger
//! exposes to other tooling. Round-trip exactness is required; field order
//! is not, though map fields use `BTreeMap` so output is stable anyway.

use crate::error::ContractError;
use ballot_store::StateStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a record for storage under `key`.
pub fn encode<T: Serialize>(key: &str, value: &T) -> Result<Vec<u8>, ContractError> {
    serde_json::to_vec(value).map_err(|e| ContractError::Encoding {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Deserialize a record previously stored under `key`.
pub fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, ContractError> {
    serde_json::from_slice(bytes).map_err(|e| ContractError::Decoding {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Fetch and decode the record under `key`, if any.
///
/// Absence is `Ok(None)`; a present but malformed record is a
/// [`ContractError::Decoding`].
pub fn read<T, S>(store: &S, key: &str) -> Result<Option<T>, ContractError>
where
    T: DeserializeOwned,
    S: StateStore + ?Sized,
{
    match store.get(key)? {
        Some(bytes) => decode(key, &bytes).map(Some),
        None => Ok(None),
    }
}
