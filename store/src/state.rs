//! The key-value state trait consumed by the contract crate.

use crate::StoreError;

/// A key-value view of the ledger state.
///
/// `get` returns `Ok(None)` for an absent key — absence is a normal
/// outcome, never an error. Errors are reserved for transport/backend
/// failures. Backends guarantee that all writes issued by one contract
/// invocation apply together or not at all; this core issues at most one
/// `put` per invocation and relies on that contract.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Whether a record is stored under `key`.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}
