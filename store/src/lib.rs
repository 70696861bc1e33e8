//! Abstract storage trait for the ballot ledger.
//!
//! The hosting ledger (the durable, replicated system of record) and the
//! in-memory test store both implement `StateStore`. The contract crate
//! depends only on this trait; replication, consensus, and per-invocation
//! atomicity are the backend's contract, not implemented here.

pub mod error;
pub mod state;

pub use error::StoreError;
pub use state::StateStore;
