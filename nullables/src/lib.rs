//! Nullable infrastructure for deterministic testing.
//!
//! In-memory stand-ins for the external collaborators of the contract
//! crate: the key-value ledger and the clock. Both are deterministic and
//! support failure injection so error paths can be exercised directly.

pub mod clock;
pub mod store;

pub use clock::NullClock;
pub use store::NullStore;
