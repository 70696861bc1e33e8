//! Transactional core of the ballot ledger.
//!
//! Three entry points, each a bounded read-validate-write sequence against
//! an injected [`StateStore`](ballot_store::StateStore):
//!
//! - [`VoterRegistry::register`] — create a unique, eligible voter record.
//! - [`ElectionRegistry::register`] — create a unique election with a
//!   candidate roster and an RFC 3339 voting window.
//! - [`BallotProcessor::cast_vote`] — record one vote per voter per
//!   election inside the window, mutating the tally and voting record
//!   as a single write.
//!
//! The store owns durability, replication, and per-invocation atomicity;
//! this crate owns the validation rules and state transitions.

pub mod ballot;
pub mod codec;
pub mod election;
pub mod error;
pub mod voter;

pub use ballot::BallotProcessor;
pub use election::{Election, ElectionRegistry};
pub use error::ContractError;
pub use voter::{Voter, VoterRegistry};
