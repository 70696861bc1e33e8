//! Fundamental types for the ballot ledger.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: voter and election identifiers, and the clock abstraction
//! used for voting-window checks.

pub mod ids;
pub mod time;

pub use ids::{ElectionId, VoterId};
pub use time::{Clock, SystemClock};
