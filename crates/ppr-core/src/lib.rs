//! Core pipeline stages for the polling-place registry analysis.
//!
//! The stages run strictly forward, each consuming its predecessor's
//! output: raw frame → cleaned/typed frame → county counts → summary
//! statistics. Every stage owns and returns a fresh result; none feed
//! back into an earlier one.

pub mod aggregate;
pub mod clean;
pub mod stats;

pub use aggregate::count_by_county;
pub use clean::{clean_registry, election_dates};
pub use stats::summarize;
