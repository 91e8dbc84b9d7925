//! # Data Transfer Objects
//!
//! ユースケースの入出力

pub mod lookup_outcome;

pub use lookup_outcome::{AccessLogAppend, LookupOutcome};
