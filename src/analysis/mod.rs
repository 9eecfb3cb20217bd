//! Analysis modules.
//!
//! Grouping and statistics used by the report aggregators.

pub mod aggregator;

pub use aggregator::*;
