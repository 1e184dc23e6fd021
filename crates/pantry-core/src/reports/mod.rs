//! Report rules over the transaction ledger
//!
//! The store supplies raw grouped counts; the ranking and bucketing rules
//! live here so they hold regardless of which store produced the counts.

mod ranking;
mod student_counts;

pub use ranking::{rank_most_taken, MostTakenItem, ProductTakeCount, MOST_TAKEN_MAX_RANK};
pub use student_counts::{StatusCount, StudentCounts};
