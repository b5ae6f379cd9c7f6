//! Local search operators for improving tours.
//!
//! - [`two_opt_refine`] — Crossing-driven 2-opt segment reversal

mod two_opt;

pub use two_opt::{two_opt_refine, TwoOptOutcome};
