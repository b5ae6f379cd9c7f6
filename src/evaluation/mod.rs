//! Tour evaluation.
//!
//! A single scoring routine shared by every solver.

mod scorer;

pub use scorer::tour_length;
