//! Exact solvers.
//!
//! - [`HeldKarp`] — Subset dynamic program, O(2ⁿ · n²), practical up to ~20 points

mod held_karp;

pub use held_karp::HeldKarp;
