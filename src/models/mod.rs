//! Domain model types for the planar TSP.
//!
//! Points carry coordinates, tours are closed index sequences starting at
//! the origin, and solutions pair a tour with its length and the strategy
//! that produced it.

mod point;
mod solution;
mod tour;

pub use point::{segments_cross, Point};
pub use solution::{Strategy, TspSolution};
pub use tour::Tour;
