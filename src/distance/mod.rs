//! Distance matrix.
//!
//! Provides the dense, symmetric Euclidean table every solver reads from.

mod matrix;

pub use matrix::DistanceMatrix;
