//! Closed tour over instance indices.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;

/// A closed tour: node indices starting and ending at the origin (index 0).
///
/// For an instance of `n` points a valid tour has `n + 1` entries and visits
/// every index in `1..n` exactly once between the two origin entries.
/// [`Tour::new`] does not check this; call [`Tour::validate`] on tours that
/// come from outside the solvers.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0]);
/// assert_eq!(tour.num_nodes(), 3);
/// assert!(tour.validate(3).is_ok());
/// assert!(tour.validate(4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Wraps a node sequence without validating it.
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// The node sequence, including the closing origin.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Consumes the tour and returns the node sequence.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// Number of distinct nodes visited (the closing origin is not counted).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Total length under the given distance matrix.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        tour_length(&self.nodes, distances)
    }

    /// Checks that this is a closed Hamiltonian cycle over `n` points.
    pub fn validate(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }
        if self.nodes.len() != n + 1 {
            return Err(TspError::invalid_tour(format!(
                "expected {} entries for {n} points, got {}",
                n + 1,
                self.nodes.len()
            )));
        }
        if self.nodes[0] != 0 || self.nodes[n] != 0 {
            return Err(TspError::invalid_tour(format!(
                "tour must start and end at the origin, got {} .. {}",
                self.nodes[0], self.nodes[n]
            )));
        }

        let mut seen = vec![false; n];
        seen[0] = true;
        for &node in &self.nodes[1..n] {
            if node >= n {
                return Err(TspError::invalid_tour(format!(
                    "node {node} out of range for {n} points"
                )));
            }
            if seen[node] {
                return Err(TspError::invalid_tour(format!(
                    "node {node} visited more than once"
                )));
            }
            seen[node] = true;
        }
        Ok(())
    }
}
