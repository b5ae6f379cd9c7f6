//! Solver output type.

use serde::{Deserialize, Serialize};

use super::Tour;

/// Which solving strategy produced a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Held–Karp subset dynamic program (optimal, exponential).
    Exact,
    /// Nearest-neighbor construction.
    Greedy,
    /// Nearest-neighbor construction followed by 2-opt refinement.
    GreedyTwoOpt,
    /// Seeded random permutation, used as a baseline.
    Random {
        /// RNG seed.
        seed: u64,
    },
}

impl Strategy {
    /// Short name, suitable as an output file prefix.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "bitDP",
            Self::Greedy => "greedy",
            Self::GreedyTwoOpt => "2opt",
            Self::Random { .. } => "random",
        }
    }
}

/// A tour together with its length and the strategy that produced it.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Strategy, Tour, TspSolution};
///
/// let sol = TspSolution::new(Strategy::Greedy, Tour::new(vec![0, 0]), 0.0);
/// assert_eq!(sol.length(), 0.0);
/// assert_eq!(sol.tour().nodes(), &[0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspSolution {
    strategy: Strategy,
    tour: Tour,
    length: f64,
}

impl TspSolution {
    /// Creates a new solution.
    pub fn new(strategy: Strategy, tour: Tour, length: f64) -> Self {
        Self {
            strategy,
            tour,
            length,
        }
    }

    /// The strategy that produced this solution.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The closed tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Total tour length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Consumes the solution and returns the tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}
