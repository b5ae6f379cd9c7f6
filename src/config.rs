//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Largest instance the exact solver accepts by default.
///
/// Memory grows as `2^n · n` table cells and time as `2^n · n²`; at 20
/// points the DP table alone is about 160 MiB.
pub const DEFAULT_MAX_EXACT_NODES: usize = 20;

/// Default cap on 2-opt passes.
pub const DEFAULT_TWO_OPT_MAX_PASSES: usize = 10;

/// Tunables shared by the solvers.
///
/// # Examples
///
/// ```
/// use u_tsp::config::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_exact_nodes(12)
///     .with_two_opt_max_passes(3);
/// assert_eq!(config.max_exact_nodes(), 12);
/// assert_eq!(config.two_opt_max_passes(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    max_exact_nodes: usize,
    two_opt_max_passes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_exact_nodes: DEFAULT_MAX_EXACT_NODES,
            two_opt_max_passes: DEFAULT_TWO_OPT_MAX_PASSES,
        }
    }
}

impl SolverConfig {
    /// Sets the largest instance the exact solver will accept.
    ///
    /// Instances whose tables exceed the address space or fail to allocate
    /// are still rejected with `TooManyNodes`, whatever this is set to.
    pub fn with_max_exact_nodes(mut self, max: usize) -> Self {
        self.max_exact_nodes = max;
        self
    }

    /// Sets the maximum number of 2-opt passes.
    pub fn with_two_opt_max_passes(mut self, passes: usize) -> Self {
        self.two_opt_max_passes = passes;
        self
    }

    /// Largest instance the exact solver will accept.
    pub fn max_exact_nodes(&self) -> usize {
        self.max_exact_nodes
    }

    /// Maximum number of 2-opt passes.
    pub fn two_opt_max_passes(&self) -> usize {
        self.two_opt_max_passes
    }
}
