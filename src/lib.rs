//! # u-tsp
//!
//! Planar traveling salesman toolkit: exact subset DP for small instances,
//! nearest-neighbor construction, and crossing-driven 2-opt refinement over
//! a shared Euclidean distance model.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, TspSolution, Strategy)
//! - [`distance`] — Symmetric Euclidean distance matrix
//! - [`evaluation`] — Shared tour length scoring
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, random baseline)
//! - [`exact`] — Held–Karp bitmask dynamic program
//! - [`local_search`] — Local search operators (2-opt)
//! - [`solver`] — Instance-level entry point dispatching on [`models::Strategy`]
//! - [`config`] — Solver tunables
//! - [`io`] — Persisted tour format
//!
//! ## Example
//!
//! ```
//! use u_tsp::config::SolverConfig;
//! use u_tsp::models::{Point, Strategy};
//! use u_tsp::solver::TspInstance;
//!
//! let instance = TspInstance::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 3.0),
//!     Point::new(1.0, 3.2),
//! ])?;
//!
//! let solution = instance.solve(Strategy::GreedyTwoOpt, &SolverConfig::default())?;
//! assert_eq!(solution.tour().nodes(), &[0, 1, 3, 2, 0]);
//! # Ok::<(), u_tsp::TspError>(())
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Result, TspError};
