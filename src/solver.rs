//! Instance-level entry point tying the strategies together.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SolverConfig;
use crate::constructive::{nearest_neighbor, random_tour};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;
use crate::exact::HeldKarp;
use crate::local_search::two_opt_refine;
use crate::models::{Point, Strategy, Tour, TspSolution};

/// A TSP instance: points plus their distance matrix.
///
/// The matrix is built once in [`TspInstance::new`] and shared read-only by
/// every solve.
///
/// # Examples
///
/// ```
/// use u_tsp::config::SolverConfig;
/// use u_tsp::models::{Point, Strategy};
/// use u_tsp::solver::TspInstance;
///
/// let instance = TspInstance::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ])
/// .unwrap();
///
/// let config = SolverConfig::default();
/// let exact = instance.solve(Strategy::Exact, &config).unwrap();
/// let greedy = instance.solve(Strategy::Greedy, &config).unwrap();
/// assert!(exact.length() <= greedy.length());
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    points: Vec<Point>,
    distances: DistanceMatrix,
}

impl TspInstance {
    /// Builds an instance and its distance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::EmptyInstance`] if `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(TspError::EmptyInstance);
        }
        let distances = DistanceMatrix::from_points(&points);
        Ok(Self { points, distances })
    }

    /// The instance's points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The precomputed distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` since empty instances are rejected at construction;
    /// kept alongside [`len`](Self::len) for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Length of `tour` under this instance's distances.
    pub fn score(&self, tour: &Tour) -> f64 {
        tour_length(tour.nodes(), &self.distances)
    }

    /// Solves the instance with the given strategy.
    ///
    /// # Errors
    ///
    /// [`Strategy::Exact`] fails with [`TspError::TooManyNodes`] when the
    /// instance exceeds [`SolverConfig::max_exact_nodes`].
    pub fn solve(&self, strategy: Strategy, config: &SolverConfig) -> Result<TspSolution> {
        let n = self.len();
        log::debug!("solver.solve: start strategy={} n={n}", strategy.name());

        let solution = match strategy {
            Strategy::Exact => HeldKarp::new(&self.distances, config.max_exact_nodes())?.solve()?,
            Strategy::Greedy => {
                let tour = nearest_neighbor(&self.distances)?;
                self.finish(strategy, tour)
            }
            Strategy::GreedyTwoOpt => {
                let greedy = nearest_neighbor(&self.distances)?;
                log::debug!(
                    "solver.solve: greedy length={}",
                    tour_length(greedy.nodes(), &self.distances)
                );
                let outcome = two_opt_refine(
                    &greedy,
                    &self.points,
                    &self.distances,
                    config.two_opt_max_passes(),
                )?;
                log::debug!(
                    "solver.solve: two_opt passes={} swaps={}",
                    outcome.passes,
                    outcome.swaps
                );
                self.finish(strategy, outcome.tour)
            }
            Strategy::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let tour = random_tour(n, &mut rng)?;
                self.finish(strategy, tour)
            }
        };

        log::info!(
            "solver.solve: done strategy={} n={n} length={:.2}",
            strategy.name(),
            solution.length()
        );
        Ok(solution)
    }

    fn finish(&self, strategy: Strategy, tour: Tour) -> TspSolution {
        let length = self.score(&tour);
        TspSolution::new(strategy, tour, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crossed_instance() -> TspInstance {
        TspInstance::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(1.0, 3.2),
        ])
        .expect("non-empty")
    }

    #[test]
    fn test_empty_instance_rejected() {
        assert!(matches!(TspInstance::new(vec![]), Err(TspError::EmptyInstance)));
    }

    #[test]
    fn test_single_point_all_strategies() {
        let instance = TspInstance::new(vec![Point::new(2.0, 2.0)]).expect("non-empty");
        let config = SolverConfig::default();
        for strategy in [
            Strategy::Exact,
            Strategy::Greedy,
            Strategy::GreedyTwoOpt,
            Strategy::Random { seed: 3 },
        ] {
            let sol = instance.solve(strategy, &config).expect("solvable");
            assert_eq!(sol.length(), 0.0);
            assert_eq!(sol.tour().nodes(), &[0, 0]);
            assert_eq!(sol.strategy(), strategy);
        }
    }

    #[test]
    fn test_two_opt_reaches_exact_on_crossed_greedy() {
        let instance = crossed_instance();
        let config = SolverConfig::default();
        let greedy = instance.solve(Strategy::Greedy, &config).expect("solvable");
        let refined = instance.solve(Strategy::GreedyTwoOpt, &config).expect("solvable");
        let exact = instance.solve(Strategy::Exact, &config).expect("solvable");

        assert!(refined.length() < greedy.length());
        assert!((refined.length() - exact.length()).abs() < 1e-10);
    }

    #[test]
    fn test_exact_respects_configured_ceiling() {
        let instance = crossed_instance();
        let config = SolverConfig::default().with_max_exact_nodes(3);
        assert!(matches!(
            instance.solve(Strategy::Exact, &config),
            Err(TspError::TooManyNodes { nodes: 4, max: 3 })
        ));
        // Heuristics are not bounded by the ceiling
        assert!(instance.solve(Strategy::GreedyTwoOpt, &config).is_ok());
    }

    #[test]
    fn test_exact_rejects_above_default_ceiling() {
        let instance = TspInstance::new((0..21).map(|i| Point::new(i as f64, 0.0)).collect())
            .expect("non-empty");
        assert!(!instance.is_empty());
        assert!(matches!(
            instance.solve(Strategy::Exact, &SolverConfig::default()),
            Err(TspError::TooManyNodes { nodes: 21, max: 20 })
        ));
    }

    #[test]
    fn test_exact_raised_ceiling_does_not_panic() {
        let instance = TspInstance::new((0..58).map(|i| Point::new(i as f64, 0.0)).collect())
            .expect("non-empty");
        let config = SolverConfig::default().with_max_exact_nodes(usize::MAX);
        assert!(matches!(
            instance.solve(Strategy::Exact, &config),
            Err(TspError::TooManyNodes { nodes: 58, .. })
        ));
    }

    #[test]
    fn test_lengths_come_from_scorer() {
        let instance = crossed_instance();
        let config = SolverConfig::default();
        for strategy in [
            Strategy::Exact,
            Strategy::Greedy,
            Strategy::GreedyTwoOpt,
            Strategy::Random { seed: 9 },
        ] {
            let sol = instance.solve(strategy, &config).expect("solvable");
            assert!(sol.tour().validate(instance.len()).is_ok());
            assert!((sol.length() - instance.score(sol.tour())).abs() < 1e-12);
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let instance = TspInstance::new(
            (0..10).map(|i| Point::new(i as f64, (i * i) as f64)).collect(),
        )
        .expect("non-empty");
        let config = SolverConfig::default();
        let a = instance.solve(Strategy::Random { seed: 5 }, &config).expect("solvable");
        let b = instance.solve(Strategy::Random { seed: 5 }, &config).expect("solvable");
        assert_eq!(a, b);
    }
}
