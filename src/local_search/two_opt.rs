//! Crossing-driven 2-opt refinement.
//!
//! # Algorithm
//!
//! For each pair of non-adjacent tour edges (t[i], t[i+1]) and (t[j], t[j+1])
//! with j ≥ i + 2, test whether the two segments cross in the plane. A
//! crossing edge pair is never part of an optimal Euclidean tour, so the
//! segment t[i+1..=j] is reversed and the result is kept if it is strictly
//! shorter than the best tour so far.
//!
//! A pass scans every edge pair once. Passes repeat until one detects no
//! crossings or the pass cap is hit. Crossings are counted whether or not
//! the swap was accepted, so a crossing that cannot be improved keeps the
//! loop running until the cap.
//!
//! # Complexity
//!
//! O(n³) per pass: O(n²) edge pairs, each rescoring an O(n) candidate.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;
use crate::models::{segments_cross, Point, Tour};

/// Result of a 2-opt run.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome {
    /// The refined tour.
    pub tour: Tour,
    /// Length of the refined tour.
    pub length: f64,
    /// Number of passes performed.
    pub passes: usize,
    /// Number of accepted segment reversals.
    pub swaps: usize,
}

/// Applies crossing-driven 2-opt to a closed tour.
///
/// The returned tour is never longer than the input.
///
/// # Arguments
///
/// * `tour` — Closed tour over `points` (starts and ends at 0)
/// * `points` — Coordinates, used for the crossing test
/// * `distances` — Distance matrix over the same points, used for scoring
/// * `max_passes` — Upper bound on full passes over the edge pairs
///
/// # Errors
///
/// - [`TspError::InvalidTour`] if `tour` is not a Hamiltonian cycle over `points`.
/// - [`TspError::InvalidData`] if `distances` does not match `points`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_refine;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// // 0→1→2→3→0 crosses itself along both diagonals
/// let crossed = Tour::new(vec![0, 1, 2, 3, 0]);
/// let outcome = two_opt_refine(&crossed, &points, &dm, 10).unwrap();
/// assert!((outcome.length - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt_refine(
    tour: &Tour,
    points: &[Point],
    distances: &DistanceMatrix,
    max_passes: usize,
) -> Result<TwoOptOutcome> {
    let n = points.len();
    tour.validate(n)?;
    if distances.size() != n {
        return Err(TspError::invalid_data(format!(
            "distance matrix covers {} points, instance has {n}",
            distances.size()
        )));
    }

    let mut current = tour.nodes().to_vec();
    let mut best = tour_length(&current, distances);
    let mut passes = 0;
    let mut swaps = 0;

    while passes < max_passes {
        let mut crossings = 0;
        for i in 0..n.saturating_sub(2) {
            for j in (i + 2)..n {
                if !edges_cross(&current, points, i, j) {
                    continue;
                }
                crossings += 1;

                let mut candidate = current.clone();
                candidate[i + 1..=j].reverse();
                let score = tour_length(&candidate, distances);
                if score < best {
                    current = candidate;
                    best = score;
                    swaps += 1;
                }
            }
        }
        passes += 1;
        log::debug!("two_opt: pass={passes} crossings={crossings} length={best}");

        if crossings == 0 {
            break;
        }
    }

    Ok(TwoOptOutcome {
        tour: Tour::new(current),
        length: best,
        passes,
        swaps,
    })
}

/// Whether edge (t[i], t[i+1]) crosses edge (t[j], t[j+1]).
fn edges_cross(tour: &[usize], points: &[Point], i: usize, j: usize) -> bool {
    segments_cross(
        &points[tour[i]],
        &points[tour[i + 1]],
        &points[tour[j]],
        &points[tour[j + 1]],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::{nearest_neighbor, random_tour};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup(coords: &[(f64, f64)]) -> (Vec<Point>, DistanceMatrix) {
        let points: Vec<Point> = coords.iter().map(|&c| Point::from(c)).collect();
        let dm = DistanceMatrix::from_points(&points);
        (points, dm)
    }

    #[test]
    fn test_collinear_unchanged() {
        let (points, dm) = setup(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let greedy = nearest_neighbor(&dm).expect("non-empty");
        let outcome = two_opt_refine(&greedy, &points, &dm, 10).expect("valid");
        assert_eq!(outcome.tour, greedy);
        assert_eq!(outcome.passes, 1);
        assert_eq!(outcome.swaps, 0);
        assert!((outcome.length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_uncrosses_greedy_tour() {
        // Greedy goes 0→1→2→3→0 and edge 1→2 crosses edge 3→0
        let (points, dm) = setup(&[(0.0, 0.0), (1.0, 0.0), (0.0, 3.0), (1.0, 3.2)]);
        let greedy = nearest_neighbor(&dm).expect("non-empty");
        assert_eq!(greedy.nodes(), &[0, 1, 2, 3, 0]);

        let outcome = two_opt_refine(&greedy, &points, &dm, 10).expect("valid");
        assert_eq!(outcome.tour.nodes(), &[0, 1, 3, 2, 0]);
        assert!(outcome.length < greedy.length(&dm));
        // 1 + 3.2 + |(1,3.2)-(0,3)| + 3
        let optimal = 7.2 + (1.0f64 + 0.04).sqrt();
        assert!((outcome.length - optimal).abs() < 1e-10);
        assert_eq!(outcome.swaps, 1);
        assert_eq!(outcome.passes, 2);
    }

    #[test]
    fn test_single_and_two_points() {
        let (points, dm) = setup(&[(0.0, 0.0)]);
        let outcome = two_opt_refine(&Tour::new(vec![0, 0]), &points, &dm, 10).expect("valid");
        assert_eq!(outcome.tour.nodes(), &[0, 0]);
        assert_eq!(outcome.length, 0.0);

        let (points, dm) = setup(&[(0.0, 0.0), (1.0, 0.0)]);
        let outcome = two_opt_refine(&Tour::new(vec![0, 1, 0]), &points, &dm, 10).expect("valid");
        assert_eq!(outcome.tour.nodes(), &[0, 1, 0]);
    }

    #[test]
    fn test_zero_passes_returns_input() {
        let (points, dm) = setup(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
        let crossed = Tour::new(vec![0, 1, 2, 3, 0]);
        let outcome = two_opt_refine(&crossed, &points, &dm, 0).expect("valid");
        assert_eq!(outcome.tour, crossed);
        assert_eq!(outcome.passes, 0);
    }

    #[test]
    fn test_respects_pass_cap() {
        let mut rng = StdRng::seed_from_u64(11);
        let coords: Vec<(f64, f64)> = (0..30)
            .map(|i| (((i * 37) % 101) as f64, ((i * 59) % 97) as f64))
            .collect();
        let (points, dm) = setup(&coords);
        let start = random_tour(points.len(), &mut rng).expect("non-empty");
        let outcome = two_opt_refine(&start, &points, &dm, 2).expect("valid");
        assert!(outcome.passes <= 2);
        assert!(outcome.tour.validate(points.len()).is_ok());
    }

    #[test]
    fn test_does_not_worsen_random_tours() {
        let coords: Vec<(f64, f64)> = (0..15)
            .map(|i| (((i * 13) % 17) as f64, ((i * 7) % 11) as f64))
            .collect();
        let (points, dm) = setup(&coords);
        for seed in 0..10 {
            let start = random_tour(points.len(), &mut StdRng::seed_from_u64(seed))
                .expect("non-empty");
            let outcome = two_opt_refine(&start, &points, &dm, 10).expect("valid");
            assert!(outcome.length <= start.length(&dm) + 1e-10);
            assert!(outcome.passes <= 10);
            assert!(outcome.tour.validate(points.len()).is_ok());
        }
    }

    #[test]
    fn test_rejects_invalid_tour() {
        let (points, dm) = setup(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let bad = Tour::new(vec![0, 1, 1, 0]);
        assert!(matches!(
            two_opt_refine(&bad, &points, &dm, 10),
            Err(TspError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_rejects_mismatched_matrix() {
        let (points, _) = setup(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let (_, dm) = setup(&[(0.0, 0.0), (1.0, 0.0)]);
        let tour = Tour::new(vec![0, 1, 2, 0]);
        assert!(matches!(
            two_opt_refine(&tour, &points, &dm, 10),
            Err(TspError::InvalidData(_))
        ));
    }
}
