//! Nearest-neighbor constructive heuristic.
//!
//! Starting from the origin, always move to the nearest unvisited point,
//! then return to the origin once every point has been visited.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// Unvisited points are scanned in ascending index order and a candidate
/// replaces the current best only when strictly closer, so ties resolve to
/// the lowest index and the result is fully deterministic.
///
/// # Errors
///
/// Returns [`TspError::EmptyInstance`] if the matrix has no points.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tour = nearest_neighbor(&dm).unwrap();
/// assert_eq!(tour.nodes(), &[0, 2, 1, 0]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Result<Tour> {
    let n = distances.size();
    if n == 0 {
        return Err(TspError::EmptyInstance);
    }

    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(0);

    let mut current = 0;
    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        // `unvisited` stays sorted, so the scan order stays ascending
        unvisited.retain(|&c| c != next);
        nodes.push(next);
        current = next;
    }
    nodes.push(0);

    Ok(Tour::new(nodes))
}
