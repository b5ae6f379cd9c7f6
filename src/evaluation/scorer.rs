//! Tour length scoring.

use crate::distance::DistanceMatrix;

/// Sums the distances between consecutive entries of `tour`.
///
/// Every strategy reports its length through this function, so scores are
/// comparable across solvers. Sequences shorter than two entries score 0.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::tour_length;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((tour_length(&[0, 1, 2, 3, 0], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    tour.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}
