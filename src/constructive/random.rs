//! Random-permutation baseline tour.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, TspError};
use crate::models::Tour;

/// Builds a tour that visits `1..n` in a uniformly random order.
///
/// Useful as a reference point when comparing heuristics. The result is
/// reproducible for a seeded RNG.
///
/// # Errors
///
/// Returns [`TspError::EmptyInstance`] if `n == 0`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::constructive::random_tour;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_tour(5, &mut rng).unwrap();
/// assert!(tour.validate(5).is_ok());
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Result<Tour> {
    if n == 0 {
        return Err(TspError::EmptyInstance);
    }

    let mut inner: Vec<usize> = (1..n).collect();
    inner.shuffle(rng);

    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(0);
    nodes.extend(inner);
    nodes.push(0);
    Ok(Tour::new(nodes))
}
