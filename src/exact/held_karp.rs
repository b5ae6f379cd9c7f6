//! Held–Karp subset dynamic program.
//!
//! # Algorithm
//!
//! A state `(mask, node)` means "the points in `mask` have been visited and
//! we stand at `node`". Its value is the cheapest way to finish the tour:
//!
//! ```text
//! cost[mask][node] = min over next ∉ mask of d(node, next) + cost[mask | next][next]
//! cost[full][0]    = 0
//! ```
//!
//! The origin's bit is only set by the closing move back to the origin, so
//! the terminal state is the all-ones mask at node 0 and the answer is
//! `cost[∅][0]`. Every cell depends on masks with strictly more bits set,
//! so masks are filled in descending numeric order.
//!
//! # Complexity
//!
//! O(2ⁿ · n²) time, O(2ⁿ · n) space.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;
use crate::models::{Strategy, Tour, TspSolution};

/// Marks a state with no recorded successor.
const NO_CHOICE: u8 = u8::MAX;

/// Bytes per DP state: one cost and one choice entry.
const CELL_BYTES: usize = std::mem::size_of::<f64>() + std::mem::size_of::<u8>();

/// Number of DP cells for `n` points, if it is addressable at all.
fn table_cells(n: usize) -> Option<usize> {
    let cells = 1usize.checked_shl(u32::try_from(n).ok()?)?.checked_mul(n)?;
    let bytes = cells.checked_mul(CELL_BYTES)?;
    (bytes <= isize::MAX as usize).then_some(cells)
}

/// Largest instance whose tables fit in the address space.
fn addressable_nodes() -> usize {
    (1..usize::BITS as usize)
        .take_while(|&n| table_cells(n).is_some())
        .last()
        .unwrap_or(0)
}

/// Allocates a table without aborting when memory is unavailable.
fn try_table<T: Clone>(cells: usize, fill: T) -> Option<Vec<T>> {
    let mut table = Vec::new();
    table.try_reserve_exact(cells).ok()?;
    table.resize(cells, fill);
    Some(table)
}

/// Exact solver owning its cost and choice tables.
///
/// Tables are allocated in [`HeldKarp::new`] and dropped with the solver.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::exact::HeldKarp;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let solution = HeldKarp::new(&dm, 20).unwrap().solve().unwrap();
/// assert!((solution.length() - 4.0).abs() < 1e-10);
/// assert_eq!(solution.tour().nodes(), &[0, 1, 2, 3, 0]);
/// ```
pub struct HeldKarp<'a> {
    distances: &'a DistanceMatrix,
    n: usize,
    cost: Vec<f64>,
    choice: Vec<u8>,
}

impl<'a> HeldKarp<'a> {
    /// Allocates the DP tables for `distances`.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyInstance`] if the matrix has no points.
    /// - [`TspError::TooManyNodes`] if the instance exceeds `max_nodes`, if
    ///   its tables would not fit in the address space, or if the tables
    ///   cannot be allocated. Nothing stays allocated in those cases.
    pub fn new(distances: &'a DistanceMatrix, max_nodes: usize) -> Result<Self> {
        let n = distances.size();
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }
        let max = max_nodes.min(addressable_nodes());
        if n > max {
            return Err(TspError::TooManyNodes { nodes: n, max });
        }
        let cells = table_cells(n).ok_or(TspError::TooManyNodes { nodes: n, max })?;

        log::debug!("held_karp: allocate n={n} cells={cells}");

        let (Some(cost), Some(choice)) = (
            try_table(cells, f64::INFINITY),
            try_table(cells, NO_CHOICE),
        ) else {
            log::warn!("held_karp: allocation failed n={n} bytes={}", cells * CELL_BYTES);
            return Err(TspError::TooManyNodes { nodes: n, max: n - 1 });
        };

        Ok(Self {
            distances,
            n,
            cost,
            choice,
        })
    }

    /// Runs the DP and reconstructs the optimal tour.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidData`] if no finite tour exists, which
    /// only happens when the distance matrix contains NaN or infinite
    /// entries.
    pub fn solve(mut self) -> Result<TspSolution> {
        self.fill();

        let optimum = self.cost[0];
        let tour = self.reconstruct()?;
        let length = tour_length(tour.nodes(), self.distances);
        log::debug!("held_karp: done n={} dp_optimum={optimum} length={length}", self.n);

        Ok(TspSolution::new(Strategy::Exact, tour, length))
    }

    fn fill(&mut self) {
        let n = self.n;
        let full = (1usize << n) - 1;
        self.cost[full * n] = 0.0;

        for mask in (0..full).rev() {
            for now in 0..n {
                if now != 0 && mask & (1 << now) == 0 {
                    continue;
                }
                let cell = mask * n + now;
                for next in 0..n {
                    let bit = 1 << next;
                    if mask & bit != 0 {
                        continue;
                    }
                    let candidate =
                        self.cost[(mask | bit) * n + next] + self.distances.get(now, next);
                    if candidate < self.cost[cell] {
                        self.cost[cell] = candidate;
                        self.choice[cell] = next as u8;
                    }
                }
            }
        }
    }

    fn reconstruct(&self) -> Result<Tour> {
        let n = self.n;
        let mut nodes = Vec::with_capacity(n + 1);
        nodes.push(0);

        let mut mask = 0usize;
        let mut now = 0usize;
        for _ in 0..n {
            let next = self.choice[mask * n + now];
            if next == NO_CHOICE {
                return Err(TspError::invalid_data(
                    "no finite tour: distance matrix has non-finite entries",
                ));
            }
            let next = usize::from(next);
            nodes.push(next);
            mask |= 1 << next;
            now = next;
        }
        Ok(Tour::new(nodes))
    }
}
