//! Persisted tour format.
//!
//! ```text
//! index
//! 0
//! 2
//! 1
//! ```
//!
//! A header line followed by one node index per line. The closing return to
//! the origin is implied and not written.

use std::io::{BufRead, Write};

use crate::error::{Result, TspError};
use crate::models::Tour;

const HEADER: &str = "index";

/// Writes `tour` in the persisted format, omitting the closing origin.
///
/// # Examples
///
/// ```
/// use u_tsp::io::write_tour;
/// use u_tsp::models::Tour;
///
/// let mut out = Vec::new();
/// write_tour(&Tour::new(vec![0, 2, 1, 0]), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "index\n0\n2\n1\n");
/// ```
pub fn write_tour<W: Write>(tour: &Tour, mut writer: W) -> Result<()> {
    writeln!(writer, "{HEADER}")?;
    if let Some((_, open)) = tour.nodes().split_last() {
        for node in open {
            writeln!(writer, "{node}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Reads a persisted tour over `n` points and closes it.
///
/// Blank lines anywhere after the header are ignored.
///
/// # Errors
///
/// - [`TspError::InvalidData`] for a missing header, a non-numeric line, or
///   a number of indices other than `n`.
/// - [`TspError::InvalidTour`] if the indices are not `0` followed by a
///   permutation of `1..n`.
/// - [`TspError::Io`] if reading fails.
pub fn read_tour<R: BufRead>(reader: R, n: usize) -> Result<Tour> {
    let mut lines = reader.lines();

    match lines.next().transpose()? {
        Some(header) if header.trim() == HEADER => {}
        Some(other) => {
            return Err(TspError::invalid_data(format!(
                "expected header {HEADER:?}, got {:?}",
                other.trim()
            )))
        }
        None => return Err(TspError::invalid_data("empty tour file")),
    }

    let mut nodes = Vec::with_capacity(n + 1);
    for (row, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let node = line.parse::<usize>().map_err(|e| {
            TspError::invalid_data(format!("line {}: {line:?}: {e}", row + 2))
        })?;
        nodes.push(node);
    }

    if nodes.len() != n {
        return Err(TspError::invalid_data(format!(
            "expected {n} indices, found {}",
            nodes.len()
        )));
    }
    if let Some(&first) = nodes.first() {
        nodes.push(first);
    }

    let tour = Tour::new(nodes);
    tour.validate(n)?;
    Ok(tour)
}
