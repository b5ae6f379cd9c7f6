//! Tour persistence.

mod tour_file;

pub use tour_file::{read_tour, write_tour};
