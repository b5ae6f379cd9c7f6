//! Planar point type.

use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// Points are indexed by their position in the instance; index 0 is the
/// tour origin.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Which side of the directed line `from → to` this point lies on.
    ///
    /// Positive when `from, to, self` turn counter-clockwise, negative when
    /// clockwise, zero when the three points are collinear.
    pub fn orientation(&self, from: &Point, to: &Point) -> f64 {
        (to.x - from.x) * (self.y - from.y) - (to.y - from.y) * (self.x - from.x)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Returns `true` if segments `a–b` and `c–d` properly cross.
///
/// Each segment's endpoints must lie strictly on opposite sides of the
/// other segment's line. Touching at an endpoint or overlapping collinearly
/// does not count.
pub fn segments_cross(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    let cd_straddles_ab = c.orientation(a, b) * d.orientation(a, b) < 0.0;
    let ab_straddles_cd = a.orientation(c, d) * b.orientation(c, d) < 0.0;
    cd_straddles_ab && ab_straddles_cd
}
