use std::ops::{Add, Neg, Sub};

/// A coordinate in the plane, used as a breakpoint of piecewise-linear functions
///
/// Equality is exact: two points are equal only if both coordinates compare
/// equal as `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// The abscissa
    pub x: f64,
    /// The ordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether either coordinate is NaN
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Whether `self` lies exactly on the line through `prev` and `next`.
    ///
    /// Uses the perp-dot product, so no division takes place and the check is
    /// exact for representable inputs.
    pub fn is_collinear(&self, prev: &Self, next: &Self) -> bool {
        (self.x - prev.x) * (next.y - prev.y) == (self.y - prev.y) * (next.x - prev.x)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}

/// Converts a coordinate pair (or a point) into a [`Point`].
///
/// This is the single conversion step for callers holding raw `(x, y)` data.
pub fn to_point(value: impl Into<Point>) -> Point {
    value.into()
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}
