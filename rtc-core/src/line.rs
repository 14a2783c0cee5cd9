use crate::Point;

/// An infinite line through two distinct points
///
/// The points are stored left to right, so `a.x <= b.x` always holds. A line
/// whose points share an x-coordinate is vertical and has no slope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    a: Point,
    b: Point,
}

impl Line {
    /// Creates the line through `a` and `b`, which must not be identical
    pub fn new(a: impl Into<Point>, b: impl Into<Point>) -> Result<Self, LineError> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(LineError::Degenerate);
        }
        Ok(Self::normalized(a, b))
    }

    // The caller guarantees a != b.
    pub(crate) fn normalized(a: Point, b: Point) -> Self {
        if b.x < a.x {
            Self { a: b, b: a }
        } else {
            Self { a, b }
        }
    }

    /// The left point
    pub fn a(&self) -> Point {
        self.a
    }

    /// The right point
    pub fn b(&self) -> Point {
        self.b
    }

    /// Whether both points share an x-coordinate
    pub fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    /// The slope, or `None` for vertical lines
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some((self.b.y - self.a.y) / (self.b.x - self.a.x))
        }
    }

    /// The point of the line at `x`, or `None` for vertical lines.
    ///
    /// The line is treated as infinite, so `x` may lie outside `[a.x, b.x]`.
    pub fn point_at_x(&self, x: f64) -> Option<Point> {
        self.slope()
            .map(|slope| Point::new(x, slope * (x - self.a.x) + self.a.y))
    }
}

/// The unique intersection of two lines.
///
/// Returns `None` for two vertical lines, and for two lines of equal slope
/// (parallel or identical).
pub fn line_intersection(l1: &Line, l2: &Line) -> Option<Point> {
    match (l1.slope(), l2.slope()) {
        (None, None) => None,
        (None, Some(_)) => l2.point_at_x(l1.a.x),
        (Some(_), None) => l1.point_at_x(l2.a.x),
        (Some(m1), Some(m2)) => {
            if m1 == m2 {
                return None;
            }
            let c1 = l1.a.y - m1 * l1.a.x;
            let c2 = l2.a.y - m2 * l2.a.x;
            l1.point_at_x((c2 - c1) / (m1 - m2))
        }
    }
}

/// The point at `x` on the segment from `a` to `b`.
///
/// # Panics
///
/// Panics if the segment is vertical. Every caller interpolates strictly
/// inside a non-vertical segment of a validated function.
pub(crate) fn interpolate(a: Point, b: Point, x: f64) -> Point {
    assert!(a.x != b.x, "interpolation on a vertical segment at x={x}");
    let line = Line::normalized(a, b);
    let slope = (line.b.y - line.a.y) / (line.b.x - line.a.x);
    Point::new(x, slope * (x - line.a.x) + line.a.y)
}

/// Errors that can occur when creating a Line
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LineError {
    /// Error when both points are identical
    #[error("a line needs two distinct points")]
    Degenerate,
}
