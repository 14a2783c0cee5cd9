use crate::Point;
use crate::line::interpolate;

mod envelope;
mod matching;
mod rounding;

pub use envelope::{plf_list_min_max, plf_merge, plf_min_max};
pub use matching::{add, match_plf, subtract};

/// A piecewise-linear function given by its breakpoints
///
/// The breakpoints are ordered by non-decreasing x. Between two breakpoints
/// with different x the function is linear. Two consecutive breakpoints may
/// share an x, which encodes a jump; a third breakpoint at the same x is
/// rejected. At a jump the function takes the value of the *first* of the two
/// breakpoints (left-continuity).
///
/// The domain is `[x_start, x_end]`. The empty function has no domain and
/// reports `x_start == x_end == 0`.
///
/// Every operation returns a new function; a `Plf` is never mutated after
/// construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plf {
    points: Vec<Point>,
    min: Option<Point>,
    max: Option<Point>,
}

impl Plf {
    /// Creates a new Plf from a sequence of points, validating all constraints
    ///
    /// # Errors
    ///
    /// Returns `PlfError` if a coordinate is NaN, if the x-coordinates are not
    /// non-decreasing, or if more than two points share an x-coordinate.
    pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Result<Self, PlfError> {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();

        if points.iter().any(Point::is_nan) {
            return Err(PlfError::NaN);
        }
        if points.windows(2).any(|w| w[0].x > w[1].x) {
            return Err(PlfError::Descending);
        }
        if points
            .windows(3)
            .any(|w| w[0].x == w[1].x && w[1].x == w[2].x)
        {
            return Err(PlfError::TooManyPoints);
        }

        Ok(Self::new_unchecked(points))
    }

    /// The function without any breakpoints
    pub fn empty() -> Self {
        Self::default()
    }

    // Internal constructor for point sequences that are valid by construction.
    pub(crate) fn new_unchecked(points: Vec<Point>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].x <= w[1].x),
            "breakpoints out of order: {points:?}"
        );
        debug_assert!(
            points
                .windows(3)
                .all(|w| !(w[0].x == w[1].x && w[1].x == w[2].x)),
            "more than two breakpoints at one x: {points:?}"
        );

        // Strict comparisons keep the first occurrence on ties
        let mut iter = points.iter().copied();
        let (min, max) = match iter.next() {
            Some(first) => {
                let (min, max) = iter.fold((first, first), |(min, max), p| {
                    (
                        if p.y < min.y { p } else { min },
                        if p.y > max.y { p } else { max },
                    )
                });
                (Some(min), Some(max))
            }
            None => (None, None),
        };

        Self { points, min, max }
    }

    /// The breakpoints, in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the function and returns its breakpoints
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// The number of breakpoints
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the function has no breakpoints
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The x-coordinates of the breakpoints
    pub fn x_values(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// The y-coordinates of the breakpoints
    pub fn y_values(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// The left end of the domain, `0` for the empty function
    pub fn x_start(&self) -> f64 {
        self.points.first().map_or(0.0, |p| p.x)
    }

    /// The right end of the domain, `0` for the empty function
    pub fn x_end(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.x)
    }

    /// The breakpoint with the smallest y (the first one on ties)
    pub fn min(&self) -> Option<Point> {
        self.min
    }

    /// The breakpoint with the largest y (the first one on ties)
    pub fn max(&self) -> Option<Point> {
        self.max
    }

    /// Restricts the function to `[x0, x_end]`.
    ///
    /// A breakpoint is interpolated at `x0` if none exists there. The result is
    /// empty if `x0` lies beyond the domain.
    pub fn start_truncated(&self, x0: f64) -> Self {
        if self.is_empty() || self.x_start() >= x0 {
            return self.clone();
        }
        match self.points.iter().position(|p| p.x >= x0) {
            Some(i) => {
                let mut points = Vec::with_capacity(self.len() - i + 1);
                if self.points[i].x > x0 {
                    // x_start < x0 guarantees i > 0
                    points.push(interpolate(self.points[i - 1], self.points[i], x0));
                }
                points.extend_from_slice(&self.points[i..]);
                Self::new_unchecked(points)
            }
            None => Self::empty(),
        }
    }

    /// Restricts the function to `[x_start, x1]`.
    ///
    /// A breakpoint is interpolated at `x1` if none exists there. The result is
    /// empty if `x1` lies before the domain.
    pub fn end_truncated(&self, x1: f64) -> Self {
        if self.is_empty() || self.x_end() <= x1 {
            return self.clone();
        }
        match self.points.iter().rposition(|p| p.x <= x1) {
            Some(i) => {
                let mut points = Vec::with_capacity(i + 2);
                points.extend_from_slice(&self.points[..=i]);
                if self.points[i].x < x1 {
                    // x_end > x1 guarantees a successor
                    points.push(interpolate(self.points[i], self.points[i + 1], x1));
                }
                Self::new_unchecked(points)
            }
            None => Self::empty(),
        }
    }

    /// Mirrors and/or shifts the function along the x-axis.
    ///
    /// Every breakpoint `(x, y)` becomes `(offset - x, y)` when mirroring, and
    /// `(x + offset, y)` otherwise. Mirroring reverses the breakpoint order, so
    /// at a jump the value that was on the right ends up first.
    pub fn transformed(&self, mirror: bool, offset: f64) -> Self {
        let points = if mirror {
            self.points
                .iter()
                .rev()
                .map(|p| Point::new(-p.x + offset, p.y))
                .collect()
        } else {
            self.points
                .iter()
                .map(|p| Point::new(p.x + offset, p.y))
                .collect()
        };
        Self::new_unchecked(points)
    }

    /// Shifts every breakpoint by `delta` in both coordinates
    pub fn add_point(&self, delta: impl Into<Point>) -> Self {
        let delta = delta.into();
        Self::new_unchecked(self.points.iter().map(|&p| p + delta).collect())
    }

    /// Negates every breakpoint value
    pub fn negated(&self) -> Self {
        Self::new_unchecked(self.points.iter().map(|p| Point::new(p.x, -p.y)).collect())
    }

    /// Evaluates the function at `x`.
    ///
    /// At a jump the first of the two breakpoint values is returned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the function is empty or `x` lies outside of
    /// `[x_start, x_end]`.
    pub fn get_value(&self, x: f64) -> Result<f64, DomainError> {
        if self.is_empty() {
            return Err(DomainError::Empty);
        }
        if !(self.x_start() <= x && x <= self.x_end()) {
            return Err(DomainError::OutOfDomain {
                x,
                start: self.x_start(),
                end: self.x_end(),
            });
        }
        for (i, p) in self.points.iter().enumerate() {
            if p.x == x {
                return Ok(p.y);
            } else if p.x > x {
                // x >= x_start guarantees i > 0
                return Ok(interpolate(self.points[i - 1], *p, x).y);
            }
        }
        unreachable!("x={x} lies within the domain but past every breakpoint")
    }

    /// Evaluates the function at `steps` evenly spaced positions covering
    /// `[start, stop]`, both ends included.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any position lies outside of the domain.
    pub fn sample(&self, start: f64, stop: f64, steps: usize) -> Result<Vec<Point>, DomainError> {
        let width = stop - start;
        (0..steps)
            .map(|i| {
                let x = if steps == 1 {
                    start
                } else if i + 1 == steps {
                    stop
                } else {
                    start + width * (i as f64) / ((steps - 1) as f64)
                };
                self.get_value(x).map(|y| Point::new(x, y))
            })
            .collect()
    }

    /// Removes duplicate consecutive breakpoints and breakpoints lying exactly
    /// on the segment between their neighbours. Jumps are preserved.
    pub fn simplified(&self) -> Self {
        let mut stack: Vec<Point> = Vec::with_capacity(self.len());
        for &p in &self.points {
            if stack.last() == Some(&p) {
                continue;
            }
            while let [.., prev, mid] = stack[..] {
                if mid.is_collinear(&prev, &p) {
                    stack.pop();
                } else {
                    break;
                }
            }
            stack.push(p);
        }
        Self::new_unchecked(stack)
    }
}

impl TryFrom<Vec<Point>> for Plf {
    type Error = PlfError;

    fn try_from(value: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Plf> for Vec<Point> {
    fn from(value: Plf) -> Self {
        value.points
    }
}

/// Errors that can occur when creating or validating a Plf
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PlfError {
    /// Error when any coordinate value is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when the points are not ordered by ascending x
    #[error("points are not ordered by ascending x")]
    Descending,
    /// Error when more than two points share an x-coordinate
    #[error("more than two points share an x-coordinate")]
    TooManyPoints,
}

/// Errors that can occur when evaluating a Plf
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Error when evaluating a function without breakpoints
    #[error("cannot evaluate an empty function")]
    Empty,
    /// Error when evaluating outside of the domain
    #[error("x={x} lies outside of the domain [{start}, {end}]")]
    OutOfDomain {
        /// The requested position
        x: f64,
        /// The start of the domain
        start: f64,
        /// The end of the domain
        end: f64,
    },
}
