#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Points in the plane.
mod point;
pub use point::{Point, to_point};

/// Lines through two points and their intersections.
///
/// A [`Line`] is infinite; the segment view is only used internally when
/// interpolating between neighbouring breakpoints of a [`Plf`].
pub mod line;
pub use line::{Line, LineError, line_intersection};

/// Piecewise-linear functions and their algebra.
///
/// This module contains the [`Plf`] value type together with the pairwise
/// operations built on breakpoint matching: arithmetic, merging, and exact
/// min/max envelopes.
pub mod plf;
pub use plf::{
    DomainError, Plf, PlfError, add, match_plf, plf_list_min_max, plf_merge, plf_min_max,
    subtract,
};
