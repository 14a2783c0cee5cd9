use crate::ConvType;
use itertools::Itertools;
use rtc_core::{Plf, Point, add, plf_list_min_max, subtract};
use tracing::{Level, event};

/// The intermediate functions and the scalar result of a convolution at a
/// single offset
#[derive(Clone, Debug, PartialEq)]
pub struct ConvResult {
    /// `a` after mirroring (convolutions) or shifting (deconvolutions)
    pub transformed_a: Plf,
    /// The sum (convolutions) or difference (deconvolutions) of the
    /// transformed `a` and `b`, restricted to the admissible range
    pub sum: Plf,
    /// The extremal breakpoint of `sum`, or `None` if the operands do not
    /// overlap at this offset
    pub result: Option<Point>,
}

/// Evaluates the convolution of `a` and `b` at the offset `delta`.
///
/// For convolutions, `a` is mirrored about `delta` and added to `b`, and the
/// sum is restricted to `[0, delta]`. For deconvolutions, `a` is shifted left
/// by `delta`, `b` is subtracted, and the difference is restricted to
/// `[0, ∞)`. The result is the minimal or maximal breakpoint of that function,
/// depending on `conv_type`.
pub fn conv_at_x(a: &Plf, b: &Plf, delta: f64, conv_type: ConvType) -> ConvResult {
    let (transformed_a, sum) = if conv_type.mirrors() {
        let transformed_a = a.transformed(true, delta);
        let sum = add(&transformed_a, b)
            .start_truncated(0.0)
            .end_truncated(delta);
        (transformed_a, sum)
    } else {
        let transformed_a = a.transformed(false, -delta);
        let sum = subtract(&transformed_a, b).start_truncated(0.0);
        (transformed_a, sum)
    };

    let result = if conv_type.computes_min() {
        sum.min()
    } else {
        sum.max()
    };
    event!(Level::TRACE, %conv_type, delta, ?result, "convolution at offset");

    ConvResult {
        transformed_a,
        sum,
        result,
    }
}

/// The ordered, de-duplicated offsets at which a breakpoint of `a` aligns with
/// a breakpoint of `b`.
///
/// These are `a.x + b.x` for convolutions and `a.x - b.x` for deconvolutions.
/// With a `start`, offsets below it are dropped. If the offsets straddle
/// `start`, it is inserted as the first offset; if every offset lies below
/// `start` the list is empty. `stop` works the same way from the other end.
pub fn get_critical_points(
    a: &Plf,
    b: &Plf,
    conv_type: ConvType,
    start: Option<f64>,
    stop: Option<f64>,
) -> Vec<f64> {
    let mirrors = conv_type.mirrors();
    let mut points: Vec<f64> = a
        .x_values()
        .cartesian_product(b.x_values())
        .map(|(ax, bx)| if mirrors { bx + ax } else { ax - bx })
        .sorted_by(f64::total_cmp)
        .dedup()
        .collect();

    if let Some(start) = start {
        points = window_start(points, start);
    }
    if let Some(stop) = stop {
        points = window_stop(points, stop);
    }
    points
}

fn window_start(points: Vec<f64>, start: f64) -> Vec<f64> {
    let straddles = points.first().is_some_and(|&x| x < start);
    let mut kept: Vec<f64> = points.into_iter().filter(|&x| x >= start).collect();
    if straddles && kept.first().is_some_and(|&x| x > start) {
        kept.insert(0, start);
    }
    kept
}

fn window_stop(points: Vec<f64>, stop: f64) -> Vec<f64> {
    let straddles = points.last().is_some_and(|&x| x > stop);
    let mut kept: Vec<f64> = points.into_iter().filter(|&x| x <= stop).collect();
    if straddles && kept.last().is_some_and(|&x| x < stop) {
        kept.push(stop);
    }
    kept
}

/// The convolution of `a` and `b` as a function of the offset.
///
/// The result is exact and spans the (optionally windowed) critical points.
/// It is empty when there are no critical points, in particular when either
/// operand is empty.
///
/// Where the convolution jumps, both one-sided values are kept at the same
/// offset and [`Plf::get_value`] returns the left one. [`conv_at_x`] at that
/// exact offset may give the other one.
pub fn get_full_conv(
    a: &Plf,
    b: &Plf,
    conv_type: ConvType,
    start: Option<f64>,
    stop: Option<f64>,
) -> Plf {
    let critical_points = get_critical_points(a, b, conv_type, start, stop);
    let (Some(&first), Some(&last)) = (critical_points.first(), critical_points.last()) else {
        return Plf::empty();
    };

    let mut candidates = if conv_type.mirrors() {
        convolution_candidates(a, b)
    } else {
        deconvolution_candidates(a, b)
    };
    candidates.retain(|candidate| !candidate.is_empty());

    event!(
        Level::DEBUG,
        %conv_type,
        critical_points = critical_points.len(),
        candidates = candidates.len(),
        "computing full convolution"
    );

    let envelope = plf_list_min_max(&candidates, conv_type.computes_min());
    let result = envelope.start_truncated(first).end_truncated(last);
    event!(Level::DEBUG, %conv_type, breakpoints = result.len(), "full convolution done");
    result
}

// Every value the extremum of `conv_at_x` can take, as a function of the
// offset. The extremum over [0, Δ] sits at a breakpoint of `b`, at a (mirrored)
// breakpoint of `a`, or at the window boundary s = 0 or s = Δ.
fn convolution_candidates(a: &Plf, b: &Plf) -> Vec<Plf> {
    let mut candidates = Vec::with_capacity(a.len() + b.len() + 2);
    for &q in b.points().iter().filter(|q| q.x >= 0.0) {
        candidates.push(a.add_point(q).start_truncated(q.x));
    }
    for &q in a.points().iter().filter(|q| q.x >= 0.0) {
        candidates.push(b.add_point(q).start_truncated(q.x));
    }
    if let Ok(y) = b.get_value(0.0) {
        candidates.push(a.add_point((0.0, y)).start_truncated(0.0));
    }
    if let Ok(y) = a.get_value(0.0) {
        candidates.push(b.add_point((0.0, y)).start_truncated(0.0));
    }
    candidates
}

// Same as above for the difference over s ≥ 0, which has no upper boundary.
fn deconvolution_candidates(a: &Plf, b: &Plf) -> Vec<Plf> {
    let mut candidates = Vec::with_capacity(a.len() + b.len() + 1);
    for &q in b.points().iter().filter(|q| q.x >= 0.0) {
        candidates.push(a.add_point(-q));
    }
    let b_admissible = b.start_truncated(0.0);
    for &q in a.points() {
        let mirrored = b_admissible.transformed(true, q.x).negated();
        candidates.push(mirrored.add_point((0.0, q.y)));
    }
    if let Ok(y) = b.get_value(0.0) {
        candidates.push(a.add_point((0.0, -y)));
    }
    candidates
}
