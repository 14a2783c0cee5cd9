use super::{Plf, match_plf};
use crate::Point;
use itertools::Itertools;
use tracing::{Level, event};

/// Overlays `a` on top of `b`.
///
/// The result equals `a` on `a`'s domain and `b` wherever only `b` is defined.
/// At a junction the result jumps between the two functions. If the domains
/// are disjoint, the gap between them is bridged by a single segment.
pub fn plf_merge(a: &Plf, b: &Plf) -> Plf {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }

    let mut inner: &[Point] = a.points();
    let mut points: Vec<Point> = Vec::with_capacity(a.len() + b.len() + 2);

    if b.x_start() < a.x_start() {
        points.extend_from_slice(b.end_truncated(a.x_start()).points());
        // only the right value of a leading jump of `a` survives
        if let [first, second, ..] = inner {
            if first.x == second.x {
                inner = &inner[1..];
            }
        }
    }

    let mut tail: Vec<Point> = Vec::new();
    if b.x_end() > a.x_end() {
        // only the left value of a trailing jump of `a` survives
        if let [.., second_last, last] = inner {
            if second_last.x == last.x {
                inner = &inner[..inner.len() - 1];
            }
        }
        tail = b.start_truncated(a.x_end()).into_points();
        if let [first, second, ..] = tail[..] {
            if first.x == second.x {
                tail.remove(0);
            }
        }
    }

    points.extend_from_slice(inner);
    points.extend(tail);
    points.dedup();

    // A lone breakpoint of `a` squeezed into a junction would leave three
    // breakpoints at one x; the middle one is absorbed.
    let mut merged: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if let [.., first, second] = merged[..] {
            if first.x == p.x && second.x == p.x {
                merged.pop();
            }
        }
        merged.push(p);
    }
    merged.dedup();

    Plf::new_unchecked(merged)
}

/// The pointwise minimum (or maximum) of two functions on their common domain.
///
/// Exact crossings are inserted wherever the two functions swap order within
/// a segment. On ties the breakpoint of `a` is kept. The result is simplified.
pub fn plf_min_max(a: &Plf, b: &Plf, compute_min: bool) -> Plf {
    let (a, b) = match_plf(a, b);
    let (pa, pb) = (a.points(), b.points());
    let (Some(&a0), Some(&b0)) = (pa.first(), pb.first()) else {
        return Plf::empty();
    };

    let pick = |p: Point, q: Point| {
        let keep_p = if compute_min { p.y <= q.y } else { p.y >= q.y };
        if keep_p { p } else { q }
    };

    let mut points = Vec::with_capacity(2 * pa.len());
    points.push(pick(a0, b0));

    for ((p0, p1), (q0, q1)) in pa.iter().tuple_windows().zip(pb.iter().tuple_windows()) {
        if p0.x < p1.x {
            let d0 = p0.y - q0.y;
            let d1 = p1.y - q1.y;
            if (d0 < 0.0 && d1 > 0.0) || (d0 > 0.0 && d1 < 0.0) {
                // rounding may push the crossing onto an endpoint, where it
                // would add a third breakpoint next to a jump
                let x = p0.x + (p1.x - p0.x) * (d0 / (d0 - d1));
                if p0.x < x && x < p1.x {
                    let y = p0.y + (p1.y - p0.y) * ((x - p0.x) / (p1.x - p0.x));
                    points.push(Point::new(x, y));
                }
            }
        }
        points.push(pick(*p1, *q1));
    }

    Plf::new_unchecked(points).simplified()
}

/// The pointwise minimum (or maximum) envelope of a list of functions.
///
/// The functions are folded in order of their `x_start`, so that every step
/// meets a running envelope whose domain it overlaps or touches. On the common
/// domain of the running envelope and the next function the exact min/max is
/// taken, with ties resolved in favour of the earlier operand. Outside of it,
/// whichever function is defined contributes. If the union of the domains has
/// a gap, it is bridged as in [`plf_merge`]. The result is simplified. An
/// empty list gives the empty function.
pub fn plf_list_min_max(plfs: &[Plf], compute_min: bool) -> Plf {
    event!(
        Level::DEBUG,
        count = plfs.len(),
        compute_min,
        "envelope of functions"
    );

    let mut sorted = plfs
        .iter()
        .sorted_by(|a, b| a.x_start().total_cmp(&b.x_start()));
    let Some(first) = sorted.next() else {
        return Plf::empty();
    };
    sorted
        .fold(first.clone(), |acc, next| {
            if !acc.is_empty() && next.x_start() > acc.x_end() {
                event!(
                    Level::WARN,
                    from = acc.x_end(),
                    to = next.x_start(),
                    "bridging a gap between envelope domains"
                );
            }
            let envelope = plf_min_max(&acc, next, compute_min);
            plf_merge(&envelope, &plf_merge(&acc, next))
        })
        .simplified()
}
