use super::Plf;
use crate::Point;
use crate::line::interpolate;
use std::ops;

/// Aligns the breakpoints of two functions.
///
/// Both functions are restricted to their common domain, and each receives an
/// interpolated breakpoint wherever the other one has a breakpoint. The two
/// results have the same number of breakpoints with identical x-coordinates.
/// If the domains do not overlap, both results are empty.
///
/// # Panics
///
/// Panics if the merge runs out of breakpoints on one side while the other
/// still has breakpoints beyond the last aligned x. This cannot happen for
/// valid inputs.
pub fn match_plf(a: &Plf, b: &Plf) -> (Plf, Plf) {
    if a.is_empty() || b.is_empty() {
        return (Plf::empty(), Plf::empty());
    }

    // The second truncation of `b` is needed when `a` was already narrower
    let a = a.start_truncated(b.x_start()).end_truncated(b.x_end());
    if a.is_empty() {
        return (Plf::empty(), Plf::empty());
    }
    let b = b.start_truncated(a.x_start()).end_truncated(a.x_end());
    if b.is_empty() {
        return (Plf::empty(), Plf::empty());
    }

    // A single x: repeat the lone breakpoint to pair with the other side
    if a.len() == 1 {
        let points = vec![a.points[0]; b.len()];
        return (Plf::new_unchecked(points), b);
    }
    if b.len() == 1 {
        let points = vec![b.points[0]; a.len()];
        return (a, Plf::new_unchecked(points));
    }

    let (pa, pb) = (a.points(), b.points());
    let capacity = pa.len() + pb.len();
    let mut na: Vec<Point> = Vec::with_capacity(capacity);
    let mut nb: Vec<Point> = Vec::with_capacity(capacity);
    na.push(pa[0]);
    nb.push(pb[0]);

    let (mut i, mut j) = (1, 1);
    loop {
        // `na` and `nb` are never empty, so the fallbacks are never used
        let last_a = na.last().copied().unwrap_or(pa[0]);
        let last_b = nb.last().copied().unwrap_or(pb[0]);

        match (pa.get(i), pb.get(j)) {
            (Some(&p), Some(&q)) => {
                if p.x == q.x {
                    na.push(p);
                    nb.push(q);
                    i += 1;
                    j += 1;
                } else if p.x < q.x {
                    na.push(p);
                    nb.push(interpolate(last_b, q, p.x));
                    i += 1;
                } else {
                    na.push(interpolate(last_a, p, q.x));
                    nb.push(q);
                    j += 1;
                }
            }
            // Only a trailing jump may remain on one side
            (Some(&p), None) => {
                assert!(
                    p.x == last_a.x,
                    "breakpoint matching exhausted the second function early at x={}",
                    p.x
                );
                na.push(p);
                nb.push(last_b);
                i += 1;
            }
            (None, Some(&q)) => {
                assert!(
                    q.x == last_b.x,
                    "breakpoint matching exhausted the first function early at x={}",
                    q.x
                );
                na.push(last_a);
                nb.push(q);
                j += 1;
            }
            (None, None) => break,
        }
    }

    (Plf::new_unchecked(na), Plf::new_unchecked(nb))
}

// Applies `op` to the y-values of the matched functions
fn combine(a: &Plf, b: &Plf, op: impl Fn(f64, f64) -> f64) -> Plf {
    let (a, b) = match_plf(a, b);
    Plf::new_unchecked(
        a.points
            .iter()
            .zip(b.points.iter())
            .map(|(p, q)| Point::new(p.x, op(p.y, q.y)))
            .collect(),
    )
}

/// The pointwise sum of two functions on their common domain
pub fn add(a: &Plf, b: &Plf) -> Plf {
    combine(a, b, |y1, y2| y1 + y2)
}

/// The pointwise difference `a - b` on the common domain
pub fn subtract(a: &Plf, b: &Plf) -> Plf {
    combine(a, b, |y1, y2| y1 - y2)
}

impl ops::Add for &Plf {
    type Output = Plf;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl ops::Sub for &Plf {
    type Output = Plf;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}
