use super::Plf;
use crate::Point;
use crate::line::interpolate;
use itertools::Itertools;

impl Plf {
    /// The floor of the function, as a staircase.
    ///
    /// Every segment is split where it crosses an integer, and each piece
    /// takes the floor of its interior values. Steps meet with a jump.
    pub fn floored(&self) -> Self {
        self.integerized(f64::floor)
    }

    /// The ceiling of the function, as a staircase.
    ///
    /// See [`Plf::floored`].
    pub fn ceiled(&self) -> Self {
        self.integerized(f64::ceil)
    }

    fn integerized(&self, round: fn(f64) -> f64) -> Self {
        let Some(&first) = self.points.first() else {
            return Self::empty();
        };

        // (x0, x1, value) for every constant piece, left to right
        let mut pieces: Vec<(f64, f64, f64)> = Vec::new();
        for (&a, &b) in self.points.iter().tuple_windows() {
            if a.x == b.x {
                continue;
            }
            let (lo, hi) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };

            let mut bounds = vec![a.x];
            let mut k = lo.floor() + 1.0;
            let mut crossings = Vec::new();
            while k < hi.ceil() {
                crossings.push(a.x + (k - a.y) * (b.x - a.x) / (b.y - a.y));
                k += 1.0;
            }
            crossings.sort_by(f64::total_cmp);
            bounds.extend(crossings);
            bounds.push(b.x);

            for (&x0, &x1) in bounds.iter().tuple_windows() {
                let mid = interpolate(a, b, (x0 + x1) / 2.0);
                pieces.push((x0, x1, round(mid.y)));
            }
        }

        // Only jumps, or a single breakpoint
        if pieces.is_empty() {
            return Self::new_unchecked(vec![Point::new(first.x, round(first.y))]);
        }

        let mut points: Vec<Point> = Vec::with_capacity(2 * pieces.len());
        for (x0, x1, value) in pieces {
            match points.last_mut() {
                Some(last) if last.y == value => last.x = x1,
                _ => {
                    points.push(Point::new(x0, value));
                    points.push(Point::new(x1, value));
                }
            }
        }
        Self::new_unchecked(points)
    }
}
