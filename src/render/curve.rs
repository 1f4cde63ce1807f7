//! Corner curves in the canonical frame.
//!
//! The canonical frame is the top-left corner of a box in screen
//! coordinates: origin at the box corner, y down, and the curve running from
//! `(0, h)` on the vertical edge to `(w, 0)` on the horizontal edge. Other
//! corners are reached by rotating with [`map_to_corner`].
//!
//! [`map_to_corner`]: super::geometry::map_to_corner

use std::collections::HashMap;

use super::bezier::{Cubic, TrimLine, line_roots};
use super::curvature::{Curvature, exponent_for};
use super::defaults::{CIRCLE_CONTROL_POINT, SUPERELLIPSE_FIT, TRIM_EPSILON};
use crate::log::debug;
use crate::types::{Point, Size};

/// How corners are approximated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurveMode {
    /// Two cubic segments per corner from the fitted approximation
    #[default]
    Precise,
    /// One cubic per corner, through the true superellipse midpoint
    Fast,
}

/// A corner curve: anchors and controls in drawing order.
#[derive(Clone, Debug, PartialEq)]
pub enum CornerCurve {
    /// One cubic segment
    Cubic([Point; 4]),
    /// Two cubic segments sharing the middle anchor
    Double([Point; 7]),
    /// Two straight lines through a joint (notch and square corners)
    Lines([Point; 3]),
}

impl CornerCurve {
    pub fn points(&self) -> &[Point] {
        match self {
            CornerCurve::Cubic(p) => p,
            CornerCurve::Double(p) => p,
            CornerCurve::Lines(p) => p,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points().len()
    }

    pub fn start(&self) -> Point {
        self.points()[0]
    }

    pub fn end(&self) -> Point {
        let points = self.points();
        points[points.len() - 1]
    }

    /// The curve as cubic segments; lines become straight cubics.
    pub fn segments(&self) -> Vec<Cubic> {
        match self {
            CornerCurve::Cubic(p) => vec![Cubic(*p)],
            CornerCurve::Double(p) => vec![
                Cubic([p[0], p[1], p[2], p[3]]),
                Cubic([p[3], p[4], p[5], p[6]]),
            ],
            CornerCurve::Lines(p) => vec![Cubic::line(p[0], p[1]), Cubic::line(p[1], p[2])],
        }
    }

    /// Apply `f` to every point
    pub fn map(&self, f: impl Fn(Point) -> Point) -> CornerCurve {
        match self {
            CornerCurve::Cubic(p) => CornerCurve::Cubic(p.map(f)),
            CornerCurve::Double(p) => CornerCurve::Double(p.map(f)),
            CornerCurve::Lines(p) => CornerCurve::Lines(p.map(f)),
        }
    }

    /// Scale a unit curve to `size`
    pub fn scaled(&self, size: Size) -> CornerCurve {
        self.map(|p| p.scaled_by(size.width, size.height))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> CornerCurve {
        self.map(|p| p.moved_by(dx, dy))
    }

    /// Keep the part of a canonical curve with `X >= x_min` and `Y >= y_min`.
    ///
    /// Canonical curves run with `X` increasing and `Y` decreasing, so the
    /// first threshold cuts the front and the second cuts the back. Returns
    /// `None` when nothing survives.
    pub fn trimmed(&self, x_min: f64, y_min: f64) -> Option<CornerCurve> {
        if x_min <= 0.0 && y_min <= 0.0 {
            return Some(self.clone());
        }
        match self {
            CornerCurve::Lines(points) => trim_polyline(points, x_min, y_min),
            _ => trim_segments(self.segments(), x_min, y_min),
        }
    }

    fn from_segments(segments: &[Cubic]) -> Option<CornerCurve> {
        match segments {
            [] => None,
            [only] => Some(CornerCurve::Cubic(only.0)),
            [first, second, ..] => {
                let [p0, p1, p2, p3] = first.0;
                let [_, p4, p5, p6] = second.0;
                Some(CornerCurve::Double([p0, p1, p2, p3, p4, p5, p6]))
            }
        }
    }
}

/// Trim a canonical curve to `X >= x` and `Y >= y`; `None` when empty.
pub fn trim_curve(curve: &CornerCurve, x: f64, y: f64) -> Option<CornerCurve> {
    curve.trimmed(x, y)
}

fn trim_segments(mut segments: Vec<Cubic>, x_min: f64, y_min: f64) -> Option<CornerCurve> {
    if x_min > 0.0 {
        let line = TrimLine::vertical(x_min);
        while let Some(first) = segments.first().copied() {
            if first.start().x >= x_min - TRIM_EPSILON {
                break;
            }
            if first.end().x <= x_min + TRIM_EPSILON {
                segments.remove(0);
                continue;
            }
            match line_roots(&first, &line).first() {
                Some(&t) => segments[0] = first.split_after(t),
                None => {
                    debug!(x_min, "no crossing with start trim line, keeping segment");
                }
            }
            break;
        }
    }

    if y_min > 0.0 {
        let line = TrimLine::horizontal(y_min);
        while let Some(last) = segments.last().copied() {
            if last.end().y >= y_min - TRIM_EPSILON {
                break;
            }
            if last.start().y <= y_min + TRIM_EPSILON {
                segments.pop();
                continue;
            }
            match line_roots(&last, &line).last() {
                Some(&t) => {
                    let index = segments.len() - 1;
                    segments[index] = last.split_before(t);
                }
                None => {
                    debug!(y_min, "no crossing with end trim line, keeping segment");
                }
            }
            break;
        }
    }

    CornerCurve::from_segments(&segments)
}

fn trim_polyline(points: &[Point; 3], x_min: f64, y_min: f64) -> Option<CornerCurve> {
    let mut points = points.to_vec();

    if x_min > 0.0 {
        while points.len() >= 2 {
            let (a, b) = (points[0], points[1]);
            if a.x >= x_min - TRIM_EPSILON {
                break;
            }
            if b.x <= x_min + TRIM_EPSILON {
                points.remove(0);
                continue;
            }
            points[0] = a.lerp(b, (x_min - a.x) / (b.x - a.x));
            break;
        }
    }

    if y_min > 0.0 {
        while points.len() >= 2 {
            let n = points.len();
            let (a, b) = (points[n - 2], points[n - 1]);
            if b.y >= y_min - TRIM_EPSILON {
                break;
            }
            if a.y <= y_min + TRIM_EPSILON {
                points.pop();
                continue;
            }
            points[n - 1] = a.lerp(b, (a.y - y_min) / (a.y - b.y));
            break;
        }
    }

    match points.as_slice() {
        [a, joint, b] => Some(CornerCurve::Lines([*a, *joint, *b])),
        [a, b] => Some(CornerCurve::Cubic(Cubic::line(*a, *b).0)),
        _ => None,
    }
}

/// Reflect a unit point across the chord from `(0, 1)` to `(1, 0)`.
#[inline]
fn reflect(p: Point) -> Point {
    Point::new(1.0 - p.y, 1.0 - p.x)
}

/// Logistic wing fraction `a` and mid-control offset `b` for `|s|`.
fn fit_params(abs_s: f64) -> (f64, f64) {
    let [p0, p1, p2, p3, p4, p5, p6] = SUPERELLIPSE_FIT;
    let slope = p0 + (p6 - p0) * 0.5 * (1.0 + (p5 * (abs_s - p1)).tanh());
    let base = 1.0 / (1.0 + (slope * p1).exp());
    let logistic = 1.0 / (1.0 + (-slope * (abs_s - p1)).exp());
    let a = (logistic - base) / (1.0 - base);
    let b = p2 * (-p3 * abs_s.powf(p4)).exp();
    (a, b)
}

/// Superellipse midpoint coordinate `0.5^(1/k)` for `|s|`.
#[inline]
fn diagonal_point(abs_s: f64) -> f64 {
    0.5_f64.powf(1.0 / exponent_for(abs_s))
}

/// Interior points of the two-segment fit in the unit canonical frame.
///
/// Returns `[control, control, mid anchor, control, control]`; the end
/// anchors are always `(0, 1)` and `(1, 0)`. The fit is expressed around the
/// arc center; positive curvatures are reflected into the canonical frame
/// and negative ones already bulge the other way.
pub fn build_canonical_curve(s: Curvature) -> [Point; 5] {
    let s = s.value();
    let abs_s = s.abs();
    let (a, b) = fit_params(abs_s);
    let m = diagonal_point(abs_s);
    let around_center = [
        Point::new(a, 1.0),
        Point::new(m - b, m + b),
        Point::new(m, m),
        Point::new(m + b, m - b),
        Point::new(1.0, a),
    ];
    if s >= 0.0 { around_center.map(reflect) } else { around_center }
}

/// One cubic whose `t = 0.5` point is the superellipse midpoint.
fn fast_curve(s: f64) -> [Point; 4] {
    let m = diagonal_point(s.abs());
    // past s ≈ 2.4 the handles reach beyond the corner rectangle; the midpoint needs them there
    let c = (8.0 * m - 4.0) / 3.0;
    let around_center = [
        Point::new(0.0, 1.0),
        Point::new(c, 1.0),
        Point::new(1.0, c),
        Point::new(1.0, 0.0),
    ];
    if s >= 0.0 { around_center.map(reflect) } else { around_center }
}

/// The classic quarter-circle cubic; scoops are its reflection.
fn circle_curve(s: f64) -> [Point; 4] {
    let c = CIRCLE_CONTROL_POINT;
    let round = [
        Point::new(0.0, 1.0),
        Point::new(0.0, c),
        Point::new(c, 0.0),
        Point::new(1.0, 0.0),
    ];
    if s >= 0.0 { round } else { round.map(reflect) }
}

/// The corner curve for `s` in the unit canonical frame.
pub fn unit_corner_curve(s: Curvature, mode: CurveMode) -> CornerCurve {
    let s = s.sanitized();
    if s.is_notch() {
        return CornerCurve::Lines([Point::new(0.0, 1.0), Point::new(1.0, 1.0), Point::new(1.0, 0.0)]);
    }
    if s.is_square() {
        return CornerCurve::Lines([Point::new(0.0, 1.0), Point::ORIGIN, Point::new(1.0, 0.0)]);
    }
    if s.is_circular() {
        return CornerCurve::Cubic(circle_curve(s.value()));
    }
    match mode {
        CurveMode::Fast => CornerCurve::Cubic(fast_curve(s.value())),
        CurveMode::Precise => {
            let [q1, q2, q3, q4, q5] = build_canonical_curve(s);
            CornerCurve::Double([Point::new(0.0, 1.0), q1, q2, q3, q4, q5, Point::new(1.0, 0.0)])
        }
    }
}

/// The corner curve for `s` scaled to `size`, in the canonical frame.
pub fn corner_curve_points(s: Curvature, size: Size, mode: CurveMode) -> CornerCurve {
    unit_corner_curve(s, mode).scaled(size)
}

/// Unit curves memoized per curvature for one assembly pass.
#[derive(Debug, Default)]
pub struct CurveCache {
    mode: CurveMode,
    curves: HashMap<u64, CornerCurve>,
}

impl CurveCache {
    pub fn new(mode: CurveMode) -> Self {
        CurveCache { mode, curves: HashMap::new() }
    }

    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    /// The unit curve for `s`, built on first use.
    pub fn unit_curve(&mut self, s: Curvature) -> &CornerCurve {
        let mode = self.mode;
        self.curves
            .entry(s.sanitized().value().to_bits())
            .or_insert_with(|| unit_corner_curve(s, mode))
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
