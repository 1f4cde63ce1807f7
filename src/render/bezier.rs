//! Cubic Bezier segments: evaluation, exact subdivision and line intersection.
//!
//! Intersection aligns the curve so the clip line becomes the x-axis, which
//! turns the problem into finding the roots of the aligned curve's y
//! polynomial. The roots come from the depressed-cubic (Cardano) form.

use std::f64::consts::TAU;

use glam::DVec2;

use super::defaults::{ROOT_EPSILON, ROOT_TOLERANCE};
use crate::types::Point;

/// `a` and `b` differ by at most `eps`
#[inline]
pub fn approximately(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// A single cubic segment: anchor, control, control, anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic(pub [Point; 4]);

impl Cubic {
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Cubic([p0, p1, p2, p3])
    }

    /// A straight segment expressed as a cubic
    pub fn line(from: Point, to: Point) -> Self {
        Cubic([from, from.lerp(to, 1.0 / 3.0), from.lerp(to, 2.0 / 3.0), to])
    }

    #[inline]
    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.0[0]
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.0[3]
    }

    /// Apply `f` to every point
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Cubic(self.0.map(f))
    }

    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let [p0, p1, p2, p3] = self.0.map(DVec2::from);
        let v = p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t);
        v.into()
    }

    /// de Casteljau subdivision into `[0, t]` and `[t, 1]`.
    pub fn split(&self, t: f64) -> (Cubic, Cubic) {
        let [p0, p1, p2, p3] = self.0.map(DVec2::from);
        let p01 = p0.lerp(p1, t);
        let p12 = p1.lerp(p2, t);
        let p23 = p2.lerp(p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let p0123 = p012.lerp(p123, t);
        (
            Cubic([p0.into(), p01.into(), p012.into(), p0123.into()]),
            Cubic([p0123.into(), p123.into(), p23.into(), p3.into()]),
        )
    }

    /// The part of the segment before `t`
    pub fn split_before(&self, t: f64) -> Cubic {
        self.split(t).0
    }

    /// The part of the segment after `t`
    pub fn split_after(&self, t: f64) -> Cubic {
        self.split(t).1
    }

    /// Control points in a frame where `line` is the x-axis.
    pub fn aligned_to(&self, line: &TrimLine) -> Cubic {
        let origin = DVec2::from(line.p1);
        let dir = DVec2::from(line.p2) - origin;
        let rotation = DVec2::from_angle(-dir.y.atan2(dir.x));
        self.map(|p| rotation.rotate(DVec2::from(p) - origin).into())
    }
}

/// An axis-aligned clip line through two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrimLine {
    pub p1: Point,
    pub p2: Point,
}

impl TrimLine {
    pub fn new(p1: Point, p2: Point) -> Self {
        TrimLine { p1, p2 }
    }

    /// The line `X = x`
    pub fn vertical(x: f64) -> Self {
        TrimLine::new(Point::new(x, 0.0), Point::new(x, 1.0))
    }

    /// The line `Y = y`
    pub fn horizontal(y: f64) -> Self {
        TrimLine::new(Point::new(0.0, y), Point::new(1.0, y))
    }

    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        TrimLine::new(f(self.p1), f(self.p2))
    }
}

/// All parameters in `[0, 1]` where `cubic` crosses `line`, ascending.
pub fn line_roots(cubic: &Cubic, line: &TrimLine) -> Vec<f64> {
    let aligned = cubic.aligned_to(line);
    let [pa, pb, pc, pd] = aligned.0.map(|p| p.y);
    cubic_roots(pa, pb, pc, pd)
}

/// The first parameter where `cubic` crosses `line`, if any.
pub fn intersect_with_line(cubic: &Cubic, line: &TrimLine) -> Option<f64> {
    line_roots(cubic, line).first().copied()
}

/// Roots in `[0, 1]` of the Bernstein cubic with coefficients `pa..pd`.
fn cubic_roots(pa: f64, pb: f64, pc: f64, pd: f64) -> Vec<f64> {
    let d = -pa + 3.0 * pb - 3.0 * pc + pd;
    let a = 3.0 * pa - 6.0 * pb + 3.0 * pc;
    let b = -3.0 * pa + 3.0 * pb;
    let c = pa;

    let scale = pa.abs().max(pb.abs()).max(pc.abs()).max(pd.abs());
    if scale == 0.0 {
        // the whole segment lies on the line
        return Vec::new();
    }
    let eps = ROOT_EPSILON * scale;

    let candidates = if approximately(d, 0.0, eps) {
        if approximately(a, 0.0, eps) {
            if approximately(b, 0.0, eps) {
                Vec::new()
            } else {
                vec![-c / b]
            }
        } else {
            let mut disc = b * b - 4.0 * a * c;
            if disc < 0.0 && disc > -eps * scale {
                disc = 0.0;
            }
            if disc < 0.0 {
                Vec::new()
            } else {
                let q = disc.sqrt();
                vec![(q - b) / (2.0 * a), (-b - q) / (2.0 * a)]
            }
        }
    } else {
        depressed_cubic_roots(a / d, b / d, c / d)
    };

    let mut roots: Vec<f64> = candidates
        .into_iter()
        .filter(|t| *t >= -ROOT_TOLERANCE && *t <= 1.0 + ROOT_TOLERANCE)
        .map(|t| t.clamp(0.0, 1.0))
        .collect();
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|x, y| approximately(*x, *y, ROOT_TOLERANCE));
    roots
}

/// Real roots of `t^3 + a t^2 + b t + c` via Cardano's method.
fn depressed_cubic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let p = (3.0 * b - a * a) / 3.0;
    let p3 = p / 3.0;
    let q = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 27.0;
    let q2 = q / 2.0;
    let discriminant = q2 * q2 + p3 * p3 * p3;
    let shift = a / 3.0;

    if approximately(discriminant, 0.0, ROOT_EPSILON) {
        // one single and one double root
        let u1 = if q2 < 0.0 { (-q2).cbrt() } else { -q2.cbrt() };
        return vec![2.0 * u1 - shift, -u1 - shift];
    }

    if discriminant < 0.0 {
        // three real roots
        let mp3 = -p / 3.0;
        let r = (mp3 * mp3 * mp3).sqrt();
        let cosphi = (-q / (2.0 * r)).clamp(-1.0, 1.0);
        let phi = cosphi.acos();
        let t1 = 2.0 * r.cbrt();
        return vec![
            t1 * (phi / 3.0).cos() - shift,
            t1 * ((phi + TAU) / 3.0).cos() - shift,
            t1 * ((phi + 2.0 * TAU) / 3.0).cos() - shift,
        ];
    }

    let sd = discriminant.sqrt();
    let u1 = (sd - q2).cbrt();
    let v1 = (sd + q2).cbrt();
    vec![u1 - v1 - shift]
}
