//! The curvature parameter `s` and the superellipse family it selects.
//!
//! A corner with curvature `s` follows `x^k + y^k = 1` with `k = 2^s`:
//!
//! | s    | k     | shape                          |
//! |------|-------|--------------------------------|
//! | -∞   | 0     | notch (cut straight in)        |
//! | -1   | 1/2   | scoop (concave quarter circle) |
//! | 0    | 1     | bevel (straight diagonal)      |
//! | 1    | 2     | round (quarter circle)         |
//! | 2    | 4     | squircle                       |
//! | +∞   | ∞     | square                         |
//!
//! Curves for `s` and `-s` mirror each other across the corner's chord.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;

use super::defaults::{NOTCH_EXPONENT, ROUND_TOLERANCE, SQUARE_EXPONENT};
use crate::types::{NumericError, Point, Size};

/// Superellipse exponent for a curvature: `k = 2^s`.
#[inline]
pub fn exponent_for(s: f64) -> f64 {
    s.exp2()
}

/// Curvature for a superellipse exponent: `s = log2(k)`.
#[inline]
pub fn s_for(k: f64) -> f64 {
    k.log2()
}

/// Where a unit-width border moves a curve anchor.
///
/// `width` is the displacement across the edge (inward), `height` the
/// displacement along the edge, away from the box corner. Thin borders on
/// bevels and scoops slide along the edge so the inner curve stays parallel
/// to the outer one.
pub fn normal_offset_for(s: f64) -> Size {
    let k = exponent_for(s);
    if k < NOTCH_EXPONENT {
        // miter straight to the inside corner
        return Size::new(1.0, 1.0);
    }
    if k >= 2.0 {
        return Size::new(1.0, 0.0);
    }
    let phi = (1.0 - s.clamp(-1.0, 1.0)) * FRAC_PI_4;
    Size::new(phi.cos(), phi.sin())
}

/// Point on the unit superellipse at progress `t` in `[0, 1]`.
///
/// The frame has its origin at the arc center: `t = 0` is `(0, 1)`,
/// `t = 1` is `(1, 0)` and `t = 0.5` lies on the diagonal. Negative
/// curvatures reflect the positive curve across the chord.
pub fn superellipse_point_at_progress(s: f64, t: f64) -> Point {
    let inv = 1.0 / exponent_for(s.abs());
    let t = t.clamp(0.0, 1.0);
    let x = t.powf(inv);
    let y = (1.0 - t).powf(inv);
    if s < 0.0 { Point::new(1.0 - y, 1.0 - x) } else { Point::new(x, y) }
}

/// `y` on `x^k + y^k = 1` for `x` in `[0, 1]`.
pub fn superellipse_at_x(x: f64, k: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    (1.0 - x.powf(k)).max(0.0).powf(1.0 / k)
}

/// `y` on the curve for curvature `s` at `x`, in the arc-center frame.
///
/// For `s < 0` the curve is the chord reflection of the `|s|` curve, which
/// is the `1/k` superellipse read from the opposite corner.
pub fn superellipse_at_x_for_s(x: f64, s: f64) -> f64 {
    let k = exponent_for(s);
    if s >= 0.0 {
        superellipse_at_x(x, k)
    } else {
        1.0 - superellipse_at_x(1.0 - x, 1.0 / k)
    }
}

/// Curvature of an inset curve that stays parallel to the outer one.
///
/// Squarer and scoopier shapes bulge more along the diagonal than at the
/// ends, so reusing `s` for the inner curve makes a uniform border thicker on
/// the diagonal. This picks the inner exponent whose midpoint sits
/// `(inner_diagonal - outer_diagonal) / √2` away from the outer midpoint,
/// which is the border thickness for a uniform border. Only `|s| > 1` is
/// adjusted; the diagonals are the lengths of the corner rectangles.
pub fn inner_curvature(s: Curvature, outer_diagonal: f64, inner_diagonal: f64) -> Curvature {
    let value = s.value();
    let unchanged = (inner_diagonal - outer_diagonal).abs() <= f64::EPSILON * outer_diagonal;
    if !value.is_finite() || value.abs() <= 1.0 || unchanged || inner_diagonal <= 0.0 || outer_diagonal <= 0.0 {
        return s;
    }
    let m = 0.5_f64.powf(1.0 / exponent_for(value.abs()));
    let inner_m = (m * outer_diagonal + (inner_diagonal - outer_diagonal) * FRAC_1_SQRT_2) / inner_diagonal;
    if inner_m >= 1.0 {
        return if value > 0.0 { Curvature::SQUARE } else { Curvature::NOTCH };
    }
    // exponents below 1 would flip the shape to the other side of the chord
    let k = 0.5_f64.ln() / inner_m.max(0.5).ln();
    Curvature(s_for(k).copysign(value))
}

/// Corner curvature `s`, where `k = 2^s` is the superellipse exponent.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Curvature(f64);

impl Curvature {
    pub const NOTCH: Curvature = Curvature(f64::NEG_INFINITY);
    pub const SCOOP: Curvature = Curvature(-1.0);
    pub const BEVEL: Curvature = Curvature(0.0);
    pub const ROUND: Curvature = Curvature(1.0);
    pub const SQUIRCLE: Curvature = Curvature(2.0);
    pub const SQUARE: Curvature = Curvature(f64::INFINITY);

    /// Unchecked constructor; NaN is replaced when the style is sanitized.
    #[inline]
    pub const fn new(s: f64) -> Self {
        Curvature(s)
    }

    /// Create a curvature with validation (rejects NaN, accepts infinities)
    #[inline]
    pub fn try_new(s: f64) -> Result<Self, NumericError> {
        if s.is_nan() { Err(NumericError::NaN) } else { Ok(Curvature(s)) }
    }

    /// Curvature for a superellipse exponent `k`.
    #[inline]
    pub fn from_exponent(k: f64) -> Self {
        Curvature(s_for(k))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn exponent(self) -> f64 {
        exponent_for(self.0)
    }

    /// The mirrored curvature `-s`
    #[inline]
    pub fn mirrored(self) -> Self {
        Curvature(-self.0)
    }

    /// NaN becomes round
    #[inline]
    pub fn sanitized(self) -> Self {
        if self.0.is_nan() { Curvature::ROUND } else { self }
    }

    pub fn is_notch(self) -> bool {
        self.exponent() < NOTCH_EXPONENT
    }

    pub fn is_square(self) -> bool {
        self.exponent() > SQUARE_EXPONENT
    }

    /// Round or scoop: both are exact quarter circles.
    pub fn is_circular(self) -> bool {
        (self.0.abs() - 1.0).abs() < ROUND_TOLERANCE
    }

    pub fn normal_offset(self) -> Size {
        normal_offset_for(self.0)
    }
}

impl Default for Curvature {
    fn default() -> Self {
        Curvature::ROUND
    }
}

impl From<f64> for Curvature {
    fn from(s: f64) -> Self {
        Curvature(s)
    }
}

impl fmt::Display for Curvature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            s if s == f64::NEG_INFINITY => f.write_str("notch"),
            s if s == f64::INFINITY => f.write_str("square"),
            s => write!(f, "superellipse({})", exponent_for(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn exponent_round_trips() {
        for s in [-4.0, -1.5, -1.0, -0.25, 0.0, 0.5, 1.0, 2.0, 3.75, 8.0] {
            assert!((s_for(exponent_for(s)) - s).abs() < EPS, "s = {s}");
        }
    }

    #[test]
    fn named_curvatures() {
        assert_eq!(Curvature::ROUND.exponent(), 2.0);
        assert_eq!(Curvature::BEVEL.exponent(), 1.0);
        assert_eq!(Curvature::SCOOP.exponent(), 0.5);
        assert_eq!(Curvature::SQUIRCLE.exponent(), 4.0);
        assert!(Curvature::NOTCH.is_notch());
        assert!(Curvature::SQUARE.is_square());
        assert!(!Curvature::ROUND.is_notch());
        assert!(!Curvature::ROUND.is_square());
        assert_eq!(Curvature::from_exponent(4.0), Curvature::SQUIRCLE);
    }

    #[test]
    fn degenerate_thresholds() {
        assert!(Curvature::new(-10.0).is_notch());
        assert!(!Curvature::new(-9.0).is_notch());
        assert!(Curvature::new(10.0).is_square());
        assert!(!Curvature::new(9.0).is_square());
    }

    #[test]
    fn try_new_rejects_nan_only() {
        assert_eq!(Curvature::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Curvature::try_new(f64::INFINITY), Ok(Curvature::SQUARE));
        assert_eq!(Curvature::new(f64::NAN).sanitized(), Curvature::ROUND);
    }

    #[test]
    fn normal_offset_special_cases() {
        assert_eq!(normal_offset_for(f64::NEG_INFINITY), Size::new(1.0, 1.0));
        assert_eq!(normal_offset_for(1.0), Size::new(1.0, 0.0));
        assert_eq!(normal_offset_for(5.0), Size::new(1.0, 0.0));
        assert_eq!(normal_offset_for(f64::INFINITY), Size::new(1.0, 0.0));

        let bevel = normal_offset_for(0.0);
        assert!((bevel.width - std::f64::consts::FRAC_1_SQRT_2).abs() < EPS);
        assert!((bevel.height - std::f64::consts::FRAC_1_SQRT_2).abs() < EPS);

        let scoop = normal_offset_for(-1.0);
        assert!(scoop.width.abs() < EPS);
        assert!((scoop.height - 1.0).abs() < EPS);
    }

    #[test]
    fn normal_offset_is_monotonic_and_continuous() {
        let mut prev = normal_offset_for(-1.0);
        for i in 1..=200 {
            let s = -1.0 + i as f64 / 100.0;
            let cur = normal_offset_for(s);
            assert!(cur.width >= prev.width - EPS, "across shrinks at s = {s}");
            assert!(cur.height <= prev.height + EPS, "along grows at s = {s}");
            assert!((cur.width - prev.width).abs() < 0.02, "jump at s = {s}");
            assert!((cur.height - prev.height).abs() < 0.02, "jump at s = {s}");
            prev = cur;
        }
    }

    #[test]
    fn progress_points_lie_on_the_curve() {
        for s in [0.0, 0.5, 1.0, 2.0, 3.0] {
            let k = exponent_for(s);
            for i in 0..=10 {
                let p = superellipse_point_at_progress(s, i as f64 / 10.0);
                let residual = p.x.powf(k) + p.y.powf(k) - 1.0;
                assert!(residual.abs() < 1e-9, "s = {s}, i = {i}");
            }
        }
    }

    #[test]
    fn progress_midpoint_is_on_diagonal() {
        let p = superellipse_point_at_progress(1.0, 0.5);
        assert!((p.x - std::f64::consts::FRAC_1_SQRT_2).abs() < EPS);
        assert!((p.x - p.y).abs() < EPS);

        let q = superellipse_point_at_progress(-1.0, 0.5);
        assert!((q.x - (1.0 - std::f64::consts::FRAC_1_SQRT_2)).abs() < EPS);
        assert!((q.x - q.y).abs() < EPS);
    }

    #[test]
    fn at_x_matches_progress() {
        for s in [-2.0, -1.0, -0.5, 0.5, 1.0, 2.0] {
            let p = superellipse_point_at_progress(s, 0.3);
            let y = superellipse_at_x_for_s(p.x, s);
            assert!((y - p.y).abs() < 1e-9, "s = {s}: {y} vs {}", p.y);
        }
    }

    #[test]
    fn notch_threshold_matches_offset_sentinel() {
        for i in 0..=400 {
            let s = Curvature::new(-12.0 + i as f64 / 100.0);
            let sentinel = s.normal_offset() == Size::new(1.0, 1.0);
            assert_eq!(s.is_notch(), sentinel, "s = {s:?}");
        }
        assert!(Curvature::from_exponent(NOTCH_EXPONENT / 2.0).is_notch());
    }

    #[test]
    fn inner_curvature_keeps_moderate_shapes() {
        for s in [Curvature::SCOOP, Curvature::BEVEL, Curvature::ROUND, Curvature::new(0.4), Curvature::NOTCH] {
            assert_eq!(inner_curvature(s, 50.0, 40.0), s);
        }
        assert_eq!(inner_curvature(Curvature::SQUIRCLE, 50.0, 50.0), Curvature::SQUIRCLE);
    }

    #[test]
    fn inner_curvature_moves_midpoint_by_thickness() {
        let (r, t) = (40.0, 10.0);
        let diagonal = |side: f64| side * std::f64::consts::SQRT_2;
        // squarer shapes: the inner rect shrinks by t
        for s in [1.5, 2.0, 3.0] {
            let inner = inner_curvature(Curvature::new(s), diagonal(r), diagonal(r - t));
            assert!(inner.value() > s, "s = {s}");
            let m_out = 0.5_f64.powf(1.0 / exponent_for(s));
            let m_in = 0.5_f64.powf(1.0 / inner.exponent());
            let moved = (r * m_out - (r - t) * m_in) * std::f64::consts::SQRT_2;
            assert!((moved - t).abs() < 1e-9, "s = {s}: {moved}");
        }
        // scoops: the inner rect grows by t and the midpoint moves away from the box corner
        let inner = inner_curvature(Curvature::new(-2.0), diagonal(r), diagonal(r + t));
        assert!(inner.value() > -2.0 && inner.value() < -1.0, "{inner:?}");
        let m_out = 0.5_f64.powf(1.0 / exponent_for(2.0));
        let m_in = 0.5_f64.powf(1.0 / exponent_for(-inner.value()));
        let moved = ((r + t) * m_in - r * m_out) * std::f64::consts::SQRT_2;
        assert!((moved - t).abs() < 1e-9, "{moved}");
    }

    #[test]
    fn inner_curvature_saturates_to_square() {
        let inner = inner_curvature(Curvature::new(6.0), 10.0, 1.0);
        assert_eq!(inner, Curvature::SQUARE);
    }

    #[test]
    fn display_names() {
        assert_eq!(Curvature::NOTCH.to_string(), "notch");
        assert_eq!(Curvature::SQUARE.to_string(), "square");
        assert_eq!(Curvature::ROUND.to_string(), "superellipse(2)");
    }
}
