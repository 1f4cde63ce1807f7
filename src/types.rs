//! Plain value types shared by the curve engine (zero-cost, `Copy`).

use std::fmt;
use std::ops::{Add, Mul, Sub};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a length: finite and not negative.
#[inline]
pub fn try_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Clamp a length to a usable value: NaN, infinities and negatives become 0.
#[inline]
pub fn sanitize_length(val: f64) -> f64 {
    if val.is_finite() { val.max(0.0) } else { 0.0 }
}

/// A point in pixels (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self { Point { x, y } }

    /// Vector from `origin` to this point
    #[inline]
    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    #[inline]
    pub fn moved_by(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Scale each axis independently
    #[inline]
    pub fn scaled_by(self, sx: f64, sy: f64) -> Point {
        Point::new(self.x * sx, self.y * sy)
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        DVec2::from(self).lerp(other.into(), t).into()
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        DVec2::from(self).distance(other.into())
    }

    /// Equal within `eps` on both axes
    #[inline]
    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point { Point::new(self.x * rhs, self.y * rhs) }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self { Point::new(v.x, v.y) }
}
impl From<Point> for DVec2 {
    fn from(p: Point) -> Self { DVec2::new(p.x, p.y) }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 2D extent in pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self { Size { width, height } }

    /// Same extent on both axes
    #[inline]
    pub const fn square(side: f64) -> Self { Size { width: side, height: side } }

    #[inline]
    pub fn scaled_by(self, factor: f64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }

    /// Swap width and height
    #[inline]
    pub fn flipped(self) -> Size { Size::new(self.height, self.width) }

    /// Divide by the Euclidean norm. A zero size stays zero.
    pub fn normalized(self) -> Size {
        let norm = self.width.hypot(self.height);
        if norm == 0.0 { Size::ZERO } else { Size::new(self.width / norm, self.height / norm) }
    }

    #[inline]
    pub fn is_empty(self) -> bool { self.width <= 0.0 || self.height <= 0.0 }
}

/// An opaque RGB color packed as `0xRRGGBB`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// `#rrggbb` form used by SVG attributes
    pub fn to_hex_string(self) -> String {
        format!("#{:06x}", self.0 & 0xffffff)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_non_negative_valid() {
        assert_eq!(try_non_negative(1.5), Ok(1.5));
        assert_eq!(try_non_negative(0.0), Ok(0.0));
    }

    #[test]
    fn try_non_negative_rejects_bad_values() {
        assert_eq!(try_non_negative(f64::NAN), Err(NumericError::NaN));
        assert_eq!(try_non_negative(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(try_non_negative(-2.0), Err(NumericError::Negative));
    }

    #[test]
    fn sanitize_length_clamps() {
        assert_eq!(sanitize_length(-3.0), 0.0);
        assert_eq!(sanitize_length(f64::NAN), 0.0);
        assert_eq!(sanitize_length(f64::NEG_INFINITY), 0.0);
        assert_eq!(sanitize_length(7.0), 7.0);
    }

    #[test]
    fn point_operations_return_new_values() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p.moved_by(1.0, -1.0), Point::new(2.0, 1.0));
        assert_eq!(p.scaled_by(2.0, 3.0), Point::new(2.0, 6.0));
        assert_eq!(p.offset_from(Point::new(1.0, 1.0)), Point::new(0.0, 1.0));
        assert_eq!(p, Point::new(1.0, 2.0));
    }

    #[test]
    fn point_lerp_and_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(1.5, 2.0));
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn size_normalized() {
        let n = Size::new(3.0, 4.0).normalized();
        assert!((n.width - 0.6).abs() < 1e-12);
        assert!((n.height - 0.8).abs() < 1e-12);
        assert_eq!(Size::ZERO.normalized(), Size::ZERO);
    }

    #[test]
    fn size_flipped() {
        assert_eq!(Size::new(1.0, 2.0).flipped(), Size::new(2.0, 1.0));
    }

    #[test]
    fn color_hex() {
        assert_eq!(Color::rgb(0x12, 0xab, 0x00).to_hex_string(), "#12ab00");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }
}
