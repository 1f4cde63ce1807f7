//! Corner placement and inset geometry.
//!
//! Every corner is built in the canonical top-left frame and rotated into
//! place by [`map_to_corner`]. The resolver works out where the inner
//! (border-inset) curve goes for a given pair of edge widths and picks one of
//! three regimes:
//!
//! - **Simple**: the inset curve fits inside the inner edges as is.
//! - **Trimmed**: an inset anchor pokes outside its inner edge, so the inset
//!   curve is cut against the lines `x = wa` and `y = wb`.
//! - **Collapsed**: the borders are wider than the curve; the inner corner is
//!   just the point where the two inner edges meet.

use std::fmt;

use super::bezier::TrimLine;
use super::curvature::{Curvature, inner_curvature, superellipse_point_at_progress};
use super::curve::{CornerCurve, CurveCache, CurveMode};
use super::defaults::TRIM_EPSILON;
use super::types::EdgeWidths;
use crate::log::debug;
use crate::types::{Point, Size};

/// Box corners in clockwise order starting at the top left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomRight, Corner::BottomLeft];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next corner clockwise
    pub fn next(self) -> Corner {
        Corner::ALL[(self.index() + 1) % 4]
    }

    /// The edge the corner curve starts on
    pub fn first_edge(self) -> Edge {
        match self {
            Corner::TopLeft => Edge::Left,
            Corner::TopRight => Edge::Top,
            Corner::BottomRight => Edge::Right,
            Corner::BottomLeft => Edge::Bottom,
        }
    }

    /// The edge the corner curve ends on
    pub fn second_edge(self) -> Edge {
        self.first_edge().next()
    }

    /// Position of the corner on a box of `box_size`
    pub fn box_point(self, box_size: Size) -> Point {
        map_to_corner(self, Point::ORIGIN, box_size)
    }

    /// Canonical `(w, h)` of a corner with horizontal radius `radius.width`
    /// and vertical radius `radius.height`.
    pub fn canonical_extent(self, radius: Size) -> Size {
        match self {
            Corner::TopLeft | Corner::BottomRight => radius,
            Corner::TopRight | Corner::BottomLeft => radius.flipped(),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomRight => "bottom-right",
            Corner::BottomLeft => "bottom-left",
        })
    }
}

/// Box edges in clockwise order starting at the top
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Edge {
        Edge::ALL[(self.index() + 1) % 4]
    }

    /// The corners at the start and end of the edge, clockwise
    pub fn corners(self) -> (Corner, Corner) {
        let start = Corner::ALL[self.index()];
        (start, start.next())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        })
    }
}

/// Rotate a canonical point into `corner` of a box of `box_size`.
pub fn map_to_corner(corner: Corner, p: Point, box_size: Size) -> Point {
    let (w, h) = (box_size.width, box_size.height);
    match corner {
        Corner::TopLeft => p,
        Corner::TopRight => Point::new(w - p.y, p.x),
        Corner::BottomRight => Point::new(w - p.x, h - p.y),
        Corner::BottomLeft => Point::new(p.y, h - p.x),
    }
}

/// Inverse of [`map_to_corner`].
pub fn map_from_corner(corner: Corner, p: Point, box_size: Size) -> Point {
    let (w, h) = (box_size.width, box_size.height);
    match corner {
        Corner::TopLeft => p,
        Corner::TopRight => Point::new(p.y, w - p.x),
        Corner::BottomRight => Point::new(w - p.x, h - p.y),
        Corner::BottomLeft => Point::new(h - p.y, p.x),
    }
}

/// The rectangle spanned by a corner curve, in box coordinates.
///
/// `(x0, y0)` is where the curve starts and `(x1, y1)` where it ends. The
/// extents may be negative; their signs tell which of the two remaining
/// rectangle corners is the arc center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl CornerRect {
    pub fn new(start: Point, end: Point) -> Self {
        CornerRect { x0: start.x, y0: start.y, x1: end.x, y1: end.y }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The rectangle corner opposite the box corner.
    pub fn arc_center(&self) -> Point {
        if (self.x1 - self.x0) * (self.y1 - self.y0) >= 0.0 {
            Point::new(self.x0, self.y1)
        } else {
            Point::new(self.x1, self.y0)
        }
    }

    /// Map a point of the unit arc-center frame into the box: `(0, 1)` is
    /// the start, `(1, 0)` the end.
    pub fn map_unit(&self, p: Point) -> Point {
        let center = self.arc_center();
        let toward_end = self.end() - center;
        let toward_start = self.start() - center;
        center + toward_end * p.x + toward_start * p.y
    }

    pub fn point_at_progress(&self, s: Curvature, t: f64) -> Point {
        self.map_unit(superellipse_point_at_progress(s.value(), t))
    }

    /// The true superellipse midpoint, on the corner's diagonal
    pub fn midpoint(&self, s: Curvature) -> Point {
        self.point_at_progress(s, 0.5)
    }
}

/// How the inner corner was derived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsetRegime {
    Simple,
    Trimmed,
    Collapsed,
}

/// Everything the path assembler needs about one corner, in box coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct CornerGeometry {
    pub corner: Corner,
    pub curvature: Curvature,
    /// Curvature of the inner curve, adjusted to keep the ring even
    pub inner_curvature: Curvature,
    pub outer_rect: CornerRect,
    pub inner_rect: CornerRect,
    pub outer: CornerCurve,
    /// `None` when the inner corner collapsed to `inner_corner`
    pub inner: Option<CornerCurve>,
    /// Where the two inner edges meet
    pub inner_corner: Point,
    /// Lines the inner curve was cut against
    pub trim_lines: Vec<TrimLine>,
    pub outer_center: Point,
    pub inner_center: Point,
    pub regime: InsetRegime,
}

impl CornerGeometry {
    /// First point of the inner boundary
    pub fn inner_start(&self) -> Point {
        self.inner.as_ref().map_or(self.inner_corner, CornerCurve::start)
    }

    /// Last point of the inner boundary
    pub fn inner_end(&self) -> Point {
        self.inner.as_ref().map_or(self.inner_corner, CornerCurve::end)
    }
}

/// Resolves corners, reusing unit curves across calls.
#[derive(Debug, Default)]
pub struct CornerResolver {
    cache: CurveCache,
}

impl CornerResolver {
    pub fn new(mode: CurveMode) -> Self {
        CornerResolver { cache: CurveCache::new(mode) }
    }

    pub fn resolve(
        &mut self,
        corner: Corner,
        box_size: Size,
        radius: Size,
        curvature: Curvature,
        widths: &EdgeWidths,
    ) -> CornerGeometry {
        let s = curvature.sanitized();
        let extent = corner.canonical_extent(radius);
        let (w, h) = (extent.width, extent.height);
        let wa = widths.get(corner.first_edge());
        let wb = widths.get(corner.second_edge());
        let to_box = |p: Point| map_to_corner(corner, p, box_size);

        let unit = self.cache.unit_curve(s).clone();
        let outer = unit.scaled(extent).map(to_box);
        let outer_rect = CornerRect::new(to_box(Point::new(0.0, h)), to_box(Point::new(w, 0.0)));
        let outer_center = outer_rect.midpoint(s);

        let offset = s.normal_offset();
        let (across, along) = (offset.width, offset.height);
        let inner_start = Point::new(across * wa, h + along * wa);
        let inner_end = Point::new(w + along * wb, across * wb);
        let inner_corner = Point::new(wa, wb);

        let collapsed = |trim_lines: Vec<TrimLine>| {
            let point = to_box(inner_corner);
            CornerGeometry {
                corner,
                curvature: s,
                inner_curvature: s,
                outer_rect,
                inner_rect: CornerRect::new(point, point),
                outer: outer.clone(),
                inner: None,
                inner_corner: point,
                trim_lines,
                outer_center,
                inner_center: point,
                regime: InsetRegime::Collapsed,
            }
        };

        if !(inner_start.y > wb && inner_end.x > wa) {
            debug!(%corner, wa, wb, "inner corner collapsed");
            return collapsed(Vec::new());
        }

        let inner_size = Size::new(inner_end.x - inner_start.x, inner_start.y - inner_end.y);
        let inner_s = inner_curvature(s, w.hypot(h), inner_size.width.hypot(inner_size.height));
        let inner_unit = if inner_s == s { unit.clone() } else { self.cache.unit_curve(inner_s).clone() };
        let inner = inner_unit.scaled(inner_size).translated(inner_start.x, inner_end.y);
        let inner_rect = CornerRect::new(to_box(inner_start), to_box(inner_end));
        let midpoint = inner_rect.midpoint(inner_s);

        let trim_x = wa - inner_start.x > TRIM_EPSILON;
        let trim_y = wb - inner_end.y > TRIM_EPSILON;
        if !trim_x && !trim_y {
            return CornerGeometry {
                corner,
                curvature: s,
                inner_curvature: inner_s,
                outer_rect,
                inner_rect,
                outer,
                inner: Some(inner.map(to_box)),
                inner_corner: to_box(inner_corner),
                trim_lines: Vec::new(),
                outer_center,
                inner_center: midpoint,
                regime: InsetRegime::Simple,
            };
        }

        let mut trim_lines = Vec::new();
        if trim_x {
            trim_lines.push(TrimLine::vertical(wa).map(to_box));
        }
        if trim_y {
            trim_lines.push(TrimLine::horizontal(wb).map(to_box));
        }
        let x_min = if trim_x { wa } else { 0.0 };
        let y_min = if trim_y { wb } else { 0.0 };
        let Some(trimmed) = inner.trimmed(x_min, y_min) else {
            debug!(%corner, wa, wb, "inner curve trimmed away");
            return collapsed(trim_lines);
        };

        // the midpoint may have been cut off; fall back to the cut end nearest to it
        let canonical_mid = map_from_corner(corner, midpoint, box_size);
        let inner_center = if canonical_mid.x < wa - TRIM_EPSILON {
            to_box(trimmed.start())
        } else if canonical_mid.y < wb - TRIM_EPSILON {
            to_box(trimmed.end())
        } else {
            midpoint
        };

        CornerGeometry {
            corner,
            curvature: s,
            inner_curvature: inner_s,
            outer_rect,
            inner_rect,
            outer,
            inner: Some(trimmed.map(to_box)),
            inner_corner: to_box(inner_corner),
            trim_lines,
            outer_center,
            inner_center,
            regime: InsetRegime::Trimmed,
        }
    }
}

/// Resolve one corner of a box: outer curve, inner curve and their centers.
pub fn resolve_corner(
    corner: Corner,
    box_size: Size,
    radius: Size,
    curvature: Curvature,
    widths: &EdgeWidths,
    mode: CurveMode,
) -> CornerGeometry {
    CornerResolver::new(mode).resolve(corner, box_size, radius, curvature, widths)
}
