//! Path assembly: turns resolved corners into the border's outer and inner
//! paths and the four edge regions, and replays them into a [`PathSink`].
//!
//! Painting happens in three steps:
//!
//! 1. clip to the outer path (nonzero),
//! 2. clip to outer plus inner path (evenodd), which leaves the border ring,
//! 3. fill each edge region with its color.
//!
//! Edge regions meet on the corner diagonals, through the superellipse
//! midpoints of the outer and inner curves, so neighbouring colors split
//! each corner cleanly.

use enum_dispatch::enum_dispatch;

use super::curve::{CornerCurve, CurveMode};
use super::geometry::{Corner, CornerGeometry, CornerResolver, Edge};
use super::types::{BorderStyle, EdgeWidths};
use crate::log::debug;
use crate::types::{Color, Point, Size, sanitize_length};

/// Fill and clip winding rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

impl FillRule {
    pub fn as_svg(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// A drawing surface that receives path geometry.
///
/// Geometry calls build up a current path; `fill` and `clip` consume it.
pub trait PathSink {
    fn move_to(&mut self, to: Point);
    fn line_to(&mut self, to: Point);
    fn cubic_to(&mut self, c1: Point, c2: Point, to: Point);
    fn close(&mut self);
    fn fill(&mut self, rule: FillRule, color: Color);
    fn clip(&mut self, rule: FillRule);
}

/// A path command that can replay itself into a sink
#[enum_dispatch]
pub trait Emit {
    fn emit(&self, sink: &mut dyn PathSink);

    /// Number of points the command carries
    fn point_count(&self) -> usize;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveTo(pub Point);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineTo(pub Point);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicTo {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Close;

impl Emit for MoveTo {
    fn emit(&self, sink: &mut dyn PathSink) {
        sink.move_to(self.0);
    }

    fn point_count(&self) -> usize {
        1
    }
}

impl Emit for LineTo {
    fn emit(&self, sink: &mut dyn PathSink) {
        sink.line_to(self.0);
    }

    fn point_count(&self) -> usize {
        1
    }
}

impl Emit for CubicTo {
    fn emit(&self, sink: &mut dyn PathSink) {
        sink.cubic_to(self.c1, self.c2, self.to);
    }

    fn point_count(&self) -> usize {
        3
    }
}

impl Emit for Close {
    fn emit(&self, sink: &mut dyn PathSink) {
        sink.close();
    }

    fn point_count(&self) -> usize {
        0
    }
}

#[enum_dispatch(Emit)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    CubicTo,
    Close,
}

/// A recorded sequence of path commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(MoveTo(to).into());
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(LineTo(to).into());
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.commands.push(CubicTo { c1, c2, to }.into());
    }

    pub fn close(&mut self) {
        self.commands.push(Close.into());
    }

    /// Total number of points over all commands
    pub fn point_count(&self) -> usize {
        self.commands.iter().map(Emit::point_count).sum()
    }

    /// Number of commands of the same kind as `sample`
    pub fn count_of(&self, sample: &PathCommand) -> usize {
        let kind = std::mem::discriminant(sample);
        self.commands.iter().filter(|c| std::mem::discriminant(*c) == kind).count()
    }

    /// Every point the path carries, controls included, in order
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.point_count());
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(MoveTo(p)) | PathCommand::LineTo(LineTo(p)) => points.push(*p),
                PathCommand::CubicTo(c) => points.extend([c.c1, c.c2, c.to]),
                PathCommand::Close(_) => {}
            }
        }
        points
    }

    /// Append a corner curve, starting a new subpath or joining with a line.
    pub fn push_curve(&mut self, curve: &CornerCurve) {
        let start = curve.start();
        if self.is_empty() {
            self.move_to(start);
        } else {
            self.line_to(start);
        }
        match curve {
            CornerCurve::Cubic([_, c1, c2, to]) => self.cubic_to(*c1, *c2, *to),
            CornerCurve::Double([_, c1, c2, mid, c3, c4, to]) => {
                self.cubic_to(*c1, *c2, *mid);
                self.cubic_to(*c3, *c4, *to);
            }
            CornerCurve::Lines([_, joint, to]) => {
                self.line_to(*joint);
                self.line_to(*to);
            }
        }
    }

    /// Append a single point, starting a new subpath or joining with a line.
    pub fn push_point(&mut self, p: Point) {
        if self.is_empty() { self.move_to(p) } else { self.line_to(p) }
    }

    pub fn emit(&self, sink: &mut dyn PathSink) {
        for command in &self.commands {
            command.emit(sink);
        }
    }
}

impl PathSink for Path {
    fn move_to(&mut self, to: Point) {
        Path::move_to(self, to);
    }

    fn line_to(&mut self, to: Point) {
        Path::line_to(self, to);
    }

    fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        Path::cubic_to(self, c1, c2, to);
    }

    fn close(&mut self) {
        Path::close(self);
    }

    fn fill(&mut self, _rule: FillRule, _color: Color) {}

    fn clip(&mut self, _rule: FillRule) {}
}

/// One sink call, as captured by [`Recording`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill { path: Path, rule: FillRule, color: Color },
    Clip { path: Path, rule: FillRule },
}

/// A sink that keeps every fill and clip with the path it consumed.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    pub ops: Vec<DrawOp>,
    current: Path,
}

impl Recording {
    pub fn new() -> Self {
        Recording::default()
    }
}

impl PathSink for Recording {
    fn move_to(&mut self, to: Point) {
        self.current.move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        self.current.line_to(to);
    }

    fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.current.cubic_to(c1, c2, to);
    }

    fn close(&mut self) {
        self.current.close();
    }

    fn fill(&mut self, rule: FillRule, color: Color) {
        let path = std::mem::take(&mut self.current);
        self.ops.push(DrawOp::Fill { path, rule, color });
    }

    fn clip(&mut self, rule: FillRule) {
        let path = std::mem::take(&mut self.current);
        self.ops.push(DrawOp::Clip { path, rule });
    }
}

/// The area painted with one edge's color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRegion {
    pub edge: Edge,
    pub color: Color,
    /// box corner, outer center, inner center, next inner center, next
    /// outer center, next box corner
    pub points: [Point; 6],
}

impl EdgeRegion {
    pub fn path(&self) -> Path {
        let mut path = Path::new();
        for p in self.points {
            path.push_point(p);
        }
        path.close();
        path
    }
}

/// Everything needed to paint a border
#[derive(Clone, Debug, PartialEq)]
pub struct BorderPaths {
    pub corners: [CornerGeometry; 4],
    pub outer: Path,
    pub inner: Path,
    pub edges: [EdgeRegion; 4],
}

impl BorderPaths {
    /// Clip to the border ring, then fill each edge region.
    pub fn paint(&self, sink: &mut dyn PathSink) {
        self.outer.emit(sink);
        sink.clip(FillRule::NonZero);
        self.outer.emit(sink);
        self.inner.emit(sink);
        sink.clip(FillRule::EvenOdd);
        for region in &self.edges {
            region.path().emit(sink);
            sink.fill(FillRule::NonZero, region.color);
        }
    }
}

fn resolve_corners(style: &BorderStyle, box_size: Size, widths: &EdgeWidths, mode: CurveMode) -> [CornerGeometry; 4] {
    let mut resolver = CornerResolver::new(mode);
    Corner::ALL.map(|corner| {
        let corner_style = style.corner(corner);
        resolver.resolve(corner, box_size, corner_style.radius, corner_style.curvature, widths)
    })
}

fn outer_path(corners: &[CornerGeometry; 4]) -> Path {
    let mut path = Path::new();
    for geometry in corners {
        path.push_curve(&geometry.outer);
    }
    path.close();
    path
}

fn inner_path(corners: &[CornerGeometry; 4]) -> Path {
    let mut path = Path::new();
    for geometry in corners {
        match &geometry.inner {
            Some(curve) => path.push_curve(curve),
            None => path.push_point(geometry.inner_corner),
        }
    }
    path.close();
    path
}

/// Resolve all four corners of a `width` x `height` box and build its paths.
pub fn assemble_border(style: &BorderStyle, width: f64, height: f64, mode: CurveMode) -> BorderPaths {
    let box_size = Size::new(sanitize_length(width), sanitize_length(height));
    let style = style.sanitized(box_size);
    let corners = resolve_corners(&style, box_size, &style.edge_widths(), mode);

    let outer = outer_path(&corners);
    let inner = inner_path(&corners);
    debug!(outer = outer.point_count(), inner = inner.point_count(), "assembled border paths");

    let edges = Edge::ALL.map(|edge| {
        let (from, to) = edge.corners();
        let (a, b) = (&corners[from.index()], &corners[to.index()]);
        EdgeRegion {
            edge,
            color: style.edge(edge).color,
            points: [
                from.box_point(box_size),
                a.outer_center,
                a.inner_center,
                b.inner_center,
                b.outer_center,
                to.box_point(box_size),
            ],
        }
    });

    BorderPaths { corners, outer, inner, edges }
}

/// The box outline moved outward by `spread`, for shadows and outlines.
///
/// A positive spread grows the box by `spread` on every side and every
/// non-zero radius by the same amount; the path stays in the original box's
/// coordinates, so it starts left of and above the origin. A negative spread
/// is the inner edge of a uniform border `-spread` wide. Non-finite spreads
/// count as 0.
pub fn assemble_outline(style: &BorderStyle, width: f64, height: f64, spread: f64, mode: CurveMode) -> Path {
    let box_size = Size::new(sanitize_length(width), sanitize_length(height));
    let style = style.sanitized(box_size);
    let spread = if spread.is_finite() { spread } else { 0.0 };

    if spread < 0.0 {
        let corners = resolve_corners(&style, box_size, &EdgeWidths::uniform(-spread), mode);
        return inner_path(&corners);
    }

    let grow = |r: f64| if r > 0.0 { r + spread } else { 0.0 };
    let mut grown = style;
    for corner in &mut grown.corners {
        corner.radius = Size::new(grow(corner.radius.width), grow(corner.radius.height));
    }
    let grown_box = Size::new(box_size.width + 2.0 * spread, box_size.height + 2.0 * spread);
    let corners = resolve_corners(&grown, grown_box, &EdgeWidths::default(), mode);

    let mut path = Path::new();
    for geometry in &corners {
        path.push_curve(&geometry.outer.translated(-spread, -spread));
    }
    path.close();
    debug!(spread, points = path.point_count(), "assembled outline");
    path
}

/// Assemble a border with the precise curve fit and paint it into `sink`.
pub fn render_border(style: &BorderStyle, width: f64, height: f64, sink: &mut dyn PathSink) {
    assemble_border(style, width, height, CurveMode::Precise).paint(sink);
}
