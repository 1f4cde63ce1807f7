//! SVG output: a [`PathSink`] that collects path data, clip paths and fills
//! into an [`Svg`] document.

use facet_xml::SerializeOptions;

use super::curve::CurveMode;
use super::path_builder::{FillRule, Path, PathCommand, PathSink, assemble_border};
use super::svg_dom::{ClipPath, Defs, Svg, SvgNode, SvgPath};
use super::types::BorderStyle;
use crate::types::{Color, Point};

/// Format a number with at most three decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// SVG path data (`d` attribute) for a recorded path
pub fn path_data(path: &Path) -> String {
    let parts: Vec<String> = path
        .commands()
        .iter()
        .map(|command| match command {
            PathCommand::MoveTo(m) => format!("M{}", fmt_point(m.0)),
            PathCommand::LineTo(l) => format!("L{}", fmt_point(l.0)),
            PathCommand::CubicTo(c) => format!("C{} {} {}", fmt_point(c.c1), fmt_point(c.c2), fmt_point(c.to)),
            PathCommand::Close(_) => "Z".to_string(),
        })
        .collect();
    parts.join(" ")
}

fn clip_url(id: usize) -> String {
    format!("url(#clip{id})")
}

/// Collects sink calls into an SVG document.
///
/// Each clip becomes a `<clipPath>` nested inside the previous one, so
/// successive clips intersect; fills are drawn under the innermost clip.
#[derive(Debug, Default)]
pub struct SvgWriter {
    current: Path,
    defs: Vec<SvgNode>,
    body: Vec<SvgNode>,
    clip: Option<usize>,
    clip_count: usize,
}

impl SvgWriter {
    pub fn new() -> Self {
        SvgWriter::default()
    }

    fn take_data(&mut self) -> String {
        path_data(&std::mem::take(&mut self.current))
    }

    /// Stop clipping later fills; the next clip starts a fresh chain.
    pub fn reset_clip(&mut self) {
        self.clip = None;
    }

    /// Wrap everything drawn so far in an `<svg>` element.
    pub fn document(self, width: f64, height: f64) -> Svg {
        let (w, h) = (fmt_num(width), fmt_num(height));
        let mut children = Vec::with_capacity(self.body.len() + 1);
        if !self.defs.is_empty() {
            children.push(SvgNode::Defs(Defs { children: self.defs }));
        }
        children.extend(self.body);
        Svg {
            width: Some(w.clone()),
            height: Some(h.clone()),
            view_box: Some(format!("0 0 {w} {h}")),
            children,
        }
    }

    /// Serialize the document.
    pub fn finish(self, width: f64, height: f64) -> miette::Result<String> {
        let svg = self.document(width, height);
        facet_xml::to_string_with_options(&svg, &SerializeOptions::default())
            .map_err(|e| miette::miette!("SVG serialization error: {}", e))
    }
}

impl PathSink for SvgWriter {
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
        let path = SvgPath {
            d: Some(self.take_data()),
            fill: Some(color.to_hex_string()),
            fill_rule: Some(rule.as_svg().to_string()),
            clip_rule: None,
            clip_path: self.clip.map(clip_url),
        };
        self.body.push(SvgNode::Path(path));
    }

    fn clip(&mut self, rule: FillRule) {
        let shape = SvgPath {
            d: Some(self.take_data()),
            clip_rule: Some(rule.as_svg().to_string()),
            ..Default::default()
        };
        let id = self.clip_count;
        self.clip_count += 1;
        self.defs.push(SvgNode::ClipPath(ClipPath {
            id: Some(format!("clip{id}")),
            clip_path: self.clip.map(clip_url),
            children: vec![SvgNode::Path(shape)],
        }));
        self.clip = Some(id);
    }
}

/// Render a border on a `width` x `height` box as a standalone SVG document.
pub fn render_svg(style: &BorderStyle, width: f64, height: f64, mode: CurveMode) -> miette::Result<String> {
    let mut writer = SvgWriter::new();
    assemble_border(style, width, height, mode).paint(&mut writer);
    writer.finish(width, height)
}
