//! Print an SVG showing a row of boxes, one per named curvature.
//!
//! Run with `RUST_LOG=debug cargo run --example render_svg --features tracing`
//! to see trimming and collapse decisions.

use cornershape::render::SvgWriter;
use cornershape::{BorderStyle, Color, Curvature, CurveMode, PathSink, Point, assemble_border};
use tracing_subscriber::EnvFilter;

/// Shifts everything drawn into it by a fixed offset.
struct Translated<'a> {
    inner: &'a mut dyn PathSink,
    dx: f64,
    dy: f64,
}

impl Translated<'_> {
    fn shift(&self, p: Point) -> Point {
        p.moved_by(self.dx, self.dy)
    }
}

impl PathSink for Translated<'_> {
    fn move_to(&mut self, to: Point) {
        let to = self.shift(to);
        self.inner.move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        let to = self.shift(to);
        self.inner.line_to(to);
    }

    fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        let (c1, c2, to) = (self.shift(c1), self.shift(c2), self.shift(to));
        self.inner.cubic_to(c1, c2, to);
    }

    fn close(&mut self) {
        self.inner.close();
    }

    fn fill(&mut self, rule: cornershape::FillRule, color: Color) {
        self.inner.fill(rule, color);
    }

    fn clip(&mut self, rule: cornershape::FillRule) {
        self.inner.clip(rule);
    }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let shapes = [
        Curvature::NOTCH,
        Curvature::SCOOP,
        Curvature::BEVEL,
        Curvature::ROUND,
        Curvature::SQUIRCLE,
        Curvature::SQUARE,
    ];
    let (width, height, gap) = (120.0, 90.0, 20.0);

    let mut svg = SvgWriter::new();
    for (i, curvature) in shapes.into_iter().enumerate() {
        let style = BorderStyle::uniform(30.0, curvature, 8.0, Color::rgb(0x33, 0x66, 0x99))
            .with_edge(cornershape::Edge::Top, cornershape::EdgeStyle::new(16.0, Color::rgb(0xcc, 0x44, 0x22)));
        let paths = assemble_border(&style, width, height, CurveMode::Precise);
        let mut sink = Translated { inner: &mut svg, dx: gap + i as f64 * (width + gap), dy: gap };
        paths.paint(&mut sink);
        // each box gets its own clip chain
        svg.reset_clip();
    }

    let total_width = gap + shapes.len() as f64 * (width + gap);
    println!("{}", svg.finish(total_width, height + 2.0 * gap)?);
    Ok(())
}
