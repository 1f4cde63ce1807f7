//! End-to-end border scenarios: assembly, trimming regimes and SVG output.

use cornershape::render::path_builder::{Close, LineTo, PathCommand};
use cornershape::render::{DrawOp, InsetRegime, Svg, SvgWriter, path_data};
use cornershape::{
    BorderStyle, BorderPaths, Color, Corner, CornerStyle, Curvature, CurveMode, Edge, EdgeStyle, Point, Recording,
    Size, assemble_border, assemble_outline, corner_curve_points, render_border, render_svg, trim_curve,
};

fn line_joins(path: &cornershape::Path) -> usize {
    path.count_of(&LineTo(Point::ORIGIN).into())
}

#[test]
fn round_box_scenario() {
    let style = BorderStyle::uniform(40.0, Curvature::ROUND, 0.0, Color::BLACK);
    let paths = assemble_border(&style, 200.0, 200.0, CurveMode::Precise);

    for geometry in &paths.corners {
        assert_eq!(geometry.outer.point_count(), 4, "{}", geometry.corner);
    }
    assert_eq!(paths.outer.point_count(), 16);
    assert_eq!(line_joins(&paths.outer) + paths.outer.count_of(&Close.into()), 4);
}

fn inward_normal(edge: Edge) -> Point {
    match edge {
        Edge::Top => Point::new(0.0, 1.0),
        Edge::Right => Point::new(-1.0, 0.0),
        Edge::Bottom => Point::new(0.0, -1.0),
        Edge::Left => Point::new(1.0, 0.0),
    }
}

fn all_points_finite(paths: &BorderPaths) -> bool {
    let corners = paths.corners.iter().all(|g| {
        g.outer_center.is_finite()
            && g.inner_center.is_finite()
            && g.outer.points().iter().all(|p| p.is_finite())
            && g.inner.as_ref().is_none_or(|c| c.points().iter().all(|p| p.is_finite()))
    });
    let edges = paths.edges.iter().all(|e| e.points.iter().all(|p| p.is_finite()));
    let outlines = paths.outer.points().iter().chain(&paths.inner.points()).all(|p| p.is_finite());
    corners && edges && outlines
}

#[test]
fn round_box_insets_by_each_border_width() {
    let style = BorderStyle::uniform(40.0, Curvature::ROUND, 0.0, Color::BLACK)
        .with_edge(Edge::Top, EdgeStyle::new(4.0, Color::BLACK))
        .with_edge(Edge::Right, EdgeStyle::new(6.0, Color::BLACK))
        .with_edge(Edge::Bottom, EdgeStyle::new(8.0, Color::BLACK))
        .with_edge(Edge::Left, EdgeStyle::new(10.0, Color::BLACK));
    let widths = style.edge_widths();
    let paths = assemble_border(&style, 200.0, 200.0, CurveMode::Precise);

    for geometry in &paths.corners {
        let corner = geometry.corner;
        assert_eq!(geometry.regime, InsetRegime::Simple, "{corner}");
        let inner = geometry.inner.as_ref().expect("wide radius keeps an inner curve");
        let (first, second) = (corner.first_edge(), corner.second_edge());

        let start_shift = inner.start() - geometry.outer.start();
        let expected = inward_normal(first) * widths.get(first);
        assert!(start_shift.approx_eq(expected, 1e-9), "{corner}: start moved {start_shift}, expected {expected}");

        let end_shift = inner.end() - geometry.outer.end();
        let expected = inward_normal(second) * widths.get(second);
        assert!(end_shift.approx_eq(expected, 1e-9), "{corner}: end moved {end_shift}, expected {expected}");
    }
    assert_eq!(paths.inner.point_count(), 16);
}

#[test]
fn non_finite_box_sizes_stay_finite() {
    let style = BorderStyle::uniform(10.0, Curvature::ROUND, 2.0, Color::BLACK);
    for (width, height) in [(f64::INFINITY, 100.0), (f64::NAN, 100.0), (100.0, f64::NEG_INFINITY)] {
        let paths = assemble_border(&style, width, height, CurveMode::Precise);
        assert!(all_points_finite(&paths), "{width} x {height}");
        let outline = assemble_outline(&style, width, height, 3.0, CurveMode::Precise);
        assert!(outline.points().iter().all(|p| p.is_finite()), "{width} x {height}");
    }
}

#[test]
fn outline_spreads_around_the_border() {
    let style = BorderStyle::uniform(12.0, Curvature::new(3.0), 4.0, Color::BLACK);
    let border = assemble_border(&style, 90.0, 60.0, CurveMode::Precise);

    let grown = assemble_outline(&style, 90.0, 60.0, 6.0, CurveMode::Precise);
    assert_eq!(grown.point_count(), border.outer.point_count());
    assert_eq!(grown.points()[0], Point::new(-6.0, 12.0));
    // the same shape as the outer edge of a box 6px larger all around, with 6px larger radii
    let larger = BorderStyle::uniform(18.0, Curvature::new(3.0), 0.0, Color::BLACK);
    let larger = assemble_border(&larger, 102.0, 72.0, CurveMode::Precise);
    for (p, q) in grown.points().into_iter().zip(larger.outer.points()) {
        assert!(p.approx_eq(q - Point::new(6.0, 6.0), 1e-9), "{p} vs {q}");
    }

    let shrunk = assemble_outline(&style, 90.0, 60.0, -4.0, CurveMode::Precise);
    assert_eq!(shrunk, border.inner);
}

#[test]
fn bevel_with_thick_top_border_trims() {
    let style = BorderStyle::uniform(0.0, Curvature::ROUND, 0.0, Color::BLACK)
        .with_corner(Corner::TopLeft, CornerStyle::new(60.0, Curvature::BEVEL))
        .with_edge(Edge::Top, EdgeStyle::new(50.0, Color::BLACK))
        .with_edge(Edge::Left, EdgeStyle::new(10.0, Color::BLACK));
    let paths = assemble_border(&style, 200.0, 100.0, CurveMode::Precise);

    let top_left = &paths.corners[Corner::TopLeft.index()];
    assert_eq!(top_left.regime, InsetRegime::Trimmed);
    let inner = top_left.inner.as_ref().expect("trimmed corner keeps a curve");
    let segments = inner.segments();
    assert_eq!(segments.len(), 2);

    // the trimmed segments join up and never fold back on themselves
    assert_eq!(segments[0].end(), segments[1].start());
    let mut prev = inner.start();
    for segment in &segments {
        for i in 1..=20 {
            let p = segment.eval(i as f64 / 20.0);
            assert!(p.x > prev.x - 1e-9, "x goes backwards at {p}");
            assert!(p.y < prev.y + 1e-9, "y goes backwards at {p}");
            prev = p;
        }
    }
    assert!((inner.start().x - 10.0).abs() < 1e-6);
    assert!((inner.end().y - 50.0).abs() < 1e-6);
}

#[test]
fn mixed_corners_produce_closed_paths() {
    let style = BorderStyle::uniform(30.0, Curvature::ROUND, 6.0, Color::BLACK)
        .with_corner(Corner::TopRight, CornerStyle::new(30.0, Curvature::NOTCH))
        .with_corner(Corner::BottomRight, CornerStyle::new(30.0, Curvature::SCOOP))
        .with_corner(Corner::BottomLeft, CornerStyle::elliptical(Size::new(50.0, 20.0), Curvature::SQUIRCLE));
    let paths = assemble_border(&style, 160.0, 90.0, CurveMode::Precise);

    // round 4 + notch 3 + scoop 4 + squircle 7
    assert_eq!(paths.outer.point_count(), 18);
    assert_eq!(paths.outer.commands().last(), Some(&PathCommand::from(Close)));
    assert_eq!(paths.inner.commands().last(), Some(&PathCommand::from(Close)));
    for geometry in &paths.corners {
        assert!(geometry.outer_center.is_finite());
        assert!(geometry.inner_center.is_finite());
    }
}

#[test]
fn fast_mode_uses_one_segment_per_corner() {
    let style = BorderStyle::uniform(25.0, Curvature::SQUIRCLE, 3.0, Color::BLACK);
    let precise = assemble_border(&style, 120.0, 80.0, CurveMode::Precise);
    let fast = assemble_border(&style, 120.0, 80.0, CurveMode::Fast);
    assert_eq!(precise.outer.point_count(), 28);
    assert_eq!(fast.outer.point_count(), 16);
    // both modes pass through the same superellipse midpoints
    for (p, f) in precise.corners.iter().zip(&fast.corners) {
        assert!(p.outer_center.approx_eq(f.outer_center, 1e-9));
    }
}

#[test]
fn invalid_inputs_are_clamped() {
    let style = BorderStyle::uniform(f64::NAN, Curvature::new(f64::NAN), -4.0, Color::BLACK);
    let paths = assemble_border(&style, 80.0, 40.0, CurveMode::Precise);
    for geometry in &paths.corners {
        assert_eq!(geometry.curvature, Curvature::ROUND);
        assert!(geometry.outer.points().iter().all(|p| p.is_finite()));
    }
    assert!(style.validate().is_err());
}

#[test]
fn painting_follows_edge_colors() {
    let colors = [Color(0xaa0000), Color(0x00aa00), Color(0x0000aa), Color(0xaaaa00)];
    let mut style = BorderStyle::uniform(12.0, Curvature::SCOOP, 3.0, Color::BLACK);
    for (edge, color) in Edge::ALL.into_iter().zip(colors) {
        style = style.with_edge(edge, EdgeStyle::new(3.0, color));
    }
    let mut recording = Recording::new();
    render_border(&style, 90.0, 60.0, &mut recording);
    let filled: Vec<Color> = recording
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill { color, .. } => Some(*color),
            DrawOp::Clip { .. } => None,
        })
        .collect();
    assert_eq!(filled, colors);
}

#[test]
fn canonical_curve_properties() {
    let size = Size::new(48.0, 32.0);
    for s in [-6.0, -1.0, -0.3, 0.0, 0.7, 1.0, 2.5, 6.0] {
        let curve = corner_curve_points(Curvature::new(s), size, CurveMode::Precise);
        assert_eq!(curve.start(), Point::new(0.0, 32.0));
        assert_eq!(curve.end(), Point::new(48.0, 0.0));
        assert_eq!(trim_curve(&curve, 0.0, 0.0).as_ref(), Some(&curve));
        assert_eq!(trim_curve(&curve, 100.0, 100.0), None);
    }
}

#[test]
fn square_corners_path_data() {
    let style = BorderStyle::uniform(10.0, Curvature::SQUARE, 0.0, Color::BLACK);
    let paths = assemble_border(&style, 100.0, 50.0, CurveMode::Precise);
    insta::assert_snapshot!(
        path_data(&paths.outer),
        @"M0,10 L0,0 L10,0 L90,0 L100,0 L100,10 L100,40 L100,50 L90,50 L10,50 L0,50 L0,40 Z"
    );
}

fn describe(svg: &Svg) -> String {
    let mut lines = Vec::new();
    for clip in svg.clip_paths() {
        let shape = clip.shape().expect("clip paths hold a shape");
        lines.push(format!(
            "clip {} in {:?} {}: {}",
            clip.id.as_deref().unwrap_or("?"),
            clip.clip_path.as_deref(),
            shape.clip_rule.as_deref().unwrap_or("?"),
            shape.d.as_deref().unwrap_or(""),
        ));
    }
    for path in svg.paths() {
        lines.push(format!(
            "fill {} {} in {:?}: {}",
            path.fill.as_deref().unwrap_or("?"),
            path.fill_rule.as_deref().unwrap_or("?"),
            path.clip_path.as_deref(),
            path.d.as_deref().unwrap_or(""),
        ));
    }
    lines.join("\n")
}

#[test]
fn square_corners_svg() {
    let style = BorderStyle::uniform(10.0, Curvature::SQUARE, 2.0, Color::BLACK);
    let mut writer = SvgWriter::new();
    assemble_border(&style, 100.0, 50.0, CurveMode::Precise).paint(&mut writer);
    let svg = writer.document(100.0, 50.0);
    assert_eq!(svg.view_box.as_deref(), Some("0 0 100 50"));
    insta::assert_snapshot!(describe(&svg), @r##"
    clip clip0 in None nonzero: M0,10 L0,0 L10,0 L90,0 L100,0 L100,10 L100,40 L100,50 L90,50 L10,50 L0,50 L0,40 Z
    clip clip1 in Some("url(#clip0)") evenodd: M0,10 L0,0 L10,0 L90,0 L100,0 L100,10 L100,40 L100,50 L90,50 L10,50 L0,50 L0,40 Z M2,10 L2,2 L10,2 L90,2 L98,2 L98,10 L98,40 L98,48 L90,48 L10,48 L2,48 L2,40 Z
    fill #000000 nonzero in Some("url(#clip1)"): M0,0 L0,0 L2,2 L98,2 L100,0 L100,0 Z
    fill #000000 nonzero in Some("url(#clip1)"): M100,0 L100,0 L98,2 L98,48 L100,50 L100,50 Z
    fill #000000 nonzero in Some("url(#clip1)"): M100,50 L100,50 L98,48 L2,48 L0,50 L0,50 Z
    fill #000000 nonzero in Some("url(#clip1)"): M0,50 L0,50 L2,48 L2,2 L0,0 L0,0 Z
    "##);
}

#[test]
fn rendered_svg_is_well_formed() {
    let style = BorderStyle::uniform(16.0, Curvature::SQUIRCLE, 3.0, Color::rgb(0x33, 0x66, 0x99));
    let xml = render_svg(&style, 120.0, 80.0, CurveMode::Fast).unwrap();
    let svg: Svg = facet_xml::from_str(&xml).unwrap();
    assert_eq!(svg.width.as_deref(), Some("120"));
    assert_eq!(svg.clip_paths().len(), 2);
    assert_eq!(svg.paths().len(), 4);
    assert!(svg.paths().iter().all(|p| p.fill.as_deref() == Some("#336699")));
}
