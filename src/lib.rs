//! Superellipse corner curves for box borders.
//!
//! A corner's shape is a single number, the curvature `s`: the corner follows
//! the superellipse `x^k + y^k = 1` with `k = 2^s`, from a notch (`s = -∞`)
//! through scoop, bevel, round and squircle to a square corner (`s = +∞`).
//! Each corner is approximated by one or two cubic Bezier segments, and the
//! inner (border-inset) corner is derived so that unequal or wide borders
//! still produce a clean ring.
//!
//! ```
//! use cornershape::{BorderStyle, Color, Curvature, CurveMode, Recording, assemble_border};
//!
//! let style = BorderStyle::uniform(24.0, Curvature::SQUIRCLE, 4.0, Color::rgb(0x33, 0x66, 0x99));
//! let paths = assemble_border(&style, 200.0, 120.0, CurveMode::Precise);
//!
//! let mut sink = Recording::new();
//! paths.paint(&mut sink);
//! assert_eq!(sink.ops.len(), 6);
//! ```

pub mod errors;
pub mod log;
pub mod render;
pub mod types;

pub use errors::StyleError;
pub use render::{
    BorderPaths, BorderStyle, Corner, CornerCurve, CornerGeometry, CornerStyle, Curvature, CurveMode, Edge,
    EdgeStyle, EdgeWidths, FillRule, Path, PathSink, Recording, assemble_border, assemble_outline,
    corner_curve_points, render_border, render_svg, resolve_corner, trim_curve,
};
pub use types::{Color, NumericError, Point, Size};
