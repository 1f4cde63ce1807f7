//! Corner curve construction and border rendering
//!
//! This module is organized into submodules, leaf first:
//! - `defaults`: tuning constants
//! - `curvature`: the curvature parameter and superellipse helpers
//! - `bezier`: cubic segments, subdivision and line intersection
//! - `curve`: corner curves in the canonical frame, and trimming
//! - `types`: border style records
//! - `geometry`: corner placement and inner-corner resolution
//! - `path_builder`: outer/inner paths, edge regions and painting
//! - `svg_dom`: facet-derived SVG elements
//! - `svg`: SVG output

pub mod bezier;
pub mod curvature;
pub mod curve;
pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod svg;
pub mod svg_dom;
pub mod types;

// Re-export commonly used items
pub use bezier::{Cubic, TrimLine, intersect_with_line, line_roots};
pub use curvature::{Curvature, exponent_for, inner_curvature, normal_offset_for, s_for};
pub use curve::{CornerCurve, CurveCache, CurveMode, build_canonical_curve, corner_curve_points, trim_curve};
pub use geometry::{
    Corner, CornerGeometry, CornerRect, CornerResolver, Edge, InsetRegime, map_to_corner, resolve_corner,
};
pub use path_builder::{
    BorderPaths, DrawOp, EdgeRegion, FillRule, Path, PathCommand, PathSink, Recording, assemble_border,
    assemble_outline, render_border,
};
pub use svg::{SvgWriter, path_data, render_svg};
pub use svg_dom::{ClipPath, Svg, SvgNode, SvgPath};
pub use types::*;
