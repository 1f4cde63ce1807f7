//! Error types for the validating style boundary.
//!
//! The geometry itself never fails: bad inputs are clamped by
//! [`BorderStyle::sanitized`](crate::render::BorderStyle::sanitized). These
//! errors are for callers who want to reject them instead.

use miette::Diagnostic;
use thiserror::Error;

use crate::render::{Corner, Edge};
use crate::types::NumericError;

/// Errors found while validating a border style
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("invalid {corner} radius: {source}")]
    #[diagnostic(
        code(corner::style::invalid_radius),
        help("corner radii must be finite and non-negative")
    )]
    InvalidRadius {
        corner: Corner,
        #[source]
        source: NumericError,
    },

    #[error("invalid {corner} curvature: value is NaN")]
    #[diagnostic(
        code(corner::style::invalid_curvature),
        help("use a finite curvature, or ±infinity for square and notch corners")
    )]
    InvalidCurvature { corner: Corner },

    #[error("invalid {edge} border width: {source}")]
    #[diagnostic(
        code(corner::style::invalid_width),
        help("border widths must be finite and non-negative")
    )]
    InvalidWidth {
        edge: Edge,
        #[source]
        source: NumericError,
    },

    #[error("invalid box size {width}x{height}")]
    #[diagnostic(code(corner::style::invalid_box_size))]
    InvalidBoxSize { width: f64, height: f64 },
}
