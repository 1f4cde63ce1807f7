//! Border style records: per-corner radius and curvature, per-edge width and
//! color.

use super::curvature::Curvature;
use super::geometry::{Corner, Edge};
use crate::errors::StyleError;
use crate::log::warn;
use crate::types::{Color, Size, sanitize_length, try_non_negative};

/// Border widths per edge
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EdgeWidths {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeWidths {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        EdgeWidths { top, right, bottom, left }
    }

    pub const fn uniform(width: f64) -> Self {
        EdgeWidths::new(width, width, width, width)
    }

    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Negative and non-finite widths become 0
    pub fn sanitized(&self) -> Self {
        EdgeWidths::new(
            sanitize_length(self.top),
            sanitize_length(self.right),
            sanitize_length(self.bottom),
            sanitize_length(self.left),
        )
    }
}

/// Shape of one corner
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CornerStyle {
    /// Horizontal (`width`) and vertical (`height`) radius
    pub radius: Size,
    pub curvature: Curvature,
}

impl CornerStyle {
    /// A corner with equal radii
    pub const fn new(radius: f64, curvature: Curvature) -> Self {
        CornerStyle { radius: Size::square(radius), curvature }
    }

    pub const fn elliptical(radius: Size, curvature: Curvature) -> Self {
        CornerStyle { radius, curvature }
    }

    /// Create a corner style with validation, for `corner` of a box.
    pub fn try_new(corner: Corner, radius: Size, curvature: f64) -> Result<Self, StyleError> {
        let checked = |v| try_non_negative(v).map_err(|source| StyleError::InvalidRadius { corner, source });
        let radius = Size::new(checked(radius.width)?, checked(radius.height)?);
        let curvature = Curvature::try_new(curvature).map_err(|_| StyleError::InvalidCurvature { corner })?;
        Ok(CornerStyle { radius, curvature })
    }

    fn sanitized(&self) -> Self {
        CornerStyle {
            radius: Size::new(sanitize_length(self.radius.width), sanitize_length(self.radius.height)),
            curvature: self.curvature.sanitized(),
        }
    }
}

/// Width and color of one edge
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EdgeStyle {
    pub width: f64,
    pub color: Color,
}

impl EdgeStyle {
    pub const fn new(width: f64, color: Color) -> Self {
        EdgeStyle { width, color }
    }
}

/// The complete border of a box: corners clockwise from the top left,
/// edges clockwise from the top.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BorderStyle {
    pub corners: [CornerStyle; 4],
    pub edges: [EdgeStyle; 4],
}

impl BorderStyle {
    /// Same corners and same edges all around
    pub fn uniform(radius: f64, curvature: Curvature, width: f64, color: Color) -> Self {
        BorderStyle {
            corners: [CornerStyle::new(radius, curvature); 4],
            edges: [EdgeStyle::new(width, color); 4],
        }
    }

    pub fn corner(&self, corner: Corner) -> &CornerStyle {
        &self.corners[corner.index()]
    }

    pub fn edge(&self, edge: Edge) -> &EdgeStyle {
        &self.edges[edge.index()]
    }

    pub fn with_corner(mut self, corner: Corner, style: CornerStyle) -> Self {
        self.corners[corner.index()] = style;
        self
    }

    pub fn with_edge(mut self, edge: Edge, style: EdgeStyle) -> Self {
        self.edges[edge.index()] = style;
        self
    }

    /// Set the curvature of every corner
    pub fn with_curvature(mut self, curvature: Curvature) -> Self {
        for corner in &mut self.corners {
            corner.curvature = curvature;
        }
        self
    }

    pub fn edge_widths(&self) -> EdgeWidths {
        let [top, right, bottom, left] = self.edges.map(|e| e.width);
        EdgeWidths::new(top, right, bottom, left)
    }

    /// Clamp the style to something drawable on a `box_size` box.
    ///
    /// Bad lengths become 0, NaN curvature becomes round, and when adjacent
    /// radii add up to more than their side all radii shrink by the same
    /// factor.
    pub fn sanitized(&self, box_size: Size) -> BorderStyle {
        let mut style = *self;
        for corner in &mut style.corners {
            *corner = corner.sanitized();
        }
        for edge in &mut style.edges {
            edge.width = sanitize_length(edge.width);
        }

        let (w, h) = (sanitize_length(box_size.width), sanitize_length(box_size.height));
        let r = |c: Corner| style.corner(c).radius;
        let sides = [
            (w, r(Corner::TopLeft).width + r(Corner::TopRight).width),
            (w, r(Corner::BottomLeft).width + r(Corner::BottomRight).width),
            (h, r(Corner::TopLeft).height + r(Corner::BottomLeft).height),
            (h, r(Corner::TopRight).height + r(Corner::BottomRight).height),
        ];
        let factor = sides
            .into_iter()
            .filter(|(_, sum)| *sum > 0.0)
            .map(|(side, sum)| side / sum)
            .fold(1.0_f64, f64::min);
        if factor < 1.0 {
            warn!(factor, "corner radii overlap, scaling down");
            for corner in &mut style.corners {
                corner.radius = corner.radius.scaled_by(factor);
            }
        }
        style
    }

    /// Reject NaN, infinite or negative lengths and NaN curvatures.
    pub fn validate(&self) -> Result<(), StyleError> {
        for corner in Corner::ALL {
            let style = self.corner(corner);
            CornerStyle::try_new(corner, style.radius, style.curvature.value())?;
        }
        for edge in Edge::ALL {
            try_non_negative(self.edge(edge).width).map_err(|source| StyleError::InvalidWidth { edge, source })?;
        }
        Ok(())
    }
}

/// Check a box size: both extents finite and non-negative.
pub fn validate_box_size(width: f64, height: f64) -> Result<Size, StyleError> {
    match (try_non_negative(width), try_non_negative(height)) {
        (Ok(w), Ok(h)) => Ok(Size::new(w, h)),
        _ => Err(StyleError::InvalidBoxSize { width, height }),
    }
}
