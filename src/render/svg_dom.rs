//! Facet-derived SVG elements for border output.
//!
//! Only what a painted border needs: the root, `<defs>`, `<clipPath>` and
//! `<path>`. Serialization and parsing both go through `facet-xml`.

use facet::Facet;
use facet_xml as xml;

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "defs")]
    Defs(Defs),
    #[facet(rename = "clipPath")]
    ClipPath(ClipPath),
    #[facet(rename = "path")]
    Path(SvgPath),
}

/// `<defs>`
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Defs {
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// `<clipPath>`, optionally clipped itself by an earlier clip path
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct ClipPath {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute, rename = "clip-path")]
    pub clip_path: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// `<path>`, used both for fills and inside clip paths
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct SvgPath {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-rule")]
    pub fill_rule: Option<String>,
    #[facet(xml::attribute, rename = "clip-rule")]
    pub clip_rule: Option<String>,
    #[facet(xml::attribute, rename = "clip-path")]
    pub clip_path: Option<String>,
}

impl Svg {
    /// The `<clipPath>` elements inside `<defs>`, in document order
    pub fn clip_paths(&self) -> Vec<&ClipPath> {
        self.children
            .iter()
            .filter_map(|node| match node {
                SvgNode::Defs(defs) => Some(defs),
                _ => None,
            })
            .flat_map(|defs| &defs.children)
            .filter_map(|node| match node {
                SvgNode::ClipPath(clip) => Some(clip),
                _ => None,
            })
            .collect()
    }

    /// The top-level `<path>` elements, in drawing order
    pub fn paths(&self) -> Vec<&SvgPath> {
        self.children
            .iter()
            .filter_map(|node| match node {
                SvgNode::Path(path) => Some(path),
                _ => None,
            })
            .collect()
    }
}

impl ClipPath {
    /// The clip shape: the first `<path>` child
    pub fn shape(&self) -> Option<&SvgPath> {
        self.children.iter().find_map(|node| match node {
            SvgNode::Path(path) => Some(path),
            _ => None,
        })
    }
}
