// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;
use std::str::FromStr;

use resvg::tiny_skia;
use resvg::usvg::{self, roxmltree};

use crate::geom::{self, Rect, Size};
use crate::Error;

/// A parsed SVG document.
///
/// Owns the underlying `usvg::Tree`, which is released on drop.
pub(crate) struct Document {
    tree: usvg::Tree,
    view_box: Rect,
    // Undoes the root `viewBox` mapping already applied by the tree.
    view_box_inv: tiny_skia::Transform,
    empty: bool,
}

impl Document {
    /// Parses a document from an SVG or SVGZ file.
    pub fn from_file(path: &Path, opt: &usvg::Options) -> Result<Self, Error> {
        let data = std::fs::read(path).map_err(|_| Error::FileOpenFailed)?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "svg" | "svgz" => Self::from_data(&data, opt),
            _ => Err(Error::InvalidFileSuffix),
        }
    }

    /// Parses a document from an SVG data.
    ///
    /// Can contain an SVG string or gzip compressed data.
    pub fn from_data(data: &[u8], opt: &usvg::Options) -> Result<Self, Error> {
        if data.starts_with(&[0x1f, 0x8b]) {
            let data = usvg::decompress_svgz(data)?;
            Self::from_utf8(&data, opt)
        } else {
            Self::from_utf8(data, opt)
        }
    }

    fn from_utf8(data: &[u8], opt: &usvg::Options) -> Result<Self, Error> {
        let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;

        let xml_opt = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let xml = roxmltree::Document::parse_with_options(text, xml_opt).map_err(|e| {
            log::warn!("SVG data parsing failed cause {}.", e);
            Error::ParsingFailed
        })?;

        let tree = usvg::Tree::from_xmltree(&xml, opt)?;

        let root = xml.root_element();
        let size = Size::from(tree.size());
        let (view_box, view_box_inv) = match parse_view_box(root) {
            Some(vb) => {
                let aspect = root
                    .attribute("preserveAspectRatio")
                    .and_then(|v| svgtypes::AspectRatio::from_str(v).ok())
                    .unwrap_or_default();

                let inv = geom::view_box_to_transform(vb, aspect, size)
                    .and_then(|ts| ts.invert())
                    .ok_or_else(|| {
                        log::warn!("Invalid view box: {:?}.", vb);
                        Error::ParsingFailed
                    })?;
                (vb, inv)
            }
            None => (Rect::from_size(size), tiny_skia::Transform::identity()),
        };

        // A document without any nodes and without its own size
        // is rendered on the fallback canvas only.
        let has_size = ["width", "height", "viewBox"]
            .iter()
            .any(|name| root.has_attribute(*name));
        let empty = !tree.root().has_children() && !has_size;

        Ok(Document {
            tree,
            view_box,
            view_box_inv,
            empty,
        })
    }

    /// Returns the document's view box.
    #[inline]
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Checks that the document has no renderable nodes and no size of its own.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns a node's bounding box in object coordinates.
    ///
    /// Transforms of parent elements are not applied.
    pub fn node_bbox(&self, id: &str) -> Option<Rect> {
        if id.is_empty() {
            log::warn!("Node ID must not be empty.");
            return None;
        }

        match self.tree.node_by_id(id) {
            Some(node) => Some(Rect::from(node.bounding_box())),
            None => {
                log::warn!("No node with '{}' ID is in the tree.", id);
                None
            }
        }
    }

    /// Checks that a renderable node with such an ID exists.
    pub fn node_exists(&self, id: &str) -> bool {
        !id.is_empty() && self.tree.node_by_id(id).is_some()
    }

    /// Returns a node's transform, relative to the document.
    pub fn node_transform(&self, id: &str) -> Option<tiny_skia::Transform> {
        if id.is_empty() {
            return None;
        }

        self.tree.node_by_id(id).map(|node| node.abs_transform())
    }

    /// Renders the whole document onto the pixmap.
    ///
    /// `transform` maps the view box, moved to the origin, onto the pixmap.
    pub fn render(&self, transform: tiny_skia::Transform, pixmap: &mut tiny_skia::PixmapMut) {
        let ts = transform
            .pre_translate(-self.view_box.x(), -self.view_box.y())
            .pre_concat(self.view_box_inv);
        resvg::render(&self.tree, ts, pixmap);
    }

    /// Renders a single node onto the pixmap.
    ///
    /// `transform` maps the node's bounding box, moved to the origin, onto the pixmap.
    /// Transforms of parent elements are ignored.
    ///
    /// Returns `false` when a node doesn't exist or has nothing to render.
    pub fn render_node(
        &self,
        id: &str,
        transform: tiny_skia::Transform,
        pixmap: &mut tiny_skia::PixmapMut,
    ) -> bool {
        let node = match self.tree.node_by_id(id) {
            Some(node) => node,
            None => {
                log::warn!("A node with '{}' ID wasn't found.", id);
                return false;
            }
        };

        // `resvg::render_node` moves the node's absolute layer bbox to the origin.
        let layer = match node.abs_layer_bounding_box() {
            Some(layer) => layer,
            None => {
                log::warn!("Node '{}' has zero size.", id);
                return false;
            }
        };

        // A group bbox doesn't include the group's own transform.
        let own_inv = match node {
            usvg::Node::Group(ref group) => group.transform().invert(),
            _ => Some(tiny_skia::Transform::identity()),
        };
        let own_inv = match own_inv {
            Some(ts) => ts,
            None => {
                log::warn!("Node '{}' has a non-invertible transform.", id);
                return false;
            }
        };

        let bbox = node.bounding_box();
        let ts = transform
            .pre_translate(-bbox.x(), -bbox.y())
            .pre_concat(own_inv)
            .pre_translate(layer.x(), layer.y());
        resvg::render_node(node, ts, pixmap).is_some()
    }
}

fn parse_view_box(root: roxmltree::Node) -> Option<Rect> {
    let value = root.attribute("viewBox")?;
    match svgtypes::ViewBox::from_str(value) {
        Ok(vb) if vb.w > 0.0 && vb.h > 0.0 => Some(Rect::new(
            vb.x as f32,
            vb.y as f32,
            vb.w as f32,
            vb.h as f32,
        )),
        _ => None,
    }
}
