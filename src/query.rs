// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use resvg::tiny_skia;

use crate::geom::{IntRect, IntSize, Rect, Size};
use crate::Renderer;

impl Renderer {
    /// Checks that the document has nothing to render.
    ///
    /// A document is empty when it has no renderable elements and doesn't
    /// define `width`, `height` or `viewBox`. Such document has a 100x100 size.
    ///
    /// Returns `true` when nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.handle.document().map_or(true, |doc| doc.is_empty())
    }

    /// Returns the document size, rounded.
    pub fn default_size(&self) -> IntSize {
        self.default_size_f().to_int_size()
    }

    /// Returns the document size.
    ///
    /// Zero when nothing is loaded.
    pub fn default_size_f(&self) -> Size {
        self.view_box_f().size()
    }

    /// Returns the document view box, rounded.
    pub fn view_box(&self) -> IntRect {
        self.view_box_f().to_int_rect()
    }

    /// Returns the document view box.
    ///
    /// Zero when nothing is loaded.
    pub fn view_box_f(&self) -> Rect {
        self.handle
            .document()
            .map(|doc| doc.view_box())
            .unwrap_or_default()
    }

    /// Returns a bounding rectangle of the element with the given `id`.
    ///
    /// Transforms of parent elements are not affecting the bounds.
    ///
    /// Returns an empty rect when nothing is loaded or there is no such element.
    pub fn bounds_on_element(&self, id: &str) -> Rect {
        self.handle
            .document()
            .and_then(|doc| doc.node_bbox(id))
            .unwrap_or_default()
    }

    /// Returns `true` if an element with such an `id` exists.
    pub fn element_exists(&self, id: &str) -> bool {
        self.handle
            .document()
            .map_or(false, |doc| doc.node_exists(id))
    }

    /// Returns an element's transform.
    ///
    /// Returns an identity transform when nothing is loaded or there is no such element.
    pub fn transform_for_element(&self, id: &str) -> tiny_skia::Transform {
        self.handle
            .document()
            .and_then(|doc| doc.node_transform(id))
            .unwrap_or_default()
    }
}
