// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::geom::{fit_transform, Rect};
use crate::painter::{Painter, PainterGuard};
use crate::Renderer;

impl Renderer {
    /// Renders the document onto the whole painter viewport.
    ///
    /// Does nothing when nothing is loaded.
    pub fn render<P: Painter + ?Sized>(&self, p: &mut P) {
        self.render_to_rect(p, Rect::default());
    }

    /// Renders the document onto the specified `bounds`.
    ///
    /// If `bounds` is not valid, the document is mapped onto the whole painter viewport.
    /// The view box is stretched onto `bounds`, so the aspect ratio is not preserved
    /// and the root `preserveAspectRatio` has no effect.
    ///
    /// The painter state is restored afterwards.
    pub fn render_to_rect<P: Painter + ?Sized>(&self, p: &mut P, bounds: Rect) {
        let doc = match self.handle.document() {
            Some(doc) => doc,
            None => return,
        };

        let view_box = doc.view_box();
        let r = if bounds.is_valid() { bounds } else { p.viewport() };

        let ts = match fit_transform(view_box.size(), r) {
            Some(ts) => ts,
            None => {
                log::warn!("Cannot map {:?} onto {:?}.", view_box, r);
                return;
            }
        };

        let mut p = PainterGuard::new(p);
        p.set_antialiasing(true);
        p.set_transform(ts, true);

        let ts = p.transform();
        doc.render(ts, &mut p.pixmap());
    }

    /// Renders the element with `id` onto the whole painter viewport.
    pub fn render_element<P: Painter + ?Sized>(&self, p: &mut P, id: &str) {
        self.render_element_to_rect(p, id, Rect::default());
    }

    /// Renders the element with `id` onto the specified `bounds`.
    ///
    /// If `bounds` is not valid, the element is mapped onto the whole painter viewport.
    /// The element's bounding box is used as a source rect and transforms
    /// of parent elements are ignored.
    ///
    /// A missing element is reported to the log and skipped.
    pub fn render_element_to_rect<P: Painter + ?Sized>(&self, p: &mut P, id: &str, bounds: Rect) {
        let doc = match self.handle.document() {
            Some(doc) => doc,
            None => return,
        };

        let bbox = match doc.node_bbox(id) {
            Some(bbox) => bbox,
            None => {
                log::warn!("Element '{}' has no bounding box.", id);
                return;
            }
        };

        let r = if bounds.is_valid() { bounds } else { p.viewport() };

        let ts = match fit_transform(bbox.size(), r) {
            Some(ts) => ts,
            None => {
                log::warn!("Cannot map element '{}' {:?} onto {:?}.", id, bbox, r);
                return;
            }
        };

        let mut p = PainterGuard::new(p);
        p.set_antialiasing(true);
        p.set_transform(ts, true);

        let ts = p.transform();
        doc.render_node(id, ts, &mut p.pixmap());
    }
}
