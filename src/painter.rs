// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Deref, DerefMut};
use std::path::Path;

use resvg::tiny_skia;

use crate::geom::Rect;
use crate::Error;

/// A painting surface.
///
/// Modeled after `QPainter`: a stack of states, each with
/// a transform and render hints, on top of a pixmap.
pub trait Painter {
    /// Pushes the current state onto the stack.
    fn save(&mut self);

    /// Pops the last saved state from the stack.
    fn restore(&mut self);

    /// Enables or disables anti-aliasing.
    ///
    /// Part of the saved state. Painters that rasterize on their own may
    /// honor it; `resvg` itself picks anti-aliasing per shape from
    /// `shape-rendering` (see `Options::shape_rendering`).
    fn set_antialiasing(&mut self, on: bool);

    /// Returns the current transform.
    fn transform(&self) -> tiny_skia::Transform;

    /// Sets the current transform.
    ///
    /// When `combine` is set, `ts` is applied on top of the current transform
    /// instead of replacing it.
    fn set_transform(&mut self, ts: tiny_skia::Transform, combine: bool);

    /// Returns the rect the painter maps onto by default.
    fn viewport(&self) -> Rect;

    /// Returns the pixels to draw onto.
    fn pixmap(&mut self) -> tiny_skia::PixmapMut<'_>;
}

/// Saves the painter state on creation and restores it on drop.
pub(crate) struct PainterGuard<'a, P: Painter + ?Sized> {
    painter: &'a mut P,
}

impl<'a, P: Painter + ?Sized> PainterGuard<'a, P> {
    pub fn new(painter: &'a mut P) -> Self {
        painter.save();
        PainterGuard { painter }
    }
}

impl<P: Painter + ?Sized> Deref for PainterGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.painter
    }
}

impl<P: Painter + ?Sized> DerefMut for PainterGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.painter
    }
}

impl<P: Painter + ?Sized> Drop for PainterGuard<'_, P> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct State {
    transform: tiny_skia::Transform,
    antialiasing: bool,
}

impl Default for State {
    fn default() -> Self {
        State {
            transform: tiny_skia::Transform::default(),
            antialiasing: false,
        }
    }
}

/// A `tiny-skia` based painter.
///
/// Contains premultiplied RGBA8888 pixels.
pub struct Canvas {
    pixmap: tiny_skia::Pixmap,
    viewport: Rect,
    state: State,
    stack: Vec<State>,
}

impl Canvas {
    /// Allocates a new transparent canvas.
    ///
    /// Returns [`Error::NoCanvas`] when width or height is zero
    /// or the canvas is too big.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        match tiny_skia::Pixmap::new(width, height) {
            Some(pixmap) => Ok(Self::from_pixmap(pixmap)),
            None => {
                log::warn!("Failed to create a {}x{} canvas.", width, height);
                Err(Error::NoCanvas)
            }
        }
    }

    /// Creates a canvas on top of an existing pixmap.
    pub fn from_pixmap(pixmap: tiny_skia::Pixmap) -> Self {
        let viewport = Rect::new(0.0, 0.0, pixmap.width() as f32, pixmap.height() as f32);
        Canvas {
            pixmap,
            viewport,
            state: State::default(),
            stack: Vec::new(),
        }
    }

    /// Returns canvas width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Returns canvas height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Sets a viewport.
    ///
    /// By default, the viewport covers the whole canvas.
    pub fn set_viewport(&mut self, rect: Rect) {
        self.viewport = rect;
    }

    /// Checks that anti-aliasing is enabled.
    ///
    /// The flag is only recorded. Use `crispEdges` in
    /// `Options::shape_rendering` to disable anti-aliasing for a `Canvas`.
    #[inline]
    pub fn antialiasing(&self) -> bool {
        self.state.antialiasing
    }

    /// Returns the number of saved states.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Fills the whole canvas with a color.
    pub fn fill(&mut self, color: tiny_skia::Color) {
        self.pixmap.fill(color);
    }

    /// Returns the underlying pixmap.
    #[inline]
    pub fn as_pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    /// Returns the underlying pixmap.
    #[inline]
    pub fn into_pixmap(self) -> tiny_skia::Pixmap {
        self.pixmap
    }

    /// Encodes the canvas into a PNG data.
    pub fn encode_png(&self) -> Result<Vec<u8>, Error> {
        self.pixmap.encode_png().map_err(|e| {
            log::warn!("Failed to encode a PNG cause {}.", e);
            Error::FileWriteFailed
        })
    }

    /// Saves the canvas as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.pixmap.save_png(path).map_err(|e| {
            log::warn!("Failed to save a PNG cause {}.", e);
            Error::FileWriteFailed
        })
    }
}

impl Painter for Canvas {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("Unbalanced painter state restore."),
        }
    }

    fn set_antialiasing(&mut self, on: bool) {
        self.state.antialiasing = on;
    }

    fn transform(&self) -> tiny_skia::Transform {
        self.state.transform
    }

    fn set_transform(&mut self, ts: tiny_skia::Transform, combine: bool) {
        if combine {
            self.state.transform = self.state.transform.pre_concat(ts);
        } else {
            self.state.transform = ts;
        }
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn pixmap(&mut self) -> tiny_skia::PixmapMut<'_> {
        self.pixmap.as_mut()
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("viewport", &self.viewport)
            .field("transform", &self.state.transform)
            .field("save_depth", &self.stack.len())
            .finish()
    }
}
