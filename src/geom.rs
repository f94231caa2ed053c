// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! 2D geometric primitives.

use resvg::tiny_skia;

/// A 2D size representation.
///
/// Unlike `usvg::Size`, can be zero.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new `Size` from values.
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }

    /// Returns width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Checks that both sides are positive and finite.
    #[inline]
    pub fn is_valid(&self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }

    /// Converts into `IntSize` by rounding each side.
    #[inline]
    pub fn to_int_size(&self) -> IntSize {
        IntSize::new(self.width.round() as u32, self.height.round() as u32)
    }
}

impl From<resvg::usvg::Size> for Size {
    #[inline]
    fn from(size: resvg::usvg::Size) -> Self {
        Size::new(size.width(), size.height())
    }
}

/// A 2D integer size representation.
///
/// Can be zero.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct IntSize {
    width: u32,
    height: u32,
}

impl IntSize {
    /// Creates a new `IntSize` from values.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        IntSize { width, height }
    }

    /// Returns width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns width and height as a tuple.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// A rect representation.
///
/// Unlike `tiny_skia::Rect`, can be empty or even invalid.
/// Only a rect with positive and finite width and height is valid.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a new `Rect` from values.
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new `Rect` at the origin.
    #[inline]
    pub fn from_size(size: Size) -> Self {
        Rect::new(0.0, 0.0, size.width(), size.height())
    }

    /// Returns rect's X position.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns rect's Y position.
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns rect's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns rect's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns rect's size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks that the rect has a positive and finite size
    /// and a finite position.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.size().is_valid()
    }

    /// Converts into `IntRect` by rounding each component.
    #[inline]
    pub fn to_int_rect(&self) -> IntRect {
        IntRect::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.width.round() as u32,
            self.height.round() as u32,
        )
    }
}

impl From<tiny_skia::Rect> for Rect {
    #[inline]
    fn from(r: tiny_skia::Rect) -> Self {
        Rect::new(r.x(), r.y(), r.width(), r.height())
    }
}

/// A 2D integer rect representation.
///
/// Can be empty.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct IntRect {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl IntRect {
    /// Creates a new `IntRect` from values.
    #[inline]
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        IntRect {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns rect's X position.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Returns rect's Y position.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns rect's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns rect's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns rect's size.
    #[inline]
    pub fn size(&self) -> IntSize {
        IntSize::new(self.width, self.height)
    }
}

/// Returns a transform that maps a `src` sized area onto the `target` rect.
///
/// Scales are independent, so the aspect ratio is not preserved.
///
/// Returns `None` when either size is not valid.
pub fn fit_transform(src: Size, target: Rect) -> Option<tiny_skia::Transform> {
    if !src.is_valid() || !target.is_valid() {
        return None;
    }

    let sx = target.width() / src.width();
    let sy = target.height() / src.height();
    Some(tiny_skia::Transform::from_row(
        sx,
        0.0,
        0.0,
        sy,
        target.x(),
        target.y(),
    ))
}

/// Returns a transform that maps a `view_box` onto an `img_size` sized area
/// according to `aspect`.
///
/// Returns `None` when either size is not valid.
pub(crate) fn view_box_to_transform(
    view_box: Rect,
    aspect: svgtypes::AspectRatio,
    img_size: Size,
) -> Option<tiny_skia::Transform> {
    if !view_box.is_valid() || !img_size.is_valid() {
        return None;
    }

    let sx = img_size.width() / view_box.width();
    let sy = img_size.height() / view_box.height();

    let (sx, sy) = if aspect.align == svgtypes::Align::None {
        (sx, sy)
    } else {
        let s = if aspect.slice { sx.max(sy) } else { sx.min(sy) };
        (s, s)
    };

    let x = -view_box.x() * sx;
    let y = -view_box.y() * sy;
    let w = img_size.width() - view_box.width() * sx;
    let h = img_size.height() - view_box.height() * sy;

    let (tx, ty) = aligned_pos(aspect.align, x, y, w, h);
    Some(tiny_skia::Transform::from_row(sx, 0.0, 0.0, sy, tx, ty))
}

fn aligned_pos(align: svgtypes::Align, x: f32, y: f32, w: f32, h: f32) -> (f32, f32) {
    use svgtypes::Align;

    match align {
        Align::None => (x, y),
        Align::XMinYMin => (x, y),
        Align::XMidYMin => (x + w / 2.0, y),
        Align::XMaxYMin => (x + w, y),
        Align::XMinYMid => (x, y + h / 2.0),
        Align::XMidYMid => (x + w / 2.0, y + h / 2.0),
        Align::XMaxYMid => (x + w, y + h / 2.0),
        Align::XMinYMax => (x, y + h),
        Align::XMidYMax => (x + w / 2.0, y + h),
        Align::XMaxYMax => (x + w, y + h),
    }
}

#[inline]
fn is_positive(n: f32) -> bool {
    n.is_finite() && n > 0.0
}
