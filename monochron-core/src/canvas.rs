//! Pixel sink trait
//!
//! The rasterizer, text renderer and icon decoder draw through this trait
//! instead of owning a buffer. They borrow the target mutably for the
//! duration of one call and never keep a copy of its pixels.

use crate::error::RenderError;

/// A monochrome surface that pixels can be turned on in
///
/// Surfaces are additive: there is no way to turn a single pixel off.
pub trait Canvas {
    /// Turn on the pixel at (`x`, `y`)
    ///
    /// Coordinates are signed so that line and text math can run past the
    /// edges; the implementation decides whether that is an error.
    fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), RenderError>;

    /// Pixel dimensions as (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Whether writes outside [`Canvas::dimensions`] are dropped instead
    /// of failing
    ///
    /// Renderers may skip work that can only land off-canvas when this
    /// returns true.
    fn clips(&self) -> bool {
        false
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
        C::set_pixel(self, x, y)
    }

    fn dimensions(&self) -> (u16, u16) {
        C::dimensions(self)
    }

    fn clips(&self) -> bool {
        C::clips(self)
    }
}
