//! `embedded-graphics` integration
//!
//! Lets embedded-graphics primitives and fonts render into a
//! [`FrameBuffer`]. The buffer is additive, so `Off` pixels are ignored,
//! and pixels outside the buffer are dropped as `DrawTarget` expects.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use crate::framebuffer::FrameBuffer;

impl<const N: usize> OriginDimensions for FrameBuffer<N> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<const N: usize> DrawTarget for FrameBuffer<N> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_on() {
                // Off-screen pixels are clipped regardless of the bounds policy
                let _ = self.set(point.x, point.y);
            }
        }
        Ok(())
    }
}
