//! Icon bitmaps
//!
//! Icons use a fixed row format: every row is exactly three bytes, so an
//! icon is always 24 pixels wide and `len / 3` rows tall. Within a byte
//! the most significant bit is the leftmost pixel. This is the layout of
//! the icon tables, not a general image format; a trailing partial row
//! is drawn as far as it goes.

use crate::canvas::Canvas;
use crate::error::RenderError;

/// Bytes per icon row
pub const ICON_ROW_BYTES: usize = 3;

/// Icon width in pixels
pub const ICON_WIDTH: u16 = (ICON_ROW_BYTES * 8) as u16;

/// Draw raw icon bytes with the icon's top-left corner at (`x`, `y`)
///
/// Only set bits touch the canvas; clear bits leave whatever is already
/// in the buffer.
pub fn draw_icon<C: Canvas + ?Sized>(
    canvas: &mut C,
    bytes: &[u8],
    x: i32,
    y: i32,
) -> Result<(), RenderError> {
    for (row, row_bytes) in bytes.chunks(ICON_ROW_BYTES).enumerate() {
        let py = y + row as i32;
        for (n, &byte) in row_bytes.iter().enumerate() {
            let base = x + n as i32 * 8;
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    canvas.set_pixel(base + bit, py)?;
                }
            }
        }
    }
    Ok(())
}

/// A 24-pixel-wide icon in the three-bytes-per-row format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    data: &'static [u8],
}

impl Icon {
    /// Wrap icon bytes
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data }
    }

    /// Raw row bytes
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        ICON_WIDTH
    }

    /// Height in pixels (rows, rounding a partial row up)
    pub const fn height(&self) -> u16 {
        self.data.len().div_ceil(ICON_ROW_BYTES) as u16
    }

    /// Draw the icon with its top-left corner at (`x`, `y`)
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, x: i32, y: i32) -> Result<(), RenderError> {
        draw_icon(canvas, self.data, x, y)
    }
}

/// Built-in icons
#[rustfmt::skip]
pub mod icons {
    use super::Icon;

    /// Cloud, 24x12
    pub const CLOUD: Icon = Icon::new(&[
        0x00, 0x00, 0x00,
        0x00, 0x7E, 0x00,
        0x01, 0x81, 0x80,
        0x02, 0x00, 0x40,
        0x3C, 0x00, 0x20,
        0x40, 0x00, 0x3C,
        0x80, 0x00, 0x02,
        0x80, 0x00, 0x01,
        0x80, 0x00, 0x01,
        0x40, 0x00, 0x02,
        0x3F, 0xFF, 0xFC,
        0x00, 0x00, 0x00,
    ]);

    /// Battery, 24x12
    pub const BATTERY: Icon = Icon::new(&[
        0x00, 0x00, 0x00,
        0x7F, 0xFF, 0xF8,
        0x40, 0x00, 0x08,
        0x5D, 0xDD, 0xCE,
        0x5D, 0xDD, 0xCA,
        0x5D, 0xDD, 0xCA,
        0x5D, 0xDD, 0xCA,
        0x5D, 0xDD, 0xCE,
        0x40, 0x00, 0x08,
        0x7F, 0xFF, 0xF8,
        0x00, 0x00, 0x00,
        0x00, 0x00, 0x00,
    ]);

    /// Check, 24x12
    pub const CHECK: Icon = Icon::new(&[
        0x00, 0x00, 0x00,
        0x00, 0x00, 0x06,
        0x00, 0x00, 0x0C,
        0x00, 0x00, 0x18,
        0x00, 0x00, 0x30,
        0x06, 0x00, 0x60,
        0x03, 0x00, 0xC0,
        0x01, 0x81, 0x80,
        0x00, 0xC3, 0x00,
        0x00, 0x66, 0x00,
        0x00, 0x3C, 0x00,
        0x00, 0x18, 0x00,
    ]);

    /// Thermometer, 24x12
    pub const THERMOMETER: Icon = Icon::new(&[
        0x00, 0x18, 0x00,
        0x00, 0x24, 0x00,
        0x00, 0x24, 0x00,
        0x00, 0x24, 0x00,
        0x00, 0x24, 0x00,
        0x00, 0x24, 0x00,
        0x00, 0x3C, 0x00,
        0x00, 0x3C, 0x00,
        0x00, 0x7E, 0x00,
        0x00, 0xFF, 0x00,
        0x00, 0xFF, 0x00,
        0x00, 0x7E, 0x00,
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::{BoundsPolicy, FrameBuffer};

    fn buffer() -> FrameBuffer {
        FrameBuffer::new(128, 64).unwrap()
    }

    #[test]
    fn test_three_bytes_form_one_row() {
        let mut fb = buffer();
        draw_icon(&mut fb, &[0xFF, 0x00, 0xFF], 10, 5).unwrap();

        for x in 10..18 {
            assert!(fb.get(x, 5).unwrap());
        }
        for x in 18..26 {
            assert!(!fb.get(x, 5).unwrap());
        }
        for x in 26..34 {
            assert!(fb.get(x, 5).unwrap());
        }
        assert_eq!(fb.lit_pixels(), 16);
    }

    #[test]
    fn test_fourth_byte_wraps_to_origin() {
        let mut fb = buffer();
        draw_icon(&mut fb, &[0x00, 0x00, 0x00, 0x80, 0x00, 0x01], 10, 5).unwrap();

        assert!(fb.get(10, 6).unwrap());
        assert!(fb.get(33, 6).unwrap());
        assert_eq!(fb.lit_pixels(), 2);
    }

    #[test]
    fn test_msb_is_leftmost() {
        let mut fb = buffer();
        draw_icon(&mut fb, &[0x40], 0, 0).unwrap();
        assert!(fb.get(1, 0).unwrap());
        assert_eq!(fb.lit_pixels(), 1);
    }

    #[test]
    fn test_clear_bits_do_not_touch_canvas() {
        // A blank row far off screen is fine even in strict mode
        let mut fb = buffer();
        draw_icon(&mut fb, &[0x00, 0x00, 0x00], 500, 500).unwrap();
        assert!(fb.is_blank());

        assert_eq!(
            draw_icon(&mut fb, &[0x01], 121, 0),
            Err(RenderError::OutOfBounds { x: 128, y: 0 })
        );
    }

    #[test]
    fn test_icon_clipped_at_edge() {
        let mut fb = buffer();
        fb.set_bounds_policy(BoundsPolicy::Clip);
        icons::CLOUD.draw(&mut fb, 120, 60).unwrap();
        assert!(fb.lit_pixels() > 0);
    }

    #[test]
    fn test_builtin_icon_geometry() {
        for icon in [icons::CLOUD, icons::BATTERY, icons::CHECK, icons::THERMOMETER] {
            assert_eq!(icon.width(), 24);
            assert_eq!(icon.height(), 12);
            assert_eq!(icon.data().len() % ICON_ROW_BYTES, 0);
        }
    }

    #[test]
    fn test_draw_builtin_icon() {
        let mut fb = buffer();
        icons::CHECK.draw(&mut fb, 0, 0).unwrap();

        // Bottom tip of the check mark
        assert!(fb.get(11, 11).unwrap());
        assert!(fb.get(12, 11).unwrap());
        assert!(!fb.get(0, 0).unwrap());
    }

    #[test]
    fn test_partial_row() {
        let icon = Icon::new(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(icon.height(), 2);

        let mut fb = buffer();
        icon.draw(&mut fb, 0, 0).unwrap();
        assert_eq!(fb.lit_pixels(), 32);
    }
}
