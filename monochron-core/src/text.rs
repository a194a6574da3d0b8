//! Fixed-pitch text rendering
//!
//! Resolves characters through a [`FontAsset`] and blits each glyph at an
//! integer scale. There is no kerning and no wrapping: the cursor moves
//! `glyph_width * size` pixels per character and text past the right
//! edge is handled by the canvas bounds policy.

use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::font::{FontAsset, Glyph, FONT_6X8};
use crate::raster::fill_rect;

/// What to do with a character the font has no glyph for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlyphPolicy {
    /// Leave the cell empty and carry on with the next character
    #[default]
    Skip,
    /// Abort the string with [`RenderError::UnknownGlyph`]
    Strict,
}

/// Text renderer bound to one font
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    font: FontAsset,
    policy: GlyphPolicy,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(FONT_6X8)
    }
}

impl TextRenderer {
    /// Create a renderer that skips unknown characters
    pub const fn new(font: FontAsset) -> Self {
        Self {
            font,
            policy: GlyphPolicy::Skip,
        }
    }

    /// Create a renderer with an explicit unknown-glyph policy
    pub const fn with_policy(font: FontAsset, policy: GlyphPolicy) -> Self {
        Self { font, policy }
    }

    /// The font in use
    pub fn font(&self) -> &FontAsset {
        &self.font
    }

    /// Current unknown-glyph policy
    pub fn policy(&self) -> GlyphPolicy {
        self.policy
    }

    /// Change the unknown-glyph policy
    pub fn set_policy(&mut self, policy: GlyphPolicy) {
        self.policy = policy;
    }

    /// Width in pixels that `text` advances at size 1
    pub fn text_width(&self, text: &str) -> i32 {
        self.text_width_scaled(text, 1)
    }

    /// Width in pixels that `text` advances at `size`, saturating at `i32::MAX`
    pub fn text_width_scaled(&self, text: &str, size: u8) -> i32 {
        i32::try_from(text.chars().count())
            .unwrap_or(i32::MAX)
            .saturating_mul(self.font.advance(size))
    }

    /// Render `text` with its top-left corner at (`x`, `y`)
    ///
    /// `size` is an integer upscale factor; 1 draws glyphs pixel for pixel.
    /// Returns the cursor x after the last character. The cursor saturates
    /// at `i32::MAX`; glyphs pushed there land off-canvas.
    pub fn write_str<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        x: i32,
        y: i32,
        size: u8,
    ) -> Result<i32, RenderError> {
        let mut cursor = x;

        for ch in text.chars() {
            match self.font.glyph(ch) {
                Ok(glyph) => draw_glyph(canvas, &glyph, cursor, y, size)?,
                Err(RenderError::UnknownGlyph(_)) if self.policy == GlyphPolicy::Skip => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("no glyph for {}, skipped", ch);
                }
                Err(e) => return Err(e),
            }
            cursor = cursor.saturating_add(self.font.advance(size));
        }

        Ok(cursor)
    }
}

/// Blit one decoded glyph, scaling each set bit to a `size` x `size` block
fn draw_glyph<C: Canvas + ?Sized>(
    canvas: &mut C,
    glyph: &Glyph<'_>,
    x: i32,
    y: i32,
    size: u8,
) -> Result<(), RenderError> {
    let size = i32::from(size);
    for (col, row) in glyph.lit() {
        let (col, row) = (col as i32, i32::from(row));
        let (px, py) = (x.saturating_add(col * size), y.saturating_add(row * size));
        if size == 1 {
            canvas.set_pixel(px, py)?;
        } else {
            fill_rect(canvas, px, py, size, size)?;
        }
    }
    Ok(())
}
