//! Fixed-pitch bitmap fonts
//!
//! A font is a flat array of column bytes plus an ordered lookup string.
//! A character's position in the lookup is its glyph index, and glyph `n`
//! starts at byte `n * glyph_width`. Reordering the lookup therefore
//! changes which bytes every character renders.
//!
//! Each column byte is read low bit first, top to bottom. Decoding reads
//! `glyph_height + 1` rows per column; rows past bit 7 always read as off.

mod font_6x8;

pub use font_6x8::FONT_6X8;

use crate::error::RenderError;

/// Static glyph data for a fixed-width font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontAsset {
    /// Columns per glyph (also the horizontal advance at size 1)
    pub glyph_width: u8,
    /// Nominal rows per glyph
    pub glyph_height: u8,
    /// Supported characters, in glyph order
    pub lookup: &'static str,
    /// `glyph_width` column bytes per glyph, concatenated in lookup order
    pub glyph_data: &'static [u8],
}

impl FontAsset {
    /// Number of glyphs in the lookup
    pub fn glyph_count(&self) -> usize {
        self.lookup.chars().count()
    }

    /// Check that the glyph data matches the lookup
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.glyph_width == 0
            || self.glyph_data.len() != self.glyph_width as usize * self.glyph_count()
        {
            return Err(RenderError::InvalidFont);
        }
        Ok(())
    }

    /// Ordinal position of `ch` in the lookup
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.lookup.chars().position(|c| c == ch)
    }

    /// Check if the font has a glyph for `ch`
    pub fn contains(&self, ch: char) -> bool {
        self.index_of(ch).is_some()
    }

    /// Resolve `ch` to its glyph
    pub fn glyph(&self, ch: char) -> Result<Glyph<'static>, RenderError> {
        let index = self.index_of(ch).ok_or(RenderError::UnknownGlyph(ch))?;
        let start = index * self.glyph_width as usize;
        let columns = self
            .glyph_data
            .get(start..start + self.glyph_width as usize)
            .ok_or(RenderError::InvalidFont)?;

        Ok(Glyph::decode(columns, self.glyph_height))
    }

    /// Horizontal advance of one character at `size`
    pub fn advance(&self, size: u8) -> i32 {
        i32::from(self.glyph_width) * i32::from(size)
    }
}

/// Read row `row` of a column byte (bit `row`, low bit = top)
///
/// Rows beyond the byte are off.
pub fn column_bit(byte: u8, row: u16) -> bool {
    row < 8 && (byte >> row) & 1 == 1
}

/// One character's bit matrix, decoded on demand from its column bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    columns: &'a [u8],
    rows: u16,
}

impl<'a> Glyph<'a> {
    /// Decode a glyph from raw column bytes
    ///
    /// `glyph_height` is the font's nominal height; one extra row is read.
    pub fn decode(columns: &'a [u8], glyph_height: u8) -> Self {
        Self {
            columns,
            rows: u16::from(glyph_height) + 1,
        }
    }

    /// Columns in the matrix
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Rows in the matrix (`glyph_height + 1`)
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Bit at column `col`, row `row`
    pub fn bit(&self, col: usize, row: u16) -> bool {
        row < self.rows && self.columns.get(col).is_some_and(|&b| column_bit(b, row))
    }

    /// Iterate over the (column, row) positions of every set bit
    pub fn lit(&self) -> impl Iterator<Item = (usize, u16)> + 'a {
        let (columns, rows) = (self.columns, self.rows);
        columns.iter().enumerate().flat_map(move |(col, &byte)| {
            (0..rows)
                .filter(move |&row| column_bit(byte, row))
                .map(move |row| (col, row))
        })
    }
}
