//! Rendering errors

/// Errors raised by the framebuffer and the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Width is zero, height is not a positive multiple of 8, or the
    /// buffer would not fit the storage capacity
    InvalidDimensions,
    /// Pixel coordinate outside the buffer
    OutOfBounds {
        /// Requested column
        x: i32,
        /// Requested row
        y: i32,
    },
    /// Character missing from the font lookup
    UnknownGlyph(char),
    /// Font glyph data does not match its lookup table
    InvalidFont,
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::InvalidDimensions => f.write_str("invalid framebuffer dimensions"),
            RenderError::OutOfBounds { x, y } => {
                write!(f, "pixel ({}, {}) is outside the framebuffer", x, y)
            }
            RenderError::UnknownGlyph(ch) => write!(f, "no glyph for {:?}", ch),
            RenderError::InvalidFont => f.write_str("font glyph data does not match its lookup"),
        }
    }
}
