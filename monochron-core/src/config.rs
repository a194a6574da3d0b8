//! Display configuration types
//!
//! Panel geometry, controller options and rendering policies. The driver
//! crate parses these from text; with the `serde` feature they can also
//! be stored with any serde format.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::framebuffer::{BoundsPolicy, PAGE_HEIGHT};
use crate::text::GlyphPolicy;

/// Default 7-bit I2C address of SSD1306 modules (0x3D with SA0 high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Default contrast level
pub const DEFAULT_CONTRAST: u8 = 0x8F;

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels (multiple of 8)
    pub height: u16,
    /// Contrast level (0-255)
    pub contrast: u8,
    /// Panel is powered from an external VCC instead of the charge pump
    pub external_vcc: bool,
    /// Rotate the image 180 degrees
    pub flipped: bool,
    /// Out-of-range pixel handling
    pub bounds: BoundsPolicy,
    /// Unknown character handling
    pub glyphs: GlyphPolicy,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(128, 64)
    }
}

impl DisplayConfig {
    /// Configuration for a `width` x `height` panel with default options
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            width,
            height,
            contrast: DEFAULT_CONTRAST,
            external_vcc: false,
            flipped: false,
            bounds: BoundsPolicy::Strict,
            glyphs: GlyphPolicy::Skip,
        }
    }

    /// Same configuration on another bus address
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Number of 8-row pages
    pub const fn pages(&self) -> u16 {
        self.height / PAGE_HEIGHT
    }
}
