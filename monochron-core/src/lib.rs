//! Board-agnostic rendering core for page-addressed monochrome displays
//!
//! This crate contains everything that does not depend on a bus or a
//! specific controller:
//!
//! - Packed framebuffer (one bit per pixel, 8-row pages)
//! - Line and rectangle rasterization
//! - Fixed-pitch bitmap fonts and the text renderer
//! - 24-column icon bitmaps
//! - Display configuration types
//!
//! # Buffer layout
//!
//! ```text
//!           x=0   x=1   x=2  ...  x=W-1
//! page 0  [ b0 ][ b1 ][ b2 ] ... [ bW-1 ]   rows 0..8, bit n = row n
//! page 1  [ bW ][ ..                    ]   rows 8..16
//! ...
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod canvas;
pub mod config;
pub mod error;
pub mod font;
pub mod framebuffer;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod icon;
pub mod raster;
pub mod text;

// Re-export key types
pub use canvas::Canvas;
pub use config::{DisplayConfig, DEFAULT_ADDRESS};
pub use error::RenderError;
pub use font::{FontAsset, Glyph, FONT_6X8};
pub use framebuffer::{BoundsPolicy, FrameBuffer, DEFAULT_CAPACITY, PAGE_HEIGHT};
pub use icon::{draw_icon, Icon, ICON_ROW_BYTES, ICON_WIDTH};
pub use raster::draw_line;
pub use text::{GlyphPolicy, TextRenderer};
