//! SSD1306 OLED driver for Monochron
//!
//! This crate wires the rendering core to an SSD1306 controller on an
//! I2C bus:
//! - `command` - controller command set and the power-on sequence
//! - `display` - the [`Ssd1306`] driver: drawing API, flush, power control
//! - `config` - text configuration parser for [`DisplayConfig`]
//!
//! # Example
//!
//! ```no_run
//! # use monochron_hal::I2cBus;
//! # fn demo<B: I2cBus>(bus: B) -> Result<(), monochron_ssd1306::DisplayError<B::Error>> {
//! use monochron_ssd1306::{DisplayConfig, Ssd1306};
//!
//! let mut oled: Ssd1306<B> = Ssd1306::new(bus, DisplayConfig::new(128, 64))?;
//! oled.init()?;
//! oled.write_string("Hello", 0, 2, 1)?;
//! oled.draw_line(0, 12, 127, 12)?;
//! oled.flush()?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod display;

// Re-export key types
pub use config::{parse_config, ParseError};
pub use display::{DisplayError, Ssd1306};
pub use monochron_core::{BoundsPolicy, DisplayConfig, GlyphPolicy, RenderError};
