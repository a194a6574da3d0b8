//! Monochron Hardware Abstraction Layer
//!
//! This crate defines the transport trait that display drivers write
//! through. The rendering core never talks to a bus directly; a driver
//! owns an [`I2cBus`] handle injected by the application, so tests can
//! substitute a fake transport and several displays can coexist.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  monochron-ssd1306 (driver facade)      │
//! └─────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌─────────────────┐   ┌───────────────────┐
//! │ monochron-core  │   │ monochron-hal     │
//! │ (framebuffer)   │   │ (this crate)      │
//! └─────────────────┘   └───────────────────┘
//!                                 │
//!                                 ▼
//!                       ┌───────────────────┐
//!                       │ embedded-hal I2C  │
//!                       └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`i2c::EmbeddedHalBus`] - adapter for any `embedded_hal::i2c::I2c`

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::{EmbeddedHalBus, I2cBus, I2cBusError};
