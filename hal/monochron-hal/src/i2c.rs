//! I2C bus abstractions
//!
//! Provides the transport trait used by display drivers, plus an adapter
//! that lets any `embedded-hal` 1.0 I2C master act as that transport.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, Operation};

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices. Every call is blocking and either completes
/// fully or returns an error.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single prefix byte followed by `data` in one transaction
    ///
    /// Display controllers expect a control byte in front of every
    /// transfer. This avoids copying a whole frame just to prepend it.
    fn write_prefixed(&mut self, address: u8, prefix: u8, data: &[u8])
        -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn write_prefixed(
        &mut self,
        address: u8,
        prefix: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        T::write_prefixed(self, address, prefix, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        T::write_read(self, address, write_data, read_buf)
    }
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

impl core::fmt::Display for I2cBusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            I2cBusError::Bus => "bus error",
            I2cBusError::ArbitrationLost => "arbitration lost",
            I2cBusError::Nack => "no acknowledge",
            I2cBusError::Overrun => "overrun",
            I2cBusError::Other => "i2c error",
        };
        f.write_str(msg)
    }
}

/// Adapter from an `embedded-hal` I2C master to [`I2cBus`]
///
/// Errors are reduced to [`I2cBusError`] through the HAL's `ErrorKind`.
pub struct EmbeddedHalBus<T> {
    i2c: T,
}

impl<T: I2c> EmbeddedHalBus<T> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(i2c: T) -> Self {
        Self { i2c }
    }

    /// Give back the wrapped peripheral
    pub fn release(self) -> T {
        self.i2c
    }
}

impl<T: I2c> I2cBus for EmbeddedHalBus<T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        I2c::write(&mut self.i2c, address, data).map_err(|e| e.kind().into())
    }

    fn write_prefixed(
        &mut self,
        address: u8,
        prefix: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let prefix = [prefix];
        // Adjacent writes in one transaction go out without a restart
        let mut ops = [Operation::Write(&prefix), Operation::Write(data)];
        self.i2c
            .transaction(address, &mut ops)
            .map_err(|e| e.kind().into())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        I2c::read(&mut self.i2c, address, buf).map_err(|e| e.kind().into())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        I2c::write_read(&mut self.i2c, address, write_data, read_buf)
            .map_err(|e| e.kind().into())
    }
}
