//! Bus operations against the door controller.
//!
//! The controller speaks the SMBus subset the Pi side has always used:
//! plain single-byte reads and writes, and I2C block transfers where the
//! first byte written is a sub-address.

use embedded_hal::i2c::I2c;

use crate::config::READ_DATA_REGISTER;

/// The door controller at a fixed address on an exclusively owned bus.
pub struct Peripheral<I2C> {
    bus: I2C,
    address: u8,
}

impl<I2C: I2c> Peripheral<I2C> {
    pub fn new(bus: I2C, address: u8) -> Self {
        Self { bus, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Read a single byte without selecting a register.
    pub fn read_byte(&mut self) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.bus.read(self.address, &mut buf)?;
        Ok(buf[0])
    }

    /// Write a single command byte.
    pub fn write_data(&mut self, data: u8) -> Result<(), I2C::Error> {
        self.bus.write(self.address, &[data])
    }

    /// Read one byte from `READ_DATA_REGISTER`.
    pub fn read_data(&mut self) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.bus
            .write_read(self.address, &[READ_DATA_REGISTER], &mut buf)?;
        Ok(buf[0])
    }

    /// I2C block read: write `offset`, then read `N` bytes with a repeated start.
    pub fn read_block<const N: usize>(&mut self, offset: u8) -> Result<[u8; N], I2C::Error> {
        let mut block = [0u8; N];
        self.bus.write_read(self.address, &[offset], &mut block)?;
        Ok(block)
    }

    /// I2C block write: `offset` followed by `data` in one transfer.
    pub fn write_block(&mut self, offset: u8, data: &[u8]) -> Result<(), I2C::Error> {
        let mut frame = Vec::with_capacity(data.len() + 1);
        frame.push(offset);
        frame.extend_from_slice(data);
        self.bus.write(self.address, &frame)
    }

    /// Give the bus back. Only tests need this; the poll loop owns the
    /// peripheral until the process exits.
    pub fn release(self) -> I2C {
        self.bus
    }
}
