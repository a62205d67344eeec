//! Host side of the chicken door controller link.
//!
//! The Raspberry Pi is the I2C controller; the door microcontroller sits at
//! `config::PERIPHERAL_ADDR` and is polled for a ready status.

pub mod bus;
pub mod bytes;
pub mod config;
pub mod handshake;
pub mod peripheral;
