//! The poll loop run against the door controller.
//!
//! Every poll reads one status byte. When the controller reports
//! `STATUS_READY` the host acknowledges it, gives the controller
//! `ACK_SETTLE_DELAY_MS` to prepare, reads its data block and answers with
//! the follow-up command and the "time" block. There is no retry and no
//! resynchronisation: a bus error ends the loop and is handed to the caller.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, info};

use crate::bytes::{ascii_payload, string_to_bytes};
use crate::config::{
    ACK_SETTLE_DELAY_MS, BLOCK_LEN, BLOCK_OFFSET, CMD_ACK, CMD_FOLLOW_UP, STATUS_READY,
    TIME_COMMAND,
};
use crate::peripheral::Peripheral;

/// What a single poll did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Controller had nothing for us; no other bus traffic happened.
    Idle { status: u8 },
    /// Full handshake completed.
    Handshake { status: u8, block: [u8; BLOCK_LEN] },
}

pub struct Handshake<I2C, D> {
    peripheral: Peripheral<I2C>,
    delay: D,
    time_payload: Vec<u8>,
}

impl<I2C, D> Handshake<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(peripheral: Peripheral<I2C>, delay: D) -> Self {
        Self {
            peripheral,
            delay,
            time_payload: ascii_payload(TIME_COMMAND),
        }
    }

    pub fn poll_once(&mut self) -> Result<PollOutcome, I2C::Error> {
        let status = self.peripheral.read_byte()?;
        debug!("status: {}", status);

        if status != STATUS_READY {
            return Ok(PollOutcome::Idle { status });
        }

        info!("Controller ready (status {})", status);
        self.peripheral.write_data(CMD_ACK)?;

        // The controller gets no other signal that the block must be ready
        self.delay.delay_ms(ACK_SETTLE_DELAY_MS);

        let block = self.peripheral.read_block::<BLOCK_LEN>(BLOCK_OFFSET)?;
        info!("Received block: {:?}", block);

        self.peripheral.write_data(CMD_FOLLOW_UP)?;

        info!("Sending {:?}: {:?}", TIME_COMMAND, string_to_bytes(TIME_COMMAND));
        self.peripheral
            .write_block(BLOCK_OFFSET, &self.time_payload)?;

        Ok(PollOutcome::Handshake { status, block })
    }

    /// Poll forever. Returns only when a bus transfer fails.
    pub fn run(&mut self) -> Result<Infallible, I2C::Error> {
        info!(
            "Polling controller at {:#04x}",
            self.peripheral.address()
        );
        loop {
            self.poll_once()?;
        }
    }

    pub fn into_parts(self) -> (Peripheral<I2C>, D) {
        (self.peripheral, self.delay)
    }
}
