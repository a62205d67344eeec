//! Opening the Pi's I2C bus.

use rppal::i2c::{Error, I2c};

use crate::config::I2C_BUS;

/// Open I2C channel `I2C_BUS`. The handle is never closed; it lives until
/// the process exits.
pub fn open_bus() -> Result<I2c, Error> {
    let i2c = I2c::with_bus(I2C_BUS)?;
    Ok(i2c)
}
