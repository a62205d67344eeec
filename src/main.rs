use chicken_door_link::bus::open_bus;
use chicken_door_link::config::{I2C_BUS, PERIPHERAL_ADDR};
use chicken_door_link::handshake::Handshake;
use chicken_door_link::peripheral::Peripheral;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use log::{error, info};
use rppal::hal::Delay;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting up...");

    let bus = open_bus().wrap_err_with(|| format!("Failed to open I2C bus {}", I2C_BUS))?;
    info!("I2C bus {} opened", I2C_BUS);

    let peripheral = Peripheral::new(bus, PERIPHERAL_ADDR);
    let mut handshake = Handshake::new(peripheral, Delay::new());

    let Err(e) = handshake.run();
    error!("I2C transfer failed: {}", e);
    Err(e).wrap_err_with(|| format!("I2C transfer with {:#04x} failed", PERIPHERAL_ADDR))
}
