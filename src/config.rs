pub const I2C_BUS: u8 = 1; // I2C channel wired to the GPIO header
pub const PERIPHERAL_ADDR: u8 = 0x08; // I2C address of the door controller

// Status byte returned by the controller when it has data for the host
pub const STATUS_READY: u8 = 0x01;

pub const CMD_ACK: u8 = 0x01; // Acknowledge the ready status
pub const CMD_FOLLOW_UP: u8 = 0x03; // Sent after the data block has been read

// Register read by `Peripheral::read_data`
pub const READ_DATA_REGISTER: u8 = 0x01;

// Time the controller gets to prepare its data block after the ack.
// Not negotiated with the controller; it has always been enough in practice.
pub const ACK_SETTLE_DELAY_MS: u32 = 200; // ms

pub const BLOCK_OFFSET: u8 = 0x00; // Sub-address for both block transfers
pub const BLOCK_LEN: usize = 12; // bytes; size of the controller data block

pub const TIME_COMMAND: &str = "time";
