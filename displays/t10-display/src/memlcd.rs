//! Sharp memory LCD wire format
//!
//! 144x168 LS013B7DH05-style memory-in-pixel panels, SPI mode 0, MSB first:
//! - write: `[cmd] ([address] [18 data bytes] [0x00])* [0x00]`
//! - clear: `[cmd] [0x00]`
//!
//! Line addresses are 1-based and LSB first, so they are bit-reversed
//! before sending. The panel bus driver lives with the firmware; this
//! module only builds bytes.

use crate::framebuffer::ROW_BYTES;

/// Write one or more lines
pub const CMD_WRITE_LINE: u8 = 0x80;

/// VCOM polarity bit, OR-ed into the command byte
pub const CMD_VCOM: u8 = 0x40;

/// Clear the whole panel
pub const CMD_CLEAR: u8 = 0x20;

/// Dummy byte ending a line and a transfer
pub const TRAILER: u8 = 0x00;

/// Bytes sent per line: address, data, dummy
pub const LINE_BYTES: usize = ROW_BYTES + 2;

/// Panel address of row `y`: 1-based, bit-reversed for LSB-first order
pub fn line_address(y: usize) -> u8 {
    ((y + 1) as u8).reverse_bits()
}

/// Command byte with the VCOM bit for the given polarity
pub fn command_byte(command: u8, vcom: bool) -> u8 {
    if vcom {
        command | CMD_VCOM
    } else {
        command
    }
}

/// One framed line: address, row data, dummy byte
pub fn encode_line(y: usize, row: &[u8; ROW_BYTES]) -> [u8; LINE_BYTES] {
    let mut line = [TRAILER; LINE_BYTES];
    line[0] = line_address(y);
    line[1..=ROW_BYTES].copy_from_slice(row);
    line
}
