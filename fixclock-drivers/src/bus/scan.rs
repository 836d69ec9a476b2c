//! I2C bus scan
//!
//! Probes every non-reserved 7-bit address with a one-byte read and
//! collects the ones that acknowledge.

use embedded_hal::i2c::I2c;
use heapless::Vec;

/// First and last non-reserved 7-bit addresses
pub const FIRST_ADDRESS: u8 = 0x08;
pub const LAST_ADDRESS: u8 = 0x77;

const MAX_DEVICES: usize = (LAST_ADDRESS - FIRST_ADDRESS + 1) as usize;

/// Addresses that acknowledged, in ascending order
pub fn scan<I: I2c>(i2c: &mut I) -> Vec<u8, MAX_DEVICES> {
    let mut found = Vec::new();
    let mut probe = [0u8; 1];

    for address in FIRST_ADDRESS..=LAST_ADDRESS {
        if i2c.read(address, &mut probe).is_ok() {
            // Capacity covers the whole address range
            let _ = found.push(address);
        }
    }

    found
}
