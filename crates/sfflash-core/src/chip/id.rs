//! JEDEC identifier

use core::fmt;

use super::Manufacturer;

/// The three bytes returned by the Read JEDEC ID (0x9F) command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct JedecId {
    /// Manufacturer byte
    pub manufacturer: u8,
    /// Device bytes (memory type in the high byte)
    pub device: u16,
}

impl JedecId {
    /// Assemble from the bytes in wire order
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            manufacturer: bytes[0],
            device: ((bytes[1] as u16) << 8) | bytes[2] as u16,
        }
    }

    /// The 24-bit value, manufacturer in bits 23:16
    pub const fn raw(&self) -> u32 {
        ((self.manufacturer as u32) << 16) | self.device as u32
    }

    /// Vendor lookup of the manufacturer byte
    pub const fn vendor(&self) -> Manufacturer {
        Manufacturer::from_code(self.manufacturer)
    }
}

impl fmt::Display for JedecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (0x{:02X}), device 0x{:04X}",
            self.vendor(),
            self.manufacturer,
            self.device
        )
    }
}
