//! Known flash vendors

use core::fmt;

/// Flash vendor derived from the first JEDEC ID byte
///
/// Recognising the vendor is the only test of whether a chip is present:
/// anything outside this table is [`Manufacturer::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Manufacturer {
    /// Cypress / Infineon (0x01)
    Infineon,
    /// Adesto (0x1F); ships both 25xx and 45xx parts
    Adesto,
    /// Micron (0x20)
    Micron,
    /// ISSI (0x9D)
    Issi,
    /// Microchip / SST (0xBF)
    Microchip,
    /// Macronix (0xC2)
    Macronix,
    /// GigaDevice (0xC8)
    GigaDevice,
    /// Winbond (0xEF)
    Winbond,
    /// Any other code
    Unknown,
}

impl Manufacturer {
    /// Every recognised vendor
    pub const KNOWN: [Manufacturer; 8] = [
        Self::Infineon,
        Self::Adesto,
        Self::Micron,
        Self::Issi,
        Self::Microchip,
        Self::Macronix,
        Self::GigaDevice,
        Self::Winbond,
    ];

    /// Map a JEDEC manufacturer byte to a vendor
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x01 => Self::Infineon,
            0x1F => Self::Adesto,
            0x20 => Self::Micron,
            0x9D => Self::Issi,
            0xBF => Self::Microchip,
            0xC2 => Self::Macronix,
            0xC8 => Self::GigaDevice,
            0xEF => Self::Winbond,
            _ => Self::Unknown,
        }
    }

    /// The JEDEC manufacturer byte, `None` for [`Manufacturer::Unknown`]
    pub const fn code(&self) -> Option<u8> {
        match self {
            Self::Infineon => Some(0x01),
            Self::Adesto => Some(0x1F),
            Self::Micron => Some(0x20),
            Self::Issi => Some(0x9D),
            Self::Microchip => Some(0xBF),
            Self::Macronix => Some(0xC2),
            Self::GigaDevice => Some(0xC8),
            Self::Winbond => Some(0xEF),
            Self::Unknown => None,
        }
    }

    /// Returns true for every vendor except [`Manufacturer::Unknown`]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Human readable vendor name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Infineon => "Cypress/Infineon",
            Self::Adesto => "Adesto",
            Self::Micron => "Micron",
            Self::Issi => "ISSI",
            Self::Microchip => "Microchip/SST",
            Self::Macronix => "Macronix",
            Self::GigaDevice => "GigaDevice",
            Self::Winbond => "Winbond",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
