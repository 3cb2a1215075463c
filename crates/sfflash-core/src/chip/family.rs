//! Command family selection

use crate::spi::opcodes;

/// Command family of a chip
///
/// The families differ only in how busy is reported: 25xx parts keep a
/// BUSY bit (active high) in bit 0 of an 8-bit status register, 45xx
/// parts keep a RDY bit (active high, so busy is inverted) in bit 15 of a
/// 16-bit status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ChipFamily {
    /// 25-series: 8-bit status via 0x05, BUSY = bit 0
    #[default]
    Family25xx,
    /// 45-series (Adesto DataFlash): 16-bit status via 0xD7, RDY = bit 15
    Family45xx,
}

impl ChipFamily {
    /// Opcode reading this family's status register
    pub const fn status_opcode(&self) -> u8 {
        match self {
            Self::Family25xx => opcodes::RDSR,
            Self::Family45xx => opcodes::RDSR_45,
        }
    }

    /// Width of the status register in bytes
    pub const fn status_bytes(&self) -> usize {
        match self {
            Self::Family25xx => 1,
            Self::Family45xx => 2,
        }
    }

    /// Pick the family of an Adesto part from its 16-bit device ID
    ///
    /// Adesto encodes the family in bits 7:5 of the first device byte:
    /// `0b100` for AT25 parts, `0b001` for AT45 DataFlash. Other values
    /// give `None`.
    pub const fn from_adesto_device(device: u16) -> Option<Self> {
        match (device & 0xFF00) >> 13 {
            0b100 => Some(Self::Family25xx),
            0b001 => Some(Self::Family45xx),
            _ => None,
        }
    }
}
