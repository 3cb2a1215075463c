//! Emulated chip profiles

use serde::{Deserialize, Serialize};
use sfflash_core::chip::ChipFamily;

/// Configuration for the dummy flash
///
/// Busy durations count status reads: after a program the chip reports
/// busy on the next `program_busy_polls` status reads, and rejects every
/// other command until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DummyConfig {
    /// JEDEC manufacturer ID
    pub manufacturer_id: u8,
    /// JEDEC device ID
    pub device_id: u16,
    /// Flash size in bytes
    pub size: usize,
    /// Status register protocol the chip answers
    pub family: ChipFamily,
    /// Whether the chip accepts AAI word programming (0xAD)
    pub aai: bool,
    /// Busy status reads after a page program or AAI word
    pub program_busy_polls: u32,
    /// Busy status reads after a chip erase
    pub erase_busy_polls: u32,
    /// Busy status reads after a status register write
    pub status_write_busy_polls: u32,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            manufacturer_id: 0xEF, // Winbond
            device_id: 0x4018,     // W25Q128FV
            size: 16 * 1024 * 1024,
            family: ChipFamily::Family25xx,
            aai: false,
            program_busy_polls: 0,
            erase_busy_polls: 0,
            status_write_busy_polls: 0,
        }
    }
}

impl DummyConfig {
    /// SST25VF016B: 2 MiB, AAI word programming
    pub fn sst25vf016b() -> Self {
        Self {
            manufacturer_id: 0xBF,
            device_id: 0x2541,
            size: 2 * 1024 * 1024,
            aai: true,
            ..Self::default()
        }
    }

    /// AT45DB321E: 4 MiB DataFlash with the 16-bit status register
    pub fn at45db321e() -> Self {
        Self {
            manufacturer_id: 0x1F,
            device_id: 0x2701,
            size: 4 * 1024 * 1024,
            family: ChipFamily::Family45xx,
            ..Self::default()
        }
    }

    /// Shrink the array, handy for tests
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set program, erase and status-write busy durations
    pub fn with_busy_polls(mut self, program: u32, erase: u32, status_write: u32) -> Self {
        self.program_busy_polls = program;
        self.erase_busy_polls = erase;
        self.status_write_busy_polls = status_write;
        self
    }
}
