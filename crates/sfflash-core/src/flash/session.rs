//! Identification result

use crate::chip::{ChipFamily, JedecId, Manufacturer};

/// What identification learned about the bound chip
///
/// Produced once by [`FlashController::identify`](super::FlashController::identify)
/// and never changed by reads, writes or erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// Raw JEDEC bytes
    pub jedec: JedecId,
    /// Recognised vendor (never [`Manufacturer::Unknown`])
    pub manufacturer: Manufacturer,
    /// Command family every busy check uses
    pub family: ChipFamily,
}

impl Session {
    /// 16-bit device ID
    pub const fn device_id(&self) -> u16 {
        self.jedec.device
    }
}
