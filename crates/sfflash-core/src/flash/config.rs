//! Controller configuration

use crate::chip::ChipFamily;
use crate::spi::BusSettings;

/// Default poll bound for reads, writes and status writes
pub const DEFAULT_BUSY_ATTEMPTS: u16 = 100;
/// Default poll bound before a chip erase is issued
pub const DEFAULT_ERASE_BUSY_ATTEMPTS: u16 = 1000;

/// How AAI word programs are spaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AaiPacing {
    /// Issue word programs back to back with no busy check in between
    #[default]
    Unpaced,
    /// Poll the status register (bounded) before every word after the first
    PollBusy,
}

/// Configuration for a [`FlashController`](super::FlashController)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct FlashConfig {
    /// Settings passed to the bus on every transaction
    pub bus: BusSettings,
    /// Family assumed until identification narrows it
    pub default_family: ChipFamily,
    /// Busy polls allowed before reads, writes, status writes and
    /// write-disable give up
    pub busy_attempts: u16,
    /// Busy polls allowed before a chip erase gives up
    pub erase_busy_attempts: u16,
    /// Delay between bounded busy polls, in milliseconds
    pub poll_interval_ms: u32,
    /// Delay between status polls while a chip erase runs, in milliseconds
    pub erase_poll_interval_ms: u32,
    /// Status polls between two erase progress reports
    pub erase_polls_per_report: u32,
    /// Spacing of AAI word programs
    pub aai_pacing: AaiPacing,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            bus: BusSettings::default(),
            default_family: ChipFamily::Family25xx,
            busy_attempts: DEFAULT_BUSY_ATTEMPTS,
            erase_busy_attempts: DEFAULT_ERASE_BUSY_ATTEMPTS,
            poll_interval_ms: 1,
            erase_poll_interval_ms: 10,
            erase_polls_per_report: 50,
            aai_pacing: AaiPacing::Unpaced,
        }
    }
}

impl FlashConfig {
    /// Set the bus settings
    pub fn with_bus(mut self, bus: BusSettings) -> Self {
        self.bus = bus;
        self
    }

    /// Set the family assumed before identification
    pub fn with_default_family(mut self, family: ChipFamily) -> Self {
        self.default_family = family;
        self
    }

    /// Set the bound for ordinary busy waits
    pub fn with_busy_attempts(mut self, attempts: u16) -> Self {
        self.busy_attempts = attempts;
        self
    }

    /// Set the bound for the wait before a chip erase
    pub fn with_erase_busy_attempts(mut self, attempts: u16) -> Self {
        self.erase_busy_attempts = attempts;
        self
    }

    /// Set AAI pacing
    pub fn with_aai_pacing(mut self, pacing: AaiPacing) -> Self {
        self.aai_pacing = pacing;
        self
    }
}
