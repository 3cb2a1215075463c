//! Status register layouts

use bitflags::bitflags;

bitflags! {
    /// 25xx status register (one byte, read with 0x05)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status25: u8 {
        /// Erase/program/status write in progress
        const BUSY = 1 << 0;
        /// Write enable latch
        const WEL  = 1 << 1;
        /// Block protect bit 0
        const BP0  = 1 << 2;
        /// Block protect bit 1
        const BP1  = 1 << 3;
        /// Block protect bit 2
        const BP2  = 1 << 4;
        /// Top/bottom protect
        const TB   = 1 << 5;
        /// Sector/block protect
        const SEC  = 1 << 6;
        /// Status register protect
        const SRP0 = 1 << 7;

        /// All block protection bits
        const BP = Self::BP0.bits() | Self::BP1.bits() | Self::BP2.bits();
    }
}

impl Status25 {
    /// Returns true while an operation is in flight
    pub const fn is_busy(&self) -> bool {
        self.contains(Self::BUSY)
    }

    /// Block protect level (BP2:BP0)
    pub const fn protect_level(&self) -> u8 {
        (self.bits() >> 2) & 0x07
    }
}

bitflags! {
    /// 45xx status register (two bytes, read with 0xD7, first byte high)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status45: u16 {
        /// Ready (1) / busy (0)
        const RDY       = 1 << 15;
        /// Last compare mismatched
        const COMP      = 1 << 14;
        /// Sector protection enabled
        const PROTECT   = 1 << 9;
        /// Binary (power of two) page size configured
        const PAGE_SIZE = 1 << 8;
        /// Ready (1) / busy (0), repeated in the second byte
        const RDY2      = 1 << 7;
        /// Erase/program error
        const EPE       = 1 << 5;
        /// Sector lockdown enabled
        const SLE       = 1 << 3;
        /// Program suspended in buffer 2
        const PS2       = 1 << 2;
        /// Program suspended in buffer 1
        const PS1       = 1 << 1;
        /// Erase suspended
        const ES        = 1 << 0;
    }
}

impl Status45 {
    /// Returns true while an operation is in flight (RDY clear)
    pub const fn is_busy(&self) -> bool {
        !self.contains(Self::RDY)
    }
}
