//! Bus settings applied when a transaction begins

/// Default SPI clock speed in Hz (2 MHz)
pub const DEFAULT_CLOCK_HZ: u32 = 2_000_000;

/// Order in which bits of a byte are shifted
///
/// The driver never reorders bits itself. Applying this setting is up to
/// the [`SpiBus`](crate::bus::SpiBus) implementation in `begin_transaction`.
/// Every opcode and address assumes MSB-first, so `LsbFirst` is only of
/// use to transports that share the bus with other devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BitOrder {
    /// Most significant bit first (what every supported chip expects)
    #[default]
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// SPI clock polarity/phase mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SpiMode {
    /// CPOL=0, CPHA=0
    #[default]
    Mode0,
    /// CPOL=0, CPHA=1
    Mode1,
    /// CPOL=1, CPHA=0
    Mode2,
    /// CPOL=1, CPHA=1
    Mode3,
}

impl SpiMode {
    /// Look up a mode by its number (0-3)
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            0 => Some(Self::Mode0),
            1 => Some(Self::Mode1),
            2 => Some(Self::Mode2),
            3 => Some(Self::Mode3),
            _ => None,
        }
    }

    /// The mode number (0-3)
    pub const fn number(&self) -> u8 {
        match self {
            Self::Mode0 => 0,
            Self::Mode1 => 1,
            Self::Mode2 => 2,
            Self::Mode3 => 3,
        }
    }
}

/// Settings the transport applies for the duration of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BusSettings {
    /// SPI clock speed in Hz
    pub clock_hz: u32,
    /// Bit order on the wire
    pub bit_order: BitOrder,
    /// Clock polarity/phase
    pub mode: SpiMode,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            bit_order: BitOrder::MsbFirst,
            mode: SpiMode::Mode0,
        }
    }
}

impl BusSettings {
    /// Set the SPI clock speed in Hz
    pub fn with_clock(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    /// Set the bit order
    pub fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    /// Set the SPI mode
    pub fn with_mode(mut self, mode: SpiMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = BusSettings::default();
        assert_eq!(settings.clock_hz, 2_000_000);
        assert_eq!(settings.bit_order, BitOrder::MsbFirst);
        assert_eq!(settings.mode, SpiMode::Mode0);
    }

    #[test]
    fn test_mode_numbers() {
        for n in 0..4 {
            assert_eq!(SpiMode::from_number(n).map(|m| m.number()), Some(n));
        }
        assert_eq!(SpiMode::from_number(4), None);
    }
}
