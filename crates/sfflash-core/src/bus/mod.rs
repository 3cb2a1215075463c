//! Transport trait definitions
//!
//! The driver talks to the chip through three narrow collaborators:
//! - [`SpiBus`] - exclusive bus access and full-duplex byte transfer
//! - [`ChipSelect`] - the /CS line of the flash chip
//! - [`Delay`] - a millisecond sleep used while polling
//!
//! Transfers are infallible at this layer. A transport that can fail must
//! deal with it itself; a dead bus shows up to the driver as an unknown
//! manufacturer during identification.
//!
//! ## Example: a bit-banged transport
//!
//! ```ignore
//! impl SpiBus for GpioSpi {
//!     fn begin_transaction(&mut self, settings: &BusSettings) {
//!         self.half_period = half_period_for(settings.clock_hz);
//!     }
//!
//!     fn end_transaction(&mut self) {}
//!
//!     fn transfer(&mut self, byte: u8) -> u8 {
//!         self.shift_msb_first(byte)
//!     }
//! }
//! ```

mod guard;

pub(crate) use guard::BusGuard;

use crate::spi::BusSettings;

/// SPI bus carrying the flash chip
pub trait SpiBus {
    /// Claim the bus and apply `settings` for the following transfers
    fn begin_transaction(&mut self, settings: &BusSettings);

    /// Release the bus claimed by [`SpiBus::begin_transaction`]
    fn end_transaction(&mut self);

    /// Shift `byte` out while shifting one byte in
    fn transfer(&mut self, byte: u8) -> u8;
}

/// The chip-select line of the flash chip (active low)
pub trait ChipSelect {
    /// Drive /CS low, starting a command frame
    fn select(&mut self);

    /// Drive /CS high, ending the frame; the chip latches the command here
    fn deselect(&mut self);
}

/// Blocking delay source
pub trait Delay {
    /// Sleep for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    fn begin_transaction(&mut self, settings: &BusSettings) {
        (**self).begin_transaction(settings)
    }

    fn end_transaction(&mut self) {
        (**self).end_transaction()
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        (**self).transfer(byte)
    }
}

impl<T: ChipSelect + ?Sized> ChipSelect for &mut T {
    fn select(&mut self) {
        (**self).select()
    }

    fn deselect(&mut self) {
        (**self).deselect()
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
