//! Scoped bus and chip-select ownership
//!
//! A [`BusGuard`] holds the bus from `begin_transaction` until it is
//! dropped. Each [`Frame`] asserts /CS for its lifetime. Because release
//! happens in `Drop`, every exit path (including `?`) leaves the bus free
//! and /CS high.

use super::{ChipSelect, SpiBus};
use crate::spi::{encode_address, BusSettings, FILLER};

/// An acquired bus transaction
pub(crate) struct BusGuard<'a, B: SpiBus + ?Sized> {
    bus: &'a mut B,
}

impl<'a, B: SpiBus + ?Sized> BusGuard<'a, B> {
    /// Claim the bus with the given settings
    pub(crate) fn acquire(bus: &'a mut B, settings: &BusSettings) -> Self {
        bus.begin_transaction(settings);
        Self { bus }
    }

    /// Assert /CS and open a command frame
    pub(crate) fn frame<'g, C: ChipSelect + ?Sized>(&'g mut self, cs: &'g mut C) -> Frame<'g, B, C> {
        cs.select();
        Frame {
            bus: &mut *self.bus,
            cs,
        }
    }

    /// Send a frame consisting of `bytes` only (e.g. WREN, WRDI)
    pub(crate) fn command<C: ChipSelect + ?Sized>(&mut self, cs: &mut C, bytes: &[u8]) {
        self.frame(cs).write(bytes);
    }
}

impl<B: SpiBus + ?Sized> Drop for BusGuard<'_, B> {
    fn drop(&mut self) {
        self.bus.end_transaction();
    }
}

/// One /CS-low period on an acquired bus
pub(crate) struct Frame<'a, B: SpiBus + ?Sized, C: ChipSelect + ?Sized> {
    bus: &'a mut B,
    cs: &'a mut C,
}

impl<B: SpiBus + ?Sized, C: ChipSelect + ?Sized> Frame<'_, B, C> {
    /// Shift out `bytes`, discarding what comes back
    pub(crate) fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.bus.transfer(byte);
        }
    }

    /// Fill `buf` with bytes clocked in against filler bytes
    pub(crate) fn read(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.bus.transfer(FILLER);
        }
    }

    /// Shift out an opcode followed by a 3-byte address
    pub(crate) fn addressed(&mut self, opcode: u8, address: u32) {
        self.write(&[opcode]);
        self.write(&encode_address(address));
    }
}

impl<B: SpiBus + ?Sized, C: ChipSelect + ?Sized> Drop for Frame<'_, B, C> {
    fn drop(&mut self) {
        self.cs.deselect();
    }
}
