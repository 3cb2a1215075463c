//! Busy polling primitives
//!
//! Status frames are issued on an already acquired bus so the same code
//! serves both standalone polls and polls inside a longer transaction
//! (paced AAI).

use crate::bus::{BusGuard, ChipSelect, Delay, SpiBus};
use crate::chip::{ChipFamily, Status25, Status45};
use crate::spi::opcodes;

/// Read the one-byte 25xx status register
pub(super) fn status8<B, C>(bus: &mut BusGuard<'_, B>, cs: &mut C) -> u8
where
    B: SpiBus + ?Sized,
    C: ChipSelect + ?Sized,
{
    let mut buf = [0u8; 1];
    let mut frame = bus.frame(cs);
    frame.write(&[opcodes::RDSR]);
    frame.read(&mut buf);
    buf[0]
}

/// Read the two-byte 45xx status register, first byte in the high half
pub(super) fn status16<B, C>(bus: &mut BusGuard<'_, B>, cs: &mut C) -> u16
where
    B: SpiBus + ?Sized,
    C: ChipSelect + ?Sized,
{
    let mut buf = [0u8; 2];
    let mut frame = bus.frame(cs);
    frame.write(&[opcodes::RDSR_45]);
    frame.read(&mut buf);
    u16::from_be_bytes(buf)
}

/// Read the family's status register and normalise it to busy/not busy
pub(super) fn is_busy<B, C>(bus: &mut BusGuard<'_, B>, cs: &mut C, family: ChipFamily) -> bool
where
    B: SpiBus + ?Sized,
    C: ChipSelect + ?Sized,
{
    match family {
        ChipFamily::Family25xx => Status25::from_bits_retain(status8(bus, cs)).is_busy(),
        ChipFamily::Family45xx => Status45::from_bits_retain(status16(bus, cs)).is_busy(),
    }
}

/// Bounded wait on a bus that is already held
///
/// Used inside multi-frame sequences that must not release the bus.
pub(super) fn wait_in_transaction<B, C, D>(
    bus: &mut BusGuard<'_, B>,
    cs: &mut C,
    delay: &mut D,
    family: ChipFamily,
    max_attempts: u16,
    interval_ms: u32,
) -> bool
where
    B: SpiBus + ?Sized,
    C: ChipSelect + ?Sized,
    D: Delay + ?Sized,
{
    bounded_poll(
        || is_busy(&mut *bus, &mut *cs, family),
        delay,
        max_attempts,
        interval_ms,
    )
}

/// Poll `busy` until it reports idle or `max_attempts` retries are spent
///
/// Returns true on the first idle poll. Returns false once the chip has
/// been seen busy `max_attempts + 1` times in a row, without sleeping
/// after the last poll.
pub(super) fn bounded_poll<D, F>(
    mut busy: F,
    delay: &mut D,
    max_attempts: u16,
    interval_ms: u32,
) -> bool
where
    D: Delay + ?Sized,
    F: FnMut() -> bool,
{
    let mut remaining = max_attempts;
    while busy() {
        if remaining == 0 {
            return false;
        }
        remaining -= 1;
        delay.delay_ms(interval_ms);
    }
    true
}
