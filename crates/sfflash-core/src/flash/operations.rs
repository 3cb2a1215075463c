//! Read, write and erase operations
//!
//! Every addressed operation has the same shape: bounded busy wait, then
//! (for anything that changes the chip) Write Enable, then the opcode, the
//! 3-byte address and the data. If the wait fails nothing is sent.

use super::busy;
use super::config::AaiPacing;
use super::controller::FlashController;
use crate::bus::{BusGuard, ChipSelect, Delay, SpiBus};
use crate::error::{Error, Result};
use crate::spi::opcodes;

impl<B: SpiBus, C: ChipSelect, D: Delay> FlashController<B, C, D> {
    /// Read one byte
    pub fn read_byte(&mut self, address: u32) -> Result<u8> {
        self.ensure_ready(self.config.busy_attempts)?;

        let mut value = [0u8; 1];
        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        let mut frame = bus.frame(&mut self.cs);
        frame.addressed(opcodes::READ, address);
        frame.read(&mut value);
        Ok(value[0])
    }

    /// Fill `buf` starting at `address`
    pub fn read_block(&mut self, address: u32, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Err(Error::ZeroLength);
        }
        self.ensure_ready(self.config.busy_attempts)?;

        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        let mut frame = bus.frame(&mut self.cs);
        frame.addressed(opcodes::READ, address);
        frame.read(buf);
        Ok(())
    }

    /// Program one byte
    ///
    /// The byte must have been erased; programming only clears bits.
    pub fn write_byte(&mut self, address: u32, value: u8) -> Result<()> {
        self.ensure_ready(self.config.busy_attempts)?;
        self.page_program(address, &[value]);
        Ok(())
    }

    /// Program `data` with a single Page Program command
    ///
    /// The target must have been erased and the run must stay inside one
    /// flash page; neither is checked here. A run that crosses the page
    /// boundary wraps around to the start of the page on real parts.
    pub fn write_block(&mut self, address: u32, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::ZeroLength);
        }
        self.ensure_ready(self.config.busy_attempts)?;
        self.page_program(address, data);
        Ok(())
    }

    fn page_program(&mut self, address: u32, data: &[u8]) {
        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        bus.command(&mut self.cs, &[opcodes::WREN]);
        let mut frame = bus.frame(&mut self.cs);
        frame.addressed(opcodes::PP, address);
        frame.write(data);
    }

    /// Program `data` using Auto Address Increment word programming
    ///
    /// For SST-style parts that program two bytes per command. The address
    /// is sent with the first word only; the chip advances its own pointer.
    /// Write Disable ends the sequence. An odd trailing byte is written
    /// afterwards with [`write_byte`](Self::write_byte), and a single byte
    /// request goes straight to it.
    ///
    /// With [`AaiPacing::Unpaced`] no busy check is made between words. If
    /// the chip is still programming the previous word, the next one is
    /// lost. [`AaiPacing::PollBusy`] polls before every word after the
    /// first and before Write Disable. After a timeout there the chip gets
    /// the erase poll budget to finish the word in flight, since a busy
    /// chip ignores Write Disable. Write Disable is sent either way and
    /// [`Error::DeviceBusy`] is returned, with the earlier words already
    /// programmed.
    pub fn write_block_aai(&mut self, address: u32, data: &[u8]) -> Result<()> {
        match data.len() {
            0 => return Err(Error::ZeroLength),
            1 => return self.write_byte(address, data[0]),
            _ => {}
        }
        self.ensure_ready(self.config.busy_attempts)?;

        let paired = data.len() & !1;
        let (pairs, tail) = data.split_at(paired);
        let family = self.family;
        let paced = self.config.aai_pacing == AaiPacing::PollBusy;
        let attempts = self.config.busy_attempts;
        let interval = self.config.poll_interval_ms;
        let settle_attempts = self.config.erase_busy_attempts;
        let settle_interval = self.config.erase_poll_interval_ms;

        let mut timed_out = false;
        {
            let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
            let cs = &mut self.cs;
            let delay = &mut self.delay;

            // Busy is read from the status register, not from SO
            bus.command(cs, &[opcodes::DBSY]);
            bus.command(cs, &[opcodes::WREN]);

            let mut words = pairs.chunks_exact(2);
            if let Some(first) = words.next() {
                let mut frame = bus.frame(cs);
                frame.addressed(opcodes::AAI_WP, address);
                frame.write(first);
            }

            for word in words {
                if paced
                    && !busy::wait_in_transaction(&mut bus, cs, delay, family, attempts, interval)
                {
                    timed_out = true;
                    break;
                }
                let mut frame = bus.frame(cs);
                frame.write(&[opcodes::AAI_WP]);
                frame.write(word);
            }

            // The last word has to finish before AAI mode can be left
            if paced
                && !timed_out
                && !busy::wait_in_transaction(&mut bus, cs, delay, family, attempts, interval)
            {
                timed_out = true;
            }

            if timed_out
                && !busy::wait_in_transaction(
                    &mut bus,
                    cs,
                    delay,
                    family,
                    settle_attempts,
                    settle_interval,
                )
            {
                log::warn!("sfflash: chip stuck busy, AAI mode may still be active");
            }

            bus.command(cs, &[opcodes::WRDI]);
        }

        if timed_out {
            log::warn!("sfflash: AAI sequence at 0x{:06X} aborted, chip busy", address);
            return Err(Error::DeviceBusy);
        }
        diag!(
            self,
            "sfflash: AAI wrote {} words at 0x{:06X}",
            pairs.len() / 2,
            address
        );

        match tail {
            [last] => self.write_byte(address.wrapping_add(paired as u32), *last),
            _ => Ok(()),
        }
    }

    /// Erase the whole chip and wait for it to finish
    ///
    /// The wait after the erase command has no upper bound: depending on
    /// the part a chip erase takes from seconds to minutes.
    pub fn erase(&mut self) -> Result<()> {
        self.erase_with_progress(|_| {})
    }

    /// [`erase`](Self::erase), calling `progress` with the number of status
    /// polls so far each time another batch of polls starts
    pub fn erase_with_progress<F: FnMut(u32)>(&mut self, mut progress: F) -> Result<()> {
        self.ensure_ready(self.config.erase_busy_attempts)?;

        {
            let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
            bus.command(&mut self.cs, &[opcodes::WREN]);
            bus.command(&mut self.cs, &[opcodes::CE_C7]);
        }
        diag!(self, "sfflash: erasing entire chip");

        let batch = self.config.erase_polls_per_report.max(1);
        let mut polls: u32 = 1;
        let mut busy = self.is_busy();
        while busy {
            progress(polls);
            for _ in 0..batch {
                self.delay.delay_ms(self.config.erase_poll_interval_ms);
                polls += 1;
                busy = self.is_busy();
                if !busy {
                    break;
                }
            }
        }

        diag!(self, "sfflash: erase complete after {} status polls", polls);
        Ok(())
    }

    /// Write the one-byte 25xx status register
    ///
    /// Mostly used to clear the block protection bits.
    pub fn set_status8(&mut self, value: u8) -> Result<()> {
        self.write_status(&[value])
    }

    /// Write both status bytes, high byte first
    pub fn set_status16(&mut self, value: u16) -> Result<()> {
        self.write_status(&value.to_be_bytes())
    }

    fn write_status(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_ready(self.config.busy_attempts)?;

        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        bus.command(&mut self.cs, &[opcodes::EWSR]);
        let mut frame = bus.frame(&mut self.cs);
        frame.write(&[opcodes::WRSR]);
        frame.write(bytes);
        Ok(())
    }
}
