//! Controller state, identification and the busy/latch state machine

use super::busy;
use super::config::FlashConfig;
use super::session::Session;
use crate::bus::{BusGuard, ChipSelect, Delay, SpiBus};
use crate::chip::{ChipFamily, JedecId, Manufacturer};
use crate::error::{Error, Result, UnknownManufacturer};
use crate::spi::opcodes;

/// Driver for one serial flash chip
///
/// Owns the bus, the chip-select line and the delay source for as long as
/// the chip is bound. Access must be serialised by the caller; nothing in
/// here locks.
///
/// Call [`begin`](Self::begin) (or [`identify`](Self::identify)) before
/// anything that polls the busy flag: identification picks the command
/// family, and every busy check depends on it.
pub struct FlashController<B, C, D> {
    pub(super) bus: B,
    pub(super) cs: C,
    pub(super) delay: D,
    pub(super) config: FlashConfig,
    pub(super) family: ChipFamily,
    pub(super) session: Option<Session>,
    pub(super) debug: bool,
}

impl<B: SpiBus, C: ChipSelect, D: Delay> FlashController<B, C, D> {
    /// Create a controller with the default configuration
    pub fn new(bus: B, cs: C, delay: D) -> Self {
        Self::with_config(bus, cs, delay, FlashConfig::default())
    }

    /// Create a controller with an explicit configuration
    pub fn with_config(bus: B, cs: C, delay: D, config: FlashConfig) -> Self {
        Self {
            bus,
            cs,
            delay,
            family: config.default_family,
            config,
            session: None,
            debug: false,
        }
    }

    /// Deselect the chip, then identify it
    ///
    /// Returns true if a known manufacturer answered.
    pub fn begin(&mut self) -> bool {
        self.cs.deselect();
        self.check_connected()
    }

    /// Give back the transport
    pub fn release(self) -> (B, C, D) {
        (self.bus, self.cs, self.delay)
    }

    /// The active configuration
    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    /// The command family busy checks currently use
    pub fn family(&self) -> ChipFamily {
        self.family
    }

    /// The result of the last successful identification
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Emit debug diagnostics through the `log` facade
    pub fn enable_debugging(&mut self) {
        self.debug = true;
    }

    /// Stop emitting debug diagnostics
    pub fn disable_debugging(&mut self) {
        self.debug = false;
    }

    // ========================================================================
    // Identification
    // ========================================================================

    /// Read the three JEDEC ID bytes
    pub fn read_jedec_id(&mut self) -> JedecId {
        let mut id = [0u8; 3];
        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        let mut frame = bus.frame(&mut self.cs);
        frame.write(&[opcodes::RDID]);
        frame.read(&mut id);
        JedecId::from_bytes(id)
    }

    /// Read the JEDEC ID and look up the vendor
    ///
    /// Does not touch the session or the family.
    pub fn manufacturer_id(&mut self) -> Manufacturer {
        let jedec = self.read_jedec_id();
        diag!(self, "sfflash: manufacturer ID 0x{:02X}", jedec.manufacturer);
        jedec.vendor()
    }

    /// Read the JEDEC ID and return the raw manufacturer byte
    pub fn raw_manufacturer_id(&mut self) -> u8 {
        let jedec = self.read_jedec_id();
        diag!(self, "sfflash: manufacturer ID 0x{:02X}", jedec.manufacturer);
        jedec.manufacturer
    }

    /// Read the JEDEC ID and return the 16-bit device part
    pub fn device_id(&mut self) -> u16 {
        let jedec = self.read_jedec_id();
        diag!(self, "sfflash: device ID 0x{:04X}", jedec.device);
        jedec.device
    }

    /// Identify the chip and settle its command family
    ///
    /// Adesto is the one vendor whose parts span both families; for it the
    /// family comes from the device ID. Every other known vendor gets the
    /// configured default. An unknown vendor leaves the family alone and
    /// clears the session.
    pub fn identify(&mut self) -> core::result::Result<Session, UnknownManufacturer> {
        let jedec = self.read_jedec_id();
        let manufacturer = jedec.vendor();

        if !manufacturer.is_known() {
            log::warn!(
                "sfflash: unknown manufacturer code 0x{:02X}",
                jedec.manufacturer
            );
            self.session = None;
            return Err(UnknownManufacturer(jedec.manufacturer));
        }

        self.family = match manufacturer {
            Manufacturer::Adesto => ChipFamily::from_adesto_device(jedec.device)
                .unwrap_or(self.config.default_family),
            _ => self.config.default_family,
        };

        let session = Session {
            jedec,
            manufacturer,
            family: self.family,
        };
        diag!(
            self,
            "sfflash: found {} device 0x{:04X}, {:?}",
            manufacturer,
            jedec.device,
            self.family
        );
        self.session = Some(session);
        Ok(session)
    }

    /// Returns true if a known manufacturer answers
    pub fn check_connected(&mut self) -> bool {
        self.identify().is_ok()
    }

    // ========================================================================
    // Status registers
    // ========================================================================

    /// Raw read of the one-byte 25xx status register
    ///
    /// No busy wait is done first.
    pub fn status8(&mut self) -> u8 {
        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        busy::status8(&mut bus, &mut self.cs)
    }

    /// Raw read of the two-byte 45xx status register
    ///
    /// No busy wait is done first.
    pub fn status16(&mut self) -> u16 {
        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        busy::status16(&mut bus, &mut self.cs)
    }

    // ========================================================================
    // Busy / latch state machine
    // ========================================================================

    /// Returns true while an erase, program or status write is in flight
    pub fn is_busy(&mut self) -> bool {
        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        busy::is_busy(&mut bus, &mut self.cs, self.family)
    }

    /// Poll until the chip is idle, allowing `max_attempts` busy retries
    ///
    /// Returns false if the chip was still busy after the last retry.
    pub fn wait_ready(&mut self, max_attempts: u16) -> bool {
        let settings = self.config.bus;
        let family = self.family;
        let interval = self.config.poll_interval_ms;
        let bus = &mut self.bus;
        let cs = &mut self.cs;
        let ready = busy::bounded_poll(
            || {
                let mut guard = BusGuard::acquire(&mut *bus, &settings);
                busy::is_busy(&mut guard, &mut *cs, family)
            },
            &mut self.delay,
            max_attempts,
            interval,
        );
        if !ready {
            diag!(self, "sfflash: still busy after {} retries", max_attempts);
        }
        ready
    }

    /// [`wait_ready`](Self::wait_ready) as a `Result`
    pub(super) fn ensure_ready(&mut self, max_attempts: u16) -> Result<()> {
        if self.wait_ready(max_attempts) {
            Ok(())
        } else {
            Err(Error::DeviceBusy)
        }
    }

    /// Issue Write Disable after a bounded wait
    ///
    /// Clears a latch left set from power-up or an aborted sequence.
    pub fn disable_write(&mut self) -> Result<()> {
        self.ensure_ready(self.config.busy_attempts)?;
        let mut bus = BusGuard::acquire(&mut self.bus, &self.config.bus);
        bus.command(&mut self.cs, &[opcodes::WRDI]);
        Ok(())
    }
}
