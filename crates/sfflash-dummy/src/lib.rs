//! sfflash-dummy - In-memory flash emulator for testing
//!
//! This crate emulates a serial flash chip behind the three transport
//! traits of `sfflash-core`, so the real controller can be driven without
//! hardware. The chip state lives behind an `Rc<RefCell<_>>`; the bus,
//! chip-select and delay handles all share it.
//!
//! Commands execute when /CS goes high, as on real parts. While a program
//! or erase is in flight the chip reports busy on status reads and rejects
//! every other command. Each rejection is counted, so tests can see words
//! dropped by a driver that does not wait.

mod config;
mod error;

pub use config::DummyConfig;
pub use error::{ImageError, Result};

use std::cell::{Ref, RefCell};
use std::fs;
use std::path::Path;
use std::rc::Rc;

use sfflash_core::bus::{ChipSelect, Delay, SpiBus};
use sfflash_core::chip::{ChipFamily, Status25, Status45};
use sfflash_core::spi::{opcodes, BusSettings, FILLER};

/// Page size used for Page Program wrap-around
const PAGE_SIZE: usize = 256;

/// Everything the emulator has seen on the bus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusLog {
    /// MOSI bytes of every completed frame
    pub frames: Vec<Vec<u8>>,
    /// begin_transaction calls
    pub begins: usize,
    /// end_transaction calls
    pub ends: usize,
    /// Delay calls, in milliseconds each
    pub delays: Vec<u32>,
    /// Transfers without /CS, /CS outside a transaction, nested
    /// transactions, /CS still low at release, malformed frames
    pub violations: usize,
    /// Commands refused because the chip was busy
    pub rejected: usize,
    /// Commands ignored because the write enable latch was clear
    pub ignored: usize,
}

impl BusLog {
    /// Frames whose first byte is `opcode`
    pub fn count(&self, opcode: u8) -> usize {
        self.frames.iter().filter(|f| f.first() == Some(&opcode)).count()
    }
}

struct Chip {
    config: DummyConfig,
    data: Vec<u8>,
    /// Bytes last written with WRSR
    status_reg: [u8; 2],
    write_enabled: bool,
    status_write_enabled: bool,
    /// Remaining busy status reads
    busy: u32,
    /// Next AAI address while in AAI mode
    aai_pointer: Option<usize>,
    so_busy_output: bool,
    bus_held: bool,
    current: Option<Vec<u8>>,
    frame_rejected: bool,
    frame_busy: bool,
    log: BusLog,
}

impl Chip {
    fn new(config: DummyConfig) -> Self {
        let data = vec![0xFF; config.size];
        Self {
            config,
            data,
            status_reg: [0; 2],
            write_enabled: false,
            status_write_enabled: false,
            busy: 0,
            aai_pointer: None,
            so_busy_output: false,
            bus_held: false,
            current: None,
            frame_rejected: false,
            frame_busy: false,
            log: BusLog::default(),
        }
    }

    fn status_opcode(&self) -> u8 {
        self.config.family.status_opcode()
    }

    /// MISO byte for the byte just appended at `pos`
    fn respond(&mut self, frame: &[u8], pos: usize) -> u8 {
        let opcode = frame[0];
        if pos == 0 {
            // Everything but a status read is refused while busy
            self.frame_rejected = self.busy > 0 && opcode != self.status_opcode();
            return FILLER;
        }
        if opcode == self.status_opcode() {
            if pos == 1 {
                self.frame_busy = self.busy > 0;
                self.busy = self.busy.saturating_sub(1);
            }
            return self.status_byte(pos);
        }
        if self.frame_rejected {
            return FILLER;
        }
        match opcode {
            opcodes::RDID => match pos {
                1 => self.config.manufacturer_id,
                2 => (self.config.device_id >> 8) as u8,
                3 => self.config.device_id as u8,
                _ => FILLER,
            },
            opcodes::READ if pos >= 4 => {
                let start = self.address(frame);
                let offset = self.wrap(start + pos - 4);
                self.data.get(offset).copied().unwrap_or(FILLER)
            }
            _ => FILLER,
        }
    }

    fn status_byte(&self, pos: usize) -> u8 {
        match self.config.family {
            ChipFamily::Family25xx => {
                let mut status = Status25::from_bits_retain(self.status_reg[0]);
                status.set(Status25::BUSY, self.frame_busy);
                status.set(Status25::WEL, self.write_enabled);
                status.bits()
            }
            ChipFamily::Family45xx => {
                // Density code for 32 Mbit in bits 13:10
                let mut status = Status45::from_bits_retain(0b1101 << 10);
                status.set(Status45::RDY | Status45::RDY2, !self.frame_busy);
                let [high, low] = status.bits().to_be_bytes();
                if pos == 1 {
                    high
                } else {
                    low
                }
            }
        }
    }

    fn address(&self, frame: &[u8]) -> usize {
        let raw = u32::from_be_bytes([0, frame[1], frame[2], frame[3]]) as usize;
        self.wrap(raw)
    }

    /// Offset into the array, wrapping at the chip size. A zero-sized chip
    /// maps everything to 0, which `get` then misses.
    fn wrap(&self, offset: usize) -> usize {
        offset.checked_rem(self.data.len()).unwrap_or(0)
    }

    fn program(&mut self, address: usize, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            let offset = self.wrap(address + i);
            // Programming only clears bits
            if let Some(cell) = self.data.get_mut(offset) {
                *cell &= byte;
            }
        }
    }

    fn execute(&mut self, frame: &[u8]) {
        if self.frame_rejected {
            self.log.rejected += 1;
            log::debug!("dummy: chip busy, rejected 0x{:02X}", frame[0]);
            return;
        }
        match frame[0] {
            opcodes::WREN => self.write_enabled = true,
            opcodes::WRDI => {
                self.write_enabled = false;
                self.aai_pointer = None;
            }
            opcodes::EWSR => self.status_write_enabled = true,
            opcodes::EBSY => self.so_busy_output = true,
            opcodes::DBSY => self.so_busy_output = false,
            opcodes::WRSR => self.write_status(&frame[1..]),
            opcodes::PP => self.page_program(frame),
            opcodes::AAI_WP if self.config.aai => self.aai_program(frame),
            opcodes::CE_C7 => self.chip_erase(),
            opcodes::RDID | opcodes::READ | opcodes::RDSR | opcodes::RDSR_45 => {}
            other => {
                log::warn!("dummy: unsupported opcode 0x{:02X}", other);
                self.log.violations += 1;
            }
        }
    }

    fn write_status(&mut self, bytes: &[u8]) {
        if !(self.write_enabled || self.status_write_enabled) {
            self.log.ignored += 1;
            return;
        }
        for (reg, &byte) in self.status_reg.iter_mut().zip(bytes) {
            *reg = byte;
        }
        // BUSY and WEL are not writable
        self.status_reg[0] &= !(Status25::BUSY | Status25::WEL).bits();
        self.write_enabled = false;
        self.status_write_enabled = false;
        self.busy = self.config.status_write_busy_polls;
    }

    fn page_program(&mut self, frame: &[u8]) {
        if frame.len() < 4 {
            self.log.violations += 1;
            return;
        }
        if !self.write_enabled {
            self.log.ignored += 1;
            return;
        }
        let address = self.address(frame);
        let page = address & !(PAGE_SIZE - 1);
        for (i, &byte) in frame[4..].iter().enumerate() {
            // Wraps within the page
            let offset = self.wrap(page + ((address + i) % PAGE_SIZE));
            if let Some(cell) = self.data.get_mut(offset) {
                *cell &= byte;
            }
        }
        self.write_enabled = false;
        self.busy = self.config.program_busy_polls;
    }

    fn aai_program(&mut self, frame: &[u8]) {
        match (self.aai_pointer, frame.len()) {
            (None, 6) => {
                if !self.write_enabled {
                    self.log.ignored += 1;
                    return;
                }
                let address = self.address(frame);
                self.program(address, &frame[4..6]);
                self.aai_pointer = Some(address + 2);
            }
            (Some(address), 3) => {
                self.program(address, &frame[1..3]);
                self.aai_pointer = Some(address + 2);
            }
            _ => {
                self.log.violations += 1;
                return;
            }
        }
        self.busy = self.config.program_busy_polls;
    }

    fn chip_erase(&mut self) {
        if !self.write_enabled {
            self.log.ignored += 1;
            return;
        }
        self.data.fill(0xFF);
        self.write_enabled = false;
        self.busy = self.config.erase_busy_polls;
    }
}

type Shared = Rc<RefCell<Chip>>;

/// Dummy flash chip
///
/// Emulates a flash chip in memory for testing purposes. Hand the handles
/// from [`bus`](Self::bus), [`chip_select`](Self::chip_select) and
/// [`delay`](Self::delay) to a controller and inspect the chip through
/// this value.
#[derive(Clone)]
pub struct DummyFlash {
    chip: Shared,
}

impl DummyFlash {
    /// Create a new dummy flash with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        Self {
            chip: Rc::new(RefCell::new(Chip::new(config))),
        }
    }

    /// Create a new dummy flash with default configuration (W25Q128FV)
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Create a dummy flash with pre-filled data
    pub fn with_data(config: DummyConfig, initial_data: &[u8]) -> Self {
        let flash = Self::new(config);
        {
            let mut chip = flash.chip.borrow_mut();
            let len = initial_data.len().min(chip.data.len());
            chip.data[..len].copy_from_slice(&initial_data[..len]);
        }
        flash
    }

    /// Bus handle
    pub fn bus(&self) -> DummyBus {
        DummyBus(self.chip.clone())
    }

    /// Chip-select handle
    pub fn chip_select(&self) -> DummyCs {
        DummyCs(self.chip.clone())
    }

    /// Delay handle (records, never sleeps)
    pub fn delay(&self) -> DummyDelay {
        DummyDelay(self.chip.clone())
    }

    /// Get the configuration
    pub fn config(&self) -> DummyConfig {
        self.chip.borrow().config.clone()
    }

    /// Borrow the flash array
    pub fn data(&self) -> Ref<'_, [u8]> {
        Ref::map(self.chip.borrow(), |chip| chip.data.as_slice())
    }

    /// Snapshot of the bus log
    pub fn log(&self) -> BusLog {
        self.chip.borrow().log.clone()
    }

    /// Commands refused so far because the chip was busy
    pub fn rejected(&self) -> usize {
        self.chip.borrow().log.rejected
    }

    /// Forget recorded traffic
    pub fn clear_log(&self) {
        self.chip.borrow_mut().log = BusLog::default();
    }

    /// Bytes last written to the status register
    pub fn status_register(&self) -> [u8; 2] {
        self.chip.borrow().status_reg
    }

    /// State of the write enable latch
    pub fn write_enabled(&self) -> bool {
        self.chip.borrow().write_enabled
    }

    /// Returns true between the first AAI word and Write Disable
    pub fn in_aai_mode(&self) -> bool {
        self.chip.borrow().aai_pointer.is_some()
    }

    /// Returns true if SO was switched to busy output with EBSY
    pub fn busy_on_so(&self) -> bool {
        self.chip.borrow().so_busy_output
    }

    /// Returns true while the chip would report busy
    pub fn is_busy(&self) -> bool {
        self.chip.borrow().busy > 0
    }

    /// Report busy on the next `polls` status reads
    pub fn scripted_busy(&self, polls: u32) {
        self.chip.borrow_mut().busy = polls;
    }

    /// Replace the start of the array with `image`, erasing the rest
    pub fn load(&self, image: &[u8]) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        if image.len() > chip.data.len() {
            return Err(ImageError::TooLarge {
                actual: image.len(),
                capacity: chip.data.len(),
            });
        }
        chip.data.fill(0xFF);
        chip.data[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// [`load`](Self::load) from a file
    pub fn load_image(&self, path: &Path) -> Result<()> {
        let image = fs::read(path).map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load(&image)?;
        log::info!("dummy: loaded {} bytes from {}", image.len(), path.display());
        Ok(())
    }

    /// Write the whole array to a file
    pub fn save_image(&self, path: &Path) -> Result<()> {
        fs::write(path, &*self.data()).map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("dummy: saved image to {}", path.display());
        Ok(())
    }
}

/// Bus side of a [`DummyFlash`]
pub struct DummyBus(Shared);

/// Chip-select side of a [`DummyFlash`]
pub struct DummyCs(Shared);

/// Delay source of a [`DummyFlash`]
pub struct DummyDelay(Shared);

impl SpiBus for DummyBus {
    fn begin_transaction(&mut self, _settings: &BusSettings) {
        let mut chip = self.0.borrow_mut();
        if chip.bus_held {
            chip.log.violations += 1;
        }
        chip.bus_held = true;
        chip.log.begins += 1;
    }

    fn end_transaction(&mut self) {
        let mut chip = self.0.borrow_mut();
        if chip.current.is_some() {
            log::warn!("dummy: bus released with /CS low");
            chip.log.violations += 1;
        }
        chip.bus_held = false;
        chip.log.ends += 1;
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        let mut chip = self.0.borrow_mut();
        let Some(mut frame) = chip.current.take() else {
            chip.log.violations += 1;
            return FILLER;
        };
        frame.push(byte);
        let out = chip.respond(&frame, frame.len() - 1);
        chip.current = Some(frame);
        out
    }
}

impl ChipSelect for DummyCs {
    fn select(&mut self) {
        let mut chip = self.0.borrow_mut();
        if !chip.bus_held || chip.current.is_some() {
            chip.log.violations += 1;
        }
        chip.current = Some(Vec::new());
        chip.frame_rejected = false;
    }

    fn deselect(&mut self) {
        let mut chip = self.0.borrow_mut();
        let Some(frame) = chip.current.take() else {
            return;
        };
        if frame.is_empty() {
            return;
        }
        chip.execute(&frame);
        chip.log.frames.push(frame);
    }
}

impl Delay for DummyDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().log.delays.push(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfflash_core::flash::{AaiPacing, FlashConfig, FlashController};
    use sfflash_core::Error;

    type Controller = FlashController<DummyBus, DummyCs, DummyDelay>;

    fn controller(flash: &DummyFlash, config: FlashConfig) -> Controller {
        let mut ctl =
            FlashController::with_config(flash.bus(), flash.chip_select(), flash.delay(), config);
        assert!(ctl.begin());
        ctl
    }

    fn small(config: DummyConfig) -> DummyFlash {
        DummyFlash::new(config.with_size(64 * 1024))
    }

    fn assert_clean(flash: &DummyFlash) {
        let log = flash.log();
        assert_eq!(log.violations, 0, "protocol violations");
        assert_eq!(log.begins, log.ends, "bus left held");
    }

    #[test]
    fn test_identify() {
        let flash = small(DummyConfig::default());
        let ctl = controller(&flash, FlashConfig::default());
        let session = ctl.session().copied().unwrap();
        assert_eq!(session.jedec.raw(), 0xEF4018);
        assert_eq!(session.family, ChipFamily::Family25xx);
    }

    #[test]
    fn test_read_write() {
        let flash = small(DummyConfig::default().with_busy_polls(3, 0, 0));
        let mut ctl = controller(&flash, FlashConfig::default());

        ctl.write_block(0x1000, &[0x12, 0x34, 0x56, 0x78]).unwrap();
        assert!(!flash.write_enabled());
        ctl.write_byte(0x1004, 0x9A).unwrap();

        let mut buf = [0u8; 5];
        ctl.read_block(0x1000, &mut buf).unwrap();
        assert_eq!(buf, [0x12, 0x34, 0x56, 0x78, 0x9A]);
        assert_eq!(ctl.read_byte(0x1005), Ok(0xFF));
        assert_eq!(flash.log().rejected, 0);
        assert_clean(&flash);
    }

    #[test]
    fn test_program_only_clears_bits() {
        let flash = small(DummyConfig::default());
        let mut ctl = controller(&flash, FlashConfig::default());
        ctl.write_byte(0, 0xF0).unwrap();
        ctl.write_byte(0, 0x3C).unwrap();
        assert_eq!(ctl.read_byte(0), Ok(0x30));
    }

    #[test]
    fn test_page_program_wraps() {
        let flash = small(DummyConfig::default());
        let mut ctl = controller(&flash, FlashConfig::default());
        ctl.write_block(0x01FE, &[1, 2, 3, 4]).unwrap();
        assert_eq!(&flash.data()[0x01FE..0x0200], &[1, 2]);
        assert_eq!(&flash.data()[0x0100..0x0102], &[3, 4]);
        assert_eq!(flash.data()[0x0200], 0xFF);
    }

    #[test]
    fn test_erase() {
        let flash = DummyFlash::with_data(
            DummyConfig::default()
                .with_size(4096)
                .with_busy_polls(0, 120, 0),
            &[0u8; 4096],
        );
        let mut ctl = controller(&flash, FlashConfig::default());

        let mut reports = Vec::new();
        ctl.erase_with_progress(|polls| reports.push(polls)).unwrap();

        assert!(flash.data().iter().all(|&b| b == 0xFF));
        assert!(!flash.is_busy());
        // 120 busy polls then idle, reported every 50
        assert_eq!(reports, vec![1, 51, 101]);
        assert_eq!(flash.log().count(opcodes::CE_C7), 1);
        assert_eq!(flash.log().rejected, 0);
        assert_clean(&flash);
    }

    #[test]
    fn test_busy_chip_refuses_commands() {
        let flash = small(DummyConfig::default());
        let mut ctl = controller(&flash, FlashConfig::default());
        flash.scripted_busy(500);

        assert_eq!(ctl.write_byte(0, 0x00), Err(Error::DeviceBusy));
        assert_eq!(flash.data()[0], 0xFF);
        // Nothing reached the chip, so nothing was rejected
        assert_eq!(flash.log().rejected, 0);
        assert_eq!(flash.log().count(opcodes::RDSR), 101);
    }

    #[test]
    fn test_wait_then_write() {
        let flash = small(DummyConfig::default());
        let mut ctl = controller(&flash, FlashConfig::default());
        flash.scripted_busy(100);

        ctl.write_byte(0, 0x42).unwrap();
        assert_eq!(flash.data()[0], 0x42);
        assert_eq!(flash.log().delays.len(), 100);
    }

    #[test]
    fn test_aai_unpaced_on_fast_chip() {
        let flash = small(DummyConfig::sst25vf016b());
        let mut ctl = controller(&flash, FlashConfig::default());

        let data: Vec<u8> = (0u8..9).collect();
        ctl.write_block_aai(0x100, &data).unwrap();

        assert_eq!(&flash.data()[0x100..0x109], data.as_slice());
        assert!(!flash.busy_on_so());
        assert!(!flash.in_aai_mode());
        assert!(!flash.write_enabled());
        assert_clean(&flash);
    }

    #[test]
    fn test_aai_unpaced_loses_words_on_busy_chip() {
        let flash = small(DummyConfig::sst25vf016b().with_busy_polls(1, 0, 0));
        let mut ctl = controller(&flash, FlashConfig::default());

        ctl.write_block_aai(0, &[1, 2, 3, 4, 5, 6]).unwrap();

        // The first word lands, the rest and WRDI hit a busy chip
        assert_eq!(&flash.data()[..6], &[1, 2, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(flash.rejected(), 3);
        assert!(flash.in_aai_mode());
    }

    #[test]
    fn test_aai_paced_on_busy_chip() {
        let flash = small(DummyConfig::sst25vf016b().with_busy_polls(2, 0, 0));
        let config = FlashConfig::default().with_aai_pacing(AaiPacing::PollBusy);
        let mut ctl = controller(&flash, config);

        let data = [1, 2, 3, 4, 5, 6, 7];
        ctl.write_block_aai(0x20, &data).unwrap();

        assert_eq!(&flash.data()[0x20..0x27], &data);
        assert_eq!(flash.log().rejected, 0);
        assert!(!flash.in_aai_mode());
        assert_clean(&flash);
    }

    #[test]
    fn test_aai_paced_timeout_leaves_aai_mode() {
        let flash = small(DummyConfig::sst25vf016b().with_busy_polls(10, 0, 0));
        let config = FlashConfig::default()
            .with_aai_pacing(AaiPacing::PollBusy)
            .with_busy_attempts(2);
        let mut ctl = controller(&flash, config);

        assert_eq!(ctl.write_block_aai(0, &[1, 2, 3, 4]), Err(Error::DeviceBusy));

        // Only the first word made it, but WRDI was accepted
        assert_eq!(&flash.data()[..4], &[1, 2, 0xFF, 0xFF]);
        assert!(!flash.in_aai_mode());
        assert!(!flash.write_enabled());
        assert_eq!(flash.rejected(), 0);
        assert_clean(&flash);
    }

    #[test]
    fn test_zero_sized_chip() {
        let flash = DummyFlash::new(DummyConfig::sst25vf016b().with_size(0));
        let mut ctl = controller(&flash, FlashConfig::default());

        assert_eq!(ctl.read_byte(0x10), Ok(0xFF));
        ctl.write_byte(0x10, 0x00).unwrap();
        assert!(flash.data().is_empty());
    }

    #[test]
    fn test_45xx_polarity() {
        let flash = small(DummyConfig::at45db321e().with_busy_polls(4, 0, 0));
        let mut ctl = controller(&flash, FlashConfig::default());
        assert_eq!(ctl.family(), ChipFamily::Family45xx);

        ctl.write_block(0, &[0xAB, 0xCD]).unwrap();
        assert!(ctl.is_busy());

        // The read waits out the remaining busy polls on the 16-bit register
        let mut buf = [0u8; 2];
        ctl.read_block(0, &mut buf).unwrap();
        assert_eq!(buf, [0xAB, 0xCD]);
        let log = flash.log();
        assert_eq!(log.count(opcodes::RDSR), 0);
        assert!(log.count(opcodes::RDSR_45) >= 5);
        assert_eq!(log.rejected, 0);
    }

    #[test]
    fn test_45xx_status_bits() {
        let flash = small(DummyConfig::at45db321e());
        let mut ctl = controller(&flash, FlashConfig::default());
        let idle = Status45::from_bits_retain(ctl.status16());
        assert!(idle.contains(Status45::RDY | Status45::RDY2));

        flash.scripted_busy(1);
        let busy = Status45::from_bits_retain(ctl.status16());
        assert!(busy.is_busy());
    }

    #[test]
    fn test_set_status_clears_protection() {
        let flash = small(DummyConfig::sst25vf016b());
        let mut ctl = controller(&flash, FlashConfig::default());

        ctl.set_status8(0x1C).unwrap();
        assert_eq!(
            Status25::from_bits_retain(ctl.status8()).protect_level(),
            0b111
        );
        ctl.set_status8(0x00).unwrap();
        assert_eq!(ctl.status8(), 0x00);
        ctl.set_status16(0x0C02).unwrap();
        assert_eq!(flash.status_register(), [0x0C, 0x02]);
    }

    #[test]
    fn test_program_without_wel_is_ignored() {
        let flash = small(DummyConfig::default());
        let mut bus = flash.bus();
        let mut cs = flash.chip_select();

        bus.begin_transaction(&BusSettings::default());
        cs.select();
        for byte in [opcodes::PP, 0, 0, 0, 0x00] {
            bus.transfer(byte);
        }
        cs.deselect();
        bus.end_transaction();

        assert_eq!(flash.data()[0], 0xFF);
        assert_eq!(flash.log().ignored, 1);
        assert_clean(&flash);
    }

    #[test]
    fn test_transfer_without_select_is_a_violation() {
        let flash = small(DummyConfig::default());
        let mut bus = flash.bus();
        bus.begin_transaction(&BusSettings::default());
        bus.transfer(opcodes::WREN);
        bus.end_transaction();
        assert_eq!(flash.log().violations, 1);
        assert!(!flash.write_enabled());
    }

    #[test]
    fn test_disable_write() {
        let flash = small(DummyConfig::default());
        let mut ctl = controller(&flash, FlashConfig::default());
        {
            let mut bus = flash.bus();
            let mut cs = flash.chip_select();
            bus.begin_transaction(&BusSettings::default());
            cs.select();
            bus.transfer(opcodes::WREN);
            cs.deselect();
            bus.end_transaction();
        }
        assert!(flash.write_enabled());
        ctl.disable_write().unwrap();
        assert!(!flash.write_enabled());
    }

    #[test]
    fn test_image_round_trip() {
        let path = std::env::temp_dir().join(format!("sfflash-dummy-{}.bin", std::process::id()));
        let flash = DummyFlash::new(DummyConfig::default().with_size(16));
        flash.load(&[1, 2, 3]).unwrap();
        flash.save_image(&path).unwrap();

        let other = DummyFlash::new(DummyConfig::default().with_size(16));
        other.load_image(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(&other.data()[..4], &[1, 2, 3, 0xFF]);
        assert_eq!(other.data().len(), 16);
    }

    #[test]
    fn test_image_too_large() {
        let flash = DummyFlash::new(DummyConfig::default().with_size(4));
        assert!(matches!(
            flash.load(&[0; 5]),
            Err(ImageError::TooLarge {
                actual: 5,
                capacity: 4
            })
        ));
    }
}
