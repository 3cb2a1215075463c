//! Scripted transport for controller tests
//!
//! Records every frame (MOSI bytes per /CS assertion) and answers status,
//! JEDEC and read commands from a script. It keeps no flash contents; the
//! emulator in `sfflash-dummy` covers data behaviour.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use super::{FlashConfig, FlashController};
use crate::bus::{ChipSelect, Delay, SpiBus};
use crate::spi::{opcodes, BusSettings};

pub(crate) struct MockState {
    /// MOSI bytes of every completed frame
    pub frames: Vec<Vec<u8>>,
    current: Option<Vec<u8>>,
    /// begin_transaction / end_transaction calls
    pub begins: usize,
    pub ends: usize,
    /// Settings passed to the latest begin_transaction
    pub settings: Option<BusSettings>,
    bus_held: bool,
    /// Transfers outside a frame, frames outside a transaction
    pub violations: usize,
    /// Delay calls (ms each)
    pub delays: Vec<u32>,
    /// JEDEC answer
    pub jedec: [u8; 3],
    /// Busy answers for upcoming status frames; idle once empty
    pub busy_script: VecDeque<bool>,
    frame_busy: bool,
    /// Data served after a READ address
    pub read_data: Vec<u8>,
}

impl MockState {
    fn respond(&mut self, frame: &[u8]) -> u8 {
        let pos = frame.len() - 1;
        if pos == 0 {
            return 0xFF;
        }
        match frame[0] {
            opcodes::RDID => self.jedec.get(pos - 1).copied().unwrap_or(0xFF),
            opcodes::RDSR | opcodes::RDSR_45 => {
                if pos == 1 {
                    self.frame_busy = self.busy_script.pop_front().unwrap_or(false);
                }
                self.status_byte(frame[0])
            }
            opcodes::READ if pos > 3 => {
                self.read_data.get(pos - 4).copied().unwrap_or(0xFF)
            }
            _ => 0xFF,
        }
    }

    fn status_byte(&self, opcode: u8) -> u8 {
        match (opcode, self.frame_busy) {
            (opcodes::RDSR, true) => 0x03,
            (opcodes::RDSR, false) => 0x00,
            // 45xx: RDY in bit 7 of both bytes, plus density bits
            (_, true) => 0x3C,
            (_, false) => 0xBC,
        }
    }

    /// Frames whose first byte is `opcode`
    pub fn count(&self, opcode: u8) -> usize {
        self.frames.iter().filter(|f| f.first() == Some(&opcode)).count()
    }

    /// First byte of every frame, in order
    pub fn opcodes(&self) -> Vec<u8> {
        self.frames.iter().filter_map(|f| f.first().copied()).collect()
    }

    /// Frames that are not status reads
    pub fn commands(&self) -> Vec<Vec<u8>> {
        self.frames
            .iter()
            .filter(|f| !matches!(f.first(), Some(&opcodes::RDSR) | Some(&opcodes::RDSR_45)))
            .cloned()
            .collect()
    }

    /// Total bytes shifted out
    pub fn bytes_sent(&self) -> usize {
        self.frames.iter().map(|f| f.len()).sum()
    }

    /// Forget recorded traffic, keep the script
    pub fn clear_log(&mut self) {
        self.frames.clear();
        self.delays.clear();
        self.begins = 0;
        self.ends = 0;
    }
}

pub(crate) type Shared = Rc<RefCell<MockState>>;

pub(crate) struct MockBus(Shared);
pub(crate) struct MockCs(Shared);
pub(crate) struct MockDelay(Shared);

impl SpiBus for MockBus {
    fn begin_transaction(&mut self, settings: &BusSettings) {
        let mut st = self.0.borrow_mut();
        st.settings = Some(*settings);
        if st.bus_held {
            st.violations += 1;
        }
        st.bus_held = true;
        st.begins += 1;
    }

    fn end_transaction(&mut self) {
        let mut st = self.0.borrow_mut();
        st.bus_held = false;
        st.ends += 1;
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        let mut st = self.0.borrow_mut();
        let Some(mut frame) = st.current.take() else {
            st.violations += 1;
            return 0xFF;
        };
        frame.push(byte);
        let out = st.respond(&frame);
        st.current = Some(frame);
        out
    }
}

impl ChipSelect for MockCs {
    fn select(&mut self) {
        let mut st = self.0.borrow_mut();
        if !st.bus_held || st.current.is_some() {
            st.violations += 1;
        }
        st.current = Some(Vec::new());
    }

    fn deselect(&mut self) {
        let mut st = self.0.borrow_mut();
        if let Some(frame) = st.current.take() {
            st.frames.push(frame);
        }
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().delays.push(ms);
    }
}

pub(crate) type MockController = FlashController<MockBus, MockCs, MockDelay>;

/// A controller on a mock chip answering `jedec`, with the given config
pub(crate) fn mock_with(jedec: [u8; 3], config: FlashConfig) -> (Shared, MockController) {
    let state = Rc::new(RefCell::new(MockState {
        frames: Vec::new(),
        current: None,
        begins: 0,
        ends: 0,
        settings: None,
        bus_held: false,
        violations: 0,
        delays: Vec::new(),
        jedec,
        busy_script: VecDeque::new(),
        frame_busy: false,
        read_data: Vec::new(),
    }));
    let ctl = FlashController::with_config(
        MockBus(state.clone()),
        MockCs(state.clone()),
        MockDelay(state.clone()),
        config,
    );
    (state, ctl)
}

/// A Winbond 25xx mock with the default config
pub(crate) fn mock() -> (Shared, MockController) {
    mock_with([0xEF, 0x40, 0x18], FlashConfig::default())
}

/// Queue `n` busy answers followed by idle
pub(crate) fn script_busy(state: &Shared, n: usize) {
    state.borrow_mut().busy_script.extend(core::iter::repeat(true).take(n));
}

/// Assert that the bus is free, /CS is high and nothing was out of order
pub(crate) fn assert_clean(state: &Shared) {
    let st = state.borrow();
    assert_eq!(st.violations, 0, "protocol violations");
    assert_eq!(st.begins, st.ends, "bus left held");
    assert!(st.current.is_none(), "chip select left asserted");
}
