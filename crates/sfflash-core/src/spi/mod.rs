//! SPI wire-level definitions
//!
//! This module provides the command opcodes, address encoding and the bus
//! settings handed to the transport on every transaction.

mod address;
pub mod opcodes;
mod settings;

pub use address::{encode_address, ADDRESS_BYTES, MAX_ADDRESS};
pub use opcodes::*;
pub use settings::{BitOrder, BusSettings, SpiMode, DEFAULT_CLOCK_HZ};
