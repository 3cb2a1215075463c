//! sfflash-core - Driver for SPI NOR serial flash chips
//!
//! This crate speaks the command protocol of SPI-attached NOR flash:
//! JEDEC identification, the write-enable latch, page programming,
//! Auto Address Increment (AAI) word programming, chip erase and
//! busy polling. It is `no_std` and allocation free.
//!
//! The bus, the chip-select line and the delay source are supplied by the
//! caller through the traits in [`bus`].
//!
//! # Features
//!
//! - `std` - Implement `std::error::Error` and enable serde derives
//!
//! # Example
//!
//! ```ignore
//! use sfflash_core::flash::FlashController;
//!
//! let mut flash = FlashController::new(bus, cs, delay);
//! if !flash.begin() {
//!     log::error!("no flash chip found");
//!     return;
//! }
//!
//! flash.write_block(0x1000, b"hello")?;
//! let mut buf = [0u8; 5];
//! flash.read_block(0x1000, &mut buf)?;
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod bus;
pub mod chip;
pub mod error;
pub mod flash;
pub mod spi;

pub use error::{Error, Result, UnknownManufacturer};
pub use flash::{FlashConfig, FlashController, Session};
