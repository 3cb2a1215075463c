//! Flash controller
//!
//! This module provides [`FlashController`], which owns the transport for
//! one chip and implements identification, busy polling, reads, writes
//! and erase on top of it.

/// Diagnostic record, emitted only while debugging is enabled on the
/// controller
macro_rules! diag {
    ($ctl:expr, $($arg:tt)+) => {
        if $ctl.debug {
            log::debug!($($arg)+);
        }
    };
}

mod busy;
mod config;
mod controller;
mod operations;
mod session;

#[cfg(test)]
mod mock;

pub use config::{AaiPacing, FlashConfig};
pub use controller::FlashController;
pub use session::Session;
