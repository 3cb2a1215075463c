//! CLI command implementations
//!
//! Every command works on an identified [`FlashController`]; none of them
//! know that the chip behind it is emulated.
//!
//! [`FlashController`]: sfflash_core::FlashController

mod erase;
mod probe;
mod read;
mod status;
mod write;

pub use erase::run_erase;
pub use probe::run_probe;
pub use read::run_read;
pub use status::{run_disable_write, run_set_status, run_status};
pub use write::run_write;
