//! Erase command implementation

use crate::error::CliError;
use indicatif::{ProgressBar, ProgressStyle};
use sfflash_core::bus::{ChipSelect, Delay, SpiBus};
use sfflash_core::FlashController;
use std::time::Duration;

/// Erase entire chip with progress spinner
pub fn run_erase<B: SpiBus, C: ChipSelect, D: Delay>(
    flash: &mut FlashController<B, C, D>,
    size: usize,
) -> Result<(), CliError> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Erasing {} bytes (this may take a while)...", size));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = flash.erase_with_progress(|polls| {
        pb.set_message(format!(
            "Erasing {} bytes, {} status polls so far...",
            size, polls
        ));
    });
    if let Err(e) = result {
        pb.abandon_with_message("Erase failed");
        return Err(e.into());
    }

    pb.finish_with_message(format!("Erased {} bytes", size));
    Ok(())
}
