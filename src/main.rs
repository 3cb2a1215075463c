//! sfflash - SPI NOR serial flash driver
//!
//! Drives `sfflash-core` against the emulated chip from `sfflash-dummy`.
//! The chip is described by a TOML profile and can be backed by an image
//! file, so a sequence of invocations behaves like one chip:
//!
//! ```text
//! sfflash --chip profiles/sst25vf016b.toml --image flash.bin erase
//! sfflash --chip profiles/sst25vf016b.toml --image flash.bin write -i fw.bin --aai
//! sfflash --chip profiles/sst25vf016b.toml --image flash.bin read --length 64
//! ```

mod cli;
mod commands;
mod error;
mod profile;

use clap::Parser;
use cli::{Cli, Commands};
use error::CliError;
use profile::Profile;
use sfflash_core::FlashController;
use sfflash_dummy::DummyFlash;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let profile = match &cli.chip {
        Some(path) => {
            let profile = Profile::from_toml_file(path)?;
            log::info!("Loaded chip profile from {}", path.display());
            profile
        }
        None => Profile::default(),
    };

    let chip = DummyFlash::new(profile.chip.clone());
    if let Some(image) = &cli.image {
        if image.exists() {
            chip.load_image(image)?;
        } else {
            log::info!("{} not found, starting from an erased chip", image.display());
        }
    }

    let mut flash =
        FlashController::with_config(chip.bus(), chip.chip_select(), chip.delay(), profile.driver);
    if cli.verbose > 0 {
        flash.enable_debugging();
    }

    let size = profile.chip.size;
    let mutates = cli.command.mutates();
    let result = run(&mut flash, cli.command, size);

    if result.is_ok() && mutates {
        if let Some(image) = &cli.image {
            chip.save_image(image)?;
        }
    }

    let rejected = chip.rejected();
    if rejected > 0 {
        log::warn!("Chip rejected {} commands while busy", rejected);
    }

    result?;
    Ok(())
}

fn run<B, C, D>(
    flash: &mut FlashController<B, C, D>,
    command: Commands,
    size: usize,
) -> Result<(), CliError>
where
    B: sfflash_core::bus::SpiBus,
    C: sfflash_core::bus::ChipSelect,
    D: sfflash_core::bus::Delay,
{
    let session = flash.identify()?;
    log::info!(
        "Found {} device 0x{:04X}",
        session.manufacturer,
        session.device_id()
    );

    match command {
        Commands::Probe => {
            commands::run_probe(&session, size);
            Ok(())
        }
        Commands::Status => {
            commands::run_status(flash);
            Ok(())
        }
        Commands::Read {
            address,
            length,
            output,
        } => commands::run_read(flash, size, address, length, output.as_deref()),
        Commands::Write {
            address,
            input,
            aai,
        } => commands::run_write(flash, size, address, &input, aai),
        Commands::Erase => commands::run_erase(flash, size),
        Commands::SetStatus { value, wide } => commands::run_set_status(flash, value, wide),
        Commands::DisableWrite => commands::run_disable_write(flash),
    }
}
