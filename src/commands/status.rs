//! Status register commands

use super::probe::family_name;
use crate::error::CliError;
use sfflash_core::bus::{ChipSelect, Delay, SpiBus};
use sfflash_core::chip::{ChipFamily, Status25, Status45};
use sfflash_core::FlashController;

/// Show the status register of the identified family
pub fn run_status<B: SpiBus, C: ChipSelect, D: Delay>(flash: &mut FlashController<B, C, D>) {
    let family = flash.family();
    println!("Family: {}", family_name(family));
    match family {
        ChipFamily::Family25xx => {
            let status = Status25::from_bits_retain(flash.status8());
            println!("Status: 0x{:02X}", status.bits());
            println!("  Busy:          {}", status.is_busy());
            println!("  Write enabled: {}", status.contains(Status25::WEL));
            println!("  Protect level: {}", status.protect_level());
            println!("  Flags:         {:?}", status);
        }
        ChipFamily::Family45xx => {
            let status = Status45::from_bits_retain(flash.status16());
            println!("Status: 0x{:04X}", status.bits());
            println!("  Busy:          {}", status.is_busy());
            println!("  Protected:     {}", status.contains(Status45::PROTECT));
            println!("  Flags:         {:?}", status);
        }
    }
}

/// Write the status register, one byte unless `wide` or the value needs two
pub fn run_set_status<B: SpiBus, C: ChipSelect, D: Delay>(
    flash: &mut FlashController<B, C, D>,
    value: u16,
    wide: bool,
) -> Result<(), CliError> {
    match u8::try_from(value) {
        Ok(byte) if !wide => {
            flash.set_status8(byte)?;
            println!("Status register set to 0x{:02X}", byte);
        }
        _ => {
            flash.set_status16(value)?;
            println!("Status register set to 0x{:04X}", value);
        }
    }
    Ok(())
}

/// Clear the write enable latch
pub fn run_disable_write<B: SpiBus, C: ChipSelect, D: Delay>(
    flash: &mut FlashController<B, C, D>,
) -> Result<(), CliError> {
    flash.disable_write()?;
    println!("Write enable latch cleared");
    Ok(())
}
