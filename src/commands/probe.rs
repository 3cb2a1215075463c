//! Probe command implementation

use sfflash_core::chip::ChipFamily;
use sfflash_core::Session;

pub(crate) fn family_name(family: ChipFamily) -> &'static str {
    match family {
        ChipFamily::Family25xx => "25xx (8-bit status, BUSY = bit 0)",
        ChipFamily::Family45xx => "45xx (16-bit status, RDY = bit 15)",
    }
}

/// Print what identification found
pub fn run_probe(session: &Session, size: usize) {
    println!("Found flash chip:");
    println!("  Vendor:   {}", session.manufacturer.name());
    println!(
        "  JEDEC ID: {:02X} {:04X}",
        session.jedec.manufacturer,
        session.device_id()
    );
    println!("  Family:   {}", family_name(session.family));
    println!(
        "  Size:     {} bytes ({} KiB)",
        size,
        size / 1024
    );
}
