//! Read command implementation

use crate::error::{check_range, CliError};
use indicatif::{ProgressBar, ProgressStyle};
use sfflash_core::bus::{ChipSelect, Delay, SpiBus};
use sfflash_core::FlashController;
use std::fmt::Write as _;
use std::path::Path;

/// Default chunk size for reading (4 KiB)
const READ_CHUNK_SIZE: usize = 4096;

/// Run the read command
pub fn run_read<B: SpiBus, C: ChipSelect, D: Delay>(
    flash: &mut FlashController<B, C, D>,
    size: usize,
    address: u32,
    length: Option<u32>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let length = match length {
        Some(len) => len as usize,
        None => size.saturating_sub(address as usize),
    };
    check_range(address, length, size)?;

    let data = read_with_progress(flash, address, length)?;

    match output {
        Some(path) => {
            std::fs::write(path, &data).map_err(|e| CliError::io(path, e))?;
            println!("Wrote {} bytes to {:?}", data.len(), path);
        }
        None => print!("{}", hexdump(address, &data)),
    }
    Ok(())
}

fn read_with_progress<B: SpiBus, C: ChipSelect, D: Delay>(
    flash: &mut FlashController<B, C, D>,
    address: u32,
    length: usize,
) -> Result<Vec<u8>, CliError> {
    let mut data = vec![0u8; length];

    let pb = ProgressBar::new(length as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")?
            .progress_chars("#>-"),
    );

    let mut offset = 0usize;
    for chunk in data.chunks_mut(READ_CHUNK_SIZE) {
        flash.read_block(address + offset as u32, chunk)?;
        offset += chunk.len();
        pb.set_position(offset as u64);
    }

    pb.finish_with_message("Read complete");
    Ok(data)
}

/// Classic 16-bytes-per-line hex dump
pub(crate) fn hexdump(base: u32, data: &[u8]) -> String {
    let mut out = String::new();
    for (i, line) in data.chunks(16).enumerate() {
        let _ = write!(out, "{:08X}:", base as usize + i * 16);
        for byte in line {
            let _ = write!(out, " {:02X}", byte);
        }
        for _ in line.len()..16 {
            out.push_str("   ");
        }
        out.push_str("  |");
        for &byte in line {
            out.push(if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '.'
            });
        }
        out.push_str("|\n");
    }
    out
}
