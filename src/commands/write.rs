//! Write command implementation

use crate::error::{check_range, CliError};
use indicatif::{ProgressBar, ProgressStyle};
use sfflash_core::bus::{ChipSelect, Delay, SpiBus};
use sfflash_core::FlashController;
use std::ops::Range;
use std::path::Path;

/// Page Program cannot cross this boundary
const PAGE_SIZE: u32 = 256;
/// Chunk size for AAI writes, even so every chunk is whole words
const AAI_CHUNK_SIZE: usize = 4096;

/// Run the write command
///
/// The target range must already be erased.
pub fn run_write<B: SpiBus, C: ChipSelect, D: Delay>(
    flash: &mut FlashController<B, C, D>,
    size: usize,
    address: u32,
    input: &Path,
    aai: bool,
) -> Result<(), CliError> {
    let data = std::fs::read(input).map_err(|e| CliError::io(input, e))?;
    if data.is_empty() {
        return Err(CliError::EmptyInput(input.to_path_buf()));
    }
    check_range(address, data.len(), size)?;

    let pb = ProgressBar::new(data.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta}) Writing")?
            .progress_chars("#>-"),
    );

    if aai {
        let mut offset = 0usize;
        for chunk in data.chunks(AAI_CHUNK_SIZE) {
            flash.write_block_aai(address + offset as u32, chunk)?;
            offset += chunk.len();
            pb.set_position(offset as u64);
        }
    } else {
        for (chunk_addr, range) in page_chunks(address, data.len()) {
            flash.write_block(chunk_addr, &data[range.clone()])?;
            pb.set_position(range.end as u64);
        }
    }

    pb.finish_with_message("Write complete");
    println!("Wrote {} bytes at 0x{:06X}", data.len(), address);
    Ok(())
}

/// Split `len` bytes at `address` into runs that stay inside one page
fn page_chunks(address: u32, len: usize) -> impl Iterator<Item = (u32, Range<usize>)> {
    let mut offset = 0usize;
    std::iter::from_fn(move || {
        if offset >= len {
            return None;
        }
        let addr = address + offset as u32;
        let room = (PAGE_SIZE - addr % PAGE_SIZE) as usize;
        let end = (offset + room).min(len);
        let chunk = (addr, offset..end);
        offset = end;
        Some(chunk)
    })
}
