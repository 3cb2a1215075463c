//! CLI error type

use crate::profile::ProfileError;
use sfflash_core::UnknownManufacturer;
use sfflash_dummy::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that can stop a command
#[derive(Debug, Error)]
pub enum CliError {
    /// Identification failed
    #[error("no flash chip found: {0}")]
    NotConnected(#[from] UnknownManufacturer),

    /// The driver refused or timed out
    #[error("flash operation failed: {0}")]
    Flash(#[from] sfflash_core::Error),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Image(#[from] ImageError),

    /// I/O error on an input or output file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Request does not fit the chip
    #[error("range 0x{start:06X}..0x{end:06X} is outside the chip (0x{size:X} bytes)")]
    OutOfRange { start: u32, end: u64, size: usize },

    /// Nothing to do
    #[error("{0} is empty")]
    EmptyInput(PathBuf),

    #[error("progress bar template: {0}")]
    Template(#[from] indicatif::style::TemplateError),
}

impl CliError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Check that `length` bytes from `start` fit a chip of `size` bytes
pub fn check_range(start: u32, length: usize, size: usize) -> Result<(), CliError> {
    let end = start as u64 + length as u64;
    if end > size as u64 {
        return Err(CliError::OutOfRange { start, end, size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(0, 16, 16).is_ok());
        assert!(check_range(15, 1, 16).is_ok());
        assert!(check_range(16, 0, 16).is_ok());
        assert!(matches!(
            check_range(15, 2, 16),
            Err(CliError::OutOfRange { end: 17, .. })
        ));
        assert!(check_range(u32::MAX, 1, usize::MAX).is_ok());
    }
}
