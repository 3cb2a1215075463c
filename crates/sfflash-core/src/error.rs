//! Error types for sfflash-core
//!
//! Addressed operations fail in exactly two ways, both of which are
//! detected before anything is sent to the chip. Identification has its
//! own failure value carrying the unrecognised manufacturer byte.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The busy flag stayed set for the whole bounded wait; the operation
    /// was not issued
    DeviceBusy,
    /// The request carried no bytes; the bus was not touched
    ZeroLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceBusy => write!(f, "flash device stayed busy"),
            Self::ZeroLength => write!(f, "zero-length request"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;

/// Identification failure: the JEDEC manufacturer byte is not a known vendor
///
/// An unknown vendor means the chip is treated as not connected, even if
/// the bus transaction itself went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownManufacturer(pub u8);

impl fmt::Display for UnknownManufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown manufacturer code 0x{:02X}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownManufacturer {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(Error::DeviceBusy.to_string(), "flash device stayed busy");
        assert_eq!(Error::ZeroLength.to_string(), "zero-length request");
        assert_eq!(
            UnknownManufacturer(0x07).to_string(),
            "unknown manufacturer code 0x07"
        );
    }
}
