//! Chip profiles
//!
//! A profile describes the emulated chip and the driver settings used
//! against it:
//!
//! ```toml
//! [chip]
//! manufacturer_id = 0xBF
//! device_id = 0x2541
//! size = 2097152
//! aai = true
//!
//! [driver]
//! aai_pacing = "PollBusy"
//! ```

use serde::{Deserialize, Serialize};
use sfflash_core::FlashConfig;
use sfflash_dummy::DummyConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a profile
#[derive(Debug, Error)]
pub enum ProfileError {
    /// I/O error reading the profile
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error
    #[error("invalid profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// The chip section describes an empty array
    #[error("invalid profile: chip size must be non-zero")]
    ZeroSize,
}

/// Emulated chip plus driver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// The emulated chip
    pub chip: DummyConfig,
    /// Controller settings
    pub driver: FlashConfig,
}

impl Profile {
    /// Parse a profile from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, ProfileError> {
        let profile: Self = toml::from_str(s)?;
        if profile.chip.size == 0 {
            return Err(ProfileError::ZeroSize);
        }
        Ok(profile)
    }

    /// Load a profile from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
