//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u32
fn parse_hex_u32(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

/// Parse a status register value (8 or 16 bits)
fn parse_status(s: &str) -> Result<u16, String> {
    let value = parse_hex_u32(s)?;
    u16::try_from(value).map_err(|_| format!("Status value 0x{:X} exceeds 16 bits", value))
}

#[derive(Parser)]
#[command(name = "sfflash")]
#[command(author, version, about = "SPI NOR serial flash driver on an emulated chip", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Chip profile (TOML). Defaults to a 16 MiB Winbond W25Q128FV
    #[arg(long, global = true)]
    pub chip: Option<PathBuf>,

    /// Flash image backing the emulated chip. Loaded before the command if
    /// it exists, saved after commands that change the chip
    #[arg(long, global = true)]
    pub image: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify the flash chip
    Probe,

    /// Show the status register
    Status,

    /// Read flash contents
    Read {
        /// Start address (hex, e.g., 0x10000)
        #[arg(long, value_parser = parse_hex_u32, default_value = "0")]
        address: u32,

        /// Number of bytes (hex or decimal, defaults to the rest of the chip)
        #[arg(long, value_parser = parse_hex_u32)]
        length: Option<u32>,

        /// Output file path (hex dump to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Program a file into flash (target must be erased)
    Write {
        /// Start address (hex, e.g., 0x10000)
        #[arg(long, value_parser = parse_hex_u32, default_value = "0")]
        address: u32,

        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Use AAI word programming instead of page programming
        #[arg(long)]
        aai: bool,
    },

    /// Erase the whole chip
    Erase,

    /// Write the status register
    SetStatus {
        /// New value (hex or decimal)
        #[arg(value_parser = parse_status)]
        value: u16,

        /// Write two status bytes even if the value fits in one
        #[arg(long)]
        wide: bool,
    },

    /// Clear the write enable latch
    DisableWrite,
}

impl Commands {
    /// Returns true if the command can change the chip contents
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Write { .. } | Self::Erase | Self::SetStatus { .. } | Self::DisableWrite
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_u32() {
        assert_eq!(parse_hex_u32("0x10000"), Ok(0x10000));
        assert_eq!(parse_hex_u32("0XFF"), Ok(0xFF));
        assert_eq!(parse_hex_u32("4096"), Ok(4096));
        assert!(parse_hex_u32("0xZZ").is_err());
        assert!(parse_hex_u32("").is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("0x1C"), Ok(0x1C));
        assert_eq!(parse_status("0xBC80"), Ok(0xBC80));
        assert!(parse_status("0x10000").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "sfflash", "-vv", "--image", "flash.bin", "write", "--address", "0x100", "-i",
            "data.bin", "--aai",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.mutates());
        match cli.command {
            Commands::Write {
                address,
                input,
                aai,
            } => {
                assert_eq!(address, 0x100);
                assert_eq!(input, PathBuf::from("data.bin"));
                assert!(aai);
            }
            _ => panic!("expected write"),
        }

        let cli = Cli::try_parse_from(["sfflash", "read", "--length", "16"]).unwrap();
        assert!(!cli.command.mutates());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
