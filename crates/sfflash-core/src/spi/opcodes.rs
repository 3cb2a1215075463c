//! Serial flash command opcodes
//!
//! The set understood by 25xx parts from the common vendors, plus the SST
//! AAI extensions and the 16-bit status read of the Adesto 45xx line.

// ============================================================================
// Write control
// ============================================================================

/// Write Enable - sets the WEL bit, required before every program/erase
pub const WREN: u8 = 0x06;
/// Write Disable - clears WEL; also terminates AAI programming
pub const WRDI: u8 = 0x04;
/// Enable Write Status Register (legacy SST command)
pub const EWSR: u8 = 0x50;

// ============================================================================
// Status register operations
// ============================================================================

/// Read Status Register (25xx, one byte)
pub const RDSR: u8 = 0x05;
/// Status Register Read (45xx, two bytes)
pub const RDSR_45: u8 = 0xD7;
/// Write Status Register
pub const WRSR: u8 = 0x01;

// ============================================================================
// Identification
// ============================================================================

/// Read JEDEC ID (manufacturer + device ID)
pub const RDID: u8 = 0x9F;

// ============================================================================
// Read / program / erase
// ============================================================================

/// Read Data (no dummy cycles)
pub const READ: u8 = 0x03;
/// Page Program
pub const PP: u8 = 0x02;
/// Chip Erase
pub const CE_C7: u8 = 0xC7;

// ============================================================================
// Auto Address Increment (SST)
// ============================================================================

/// AAI Word Program - two data bytes per transaction
pub const AAI_WP: u8 = 0xAD;
/// Enable SO to output RY/BY# status during AAI programming
pub const EBSY: u8 = 0x70;
/// Disable SO as RY/BY# output during AAI programming
pub const DBSY: u8 = 0x80;

/// Byte shifted out while clocking in a response
pub const FILLER: u8 = 0xFF;
