//! 24-bit address encoding

/// Number of address bytes sent after an addressed opcode
pub const ADDRESS_BYTES: usize = 3;

/// Highest byte offset expressible with a 3-byte address (16 MiB - 1)
pub const MAX_ADDRESS: u32 = 0x00FF_FFFF;

/// Encode an address as three bytes, MSB first
///
/// Bits above bit 23 are dropped; range checking against the chip
/// capacity is the caller's business.
pub const fn encode_address(address: u32) -> [u8; ADDRESS_BYTES] {
    [(address >> 16) as u8, (address >> 8) as u8, address as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_msb_first() {
        assert_eq!(encode_address(0x123456), [0x12, 0x34, 0x56]);
        assert_eq!(encode_address(MAX_ADDRESS), [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_encode_truncates_to_24_bits() {
        assert_eq!(encode_address(0xAB00_0001), [0x00, 0x00, 0x01]);
    }
}
