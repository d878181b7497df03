//! CRC-32 and CRC-32/CCITT
//!
//! CRC-32 is the checksum of Ethernet, zip, gzip and PNG: reversed
//! polynomial 0xEDB88320, initial value and final XOR of all ones.
//!
//! CRC-32/CCITT uses the same generator polynomial most-significant
//! bit first (0x04C11DB7), starts from all ones and has no final XOR
//! or reflection.  The published name for this parameter set is
//! CRC-32/MPEG-2.
//!
//! # Examples
//!
//! ```
//! use crc_tapestry::crc32::{crc_32, crc_ccitt32_ffffffff};
//!
//! let data = "123456789".as_bytes();
//! assert_eq!(crc_32(data), 0xCBF43926);
//! assert_eq!(crc_ccitt32_ffffffff(data), 0x0376E6E7);
//! ```
use crate::crc_table::{CrcTable, Reflection};

/// The CRC-32 polynomial 0x04C11DB7, reflected
pub const CRC_POLY_32: u32 = 0xEDB88320;
/// The CRC-32 polynomial, most-significant bit first
pub const CRC_POLY_CCITT32: u32 = 0x04C11DB7;

/// Initial value for CRC-32
pub const CRC_START_32: u32 = 0xFFFFFFFF;
/// Initial value for CRC-32/CCITT
pub const CRC_START_CCITT32_FFFFFFFF: u32 = 0xFFFFFFFF;

/// Final XOR for CRC-32
pub const CRC_XOR_OUT_32: u32 = 0xFFFFFFFF;

/// Table for CRC-32
pub static CRC32_TABLE: CrcTable<u32> =
    CrcTable::new("CRC-32", CRC_POLY_32, Reflection::Reflected);

/// Table for CRC-32/CCITT
pub static CCITT32_TABLE: CrcTable<u32> =
    CrcTable::new("CRC-32/CCITT", CRC_POLY_CCITT32, Reflection::Normal);

/// Calculate the CRC-32 of a byte slice in one pass.
pub fn crc_32(data: &[u8]) -> u32 {
    CRC32_TABLE.fold(CRC_START_32, data) ^ CRC_XOR_OUT_32
}

/// Fold the next byte into a CRC-32 value.
///
/// Start from [`CRC_START_32`] and XOR the running value with
/// [`CRC_XOR_OUT_32`] once all bytes have been folded.
///
/// # Examples
///
/// ```
/// use crc_tapestry::crc32::{update_crc_32, CRC_START_32, CRC_XOR_OUT_32};
///
/// let crc = "123456789".bytes().fold(CRC_START_32, update_crc_32);
/// assert_eq!(crc ^ CRC_XOR_OUT_32, 0xCBF43926);
/// ```
pub fn update_crc_32(crc: u32, c: u8) -> u32 {
    CRC32_TABLE.update(crc, c)
}

/// Calculate the CRC-32/CCITT of a byte slice in one pass, starting
/// from 0xFFFFFFFF.
pub fn crc_ccitt32_ffffffff(data: &[u8]) -> u32 {
    CCITT32_TABLE.fold(CRC_START_CCITT32_FFFFFFFF, data)
}

/// Fold the next byte into a CRC-32/CCITT value.
///
/// There is no final transform.
pub fn update_crc_ccitt32(crc: u32, c: u8) -> u32 {
    CCITT32_TABLE.update(crc, c)
}

#[cfg(test)]
mod tests {
    use super::{
        crc_32, crc_ccitt32_ffffffff, update_crc_32, update_crc_ccitt32,
        CRC_START_32, CRC_START_CCITT32_FFFFFFFF, CRC_XOR_OUT_32,
    };

    /// Test CRC-32/ISO-HDLC.
    /// This is the same algorithm used in the Python zlib module.
    #[test]
    fn crc_32_works() {
        let expected: u32 = 0xCBF43926;
        let data = "123456789".as_bytes();
        assert_eq!(crc_32(data), expected);
    }

    #[test]
    fn crc_32_other_strings_work() {
        assert_eq!(crc_32(b"a"), 0xE8B7BE43);
        assert_eq!(crc_32(b"abc"), 0x352441C2);
        assert_eq!(
            crc_32(b"The quick brown fox jumps over the lazy dog"),
            0x414FA339
        );
    }

    #[test]
    fn crc_ccitt32_works() {
        let expected: u32 = 0x0376E6E7;
        let data = "123456789".as_bytes();
        assert_eq!(crc_ccitt32_ffffffff(data), expected);
    }

    /// The initial value and final XOR cancel out
    #[test]
    fn empty_input_returns_finalized_seed() {
        assert_eq!(crc_32(&[]), 0x00000000);
        assert_eq!(crc_ccitt32_ffffffff(&[]), 0xFFFFFFFF);
    }

    /// Rolling update one byte at a time over "123456789"
    #[test]
    fn crc_32_update_matches_one_pass() {
        let data = "123456789".as_bytes();

        let mut crc = CRC_START_32;
        for byte in data {
            crc = update_crc_32(crc, *byte);
        }
        let result = crc ^ CRC_XOR_OUT_32;

        assert_eq!(result, crc_32(data));
        assert_eq!(result, 0xCBF43926);
    }

    #[test]
    fn crc_ccitt32_update_matches_one_pass() {
        let data = "123456789".as_bytes();

        let mut crc = CRC_START_CCITT32_FFFFFFFF;
        for byte in data {
            crc = update_crc_ccitt32(crc, *byte);
        }

        assert_eq!(crc, crc_ccitt32_ffffffff(data));
    }
}
