//! CRC-64/ECMA and CRC-64/WE
//!
//! Both use the ECMA-182 polynomial most-significant bit first.
//! CRC-64/ECMA starts from zero with no final XOR.  CRC-64/WE starts
//! from all ones and XORs the result with all ones.
//!
//! # Examples
//!
//! ```
//! use crc_tapestry::crc64::{crc_64_ecma, crc_64_we};
//!
//! let data = "123456789".as_bytes();
//! assert_eq!(crc_64_ecma(data), 0x6C40DF5F0B497347);
//! assert_eq!(crc_64_we(data), 0x62EC59E3F1A4F00A);
//! ```
use crate::crc_table::{CrcTable, Reflection};

/// The ECMA-182 polynomial
pub const CRC_POLY_64: u64 = 0x42F0E1EBA9EA3693;

/// Initial value for CRC-64/ECMA
pub const CRC_START_64_ECMA: u64 = 0x0000000000000000;
/// Initial value for CRC-64/WE
pub const CRC_START_64_WE: u64 = 0xFFFFFFFFFFFFFFFF;

/// Final XOR for CRC-64/WE
pub const CRC_XOR_OUT_64_WE: u64 = 0xFFFFFFFFFFFFFFFF;

/// Table shared by CRC-64/ECMA and CRC-64/WE
pub static CRC64_TABLE: CrcTable<u64> =
    CrcTable::new("CRC-64", CRC_POLY_64, Reflection::Normal);

/// Calculate the CRC-64/ECMA of a byte slice in one pass.
pub fn crc_64_ecma(data: &[u8]) -> u64 {
    CRC64_TABLE.fold(CRC_START_64_ECMA, data)
}

/// Calculate the CRC-64/WE of a byte slice in one pass.
pub fn crc_64_we(data: &[u8]) -> u64 {
    CRC64_TABLE.fold(CRC_START_64_WE, data) ^ CRC_XOR_OUT_64_WE
}

/// Fold the next byte into a CRC-64/ECMA or CRC-64/WE value.
///
/// For CRC-64/WE, XOR the running value with [`CRC_XOR_OUT_64_WE`]
/// once all bytes have been folded.
pub fn update_crc_64(crc: u64, c: u8) -> u64 {
    CRC64_TABLE.update(crc, c)
}
