//! CRC-16, CRC-16/Modbus and CRC-DNP
//!
//! These are the reflected 16-bit CRCs.  CRC-16 and CRC-16/Modbus
//! share the reversed 0x8005 polynomial and one lookup table; they
//! differ only in the initial value.  CRC-DNP, used by the DNP3
//! protocol, has its own polynomial and table and complements and
//! byte-swaps the result.
//!
//! # Examples
//!
//! ```
//! use crc_tapestry::crc16::{crc_16, crc_modbus};
//!
//! let data = "123456789".as_bytes();
//! assert_eq!(crc_16(data), 0xBB3D);
//! assert_eq!(crc_modbus(data), 0x4B37);
//! ```
use crate::crc_table::{CrcTable, Reflection};

/// The CRC-16 polynomial 0x8005, reflected
pub const CRC_POLY_16: u16 = 0xA001;
/// The DNP polynomial 0x3D65, reflected
pub const CRC_POLY_DNP: u16 = 0xA6BC;

/// Initial value for CRC-16
pub const CRC_START_16: u16 = 0x0000;
/// Initial value for CRC-16/Modbus
pub const CRC_START_MODBUS: u16 = 0xFFFF;
/// Initial value for CRC-DNP
pub const CRC_START_DNP: u16 = 0x0000;

/// Table shared by CRC-16 and CRC-16/Modbus
pub static CRC16_TABLE: CrcTable<u16> =
    CrcTable::new("CRC-16", CRC_POLY_16, Reflection::Reflected);

/// Table for CRC-DNP
pub static DNP_TABLE: CrcTable<u16> =
    CrcTable::new("CRC-DNP", CRC_POLY_DNP, Reflection::Reflected);

/// Calculate the CRC-16 of a byte slice in one pass.
pub fn crc_16(data: &[u8]) -> u16 {
    CRC16_TABLE.fold(CRC_START_16, data)
}

/// Calculate the CRC-16/Modbus of a byte slice in one pass.
///
/// Modbus RTU frames carry this value low byte first.
pub fn crc_modbus(data: &[u8]) -> u16 {
    CRC16_TABLE.fold(CRC_START_MODBUS, data)
}

/// Fold the next byte into a CRC-16 or CRC-16/Modbus value.
///
/// Start from [`CRC_START_16`] or [`CRC_START_MODBUS`].  Neither
/// variant has a final transform, so the running value is the result.
/// Callers holding a wider integer should truncate it to its low
/// eight bits before calling.
///
/// # Examples
///
/// ```
/// use crc_tapestry::crc16::{update_crc_16, CRC_START_MODBUS};
///
/// let crc = "123456789"
///     .bytes()
///     .fold(CRC_START_MODBUS, update_crc_16);
/// assert_eq!(crc, 0x4B37);
/// ```
pub fn update_crc_16(crc: u16, c: u8) -> u16 {
    CRC16_TABLE.update(crc, c)
}

/// Calculate the CRC-DNP of a byte slice in one pass.
///
/// The folded value is complemented and then byte-swapped.
pub fn crc_dnp(data: &[u8]) -> u16 {
    finalize_dnp(DNP_TABLE.fold(CRC_START_DNP, data))
}

/// Fold the next byte into a CRC-DNP value.
///
/// The running value has not been complemented or swapped.  Apply
/// [`finalize_dnp`] once all bytes have been folded.
pub fn update_crc_dnp(crc: u16, c: u8) -> u16 {
    DNP_TABLE.update(crc, c)
}

/// The CRC-DNP final transform: bit-complement, then swap bytes.
pub fn finalize_dnp(crc: u16) -> u16 {
    (!crc).swap_bytes()
}
