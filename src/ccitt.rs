//! CRC-CCITT and CRC-Kermit
//!
//! Both use the CCITT polynomial x^16 + x^12 + x^5 + 1.  CRC-CCITT
//! processes bits most-significant first and comes in three common
//! flavours that differ only in the initial value: 0x0000 (XModem),
//! 0xFFFF and 0x1D0F.  CRC-Kermit processes bits least-significant
//! first with the reversed polynomial 0x8408, so it needs its own
//! table.
//!
//! # Examples
//!
//! ```
//! use crc_tapestry::ccitt::{crc_ccitt_ffff, crc_kermit};
//!
//! let data = "123456789".as_bytes();
//! assert_eq!(crc_ccitt_ffff(data), 0x29B1);
//! assert_eq!(crc_kermit(data), 0x2189);
//! ```
use crate::crc_table::{CrcTable, Reflection};

/// The CCITT polynomial, most-significant bit first
pub const CRC_POLY_CCITT: u16 = 0x1021;
/// The CCITT polynomial reflected, as used by Kermit
pub const CRC_POLY_KERMIT: u16 = 0x8408;

/// Initial value for CRC-CCITT (XModem)
pub const CRC_START_CCITT_0000: u16 = 0x0000;
/// Initial value for CRC-CCITT (0xFFFF)
pub const CRC_START_CCITT_FFFF: u16 = 0xFFFF;
/// Initial value for CRC-CCITT (0x1D0F)
pub const CRC_START_CCITT_1D0F: u16 = 0x1D0F;
/// Initial value for CRC-Kermit
pub const CRC_START_KERMIT: u16 = 0x0000;

/// Table shared by the three CRC-CCITT flavours
pub static CCITT_TABLE: CrcTable<u16> =
    CrcTable::new("CRC-CCITT", CRC_POLY_CCITT, Reflection::Normal);

/// Table for CRC-Kermit
pub static KERMIT_TABLE: CrcTable<u16> =
    CrcTable::new("CRC-Kermit", CRC_POLY_KERMIT, Reflection::Reflected);

fn crc_ccitt_generic(data: &[u8], start_value: u16) -> u16 {
    CCITT_TABLE.fold(start_value, data)
}

/// Calculate the CRC-CCITT with initial value 0x0000 (XModem).
pub fn crc_ccitt_0000(data: &[u8]) -> u16 {
    crc_ccitt_generic(data, CRC_START_CCITT_0000)
}

/// Calculate the CRC-CCITT with initial value 0xFFFF.
pub fn crc_ccitt_ffff(data: &[u8]) -> u16 {
    crc_ccitt_generic(data, CRC_START_CCITT_FFFF)
}

/// Calculate the CRC-CCITT with initial value 0x1D0F.
pub fn crc_ccitt_1d0f(data: &[u8]) -> u16 {
    crc_ccitt_generic(data, CRC_START_CCITT_1D0F)
}

/// Fold the next byte into a CRC-CCITT value.
///
/// Works for all three flavours; start from the matching
/// `CRC_START_CCITT_*` constant.  There is no final transform.
///
/// # Examples
///
/// ```
/// use crc_tapestry::ccitt::{update_crc_ccitt, CRC_START_CCITT_1D0F};
///
/// let crc = "123456789"
///     .bytes()
///     .fold(CRC_START_CCITT_1D0F, update_crc_ccitt);
/// assert_eq!(crc, 0xE5CC);
/// ```
pub fn update_crc_ccitt(crc: u16, c: u8) -> u16 {
    CCITT_TABLE.update(crc, c)
}

/// Calculate the CRC-Kermit of a byte slice in one pass.
///
/// The value returned is the register as read least-significant bit
/// first, the published CRC-16/KERMIT check value.  Kermit packets
/// transmit it low byte first; [`kermit_wire_order`] gives the value
/// with its bytes in transmission order.
pub fn crc_kermit(data: &[u8]) -> u16 {
    KERMIT_TABLE.fold(CRC_START_KERMIT, data)
}

/// Fold the next byte into a CRC-Kermit value.
pub fn update_crc_kermit(crc: u16, c: u8) -> u16 {
    KERMIT_TABLE.update(crc, c)
}

/// Swap the bytes of a CRC-Kermit value into transmission order.
pub fn kermit_wire_order(crc: u16) -> u16 {
    crc.swap_bytes()
}
