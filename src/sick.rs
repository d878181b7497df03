//! CRC-16/Sick
//!
//! The checksum used by Sick laser scanners.  It is not a true CRC:
//! each step shifts the register left one bit, conditionally XORs in
//! 0x8005, then XORs in the current byte in the low half and the
//! previous byte in the high half.  Because of that last step the
//! result depends on byte pairs, so the update function takes the
//! previous byte as an explicit argument.
//!
//! There is no lookup table for this one.
//!
//! # Examples
//!
//! ```
//! use crc_tapestry::sick::crc_sick;
//!
//! assert_eq!(crc_sick("123456789".as_bytes()), 0x56A6);
//! ```

/// The Sick polynomial
pub const CRC_POLY_SICK: u16 = 0x8005;
/// Initial value for CRC-16/Sick
pub const CRC_START_SICK: u16 = 0x0000;

/// Calculate the CRC-16/Sick of a byte slice in one pass.
///
/// The first byte is folded with a previous byte of zero.  The
/// result is byte-swapped.
pub fn crc_sick(data: &[u8]) -> u16 {
    let mut crc = CRC_START_SICK;
    let mut prev_byte = 0;

    for &byte in data {
        crc = update_crc_sick(crc, byte, prev_byte);
        prev_byte = byte;
    }

    finalize_sick(crc)
}

/// Fold the next byte into a CRC-16/Sick value.
///
/// `prev_byte` is the byte folded by the previous call, or zero for
/// the first byte.
///
/// # Examples
///
/// ```
/// use crc_tapestry::sick::{crc_sick, finalize_sick, update_crc_sick, CRC_START_SICK};
///
/// let data = "123456789".as_bytes();
/// let mut crc = CRC_START_SICK;
/// let mut prev_byte = 0;
/// for &byte in data {
///     crc = update_crc_sick(crc, byte, prev_byte);
///     prev_byte = byte;
/// }
/// assert_eq!(finalize_sick(crc), crc_sick(data));
/// ```
pub fn update_crc_sick(crc: u16, c: u8, prev_byte: u8) -> u16 {
    let short_c = u16::from(c);
    let short_p = u16::from(prev_byte) << 8;

    let crc = if (crc & 0x8000) != 0 {
        (crc << 1) ^ CRC_POLY_SICK
    } else {
        crc << 1
    };

    crc ^ (short_c | short_p)
}

/// The CRC-16/Sick final transform: swap bytes.
pub fn finalize_sick(crc: u16) -> u16 {
    crc.swap_bytes()
}
