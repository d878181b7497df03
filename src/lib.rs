//! crate for table-driven CRC checksums
//!
//! This crate provides the classic family of CRC algorithms used for
//! checking files, serial protocols and network payloads: CRC-16,
//! CRC-16/Modbus, CRC-16/Sick, CRC-CCITT with three initial values,
//! CRC-Kermit, CRC-DNP, CRC-32, CRC-32/CCITT, CRC-64/ECMA and
//! CRC-64/WE.
//!
//! Each algorithm is available two ways: a one-pass function over a
//! whole byte slice, and an update function that folds a single byte
//! into a caller-owned CRC value.  Folding the update function over a
//! buffer and applying the algorithm's final transform always gives
//! the same result as the one-pass function.
//!
//! # Examples
//!
//! ```
//! use crc_tapestry::crc32::{crc_32, update_crc_32, CRC_START_32};
//!
//! let data = "123456789".as_bytes();
//! assert_eq!(crc_32(data), 0xCBF43926);
//!
//! let mut crc = CRC_START_32;
//! for byte in data {
//!     crc = update_crc_32(crc, *byte);
//! }
//! assert_eq!(crc ^ 0xFFFFFFFF, 0xCBF43926);
//! ```
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod catalog;
pub mod ccitt;
pub mod crc16;
pub mod crc32;
pub mod crc64;
pub mod crc_table;
pub mod error;
pub mod sick;

pub use catalog::{BitWidth, Crc, Variant, VariantDescriptor};
pub use error::ParseVariantError;

/// Checksum trait all rolling checksum calculators implement
/// This provides several compute operations
///
/// There are multiple uses of the term check or checksum.  The term
/// in this context is a computation of a error-detecting code for a
/// set of data.
pub trait Checksum<T> {
    /// Compute a checksum over a u8 byte slice
    ///
    /// Every call to compute resets the state of the CRC to an
    /// initial state.  So calling it twice with the same parameters
    /// should yield the same result.
    ///
    /// # Examples
    ///
    /// ```
    /// use crc_tapestry::{Checksum, Crc, Variant};
    ///
    /// let mut crc = Crc::new(Variant::Modbus);
    /// assert_eq!(crc.compute(b"123456789"), 0x4B37);
    /// assert_eq!(crc.compute(b"123456789"), 0x4B37);
    /// ```
    fn compute(&mut self, data: &[u8]) -> T;

    /// Perform a rolling update on the checksum.
    ///
    /// Update the checksum with a new byte, returning the raw running
    /// state.  The final transforms of the algorithm are not applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use crc_tapestry::{Checksum, Crc, Variant};
    ///
    /// let mut crc = Crc::new(Variant::Crc16);
    /// assert_eq!(crc.update(b'1'), 0xD4C1);
    /// ```
    fn update(&mut self, data: u8) -> T;

    /// Reset the checksum to the original state.
    fn reset(&mut self);
}
