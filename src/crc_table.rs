//! CRC lookup tables
//!
//! Every table-driven CRC in this crate reduces to the same two
//! pieces: a 256-entry table derived from a polynomial, and an update
//! step that folds one byte into the running CRC with a single table
//! lookup.
//!
//! The tables are held in [`CrcTable`] values.  A `CrcTable` is a
//! context object for one CRC family: it knows the polynomial and the
//! bit order, and builds the table the first time it is needed.  The
//! build is guarded by a [`OnceLock`], so concurrent first callers
//! either build the table exactly once or wait for that build and
//! share the result.  They never see a partially built table.
//!
//! # Examples
//!
//! ```
//! use crc_tapestry::crc_table::{CrcTable, Reflection};
//!
//! static CRC32: CrcTable<u32> = CrcTable::new("CRC-32", 0xEDB88320, Reflection::Reflected);
//!
//! let crc = CRC32.fold(0xFFFFFFFF, b"123456789") ^ 0xFFFFFFFF;
//! assert_eq!(crc, 0xCBF43926);
//! assert!(CRC32.is_initialized());
//! ```
use core::fmt::{self, Debug, Formatter, UpperHex};
use core::ops::{BitAnd, BitXor, Shl, Shr};
use std::sync::OnceLock;

/// Operations we need on the word type of a CRC family.
///
/// Implemented for `u16`, `u32` and `u64`, the three word sizes used
/// by the families in this crate.
pub trait Width:
    Sized
    + Copy
    + Eq
    + Debug
    + UpperHex
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + 'static
{
    /// Number of bits in the word
    const BITS: u32;
    /// The all-zeroes word
    const ZERO: Self;
    /// The word with only the lowest bit set
    const ONE: Self;

    /// Widen a byte into the low eight bits of a word
    fn from_byte(byte: u8) -> Self;

    /// The lowest eight bits of the word
    fn low_byte(self) -> u8;
}

macro_rules! impl_width {
    ($($t:ty),*) => {
        $(
            impl Width for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    Self::from(byte)
                }

                #[inline]
                fn low_byte(self) -> u8 {
                    // Truncation is the point here
                    self as u8
                }
            }
        )*
    };
}

impl_width!(u16, u32, u64);

/// The order bits are fed through the CRC register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reflection {
    /// Least-significant bit first.
    ///
    /// The polynomial is stored bit-reversed, the register shifts
    /// right and the table is indexed with the low byte of the CRC.
    Reflected,
    /// Most-significant bit first.
    ///
    /// The register shifts left and the table is indexed with the
    /// high byte of the CRC.
    Normal,
}

/// Generate the 256-entry lookup table for a polynomial.
///
/// Each entry is the CRC register after clocking the candidate byte
/// through eight rounds of polynomial division.  For
/// [`Reflection::Reflected`] the byte starts in the low bits and the
/// register shifts right.  For [`Reflection::Normal`] it starts in the
/// top byte of the word and the register shifts left.
///
/// This is a pure function: the same arguments always give the same
/// table.
///
/// # Examples
///
/// ```
/// use crc_tapestry::crc_table::{generate_table, Reflection};
///
/// let table = generate_table::<u16>(0x1021, Reflection::Normal);
/// assert_eq!(table[1], 0x1021);
/// assert_eq!(table[255], 0x1EF0);
/// ```
pub fn generate_table<W: Width>(polynomial: W, reflection: Reflection) -> [W; 256] {
    let mut table = [W::ZERO; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        let byte = W::from_byte(i as u8);

        *entry = match reflection {
            Reflection::Reflected => {
                let mut crc = byte;
                for _ in 0..8 {
                    crc = if (crc & W::ONE) != W::ZERO {
                        (crc >> 1) ^ polynomial
                    } else {
                        crc >> 1
                    };
                }
                crc
            }
            Reflection::Normal => {
                let top_bit = W::ONE << (W::BITS - 1);
                let mut crc = byte << (W::BITS - 8);
                for _ in 0..8 {
                    crc = if (crc & top_bit) != W::ZERO {
                        (crc << 1) ^ polynomial
                    } else {
                        crc << 1
                    };
                }
                crc
            }
        };
    }

    table
}

/// A CRC family: polynomial, bit order and the lazily built table.
///
/// `CrcTable::new` is a `const fn` so a family can live in a `static`
/// and be shared by every caller in the process.  The table itself is
/// not computed until the first [`CrcTable::table`], [`CrcTable::update`]
/// or [`CrcTable::fold`] call.
///
/// The CRC accumulator is never stored here.  Callers own it and pass
/// it in and out by value.
pub struct CrcTable<W: Width> {
    /// Name of the family, used for logging
    name: &'static str,
    /// The generator polynomial, in the bit order given by `reflection`
    polynomial: W,
    /// Which way the register shifts
    reflection: Reflection,
    /// The lookup table, built on first use
    table: OnceLock<[W; 256]>,
}

impl<W: Width> CrcTable<W> {
    /// Create a new CRC family.  The table is not built yet.
    pub const fn new(name: &'static str, polynomial: W, reflection: Reflection) -> Self {
        CrcTable {
            name,
            polynomial,
            reflection,
            table: OnceLock::new(),
        }
    }

    /// The family name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The generator polynomial
    pub fn polynomial(&self) -> W {
        self.polynomial
    }

    /// The bit order of the family
    pub fn reflection(&self) -> Reflection {
        self.reflection
    }

    /// Has the table been built yet
    pub fn is_initialized(&self) -> bool {
        self.table.get().is_some()
    }

    /// Get the lookup table, building it if this is the first use.
    pub fn table(&self) -> &[W; 256] {
        self.table.get_or_init(|| {
            log::trace!(
                "building {} table, polynomial 0x{:X}, {:?}",
                self.name,
                self.polynomial,
                self.reflection
            );
            generate_table(self.polynomial, self.reflection)
        })
    }

    /// Fold one byte into a running CRC.
    ///
    /// Reflected families index the table with the low byte of the CRC
    /// and shift right.  Normal families index it with the high byte
    /// and shift left; bits shifted out of the word are dropped.
    #[inline]
    pub fn update(&self, crc: W, byte: u8) -> W {
        let table = self.table();

        match self.reflection {
            Reflection::Reflected => {
                let index = crc.low_byte() ^ byte;
                (crc >> 8) ^ table[usize::from(index)]
            }
            Reflection::Normal => {
                let index = (crc >> (W::BITS - 8)).low_byte() ^ byte;
                (crc << 8) ^ table[usize::from(index)]
            }
        }
    }

    /// Fold every byte of `data` into `crc`, in order.
    ///
    /// No finalization is applied.  An empty slice returns `crc`
    /// unchanged.
    pub fn fold(&self, crc: W, data: &[u8]) -> W {
        data.iter().fold(crc, |crc, &byte| self.update(crc, byte))
    }
}

impl<W: Width> Debug for CrcTable<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "name: {:?}", self.name)?;
        write!(f, ", polynomial: 0x{:X}", self.polynomial)?;
        write!(f, ", reflection: {:?}", self.reflection)?;
        write!(f, ", initialized: {}", self.is_initialized())
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_table, CrcTable, Reflection};
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn reflected_crc_16_table_entries_work() {
        let table = generate_table::<u16>(0xA001, Reflection::Reflected);
        assert_eq!(table[0], 0x0000);
        assert_eq!(table[1], 0xC0C1);
        assert_eq!(table[255], 0x4040);
    }

    #[test]
    fn normal_ccitt_table_entries_work() {
        let table = generate_table::<u16>(0x1021, Reflection::Normal);
        assert_eq!(table[0], 0x0000);
        assert_eq!(table[1], 0x1021);
        assert_eq!(table[255], 0x1EF0);
    }

    #[test]
    fn reflected_crc_32_table_entries_work() {
        let table = generate_table::<u32>(0xEDB88320, Reflection::Reflected);
        assert_eq!(table[1], 0x77073096);
        assert_eq!(table[255], 0x2D02EF8D);
    }

    #[test]
    fn normal_crc_64_table_entries_work() {
        let table = generate_table::<u64>(0x42F0E1EBA9EA3693, Reflection::Normal);
        assert_eq!(table[1], 0x42F0E1EBA9EA3693);
        assert_eq!(table[255], 0x9AFCE626CE85B507);
    }

    /// Two independent generations give the same table
    #[test]
    fn generate_table_is_deterministic() {
        let first = generate_table::<u32>(0x04C11DB7, Reflection::Normal);
        let second = generate_table::<u32>(0x04C11DB7, Reflection::Normal);
        assert_eq!(first, second);

        let first = generate_table::<u16>(0x8408, Reflection::Reflected);
        let second = generate_table::<u16>(0x8408, Reflection::Reflected);
        assert_eq!(first, second);
    }

    #[test]
    fn table_is_built_lazily() {
        let _ = env_logger::try_init();
        let family: CrcTable<u16> = CrcTable::new("CRC-16", 0xA001, Reflection::Reflected);
        assert!(!family.is_initialized());

        let crc = family.fold(0x0000, b"");
        assert_eq!(crc, 0x0000);

        let crc = family.fold(0x0000, b"123456789");
        assert_eq!(crc, 0xBB3D);
        assert!(family.is_initialized());
        assert_eq!(
            family.table(),
            &generate_table::<u16>(0xA001, Reflection::Reflected)
        );
    }

    /// Threads racing on first use all see the same fully built table
    #[test]
    fn concurrent_first_use_builds_one_table() {
        static FAMILY: CrcTable<u64> =
            CrcTable::new("CRC-64", 0x42F0E1EBA9EA3693, Reflection::Normal);
        const THREADS: usize = 8;

        let barrier = &Barrier::new(THREADS);
        let expected = &generate_table::<u64>(0x42F0E1EBA9EA3693, Reflection::Normal);

        let addresses: Vec<usize> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(move || {
                        barrier.wait();
                        let table = FAMILY.table();
                        assert_eq!(table, expected);
                        assert_eq!(FAMILY.fold(0, b"123456789"), 0x6C40DF5F0B497347);
                        table.as_ptr() as usize
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread panicked"))
                .collect()
        });

        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn debug_works() {
        let family: CrcTable<u16> = CrcTable::new("CRC-CCITT", 0x1021, Reflection::Normal);
        let expected = "name: \"CRC-CCITT\", polynomial: 0x1021, reflection: Normal, initialized: false";
        assert_eq!(format!("{:?}", family), expected);
    }
}
