//! The catalog of named CRC variants
//!
//! Every algorithm in the crate is described by a
//! [`VariantDescriptor`]: width, polynomial, initial value, whether
//! input and output are reflected, the final XOR and whether the
//! result is byte-swapped.  [`Variant`] names the twelve algorithms
//! and ties each one to its one-pass and update functions.
//!
//! [`Crc`] is a rolling calculator over any variant.  It keeps the
//! running state (including the previous byte, for CRC-16/Sick) so a
//! caller can feed bytes as they arrive and finalize at the end.
//!
//! # Examples
//!
//! ```
//! use crc_tapestry::{Checksum, Crc, Variant};
//!
//! let data = "123456789".as_bytes();
//!
//! assert_eq!(Variant::Crc32.checksum(data), 0xCBF43926);
//!
//! let mut crc = Crc::new(Variant::Kermit);
//! for byte in data {
//!     crc.update(*byte);
//! }
//! assert_eq!(crc.finalize(), 0x2189);
//! ```
use core::fmt::{self, Debug, Display, Formatter};
use core::str::FromStr;

use crate::{ccitt, crc16, crc32, crc64, error::ParseVariantError, sick, Checksum};

/// The bit-width of the CRC
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitWidth {
    /// 16-bit
    Sixteen = 16,
    /// 32-bit
    ThirtyTwo = 32,
    /// 64-bit
    SixtyFour = 64,
}

impl BitWidth {
    /// Number of bits
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Number of hex digits needed to print a value of this width
    pub fn hex_digits(self) -> usize {
        self as usize / 4
    }

    /// A mask with the low `bits()` bits set
    pub fn mask(self) -> u64 {
        match self {
            BitWidth::Sixteen => u64::from(u16::MAX),
            BitWidth::ThirtyTwo => u64::from(u32::MAX),
            BitWidth::SixtyFour => u64::MAX,
        }
    }
}

/// The parameters of a named CRC algorithm
///
/// Values are stored in a `u64` whatever the width; only the low
/// `width` bits are meaningful.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// The name of the algorithm
    pub name: &'static str,
    /// Width of the CRC register
    pub width: BitWidth,
    /// The polynomial as the lookup table sees it.
    /// Reflected algorithms store it bit-reversed.
    pub poly: u64,
    /// Initial value of the register
    pub initial: u64,
    /// Bytes are fed least-significant bit first
    pub reflect_in: bool,
    /// The register is read least-significant bit first
    pub reflect_out: bool,
    /// Whether the final value should be XORed before returned, and
    /// what it should be XORed with.
    pub xor_out: Option<u64>,
    /// Swap the two bytes of the result, after any XOR
    pub swap_out: bool,
    /// The result for the ASCII string "123456789"
    pub check: u64,
}

impl Debug for VariantDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let digits = self.width.hex_digits();

        write!(f, "name: {:?}", self.name)?;
        write!(f, ", width: {:?}", self.width)?;
        write!(f, ", polynomial: 0x{:0digits$X}", self.poly)?;
        write!(f, ", initial: 0x{:0digits$X}", self.initial)?;
        write!(f, ", reflect_in: {:?}", self.reflect_in)?;
        write!(f, ", reflect_out: {:?}", self.reflect_out)?;
        if let Some(xor_out) = self.xor_out {
            write!(f, ", xor_out: 0x{:0digits$X}", xor_out)?;
        } else {
            write!(f, ", xor_out: None")?;
        }
        write!(f, ", swap_out: {:?}", self.swap_out)?;
        write!(f, ", check: 0x{:0digits$X}", self.check)
    }
}

/// The named CRC algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// CRC-16 (ARC), initial value 0x0000
    Crc16,
    /// CRC-16/Modbus, initial value 0xFFFF
    Modbus,
    /// CRC-16/Sick
    Sick,
    /// CRC-CCITT, initial value 0x0000 (XModem)
    CcittZero,
    /// CRC-CCITT, initial value 0xFFFF
    CcittFfff,
    /// CRC-CCITT, initial value 0x1D0F
    Ccitt1d0f,
    /// CRC-Kermit
    Kermit,
    /// CRC-DNP
    Dnp,
    /// CRC-32
    Crc32,
    /// CRC-32/CCITT, most-significant bit first without final XOR
    Ccitt32,
    /// CRC-64/ECMA
    Crc64Ecma,
    /// CRC-64/WE
    Crc64We,
}

impl Variant {
    /// Every variant in the catalog
    pub const ALL: [Variant; 12] = [
        Variant::Crc16,
        Variant::Modbus,
        Variant::Sick,
        Variant::CcittZero,
        Variant::CcittFfff,
        Variant::Ccitt1d0f,
        Variant::Kermit,
        Variant::Dnp,
        Variant::Crc32,
        Variant::Ccitt32,
        Variant::Crc64Ecma,
        Variant::Crc64We,
    ];

    /// The catalog entry for this variant
    pub fn descriptor(self) -> VariantDescriptor {
        match self {
            Variant::Crc16 => VariantDescriptor {
                name: "CRC-16",
                width: BitWidth::Sixteen,
                poly: crc16::CRC_POLY_16.into(),
                initial: crc16::CRC_START_16.into(),
                reflect_in: true,
                reflect_out: true,
                xor_out: None,
                swap_out: false,
                check: 0xBB3D,
            },
            Variant::Modbus => VariantDescriptor {
                name: "CRC-16/MODBUS",
                width: BitWidth::Sixteen,
                poly: crc16::CRC_POLY_16.into(),
                initial: crc16::CRC_START_MODBUS.into(),
                reflect_in: true,
                reflect_out: true,
                xor_out: None,
                swap_out: false,
                check: 0x4B37,
            },
            Variant::Sick => VariantDescriptor {
                name: "CRC-16/SICK",
                width: BitWidth::Sixteen,
                poly: sick::CRC_POLY_SICK.into(),
                initial: sick::CRC_START_SICK.into(),
                reflect_in: false,
                reflect_out: false,
                xor_out: None,
                swap_out: true,
                check: 0x56A6,
            },
            Variant::CcittZero => VariantDescriptor {
                name: "CRC-CCITT/0000",
                width: BitWidth::Sixteen,
                poly: ccitt::CRC_POLY_CCITT.into(),
                initial: ccitt::CRC_START_CCITT_0000.into(),
                reflect_in: false,
                reflect_out: false,
                xor_out: None,
                swap_out: false,
                check: 0x31C3,
            },
            Variant::CcittFfff => VariantDescriptor {
                name: "CRC-CCITT/FFFF",
                width: BitWidth::Sixteen,
                poly: ccitt::CRC_POLY_CCITT.into(),
                initial: ccitt::CRC_START_CCITT_FFFF.into(),
                reflect_in: false,
                reflect_out: false,
                xor_out: None,
                swap_out: false,
                check: 0x29B1,
            },
            Variant::Ccitt1d0f => VariantDescriptor {
                name: "CRC-CCITT/1D0F",
                width: BitWidth::Sixteen,
                poly: ccitt::CRC_POLY_CCITT.into(),
                initial: ccitt::CRC_START_CCITT_1D0F.into(),
                reflect_in: false,
                reflect_out: false,
                xor_out: None,
                swap_out: false,
                check: 0xE5CC,
            },
            Variant::Kermit => VariantDescriptor {
                name: "CRC-16/KERMIT",
                width: BitWidth::Sixteen,
                poly: ccitt::CRC_POLY_KERMIT.into(),
                initial: ccitt::CRC_START_KERMIT.into(),
                reflect_in: true,
                reflect_out: true,
                xor_out: None,
                swap_out: false,
                check: 0x2189,
            },
            Variant::Dnp => VariantDescriptor {
                name: "CRC-16/DNP",
                width: BitWidth::Sixteen,
                poly: crc16::CRC_POLY_DNP.into(),
                initial: crc16::CRC_START_DNP.into(),
                reflect_in: true,
                reflect_out: true,
                xor_out: Some(0xFFFF),
                swap_out: true,
                check: 0x82EA,
            },
            Variant::Crc32 => VariantDescriptor {
                name: "CRC-32",
                width: BitWidth::ThirtyTwo,
                poly: crc32::CRC_POLY_32.into(),
                initial: crc32::CRC_START_32.into(),
                reflect_in: true,
                reflect_out: true,
                xor_out: Some(crc32::CRC_XOR_OUT_32.into()),
                swap_out: false,
                check: 0xCBF43926,
            },
            Variant::Ccitt32 => VariantDescriptor {
                name: "CRC-32/CCITT",
                width: BitWidth::ThirtyTwo,
                poly: crc32::CRC_POLY_CCITT32.into(),
                initial: crc32::CRC_START_CCITT32_FFFFFFFF.into(),
                reflect_in: false,
                reflect_out: false,
                xor_out: None,
                swap_out: false,
                check: 0x0376E6E7,
            },
            Variant::Crc64Ecma => VariantDescriptor {
                name: "CRC-64/ECMA",
                width: BitWidth::SixtyFour,
                poly: crc64::CRC_POLY_64,
                initial: crc64::CRC_START_64_ECMA,
                reflect_in: false,
                reflect_out: false,
                xor_out: None,
                swap_out: false,
                check: 0x6C40DF5F0B497347,
            },
            Variant::Crc64We => VariantDescriptor {
                name: "CRC-64/WE",
                width: BitWidth::SixtyFour,
                poly: crc64::CRC_POLY_64,
                initial: crc64::CRC_START_64_WE,
                reflect_in: false,
                reflect_out: false,
                xor_out: Some(crc64::CRC_XOR_OUT_64_WE),
                swap_out: false,
                check: 0x62EC59E3F1A4F00A,
            },
        }
    }

    /// The catalog name, e.g. `CRC-16/MODBUS`
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Width of the CRC register
    pub fn width(self) -> BitWidth {
        self.descriptor().width
    }

    /// Initial value of the CRC register
    pub fn initial(self) -> u64 {
        self.descriptor().initial
    }

    /// Calculate this variant's CRC of a byte slice in one pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use crc_tapestry::Variant;
    ///
    /// for variant in Variant::ALL {
    ///     let descriptor = variant.descriptor();
    ///     assert_eq!(variant.checksum(b"123456789"), descriptor.check);
    /// }
    /// ```
    pub fn checksum(self, data: &[u8]) -> u64 {
        match self {
            Variant::Crc16 => crc16::crc_16(data).into(),
            Variant::Modbus => crc16::crc_modbus(data).into(),
            Variant::Sick => sick::crc_sick(data).into(),
            Variant::CcittZero => ccitt::crc_ccitt_0000(data).into(),
            Variant::CcittFfff => ccitt::crc_ccitt_ffff(data).into(),
            Variant::Ccitt1d0f => ccitt::crc_ccitt_1d0f(data).into(),
            Variant::Kermit => ccitt::crc_kermit(data).into(),
            Variant::Dnp => crc16::crc_dnp(data).into(),
            Variant::Crc32 => crc32::crc_32(data).into(),
            Variant::Ccitt32 => crc32::crc_ccitt32_ffffffff(data).into(),
            Variant::Crc64Ecma => crc64::crc_64_ecma(data),
            Variant::Crc64We => crc64::crc_64_we(data),
        }
    }

    /// Fold one byte into a raw register value of this variant.
    ///
    /// `crc` is truncated to the variant's width.  `prev_byte` is only
    /// read by CRC-16/Sick.
    pub fn update(self, crc: u64, c: u8, prev_byte: u8) -> u64 {
        // Truncate to the register width
        let short_crc = crc as u16;
        let long_crc = crc as u32;

        match self {
            Variant::Crc16 | Variant::Modbus => crc16::update_crc_16(short_crc, c).into(),
            Variant::Sick => sick::update_crc_sick(short_crc, c, prev_byte).into(),
            Variant::CcittZero | Variant::CcittFfff | Variant::Ccitt1d0f => {
                ccitt::update_crc_ccitt(short_crc, c).into()
            }
            Variant::Kermit => ccitt::update_crc_kermit(short_crc, c).into(),
            Variant::Dnp => crc16::update_crc_dnp(short_crc, c).into(),
            Variant::Crc32 => crc32::update_crc_32(long_crc, c).into(),
            Variant::Ccitt32 => crc32::update_crc_ccitt32(long_crc, c).into(),
            Variant::Crc64Ecma | Variant::Crc64We => crc64::update_crc_64(crc, c),
        }
    }

    /// Apply the variant's final transforms to a raw register value:
    /// the final XOR, then the byte swap.
    pub fn finalize(self, crc: u64) -> u64 {
        let descriptor = self.descriptor();
        let mut crc = crc & descriptor.width.mask();

        if let Some(xor_out) = descriptor.xor_out {
            crc ^= xor_out;
        }
        if descriptor.swap_out {
            crc = u64::from((crc as u16).swap_bytes());
        }

        crc
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    /// Look up a variant by its catalog name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariantError {
                name: s.to_string(),
            })
    }
}

/// A rolling CRC calculator for one variant
///
/// The CRC tables themselves are shared process-wide; a `Crc` only
/// holds the running register and the last byte seen.
#[derive(Clone)]
pub struct Crc {
    variant: Variant,

    /// state of the CRC for rolling checksums
    crc: u64,

    /// the byte folded by the last update, for CRC-16/Sick
    prev_byte: u8,
}

impl Debug for Crc {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let digits = self.variant.width().hex_digits();
        write!(f, "variant: {}", self.variant)?;
        write!(f, ", crc: 0x{:0digits$X}", self.crc)?;
        write!(f, ", prev_byte: 0x{:02X}", self.prev_byte)
    }
}

impl Crc {
    /// Create a new rolling CRC, starting from the variant's initial
    /// value.
    pub fn new(variant: Variant) -> Self {
        Crc {
            variant,
            crc: variant.initial(),
            prev_byte: 0,
        }
    }

    /// The variant being calculated
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Get the current state of the CRC
    pub fn state(&self) -> u64 {
        self.crc
    }

    /// "Finalize" the CRC value
    /// For a rolling checksum, this calculates the final transforms,
    /// Such as XORing and byte-swapping the output.
    /// The running state is left untouched so more bytes can follow.
    pub fn finalize(&self) -> u64 {
        self.variant.finalize(self.crc)
    }
}

impl Checksum<u64> for Crc {
    fn compute(&mut self, data: &[u8]) -> u64 {
        self.reset();

        for byte in data {
            self.update(*byte);
        }

        self.finalize()
    }

    fn update(&mut self, data: u8) -> u64 {
        self.crc = self.variant.update(self.crc, data, self.prev_byte);
        self.prev_byte = data;

        self.crc
    }

    fn reset(&mut self) {
        self.crc = self.variant.initial();
        self.prev_byte = 0;
    }
}
