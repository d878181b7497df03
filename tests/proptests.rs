//! Property-based tests for the CRC catalog.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use crc_tapestry::crc_table::{generate_table, Reflection};
use crc_tapestry::{ccitt, crc16, crc32, crc64, sick, Checksum, Crc, Variant};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 10,000 bytes.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=10_000)
}

fn arb_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

/// Fold a variant's update function from its seed and finalize.
fn fold_and_finalize(variant: Variant, data: &[u8]) -> u64 {
    let mut crc = variant.initial();
    let mut prev_byte = 0;
    for &byte in data {
        crc = variant.update(crc, byte, prev_byte);
        prev_byte = byte;
    }
    variant.finalize(crc)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn one_pass_equals_fold(variant in arb_variant(), data in arb_data()) {
        prop_assert_eq!(variant.checksum(&data), fold_and_finalize(variant, &data));
    }

    #[test]
    fn rolling_calculator_equals_one_pass(variant in arb_variant(), data in arb_data()) {
        let mut crc = Crc::new(variant);
        prop_assert_eq!(crc.compute(&data), variant.checksum(&data));

        crc.reset();
        for &byte in &data {
            crc.update(byte);
        }
        prop_assert_eq!(crc.finalize(), variant.checksum(&data));
    }

    /// The incremental value agrees with the one-pass value at every
    /// prefix of the buffer.
    #[test]
    fn every_prefix_agrees(
        variant in arb_variant(),
        data in prop::collection::vec(any::<u8>(), 0..=512)
    ) {
        let mut crc = Crc::new(variant);
        prop_assert_eq!(crc.finalize(), variant.checksum(&[]));

        for (i, &byte) in data.iter().enumerate() {
            crc.update(byte);
            prop_assert_eq!(crc.finalize(), variant.checksum(&data[..=i]));
        }
    }

    /// The typed module functions agree with the catalog.
    #[test]
    fn module_functions_match_catalog(data in arb_data()) {
        prop_assert_eq!(u64::from(crc16::crc_16(&data)), Variant::Crc16.checksum(&data));
        prop_assert_eq!(u64::from(crc16::crc_modbus(&data)), Variant::Modbus.checksum(&data));
        prop_assert_eq!(u64::from(crc16::crc_dnp(&data)), Variant::Dnp.checksum(&data));
        prop_assert_eq!(u64::from(sick::crc_sick(&data)), Variant::Sick.checksum(&data));
        prop_assert_eq!(u64::from(ccitt::crc_ccitt_0000(&data)), Variant::CcittZero.checksum(&data));
        prop_assert_eq!(u64::from(ccitt::crc_ccitt_ffff(&data)), Variant::CcittFfff.checksum(&data));
        prop_assert_eq!(u64::from(ccitt::crc_ccitt_1d0f(&data)), Variant::Ccitt1d0f.checksum(&data));
        prop_assert_eq!(u64::from(ccitt::crc_kermit(&data)), Variant::Kermit.checksum(&data));
        prop_assert_eq!(u64::from(crc32::crc_32(&data)), Variant::Crc32.checksum(&data));
        prop_assert_eq!(u64::from(crc32::crc_ccitt32_ffffffff(&data)), Variant::Ccitt32.checksum(&data));
        prop_assert_eq!(crc64::crc_64_ecma(&data), Variant::Crc64Ecma.checksum(&data));
        prop_assert_eq!(crc64::crc_64_we(&data), Variant::Crc64We.checksum(&data));
    }

    /// CRC-32 update one byte at a time, finalized with the XOR mask.
    #[test]
    fn crc_32_update_equals_one_pass(data in arb_data()) {
        let crc = data.iter().fold(crc32::CRC_START_32, |crc, &b| crc32::update_crc_32(crc, b));
        prop_assert_eq!(crc ^ crc32::CRC_XOR_OUT_32, crc32::crc_32(&data));
    }

    /// Feeding the Sick update a zero history instead of the real
    /// previous byte changes the result whenever that byte is non-zero.
    #[test]
    fn sick_depends_on_previous_byte(first in 1u8..=255, second in any::<u8>()) {
        let crc = sick::update_crc_sick(sick::CRC_START_SICK, first, 0);
        let with_history = sick::update_crc_sick(crc, second, first);
        let without_history = sick::update_crc_sick(crc, second, 0);
        prop_assert_ne!(with_history, without_history);
    }

    /// Table generation is a pure function of its inputs.
    #[test]
    fn generate_table_is_deterministic(poly in any::<u32>(), reflected in any::<bool>()) {
        let reflection = if reflected { Reflection::Reflected } else { Reflection::Normal };
        prop_assert_eq!(
            generate_table::<u32>(poly, reflection),
            generate_table::<u32>(poly, reflection)
        );
    }
}
