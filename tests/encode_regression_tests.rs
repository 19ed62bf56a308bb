//! Integration tests for the public encoding API
//!
//! These pin version selection, mask choice and penalty scores for fixed
//! payloads, and check structural properties of the finished symbols.

use proptest::prelude::*;
use vcard_qr::encoder::format::FormatInfo;
use vcard_qr::encoder::function_patterns::alignment_pattern_positions;
use vcard_qr::encoder::penalty::total_penalty;
use vcard_qr::encoder::tables::byte_capacity;
use vcard_qr::{
    Contact, ECLevel, EncodeError, EncodeOptions, MaskPattern, Version, encode, encode_contact,
    encode_with,
};

/// Ada Lovelace vCard at 5-M with mask 2, generated by an independent QR encoder
const ADA_5M_MASK2: [&str; 37] = [
    "1111111001100000101011001001101111111",
    "1000001001100101110100101101001000001",
    "1011101010010110001111000010001011101",
    "1011101011101111110111101010101011101",
    "1011101011000000101110000001101011101",
    "1000001011000101001010101011001000001",
    "1111111010101010101010101010101111111",
    "0000000010100101000110011010000000000",
    "1011111000001111001111111011001111100",
    "1110110011000101100000000101001100001",
    "1101111100001010000010101001101111111",
    "1110010010100110100001011010011010011",
    "0111111000111110110000001010111001111",
    "1111010000101100011111101101111100010",
    "0001011000111111010001001111101110111",
    "1010000111101110111011101001111000010",
    "1111011101011100100101000011111111010",
    "1011100011010111011010100100000000001",
    "1001111110010111100100000111101100011",
    "1111100111000001001111001010000100000",
    "1000111011101111010101100010011001101",
    "0110110000111011101010011001101101100",
    "1100101001000101001000101011011010011",
    "1111000101010110000000010000101100001",
    "0001011111100000001011111101111011010",
    "1001100111011111100001000110000100101",
    "1000001011010010001011000111111111011",
    "1011010101000010100001111000001000010",
    "1000101100011010010000101100111111101",
    "0000000011101101011101011110100010101",
    "1111111000001101110011000101101011111",
    "1000001010110001111001111000100011000",
    "1011101011010111100001001011111110100",
    "1011101010111111001011100111101101001",
    "1011101010100101111101101101101100011",
    "1000001001101001000111010000101010001",
    "1111111011001011010100100101011011111",
];

fn finder_expected(dx: usize, dy: usize) -> bool {
    let ring = dx.abs_diff(3).max(dy.abs_diff(3));
    ring != 2 && ring != 4
}

#[test]
fn test_vcard_reference_symbol() {
    let contact = Contact {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        ..Contact::default()
    };
    let symbol = encode_contact(&contact, ECLevel::M).unwrap();
    assert_eq!(symbol.version().number(), 5);
    assert_eq!(symbol.mask(), MaskPattern::Pattern2);
    assert_eq!(symbol.penalty(), 907);
    for (y, expected) in ADA_5M_MASK2.iter().enumerate() {
        let row: String = (0..symbol.size())
            .map(|x| if symbol.is_dark(x, y) { '1' } else { '0' })
            .collect();
        assert_eq!(&row, expected, "row {y}");
    }
}

#[test]
fn test_capacity_boundary_every_level() {
    for level in ECLevel::ALL {
        let cap = byte_capacity(Version::MAX, level).unwrap();
        let fits = encode(&vec![b'x'; cap], level).unwrap();
        assert_eq!(fits.version(), Version::MAX);
        assert_eq!(fits.size(), 57);

        let err = encode(&vec![b'x'; cap + 1], level).unwrap_err();
        assert!(matches!(err, EncodeError::CapacityExceeded { len, .. } if len == cap + 1));
    }
}

#[test]
fn test_finder_and_timing_layout_every_version() {
    for n in 1..=10u8 {
        let version = Version::new(n).unwrap();
        let cap = byte_capacity(version, ECLevel::L).unwrap();
        let symbol = encode(&vec![b'v'; cap], ECLevel::L).unwrap();
        assert_eq!(symbol.version(), version);
        let size = symbol.size();
        for dy in 0..7 {
            for dx in 0..7 {
                let expected = finder_expected(dx, dy);
                assert_eq!(symbol.is_dark(dx, dy), expected);
                assert_eq!(symbol.is_dark(size - 7 + dx, dy), expected);
                assert_eq!(symbol.is_dark(dx, size - 7 + dy), expected);
            }
        }
        for i in 8..size - 8 {
            assert_eq!(symbol.is_dark(i, 6), i % 2 == 0);
            assert_eq!(symbol.is_dark(6, i), i % 2 == 0);
        }
        let align = alignment_pattern_positions(version);
        if let Some(&last) = align.last() {
            assert!(symbol.is_dark(last, last));
            assert!(!symbol.is_dark(last + 1, last));
            assert!(symbol.modules().is_function(last - 2, last - 2));
        }
    }
}

#[test]
fn test_forced_mask_is_honored() {
    let options = EncodeOptions::new(ECLevel::Q).with_mask(MaskPattern::Pattern5);
    let symbol = encode_with(b"https://example.com", &options).unwrap();
    assert_eq!(symbol.mask(), MaskPattern::Pattern5);
    let info = FormatInfo::decode(FormatInfo::read(symbol.modules())).unwrap();
    assert_eq!(info, FormatInfo::new(ECLevel::Q, MaskPattern::Pattern5));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_minimal_version_and_size(data in proptest::collection::vec(any::<u8>(), 0..=213)) {
        let symbol = encode(&data, ECLevel::M).unwrap();
        let version = symbol.version();
        prop_assert_eq!(symbol.size(), 17 + 4 * version.number() as usize);
        prop_assert!(byte_capacity(version, ECLevel::M).unwrap() >= data.len());
        if let Some(smaller) = Version::new(version.number() - 1) {
            prop_assert!(byte_capacity(smaller, ECLevel::M).unwrap() < data.len());
        }
    }

    #[test]
    fn prop_deterministic_and_scored(data in proptest::collection::vec(any::<u8>(), 0..=100)) {
        let a = encode(&data, ECLevel::L).unwrap();
        let b = encode(&data, ECLevel::L).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(total_penalty(a.modules()), a.penalty());
        prop_assert_eq!(a.modules().unset_count(), 0);
    }
}
