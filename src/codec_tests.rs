use crate::codec::*;
use crate::error::{ErrorKind, GenieError};
use test_log::test;

#[test]
fn test_zero_patch_is_all_first_letter() {
    let code = encode(0x8000, 0x00, None).unwrap();
    assert_eq!(code.as_str(), "AAAAAA");
}

#[test]
fn test_compare_flag_sets_third_letter() {
    // Nibble 2 bit 3 flags the compare byte; everything else stays zero
    let code = encode(0x8000, 0x00, Some(0x00)).unwrap();
    assert_eq!(code.as_str(), "AAEAAAAA");
}

#[test]
fn test_known_codes_decode() {
    // SXIOPO: infinite lives style code
    let patch = decode("SXIOPO").unwrap();
    assert_eq!(patch.address, 0x91d9);
    assert_eq!(patch.value, 0xad);
    assert_eq!(patch.compare, None);

    let patch = decode("YEUZUGAA").unwrap();
    assert_eq!(patch.address, 0xacb3);
    assert_eq!(patch.value, 0x07);
    assert_eq!(patch.compare, Some(0x00));
}

#[test]
fn test_short_round_trip_all_addresses() {
    for address in 0x8000u32..=0xFFFF {
        let value = (address * 7 + 3) & 0xFF;
        let code = encode(address, value, None).unwrap();
        assert_eq!(code.len(), 6);
        let patch = code.decode();
        assert_eq!(patch.address as u32, address);
        assert_eq!(patch.value as u32, value);
        assert_eq!(patch.compare, None);
    }
}

#[test]
fn test_short_round_trip_all_values() {
    for value in 0u8..=255 {
        let patch = Patch::new(0xC123, value, None).unwrap();
        assert_eq!(patch.encode().decode(), patch);
    }
}

#[test]
fn test_long_round_trip_all_value_compare_pairs() {
    for value in 0u8..=255 {
        for compare in 0u8..=255 {
            let patch = Patch::new(0x9ABC, value, Some(compare)).unwrap();
            let code = patch.encode();
            assert_eq!(code.len(), 8);
            assert_eq!(code.decode(), patch);
        }
    }
}

#[test]
fn test_long_round_trip_sampled_addresses() {
    for address in (0x8000u16..=0xFFFF).step_by(97) {
        let patch = Patch::new(address, 0x5A, Some(0xA5)).unwrap();
        assert_eq!(patch.encode().decode(), patch);
    }
}

#[test]
fn test_encoded_letters_stay_in_alphabet() {
    for address in (0x8000u16..=0xFFFF).step_by(13) {
        let code = Patch::new(address, (address & 0xFF) as u8, Some((address >> 8) as u8))
            .unwrap()
            .encode();
        assert!(code.as_str().chars().all(|c| ALPHABET.contains(c)));
    }
}

#[test]
fn test_decode_rejects_bad_length() {
    for bad in ["", "AAAAA", "AAAAAAA", "AAAAAAAAA"] {
        let err = decode(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err, GenieError::InvalidCodeLength(bad.len()));
    }
}

#[test]
fn test_decode_rejects_foreign_letters() {
    let err = decode("AAAAAB").unwrap_err();
    assert_eq!(err, GenieError::InvalidCodeCharacter('B', 5));
    assert_eq!(err.kind(), ErrorKind::Format);

    assert!(decode("AA1AAA").is_err());
    assert!(decode("AAÉAAA").is_err());
}

#[test]
fn test_decode_rejects_lower_case() {
    let err = decode("sxiopo").unwrap_err();
    assert_eq!(err, GenieError::InvalidCodeCharacter('s', 0));
    assert_eq!(err.kind(), ErrorKind::Format);

    let err = Code::parse("SXIOpO").unwrap_err();
    assert_eq!(err, GenieError::InvalidCodeCharacter('p', 4));
}

#[test]
fn test_encode_rejects_out_of_range_input() {
    let err = encode(0x7FFF, 0, None).unwrap_err();
    assert_eq!(err, GenieError::AddressOutOfRange(0x7FFF));
    assert_eq!(err.kind(), ErrorKind::Range);

    assert!(encode(0x10000, 0, None).is_err());
    assert_eq!(
        encode(0x8000, 0x100, None).unwrap_err(),
        GenieError::ValueOutOfRange("value", 0x100)
    );
    assert_eq!(
        encode(0x8000, 0, Some(0x1FF)).unwrap_err(),
        GenieError::ValueOutOfRange("compare", 0x1FF)
    );
    assert!(Patch::new(0x1234, 0, None).is_err());
}

#[test]
fn test_reencode_keeps_address_and_compare() {
    let original = Patch::new(0xD00D, 0x10, Some(0x20)).unwrap().encode();
    let changed = reencode(original.as_str(), 0x99, None).unwrap();
    let patch = changed.decode();
    assert_eq!(patch.address, 0xD00D);
    assert_eq!(patch.value, 0x99);
    assert_eq!(patch.compare, Some(0x20));
}

#[test]
fn test_reencode_keeps_zero_compare() {
    let original = Patch::new(0x8010, 0x01, Some(0x00)).unwrap().encode();
    let changed = reencode(original.as_str(), 0x02, None).unwrap();
    assert_eq!(changed.len(), 8);
    assert_eq!(changed.decode().compare, Some(0x00));
}

#[test]
fn test_reencode_adds_compare_to_short_code() {
    let changed = reencode("SXIOPO", 0xAD, Some(0x03)).unwrap();
    assert!(changed.has_compare());
    let patch = changed.decode();
    assert_eq!(patch.address, 0x91d9);
    assert_eq!(patch.compare, Some(0x03));
}

#[test]
fn test_patch_display() {
    let patch = Patch::new(0x91d9, 173, None).unwrap();
    assert_eq!(patch.to_string(), "addr=0x91d9, value=173");
    let patch = patch.with_compare(5);
    assert_eq!(patch.to_string(), "addr=0x91d9, value=173, check=5");
}

#[test]
fn test_low_address_never_reaches_encoder() {
    assert_eq!(
        Patch::new(0x1234, 0xAD, None).unwrap_err(),
        GenieError::AddressOutOfRange(0x1234)
    );
    assert_eq!(
        encode(0x1234, 0xAD, None).unwrap_err(),
        GenieError::AddressOutOfRange(0x1234)
    );

    let patch = Patch::new(0x9234, 0xAD, Some(0x01)).unwrap().with_value(0x02);
    assert_eq!(patch.address(), 0x9234);
    assert_eq!(patch.value(), 0x02);
    assert_eq!(patch.compare(), Some(0x01));
    assert_eq!(patch.encode().decode().address(), 0x9234);
}
