use jcall::mutf8::{from_modified, to_modified};
use jcall::BridgeError;

#[test]
fn ascii_is_identity() {
    let input = b"Hello, JVM!";
    assert_eq!(to_modified(input).unwrap(), input);
}

#[test]
fn two_and_three_byte_sequences_are_identity() {
    // U+00E9 (é) is 2 bytes, U+20AC (€) is 3 bytes; both pass through.
    let input = "héllo €".as_bytes();
    assert_eq!(to_modified(input).unwrap(), input);
}

#[test]
fn supplementary_code_point_becomes_six_byte_surrogate_pair() {
    // U+1F600, UTF-8 F0 9F 98 80, surrogates D83D/DE00.
    let out = to_modified("\u{1F600}".as_bytes()).unwrap();
    assert_eq!(out, [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]);
}

#[test]
fn surrogate_pair_boundaries() {
    // Lowest supplementary code point: D800/DC00.
    let out = to_modified("\u{10000}".as_bytes()).unwrap();
    assert_eq!(out, [0xED, 0xA0, 0x80, 0xED, 0xB0, 0x80]);

    // Highest: DBFF/DFFF.
    let out = to_modified("\u{10FFFF}".as_bytes()).unwrap();
    assert_eq!(out, [0xED, 0xAF, 0xBF, 0xED, 0xBF, 0xBF]);
}

#[test]
fn every_emitted_pair_starts_both_units_with_0xed() {
    for cp in ['\u{10000}', '\u{1D11E}', '\u{1F600}', '\u{10FFFF}'] {
        let out = to_modified(cp.to_string().as_bytes()).unwrap();
        assert_eq!(out.len(), 6);
        assert_eq!(out[0], 0xED);
        assert_eq!(out[3], 0xED);
    }
}

#[test]
fn decoder_inverts_encoder_exactly() {
    for text in ["", "plain", "héllo €", "mixed \u{1F600} and \u{10000} text", "\u{10FFFF}"] {
        let modified = to_modified(text.as_bytes()).unwrap();
        assert_eq!(from_modified(&modified).unwrap(), text);
    }
}

#[test]
fn decoder_accepts_two_byte_nul() {
    // GetStringUTFChars spells U+0000 as C0 80.
    assert_eq!(from_modified(&[0x41, 0xC0, 0x80, 0x42]).unwrap(), "A\0B");
}

#[test]
fn stray_continuation_byte_is_invalid() {
    assert_eq!(
        to_modified(&[0x80]),
        Err(BridgeError::InvalidEncoding { offset: 0, byte: 0x80 })
    );
    assert_eq!(
        to_modified(&[b'a', 0xBF, b'b']),
        Err(BridgeError::InvalidEncoding { offset: 1, byte: 0xBF })
    );
}

#[test]
fn invalid_lead_byte_is_invalid() {
    assert!(to_modified(&[0xF8, 0x80, 0x80, 0x80, 0x80]).is_err());
    assert!(to_modified(&[0xFF]).is_err());
}

#[test]
fn truncated_sequences_are_invalid() {
    assert!(to_modified(&[0xC3]).is_err());
    assert!(to_modified(&[0xE2, 0x82]).is_err());
    assert!(to_modified(&[0xF0, 0x9F, 0x98]).is_err());
}

#[test]
fn bad_continuation_pattern_is_invalid() {
    // 0x28 is not a 10xxxxxx byte.
    assert_eq!(
        to_modified(&[0xC3, 0x28]),
        Err(BridgeError::InvalidEncoding { offset: 1, byte: 0x28 })
    );
}

#[test]
fn errors_carry_no_partial_output() {
    // The Result contract: on Err there is no output at all, valid prefix
    // included.
    let input = [b'o', b'k', 0xF0, 0x9F]; // valid prefix, then truncated
    assert!(to_modified(&input).is_err());
}

#[test]
fn unpaired_surrogates_fail_decoding() {
    // High surrogate with nothing after it.
    assert!(from_modified(&[0xED, 0xA0, 0xBD]).is_err());
    // Low surrogate on its own.
    assert!(from_modified(&[0xED, 0xB8, 0x80]).is_err());
    // High surrogate followed by a non-surrogate 3-byte sequence.
    assert!(from_modified(&[0xED, 0xA0, 0xBD, 0xE2, 0x82, 0xAC]).is_err());
}
