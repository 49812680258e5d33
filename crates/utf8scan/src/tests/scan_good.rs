use alloc::vec::Vec;

use crate::{expected_length, scan, BufferSource, CharBuf, ScanError, SourceError};

fn scan_one(bytes: &[u8]) -> (Result<char, ScanError>, Vec<u8>) {
    let mut source = BufferSource::new(bytes);
    let mut sink = Vec::new();
    let outcome = scan(&mut source, &mut sink);
    (outcome, sink)
}

#[test]
fn one_character_per_width() {
    // 'A', '©', '€', and an emoji: one scan each, full window committed.
    let cases: &[(&[u8], char)] = &[
        (b"\x41", 'A'),
        (b"\xc2\xa9", '©'),
        (b"\xe2\x82\xac", '€'),
        (b"\xf0\x9f\x98\x80", '😀'),
    ];
    for &(bytes, expected) in cases {
        let (outcome, window) = scan_one(bytes);
        assert_eq!(outcome, Ok(expected));
        assert_eq!(window, bytes);
        assert_eq!(window.len(), expected_length(bytes[0]));
    }
}

#[test]
fn every_ascii_byte_scans_to_itself() {
    for b in 0x00..=0x7f {
        let (outcome, window) = scan_one(&[b, 0xff]);
        assert_eq!(outcome, Ok(b as char));
        assert_eq!(window, [b]);
    }
}

#[test]
fn every_scalar_round_trips_through_a_scan() {
    for ch in (0..=0x10ffff).filter_map(char::from_u32) {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf).as_bytes();
        let mut source = BufferSource::new(encoded);
        let mut window = CharBuf::new();
        assert_eq!(scan(&mut source, &mut window), Ok(ch), "U+{:04X}", ch as u32);
        assert_eq!(window.as_bytes(), encoded, "U+{:04X}", ch as u32);
        assert_eq!(
            scan(&mut source, &mut CharBuf::new()),
            Err(ScanError::Source(SourceError::EndOfInput)),
        );
    }
}

#[test]
fn repeated_scans_walk_a_whole_string() {
    let text = "Grüße, 世界! \u{10ffff}";
    let mut source = BufferSource::new(text.as_bytes());
    let mut window = CharBuf::new();
    let mut decoded = alloc::string::String::new();
    loop {
        window.clear();
        match scan(&mut source, &mut window) {
            Ok(ch) => {
                let mut buf = [0u8; 4];
                assert_eq!(ch.encode_utf8(&mut buf).as_bytes(), window.as_bytes());
                decoded.push(ch);
            }
            Err(ScanError::Source(SourceError::EndOfInput)) => break,
            Err(err) => panic!("unexpected error {err} in well-formed text"),
        }
    }
    assert_eq!(decoded, text);
}

#[cfg(feature = "std")]
#[test]
fn stream_source_scans_like_the_buffer_source() {
    use crate::ReadSource;

    let text = "héllo\u{2603}";
    let mut source = ReadSource::new(text.as_bytes());
    let mut window = Vec::new();
    let mut decoded = alloc::string::String::new();
    loop {
        window.clear();
        match scan(&mut source, &mut window) {
            Ok(ch) => decoded.push(ch),
            Err(ScanError::Source(SourceError::EndOfInput)) => break,
            Err(err) => panic!("unexpected error {err}"),
        }
    }
    assert_eq!(decoded, text);
}
