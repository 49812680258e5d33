#![no_main]
use libfuzzer_sys::fuzz_target;
use utf8scan::{
    scan, to_lossy, to_lossy_if_invalid, validate, BufferSource, ScanError, SourceError,
};

fuzz_target!(|data: &[u8]| {
    // Validity must agree with the standard library exactly.
    let clean = validate(data).is_ok();
    assert_eq!(clean, std::str::from_utf8(data).is_ok());

    // Repair always produces well-formed output, is the identity on clean
    // input, and the two repair surfaces agree.
    let repaired = to_lossy(data);
    assert!(validate(&repaired).is_ok());
    if clean {
        assert_eq!(repaired, data);
        assert!(to_lossy_if_invalid(data).is_none());
    } else {
        assert_eq!(to_lossy_if_invalid(data).as_deref(), Some(repaired.as_slice()));
    }

    // A scan-to-exhaustion walk makes progress on every call and commits
    // every input byte exactly once, valid or not.
    let mut source = BufferSource::new(data);
    let mut committed = Vec::new();
    loop {
        let before = source.pos();
        match scan(&mut source, &mut committed) {
            Ok(ch) => {
                let mut buf = [0u8; 4];
                let encoded = ch.encode_utf8(&mut buf).as_bytes();
                assert_eq!(&committed[committed.len() - encoded.len()..], encoded);
            }
            Err(ScanError::Source(SourceError::EndOfInput)) => {
                if source.pos() == before {
                    break;
                }
            }
            Err(ScanError::Source(_)) => unreachable!("buffer sources only end"),
            Err(ScanError::Malformed(_)) => assert!(source.pos() > before),
        }
    }
    assert_eq!(committed, data);
});
