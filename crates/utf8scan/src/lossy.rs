//! Lossy repair of ill-formed buffers.

use alloc::vec::Vec;

use crate::check::validate;

/// UTF-8 encoding of U+FFFD REPLACEMENT CHARACTER.
const REPLACEMENT: [u8; 3] = [0xef, 0xbf, 0xbd];

/// Copies `bytes`, replacing each invalid subsequence with U+FFFD.
///
/// The replacement window for one error is the `start..start + len` range
/// reported by [`validate`], so each diagnosed sequence collapses into a
/// single U+FFFD and the rescan resumes on the first unclaimed byte. A
/// well-formed input comes back byte-identical.
///
/// # Examples
///
/// ```
/// use utf8scan::to_lossy;
///
/// assert_eq!(to_lossy(b"ok\xe0\x80\x80!"), "ok\u{fffd}\u{fffd}!".as_bytes());
/// ```
#[must_use]
pub fn to_lossy(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match validate(rest) {
            Ok(()) => {
                out.extend_from_slice(rest);
                return out;
            }
            Err(err) => {
                out.extend_from_slice(&rest[..err.start]);
                out.extend_from_slice(&REPLACEMENT);
                rest = &rest[err.start + err.len..];
            }
        }
    }
}

/// Like [`to_lossy`], but returns `None` without copying when `bytes` is
/// already well-formed.
#[must_use]
pub fn to_lossy_if_invalid(bytes: &[u8]) -> Option<Vec<u8>> {
    validate(bytes).err()?;
    Some(to_lossy(bytes))
}
