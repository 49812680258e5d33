//! Whole-buffer validation fast path.
//!
//! Walks the buffer by index using the lead-length table and returns the
//! first ill-formed position without materializing any scalar. Unlike the
//! scanner, the validator can see the byte that broke a continuation
//! chain, so it reports `Not*Continuation` for a wrong-shaped byte and
//! reserves `Incomplete*` for sequences cut off by the end of the buffer.

use crate::classify::{
    expected_length, is_above_range, is_continuation, is_overlong_3, is_overlong_4, is_surrogate,
};
use crate::error::{CheckError, ErrorKind};

const fn ill(kind: ErrorKind, start: usize, len: usize) -> CheckError {
    CheckError { kind, start, len }
}

/// Returns the position and shape of the first ill-formed sequence in
/// `bytes`, or `Ok(())` when the whole buffer is well-formed UTF-8.
///
/// [`CheckError::start`] points at the lead byte and [`CheckError::len`]
/// counts the bytes the validator attributed to the failed sequence, so a
/// caller that wants every error re-invokes on the tail after skipping
/// `start + len` bytes. That window is also exactly what
/// [`to_lossy`](crate::to_lossy) replaces per U+FFFD.
///
/// # Examples
///
/// ```
/// use utf8scan::{validate, ErrorKind};
///
/// assert!(validate("καλημέρα".as_bytes()).is_ok());
///
/// let err = validate(b"ok\xf4\x90\x80\x80").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::AboveRange);
/// assert_eq!((err.start, err.len), (2, 2));
/// ```
pub fn validate(bytes: &[u8]) -> Result<(), CheckError> {
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i];
        i = match expected_length(b0) {
            1 => i + 1,
            2 => check_tail_2(bytes, i)?,
            3 => check_tail_3(bytes, b0, i)?,
            4 => check_tail_4(bytes, b0, i)?,
            _ => return Err(ill(ErrorKind::DisallowedStartByte, i, 1)),
        };
    }
    Ok(())
}

fn check_tail_2(bytes: &[u8], start: usize) -> Result<usize, CheckError> {
    let i = start + 1;
    let Some(&b1) = bytes.get(i) else {
        return Err(ill(ErrorKind::Incomplete2, start, i - start));
    };
    if !is_continuation(b1) {
        return Err(ill(ErrorKind::NotSecondContinuation, start, i - start));
    }
    Ok(i + 1)
}

fn check_tail_3(bytes: &[u8], b0: u8, start: usize) -> Result<usize, CheckError> {
    let mut i = start + 1;
    let Some(&b1) = bytes.get(i) else {
        return Err(ill(ErrorKind::Incomplete3, start, i - start));
    };
    // Diagnostic order matches the scanner: overlong, then surrogate, then
    // continuation shape. The diagnostic byte counts into the window.
    if is_overlong_3(b0, b1) {
        return Err(ill(ErrorKind::Overlong3, start, i + 1 - start));
    }
    if is_surrogate(b0, b1) {
        return Err(ill(ErrorKind::Utf16Surrogate, start, i + 1 - start));
    }
    if !is_continuation(b1) {
        return Err(ill(ErrorKind::NotSecondContinuation, start, i - start));
    }
    i += 1;

    let Some(&b2) = bytes.get(i) else {
        return Err(ill(ErrorKind::Incomplete3, start, i - start));
    };
    if !is_continuation(b2) {
        return Err(ill(ErrorKind::NotThirdContinuation, start, i - start));
    }
    Ok(i + 1)
}

fn check_tail_4(bytes: &[u8], b0: u8, start: usize) -> Result<usize, CheckError> {
    let mut i = start + 1;
    let Some(&b1) = bytes.get(i) else {
        return Err(ill(ErrorKind::Incomplete4, start, i - start));
    };
    if is_overlong_4(b0, b1) {
        return Err(ill(ErrorKind::Overlong4, start, i + 1 - start));
    }
    if is_above_range(b0, b1) {
        return Err(ill(ErrorKind::AboveRange, start, i + 1 - start));
    }
    if !is_continuation(b1) {
        return Err(ill(ErrorKind::NotSecondContinuation, start, i - start));
    }
    i += 1;

    let Some(&b2) = bytes.get(i) else {
        return Err(ill(ErrorKind::Incomplete4, start, i - start));
    };
    if !is_continuation(b2) {
        return Err(ill(ErrorKind::NotThirdContinuation, start, i - start));
    }
    i += 1;

    let Some(&b3) = bytes.get(i) else {
        return Err(ill(ErrorKind::Incomplete4, start, i - start));
    };
    if !is_continuation(b3) {
        return Err(ill(ErrorKind::NotFourthContinuation, start, i - start));
    }
    Ok(i + 1)
}
