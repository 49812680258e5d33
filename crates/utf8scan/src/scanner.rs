//! The per-character scan state machine.
//!
//! One [`scan`] call consumes exactly one well-formed character from a
//! [`ByteSource`], or diagnoses exactly one malformation, writing every
//! committed byte to a [`Sink`]. The scanner keeps no state across calls
//! and never holds more than one uncommitted peek.
//!
//! Commit discipline
//! - A byte is committed (advanced past and appended to the sink) once it
//!   is known to belong to the current character: every byte of a valid
//!   sequence, and the diagnostic second byte that identifies an overlong,
//!   surrogate, or above-range malformation.
//! - A non-continuation byte found where a continuation was required is
//!   left on the source. It may be the lead of the next character, so the
//!   caller resynchronizes by calling [`scan`] again.
//! - A source error aborts the scan without committing; bytes committed
//!   earlier in the same call stay committed.

use crate::assemble::{
    decode1_unchecked, decode2_unchecked, decode3_unchecked, decode4_unchecked,
};
use crate::classify::{
    is_above_range, is_ascii, is_continuation, is_lead_2, is_lead_3, is_lead_4, is_overlong_3,
    is_overlong_4, is_surrogate,
};
use crate::error::{ErrorKind, ScanError};
use crate::sink::Sink;
use crate::source::ByteSource;

/// Scans one character from `source`, appending each committed byte to
/// `sink`.
///
/// On success the sink grew by exactly the width dictated by the lead and
/// re-encoding the returned character reproduces those bytes. On an error
/// the sink holds the bytes that were attributed to the failed character
/// (see the module docs for which bytes those are), and the source cursor
/// sits on the first byte that was not attributed, so repeated calls walk
/// an ill-formed input without ever losing a byte.
///
/// # Examples
///
/// ```
/// use utf8scan::{scan, BufferSource, CharBuf, ScanError, SourceError};
///
/// let mut source = BufferSource::new(b"\xe2\x82\xac\xc2");
/// let mut window = CharBuf::new();
///
/// assert_eq!(scan(&mut source, &mut window), Ok('€'));
/// assert_eq!(window.as_bytes(), [0xe2, 0x82, 0xac]);
///
/// // The truncated 2-byte lead is committed, then the source runs out.
/// window.clear();
/// assert_eq!(
///     scan(&mut source, &mut window),
///     Err(ScanError::Source(SourceError::EndOfInput)),
/// );
/// assert_eq!(window.as_bytes(), [0xc2]);
/// ```
pub fn scan<S, K>(source: &mut S, sink: &mut K) -> Result<char, ScanError>
where
    S: ByteSource,
    K: Sink,
{
    let b0 = source.peek()?;
    if is_ascii(b0) {
        commit(source, sink, b0);
        // SAFETY: classified as ASCII above.
        return Ok(unsafe { decode1_unchecked(b0) });
    }
    if is_lead_2(b0) {
        commit(source, sink, b0);
        let b1 = source.peek()?;
        if !is_continuation(b1) {
            return Err(ErrorKind::Incomplete2.into());
        }
        commit(source, sink, b1);
        // SAFETY: lead and continuation shape classified above.
        return Ok(unsafe { decode2_unchecked(b0, b1) });
    }
    if is_lead_3(b0) {
        commit(source, sink, b0);
        return scan_tail_3(source, sink, b0);
    }
    if is_lead_4(b0) {
        commit(source, sink, b0);
        return scan_tail_4(source, sink, b0);
    }
    // Not a valid lead of any width. The byte cannot start the next
    // character either, so it is committed before diagnosing.
    commit(source, sink, b0);
    if is_continuation(b0) {
        Err(ErrorKind::StartWithContinuation.into())
    } else {
        Err(ErrorKind::DisallowedStartByte.into())
    }
}

fn scan_tail_3<S, K>(source: &mut S, sink: &mut K, b0: u8) -> Result<char, ScanError>
where
    S: ByteSource,
    K: Sink,
{
    let b1 = source.peek()?;
    // The stricter diagnostics win over the continuation-shape test: a
    // byte like 0x9F after 0xE0 has continuation shape but is reported as
    // overlong, and the diagnostic byte is committed either way.
    if is_overlong_3(b0, b1) {
        commit(source, sink, b1);
        return Err(ErrorKind::Overlong3.into());
    }
    if is_surrogate(b0, b1) {
        commit(source, sink, b1);
        return Err(ErrorKind::Utf16Surrogate.into());
    }
    if !is_continuation(b1) {
        return Err(ErrorKind::Incomplete3.into());
    }
    commit(source, sink, b1);

    let b2 = source.peek()?;
    if !is_continuation(b2) {
        return Err(ErrorKind::Incomplete3.into());
    }
    commit(source, sink, b2);
    // SAFETY: lead, shape, overlong, and surrogate gates all passed.
    Ok(unsafe { decode3_unchecked(b0, b1, b2) })
}

fn scan_tail_4<S, K>(source: &mut S, sink: &mut K, b0: u8) -> Result<char, ScanError>
where
    S: ByteSource,
    K: Sink,
{
    let b1 = source.peek()?;
    if is_overlong_4(b0, b1) {
        commit(source, sink, b1);
        return Err(ErrorKind::Overlong4.into());
    }
    if is_above_range(b0, b1) {
        commit(source, sink, b1);
        return Err(ErrorKind::AboveRange.into());
    }
    if !is_continuation(b1) {
        return Err(ErrorKind::Incomplete4.into());
    }
    commit(source, sink, b1);

    let b2 = source.peek()?;
    if !is_continuation(b2) {
        return Err(ErrorKind::Incomplete4.into());
    }
    commit(source, sink, b2);

    let b3 = source.peek()?;
    if !is_continuation(b3) {
        return Err(ErrorKind::Incomplete4.into());
    }
    commit(source, sink, b3);
    // SAFETY: lead, shape, overlong, and range gates all passed.
    Ok(unsafe { decode4_unchecked(b0, b1, b2, b3) })
}

/// Promotes the peeked byte to consumed: advance the source, append to the
/// sink.
#[inline]
fn commit<S: ByteSource, K: Sink>(source: &mut S, sink: &mut K, byte: u8) {
    source.advance();
    sink.put(byte);
}
