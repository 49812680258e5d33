//! Strict UTF-8 scanning, validation, and lossy repair.
//!
//! The crate rejects every ill-formed sequence defined by the Unicode
//! standard (RFC 3629 range rules included) and, unlike a boolean
//! validity check, reports precisely which malformation was found:
//! overlong encodings, UTF-16 surrogate halves, values above U+10FFFF,
//! truncated sequences, and bytes that can never start a character each
//! carry their own diagnostic.
//!
//! Three surfaces share one classifier and one error taxonomy:
//!
//! - [`scan`] pulls one character at a time from a [`ByteSource`] (a byte
//!   slice via [`BufferSource`], or any `std::io::Read` via `ReadSource`
//!   with the `std` feature), writing the consumed byte window to a
//!   [`Sink`]. Error paths never consume a byte that could begin the next
//!   character, so callers resynchronize by simply calling [`scan`] again.
//! - [`validate`] is the buffer fast path: the first ill-formed position
//!   and its length, without materializing any scalar.
//! - [`to_lossy`] and [`to_lossy_if_invalid`] rewrite a buffer with each
//!   invalid subsequence replaced by U+FFFD.
//!
//! # Examples
//!
//! ```
//! use utf8scan::{scan, BufferSource, CharBuf, ErrorKind, ScanError, SourceError};
//!
//! let mut source = BufferSource::new(b"A\xed\xa0\x80Z");
//! let mut window = CharBuf::new();
//!
//! assert_eq!(scan(&mut source, &mut window), Ok('A'));
//!
//! window.clear();
//! assert_eq!(
//!     scan(&mut source, &mut window),
//!     Err(ScanError::Malformed(ErrorKind::Utf16Surrogate)),
//! );
//! // The lead and the diagnostic byte were consumed; the scan after the
//! // error picks up from there.
//! assert_eq!(window.as_bytes(), [0xed, 0xa0]);
//!
//! window.clear();
//! assert_eq!(
//!     scan(&mut source, &mut window),
//!     Err(ScanError::Malformed(ErrorKind::StartWithContinuation)),
//! );
//!
//! window.clear();
//! assert_eq!(scan(&mut source, &mut window), Ok('Z'));
//! assert_eq!(
//!     scan(&mut source, &mut window),
//!     Err(ScanError::Source(SourceError::EndOfInput)),
//! );
//! ```

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod assemble;
mod check;
mod classify;
mod error;
mod lossy;
mod scanner;
mod sink;
mod source;

pub use assemble::{
    decode, decode1, decode1_unchecked, decode2, decode2_unchecked, decode3, decode3_unchecked,
    decode4, decode4_unchecked,
};
pub use check::validate;
pub use classify::{
    expected_length, is_above_range, is_ascii, is_continuation, is_lead_2, is_lead_3, is_lead_4,
    is_overlong_3, is_overlong_4, is_surrogate,
};
pub use error::{CheckError, ErrorKind, ScanError, SourceError};
pub use lossy::{to_lossy, to_lossy_if_invalid};
pub use scanner::scan;
pub use sink::{CharBuf, Sink};
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{BufferSource, ByteSource};

#[cfg(test)]
mod tests;
