//! Error values shared by the scanner, the buffer validator, and the
//! checked decoders.
//!
//! Every error here is an expected outcome carrying diagnostic meaning, so
//! all of them are plain `Copy` values; nothing in the crate panics on
//! malformed input.

use thiserror::Error;

/// Condition reported by a [`ByteSource`](crate::ByteSource) when a peek
/// cannot produce a byte.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The source is cleanly exhausted.
    #[error("end of input")]
    EndOfInput,
    /// The underlying transport failed and will not recover.
    #[error("source transport is broken")]
    Broken,
    /// A read failed in a way that may succeed if retried.
    #[error("source read failed transiently")]
    TransientFail,
    /// A failed read matched none of the known conditions.
    #[error("source failed for an unknown reason")]
    Unexpected,
}

/// The ways a byte sequence can be ill-formed UTF-8.
///
/// The granularity mirrors the validation rules, so a caller can report
/// exactly what was wrong instead of a generic "invalid UTF-8". The
/// `Incomplete*` kinds are used where the sequence ran out (or, from
/// [`scan`](crate::scan), where the required continuation byte was absent
/// and therefore left unconsumed); the `Not*Continuation` kinds are used by
/// [`validate`](crate::validate) and the checked decoders, which can point
/// at the offending byte directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The start byte is 0xC0, 0xC1, or in 0xF5..=0xFF; no well-formed
    /// sequence begins with these.
    #[error("permanently disallowed start byte")]
    DisallowedStartByte,
    /// The character starts with a continuation-shaped byte.
    #[error("continuation byte at the start of a character")]
    StartWithContinuation,
    /// A 2-byte sequence ended before its continuation byte.
    #[error("incomplete 2-byte sequence")]
    Incomplete2,
    /// A 3-byte sequence ended before its continuation bytes.
    #[error("incomplete 3-byte sequence")]
    Incomplete3,
    /// A 4-byte sequence ended before its continuation bytes.
    #[error("incomplete 4-byte sequence")]
    Incomplete4,
    /// The second byte does not have continuation shape.
    #[error("second byte is not a continuation byte")]
    NotSecondContinuation,
    /// The third byte does not have continuation shape.
    #[error("third byte is not a continuation byte")]
    NotThirdContinuation,
    /// The fourth byte does not have continuation shape.
    #[error("fourth byte is not a continuation byte")]
    NotFourthContinuation,
    /// A 3-byte encoding of a scalar that fits in fewer bytes.
    #[error("overlong 3-byte encoding")]
    Overlong3,
    /// A 4-byte encoding of a scalar that fits in fewer bytes.
    #[error("overlong 4-byte encoding")]
    Overlong4,
    /// A 3-byte encoding of U+D800..=U+DFFF, reserved for UTF-16.
    #[error("3-byte sequence encodes a UTF-16 surrogate")]
    Utf16Surrogate,
    /// A 4-byte encoding of a would-be scalar above U+10FFFF.
    #[error("4-byte sequence encodes a value above U+10FFFF")]
    AboveRange,
    /// [`decode1`](crate::decode1) was handed a non-ASCII byte.
    #[error("byte is not ASCII")]
    NotAscii,
    /// [`decode2`](crate::decode2) was handed a lead of the wrong arity.
    #[error("byte does not lead a 2-byte sequence")]
    NotLead2,
    /// [`decode3`](crate::decode3) was handed a lead of the wrong arity.
    #[error("byte does not lead a 3-byte sequence")]
    NotLead3,
    /// [`decode4`](crate::decode4) was handed a lead of the wrong arity.
    #[error("byte does not lead a 4-byte sequence")]
    NotLead4,
    /// [`decode`](crate::decode) was handed a slice outside 1..=4 bytes.
    #[error("sequence length is not 1..=4 bytes")]
    BadLength,
}

/// Error side of one [`scan`](crate::scan) call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The committed bytes identify a malformed sequence.
    #[error(transparent)]
    Malformed(#[from] ErrorKind),
    /// The source failed before the character was complete. Bytes already
    /// committed stay committed; the failed peek consumed nothing.
    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

/// First ill-formed position found by [`validate`](crate::validate).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {start}")]
pub struct CheckError {
    /// Which malformation was found.
    pub kind: ErrorKind,
    /// Offset of the lead byte of the offending subsequence.
    pub start: usize,
    /// Bytes consumed before detection, counted from `start`; always 1..=4
    /// and includes the diagnostic byte for the overlong, surrogate, and
    /// above-range kinds.
    pub len: usize,
}
