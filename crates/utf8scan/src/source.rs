//! Byte producers the scanner pulls from.
//!
//! A [`ByteSource`] is a narrow capability: look at the current byte, or
//! commit it. The split lets the scanner decide per byte whether it belongs
//! to the current character before consuming it, which is what keeps a
//! stray lead byte on the source for the next scan to pick up.

use crate::error::SourceError;

/// Pull-based byte producer with non-destructive lookahead.
///
/// `peek` is idempotent for byte results: repeated peeks without an
/// intervening `advance` observe the same byte. A failed peek may be
/// re-polled, so a [`SourceError::TransientFail`] is actually retryable.
///
/// `advance` has the precondition that the last `peek` returned a byte;
/// implementations check it with a debug assertion where they can.
pub trait ByteSource {
    /// Returns the current byte without consuming it.
    fn peek(&mut self) -> Result<u8, SourceError>;

    /// Commits the byte returned by the last `peek`, so the next `peek`
    /// observes the following byte.
    fn advance(&mut self);
}

/// Random-access source over a byte slice.
///
/// `peek` reports [`SourceError::EndOfInput`] once the cursor reaches the
/// end; no other source condition can occur.
#[derive(Debug, Clone)]
pub struct BufferSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BufferSource<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of bytes committed so far.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The uncommitted tail of the buffer.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl ByteSource for BufferSource<'_> {
    #[inline]
    fn peek(&mut self) -> Result<u8, SourceError> {
        self.bytes
            .get(self.pos)
            .copied()
            .ok_or(SourceError::EndOfInput)
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.pos < self.bytes.len(), "advance without a peeked byte");
        self.pos += 1;
    }
}

#[cfg(feature = "std")]
mod read_source {
    use std::io::{ErrorKind as IoErrorKind, Read};

    use super::ByteSource;
    use crate::error::SourceError;

    /// Stream-backed source over any [`Read`] transport, with a one-byte
    /// lookahead slot.
    ///
    /// Transport conditions map onto [`SourceError`] as follows: a read of
    /// zero bytes is `EndOfInput`; [`IoErrorKind::Interrupted`] and
    /// [`IoErrorKind::WouldBlock`] are `TransientFail`, and the next peek
    /// retries the read; any other I/O error is `Broken`; a read reporting
    /// more than one byte for the one-byte buffer is `Unexpected`.
    #[derive(Debug)]
    pub struct ReadSource<R> {
        inner: R,
        slot: Option<u8>,
    }

    impl<R: Read> ReadSource<R> {
        pub fn new(inner: R) -> Self {
            Self { inner, slot: None }
        }

        /// Returns the transport, discarding any uncommitted peeked byte.
        pub fn into_inner(self) -> R {
            self.inner
        }
    }

    impl<R: Read> ByteSource for ReadSource<R> {
        fn peek(&mut self) -> Result<u8, SourceError> {
            if let Some(byte) = self.slot {
                return Ok(byte);
            }
            let mut buf = [0u8; 1];
            match self.inner.read(&mut buf) {
                Ok(0) => Err(SourceError::EndOfInput),
                Ok(1) => {
                    self.slot = Some(buf[0]);
                    Ok(buf[0])
                }
                Ok(_) => Err(SourceError::Unexpected),
                Err(err) => match err.kind() {
                    IoErrorKind::Interrupted | IoErrorKind::WouldBlock => {
                        Err(SourceError::TransientFail)
                    }
                    _ => Err(SourceError::Broken),
                },
            }
        }

        fn advance(&mut self) {
            debug_assert!(self.slot.is_some(), "advance without a peeked byte");
            self.slot = None;
        }
    }
}

#[cfg(feature = "std")]
pub use read_source::ReadSource;
