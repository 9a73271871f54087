//! UTF-8 sequence validation
//!
//! Validation is structural only: the lead byte declares the sequence
//! length through its high bits and each following byte must look like
//! `10xxxxxx`. Overlong forms and surrogates are not rejected.

use crate::source::ByteSource;

const CONTINUATION_MASK: u8 = 0xC0;
const CONTINUATION_TAG: u8 = 0x80;

/// Outcome of validating one sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Sequence {
    /// Well-formed sequence of `len` bytes, lead included
    Valid { len: usize },
    /// Malformed sequence
    Invalid(Utf8Failure),
}

/// Why a sequence was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Failure {
    /// The lead byte is a continuation byte or `11111xxx`
    InvalidLead,
    /// The input ended after `found` of `expected` bytes
    Truncated { expected: usize, found: usize },
    /// Byte at `position` (0 is the lead) is not a continuation byte
    BadContinuation { expected: usize, position: usize },
}

impl std::fmt::Display for Utf8Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Utf8Failure::InvalidLead => write!(f, "invalid lead byte"),
            Utf8Failure::Truncated { expected, found } => {
                write!(f, "truncated sequence ({} of {} bytes)", found, expected)
            }
            Utf8Failure::BadContinuation { expected, position } => {
                write!(f, "byte {} of {}-byte sequence is not a continuation", position, expected)
            }
        }
    }
}

/// Sequence length declared by a lead byte, `None` if it cannot start one
pub fn sequence_len(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0x00 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

/// Check for the `10xxxxxx` pattern
pub fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_MASK == CONTINUATION_TAG
}

/// Validate the sequence starting at `lead`, pulling continuation bytes
/// from `source`.
///
/// An invalid lead pulls nothing. Otherwise exactly the bytes needed are
/// pulled, stopping at the first bad one; pulled bytes are never pushed
/// back. Each pulled byte is passed to `visit` whether or not the sequence
/// turns out valid.
pub fn validate_sequence<S, F>(lead: u8, source: &mut S, mut visit: F) -> Utf8Sequence
where
    S: ByteSource + ?Sized,
    F: FnMut(u8),
{
    let Some(expected) = sequence_len(lead) else {
        return Utf8Sequence::Invalid(Utf8Failure::InvalidLead);
    };

    for position in 1..expected {
        let Some(byte) = source.pull_byte() else {
            return Utf8Sequence::Invalid(Utf8Failure::Truncated { expected, found: position });
        };
        visit(byte);
        if !is_continuation(byte) {
            return Utf8Sequence::Invalid(Utf8Failure::BadContinuation { expected, position });
        }
    }

    Utf8Sequence::Valid { len: expected }
}
