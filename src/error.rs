//! # Error Types
//!
//! This module defines the error types used throughout the NMEA log parsing library.
//!
//! Errors come in two layers:
//! - [`Error`] describes why the content of a single sentence could not be
//!   interpreted as a position.
//! - [`SentenceError`] describes why a raw log line was excluded from the parsed
//!   log, wrapping [`Error`] and the error of the position constructor.

use thiserror::Error;

/// Represents all possible errors that can occur while interpreting the
/// content of a well-formed NMEA sentence.
///
/// Every variant is recoverable and scoped to one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The marker field was not present in the sentence data fields.
    #[error("marker {marker:?} not found in data fields")]
    NotFound {
        /// The marker that was looked up
        marker: String,
    },

    /// The marker field was found, but it is the first data field so no value
    /// precedes it.
    #[error("marker {marker:?} is the first data field, no value precedes it")]
    NoPrecedingValue {
        /// The marker that was looked up
        marker: String,
    },

    /// The sentence format is not in the format registry.
    ///
    /// Contains the format code that caused the error.
    #[error("unsupported sentence format {0:?}")]
    UnsupportedFormat(String),

    /// The sentence carries fewer data fields than a position needs.
    #[error("sentence has {found} data fields, at least {required} are required")]
    InsufficientFields {
        /// Number of data fields in the sentence
        found: usize,
        /// Minimum number of data fields required
        required: usize,
    },

    /// A sentence format code is not made of exactly three ASCII letters.
    #[error("invalid sentence format code {0:?}")]
    InvalidFormatCode(String),

    /// An elevation marker is empty or longer than three characters.
    #[error("invalid elevation marker {0:?}")]
    InvalidElevationMarker(String),
}

/// Reasons a raw log line is excluded from the parsed log.
///
/// `E` is the error type of the position constructor, see
/// [`FromPositionRequest`](crate::FromPositionRequest).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError<E> {
    /// The line failed the well-formedness check.
    #[error("malformed sentence")]
    Malformed,

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the message content)
    /// and the actual checksum found in the message.
    #[error("checksum mismatch: expected {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// The sentence content could not be interpreted.
    #[error(transparent)]
    Interpret(#[from] Error),

    /// The position constructor rejected the interpreted fields.
    #[error("position rejected: {0}")]
    Position(E),
}
