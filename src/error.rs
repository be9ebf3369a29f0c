//! # Error Types
//!
//! This module defines the error type returned by the sentence validator
//! and the field decoder.

use thiserror::Error;

/// Represents all possible failures of a single sentence.
///
/// Every variant is recoverable at the call site: an error describes one
/// sentence that could not be decoded, never the stream. A read loop is
/// expected to log or count the failure and move on to the next line.
///
/// Variants that point at a specific field carry the zero-based index of
/// that field (counted over the data fields, header excluded) together
/// with an owned copy of the offending text, so the error can outlive the
/// input buffer it was produced from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input is empty, contains non-ASCII bytes, or does not start
    /// with `$`.
    #[error("input is not an NMEA 0183 sentence")]
    NotASentence,

    /// No `*` checksum delimiter was found, or the text after it is not
    /// exactly two hexadecimal digits.
    #[error("sentence has no valid `*hh` checksum suffix")]
    MissingChecksum,

    /// The checksum on the wire does not match the XOR of the payload.
    #[error("checksum mismatch: sentence carries {expected:02X}, payload XORs to {computed:02X}")]
    ChecksumMismatch {
        /// The two-hex-digit checksum found in the sentence
        expected: u8,
        /// The checksum calculated over the payload
        computed: u8,
    },

    /// The talker/sentence-type header is shorter than three characters.
    #[error("talker/type header is shorter than three characters")]
    MalformedHeader,

    /// An RMC or GLL status field held something other than `A` or `V`.
    #[error("field {field_index}: status flag {raw_value:?} is neither `A` nor `V`")]
    InvalidStatusFlag { field_index: usize, raw_value: String },

    /// A non-empty field did not match the format its schema requires.
    #[error("field {field_index}: {raw_value:?} does not match the expected format")]
    InvalidFieldFormat { field_index: usize, raw_value: String },

    /// A GSV sentence ended mid-way through a four-field satellite group.
    #[error("satellite group truncated: {remaining} trailing field(s), a group needs 4")]
    TruncatedSatelliteGroup { remaining: usize },

    /// The sentence carries a number of data fields its schema cannot map.
    #[error("sentence carries {found} data fields where {expected} were expected")]
    UnsupportedFieldCount { expected: usize, found: usize },
}
