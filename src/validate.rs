//! # Sentence Validator
//!
//! Structural validation of one raw line: `$` prefix, `*hh` checksum
//! suffix, comma-separated payload. The validator is a pure function; it
//! performs no I/O and keeps no state between calls.

use nom::{
    Parser,
    bytes::complete::{take, take_until},
    character::complete::char,
    combinator::{all_consuming, map_res, verify},
};

use crate::ParseError;

/// Most data fields any supported sentence carries. Proprietary sentences
/// beyond this are rejected rather than silently tail-dropped.
pub const MAX_FIELDS: usize = 32;

/// A structurally valid sentence: header, raw data fields in wire order,
/// checksum already verified.
///
/// Borrows the input line. Empty strings are legal field values and stand
/// for omitted data; the decoder decides per schema what "omitted" means.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSentence<'a> {
    /// Talker ID plus sentence type, e.g. `GPRMC`.
    pub header: &'a str,
    /// Data fields after the header.
    pub fields: heapless::Vec<&'a str, MAX_FIELDS>,
}

/// Validates the framing of one sentence and splits it into fields.
///
/// The line must start with `$`, carry a `*hh` checksum suffix, and have a
/// header of at least three characters. Checksum digits are compared
/// case-insensitively. The line terminator is expected to be stripped by
/// the reader upstream.
///
/// # Examples
///
/// ```rust
/// use gps_nmea_parser::validate;
///
/// let sentence = validate("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();
/// assert_eq!(sentence.header, "GPGLL");
/// assert_eq!(sentence.fields[0], "4916.45");
/// ```
pub fn validate(line: &str) -> Result<ValidatedSentence<'_>, ParseError> {
    if !line.is_ascii() {
        return Err(ParseError::NotASentence);
    }

    let dollar: nom::IResult<&str, char> = char('$').parse(line);
    let (i, _) = dollar.map_err(|_| ParseError::NotASentence)?;

    let split: nom::IResult<&str, &str> = take_until("*").parse(i);
    let (suffix, payload) = split.map_err(|_| ParseError::MissingChecksum)?;
    let star: nom::IResult<&str, char> = char('*').parse(suffix);
    let (suffix, _) = star.map_err(|_| ParseError::MissingChecksum)?;

    let expected = read_checksum(suffix)?;
    let computed = checksum(payload);
    if expected != computed {
        return Err(ParseError::ChecksumMismatch { expected, computed });
    }

    let mut parts = payload.split(',');
    let header = parts.next().unwrap_or("");
    if header.len() < 3 {
        return Err(ParseError::MalformedHeader);
    }

    let mut fields = heapless::Vec::new();
    for field in parts {
        fields
            .push(field)
            .map_err(|_| ParseError::UnsupportedFieldCount {
                expected: MAX_FIELDS,
                found: payload.split(',').count() - 1,
            })?;
    }

    Ok(ValidatedSentence { header, fields })
}

/// Calculates the NMEA 0183 checksum for the given payload.
///
/// The checksum is the running XOR of every byte between `$` and `*`,
/// exclusive of both delimiters.
///
/// ```rust
/// use gps_nmea_parser::checksum;
///
/// assert_eq!(checksum("GPGLL,4916.45,N,12311.12,W,225444,A"), 0x31);
/// ```
pub fn checksum(payload: &str) -> u8 {
    payload.bytes().fold(0u8, |acc, byte| acc ^ byte)
}

/// Formats a checksum value as the two-digit uppercase hex string that
/// follows `*` on the wire.
///
/// ```rust
/// use gps_nmea_parser::format_checksum;
///
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Exactly two hex digits, case-insensitive.
fn read_checksum(i: &str) -> Result<u8, ParseError> {
    all_consuming(map_res(
        verify(take(2usize), |s: &str| {
            s.bytes().all(|b| b.is_ascii_hexdigit())
        }),
        |s: &str| u8::from_str_radix(s, 16),
    ))
    .parse(i)
    .map(|(_, cc)| cc)
    .map_err(|_: nom::Err<nom::error::Error<&str>>| ParseError::MissingChecksum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_sentence() {
        let sentence = validate("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();
        assert_eq!(sentence.header, "GPGLL");
        assert_eq!(sentence.fields.len(), 6);
        assert_eq!(sentence.fields[0], "4916.45");
        assert_eq!(sentence.fields[5], "A");
    }

    #[test]
    fn checksum_digits_are_case_insensitive() {
        let upper = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        let lower = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6a";
        assert_eq!(validate(upper), validate(lower));
        assert!(validate(upper).is_ok());
    }

    #[test]
    fn rejects_empty_and_unprefixed_input() {
        assert_eq!(validate(""), Err(ParseError::NotASentence));
        assert_eq!(
            validate("GPGLL,4916.45,N,12311.12,W,225444,A*31"),
            Err(ParseError::NotASentence)
        );
    }

    #[test]
    fn rejects_non_ascii_input() {
        assert_eq!(
            validate("$GPGLL,4916.45,N,12311.12,W,225444,Å*31"),
            Err(ParseError::NotASentence)
        );
    }

    #[test]
    fn rejects_missing_or_malformed_checksum() {
        assert_eq!(
            validate("$GPGLL,4916.45,N,12311.12,W,225444,A"),
            Err(ParseError::MissingChecksum)
        );
        assert_eq!(
            validate("$GPGLL,4916.45,N,12311.12,W,225444,A*3"),
            Err(ParseError::MissingChecksum)
        );
        assert_eq!(
            validate("$GPGLL,4916.45,N,12311.12,W,225444,A*3Z"),
            Err(ParseError::MissingChecksum)
        );
        assert_eq!(
            validate("$GPGLL,4916.45,N,12311.12,W,225444,A*311"),
            Err(ParseError::MissingChecksum)
        );
    }

    #[test]
    fn rejects_flipped_checksum_digit() {
        assert_eq!(
            validate("$GPGLL,4916.45,N,12311.12,W,225444,A*30"),
            Err(ParseError::ChecksumMismatch {
                expected: 0x30,
                computed: 0x31,
            })
        );
    }

    #[test]
    fn rejects_short_header() {
        assert_eq!(validate("$GP*17"), Err(ParseError::MalformedHeader));
    }

    #[test]
    fn preserves_empty_fields() {
        let sentence = validate("$GPGGA,,,,,,0,00,,,M,,M,,*66").unwrap();
        assert_eq!(sentence.fields.len(), 14);
        assert_eq!(sentence.fields[0], "");
        assert_eq!(sentence.fields[5], "0");
        assert_eq!(sentence.fields[9], "M");
    }

    #[test]
    fn rejects_oversized_field_count() {
        let payload = format!("GPXXX{}", ",1".repeat(MAX_FIELDS + 1));
        let line = format!("${payload}*{}", format_checksum(checksum(&payload)));
        assert!(matches!(
            validate(&line),
            Err(ParseError::UnsupportedFieldCount { .. })
        ));
    }

    #[test]
    fn checksum_round_trips_through_reencoding() {
        let line = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48";
        let sentence = validate(line).unwrap();

        let payload = format!("{},{}", sentence.header, sentence.fields.join(","));
        let reencoded = format!("${payload}*{}", format_checksum(checksum(&payload)));
        assert_eq!(reencoded, line);
    }
}
