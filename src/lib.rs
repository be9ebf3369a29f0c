//! # GPS NMEA Parser
//!
//! This library decodes NMEA 0183 sentences emitted by a GPS receiver
//! into typed records. It is split the way the wire format is:
//!
//! - [`validate`] checks one raw line's framing — the `$` prefix, the
//!   `*hh` XOR checksum, the comma-separated payload — and yields a
//!   [`ValidatedSentence`] of raw fields.
//! - [`decode`] dispatches on the sentence type (GGA, RMC, GSA, GSV,
//!   GLL, VTG) and converts the fields into a [`GpsFix`] record. Types it
//!   has no schema for come back as [`GpsFix::Unknown`] with their fields
//!   preserved, so proprietary talker sentences never break a stream.
//!
//! Both steps are pure functions: no I/O, no shared state, safe to call
//! from any thread. Reading the serial port and framing bytes into lines
//! is the caller's job, as is any local-time display of the decoded UTC
//! fields.
//!
//! ## Usage
//!
//! ```rust
//! use gps_nmea_parser::{GpsFix, Status, parse};
//!
//! let line = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
//!
//! match parse(line) {
//!     Ok(GpsFix::Rmc(rmc)) => {
//!         assert_eq!(rmc.status, Status::Active);
//!         assert_eq!(rmc.speed_over_ground, Some(22.4));
//!         assert!((rmc.latitude.unwrap().degrees - 48.1173).abs() < 1e-6);
//!     }
//!     Ok(other) => println!("other sentence: {other:?}"),
//!     // one bad sentence never stops the read loop
//!     Err(e) => eprintln!("skipping line: {e}"),
//! }
//! ```

pub mod error;
mod fields;
pub mod sentences;
mod validate;

pub use error::ParseError;
pub use sentences::{
    Coordinate, FaaMode, FixMode, Gga, Gll, GpsFix, Gsa, Gsv, Hemisphere, Quality, Rmc, Satellite,
    SelectionMode, Status, Vtg, decode,
};
pub use validate::{MAX_FIELDS, ValidatedSentence, checksum, format_checksum, validate};

/// Validates and decodes one sentence in a single call.
///
/// Equivalent to [`validate`] followed by [`decode`]. The returned record
/// borrows from `line` only for the [`GpsFix::Unknown`] variant.
pub fn parse(line: &str) -> Result<GpsFix<'_>, ParseError> {
    let sentence = validate(line)?;
    decode(&sentence)
}
