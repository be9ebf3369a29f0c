//! # Sentence Schemas
//!
//! One module per supported sentence type, plus the [`GpsFix`] dispatch
//! enum and the small field vocabularies (status flags, fix quality,
//! modes) the schemas share.

mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;

pub use gga::Gga;
pub use gll::Gll;
pub use gsa::Gsa;
pub use gsv::Gsv;
pub use rmc::Rmc;
pub use vtg::Vtg;

use nom::Parser;

use crate::{
    ParseError,
    validate::{MAX_FIELDS, ValidatedSentence},
};

/// One decoded sentence.
///
/// Each variant holds only the fields its sentence type defines; optional
/// fields are `Option`s, never sentinel values. A record is produced whole
/// or not at all — decoding never hands back a partially filled struct.
///
/// Unrecognized sentence types decode to [`GpsFix::Unknown`] rather than
/// an error: talkers freely emit proprietary sentences (`$PGRM…`,
/// `$PSRF…`) and a reader must not drop the stream over them.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum GpsFix<'a> {
    /// Global Positioning System Fix Data
    Gga(Gga),
    /// Recommended Minimum Navigation Information
    Rmc(Rmc),
    /// GPS DOP and active satellites
    Gsa(Gsa),
    /// Satellites in View
    Gsv(Gsv),
    /// Geographic Position - Latitude/Longitude
    Gll(Gll),
    /// Track made good and Ground speed
    Vtg(Vtg),
    /// Any sentence type this decoder has no schema for
    Unknown {
        /// Full talker+type header, e.g. `PGRMZ`.
        type_code: &'a str,
        /// Raw data fields, verbatim.
        fields: heapless::Vec<&'a str, MAX_FIELDS>,
    },
}

/// Decodes a validated sentence into its typed record.
///
/// Dispatch is on the trailing three letters of the header, so any talker
/// (`GP`, `GN`, `GL`, …) feeds the same schema. Sentences are decoded
/// independently; no state is carried between calls.
pub fn decode<'a>(sentence: &ValidatedSentence<'a>) -> Result<GpsFix<'a>, ParseError> {
    let type_code = sentence
        .header
        .len()
        .checked_sub(3)
        .and_then(|at| sentence.header.get(at..))
        .ok_or(ParseError::MalformedHeader)?;
    let fields = sentence.fields.as_slice();

    let fix = match type_code {
        "GGA" => GpsFix::Gga(Gga::decode(fields)?),
        "RMC" => GpsFix::Rmc(Rmc::decode(fields)?),
        "GSA" => GpsFix::Gsa(Gsa::decode(fields)?),
        "GSV" => GpsFix::Gsv(Gsv::decode(fields)?),
        "GLL" => GpsFix::Gll(Gll::decode(fields)?),
        "VTG" => GpsFix::Vtg(Vtg::decode(fields)?),
        _ => GpsFix::Unknown {
            type_code: sentence.header,
            fields: sentence.fields.clone(),
        },
    };

    Ok(fix)
}

/// Hemisphere letter attached to a coordinate field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// N
    North,
    /// S
    South,
    /// E
    East,
    /// W
    West,
}

/// A decoded latitude or longitude.
///
/// `degrees` is in signed decimal degrees, already negated for the
/// southern and western hemispheres; latitude stays within ±90 and
/// longitude within ±180.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Decimal degrees.
    pub degrees: f64,
    /// The hemisphere letter the sentence carried.
    pub hemisphere: Hemisphere,
}

/// RMC/GLL receiver status flag.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A - data valid
    Active,
    /// V - receiver warning, data may be stale
    Void,
}

macro_rules! char_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            pub(crate) fn parser(i: &str) -> nom::IResult<&str, Self> {
                nom::branch::alt(($(
                    nom::combinator::value(
                        Self::$variant,
                        nom::character::complete::char($char),
                    ),
                )*))
                .parse(i)
            }
        }
    };
}

char_enum! {
    /// Quality of the GPS fix, GGA field 6.
    pub enum Quality {
        /// 0 - fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GpsFix,
        /// 2 - differential GPS fix
        '2' => DgpsFix,
        /// 3 - PPS fix
        '3' => PpsFix,
        /// 4 - Real Time Kinematic
        '4' => Rtk,
        /// 5 - float RTK
        '5' => FloatRtk,
        /// 6 - estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - manual input mode
        '7' => Manual,
        /// 8 - simulation mode
        '8' => Simulation,
    }
}

char_enum! {
    /// GSA selection mode.
    pub enum SelectionMode {
        /// A - automatic, allowed to switch 2D/3D
        'A' => Automatic,
        /// M - manual, forced to operate in 2D or 3D
        'M' => Manual,
    }
}

char_enum! {
    /// GSA fix mode.
    pub enum FixMode {
        /// 1 - no fix
        '1' => NoFix,
        /// 2 - 2D fix
        '2' => Fix2D,
        /// 3 - 3D fix
        '3' => Fix3D,
    }
}

char_enum! {
    /// FAA mode indicator, the trailing field NMEA 2.3 added to RMC, GLL
    /// and VTG.
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - autonomous mode
        'A' => Autonomous,
        /// D - differential mode
        'D' => Differential,
        /// E - estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK float mode
        'F' => FloatRtk,
        /// M - manual input mode
        'M' => Manual,
        /// N - data not valid
        'N' => DataNotValid,
        /// R - RTK integer mode
        'R' => FixedRtk,
        /// S - simulated mode
        'S' => Simulator,
    }
}

/// One satellite entry from a GSV group.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
    /// PRN code identifying the satellite.
    pub prn: u8,
    /// Elevation above the horizon, 0–90 degrees.
    pub elevation: Option<u8>,
    /// Azimuth from true north, 0–359 degrees.
    pub azimuth: Option<u16>,
    /// Signal-to-noise ratio in dB.
    pub snr: Option<u8>,
}
