use nom::{
    character::complete::{u8, u16},
    combinator::verify,
};

use crate::{ParseError, fields::FieldReader, sentences::Satellite};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// A constellation of more than four satellites is spread over several
/// sentences; `total_messages`/`message_number` sequence them. Each
/// satellite occupies a group of exactly four fields, and a sentence
/// ending mid-group is rejected as truncated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsv {
    /// Total number of GSV sentences in this group
    pub total_messages: u8,
    /// Sentence number within the group, 1-indexed
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellite entries carried by this sentence, up to four
    pub satellites: heapless::Vec<Satellite, 4>,
}

impl Gsv {
    pub(crate) fn decode(fields: &[&str]) -> Result<Self, ParseError> {
        let field_count = fields.len();
        let mut fields = FieldReader::new(fields);

        let total_messages = fields.req(verify(u8, |n: &u8| *n >= 1))?;
        let message_number = fields.req(verify(u8, |n: &u8| *n >= 1))?;
        let satellites_in_view = fields.req(u8)?;

        let mut satellites = heapless::Vec::new();
        while fields.remaining() > 0 {
            if fields.remaining() < 4 {
                return Err(ParseError::TruncatedSatelliteGroup {
                    remaining: fields.remaining(),
                });
            }

            let prn = fields.req(u8)?;
            let elevation = fields.opt(verify(u8, |e: &u8| *e <= 90))?;
            let azimuth = fields.opt(verify(u16, |a: &u16| *a <= 359))?;
            let snr = fields.opt(u8)?;

            satellites
                .push(Satellite {
                    prn,
                    elevation,
                    azimuth,
                    snr,
                })
                .map_err(|_| ParseError::UnsupportedFieldCount {
                    expected: 3 + 4 * 4,
                    found: field_count,
                })?;
        }

        Ok(Self {
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
        })
    }
}
