use nom::character::complete::u8;

use crate::{
    ParseError,
    fields::{FieldReader, non_negative},
    sentences::{FixMode, SelectionMode},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsa {
    /// Selection mode
    pub selection_mode: SelectionMode,
    /// Fix mode
    pub fix_mode: FixMode,
    /// PRNs of the satellites used in the fix. The sentence always
    /// carries twelve slots; empty slots are dropped here, never padded.
    pub fix_sats_prn: heapless::Vec<u8, 12>,
    /// Position Dilution of Precision
    pub pdop: Option<f32>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Vertical Dilution of Precision
    pub vdop: Option<f32>,
}

impl Gsa {
    pub(crate) fn decode(fields: &[&str]) -> Result<Self, ParseError> {
        let mut fields = FieldReader::new(fields);

        let selection_mode = fields.req(SelectionMode::parser)?;
        let fix_mode = fields.req(FixMode::parser)?;

        let mut fix_sats_prn = heapless::Vec::new();
        for _ in 0..12 {
            if let Some(prn) = fields.opt(u8)? {
                // twelve slots into a twelve-capacity vec; cannot overflow
                let _ = fix_sats_prn.push(prn);
            }
        }

        let pdop = fields.opt(non_negative)?;
        let hdop = fields.opt(non_negative)?;
        let vdop = fields.opt(non_negative)?;
        fields.finish()?;

        Ok(Self {
            selection_mode,
            fix_mode,
            fix_sats_prn,
            pdop,
            hdop,
            vdop,
        })
    }
}
