use nom::number::complete::float;

use crate::{
    ParseError,
    fields::{FieldReader, non_negative},
    sentences::FaaMode,
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Vtg {
    /// Track made good in degrees true
    pub true_track: Option<f32>,
    /// Track made good in degrees magnetic
    pub magnetic_track: Option<f32>,
    /// Speed over ground in knots
    pub speed_knots: Option<f32>,
    /// Speed over ground in km/h
    pub speed_kmh: Option<f32>,
    /// FAA mode indicator, emitted by NMEA 2.3+ receivers
    pub faa_mode: Option<FaaMode>,
}

impl Vtg {
    pub(crate) fn decode(fields: &[&str]) -> Result<Self, ParseError> {
        let mut fields = FieldReader::new(fields);

        let true_track = fields.opt_with_unit('T', float)?;
        let magnetic_track = fields.opt_with_unit('M', float)?;
        let speed_knots = fields.opt_with_unit('N', non_negative)?;
        let speed_kmh = fields.opt_with_unit('K', non_negative)?;
        let faa_mode = fields.opt_trailing(FaaMode::parser)?;
        fields.finish()?;

        Ok(Self {
            true_track,
            magnetic_track,
            speed_knots,
            speed_kmh,
            faa_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(body: &str) -> Vec<&str> {
        body.split(',').collect()
    }

    #[test]
    fn decodes_both_speed_units() {
        let vtg = Vtg::decode(&split("054.7,T,034.4,M,005.5,N,010.2,K")).unwrap();

        assert_eq!(vtg.true_track, Some(54.7));
        assert_eq!(vtg.magnetic_track, Some(34.4));
        assert_eq!(vtg.speed_knots, Some(5.5));
        assert_eq!(vtg.speed_kmh, Some(10.2));
        assert_eq!(vtg.faa_mode, None);
    }

    #[test]
    fn magnetic_track_may_be_empty() {
        let vtg = Vtg::decode(&split("360.0,T,,M,000.0,N,000.0,K,A")).unwrap();
        assert_eq!(vtg.magnetic_track, None);
        assert_eq!(vtg.faa_mode, Some(FaaMode::Autonomous));
    }

    #[test]
    fn wrong_unit_letter_is_rejected() {
        assert!(matches!(
            Vtg::decode(&split("054.7,X,034.4,M,005.5,N,010.2,K")),
            Err(ParseError::InvalidFieldFormat { field_index: 1, .. })
        ));
    }

    #[test]
    fn non_numeric_track_is_rejected() {
        assert!(matches!(
            Vtg::decode(&split("abc,T,034.4,M,005.5,N,010.2,K")),
            Err(ParseError::InvalidFieldFormat { field_index: 0, .. })
        ));
    }
}
