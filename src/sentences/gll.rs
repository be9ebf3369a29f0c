use time::Time;

use crate::{
    ParseError,
    fields::{Axis, FieldReader},
    sentences::{Coordinate, FaaMode, Status},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gll {
    /// Latitude in degrees
    pub latitude: Option<Coordinate>,
    /// Longitude in degrees
    pub longitude: Option<Coordinate>,
    /// Fix time in UTC
    pub fix_time: Option<Time>,
    /// Status flag
    pub status: Status,
    /// FAA mode indicator, emitted by NMEA 2.3+ receivers
    pub faa_mode: Option<FaaMode>,
}

impl Gll {
    pub(crate) fn decode(fields: &[&str]) -> Result<Self, ParseError> {
        let mut fields = FieldReader::new(fields);

        let latitude = fields.opt_coordinate(Axis::Latitude)?;
        let longitude = fields.opt_coordinate(Axis::Longitude)?;
        let fix_time = fields.opt_time()?;
        let status = fields.status()?;
        let faa_mode = fields.opt_trailing(FaaMode::parser)?;
        fields.finish()?;

        Ok(Self {
            latitude,
            longitude,
            fix_time,
            status,
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
    fn decodes_pre_2_3_sentence_without_mode() {
        let gll = Gll::decode(&split("4916.45,N,12311.12,W,225444,A")).unwrap();

        assert!((gll.latitude.unwrap().degrees - 49.274_166).abs() < 1e-5);
        assert!((gll.longitude.unwrap().degrees + 123.185_333).abs() < 1e-5);
        assert_eq!(gll.fix_time, Some(Time::from_hms(22, 54, 44).unwrap()));
        assert_eq!(gll.status, Status::Active);
        assert_eq!(gll.faa_mode, None);
    }

    #[test]
    fn decodes_mode_indicator_when_present() {
        let gll = Gll::decode(&split("4916.45,N,12311.12,W,225444,V,N")).unwrap();
        assert_eq!(gll.status, Status::Void);
        assert_eq!(gll.faa_mode, Some(FaaMode::DataNotValid));
    }

    #[test]
    fn bad_status_flag_is_rejected() {
        assert_eq!(
            Gll::decode(&split("4916.45,N,12311.12,W,225444,K")),
            Err(ParseError::InvalidStatusFlag {
                field_index: 5,
                raw_value: "K".into(),
            })
        );
    }
}
