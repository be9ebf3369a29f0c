use nom::character::complete::{u8, u16};
use nom::number::complete::float;
use time::Time;

use crate::{
    ParseError,
    fields::{Axis, FieldReader, non_negative},
    sentences::{Coordinate, Quality},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gga {
    /// Fix time in UTC
    pub fix_time: Option<Time>,
    /// Latitude in degrees
    pub latitude: Option<Coordinate>,
    /// Longitude in degrees
    pub longitude: Option<Coordinate>,
    /// GPS quality indicator
    pub fix_quality: Quality,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Altitude above mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    /// Geoidal separation in meters, the difference between the WGS-84
    /// earth ellipsoid and mean sea level
    pub geoidal_separation: Option<f32>,
    /// Age of differential GPS data in seconds, empty when DGPS is not
    /// used
    pub dgps_age: Option<f32>,
    /// Differential reference station ID
    pub dgps_station_id: Option<u16>,
}

impl Gga {
    pub(crate) fn decode(fields: &[&str]) -> Result<Self, ParseError> {
        let mut fields = FieldReader::new(fields);

        let fix_time = fields.opt_time()?;
        let latitude = fields.opt_coordinate(Axis::Latitude)?;
        let longitude = fields.opt_coordinate(Axis::Longitude)?;
        let fix_quality = fields.req(Quality::parser)?;
        let satellite_count = fields.opt(u8)?;
        let hdop = fields.opt(non_negative)?;
        let altitude = fields.opt_with_unit('M', float)?;
        let geoidal_separation = fields.opt_with_unit('M', float)?;
        let dgps_age = fields.opt(non_negative)?;
        let dgps_station_id = fields.opt(u16)?;
        fields.finish()?;

        Ok(Self {
            fix_time,
            latitude,
            longitude,
            fix_quality,
            satellite_count,
            hdop,
            altitude,
            geoidal_separation,
            dgps_age,
            dgps_station_id,
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
    fn decodes_full_fix() {
        let fields = split("092725.00,4717.113,N,00833.915,E,1,08,1.01,499.6,M,48.0,M,,0000");
        let gga = Gga::decode(&fields).unwrap();

        assert_eq!(gga.fix_time, Some(Time::from_hms(9, 27, 25).unwrap()));
        assert!((gga.latitude.unwrap().degrees - 47.285_216).abs() < 1e-5);
        assert!((gga.longitude.unwrap().degrees - 8.565_25).abs() < 1e-5);
        assert_eq!(gga.fix_quality, Quality::GpsFix);
        assert_eq!(gga.satellite_count, Some(8));
        assert_eq!(gga.hdop, Some(1.01));
        assert_eq!(gga.altitude, Some(499.6));
        assert_eq!(gga.geoidal_separation, Some(48.0));
        assert_eq!(gga.dgps_age, None);
        assert_eq!(gga.dgps_station_id, Some(0));
    }

    #[test]
    fn empty_altitude_is_absent_not_zero() {
        let fields = split("123519,4807.038,N,01131.000,E,1,08,0.9,,M,46.9,M,,");
        let gga = Gga::decode(&fields).unwrap();

        assert_eq!(gga.altitude, None);
        assert_eq!(gga.geoidal_separation, Some(46.9));
    }

    #[test]
    fn fixless_sentence_keeps_every_field_absent() {
        let fields = split(",,,,,0,00,,,M,,M,,");
        let gga = Gga::decode(&fields).unwrap();

        assert_eq!(gga.fix_time, None);
        assert_eq!(gga.latitude, None);
        assert_eq!(gga.longitude, None);
        assert_eq!(gga.fix_quality, Quality::NoFix);
        assert_eq!(gga.satellite_count, Some(0));
        assert_eq!(gga.hdop, None);
        assert_eq!(gga.altitude, None);
    }

    #[test]
    fn malformed_hdop_names_its_field() {
        let fields = split("123519,4807.038,N,01131.000,E,1,08,abc,545.4,M,46.9,M,,");
        assert_eq!(
            Gga::decode(&fields),
            Err(ParseError::InvalidFieldFormat {
                field_index: 7,
                raw_value: "abc".into(),
            })
        );
    }

    #[test]
    fn truncated_sentence_is_rejected() {
        let fields = split("123519,4807.038,N,01131.000,E,1,08");
        assert!(matches!(
            Gga::decode(&fields),
            Err(ParseError::UnsupportedFieldCount { .. })
        ));
    }
}
