use nom::number::complete::float;
use time::{Date, Time};

use crate::{
    ParseError,
    fields::{Axis, FieldReader, non_negative},
    sentences::{Coordinate, FaaMode, Status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rmc {
    /// Fix time in UTC
    pub fix_time: Option<Time>,
    /// Status flag; a void fix still carries whatever position data the
    /// receiver had
    pub status: Status,
    /// Latitude in degrees
    pub latitude: Option<Coordinate>,
    /// Longitude in degrees
    pub longitude: Option<Coordinate>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f32>,
    /// Course over ground in degrees true
    pub course_over_ground: Option<f32>,
    /// Fix date in UTC
    pub fix_date: Option<Date>,
    /// Magnetic variation in degrees; west is negative
    pub magnetic_variation: Option<f32>,
    /// FAA mode indicator, emitted by NMEA 2.3+ receivers
    pub faa_mode: Option<FaaMode>,
}

impl Rmc {
    pub(crate) fn decode(fields: &[&str]) -> Result<Self, ParseError> {
        let mut fields = FieldReader::new(fields);

        let fix_time = fields.opt_time()?;
        let status = fields.status()?;
        let latitude = fields.opt_coordinate(Axis::Latitude)?;
        let longitude = fields.opt_coordinate(Axis::Longitude)?;
        let speed_over_ground = fields.opt(non_negative)?;
        let course_over_ground = fields.opt(float)?;
        let fix_date = fields.opt_date()?;
        let magnetic_variation = fields.opt_variation()?;
        let faa_mode = fields.opt_trailing(FaaMode::parser)?;
        fields.finish()?;

        Ok(Self {
            fix_time,
            status,
            latitude,
            longitude,
            speed_over_ground,
            course_over_ground,
            fix_date,
            magnetic_variation,
            faa_mode,
        })
    }
}
