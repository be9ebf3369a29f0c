//! Typed extraction of sentence data fields.
//!
//! A [`FieldReader`] walks the data fields of a validated sentence in wire
//! order, tracking the zero-based field index so a failed conversion can
//! name the exact field it stopped on. Individual fields are run through
//! nom parsers that must consume the whole field; trailing junk inside a
//! field is a format error, never silently ignored.

use nom::{
    Parser,
    bytes::complete::take,
    character::complete::u8,
    combinator::{all_consuming, verify},
    number::complete::{double, float},
};
use time::{Date, Month, Time};

use crate::{
    error::ParseError,
    sentences::{Coordinate, Hemisphere, Status},
};

/// Which half of a position a coordinate field pair encodes. Latitude
/// carries a two-digit degree prefix and `N`/`S`, longitude three digits
/// and `E`/`W`.
#[derive(Clone, Copy)]
pub(crate) enum Axis {
    Latitude,
    Longitude,
}

pub(crate) struct FieldReader<'a> {
    fields: &'a [&'a str],
    index: usize,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(fields: &'a [&'a str]) -> Self {
        Self { fields, index: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.fields.len() - self.index
    }

    fn next(&mut self) -> Result<(usize, &'a str), ParseError> {
        let index = self.index;
        let raw = self
            .fields
            .get(index)
            .copied()
            .ok_or(ParseError::UnsupportedFieldCount {
                expected: index + 1,
                found: self.fields.len(),
            })?;
        self.index += 1;
        Ok((index, raw))
    }

    /// Runs a nom parser over one whole field.
    fn run<O, P>(index: usize, raw: &'a str, parser: P) -> Result<O, ParseError>
    where
        P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    {
        all_consuming(parser)
            .parse(raw)
            .map(|(_, value)| value)
            .map_err(|_| invalid(index, raw))
    }

    /// Next field, required: an empty field is a format error here.
    pub(crate) fn req<O, P>(&mut self, parser: P) -> Result<O, ParseError>
    where
        P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    {
        let (index, raw) = self.next()?;
        Self::run(index, raw, parser)
    }

    /// Next field, optional: an empty field decodes to `None`.
    pub(crate) fn opt<O, P>(&mut self, parser: P) -> Result<Option<O>, ParseError>
    where
        P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    {
        let (index, raw) = self.next()?;
        if raw.is_empty() {
            return Ok(None);
        }
        Self::run(index, raw, parser).map(Some)
    }

    /// Like [`opt`](Self::opt), but tolerates the field being wholly
    /// absent. For trailing fields only present in newer sentence
    /// revisions (the FAA mode indicator).
    pub(crate) fn opt_trailing<O, P>(&mut self, parser: P) -> Result<Option<O>, ParseError>
    where
        P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    {
        if self.remaining() == 0 {
            return Ok(None);
        }
        self.opt(parser)
    }

    /// A value field followed by its unit-letter field. The unit field may
    /// be empty (some talkers omit the letter) but any other letter than
    /// the expected one is a format error.
    pub(crate) fn opt_with_unit<O, P>(&mut self, unit: char, parser: P) -> Result<Option<O>, ParseError>
    where
        P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    {
        let value = self.opt(parser)?;
        let (index, raw) = self.next()?;
        if !(raw.is_empty() || (raw.len() == 1 && raw.starts_with(unit))) {
            return Err(invalid(index, raw));
        }
        Ok(value)
    }

    /// `A` (active) / `V` (void) status flag.
    pub(crate) fn status(&mut self) -> Result<Status, ParseError> {
        let (index, raw) = self.next()?;
        match raw {
            "A" => Ok(Status::Active),
            "V" => Ok(Status::Void),
            _ => Err(ParseError::InvalidStatusFlag {
                field_index: index,
                raw_value: raw.to_owned(),
            }),
        }
    }

    /// `HHMMSS.sss` UTC time of day; the fraction is optional.
    pub(crate) fn opt_time(&mut self) -> Result<Option<Time>, ParseError> {
        let (index, raw) = self.next()?;
        if raw.is_empty() {
            return Ok(None);
        }
        let (hour, minute, second) =
            Self::run(index, raw, (two_digits, two_digits, float))?;
        if second < 0.0 {
            return Err(invalid(index, raw));
        }
        let milliseconds = (second.fract() * 1000.0) as u16;
        let time = Time::from_hms_milli(hour, minute, second.trunc() as u8, milliseconds)
            .map_err(|_| invalid(index, raw))?;
        Ok(Some(time))
    }

    /// `DDMMYY` date; the two-digit year is 2000-based.
    pub(crate) fn opt_date(&mut self) -> Result<Option<Date>, ParseError> {
        let (index, raw) = self.next()?;
        if raw.is_empty() {
            return Ok(None);
        }
        let (day, month, year) =
            Self::run(index, raw, (two_digits, two_digits, two_digits))?;
        let month = Month::try_from(month).map_err(|_| invalid(index, raw))?;
        let date = Date::from_calendar_date(2000 + year as i32, month, day)
            .map_err(|_| invalid(index, raw))?;
        Ok(Some(date))
    }

    /// A sexagesimal coordinate field pair: `DDMM.mmmm` (latitude) or
    /// `DDDMM.mmmm` (longitude) followed by its hemisphere letter. Both
    /// fields empty means the position is absent; a half-present pair is a
    /// format error.
    pub(crate) fn opt_coordinate(&mut self, axis: Axis) -> Result<Option<Coordinate>, ParseError> {
        let (value_index, raw_value) = self.next()?;
        let (hemi_index, raw_hemi) = self.next()?;

        match (raw_value.is_empty(), raw_hemi.is_empty()) {
            (true, true) => return Ok(None),
            (true, false) => return Err(invalid(value_index, raw_value)),
            (false, true) => return Err(invalid(hemi_index, raw_hemi)),
            (false, false) => {}
        }

        let hemisphere = match (axis, raw_hemi) {
            (Axis::Latitude, "N") => Hemisphere::North,
            (Axis::Latitude, "S") => Hemisphere::South,
            (Axis::Longitude, "E") => Hemisphere::East,
            (Axis::Longitude, "W") => Hemisphere::West,
            _ => return Err(invalid(hemi_index, raw_hemi)),
        };

        let value = Self::run(value_index, raw_value, verify(double, |v: &f64| *v >= 0.0))?;
        let whole_degrees = (value / 100.0).floor();
        let minutes = value - whole_degrees * 100.0;
        let mut degrees = whole_degrees + minutes / 60.0;
        if matches!(hemisphere, Hemisphere::South | Hemisphere::West) {
            degrees = -degrees;
        }

        let limit = match axis {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        };
        if degrees.abs() > limit {
            return Err(invalid(value_index, raw_value));
        }

        Ok(Some(Coordinate { degrees, hemisphere }))
    }

    /// Magnetic variation in degrees: a value field plus an `E`/`W`
    /// direction field; west is negative.
    pub(crate) fn opt_variation(&mut self) -> Result<Option<f32>, ParseError> {
        let value = self.opt(non_negative)?;
        let (index, raw) = self.next()?;
        match (value, raw) {
            (None, "") => Ok(None),
            (Some(v), "E") => Ok(Some(v)),
            (Some(v), "W") => Ok(Some(-v)),
            _ => Err(invalid(index, raw)),
        }
    }

    /// A fully decoded schema must leave no data fields behind.
    pub(crate) fn finish(self) -> Result<(), ParseError> {
        if self.index == self.fields.len() {
            Ok(())
        } else {
            Err(ParseError::UnsupportedFieldCount {
                expected: self.index,
                found: self.fields.len(),
            })
        }
    }
}

/// nom `float` constrained to non-negative values (speeds, DOP factors).
pub(crate) fn non_negative(i: &str) -> nom::IResult<&str, f32> {
    verify(float, |v: &f32| *v >= 0.0).parse(i)
}

fn two_digits(i: &str) -> nom::IResult<&str, u8> {
    take(2usize).and_then(all_consuming(u8)).parse(i)
}

fn invalid(field_index: usize, raw_value: &str) -> ParseError {
    ParseError::InvalidFieldFormat {
        field_index,
        raw_value: raw_value.to_owned(),
    }
}
