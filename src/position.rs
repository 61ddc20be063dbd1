//! # Positions
//!
//! The parsed log hands every interpreted sentence to a position constructor,
//! any type implementing [`FromPositionRequest`]. Two are provided:
//!
//! - [`PositionRecord`] keeps the five raw strings as they appeared.
//! - [`Position`] converts them into decimal degrees and metres, rejecting
//!   values that are not numbers or not on the globe.

use std::convert::Infallible;

use nom::{Parser, combinator::all_consuming, number::complete::double};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PositionRequest;

/// Constructs a position from the raw components of a sentence.
pub trait FromPositionRequest: Sized {
    /// Why a request was rejected.
    type Error;

    /// Builds `Self` from the components of one sentence.
    fn from_request(request: &PositionRequest<'_>) -> Result<Self, Self::Error>;
}

/// An owned copy of the raw position components of a sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRecord {
    /// Latitude as written in the sentence, `ddmm.mmmm`
    pub latitude: String,
    /// `N` or `S`
    pub latitude_direction: char,
    /// Longitude as written in the sentence, `dddmm.mmmm`
    pub longitude: String,
    /// `E` or `W`
    pub longitude_direction: char,
    /// Elevation field, `0` for formats without one
    pub elevation: String,
}

impl FromPositionRequest for PositionRecord {
    type Error = Infallible;

    fn from_request(request: &PositionRequest<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            latitude: request.latitude.to_string(),
            latitude_direction: request.latitude_direction,
            longitude: request.longitude.to_string(),
            longitude_direction: request.longitude_direction,
            elevation: request.elevation.to_string(),
        })
    }
}

/// Reasons a [`Position`] cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// A component is not a decimal number.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// A direction is not valid for its axis.
    #[error("invalid direction {0:?}")]
    InvalidDirection(char),

    /// A degrees-and-minutes value is negative or has 60 minutes or more.
    #[error("invalid degrees and minutes value {0:?}")]
    InvalidDegreesMinutes(String),

    /// The latitude is outside [-90, 90] degrees.
    #[error("latitude {0} out of range")]
    LatitudeOutOfRange(f64),

    /// The longitude is outside [-180, 180] degrees.
    #[error("longitude {0} out of range")]
    LongitudeOutOfRange(f64),
}

/// A geographic position.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in decimal degrees, negative south of the equator
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west of Greenwich
    pub longitude: f64,
    /// Elevation in metres
    pub elevation: f64,
}

impl Position {
    /// Builds a position from degrees-and-minutes strings and their directions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_log::Position;
    ///
    /// let position = Position::from_ddm("4916.45", 'N', "12311.12", 'W', "0").unwrap();
    /// assert!((position.latitude - 49.274_166).abs() < 1e-6);
    /// assert!((position.longitude + 123.185_333).abs() < 1e-6);
    /// assert_eq!(position.elevation, 0.0);
    /// ```
    pub fn from_ddm(
        latitude: &str,
        latitude_direction: char,
        longitude: &str,
        longitude_direction: char,
        elevation: &str,
    ) -> Result<Self, PositionError> {
        let latitude = match latitude_direction {
            'N' => ddm_to_degrees(latitude)?,
            'S' => -ddm_to_degrees(latitude)?,
            other => return Err(PositionError::InvalidDirection(other)),
        };
        let longitude = match longitude_direction {
            'E' => ddm_to_degrees(longitude)?,
            'W' => -ddm_to_degrees(longitude)?,
            other => return Err(PositionError::InvalidDirection(other)),
        };
        let elevation = number(elevation)?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PositionError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PositionError::LongitudeOutOfRange(longitude));
        }
        if !elevation.is_finite() {
            return Err(PositionError::InvalidNumber(elevation.to_string()));
        }

        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }
}

impl FromPositionRequest for Position {
    type Error = PositionError;

    fn from_request(request: &PositionRequest<'_>) -> Result<Self, Self::Error> {
        Self::from_ddm(
            request.latitude,
            request.latitude_direction,
            request.longitude,
            request.longitude_direction,
            request.elevation,
        )
    }
}

fn number(field: &str) -> Result<f64, PositionError> {
    all_consuming(double::<_, nom::error::Error<&str>>)
        .parse(field)
        .map(|(_, value)| value)
        .map_err(|_| PositionError::InvalidNumber(field.to_string()))
}

/// Converts `dddmm.mmmm` into decimal degrees.
fn ddm_to_degrees(field: &str) -> Result<f64, PositionError> {
    let ddm = number(field)?;
    if !ddm.is_finite() || ddm < 0.0 {
        return Err(PositionError::InvalidDegreesMinutes(field.to_string()));
    }

    let degrees = (ddm / 100.0).trunc();
    let minutes = ddm - degrees * 100.0;
    if minutes >= 60.0 {
        return Err(PositionError::InvalidDegreesMinutes(field.to_string()));
    }

    Ok(degrees + minutes / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn test_ddm_to_degrees() {
        assert_close(ddm_to_degrees("4807.038").unwrap(), 48.0 + 7.038 / 60.0);
        assert_close(ddm_to_degrees("01131.000").unwrap(), 11.0 + 31.0 / 60.0);
        assert_close(ddm_to_degrees("0").unwrap(), 0.0);
        assert_close(ddm_to_degrees("59.5").unwrap(), 59.5 / 60.0);

        assert!(matches!(
            ddm_to_degrees("4860.0"),
            Err(PositionError::InvalidDegreesMinutes(_))
        ));
        assert!(matches!(
            ddm_to_degrees("-4807.038"),
            Err(PositionError::InvalidDegreesMinutes(_))
        ));
        assert!(matches!(
            ddm_to_degrees(""),
            Err(PositionError::InvalidNumber(_))
        ));
        assert!(matches!(
            ddm_to_degrees("48O7.038"),
            Err(PositionError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_position_signs() {
        let position = Position::from_ddm("4807.038", 'S', "01131.000", 'W', "545.4").unwrap();
        assert_close(position.latitude, -(48.0 + 7.038 / 60.0));
        assert_close(position.longitude, -(11.0 + 31.0 / 60.0));
        assert_close(position.elevation, 545.4);
    }

    #[test]
    fn test_position_rejects_invalid_input() {
        assert_eq!(
            Position::from_ddm("4807.038", 'E', "01131.000", 'W', "0"),
            Err(PositionError::InvalidDirection('E'))
        );
        assert_eq!(
            Position::from_ddm("4807.038", 'N', "01131.000", 'S', "0"),
            Err(PositionError::InvalidDirection('S'))
        );
        assert!(matches!(
            Position::from_ddm("9100.0", 'N', "01131.000", 'E', "0"),
            Err(PositionError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Position::from_ddm("4807.038", 'N', "18100.0", 'E', "0"),
            Err(PositionError::LongitudeOutOfRange(_))
        ));
        assert_eq!(
            Position::from_ddm("4807.038", 'N', "01131.000", 'E', ""),
            Err(PositionError::InvalidNumber(String::new()))
        );
    }

    #[test]
    fn test_position_record_keeps_raw_strings() {
        let request = PositionRequest {
            latitude: "4916.45",
            latitude_direction: 'N',
            longitude: "12311.12",
            longitude_direction: 'W',
            elevation: "0",
        };
        let record = PositionRecord::from_request(&request).unwrap();
        assert_eq!(record.latitude, "4916.45");
        assert_eq!(record.longitude_direction, 'W');
        assert_eq!(record.elevation, "0");
    }
}
