//! # Sentence Interpretation
//!
//! Turns the data fields of a supported sentence into the five strings a
//! position is built from. No numeric conversion happens here.

use crate::{
    Error, FormatRegistry, SentenceData, format::default_registry, resolve_direction, value_before,
};

/// Minimum number of data fields: latitude, its direction, longitude, its direction.
pub const MIN_DATA_FIELDS: usize = 4;

/// Elevation used for formats that do not carry one.
pub const DEFAULT_ELEVATION: &str = "0";

/// The raw components of a position, as found in a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest<'a> {
    /// Latitude in degrees and decimal minutes, `ddmm.mmmm`
    pub latitude: &'a str,
    /// `N` or `S`
    pub latitude_direction: char,
    /// Longitude in degrees and decimal minutes, `dddmm.mmmm`
    pub longitude: &'a str,
    /// `E` or `W`
    pub longitude_direction: char,
    /// Elevation in metres, [`DEFAULT_ELEVATION`] when the format has none
    pub elevation: &'a str,
}

impl FormatRegistry {
    /// Interprets the data fields of a sentence using this registry.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] if the sentence format is not registered
    /// - [`Error::InsufficientFields`] if there are fewer than [`MIN_DATA_FIELDS`] data fields
    /// - [`Error::NotFound`] or [`Error::NoPrecedingValue`] if a direction
    ///   or elevation marker cannot be resolved
    pub fn interpret<'a>(&self, data: &SentenceData<'a>) -> Result<PositionRequest<'a>, Error> {
        let format = self
            .get(data.format)
            .ok_or_else(|| Error::UnsupportedFormat(data.format.to_string()))?;

        if data.data_fields.len() < MIN_DATA_FIELDS {
            return Err(Error::InsufficientFields {
                found: data.data_fields.len(),
                required: MIN_DATA_FIELDS,
            });
        }

        let elevation = match format.elevation_marker() {
            Some(marker) => value_before(data, marker)?,
            None => DEFAULT_ELEVATION,
        };

        let latitude = resolve_direction(data, "N", "S", 'N', 'S')?;
        let longitude = resolve_direction(data, "E", "W", 'E', 'W')?;

        Ok(PositionRequest {
            latitude: latitude.value,
            latitude_direction: latitude.direction,
            longitude: longitude.value,
            longitude_direction: longitude.direction,
            elevation,
        })
    }
}

/// Interprets the data fields of a sentence using the default [`FormatRegistry`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::{interpret, split_sentence};
///
/// let data = split_sentence("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47");
/// let request = interpret(&data).unwrap();
///
/// assert_eq!(request.latitude, "4807.038");
/// assert_eq!(request.latitude_direction, 'N');
/// assert_eq!(request.longitude, "01131.000");
/// assert_eq!(request.longitude_direction, 'E');
/// assert_eq!(request.elevation, "545.4");
/// ```
pub fn interpret<'a>(data: &SentenceData<'a>) -> Result<PositionRequest<'a>, Error> {
    default_registry().interpret(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SentenceFormat;

    fn data<'a>(format: &'a str, fields: &[&'a str]) -> SentenceData<'a> {
        SentenceData {
            format,
            data_fields: fields.to_vec(),
        }
    }

    #[test]
    fn test_interpret_gll() {
        let data = data("GLL", &["4916.45", "N", "12311.12", "W", "225444", "A"]);
        assert_eq!(
            interpret(&data),
            Ok(PositionRequest {
                latitude: "4916.45",
                latitude_direction: 'N',
                longitude: "12311.12",
                longitude_direction: 'W',
                elevation: "0",
            })
        );
    }

    #[test]
    fn test_interpret_rmc_ignores_m() {
        let data = data(
            "RMC",
            &["225446", "A", "4916.45", "S", "12311.12", "E", "000.5", "M"],
        );
        let request = interpret(&data).unwrap();
        assert_eq!(request.elevation, DEFAULT_ELEVATION);
        assert_eq!(request.latitude, "4916.45");
        assert_eq!(request.latitude_direction, 'S');
        assert_eq!(request.longitude_direction, 'E');
    }

    #[test]
    fn test_interpret_gga_elevation() {
        let data = data(
            "GGA",
            &[
                "001043.00",
                "4404.14036",
                "N",
                "12118.85961",
                "W",
                "1",
                "12",
                "0.98",
                "1113.0",
                "M",
                "-21.3",
                "M",
                "",
                "",
            ],
        );
        let request = interpret(&data).unwrap();
        assert_eq!(request.elevation, "1113.0");
    }

    #[test]
    fn test_interpret_gga_without_elevation_marker() {
        let data = data("GGA", &["001043.00", "4404.14036", "N", "12118.85961", "W"]);
        assert_eq!(
            interpret(&data),
            Err(Error::NotFound {
                marker: "M".to_string()
            })
        );
    }

    #[test]
    fn test_interpret_unsupported_format() {
        let data = data("VTG", &["4916.45", "N", "12311.12", "W"]);
        assert_eq!(
            interpret(&data),
            Err(Error::UnsupportedFormat("VTG".to_string()))
        );
    }

    #[test]
    fn test_interpret_insufficient_fields() {
        let data = data("GLL", &["4916.45", "N", "12311.12"]);
        assert_eq!(
            interpret(&data),
            Err(Error::InsufficientFields {
                found: 3,
                required: MIN_DATA_FIELDS
            })
        );
    }

    #[test]
    fn test_interpret_missing_direction() {
        let data = data("GLL", &["4916.45", "N", "12311.12", "X"]);
        assert_eq!(
            interpret(&data),
            Err(Error::NotFound {
                marker: "W".to_string()
            })
        );
    }

    #[test]
    fn test_interpret_custom_registry() {
        let registry = FormatRegistry::empty()
            .with_format(SentenceFormat::new("GNS").unwrap().with_elevation("M").unwrap());

        let gns = data("GNS", &["4916.45", "N", "12311.12", "W", "12.5", "M"]);
        let request = registry.interpret(&gns).unwrap();
        assert_eq!(request.elevation, "12.5");

        let gll = data("GLL", &["4916.45", "N", "12311.12", "W"]);
        assert!(matches!(
            registry.interpret(&gll),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
