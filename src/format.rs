//! # Sentence Format Registry
//!
//! The set of sentence formats the interpreter accepts. The registry is plain
//! data: supporting another format means adding an entry, not a code path.

use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Length of an NMEA sentence format code, e.g. `GGA`.
pub const FORMAT_CODE_LEN: usize = 3;

/// A sentence format accepted by the interpreter.
///
/// A format is identified by its three letter code. Formats that carry an
/// elevation also name the marker field that follows the elevation value
/// (`M` for metres in `GGA`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawSentenceFormat")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceFormat {
    code: heapless::String<FORMAT_CODE_LEN>,
    elevation_marker: Option<heapless::String<FORMAT_CODE_LEN>>,
}

impl SentenceFormat {
    /// Creates a format without an elevation field.
    ///
    /// Fails with [`Error::InvalidFormatCode`] unless `code` is exactly three
    /// ASCII letters.
    ///
    /// ```rust
    /// use nmea0183_log::SentenceFormat;
    ///
    /// assert!(SentenceFormat::new("VTG").is_ok());
    /// assert!(SentenceFormat::new("VT").is_err());
    /// assert!(SentenceFormat::new("V7G").is_err());
    /// ```
    pub fn new(code: &str) -> Result<Self, Error> {
        if code.len() != FORMAT_CODE_LEN || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidFormatCode(code.to_string()));
        }

        let code = short_string(code).ok_or_else(|| Error::InvalidFormatCode(code.to_string()))?;

        Ok(Self {
            code,
            elevation_marker: None,
        })
    }

    /// Marks the format as carrying an elevation, found right before `marker`.
    ///
    /// Empty markers and markers longer than three characters are rejected
    /// with [`Error::InvalidElevationMarker`].
    ///
    /// ```rust
    /// use nmea0183_log::{Error, SentenceFormat};
    ///
    /// let gga = SentenceFormat::new("GGA").unwrap();
    /// assert!(gga.clone().with_elevation("M").is_ok());
    /// assert_eq!(gga.with_elevation(""), Err(Error::InvalidElevationMarker("".into())));
    /// ```
    pub fn with_elevation(mut self, marker: &str) -> Result<Self, Error> {
        let marker = short_string(marker)
            .filter(|marker| !marker.is_empty())
            .ok_or_else(|| Error::InvalidElevationMarker(marker.to_string()))?;

        self.elevation_marker = Some(marker);
        Ok(self)
    }

    /// The three letter format code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The marker following the elevation value, if the format carries one.
    pub fn elevation_marker(&self) -> Option<&str> {
        self.elevation_marker.as_deref()
    }
}

fn short_string(s: &str) -> Option<heapless::String<FORMAT_CODE_LEN>> {
    let mut short = heapless::String::new();
    short.push_str(s).ok()?;
    Some(short)
}

/// Unchecked shape of a [`SentenceFormat`] as found in configuration files.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSentenceFormat {
    code: String,
    #[serde(default)]
    elevation_marker: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSentenceFormat> for SentenceFormat {
    type Error = Error;

    fn try_from(raw: RawSentenceFormat) -> Result<Self, Self::Error> {
        let format = SentenceFormat::new(&raw.code)?;
        match raw.elevation_marker {
            Some(marker) => format.with_elevation(&marker),
            None => Ok(format),
        }
    }
}

/// An ordered collection of supported sentence formats.
///
/// Membership is what matters, order only decides which entry wins when a
/// code is registered twice (the first one).
///
/// The default registry holds the formats that carry a position:
///
/// | Code | Sentence                                   | Elevation      |
/// |------|--------------------------------------------|----------------|
/// | GLL  | Geographic Position - Latitude/Longitude   | -              |
/// | GGA  | Global Positioning System Fix Data         | before `M`     |
/// | RMC  | Recommended Minimum Navigation Information | -              |
///
/// ```rust
/// use nmea0183_log::{FormatRegistry, SentenceFormat};
///
/// let registry = FormatRegistry::default();
/// assert!(registry.is_supported_format("GGA"));
/// assert!(!registry.is_supported_format("VTG"));
///
/// let registry = registry.with_format(SentenceFormat::new("VTG").unwrap());
/// assert!(registry.is_supported_format("VTG"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRegistry {
    formats: Vec<SentenceFormat>,
}

impl FormatRegistry {
    /// Creates a registry that supports no format at all.
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Creates a registry from a list of formats.
    pub fn from_formats(formats: impl IntoIterator<Item = SentenceFormat>) -> Self {
        Self {
            formats: formats.into_iter().collect(),
        }
    }

    /// Adds a format to the registry.
    pub fn with_format(mut self, format: SentenceFormat) -> Self {
        self.formats.push(format);
        self
    }

    /// Returns `true` if `code` names a registered format.
    pub fn is_supported_format(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Looks up the registered format with the given code.
    pub fn get(&self, code: &str) -> Option<&SentenceFormat> {
        self.formats.iter().find(|format| format.code() == code)
    }

    /// Iterates over the registered formats in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &SentenceFormat> {
        self.formats.iter()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let formats = [("GLL", None), ("GGA", Some("M")), ("RMC", None)]
            .into_iter()
            .filter_map(|(code, elevation_marker)| {
                let format = SentenceFormat::new(code).ok()?;
                match elevation_marker {
                    Some(marker) => format.with_elevation(marker).ok(),
                    None => Some(format),
                }
            });

        Self::from_formats(formats)
    }
}

static DEFAULT_REGISTRY: LazyLock<FormatRegistry> = LazyLock::new(FormatRegistry::default);

/// The shared instance of the default [`FormatRegistry`].
pub(crate) fn default_registry() -> &'static FormatRegistry {
    &DEFAULT_REGISTRY
}

/// Returns `true` if `code` is supported by the default [`FormatRegistry`].
///
/// ```rust
/// use nmea0183_log::is_supported_format;
///
/// assert!(is_supported_format("GLL"));
/// assert!(!is_supported_format("GSV"));
/// ```
pub fn is_supported_format(code: &str) -> bool {
    default_registry().is_supported_format(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = FormatRegistry::default();

        for code in ["GLL", "GGA", "RMC"] {
            assert!(registry.is_supported_format(code), "{code}");
        }
        for code in ["", "GSV", "gga", "GGAX", "XXX"] {
            assert!(!registry.is_supported_format(code), "{code}");
        }

        assert_eq!(registry.get("GGA").unwrap().elevation_marker(), Some("M"));
        assert_eq!(registry.get("GLL").unwrap().elevation_marker(), None);
        assert_eq!(registry.get("RMC").unwrap().elevation_marker(), None);
    }

    #[test]
    fn test_format_code_validation() {
        assert_eq!(
            SentenceFormat::new("GG1"),
            Err(Error::InvalidFormatCode("GG1".to_string()))
        );
        assert!(SentenceFormat::new("").is_err());
        assert!(SentenceFormat::new("ABCD").is_err());
        assert!(SentenceFormat::new("ÄBC").is_err());
        assert!(SentenceFormat::new("vtg").is_ok());
        assert!(
            SentenceFormat::new("GNS")
                .unwrap()
                .with_elevation("METRES")
                .is_err()
        );
    }

    #[test]
    fn test_elevation_marker_validation() {
        let gga = SentenceFormat::new("GGA").unwrap();

        for marker in ["", "METRES"] {
            assert_eq!(
                gga.clone().with_elevation(marker),
                Err(Error::InvalidElevationMarker(marker.to_string())),
                "Failed: {marker:?}"
            );
        }

        let gga = gga.with_elevation("M").unwrap();
        assert_eq!(gga.elevation_marker(), Some("M"));
    }

    #[test]
    fn test_free_is_supported_format() {
        for code in ["GLL", "GGA", "RMC"] {
            assert!(is_supported_format(code), "Failed: {code:?}");
        }
        for code in ["", "GSV", "gll", "GLLX", "G1"] {
            assert!(!is_supported_format(code), "Failed: {code:?}");
        }

        assert_eq!(default_registry(), &FormatRegistry::default());
        assert!(std::ptr::eq(default_registry(), default_registry()));
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatRegistry::empty();
        assert!(!registry.is_supported_format("GGA"));
        assert_eq!(registry.formats().count(), 0);
    }
}
