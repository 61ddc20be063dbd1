//! # Marker Field Lookup
//!
//! NMEA sentences put a unit or direction marker right after the value it
//! qualifies (`4916.45,N` or `545.4,M`). These helpers find a marker among the
//! data fields and return the value in front of it.

use crate::{Error, SentenceData};

/// A value together with the direction marker that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectedValue<'a> {
    /// The field preceding the direction marker
    pub value: &'a str,
    /// One of `N`, `S`, `E`, `W`
    pub direction: char,
}

/// Returns the data field immediately preceding the first occurrence of `marker`.
///
/// Markers are compared by exact field equality, not by prefix.
///
/// # Errors
///
/// - [`Error::NotFound`] if no data field equals `marker`
/// - [`Error::NoPrecedingValue`] if the first match is the first data field
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::{Error, SentenceData, value_before};
///
/// let data = SentenceData {
///     format: "GGA",
///     data_fields: vec!["545.4", "M", "46.9", "M"],
/// };
/// assert_eq!(value_before(&data, "M"), Ok("545.4"));
/// assert!(matches!(value_before(&data, "N"), Err(Error::NotFound { .. })));
/// ```
pub fn value_before<'a>(data: &SentenceData<'a>, marker: &str) -> Result<&'a str, Error> {
    let index = data
        .data_fields
        .iter()
        .position(|&field| field == marker)
        .ok_or_else(|| Error::NotFound {
            marker: marker.to_string(),
        })?;

    match index.checked_sub(1) {
        Some(preceding) => Ok(data.data_fields[preceding]),
        None => Err(Error::NoPrecedingValue {
            marker: marker.to_string(),
        }),
    }
}

/// Resolves a value qualified by one of two opposite direction markers.
///
/// The positive marker is always tried first. When it is present its
/// preceding value is returned with `positive`, otherwise the negative marker
/// is looked up and its value returned with `negative`.
///
/// # Errors
///
/// Fails like [`value_before`]: with the positive marker's error if it is
/// present without a preceding value, with the negative marker's error
/// otherwise.
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::{DirectedValue, SentenceData, resolve_direction};
///
/// let data = SentenceData {
///     format: "GLL",
///     data_fields: vec!["4916.45", "N", "12311.12", "W"],
/// };
///
/// let longitude = resolve_direction(&data, "E", "W", 'E', 'W').unwrap();
/// assert_eq!(longitude, DirectedValue { value: "12311.12", direction: 'W' });
/// ```
pub fn resolve_direction<'a>(
    data: &SentenceData<'a>,
    positive_marker: &str,
    negative_marker: &str,
    positive: char,
    negative: char,
) -> Result<DirectedValue<'a>, Error> {
    let has_positive = data
        .data_fields
        .iter()
        .any(|&field| field == positive_marker);

    let (marker, direction) = if has_positive {
        (positive_marker, positive)
    } else {
        (negative_marker, negative)
    };

    let value = value_before(data, marker)?;

    Ok(DirectedValue { value, direction })
}
