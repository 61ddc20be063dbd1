//! # Parser Configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::FormatRegistry;

/// Defines how the log parser treats a carriage return at the end of a line.
///
/// NMEA 0183 sentences are transmitted with `\r\n` endings, but logs written
/// on Unix systems usually only keep the `\n` the lines are split on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// A trailing `\r` is part of the line.
    ///
    /// Since a sentence must end with its checksum digits, a line ending with
    /// `\r` is malformed and skipped.
    #[default]
    Forbidden,

    /// A single trailing `\r` is removed before the line is validated.
    ///
    /// Use this mode for logs captured straight from a serial port.
    Tolerated,
}

impl LineEndingMode {
    /// Applies the mode to a line that has already lost its `\n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_log::LineEndingMode;
    ///
    /// assert_eq!(LineEndingMode::Tolerated.strip("$GPGLL*00\r"), "$GPGLL*00");
    /// assert_eq!(LineEndingMode::Forbidden.strip("$GPGLL*00\r"), "$GPGLL*00\r");
    /// ```
    pub fn strip(self, line: &str) -> &str {
        match self {
            LineEndingMode::Forbidden => line,
            LineEndingMode::Tolerated => line.strip_suffix('\r').unwrap_or(line),
        }
    }
}

/// Configuration of a [`LogParser`](crate::LogParser).
///
/// ```rust
/// use nmea0183_log::{FormatRegistry, LineEndingMode, ParserConfig, SentenceFormat};
///
/// let config = ParserConfig {
///     registry: FormatRegistry::default().with_format(SentenceFormat::new("GNS").unwrap()),
///     line_ending: LineEndingMode::Tolerated,
/// };
/// assert!(config.registry.is_supported_format("GNS"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Sentence formats positions are extracted from
    pub registry: FormatRegistry,
    /// Handling of a trailing carriage return
    pub line_ending: LineEndingMode,
}
