//! # Log Parsing
//!
//! Runs every line of a GPS log through the sentence pipeline and collects
//! the positions of the lines that make it to the end:
//!
//! 1. the line must be well-formed
//! 2. its checksum must match
//! 3. its format must be registered
//! 4. its fields must interpret as a position
//! 5. the position constructor must accept the result
//!
//! A line failing any step is skipped. Parsing a log never stops early
//! because of a bad line.

use std::io::BufRead;

use tracing::debug;

use crate::{
    Error, FromPositionRequest, ParserConfig, SentenceError, is_well_formed, sentence_checksums,
    split_sentence,
};

/// Extracts positions from GPS logs according to a [`ParserConfig`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::{LogParser, Position};
///
/// let log = "\
/// $GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47
/// not a sentence
/// $GPGLL,4916.45,N,12311.12,W,225444,A*31
/// ";
///
/// let positions: Vec<Position> = LogParser::default().parse_log(log.as_bytes()).unwrap();
/// assert_eq!(positions.len(), 2);
/// assert_eq!(positions[0].elevation, 545.4);
/// assert_eq!(positions[1].elevation, 0.0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct LogParser {
    config: ParserConfig,
}

impl LogParser {
    /// Creates a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration of this parser.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Runs a single line through the whole pipeline.
    ///
    /// Unlike [`parse_log`](Self::parse_log), this reports why a line would be
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_log::{Error, LogParser, PositionRecord, SentenceError};
    ///
    /// let parser = LogParser::default();
    ///
    /// let result = parser.parse_sentence::<PositionRecord>("$GPGLL,4916.45,N,12311.12,W,225444,A*30");
    /// assert_eq!(result, Err(SentenceError::ChecksumMismatch { expected: 0x31, found: 0x30 }));
    ///
    /// let result = parser.parse_sentence::<PositionRecord>("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48");
    /// assert_eq!(result, Err(SentenceError::Interpret(Error::UnsupportedFormat("VTG".into()))));
    /// ```
    pub fn parse_sentence<P>(&self, line: &str) -> Result<P, SentenceError<P::Error>>
    where
        P: FromPositionRequest,
    {
        let line = self.config.line_ending.strip(line);

        if !is_well_formed(line) {
            return Err(SentenceError::Malformed);
        }

        let data = split_sentence(line);

        let (expected, found) = sentence_checksums(line);
        if expected != found {
            return Err(SentenceError::ChecksumMismatch { expected, found });
        }

        if !self.config.registry.is_supported_format(data.format) {
            return Err(Error::UnsupportedFormat(data.format.to_string()).into());
        }

        let request = self.config.registry.interpret(&data)?;

        P::from_request(&request).map_err(SentenceError::Position)
    }

    /// Parses in-memory lines, keeping the positions of the valid ones in order.
    ///
    /// Lines are taken as they are, without splitting on newlines.
    pub fn parse_lines<P, I>(&self, lines: I) -> Vec<P>
    where
        P: FromPositionRequest,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut positions = Vec::new();
        let mut read = 0usize;

        for line in lines {
            read += 1;
            self.collect(line.as_ref(), &mut positions);
        }

        debug!(lines = read, positions = positions.len(), "parsed GPS log");
        positions
    }

    /// Reads a log to the end, keeping the positions of the valid lines in order.
    ///
    /// Lines are separated by `\n`. A line that is not valid UTF-8 is skipped
    /// like any other malformed line.
    ///
    /// # Errors
    ///
    /// Only fails if reading from `reader` fails. Invalid lines never cause an error.
    pub fn parse_log<P, R>(&self, reader: R) -> std::io::Result<Vec<P>>
    where
        P: FromPositionRequest,
        R: BufRead,
    {
        let mut positions = Vec::new();
        let mut read = 0usize;

        for line in reader.split(b'\n') {
            let line = line?;
            read += 1;

            if let Ok(line) = std::str::from_utf8(&line) {
                self.collect(line, &mut positions);
            }
        }

        debug!(lines = read, positions = positions.len(), "parsed GPS log");
        Ok(positions)
    }

    /// Skips a line on any kind of failure, otherwise keeps its position.
    fn collect<P>(&self, line: &str, positions: &mut Vec<P>)
    where
        P: FromPositionRequest,
    {
        match self.parse_sentence::<P>(line) {
            Ok(position) => positions.push(position),
            Err(
                SentenceError::Malformed
                | SentenceError::ChecksumMismatch { .. }
                | SentenceError::Interpret(
                    Error::UnsupportedFormat(_)
                    | Error::InsufficientFields { .. }
                    | Error::NotFound { .. }
                    | Error::NoPrecedingValue { .. }
                    | Error::InvalidFormatCode(_)
                    | Error::InvalidElevationMarker(_),
                )
                | SentenceError::Position(_),
            ) => {}
        }
    }
}

/// Reads a log with the default configuration, see [`LogParser::parse_log`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::{PositionRecord, parse_log};
///
/// let positions: Vec<PositionRecord> = parse_log("".as_bytes()).unwrap();
/// assert!(positions.is_empty());
/// ```
pub fn parse_log<P, R>(reader: R) -> std::io::Result<Vec<P>>
where
    P: FromPositionRequest,
    R: BufRead,
{
    LogParser::default().parse_log(reader)
}

/// Parses in-memory lines with the default configuration, see [`LogParser::parse_lines`].
pub fn parse_lines<P, I>(lines: I) -> Vec<P>
where
    P: FromPositionRequest,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    LogParser::default().parse_lines(lines)
}
