//! # NMEA 0183 Log Parser
//!
//! This library extracts geographic positions from GPS logs made of NMEA 0183
//! sentences with the format:
//! `$GPxxx,D1,D2,...,Dn*CC`
//!
//! Each line goes through the same pipeline:
//! - Structural validation ([`is_well_formed`])
//! - Checksum verification ([`has_correct_checksum`])
//! - Splitting into format code and data fields ([`split_sentence`])
//! - Format lookup and field interpretation ([`FormatRegistry`], [`interpret`])
//! - Position construction ([`FromPositionRequest`])
//!
//! Lines that fail any step are left out of the result, they never abort parsing.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_log::{PositionRecord, parse_log};
//!
//! let log = "\
//! $GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,W*7A
//! $GPGLL,4916.45,N,12311.12,W,225444,A*30
//! ";
//!
//! let positions: Vec<PositionRecord> = parse_log(log.as_bytes()).unwrap();
//!
//! // The GLL sentence has a bad checksum.
//! assert_eq!(positions.len(), 1);
//! assert_eq!(positions[0].latitude, "4916.45");
//! assert_eq!(positions[0].elevation, "0");
//! ```

#![warn(missing_docs)]

mod config;
pub mod error;
mod fields;
mod format;
mod interpret;
mod log;
mod nmea0183;
mod position;

pub use config::{LineEndingMode, ParserConfig};
pub use error::{Error, SentenceError};
pub use fields::{DirectedValue, resolve_direction, value_before};
pub use format::{FORMAT_CODE_LEN, FormatRegistry, SentenceFormat, is_supported_format};
pub use interpret::{DEFAULT_ELEVATION, MIN_DATA_FIELDS, PositionRequest, interpret};
pub use log::{LogParser, parse_lines, parse_log};
pub use nmea0183::*;
pub use position::{FromPositionRequest, Position, PositionError, PositionRecord};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
