//! # NMEA 0183 Sentence Framing
//!
//! This module validates and splits raw GPS sentences of the form
//! `$GPxxx,D1,D2,...,Dn*CC`.
//!
//! [`is_well_formed`] is the gate every line goes through first. The other
//! functions here assume a line already passed it and panic otherwise.

use nom::{
    AsBytes, IResult, Parser,
    bytes::complete::{tag, take, take_till, take_until, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, verify},
    multi::separated_list0,
    number::complete::hex_u32,
    sequence::preceded,
};

use crate::format::FORMAT_CODE_LEN;

/// Shortest line that can be a well-formed sentence.
pub const MIN_SENTENCE_LEN: usize = 10;

/// Every accepted sentence starts with this prefix: start delimiter and GPS talker ID.
pub const SENTENCE_PREFIX: &str = "$GP";

/// Length of the `*CC` checksum suffix.
const CHECKSUM_SUFFIX_LEN: usize = 3;

/// The format code and data fields of a well-formed sentence.
///
/// Borrows from the raw line it was split from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceData<'a> {
    /// Three letter format code, e.g. `GGA`
    pub format: &'a str,
    /// Comma separated data fields in order of appearance, empty fields included
    pub data_fields: Vec<&'a str>,
}

/// Structural pieces of a well-formed line.
struct Frame<'a> {
    /// Everything between `$` and `*`, the bytes covered by the checksum
    content: &'a str,
    /// Everything after the format code and before `*`
    body: &'a str,
    format: &'a str,
    checksum: u8,
}

impl<'a> Frame<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        if line.len() < MIN_SENTENCE_LEN {
            return None;
        }

        // Only bounds the count, a missing `$` or `*` is caught below.
        let count = |needle: u8| line.bytes().filter(|&b| b == needle).count();
        if count(b'*') > 1 || count(b'$') > 1 {
            return None;
        }

        let split = line.len() - CHECKSUM_SUFFIX_LEN;
        if !line.is_char_boundary(split) {
            return None;
        }
        let (head, tail) = line.split_at(split);

        let (body, format) = header(head).ok()?;
        let (_, checksum) = checksum_suffix(tail).ok()?;

        Some(Self {
            content: &head[1..],
            body,
            format,
            checksum,
        })
    }
}

/// Parses `$GP` followed by the alphabetic format code.
fn header(i: &str) -> IResult<&str, &str> {
    preceded(
        tag(SENTENCE_PREFIX),
        verify(take(FORMAT_CODE_LEN), |code: &str| {
            code.bytes().all(|b| b.is_ascii_alphabetic())
        }),
    )
    .parse(i)
}

/// Parses the `*CC` suffix, accepting upper and lower case hex digits.
fn checksum_suffix(i: &str) -> IResult<&str, u8> {
    all_consuming(preceded(
        char('*'),
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
    ))
    .and_then(hex_u32)
    .map(|cc| cc as u8)
    .parse(i)
}

/// Parses the data fields following the first comma.
fn data_fields(i: &str) -> IResult<&str, Vec<&str>> {
    preceded(
        (take_until(","), char(',')),
        separated_list0(char(','), take_till(|c: char| c == ',')),
    )
    .parse(i)
}

/// Checks whether a raw line is a structurally valid GPS sentence.
///
/// A line is well-formed when all of the following hold:
/// - it is at least [`MIN_SENTENCE_LEN`] bytes long
/// - it contains at most one `$` and at most one `*`
/// - it starts with [`SENTENCE_PREFIX`]
/// - the three characters after the prefix are ASCII letters
/// - the third byte from the end is `*`
/// - the last two bytes are hexadecimal digits (either case)
///
/// This never panics, whatever the input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::is_well_formed;
///
/// assert!(is_well_formed("$GPGLL,5425.32,N,106.92,W,82808*64"));
/// assert!(is_well_formed("$GPGLL,5425.32,N,106.92,W,82808*6f"));
/// assert!(!is_well_formed("$GPGLL*64"));                          // (too short)
/// assert!(!is_well_formed("$GPG1L,5425.32,N,106.92,W,82808*64")); // (non-alphabetic format)
/// assert!(!is_well_formed("$GPGLL,5425.32,N,106.92,W,82808*6G")); // (non-hex checksum)
/// assert!(!is_well_formed("$GPGLL,5425.32,N,106.92,W,82808*64\r"));
/// ```
pub fn is_well_formed(line: &str) -> bool {
    Frame::parse(line).is_some()
}

/// Checks whether the checksum of a well-formed sentence is correct.
///
/// The checksum is recomputed over every byte between `$` and `*` (both
/// excluded) and compared with the two hex digits after `*`.
///
/// # Panics
///
/// Panics if `line` is not well-formed, see [`is_well_formed`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::has_correct_checksum;
///
/// assert!(has_correct_checksum("$GPGLL,5425.32,N,106.92,W,82808*64"));
/// assert!(!has_correct_checksum("$GPGLL,5425.32,N,106.92,W,82808*65"));
/// ```
pub fn has_correct_checksum(line: &str) -> bool {
    let (expected, found) = sentence_checksums(line);
    expected == found
}

/// Returns the calculated and the transmitted checksum of a well-formed sentence,
/// in that order.
///
/// # Panics
///
/// Panics if `line` is not well-formed, see [`is_well_formed`].
pub fn sentence_checksums(line: &str) -> (u8, u8) {
    let Some(frame) = Frame::parse(line) else {
        panic!("checksum verification requires a well-formed sentence, got {line:?}");
    };

    (checksum(frame.content), frame.checksum)
}

/// Splits a well-formed sentence into its format code and data fields.
///
/// The data fields are everything after the first comma up to the `*`,
/// split on commas. Empty fields are kept. A sentence without any comma has
/// no data fields, while a sentence whose only comma precedes `*` has a
/// single empty one.
///
/// # Panics
///
/// Panics if `line` is not well-formed, see [`is_well_formed`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::split_sentence;
///
/// let data = split_sentence("$GPGLL,5425.32,N,106.92,W,,82808*64");
/// assert_eq!(data.format, "GLL");
/// assert_eq!(data.data_fields, ["5425.32", "N", "106.92", "W", "", "82808"]);
/// ```
pub fn split_sentence(line: &str) -> SentenceData<'_> {
    let Some(frame) = Frame::parse(line) else {
        panic!("sentence splitting requires a well-formed sentence, got {line:?}");
    };

    let data_fields = match data_fields(frame.body) {
        Ok((_, fields)) => fields,
        // No comma, no data fields.
        Err(_) => Vec::new(),
    };

    SentenceData {
        format: frame.format,
        data_fields,
    }
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The NMEA 0183 checksum is calculated by performing an XOR (exclusive OR) operation
/// on all bytes in the message content. This includes everything between the '$' prefix
/// and the '*' checksum delimiter, but excludes both the '$' and '*' characters themselves.
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// assert_eq!(checksum(b"GPGGA,123456,data".as_slice()), 0x41);
/// ```
pub fn checksum<I>(input: I) -> u8
where
    I: AsBytes,
{
    input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_log::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}
