//! SDP line parsing utilities
//!
//! This module provides the lexical layer of the parser according to RFC 8866.
//! Each SDP line has the format `<type>=<value>` where type is a single letter:
//! - v= (Protocol Version)
//! - o= (Origin)
//! - s= (Session Name)
//! - i= (Session Information / Media Title) - optional
//! - u= (URI) - optional
//! - e= (Email Address) - optional
//! - p= (Phone Number) - optional
//! - c= (Connection Information) - optional
//! - b= (Bandwidth Information) - optional
//! - t= (Timing)
//! - r= (Repeat Times) - optional
//! - z= (Time Zones) - optional
//! - k= (Encryption Keys) - optional and deprecated
//! - a= (Attributes) - optional
//! - m= (Media Descriptions)
//!
//! Nothing here knows what the letters mean; that is the assembler's job.

use crate::error::{Error, Result};
use nom::{
    character::complete::{char, satisfy},
    combinator::rest,
    sequence::separated_pair,
    IResult,
};

/// One tokenized SDP line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdpLine<'a> {
    /// 1-based position in the input
    pub line_number: usize,
    pub line_type: char,
    /// Everything after `=`, untrimmed
    pub value: &'a str,
}

/// Parse an SDP line into its type letter and value
///
/// The value is returned as written; trailing whitespace is significant
/// for attributes kept verbatim.
///
/// # Examples
///
/// ```
/// use rvoip_sdp_core::parser::parse_sdp_line;
///
/// let (_, (key, value)) = parse_sdp_line("a=rtpmap:96 VP8/90000").unwrap();
/// assert_eq!(key, 'a');
/// assert_eq!(value, "rtpmap:96 VP8/90000");
///
/// assert!(parse_sdp_line("=0").is_err());
/// assert!(parse_sdp_line("vv=0").is_err());
/// ```
pub fn parse_sdp_line(input: &str) -> IResult<&str, (char, &str)> {
    separated_pair(satisfy(|c| c.is_ascii_alphabetic()), char('='), rest)(input)
}

/// Splits SDP text into typed lines
///
/// Accepts `\r\n` and `\n` line endings and a final line without a
/// terminator. The empty piece after a final terminator is dropped; any
/// other blank line is rejected (skipped with the `lenient_parsing`
/// feature).
pub fn tokenize(text: &str) -> Result<Vec<SdpLine<'_>>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut pieces: Vec<&str> = text.split('\n').collect();
    if text.ends_with('\n') {
        pieces.pop();
    }

    let mut lines = Vec::with_capacity(pieces.len());
    for (index, raw) in pieces.into_iter().enumerate() {
        let line_number = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.is_empty() && cfg!(feature = "lenient_parsing") {
            continue;
        }

        match parse_sdp_line(line) {
            Ok((_, (line_type, value))) => lines.push(SdpLine {
                line_number,
                line_type,
                value,
            }),
            Err(_) => {
                return Err(Error::MalformedLine {
                    line: line_number,
                    content: line.to_string(),
                })
            }
        }
    }

    Ok(lines)
}
