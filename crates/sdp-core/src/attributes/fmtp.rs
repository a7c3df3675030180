//! SDP Format Parameter (fmtp) Attribute Parser
//!
//! Implements parser for fmtp attributes as defined in RFC 8866.
//! Format: a=fmtp:<format> <format specific parameters>
//!
//! The parameter list has no fixed key set. It is split on `;` into
//! `key=value` (or bare `key`) entries kept in declaration order.

use crate::attributes::common::{parse_all, parse_payload_type, remainder, word};
use crate::error::{Error, Result};
use crate::types::{Attribute, FmtpParameter, FormatParameters};
use nom::{sequence::pair, IResult};

/// Parser for the complete fmtp attribute: <format> <parameters>
fn fmtp_parser(input: &str) -> IResult<&str, (&str, &str)> {
    pair(word, remainder)(input)
}

/// Splits a parameter list into its entries, dropping empty ones
fn parse_parameters(parameters: &str) -> Vec<FmtpParameter> {
    parameters
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => FmtpParameter {
                key: key.trim().to_string(),
                value: Some(value.trim().to_string()),
            },
            None => FmtpParameter {
                key: entry.to_string(),
                value: None,
            },
        })
        .collect()
}

/// Parses fmtp attribute: a=fmtp:<format> <format specific parameters>
pub fn parse_fmtp(value: &str) -> Result<Attribute> {
    let (format, parameters) =
        parse_all("fmtp", value.trim(), fmtp_parser, "invalid fmtp format")?;

    let payload_type = parse_payload_type("fmtp", format)?;
    let parameters = parse_parameters(parameters);
    if parameters.is_empty() {
        return Err(Error::malformed_attribute("fmtp", "empty format parameters"));
    }

    Ok(Attribute::Fmtp(FormatParameters {
        payload_type,
        parameters,
    }))
}
