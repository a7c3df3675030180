//! Common parsing utilities for SDP attributes
//!
//! Reusable nom parsers and conversions shared by the attribute parsers.
//! Grammars recognize numeric fields as raw words and convert them with
//! [`parse_number`], so a non-digit value is reported as
//! [`Error::InvalidNumber`] rather than as a grammar mismatch.

use crate::error::{Error, Result};
use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{space0, space1},
    combinator::{all_consuming, rest},
    multi::separated_list1,
    sequence::delimited,
    IResult,
};
use std::str::FromStr;

/// RFC 8866 `token-char`
pub fn is_token_char(c: char) -> bool {
    matches!(c,
        '\x21' | '\x23'..='\x27' | '\x2A'..='\x2B' | '\x2D'..='\x2E'
        | '0'..='9' | 'A'..='Z' | '\x5E'..='\x7E')
}

/// Parses a token (RFC 8866)
pub fn token(input: &str) -> IResult<&str, &str> {
    take_while1(is_token_char)(input)
}

/// Parses a run of non-whitespace characters
pub fn word(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_ascii_whitespace())(input)
}

/// Parses whitespace separated words, ignoring surrounding whitespace
pub fn words(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(space0, separated_list1(space1, word), space0)(input)
}

/// Parses everything after the first run of spaces
pub fn remainder(input: &str) -> IResult<&str, &str> {
    let (input, _) = space1(input)?;
    rest(input)
}

/// Runs `parser` over the whole of `input`
///
/// A failure or leftover input becomes a `MalformedAttribute` for `name`.
pub fn parse_all<'a, O, F>(name: &str, input: &'a str, parser: F, reason: &str) -> Result<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    match all_consuming(parser)(input) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(Error::malformed_attribute(name, format!("{}: {:?}", reason, input))),
    }
}

/// Converts an all-digit string into a number
///
/// Signs, whitespace and overflow are all rejected with `InvalidNumber`.
pub fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    let invalid = || Error::InvalidNumber {
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<T>().map_err(|_| invalid())
}

/// Parses an RTP payload type (0-127)
pub fn parse_payload_type(name: &str, value: &str) -> Result<u8> {
    let pt: u32 = parse_number("payload type", value)?;
    if pt > 127 {
        return Err(Error::malformed_attribute(
            name,
            format!("payload type {} out of range 0-127", pt),
        ));
    }
    Ok(pt as u8)
}

/// Rejects empty values and values containing whitespace
pub fn single_word<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::malformed_attribute(name, "empty value"));
    }
    if value.contains(|c: char| c.is_ascii_whitespace()) {
        return Err(Error::malformed_attribute(
            name,
            format!("unexpected whitespace in {:?}", value),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u16>("port", "54138").unwrap(), 54138);
        assert!(matches!(
            parse_number::<u16>("port", "9x"),
            Err(Error::InvalidNumber { field: "port", .. })
        ));
        assert!(parse_number::<u16>("port", "70000").is_err());
        assert!(parse_number::<u32>("priority", "-1").is_err());
        assert!(parse_number::<u32>("priority", "").is_err());
    }

    #[test]
    fn test_payload_type_range() {
        assert_eq!(parse_payload_type("rtpmap", "127").unwrap(), 127);
        assert!(matches!(
            parse_payload_type("rtpmap", "128"),
            Err(Error::MalformedAttribute { .. })
        ));
        assert!(matches!(
            parse_payload_type("rtpmap", "abc"),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_token_and_words() {
        assert_eq!(token("BUNDLE 0 1"), Ok((" 0 1", "BUNDLE")));
        assert_eq!(words(" a  b c ").unwrap().1, vec!["a", "b", "c"]);
        assert_eq!(remainder("  rest of it").unwrap().1, "rest of it");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(single_word("mid", " 0 ").unwrap(), "0");
        assert!(single_word("mid", "").is_err());
        assert!(single_word("mid", "a b").is_err());
    }
}
