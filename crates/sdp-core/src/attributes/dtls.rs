//! SDP DTLS Attribute Parsers
//!
//! Implements parsers for the DTLS-SRTP attributes:
//! - `a=fingerprint` (RFC 8122)
//! - `a=setup` (RFC 4145)
//!
//! Fingerprints are only checked for shape. Verifying them against a
//! certificate is up to the DTLS layer.

use crate::attributes::common::{parse_all, single_word, token};
use crate::error::{Error, Result};
use crate::types::{Attribute, Fingerprint, SetupRole};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char, space1},
    combinator::{recognize, verify},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

/// Hash functions registered for certificate fingerprints
static VALID_HASH_FUNCTIONS: [&str; 7] = ["sha-1", "sha-224", "sha-256", "sha-384", "sha-512", "md5", "md2"];

/// Parser for hash function part of fingerprint
fn hash_function_parser(input: &str) -> IResult<&str, &str> {
    verify(token, |hash: &str| {
        VALID_HASH_FUNCTIONS.contains(&hash.to_ascii_lowercase().as_str())
    })(input)
}

/// Parser for fingerprint value, two hex digits per byte separated by ':'
fn fingerprint_value_parser(input: &str) -> IResult<&str, &str> {
    recognize(separated_list1(
        char(':'),
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
    ))(input)
}

/// Parser for complete fingerprint attribute
fn fingerprint_parser(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(hash_function_parser, space1, fingerprint_value_parser)(input)
}

/// Parses fingerprint attribute: a=fingerprint:<hash-function> <fingerprint>
pub fn parse_fingerprint(value: &str) -> Result<Attribute> {
    let (hash_function, fingerprint) =
        parse_all("fingerprint", value.trim(), fingerprint_parser, "invalid fingerprint")?;

    Ok(Attribute::Fingerprint(Fingerprint {
        hash_function: hash_function.to_ascii_lowercase(),
        value: fingerprint.to_ascii_uppercase(),
    }))
}

/// Parses setup attribute: a=setup:<role>
pub fn parse_setup(value: &str) -> Result<Attribute> {
    let role = single_word("setup", value)?;
    let role = match role.to_ascii_lowercase().as_str() {
        "active" => SetupRole::Active,
        "passive" => SetupRole::Passive,
        "actpass" => SetupRole::ActPass,
        "holdconn" => SetupRole::HoldConn,
        _ => {
            return Err(Error::malformed_attribute(
                "setup",
                format!("invalid setup role {:?}", role),
            ))
        }
    };
    Ok(Attribute::Setup(role))
}
