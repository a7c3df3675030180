//! SDP Header Extension Mapping (extmap) Attribute Parser
//!
//! Implements parser for extmap attributes as defined in RFC 8285.
//! Format: a=extmap:<value>[/<direction>] <URI> [<extension attributes>]

use crate::attributes::common::{parse_all, parse_number, remainder, word};
use crate::error::{Error, Result};
use crate::types::{Attribute, ExtMap, MediaDirection};
use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{char, space1},
    combinator::opt,
    sequence::{preceded, tuple},
    IResult,
};

/// Raw extmap fields: id, direction, URI, extension attributes
fn extmap_parser(input: &str) -> IResult<&str, (&str, Option<&str>, &str, Option<&str>)> {
    tuple((
        take_while1(|c: char| c != '/' && !c.is_ascii_whitespace()),
        opt(preceded(char('/'), take_till1(|c: char| c.is_ascii_whitespace()))),
        preceded(space1, word),
        opt(remainder),
    ))(input)
}

/// Valid extension ids: 1-255, plus 4096-4351 which offers may use
fn is_valid_id(id: u16) -> bool {
    (1..=255).contains(&id) || (4096..=4351).contains(&id)
}

/// Parses extmap attribute: a=extmap:<value>[/<direction>] <URI> [<extension attributes>]
pub fn parse_extmap(value: &str) -> Result<Attribute> {
    let (id, direction, uri, extension_attributes) =
        parse_all("extmap", value.trim(), extmap_parser, "invalid extmap format")?;

    let id: u16 = parse_number("extmap id", id)?;
    if !is_valid_id(id) {
        return Err(Error::malformed_attribute(
            "extmap",
            format!("extension id {} out of range", id),
        ));
    }

    let direction = direction
        .map(|d| {
            MediaDirection::from_name(d).ok_or_else(|| {
                Error::malformed_attribute("extmap", format!("invalid direction {:?}", d))
            })
        })
        .transpose()?;

    Ok(Attribute::ExtMap(ExtMap {
        id,
        direction,
        uri: uri.to_string(),
        extension_attributes: extension_attributes
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string),
    }))
}
