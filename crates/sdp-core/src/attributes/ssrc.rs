//! SDP SSRC Attribute Parsers
//!
//! Implements parsers for source-specific media attributes (RFC 5576):
//! - `a=ssrc:<ssrc-id> <attribute>[:<value>]`
//! - `a=ssrc-group:<semantics> <ssrc-id> ...`
//!
//! Group members refer to `a=ssrc` lines of the same media section by id.

use crate::attributes::common::{parse_all, parse_number, remainder, token, word, words};
use crate::error::{Error, Result};
use crate::types::{Attribute, Ssrc, SsrcGroup};
use nom::{sequence::pair, IResult};

/// Parser for `<ssrc-id> <attribute>[:<value>]`, split at the first space
fn ssrc_parser(input: &str) -> IResult<&str, (&str, &str)> {
    pair(word, remainder)(input)
}

/// Parses ssrc attribute: a=ssrc:<ssrc-id> <attribute>[:<value>]
pub fn parse_ssrc(value: &str) -> Result<Attribute> {
    let (id, attribute) = parse_all("ssrc", value.trim(), ssrc_parser, "invalid ssrc format")?;
    let ssrc_id = parse_number("ssrc", id)?;

    // The value may itself contain spaces and colons (msid:<stream> <track>)
    let (name, value) = match attribute.split_once(':') {
        Some((name, value)) => (name.trim(), Some(value.trim().to_string())),
        None => (attribute.trim(), None),
    };
    if token(name).map(|(rest, _)| !rest.is_empty()).unwrap_or(true) {
        return Err(Error::malformed_attribute(
            "ssrc",
            format!("invalid source attribute name {:?}", name),
        ));
    }

    Ok(Attribute::Ssrc(Ssrc {
        ssrc_id,
        attribute: name.to_string(),
        value,
    }))
}

/// Parses ssrc-group attribute: a=ssrc-group:<semantics> *(SP <ssrc-id>)
pub fn parse_ssrc_group(value: &str) -> Result<Attribute> {
    let fields = parse_all("ssrc-group", value, words, "invalid ssrc-group format")?;
    let (semantics, ids) = fields
        .split_first()
        .ok_or_else(|| Error::malformed_attribute("ssrc-group", "missing semantics"))?;

    if ids.is_empty() {
        return Err(Error::malformed_attribute(
            "ssrc-group",
            format!("group {} lists no sources", semantics),
        ));
    }

    let ssrc_ids = ids
        .iter()
        .map(|id| parse_number("ssrc", id))
        .collect::<Result<Vec<u32>>>()?;

    Ok(Attribute::SsrcGroup(SsrcGroup {
        semantics: semantics.to_string(),
        ssrc_ids,
    }))
}
