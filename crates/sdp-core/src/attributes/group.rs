//! SDP Group Attribute Parser
//!
//! Implements parser for group attributes as defined in RFC 5888.
//! Format: a=group:<semantics> <identification-tag> ...

use crate::attributes::common::{parse_all, token};
use crate::error::Result;
use crate::types::{Attribute, Group};
use nom::{
    character::complete::{space0, space1},
    multi::many0,
    sequence::{pair, preceded, terminated},
    IResult,
};

/// Main parser for group attribute: semantics followed by zero or more tags
fn group_parser(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    terminated(pair(token, many0(preceded(space1, token))), space0)(input)
}

/// Parses group attribute: a=group:<semantics> *(SP <identification-tag>)
pub fn parse_group(value: &str) -> Result<Attribute> {
    let (semantics, mids) = parse_all("group", value.trim_start(), group_parser, "invalid group format")?;
    Ok(Attribute::Group(Group {
        semantics: semantics.to_string(),
        mids: mids.into_iter().map(str::to_string).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(value: &str) -> Group {
        match parse_group(value) {
            Ok(Attribute::Group(group)) => group,
            other => panic!("Expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bundle_group() {
        let group = group("BUNDLE 0 1 data");
        assert_eq!(group.semantics, "BUNDLE");
        assert_eq!(group.mids, vec!["0", "1", "data"]);
    }

    #[test]
    fn test_parse_lip_sync_group() {
        let group = group("LS audio video");
        assert_eq!(group.semantics, "LS");
        assert_eq!(group.mids.len(), 2);
    }

    #[test]
    fn test_empty_identification_tags_list() {
        let group = group("BUNDLE");
        assert!(group.mids.is_empty());
        assert_eq!(Attribute::Group(group).to_string(), "group:BUNDLE");
    }

    #[test]
    fn test_invalid_formats() {
        assert!(parse_group("").is_err());
        assert!(parse_group("BUNDLE 0,1").is_err());
    }
}
