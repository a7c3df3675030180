//! SDP Media Identification (MID) Attribute Parser
//!
//! Implements parser for MID attributes as defined in RFC 5888.
//! Format: a=mid:<identification-tag>

use crate::attributes::common::{parse_all, token};
use crate::error::Result;
use crate::types::Attribute;

/// Parses mid attribute: a=mid:<identification-tag>
pub fn parse_mid(value: &str) -> Result<Attribute> {
    let mid = parse_all("mid", value.trim(), token, "mid must be a single token")?;
    Ok(Attribute::Mid(mid.to_string()))
}
