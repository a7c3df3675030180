//! SDP Control Attribute Parser
//!
//! Implements parser for the RTSP control attribute (RFC 7826 appendix D).
//! Format: a=control:<url>

use crate::attributes::common::single_word;
use crate::error::Result;
use crate::types::Attribute;

/// Parses control attribute: a=control:<url>
///
/// The value is either an absolute URL, a URL relative to the session
/// (`streamid=0`) or `*`.
pub fn parse_control(value: &str) -> Result<Attribute> {
    let url = single_word("control", value)?;
    Ok(Attribute::Control(url.to_string()))
}
