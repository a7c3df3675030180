//! SDP Media Stream Identification (MSID) Attribute Parser
//!
//! Implements parser for MSID attributes as defined in RFC 8830.
//! Format: a=msid:<stream identifier> [<track identifier>]
//!
//! Also parses the WebRTC session-level `a=msid-semantic` line.

use crate::attributes::common::{parse_all, token, words};
use crate::error::{Error, Result};
use crate::types::{Attribute, Msid, MsidSemantic};

/// Parses msid attribute: a=msid:<stream identifier> [<track identifier>]
pub fn parse_msid(value: &str) -> Result<Attribute> {
    let ids = parse_all("msid", value, words, "missing stream identifier")?;
    match ids.as_slice() {
        [stream] => Ok(Attribute::Msid(Msid {
            stream_id: stream.to_string(),
            track_id: None,
        })),
        [stream, track] => Ok(Attribute::Msid(Msid {
            stream_id: stream.to_string(),
            track_id: Some(track.to_string()),
        })),
        _ => Err(Error::malformed_attribute(
            "msid",
            format!("expected at most two identifiers, got {}", ids.len()),
        )),
    }
}

/// Parses msid-semantic attribute: a=msid-semantic: <semantics> *(SP <identifier>)
///
/// Browsers write a space after the colon and may omit the identifiers.
pub fn parse_msid_semantic(value: &str) -> Result<Attribute> {
    let fields = parse_all("msid-semantic", value, words, "missing semantics")?;
    let Some((&semantics, identifiers)) = fields.split_first() else {
        return Err(Error::malformed_attribute("msid-semantic", "missing semantics"));
    };
    parse_all("msid-semantic", semantics, token, "semantics must be a token")?;

    Ok(Attribute::MsidSemantic(MsidSemantic {
        semantics: semantics.to_string(),
        identifiers: identifiers.iter().map(|id| id.to_string()).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_msid_with_track() {
        match parse_msid("wYMHgchcIvfAdYxfDSJJhiVLyaTKph1xiqr8 86d315d4-436a-4d83-bda9-01fdf303dccc") {
            Ok(Attribute::Msid(msid)) => {
                assert_eq!(msid.stream_id, "wYMHgchcIvfAdYxfDSJJhiVLyaTKph1xiqr8");
                assert_eq!(msid.track_id.as_deref(), Some("86d315d4-436a-4d83-bda9-01fdf303dccc"));
            }
            other => panic!("Expected msid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_msid_stream_only() {
        // "-" is the placeholder for a track without a stream
        match parse_msid("-") {
            Ok(Attribute::Msid(msid)) => {
                assert_eq!(msid.stream_id, "-");
                assert!(msid.track_id.is_none());
            }
            other => panic!("Expected msid, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_msid() {
        assert!(parse_msid("").is_err());
        assert!(parse_msid("a b c").is_err());
    }

    #[test]
    fn test_parse_msid_semantic() {
        match parse_msid_semantic(" WMS wYMHgchcIvfAdYxfDSJJhiVLyaTKph1xiqr8") {
            Ok(Attribute::MsidSemantic(semantic)) => {
                assert_eq!(semantic.semantics, "WMS");
                assert_eq!(semantic.identifiers, vec!["wYMHgchcIvfAdYxfDSJJhiVLyaTKph1xiqr8"]);
                assert!(!semantic.is_wildcard());
            }
            other => panic!("Expected msid-semantic, got {:?}", other),
        }

        match parse_msid_semantic(" WMS *") {
            Ok(Attribute::MsidSemantic(semantic)) => assert!(semantic.is_wildcard()),
            other => panic!("Expected msid-semantic, got {:?}", other),
        }

        match parse_msid_semantic("WMS") {
            Ok(Attribute::MsidSemantic(semantic)) => assert!(semantic.identifiers.is_empty()),
            other => panic!("Expected msid-semantic, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_msid_semantic() {
        assert!(parse_msid_semantic("").is_err());
        assert!(parse_msid_semantic("   ").is_err());
        assert!(parse_msid_semantic("W(MS) a").is_err());
    }
}
