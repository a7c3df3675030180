//! SDP attribute parsing functionality
//!
//! This module handles parsing of SDP attribute lines (a=). The attribute
//! name is everything before the first `:`; the rest is the value, colons
//! included. Names are looked up in two static tables, one for attributes
//! carrying a value and one for flags. Names found in neither are kept as
//! [`Attribute::Unknown`] so vendor extensions survive a round trip.

use crate::attributes::{
    candidate, control, dtls, extmap, fmtp, group, ice, mid, msid, ptime, rtcp, rtpmap, ssrc,
};
use crate::error::{Error, Result};
use crate::types::{Attribute, MediaDirection};
use tracing::trace;

type ValueParser = fn(&str) -> Result<Attribute>;

/// Attributes of the form `a=<name>:<value>`
static VALUE_PARSERS: &[(&str, ValueParser)] = &[
    ("candidate", candidate::parse_candidate),
    ("fingerprint", dtls::parse_fingerprint),
    ("setup", dtls::parse_setup),
    ("rtpmap", rtpmap::parse_rtpmap),
    ("fmtp", fmtp::parse_fmtp),
    ("rtcp-fb", rtcp::parse_rtcp_fb),
    ("rtcp", rtcp::parse_rtcp),
    ("ssrc", ssrc::parse_ssrc),
    ("ssrc-group", ssrc::parse_ssrc_group),
    ("extmap", extmap::parse_extmap),
    ("msid", msid::parse_msid),
    ("msid-semantic", msid::parse_msid_semantic),
    ("mid", mid::parse_mid),
    ("group", group::parse_group),
    ("ice-ufrag", ice::parse_ice_ufrag),
    ("ice-pwd", ice::parse_ice_pwd),
    ("ice-options", ice::parse_ice_options),
    ("ptime", ptime::parse_ptime),
    ("maxptime", ptime::parse_maxptime),
    ("control", control::parse_control),
];

/// Attributes of the form `a=<name>`
static FLAG_ATTRIBUTES: &[(&str, Attribute)] = &[
    ("sendrecv", Attribute::Direction(MediaDirection::SendRecv)),
    ("sendonly", Attribute::Direction(MediaDirection::SendOnly)),
    ("recvonly", Attribute::Direction(MediaDirection::RecvOnly)),
    ("inactive", Attribute::Direction(MediaDirection::Inactive)),
    ("rtcp-mux", Attribute::RtcpMux),
    ("rtcp-rsize", Attribute::RtcpRsize),
    ("end-of-candidates", Attribute::EndOfCandidates),
    ("bundle-only", Attribute::BundleOnly),
    ("ice-lite", Attribute::IceLite),
];

/// True when `name` has a structured parser
pub fn is_recognized(name: &str) -> bool {
    VALUE_PARSERS.iter().any(|(n, _)| *n == name) || FLAG_ATTRIBUTES.iter().any(|(n, _)| *n == name)
}

/// Parse an attribute line (a=)
///
/// # Format
///
/// ```text
/// a=<attribute>
/// a=<attribute>:<value>
/// ```
///
/// # Examples
///
/// ```
/// use rvoip_sdp_core::parser::parse_attribute;
/// use rvoip_sdp_core::Attribute;
///
/// assert_eq!(parse_attribute("rtcp-mux").unwrap(), Attribute::RtcpMux);
/// assert_eq!(
///     parse_attribute("x-custom:foo").unwrap(),
///     Attribute::unknown("x-custom", Some("foo"))
/// );
/// assert!(parse_attribute("rtpmap:96").is_err());
/// ```
pub fn parse_attribute(value: &str) -> Result<Attribute> {
    let (name, attr_value) = match value.split_once(':') {
        Some((name, attr_value)) => (name, Some(attr_value)),
        None => (value, None),
    };

    if name.is_empty() {
        return Err(Error::malformed_attribute(name, format!("missing attribute name in {:?}", value)));
    }

    if let Some((_, parser)) = VALUE_PARSERS.iter().find(|(n, _)| *n == name) {
        let Some(attr_value) = attr_value else {
            return Err(Error::malformed_attribute(name, "attribute requires a value"));
        };
        return parser(attr_value);
    }

    if let Some((_, flag)) = FLAG_ATTRIBUTES.iter().find(|(n, _)| *n == name) {
        if attr_value.is_some() {
            return Err(Error::malformed_attribute(name, "flag attribute takes no value"));
        }
        return Ok(flag.clone());
    }

    trace!("Keeping unrecognized attribute a={} verbatim", name);
    Ok(Attribute::Unknown {
        name: name.to_string(),
        value: attr_value.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_colon_splits_name() {
        match parse_attribute("fingerprint:sha-256 AB:CD:EF").unwrap() {
            Attribute::Fingerprint(fp) => assert_eq!(fp.value, "AB:CD:EF"),
            other => panic!("Expected fingerprint, got {:?}", other),
        }
        assert_eq!(
            parse_attribute("x-url:http://example.com:8080/a").unwrap(),
            Attribute::unknown("x-url", Some("http://example.com:8080/a"))
        );
    }

    #[test]
    fn test_unknown_attributes_kept_verbatim() {
        assert_eq!(
            parse_attribute("x-google-flag:conference").unwrap(),
            Attribute::unknown("x-google-flag", Some("conference"))
        );
        assert_eq!(
            parse_attribute("extmap-allow-mixed").unwrap(),
            Attribute::unknown("extmap-allow-mixed", None)
        );
        assert_eq!(parse_attribute("x-empty:").unwrap(), Attribute::unknown("x-empty", Some("")));
    }

    #[test]
    fn test_msid_semantic_and_control() {
        let attribute = parse_attribute("msid-semantic: WMS stream").unwrap();
        match &attribute {
            Attribute::MsidSemantic(semantic) => {
                assert_eq!(semantic.semantics, "WMS");
                assert_eq!(semantic.identifiers, vec!["stream"]);
            }
            other => panic!("Expected msid-semantic, got {:?}", other),
        }
        assert_eq!(attribute.to_string(), "msid-semantic: WMS stream");
        assert_eq!(
            parse_attribute("control:streamid=0").unwrap(),
            Attribute::Control("streamid=0".to_string())
        );
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            parse_attribute("sendrecv").unwrap(),
            Attribute::Direction(MediaDirection::SendRecv)
        );
        assert_eq!(parse_attribute("end-of-candidates").unwrap(), Attribute::EndOfCandidates);
        assert!(matches!(
            parse_attribute("rtcp-mux:yes"),
            Err(Error::MalformedAttribute { name, .. }) if name == "rtcp-mux"
        ));
    }

    #[test]
    fn test_value_attribute_without_value() {
        assert!(matches!(
            parse_attribute("mid"),
            Err(Error::MalformedAttribute { name, .. }) if name == "mid"
        ));
        assert!(parse_attribute(":value").is_err());
    }

    #[test]
    fn test_tables_have_unique_names() {
        let mut names: Vec<&str> = VALUE_PARSERS
            .iter()
            .map(|(n, _)| *n)
            .chain(FLAG_ATTRIBUTES.iter().map(|(n, _)| *n))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert!(is_recognized("ssrc-group"));
        assert!(is_recognized("msid-semantic"));
        assert!(!is_recognized("extmap-allow-mixed"));
    }
}
