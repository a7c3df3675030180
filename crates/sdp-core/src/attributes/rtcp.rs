//! SDP RTCP Attribute Parsers
//!
//! Implements parsers for RTCP-related attributes:
//! - `a=rtcp-fb` (RFC 4585)
//! - `a=rtcp` (RFC 3605)
//!
//! `rtcp-mux` and `rtcp-rsize` are flags and have no value to parse.

use crate::attributes::common::{parse_all, parse_number, parse_payload_type, remainder, token, word, words};
use crate::error::{Error, Result};
use crate::types::{Attribute, ConnectionData, FeedbackPayload, RtcpAddress, RtcpFeedback};
use nom::{
    character::complete::space1,
    combinator::opt,
    sequence::{preceded, tuple},
    IResult,
};

/// Main parser for RTCP-FB attribute: <payload type> <type> [<parameter>]
fn rtcp_fb_parser(input: &str) -> IResult<&str, (&str, &str, Option<&str>)> {
    tuple((word, preceded(space1, token), opt(remainder)))(input)
}

/// Parses rtcp-fb attribute: a=rtcp-fb:<payload type> <type> [<parameter>]
pub fn parse_rtcp_fb(value: &str) -> Result<Attribute> {
    let (payload, feedback_type, parameter) =
        parse_all("rtcp-fb", value.trim(), rtcp_fb_parser, "invalid rtcp-fb format")?;

    let payload = match payload {
        "*" => FeedbackPayload::Wildcard,
        pt => FeedbackPayload::PayloadType(parse_payload_type("rtcp-fb", pt)?),
    };

    let parameter = parameter.map(str::trim).filter(|p| !p.is_empty());
    if feedback_type == "trr-int" {
        match parameter {
            Some(interval) => {
                parse_number::<u32>("trr-int interval", interval)?;
            }
            None => return Err(Error::malformed_attribute("rtcp-fb", "trr-int requires an interval")),
        }
    }

    Ok(Attribute::RtcpFb(RtcpFeedback {
        payload,
        feedback_type: feedback_type.to_string(),
        parameter: parameter.map(str::to_string),
    }))
}

/// Parses rtcp attribute: a=rtcp:<port> [<nettype> <addrtype> <connection-address>]
pub fn parse_rtcp(value: &str) -> Result<Attribute> {
    let fields = parse_all("rtcp", value, words, "invalid rtcp format")?;

    let port = parse_number("rtcp port", fields[0])?;
    let connection = match fields.as_slice() {
        [_] => None,
        [_, net_type, addr_type, address] => Some(ConnectionData {
            net_type: net_type.to_string(),
            addr_type: addr_type.to_string(),
            connection_address: address.to_string(),
            ttl: None,
            num_addresses: None,
        }),
        _ => {
            return Err(Error::malformed_attribute(
                "rtcp",
                format!("expected a port with an optional address, got {:?}", value),
            ))
        }
    };

    Ok(Attribute::Rtcp(RtcpAddress { port, connection }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtcp_fb_variants() {
        let cases = [
            ("96 goog-remb", FeedbackPayload::PayloadType(96), "goog-remb", None),
            ("96 transport-cc", FeedbackPayload::PayloadType(96), "transport-cc", None),
            ("96 ccm fir", FeedbackPayload::PayloadType(96), "ccm", Some("fir")),
            ("96 nack", FeedbackPayload::PayloadType(96), "nack", None),
            ("96 nack pli", FeedbackPayload::PayloadType(96), "nack", Some("pli")),
            ("* trr-int 100", FeedbackPayload::Wildcard, "trr-int", Some("100")),
        ];

        for (input, payload, feedback_type, parameter) in cases {
            match parse_rtcp_fb(input) {
                Ok(Attribute::RtcpFb(fb)) => {
                    assert_eq!(fb.payload, payload, "{}", input);
                    assert_eq!(fb.feedback_type, feedback_type, "{}", input);
                    assert_eq!(fb.parameter.as_deref(), parameter, "{}", input);
                }
                other => panic!("Failed to parse {:?}: {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_rtcp_fb_errors() {
        assert!(parse_rtcp_fb("96").is_err());
        assert!(parse_rtcp_fb("128 nack").is_err());
        assert!(matches!(parse_rtcp_fb("* trr-int soon"), Err(Error::InvalidNumber { .. })));
        assert!(matches!(parse_rtcp_fb("* trr-int"), Err(Error::MalformedAttribute { .. })));
    }

    #[test]
    fn test_rtcp_address() {
        match parse_rtcp("9 IN IP4 0.0.0.0") {
            Ok(Attribute::Rtcp(rtcp)) => {
                assert_eq!(rtcp.port, 9);
                let conn = rtcp.connection.unwrap();
                assert_eq!(conn.addr_type, "IP4");
                assert_eq!(conn.connection_address, "0.0.0.0");
            }
            other => panic!("Unexpected result: {:?}", other),
        }

        match parse_rtcp("53020") {
            Ok(Attribute::Rtcp(rtcp)) => {
                assert_eq!(rtcp.port, 53020);
                assert!(rtcp.connection.is_none());
            }
            other => panic!("Unexpected result: {:?}", other),
        }

        assert!(parse_rtcp("9 IN IP4").is_err());
        assert!(matches!(parse_rtcp("port"), Err(Error::InvalidNumber { .. })));
    }
}
