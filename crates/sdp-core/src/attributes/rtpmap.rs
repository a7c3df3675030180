//! SDP RTP Map Attribute Parser
//!
//! Implements parser for rtpmap attributes as defined in RFC 8866.
//! Format: a=rtpmap:<payload type> <encoding name>/<clock rate>[/<encoding parameters>]

use crate::attributes::common::{parse_all, parse_number, parse_payload_type, token, word};
use crate::error::Result;
use crate::types::{Attribute, RtpMap};
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space1},
    combinator::{opt, rest},
    sequence::{preceded, tuple},
    IResult,
};

/// Raw rtpmap fields: payload type, encoding name, clock rate, encoding parameters
fn rtpmap_parser(input: &str) -> IResult<&str, (&str, &str, &str, Option<&str>)> {
    tuple((
        word,
        preceded(space1, token),
        preceded(char('/'), take_while1(|c: char| c != '/')),
        opt(preceded(char('/'), rest)),
    ))(input)
}

/// Parses rtpmap attribute: a=rtpmap:<payload type> <encoding name>/<clock rate>[/<encoding parameters>]
pub fn parse_rtpmap(value: &str) -> Result<Attribute> {
    let (pt, encoding_name, clock_rate, channels) =
        parse_all("rtpmap", value.trim(), rtpmap_parser, "invalid rtpmap format")?;

    Ok(Attribute::RtpMap(RtpMap {
        payload_type: parse_payload_type("rtpmap", pt)?,
        encoding_name: encoding_name.to_string(),
        clock_rate: parse_number("clock rate", clock_rate)?,
        channels: channels.map(|c| parse_number("encoding parameters", c)).transpose()?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_rtpmap_attribute_comprehensive() {
        assert!(parse_rtpmap("96 H264/90000").is_ok());
        assert!(parse_rtpmap("0 PCMU/8000").is_ok());
        assert!(parse_rtpmap("101 telephone-event/8000").is_ok());
        assert!(parse_rtpmap("127 red/90000").is_ok());

        if let Ok(Attribute::RtpMap(rtpmap)) = parse_rtpmap("111 opus/48000/2") {
            assert_eq!(rtpmap.payload_type, 111);
            assert_eq!(rtpmap.encoding_name, "opus");
            assert_eq!(rtpmap.clock_rate, 48000);
            assert_eq!(rtpmap.channels, Some(2));
        } else {
            panic!("Failed to parse valid rtpmap");
        }

        // Missing space
        assert!(parse_rtpmap("96H264/90000").is_err());
        // Missing clock rate
        assert!(parse_rtpmap("96 H264").is_err());
        // Missing payload type
        assert!(parse_rtpmap("H264/90000").is_err());
        // Encoding name outside the token charset
        assert!(parse_rtpmap("96 H264@/90000").is_err());
    }

    #[test]
    fn test_rtpmap_number_errors() {
        assert!(matches!(
            parse_rtpmap("PT H264/90000"),
            Err(Error::InvalidNumber { field: "payload type", .. })
        ));
        assert!(matches!(
            parse_rtpmap("96 H264/clock"),
            Err(Error::InvalidNumber { field: "clock rate", .. })
        ));
        assert!(matches!(
            parse_rtpmap("96 opus/48000/two"),
            Err(Error::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_rtpmap("200 H264/90000"),
            Err(Error::MalformedAttribute { .. })
        ));
    }

    #[test]
    fn test_rtpmap_display_matches_input() {
        for input in ["96 VP8/90000", "111 opus/48000/2", "35 flexfec-03/90000"] {
            let attr = parse_rtpmap(input).unwrap();
            assert_eq!(attr.to_string(), format!("rtpmap:{}", input));
        }
    }
}
