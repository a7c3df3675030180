//! SDP ICE Candidate Attribute Parser
//!
//! Implements parser for ICE candidate attributes as defined in RFC 8839.
//! Format: a=candidate:<foundation> <component-id> <transport> <priority> <conn-addr> <port> typ <cand-type> [raddr <raddr>] [rport <rport>] *(extensions)

use crate::attributes::common::{parse_all, parse_number, words};
use crate::error::{Error, Result};
use crate::types::{Attribute, Candidate, CandidateTransport, CandidateType};

fn malformed(reason: impl Into<String>) -> Error {
    Error::malformed_attribute("candidate", reason)
}

/// Parses candidate attribute based on RFC 8839
pub fn parse_candidate(value: &str) -> Result<Attribute> {
    let parts = parse_all("candidate", value, words, "invalid candidate format")?;

    // Check for minimum number of parts required
    if parts.len() < 8 {
        return Err(malformed(format!(
            "insufficient parts in {:?}",
            value.trim()
        )));
    }

    let foundation = parts[0].to_string();

    let component_id: u32 = parse_number("component id", parts[1])?;
    if component_id == 0 || component_id > 256 {
        return Err(malformed(format!("component id {} out of range 1-256", component_id)));
    }

    // Only UDP and TCP are valid
    let transport = if parts[2].eq_ignore_ascii_case("udp") {
        CandidateTransport::Udp
    } else if parts[2].eq_ignore_ascii_case("tcp") {
        CandidateTransport::Tcp
    } else {
        return Err(malformed(format!("invalid transport {:?}", parts[2])));
    };

    let priority = parse_number("priority", parts[3])?;
    let address = parts[4].to_string();
    let port = parse_number("port", parts[5])?;

    if parts[6] != "typ" {
        return Err(malformed(format!("expected 'typ' keyword, found {:?}", parts[6])));
    }
    let candidate_type = CandidateType::from_name(parts[7])
        .ok_or_else(|| malformed(format!("invalid candidate type {:?}", parts[7])))?;

    let mut related_address = None;
    let mut related_port = None;
    let mut extensions = Vec::new();

    for pair in parts[8..].chunks(2) {
        let [key, value] = pair else {
            return Err(malformed(format!("extension {:?} has no value", pair[0])));
        };
        match *key {
            "raddr" => related_address = Some(value.to_string()),
            "rport" => related_port = Some(parse_number("related port", value)?),
            _ => extensions.push((key.to_string(), value.to_string())),
        }
    }

    Ok(Attribute::Candidate(Candidate {
        foundation,
        component_id,
        transport,
        priority,
        address,
        port,
        candidate_type,
        related_address,
        related_port,
        extensions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(value: &str) -> Candidate {
        match parse_candidate(value) {
            Ok(Attribute::Candidate(candidate)) => candidate,
            other => panic!("Expected Candidate attribute, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_host_candidate() {
        // Example from RFC 8839 Section 5.1
        let candidate = candidate("1 1 UDP 2130706431 10.0.1.1 8998 typ host");
        assert_eq!(candidate.foundation, "1");
        assert_eq!(candidate.component_id, 1);
        assert_eq!(candidate.transport, CandidateTransport::Udp);
        assert_eq!(candidate.priority, 2130706431);
        assert_eq!(candidate.address, "10.0.1.1");
        assert_eq!(candidate.port, 8998);
        assert_eq!(candidate.candidate_type, CandidateType::Host);
        assert!(candidate.related_address.is_none());
        assert!(candidate.extensions.is_empty());
    }

    #[test]
    fn test_parse_srflx_candidate() {
        let candidate =
            candidate("2 1 UDP 1694498815 192.0.2.3 45664 typ srflx raddr 10.0.1.1 rport 8998");
        assert_eq!(candidate.candidate_type, CandidateType::ServerReflexive);
        assert_eq!(candidate.related_address.as_deref(), Some("10.0.1.1"));
        assert_eq!(candidate.related_port, Some(8998));
    }

    #[test]
    fn test_parse_webrtc_tcp_candidate() {
        let candidate = candidate(
            "1303410138 1 tcp 1518217471 2001:abc:b0b:cafe:babe:dead:beef:ab0b 9 typ host tcptype active generation 0 network-id 4",
        );
        assert_eq!(candidate.transport, CandidateTransport::Tcp);
        assert_eq!(candidate.address, "2001:abc:b0b:cafe:babe:dead:beef:ab0b");
        assert_eq!(candidate.tcp_type(), Some("active"));
        assert_eq!(candidate.extension("network-id"), Some("4"));
        let keys: Vec<&str> = candidate.extensions.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["tcptype", "generation", "network-id"]);
    }

    #[test]
    fn test_parse_mdns_candidate() {
        let candidate = candidate(
            "3098232711 1 udp 2113937151 4c9a1d35-6d43-4b1b-a0e5-1b2f8a1e0f93.local 52301 typ host generation 0",
        );
        assert_eq!(candidate.address, "4c9a1d35-6d43-4b1b-a0e5-1b2f8a1e0f93.local");
    }

    #[test]
    fn test_invalid_candidates() {
        assert!(parse_candidate("1 1 UDP 2130706431 10.0.1.1 8998 typ").is_err());
        assert!(parse_candidate("1 1 SCTP 2130706431 10.0.1.1 8998 typ host").is_err());
        assert!(parse_candidate("1 1 UDP 2130706431 10.0.1.1 8998 type host").is_err());
        assert!(parse_candidate("1 1 UDP 2130706431 10.0.1.1 8998 typ nat").is_err());
        assert!(parse_candidate("1 0 UDP 2130706431 10.0.1.1 8998 typ host").is_err());
        assert!(parse_candidate("1 1 UDP 2130706431 10.0.1.1 8998 typ host generation").is_err());
        assert!(matches!(
            parse_candidate("1 1 UDP high 10.0.1.1 8998 typ host"),
            Err(Error::InvalidNumber { field: "priority", .. })
        ));
        assert!(matches!(
            parse_candidate("1 1 UDP 2130706431 10.0.1.1 99999 typ host"),
            Err(Error::InvalidNumber { field: "port", .. })
        ));
    }

    #[test]
    fn test_candidate_display_round_trip() {
        let input = "2 1 udp 1694498815 192.0.2.3 45664 typ srflx raddr 10.0.1.1 rport 8998 generation 0";
        let attr = parse_candidate(input).unwrap();
        assert_eq!(attr.to_string(), format!("candidate:{}", input));
    }
}
