//! Session-level SDP parsing functionality
//!
//! Parsers for the values of the origin (`o=`), connection (`c=`) and
//! bandwidth (`b=`) lines. The connection and bandwidth parsers are also
//! used for media sections.

use crate::attributes::common::{is_token_char, parse_number};
use crate::error::{Error, Result};
use crate::types::{Bandwidth, ConnectionData, Origin};

/// Parse an origin line (o=)
///
/// ```text
/// o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>
/// ```
pub fn parse_origin_line(value: &str) -> Result<Origin> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let [username, session_id, session_version, net_type, addr_type, unicast_address] =
        parts.as_slice()
    else {
        return Err(Error::invalid_line(
            'o',
            format!("expected 6 fields, found {}", parts.len()),
        ));
    };

    Ok(Origin {
        username: username.to_string(),
        session_id: parse_number("session id", session_id)?,
        session_version: parse_number("session version", session_version)?,
        net_type: net_type.to_string(),
        addr_type: addr_type.to_string(),
        unicast_address: unicast_address.to_string(),
    })
}

/// Parse a connection line (c=)
///
/// ```text
/// c=<nettype> <addrtype> <connection-address>
/// ```
///
/// IP4 multicast addresses may carry `/<ttl>[/<number of addresses>]`,
/// IP6 multicast addresses `/<number of addresses>`. Other address types
/// keep their address untouched.
///
/// # Examples
///
/// ```
/// use rvoip_sdp_core::parser::parse_connection_line;
///
/// let conn = parse_connection_line("IN IP4 224.2.36.42/127").unwrap();
/// assert_eq!(conn.connection_address, "224.2.36.42");
/// assert_eq!(conn.ttl, Some(127));
///
/// let conn = parse_connection_line("IN IP6 ff15::101/3").unwrap();
/// assert_eq!(conn.connection_address, "ff15::101");
/// assert_eq!(conn.num_addresses, Some(3));
/// ```
pub fn parse_connection_line(value: &str) -> Result<ConnectionData> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let [net_type, addr_type, address] = parts.as_slice() else {
        return Err(Error::invalid_line(
            'c',
            format!("expected 3 fields, found {}", parts.len()),
        ));
    };

    let mut conn = ConnectionData {
        net_type: net_type.to_string(),
        addr_type: addr_type.to_string(),
        connection_address: address.to_string(),
        ttl: None,
        num_addresses: None,
    };

    let pieces: Vec<&str> = address.split('/').collect();
    match (*addr_type, pieces.as_slice()) {
        (_, [_]) => {}
        ("IP4", [addr, ttl]) => {
            conn.connection_address = addr.to_string();
            conn.ttl = Some(parse_number("ttl", ttl)?);
        }
        ("IP4", [addr, ttl, count]) => {
            conn.connection_address = addr.to_string();
            conn.ttl = Some(parse_number("ttl", ttl)?);
            conn.num_addresses = Some(parse_number("number of addresses", count)?);
        }
        ("IP6", [addr, count]) => {
            conn.connection_address = addr.to_string();
            conn.num_addresses = Some(parse_number("number of addresses", count)?);
        }
        ("IP4", _) | ("IP6", _) => {
            return Err(Error::invalid_line(
                'c',
                format!("invalid multicast address {:?}", address),
            ));
        }
        _ => {}
    }

    if conn.connection_address.is_empty() {
        return Err(Error::invalid_line('c', "empty connection address"));
    }

    Ok(conn)
}

/// Parse a bandwidth line (b=), `<bwtype>:<bandwidth>`
pub fn parse_bandwidth_line(value: &str) -> Result<Bandwidth> {
    let Some((bw_type, bandwidth)) = value.trim().split_once(':') else {
        return Err(Error::invalid_line('b', format!("missing ':' in {:?}", value)));
    };
    if bw_type.is_empty() || !bw_type.chars().all(is_token_char) {
        return Err(Error::invalid_line('b', format!("invalid bandwidth type {:?}", bw_type)));
    }

    Ok(Bandwidth {
        bw_type: bw_type.to_string(),
        bandwidth: parse_number("bandwidth", bandwidth)?,
    })
}
