//! Media description line (m=) parsing

use crate::attributes::common::parse_number;
use crate::error::{Error, Result};
use crate::types::MediaDescription;

/// Parse a media description line (m=)
///
/// ```text
/// m=<media> <port>[/<number of ports>] <proto> <fmt> ...
/// ```
///
/// Formats are kept as written and in order. They are payload type
/// numbers for RTP profiles and free-form tokens otherwise
/// (e.g. `webrtc-datachannel`).
pub fn parse_media_description_line(value: &str) -> Result<MediaDescription> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(Error::invalid_line(
            'm',
            format!("expected media, port, protocol and formats in {:?}", value),
        ));
    }

    let media = parts[0];
    if !media.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(Error::invalid_line('m', format!("invalid media type {:?}", media)));
    }

    let (port, port_count) = match parts[1].split_once('/') {
        Some((port, count)) => (
            parse_number("port", port)?,
            Some(parse_number("port count", count)?),
        ),
        None => (parse_number("port", parts[1])?, None),
    };

    let mut description = MediaDescription::new(
        media,
        port,
        parts[2],
        parts[3..].iter().map(|f| f.to_string()).collect(),
    );
    description.port_count = port_count;
    Ok(description)
}
