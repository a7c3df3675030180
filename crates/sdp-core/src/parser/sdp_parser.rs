//! # SDP Parser Implementation
//!
//! Assembles tokenized lines into a [`SessionDescription`] according to
//! [RFC 8866](https://tools.ietf.org/html/rfc8866).
//!
//! ## SDP Structure
//!
//! An SDP message consists of a session-level section followed by zero or
//! more media-level sections. The session-level section starts with the
//! `v=0` line and continues until the first `m=` line. Each media-level
//! section starts with an `m=` line and continues until the next `m=`
//! line or the end of the message.
//!
//! The assembler is a small state machine:
//!
//! - `ExpectVersion`: only `v=0` is accepted
//! - `SessionHeaders`: `o s i u e p c b t r z k a` lines fill the session
//! - `MediaHeaders`: `i c b k a` lines fill the current media section
//!
//! An `m=` line moves to (or stays in) `MediaHeaders`. The `o=`, `s=` and
//! `t=` lines are mandatory. Line order within a section is otherwise not
//! enforced, but single-occurrence lines may not repeat.
//!
//! Session-level connection data is not copied into media sections; see
//! [`SessionDescription::media_connection`].

use crate::error::{Error, Result};
use crate::types::{
    Attribute, Bandwidth, ConnectionData, MediaDescription, Origin, SessionDescription,
    TimeDescription, TimeZoneAdjustment,
};
use bytes::Bytes;
use std::str;
use tracing::{debug, trace};

use super::attribute_parser::parse_attribute;
use super::line_parser::{tokenize, SdpLine};
use super::media_parser::parse_media_description_line;
use super::session_parser::{parse_bandwidth_line, parse_connection_line, parse_origin_line};
use super::time_parser::{parse_repeat_time_line, parse_time_description_line, parse_time_zone_line};

/// Section the next line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    ExpectVersion,
    SessionHeaders,
    MediaHeaders,
}

/// Stores `value` into a single-occurrence slot
fn set_once<T>(slot: &mut Option<T>, value: T, line_type: char, section: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::unexpected_line(
            line_type,
            format!("only one {}= line is allowed per {} section", line_type, section),
        ));
    }
    *slot = Some(value);
    Ok(())
}

/// Session under construction
///
/// Nothing escapes until [`SessionAssembler::finish`] succeeds, so a parse
/// failure never exposes a partial tree.
struct SessionAssembler {
    state: ParseState,
    origin: Option<Origin>,
    session_name: Option<String>,
    session_info: Option<String>,
    uri: Option<String>,
    emails: Vec<String>,
    phones: Vec<String>,
    connection: Option<ConnectionData>,
    bandwidths: Vec<Bandwidth>,
    time_descriptions: Vec<TimeDescription>,
    time_zones: Option<Vec<TimeZoneAdjustment>>,
    encryption_key: Option<String>,
    attributes: Vec<Attribute>,
    media_descriptions: Vec<MediaDescription>,
}

impl SessionAssembler {
    fn new() -> Self {
        SessionAssembler {
            state: ParseState::ExpectVersion,
            origin: None,
            session_name: None,
            session_info: None,
            uri: None,
            emails: Vec::new(),
            phones: Vec::new(),
            connection: None,
            bandwidths: Vec::new(),
            time_descriptions: Vec::new(),
            time_zones: None,
            encryption_key: None,
            attributes: Vec::new(),
            media_descriptions: Vec::new(),
        }
    }

    fn feed(&mut self, line: &SdpLine<'_>) -> Result<()> {
        trace!("SDP line {}: {}={}", line.line_number, line.line_type, line.value);

        match self.state {
            ParseState::ExpectVersion => {
                if line.line_type != 'v' || line.value.trim() != "0" {
                    return Err(Error::MissingVersion);
                }
                self.state = ParseState::SessionHeaders;
                Ok(())
            }
            ParseState::SessionHeaders => self.session_line(line),
            ParseState::MediaHeaders => self.media_line(line),
        }
    }

    fn session_line(&mut self, line: &SdpLine<'_>) -> Result<()> {
        let value = line.value;
        match line.line_type {
            'v' => Err(Error::unexpected_line('v', "duplicate version line")),
            'o' => set_once(&mut self.origin, parse_origin_line(value)?, 'o', "session"),
            's' => set_once(&mut self.session_name, value.to_string(), 's', "session"),
            'i' => set_once(&mut self.session_info, value.to_string(), 'i', "session"),
            'u' => set_once(&mut self.uri, value.to_string(), 'u', "session"),
            'e' => {
                self.emails.push(value.to_string());
                Ok(())
            }
            'p' => {
                self.phones.push(value.to_string());
                Ok(())
            }
            'c' => set_once(&mut self.connection, parse_connection_line(value)?, 'c', "session"),
            'b' => {
                self.bandwidths.push(parse_bandwidth_line(value)?);
                Ok(())
            }
            't' => {
                self.time_descriptions.push(parse_time_description_line(value)?);
                Ok(())
            }
            'r' => {
                let repeat = parse_repeat_time_line(value)?;
                match self.time_descriptions.last_mut() {
                    Some(time) => {
                        time.repeat_times.push(repeat);
                        Ok(())
                    }
                    None => Err(Error::unexpected_line('r', "repeat time without a preceding t= line")),
                }
            }
            'z' => set_once(&mut self.time_zones, parse_time_zone_line(value)?, 'z', "session"),
            'k' => set_once(&mut self.encryption_key, value.to_string(), 'k', "session"),
            'a' => {
                self.attributes.push(parse_attribute(value)?);
                Ok(())
            }
            'm' => self.open_media(value),
            other => Err(Error::unexpected_line(other, "unknown line type")),
        }
    }

    fn media_line(&mut self, line: &SdpLine<'_>) -> Result<()> {
        if line.line_type == 'm' {
            return self.open_media(line.value);
        }

        let Some(media) = self.media_descriptions.last_mut() else {
            return Err(Error::unexpected_line(line.line_type, "no open media section"));
        };

        let value = line.value;
        match line.line_type {
            'i' => set_once(&mut media.title, value.to_string(), 'i', "media"),
            'c' => set_once(&mut media.connection, parse_connection_line(value)?, 'c', "media"),
            'b' => {
                media.bandwidths.push(parse_bandwidth_line(value)?);
                Ok(())
            }
            'k' => set_once(&mut media.encryption_key, value.to_string(), 'k', "media"),
            'a' => {
                media.attributes.push(parse_attribute(value)?);
                Ok(())
            }
            'v' | 'o' | 's' | 'u' | 'e' | 'p' | 't' | 'r' | 'z' => Err(Error::unexpected_line(
                line.line_type,
                "session-level line inside a media section",
            )),
            other => Err(Error::unexpected_line(other, "unknown line type")),
        }
    }

    fn open_media(&mut self, value: &str) -> Result<()> {
        let media = parse_media_description_line(value)?;
        debug!(
            "Opening media section {}: {} port {} with {} formats",
            self.media_descriptions.len(),
            media.media,
            media.port,
            media.formats.len()
        );
        self.media_descriptions.push(media);
        self.state = ParseState::MediaHeaders;
        Ok(())
    }

    fn finish(self) -> Result<SessionDescription> {
        if self.state == ParseState::ExpectVersion {
            return Err(Error::MissingVersion);
        }

        let mut missing = Vec::new();
        if self.origin.is_none() {
            missing.push('o');
        }
        if self.session_name.is_none() {
            missing.push('s');
        }
        if self.time_descriptions.is_empty() {
            missing.push('t');
        }

        let (Some(origin), Some(session_name), false) =
            (self.origin, self.session_name, self.time_descriptions.is_empty())
        else {
            return Err(Error::IncompleteSession { missing });
        };

        debug!(
            "Parsed SDP session with {} session attributes and {} media sections",
            self.attributes.len(),
            self.media_descriptions.len()
        );

        Ok(SessionDescription {
            version: 0,
            origin,
            session_name,
            session_info: self.session_info,
            uri: self.uri,
            emails: self.emails,
            phones: self.phones,
            connection: self.connection,
            bandwidths: self.bandwidths,
            time_descriptions: self.time_descriptions,
            time_zones: self.time_zones.unwrap_or_default(),
            encryption_key: self.encryption_key,
            attributes: self.attributes,
            media_descriptions: self.media_descriptions,
        })
    }
}

/// Parses SDP text into a [`SessionDescription`]
///
/// The whole text is either turned into a complete session or rejected;
/// the first malformed line aborts the parse. Attributes with unknown
/// names are not errors and are kept verbatim.
///
/// # Examples
///
/// ```
/// use rvoip_sdp_core::parser::parse;
/// use rvoip_sdp_core::Error;
///
/// let session = parse("v=0\n\
/// o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\n\
/// s=SDP Seminar\n\
/// c=IN IP4 224.2.17.12/127\n\
/// t=2873397496 2873404696\n\
/// a=recvonly\n\
/// m=audio 49170 RTP/AVP 0\n").unwrap();
///
/// assert_eq!(session.origin.username, "jdoe");
/// assert_eq!(session.session_name, "SDP Seminar");
/// assert_eq!(session.media_descriptions[0].media, "audio");
///
/// assert_eq!(parse("o=- 0 0 IN IP4 0.0.0.0\n"), Err(Error::MissingVersion));
/// ```
pub fn parse(text: &str) -> Result<SessionDescription> {
    let lines = tokenize(text)?;
    let mut assembler = SessionAssembler::new();
    for line in &lines {
        assembler.feed(line)?;
    }
    assembler.finish()
}

/// Parses an SDP body received as bytes, e.g. from a SIP message
pub fn parse_sdp(content: &Bytes) -> Result<SessionDescription> {
    let text = str::from_utf8(content).map_err(|_| Error::InvalidEncoding)?;
    parse(text)
}
