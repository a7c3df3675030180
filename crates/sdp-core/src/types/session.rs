//! Session-level SDP types
//!
//! The root [`SessionDescription`] together with the records carried by
//! the session-level `o=`, `c=`, `b=`, `t=`, `r=` and `z=` lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::attribute::{Attribute, Candidate};
use super::media::MediaDescription;
use crate::error::{Error, Result};
use crate::validation::{self, ValidationReport};

/// Origin (`o=`) line
///
/// `o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    /// Login of the originating host, `-` when unavailable
    pub username: String,
    /// Numeric session identifier
    pub session_id: u64,
    /// Version number, incremented on every modification
    pub session_version: u64,
    /// Network type, normally `IN`
    pub net_type: String,
    /// Address type, `IP4` or `IP6`
    pub addr_type: String,
    /// Address of the machine the session was created on
    pub unicast_address: String,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.username,
            self.session_id,
            self.session_version,
            self.net_type,
            self.addr_type,
            self.unicast_address
        )
    }
}

/// Connection data (`c=` line)
///
/// `c=<nettype> <addrtype> <connection-address>[/<ttl>][/<number of addresses>]`
///
/// TTL only exists for IP4 multicast addresses; IP6 multicast addresses
/// may only carry the number of addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionData {
    pub net_type: String,
    pub addr_type: String,
    pub connection_address: String,
    pub ttl: Option<u8>,
    pub num_addresses: Option<u32>,
}

impl ConnectionData {
    /// Creates unicast `IN` connection data
    pub fn new(addr_type: impl Into<String>, address: impl Into<String>) -> Self {
        ConnectionData {
            net_type: "IN".to_string(),
            addr_type: addr_type.into(),
            connection_address: address.into(),
            ttl: None,
            num_addresses: None,
        }
    }
}

impl fmt::Display for ConnectionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.net_type, self.addr_type, self.connection_address)?;
        if let Some(ttl) = self.ttl {
            write!(f, "/{}", ttl)?;
        }
        if let Some(count) = self.num_addresses {
            write!(f, "/{}", count)?;
        }
        Ok(())
    }
}

/// Bandwidth (`b=`) line, `b=<bwtype>:<bandwidth>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bandwidth {
    /// Modifier such as `AS`, `CT` or `TIAS`
    pub bw_type: String,
    /// Value, kilobits per second for `AS`/`CT`
    pub bandwidth: u64,
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bw_type, self.bandwidth)
    }
}

/// Unit suffix of a typed time value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            'd' => Some(TimeUnit::Days),
            'h' => Some(TimeUnit::Hours),
            'm' => Some(TimeUnit::Minutes),
            's' => Some(TimeUnit::Seconds),
            _ => None,
        }
    }

    pub fn suffix(&self) -> char {
        match self {
            TimeUnit::Days => 'd',
            TimeUnit::Hours => 'h',
            TimeUnit::Minutes => 'm',
            TimeUnit::Seconds => 's',
        }
    }

    pub fn seconds(&self) -> i64 {
        match self {
            TimeUnit::Days => 86_400,
            TimeUnit::Hours => 3_600,
            TimeUnit::Minutes => 60,
            TimeUnit::Seconds => 1,
        }
    }
}

/// A time value as written in `r=` and `z=` lines, e.g. `7d`, `-1h` or `3600`
///
/// The unit is kept so that a value renders back the way it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedTime {
    pub amount: i64,
    pub unit: Option<TimeUnit>,
}

impl TypedTime {
    pub fn seconds(amount: i64) -> Self {
        TypedTime { amount, unit: None }
    }

    /// Value converted to seconds, `None` if that overflows an `i64`
    pub fn as_seconds(&self) -> Option<i64> {
        self.amount.checked_mul(self.unit.map_or(1, |u| u.seconds()))
    }
}

impl fmt::Display for TypedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)?;
        if let Some(unit) = self.unit {
            write!(f, "{}", unit.suffix())?;
        }
        Ok(())
    }
}

/// Repeat time (`r=`) line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatTime {
    pub interval: TypedTime,
    pub active_duration: TypedTime,
    pub offsets: Vec<TypedTime>,
}

impl fmt::Display for RepeatTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interval, self.active_duration)?;
        for offset in &self.offsets {
            write!(f, " {}", offset)?;
        }
        Ok(())
    }
}

/// Timing (`t=`) line with the `r=` lines that follow it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDescription {
    /// Start time in NTP seconds, 0 for unbounded
    pub start_time: u64,
    /// Stop time in NTP seconds, 0 for unbounded
    pub stop_time: u64,
    pub repeat_times: Vec<RepeatTime>,
}

impl TimeDescription {
    /// `t=0 0`, the permanent session used by WebRTC and most SIP endpoints
    pub fn permanent() -> Self {
        TimeDescription {
            start_time: 0,
            stop_time: 0,
            repeat_times: Vec::new(),
        }
    }
}

/// One adjustment of a `z=` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneAdjustment {
    pub adjustment_time: u64,
    pub offset: TypedTime,
}

impl fmt::Display for TimeZoneAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.adjustment_time, self.offset)
    }
}

/// A complete SDP session description
///
/// Built by [`crate::parse`] or assembled in code through the builder
/// methods. The tree is a strict hierarchy: the session owns its media
/// descriptions, which own their attributes. Payload type and SSRC
/// relationships are lookups by integer key within one section.
///
/// # Examples
///
/// ```
/// use rvoip_sdp_core::{parse, Attribute, MediaDirection};
///
/// let session = parse("v=0\r\n\
/// o=- 3383575101619166804 4 IN IP4 127.0.0.1\r\n\
/// s=-\r\n\
/// c=IN IP4 10.0.0.1\r\n\
/// t=0 0\r\n\
/// m=audio 49170 RTP/AVP 0\r\n\
/// a=sendonly\r\n").unwrap();
///
/// assert_eq!(session.media_descriptions.len(), 1);
/// assert_eq!(session.media_descriptions[0].direction(), Some(MediaDirection::SendOnly));
/// // The media section has no c= of its own, so the session's applies
/// assert_eq!(session.media_connection(0).unwrap().connection_address, "10.0.0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescription {
    pub version: u32,
    pub origin: Origin,
    pub session_name: String,
    pub session_info: Option<String>,
    pub uri: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub connection: Option<ConnectionData>,
    pub bandwidths: Vec<Bandwidth>,
    pub time_descriptions: Vec<TimeDescription>,
    pub time_zones: Vec<TimeZoneAdjustment>,
    pub encryption_key: Option<String>,
    pub attributes: Vec<Attribute>,
    pub media_descriptions: Vec<MediaDescription>,
}

impl SessionDescription {
    /// Creates a session with the mandatory fields and a single `t=0 0`
    pub fn new(origin: Origin, session_name: impl Into<String>) -> Self {
        SessionDescription {
            version: 0,
            origin,
            session_name: session_name.into(),
            session_info: None,
            uri: None,
            emails: Vec::new(),
            phones: Vec::new(),
            connection: None,
            bandwidths: Vec::new(),
            time_descriptions: vec![TimeDescription::permanent()],
            time_zones: Vec::new(),
            encryption_key: None,
            attributes: Vec::new(),
            media_descriptions: Vec::new(),
        }
    }

    pub fn with_connection(mut self, connection: ConnectionData) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_media(mut self, media: MediaDescription) -> Self {
        self.media_descriptions.push(media);
        self
    }

    /// Connection data in effect for the media section at `index`
    ///
    /// A media-level `c=` overrides the session-level one.
    pub fn media_connection(&self, index: usize) -> Option<&ConnectionData> {
        let media = self.media_descriptions.get(index)?;
        media.connection.as_ref().or(self.connection.as_ref())
    }

    /// Finds the media section tagged with `a=mid:<mid>`
    pub fn media_by_mid(&self, mid: &str) -> Option<&MediaDescription> {
        self.media_descriptions.iter().find(|m| m.mid() == Some(mid))
    }

    /// Session-level ICE username fragment, if any
    pub fn ice_ufrag(&self) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::IceUfrag(ufrag) => Some(ufrag.as_str()),
            _ => None,
        })
    }

    /// Session-level `a=group` attributes
    pub fn groups(&self) -> impl Iterator<Item = &super::attribute::Group> {
        self.attributes.iter().filter_map(|a| match a {
            Attribute::Group(group) => Some(group),
            _ => None,
        })
    }

    /// Keeps only the candidates matching `keep` in every media section
    pub fn retain_candidates<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Candidate) -> bool,
    {
        for media in &mut self.media_descriptions {
            media.retain_candidates(&mut keep);
        }
    }

    /// Runs the referential checks over this session
    pub fn validate(&self) -> ValidationReport {
        validation::validate(self)
    }
}

impl FromStr for SessionDescription {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}

impl fmt::Display for SessionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::serializer::write_session(f, self)
    }
}
