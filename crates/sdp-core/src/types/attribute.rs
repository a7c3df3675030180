//! SDP attribute types
//!
//! [`Attribute`] is the tagged union of every `a=` line the crate models
//! structurally. Each record's `Display` writes the attribute value in
//! the inverse grammar of its parser; `Attribute`'s own `Display` writes
//! `name:value` (or bare `name` for flag attributes), without the `a=`
//! prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::session::ConnectionData;

/// Media direction attributes (RFC 8866 section 6.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaDirection {
    SendRecv,
    SendOnly,
    RecvOnly,
    Inactive,
}

impl MediaDirection {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sendrecv" => Some(MediaDirection::SendRecv),
            "sendonly" => Some(MediaDirection::SendOnly),
            "recvonly" => Some(MediaDirection::RecvOnly),
            "inactive" => Some(MediaDirection::Inactive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaDirection::SendRecv => "sendrecv",
            MediaDirection::SendOnly => "sendonly",
            MediaDirection::RecvOnly => "recvonly",
            MediaDirection::Inactive => "inactive",
        }
    }
}

impl fmt::Display for MediaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DTLS setup role, `a=setup` (RFC 4145)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupRole {
    Active,
    Passive,
    ActPass,
    HoldConn,
}

impl SetupRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupRole::Active => "active",
            SetupRole::Passive => "passive",
            SetupRole::ActPass => "actpass",
            SetupRole::HoldConn => "holdconn",
        }
    }
}

impl fmt::Display for SetupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `a=rtpmap:<payload type> <encoding name>/<clock rate>[/<channels>]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpMap {
    /// 0-127
    pub payload_type: u8,
    pub encoding_name: String,
    pub clock_rate: u32,
    /// Channel count for audio encodings
    pub channels: Option<u32>,
}

impl RtpMap {
    /// True for retransmission payload formats (RFC 4588)
    pub fn is_rtx(&self) -> bool {
        self.encoding_name.eq_ignore_ascii_case("rtx")
    }
}

impl fmt::Display for RtpMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.payload_type, self.encoding_name, self.clock_rate)?;
        if let Some(channels) = self.channels {
            write!(f, "/{}", channels)?;
        }
        Ok(())
    }
}

/// One entry of an fmtp parameter list, `key=value` or a bare `key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FmtpParameter {
    pub key: String,
    pub value: Option<String>,
}

impl fmt::Display for FmtpParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}

/// `a=fmtp:<payload type> <parameters>`
///
/// Parameters are kept in declaration order; some encoders care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatParameters {
    pub payload_type: u8,
    pub parameters: Vec<FmtpParameter>,
}

impl FormatParameters {
    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .and_then(|p| p.value.as_deref())
    }

    /// The raw `apt=` value of a retransmission format
    pub fn apt(&self) -> Option<&str> {
        self.get("apt")
    }
}

impl fmt::Display for FormatParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.payload_type)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}

/// Payload selector of an `a=rtcp-fb` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackPayload {
    /// `*`, applies to every payload type of the section
    Wildcard,
    PayloadType(u8),
}

impl FeedbackPayload {
    pub fn matches(&self, payload_type: u8) -> bool {
        match self {
            FeedbackPayload::Wildcard => true,
            FeedbackPayload::PayloadType(pt) => *pt == payload_type,
        }
    }
}

impl fmt::Display for FeedbackPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackPayload::Wildcard => f.write_str("*"),
            FeedbackPayload::PayloadType(pt) => write!(f, "{}", pt),
        }
    }
}

/// `a=rtcp-fb:<payload type> <type> [<parameter>]` (RFC 4585)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcpFeedback {
    pub payload: FeedbackPayload,
    /// `nack`, `ccm`, `ack`, `trr-int`, `goog-remb`, `transport-cc`, ...
    pub feedback_type: String,
    /// `pli`, `fir`, the trr-int interval, ...
    pub parameter: Option<String>,
}

impl fmt::Display for RtcpFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.payload, self.feedback_type)?;
        if let Some(param) = &self.parameter {
            write!(f, " {}", param)?;
        }
        Ok(())
    }
}

/// `a=rtcp:<port> [<nettype> <addrtype> <address>]` (RFC 3605)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcpAddress {
    pub port: u16,
    pub connection: Option<ConnectionData>,
}

impl fmt::Display for RtcpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.port)?;
        if let Some(conn) = &self.connection {
            write!(f, " {}", conn)?;
        }
        Ok(())
    }
}

/// ICE candidate transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateTransport {
    Udp,
    Tcp,
}

impl fmt::Display for CandidateTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateTransport::Udp => f.write_str("udp"),
            CandidateTransport::Tcp => f.write_str("tcp"),
        }
    }
}

/// ICE candidate type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateType {
    Host,
    ServerReflexive,
    PeerReflexive,
    Relay,
}

impl CandidateType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "host" => Some(CandidateType::Host),
            "srflx" => Some(CandidateType::ServerReflexive),
            "prflx" => Some(CandidateType::PeerReflexive),
            "relay" => Some(CandidateType::Relay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateType::Host => "host",
            CandidateType::ServerReflexive => "srflx",
            CandidateType::PeerReflexive => "prflx",
            CandidateType::Relay => "relay",
        }
    }
}

impl fmt::Display for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ICE candidate (RFC 8839)
///
/// `a=candidate:<foundation> <component-id> <transport> <priority>
/// <connection-address> <port> typ <cand-type> [raddr <addr>] [rport <port>]
/// *(<extension-name> <extension-value>)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub foundation: String,
    pub component_id: u32,
    pub transport: CandidateTransport,
    pub priority: u32,
    /// IP address or FQDN (mDNS `.local` names included)
    pub address: String,
    pub port: u16,
    pub candidate_type: CandidateType,
    pub related_address: Option<String>,
    pub related_port: Option<u16>,
    /// Extension pairs in declaration order (`tcptype`, `generation`, `network-id`, ...)
    pub extensions: Vec<(String, String)>,
}

impl Candidate {
    pub fn extension(&self, name: &str) -> Option<&str> {
        self.extensions
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// `active`, `passive` or `so` for TCP candidates
    pub fn tcp_type(&self) -> Option<&str> {
        self.extension("tcptype")
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} typ {}",
            self.foundation,
            self.component_id,
            self.transport,
            self.priority,
            self.address,
            self.port,
            self.candidate_type
        )?;
        if let Some(raddr) = &self.related_address {
            write!(f, " raddr {}", raddr)?;
        }
        if let Some(rport) = self.related_port {
            write!(f, " rport {}", rport)?;
        }
        for (name, value) in &self.extensions {
            write!(f, " {} {}", name, value)?;
        }
        Ok(())
    }
}

/// `a=fingerprint:<hash function> <fingerprint>` (RFC 8122)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Lowercase hash function name, e.g. `sha-256`
    pub hash_function: String,
    /// Uppercase hex bytes separated by `:`
    pub value: String,
}

impl Fingerprint {
    /// Fingerprint bytes
    pub fn bytes(&self) -> Vec<u8> {
        self.value
            .split(':')
            .filter_map(|pair| u8::from_str_radix(pair, 16).ok())
            .collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hash_function, self.value)
    }
}

/// `a=ssrc:<ssrc-id> <attribute>[:<value>]` (RFC 5576)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ssrc {
    pub ssrc_id: u32,
    /// `cname`, `msid`, `mslabel`, `label`, ...
    pub attribute: String,
    pub value: Option<String>,
}

impl fmt::Display for Ssrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ssrc_id, self.attribute)?;
        if let Some(value) = &self.value {
            write!(f, ":{}", value)?;
        }
        Ok(())
    }
}

/// `a=ssrc-group:<semantics> <ssrc-id> ...` (RFC 5576)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsrcGroup {
    /// `FID`, `FEC`, `SIM`, ...
    pub semantics: String,
    pub ssrc_ids: Vec<u32>,
}

impl fmt::Display for SsrcGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.semantics)?;
        for id in &self.ssrc_ids {
            write!(f, " {}", id)?;
        }
        Ok(())
    }
}

/// `a=extmap:<id>[/<direction>] <uri> [<extension attributes>]` (RFC 8285)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtMap {
    pub id: u16,
    pub direction: Option<MediaDirection>,
    pub uri: String,
    pub extension_attributes: Option<String>,
}

impl fmt::Display for ExtMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(direction) = self.direction {
            write!(f, "/{}", direction)?;
        }
        write!(f, " {}", self.uri)?;
        if let Some(attrs) = &self.extension_attributes {
            write!(f, " {}", attrs)?;
        }
        Ok(())
    }
}

/// `a=msid:<stream id> [<track id>]` (RFC 8830)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msid {
    pub stream_id: String,
    pub track_id: Option<String>,
}

impl fmt::Display for Msid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stream_id)?;
        if let Some(track) = &self.track_id {
            write!(f, " {}", track)?;
        }
        Ok(())
    }
}

/// `a=msid-semantic: <semantics> *(SP <identifier>)`
///
/// Session-level list of the media streams announced with `a=msid`;
/// `*` stands for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsidSemantic {
    /// `WMS` in practice
    pub semantics: String,
    pub identifiers: Vec<String>,
}

impl MsidSemantic {
    pub fn is_wildcard(&self) -> bool {
        self.identifiers.iter().any(|id| id == "*")
    }
}

impl fmt::Display for MsidSemantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.semantics)?;
        for id in &self.identifiers {
            write!(f, " {}", id)?;
        }
        Ok(())
    }
}

/// `a=group:<semantics> *(SP <identification-tag>)` (RFC 5888)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// `BUNDLE`, `LS`, `FID`, ...
    pub semantics: String,
    pub mids: Vec<String>,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.semantics)?;
        for mid in &self.mids {
            write!(f, " {}", mid)?;
        }
        Ok(())
    }
}

/// A parsed `a=` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Candidate(Candidate),
    EndOfCandidates,
    Fingerprint(Fingerprint),
    RtpMap(RtpMap),
    Fmtp(FormatParameters),
    RtcpFb(RtcpFeedback),
    Rtcp(RtcpAddress),
    RtcpMux,
    RtcpRsize,
    Ssrc(Ssrc),
    SsrcGroup(SsrcGroup),
    ExtMap(ExtMap),
    Msid(Msid),
    MsidSemantic(MsidSemantic),
    Setup(SetupRole),
    Mid(String),
    Group(Group),
    BundleOnly,
    /// Per-stream control URL (RFC 7826), e.g. `streamid=0`
    Control(String),
    /// ICE username fragment
    IceUfrag(String),
    /// ICE password
    IcePwd(String),
    IceOptions(Vec<String>),
    IceLite,
    Direction(MediaDirection),
    Ptime(u32),
    MaxPtime(u32),
    /// Any attribute not modeled above, kept verbatim
    ///
    /// `value` is `None` for `a=name` and `Some` (possibly empty) for
    /// `a=name:value`, so both spellings render back unchanged.
    Unknown {
        name: String,
        value: Option<String>,
    },
}

impl Attribute {
    /// Creates an opaque attribute
    pub fn unknown(name: impl Into<String>, value: Option<&str>) -> Self {
        Attribute::Unknown {
            name: name.into(),
            value: value.map(str::to_string),
        }
    }

    /// Attribute name as written after `a=`
    pub fn name(&self) -> &str {
        match self {
            Attribute::Candidate(_) => "candidate",
            Attribute::EndOfCandidates => "end-of-candidates",
            Attribute::Fingerprint(_) => "fingerprint",
            Attribute::RtpMap(_) => "rtpmap",
            Attribute::Fmtp(_) => "fmtp",
            Attribute::RtcpFb(_) => "rtcp-fb",
            Attribute::Rtcp(_) => "rtcp",
            Attribute::RtcpMux => "rtcp-mux",
            Attribute::RtcpRsize => "rtcp-rsize",
            Attribute::Ssrc(_) => "ssrc",
            Attribute::SsrcGroup(_) => "ssrc-group",
            Attribute::ExtMap(_) => "extmap",
            Attribute::Msid(_) => "msid",
            Attribute::MsidSemantic(_) => "msid-semantic",
            Attribute::Setup(_) => "setup",
            Attribute::Mid(_) => "mid",
            Attribute::Group(_) => "group",
            Attribute::BundleOnly => "bundle-only",
            Attribute::Control(_) => "control",
            Attribute::IceUfrag(_) => "ice-ufrag",
            Attribute::IcePwd(_) => "ice-pwd",
            Attribute::IceOptions(_) => "ice-options",
            Attribute::IceLite => "ice-lite",
            Attribute::Direction(direction) => direction.as_str(),
            Attribute::Ptime(_) => "ptime",
            Attribute::MaxPtime(_) => "maxptime",
            Attribute::Unknown { name, .. } => name.as_str(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Attribute::Unknown { .. })
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            Attribute::Candidate(c) => write!(f, "{}:{}", name, c),
            Attribute::Fingerprint(fp) => write!(f, "{}:{}", name, fp),
            Attribute::RtpMap(rtpmap) => write!(f, "{}:{}", name, rtpmap),
            Attribute::Fmtp(fmtp) => write!(f, "{}:{}", name, fmtp),
            Attribute::RtcpFb(fb) => write!(f, "{}:{}", name, fb),
            Attribute::Rtcp(rtcp) => write!(f, "{}:{}", name, rtcp),
            Attribute::Ssrc(ssrc) => write!(f, "{}:{}", name, ssrc),
            Attribute::SsrcGroup(group) => write!(f, "{}:{}", name, group),
            Attribute::ExtMap(extmap) => write!(f, "{}:{}", name, extmap),
            Attribute::Msid(msid) => write!(f, "{}:{}", name, msid),
            Attribute::MsidSemantic(semantic) => write!(f, "{}: {}", name, semantic),
            Attribute::Setup(role) => write!(f, "{}:{}", name, role),
            Attribute::Mid(mid) => write!(f, "{}:{}", name, mid),
            Attribute::Group(group) => write!(f, "{}:{}", name, group),
            Attribute::Control(url) => write!(f, "{}:{}", name, url),
            Attribute::IceUfrag(ufrag) => write!(f, "{}:{}", name, ufrag),
            Attribute::IcePwd(pwd) => write!(f, "{}:{}", name, pwd),
            Attribute::IceOptions(options) => write!(f, "{}:{}", name, options.join(" ")),
            Attribute::Ptime(ptime) => write!(f, "{}:{}", name, ptime),
            Attribute::MaxPtime(maxptime) => write!(f, "{}:{}", name, maxptime),
            Attribute::Unknown { value: Some(value), .. } => write!(f, "{}:{}", name, value),
            Attribute::Unknown { value: None, .. }
            | Attribute::EndOfCandidates
            | Attribute::RtcpMux
            | Attribute::RtcpRsize
            | Attribute::BundleOnly
            | Attribute::IceLite
            | Attribute::Direction(_) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_attribute_display() {
        assert_eq!(Attribute::unknown("x-custom", Some("foo")).to_string(), "x-custom:foo");
        assert_eq!(Attribute::unknown("x-flag", None).to_string(), "x-flag");
        assert_eq!(Attribute::unknown("x-empty", Some("")).to_string(), "x-empty:");
    }

    #[test]
    fn test_flag_attribute_display() {
        assert_eq!(Attribute::RtcpMux.to_string(), "rtcp-mux");
        assert_eq!(Attribute::Direction(MediaDirection::RecvOnly).to_string(), "recvonly");
    }

    #[test]
    fn test_candidate_display() {
        let candidate = Candidate {
            foundation: "3885250869".to_string(),
            component_id: 1,
            transport: CandidateTransport::Tcp,
            priority: 1518280447,
            address: "192.168.0.1".to_string(),
            port: 9,
            candidate_type: CandidateType::Host,
            related_address: None,
            related_port: None,
            extensions: vec![
                ("tcptype".to_string(), "active".to_string()),
                ("generation".to_string(), "0".to_string()),
            ],
        };
        assert_eq!(
            candidate.to_string(),
            "3885250869 1 tcp 1518280447 192.168.0.1 9 typ host tcptype active generation 0"
        );
        assert_eq!(candidate.tcp_type(), Some("active"));
    }

    #[test]
    fn test_msid_semantic_display() {
        let semantic = MsidSemantic {
            semantics: "WMS".to_string(),
            identifiers: vec!["*".to_string()],
        };
        assert!(semantic.is_wildcard());
        assert_eq!(Attribute::MsidSemantic(semantic).to_string(), "msid-semantic: WMS *");
        assert_eq!(
            Attribute::Control("streamid=0".to_string()).to_string(),
            "control:streamid=0"
        );
    }

    #[test]
    fn test_fingerprint_bytes() {
        let fp = Fingerprint {
            hash_function: "sha-1".to_string(),
            value: "0A:FF:10".to_string(),
        };
        assert_eq!(fp.bytes(), vec![0x0a, 0xff, 0x10]);
    }
}
