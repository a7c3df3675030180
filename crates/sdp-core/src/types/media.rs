//! Media-level SDP types

use serde::{Deserialize, Serialize};

use crate::attributes::common::parse_payload_type;

use super::attribute::{
    Attribute, Candidate, Fingerprint, FormatParameters, MediaDirection, RtcpFeedback, RtpMap,
    Ssrc, SsrcGroup,
};
use super::session::{Bandwidth, ConnectionData};

/// A media section, from its `m=` line up to the next one
///
/// `m=<media> <port>[/<number of ports>] <proto> <fmt> ...`
///
/// Formats keep their `m=` line order, which is the preference order.
/// Attribute lookups below search this section only; session-level
/// attributes are not consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescription {
    /// `audio`, `video`, `application`, `text`, `message`, ...
    pub media: String,
    pub port: u16,
    pub port_count: Option<u16>,
    /// Transport protocol, e.g. `UDP/TLS/RTP/SAVPF`
    pub protocol: String,
    pub formats: Vec<String>,
    /// Media title (`i=`)
    pub title: Option<String>,
    pub connection: Option<ConnectionData>,
    pub bandwidths: Vec<Bandwidth>,
    pub encryption_key: Option<String>,
    pub attributes: Vec<Attribute>,
}

impl MediaDescription {
    pub fn new(
        media: impl Into<String>,
        port: u16,
        protocol: impl Into<String>,
        formats: Vec<String>,
    ) -> Self {
        MediaDescription {
            media: media.into(),
            port,
            port_count: None,
            protocol: protocol.into(),
            formats,
            title: None,
            connection: None,
            bandwidths: Vec::new(),
            encryption_key: None,
            attributes: Vec::new(),
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

    /// Payload types of the `m=` line
    ///
    /// Formats that are not a plain decimal in 0-127 are skipped.
    pub fn payload_types(&self) -> impl Iterator<Item = u8> + '_ {
        self.formats
            .iter()
            .filter_map(|f| parse_payload_type("m", f).ok())
    }

    pub fn has_format(&self, payload_type: u8) -> bool {
        self.payload_types().any(|pt| pt == payload_type)
    }

    pub fn rtpmaps(&self) -> impl Iterator<Item = &RtpMap> {
        self.attributes.iter().filter_map(|a| match a {
            Attribute::RtpMap(rtpmap) => Some(rtpmap),
            _ => None,
        })
    }

    pub fn rtpmap(&self, payload_type: u8) -> Option<&RtpMap> {
        self.rtpmaps().find(|r| r.payload_type == payload_type)
    }

    pub fn fmtps(&self) -> impl Iterator<Item = &FormatParameters> {
        self.attributes.iter().filter_map(|a| match a {
            Attribute::Fmtp(fmtp) => Some(fmtp),
            _ => None,
        })
    }

    pub fn fmtp(&self, payload_type: u8) -> Option<&FormatParameters> {
        self.fmtps().find(|f| f.payload_type == payload_type)
    }

    /// Feedback mechanisms applying to `payload_type`, wildcard entries included
    pub fn rtcp_feedback(&self, payload_type: u8) -> impl Iterator<Item = &RtcpFeedback> {
        self.attributes.iter().filter_map(move |a| match a {
            Attribute::RtcpFb(fb) if fb.payload.matches(payload_type) => Some(fb),
            _ => None,
        })
    }

    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.attributes.iter().filter_map(|a| match a {
            Attribute::Candidate(candidate) => Some(candidate),
            _ => None,
        })
    }

    pub fn ssrcs(&self) -> impl Iterator<Item = &Ssrc> {
        self.attributes.iter().filter_map(|a| match a {
            Attribute::Ssrc(ssrc) => Some(ssrc),
            _ => None,
        })
    }

    pub fn ssrc_groups(&self) -> impl Iterator<Item = &SsrcGroup> {
        self.attributes.iter().filter_map(|a| match a {
            Attribute::SsrcGroup(group) => Some(group),
            _ => None,
        })
    }

    /// Value of the `a=ssrc:<ssrc_id> <name>:<value>` line, e.g. the cname
    pub fn ssrc_attribute(&self, ssrc_id: u32, name: &str) -> Option<&str> {
        self.ssrcs()
            .find(|s| s.ssrc_id == ssrc_id && s.attribute == name)
            .and_then(|s| s.value.as_deref())
    }

    pub fn mid(&self) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Mid(mid) => Some(mid.as_str()),
            _ => None,
        })
    }

    pub fn direction(&self) -> Option<MediaDirection> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Direction(direction) => Some(*direction),
            _ => None,
        })
    }

    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Fingerprint(fp) => Some(fp),
            _ => None,
        })
    }

    pub fn ice_ufrag(&self) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::IceUfrag(ufrag) => Some(ufrag.as_str()),
            _ => None,
        })
    }

    pub fn ice_pwd(&self) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::IcePwd(pwd) => Some(pwd.as_str()),
            _ => None,
        })
    }

    pub fn is_rtcp_mux(&self) -> bool {
        self.attributes.iter().any(|a| matches!(a, Attribute::RtcpMux))
    }

    /// Retransmission payload types paired with the payload type they repair
    ///
    /// Each pair is `(rtx, base)`, taken from `rtx` rtpmaps whose fmtp
    /// carries a numeric `apt=`. Dangling references are left to the
    /// validator to report.
    pub fn retransmission_map(&self) -> Vec<(u8, u8)> {
        self.rtpmaps()
            .filter(|r| r.is_rtx())
            .filter_map(|r| {
                let apt = parse_payload_type("fmtp", self.fmtp(r.payload_type)?.apt()?).ok()?;
                Some((r.payload_type, apt))
            })
            .collect()
    }

    /// Keeps only the candidates matching `keep`; other attributes are untouched
    pub fn retain_candidates<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Candidate) -> bool,
    {
        self.attributes.retain(|a| match a {
            Attribute::Candidate(candidate) => keep(candidate),
            _ => true,
        });
    }
}
