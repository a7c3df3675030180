//! Referential validation of parsed sessions
//!
//! Cross references in SDP are plain keys looked up within one section:
//! `apt=` values name payload types, `ssrc-group` members name `a=ssrc`
//! sources, `a=group` tags name media sections. The parser does not
//! resolve them. [`validate`] walks the tree and reports every reference
//! that does not resolve, keyed by where it was found.
//!
//! Issues are diagnostics, not errors. Endpoints commonly tolerate these
//! gaps, so the decision to reject a session is left to the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::attributes::common::parse_payload_type;
use crate::types::{Attribute, FeedbackPayload, MediaDescription, SessionDescription};

/// RFC 3551 static payload type assignments
static STATIC_PAYLOAD_TYPES: [u8; 24] = [
    0,  // PCMU
    3,  // GSM
    4,  // G723
    5,  // DVI4/8000
    6,  // DVI4/16000
    7,  // LPC
    8,  // PCMA
    9,  // G722
    10, // L16 stereo
    11, // L16 mono
    12, // QCELP
    13, // CN
    14, // MPA
    15, // G728
    16, // DVI4/11025
    17, // DVI4/22050
    18, // G729
    25, // CelB
    26, // JPEG
    28, // nv
    31, // H261
    32, // MPV
    33, // MP2T
    34, // H263
];

pub fn is_static_payload_type(payload_type: u8) -> bool {
    STATIC_PAYLOAD_TYPES.contains(&payload_type)
}

/// Where an issue was found
///
/// `section` is `None` for the session level and the media index
/// otherwise. `attribute` indexes the section's attribute list; `None`
/// points at the section's header line (the `m=` line for media).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IssueLocation {
    pub section: Option<usize>,
    pub attribute: Option<usize>,
}

impl IssueLocation {
    pub fn session_attribute(attribute: usize) -> Self {
        IssueLocation {
            section: None,
            attribute: Some(attribute),
        }
    }

    pub fn media_line(section: usize) -> Self {
        IssueLocation {
            section: Some(section),
            attribute: None,
        }
    }

    pub fn media_attribute(section: usize, attribute: usize) -> Self {
        IssueLocation {
            section: Some(section),
            attribute: Some(attribute),
        }
    }
}

impl fmt::Display for IssueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.section, self.attribute) {
            (None, Some(a)) => write!(f, "session attribute {}", a),
            (None, None) => f.write_str("session"),
            (Some(s), None) => write!(f, "media {} m= line", s),
            (Some(s), Some(a)) => write!(f, "media {} attribute {}", s, a),
        }
    }
}

/// A reference that does not resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// `apt=` names a payload type without an rtpmap on the `m=` line
    UnresolvedApt { payload_type: u8, apt: u8 },
    /// `apt=` value is not a payload type number
    InvalidApt { payload_type: u8, value: String },
    /// `ssrc-group` member without any `a=ssrc` line
    UnresolvedSsrcGroupMember { semantics: String, ssrc: u32 },
    /// Dynamic payload type on the `m=` line without an rtpmap
    MissingRtpMap { payload_type: u8 },
    /// RTP format on the `m=` line that is not a payload type in 0-127
    InvalidPayloadType { format: String },
    /// rtpmap, fmtp or rtcp-fb for a payload type not on the `m=` line
    UndeclaredPayloadType { payload_type: u8 },
    /// `a=group` tag without a media section carrying that `a=mid`
    UnresolvedGroupMid { semantics: String, mid: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::UnresolvedApt { payload_type, apt } => write!(
                f,
                "payload type {} repairs {}, which is not declared in this section",
                payload_type, apt
            ),
            ValidationIssue::InvalidApt { payload_type, value } => {
                write!(f, "payload type {} has invalid apt value {:?}", payload_type, value)
            }
            ValidationIssue::UnresolvedSsrcGroupMember { semantics, ssrc } => {
                write!(f, "{} group member {} has no a=ssrc line", semantics, ssrc)
            }
            ValidationIssue::MissingRtpMap { payload_type } => {
                write!(f, "payload type {} has no rtpmap", payload_type)
            }
            ValidationIssue::InvalidPayloadType { format } => {
                write!(f, "format {:?} is not a valid RTP payload type", format)
            }
            ValidationIssue::UndeclaredPayloadType { payload_type } => {
                write!(f, "payload type {} is not listed on the m= line", payload_type)
            }
            ValidationIssue::UnresolvedGroupMid { semantics, mid } => {
                write!(f, "{} group references unknown mid {:?}", semantics, mid)
            }
        }
    }
}

/// Issues found by [`validate`], ordered by location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: BTreeMap<IssueLocation, Vec<ValidationIssue>>,
}

impl ValidationReport {
    fn push(&mut self, location: IssueLocation, issue: ValidationIssue) {
        self.issues.entry(location).or_default().push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Total number of issues
    pub fn len(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }

    pub fn issues_at(&self, location: &IssueLocation) -> &[ValidationIssue] {
        self.issues.get(location).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IssueLocation, &ValidationIssue)> {
        self.issues
            .iter()
            .flat_map(|(location, issues)| issues.iter().map(move |issue| (location, issue)))
    }

    pub fn as_map(&self) -> &BTreeMap<IssueLocation, Vec<ValidationIssue>> {
        &self.issues
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (location, issue) in self.iter() {
            writeln!(f, "{}: {}", location, issue)?;
        }
        Ok(())
    }
}

fn is_rtp_profile(media: &MediaDescription) -> bool {
    media.protocol.split('/').any(|p| p == "RTP")
}

fn check_media(report: &mut ValidationReport, index: usize, media: &MediaDescription) {
    let rtp = is_rtp_profile(media);

    if rtp {
        for format in &media.formats {
            let issue = match parse_payload_type("m", format) {
                Ok(payload_type)
                    if media.rtpmap(payload_type).is_none()
                        && !is_static_payload_type(payload_type) =>
                {
                    ValidationIssue::MissingRtpMap { payload_type }
                }
                Ok(_) => continue,
                Err(_) => ValidationIssue::InvalidPayloadType {
                    format: format.clone(),
                },
            };
            report.push(IssueLocation::media_line(index), issue);
        }
    }

    for (position, attribute) in media.attributes.iter().enumerate() {
        let location = IssueLocation::media_attribute(index, position);

        let declared = match attribute {
            Attribute::RtpMap(rtpmap) => Some(rtpmap.payload_type),
            Attribute::Fmtp(fmtp) => Some(fmtp.payload_type),
            Attribute::RtcpFb(fb) => match fb.payload {
                FeedbackPayload::PayloadType(pt) => Some(pt),
                FeedbackPayload::Wildcard => None,
            },
            _ => None,
        };
        if let Some(payload_type) = declared {
            if rtp && !media.has_format(payload_type) {
                report.push(location, ValidationIssue::UndeclaredPayloadType { payload_type });
            }
        }

        match attribute {
            Attribute::Fmtp(fmtp) => {
                let Some(value) = fmtp.apt() else {
                    continue;
                };
                match parse_payload_type("fmtp", value) {
                    Ok(apt) if media.rtpmap(apt).is_some() && media.has_format(apt) => {}
                    Ok(apt) => report.push(
                        location,
                        ValidationIssue::UnresolvedApt {
                            payload_type: fmtp.payload_type,
                            apt,
                        },
                    ),
                    Err(_) => report.push(
                        location,
                        ValidationIssue::InvalidApt {
                            payload_type: fmtp.payload_type,
                            value: value.to_string(),
                        },
                    ),
                }
            }
            Attribute::SsrcGroup(group) => {
                for ssrc in &group.ssrc_ids {
                    if !media.ssrcs().any(|s| s.ssrc_id == *ssrc) {
                        report.push(
                            location,
                            ValidationIssue::UnresolvedSsrcGroupMember {
                                semantics: group.semantics.clone(),
                                ssrc: *ssrc,
                            },
                        );
                    }
                }
            }
            _ => {}
        }
    }
}

fn check_session(report: &mut ValidationReport, session: &SessionDescription) {
    for (position, attribute) in session.attributes.iter().enumerate() {
        let Attribute::Group(group) = attribute else {
            continue;
        };
        for mid in &group.mids {
            if session.media_by_mid(mid).is_none() {
                report.push(
                    IssueLocation::session_attribute(position),
                    ValidationIssue::UnresolvedGroupMid {
                        semantics: group.semantics.clone(),
                        mid: mid.clone(),
                    },
                );
            }
        }
    }
}

/// Checks every cross reference in `session`
///
/// # Examples
///
/// ```
/// use rvoip_sdp_core::{parse, validate};
///
/// let session = parse("v=0\r\n\
/// o=- 1 1 IN IP4 127.0.0.1\r\n\
/// s=-\r\n\
/// t=0 0\r\n\
/// m=video 9 UDP/TLS/RTP/SAVPF 96 97\r\n\
/// a=rtpmap:96 VP8/90000\r\n\
/// a=rtpmap:97 rtx/90000\r\n\
/// a=fmtp:97 apt=96\r\n").unwrap();
///
/// assert!(validate(&session).is_empty());
/// ```
pub fn validate(session: &SessionDescription) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_session(&mut report, session);
    for (index, media) in session.media_descriptions.iter().enumerate() {
        check_media(&mut report, index, media);
    }
    debug!("SDP validation found {} issues", report.len());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const HEADER: &str = "v=0\r\no=- 1 1 IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\n";

    fn report(body: &str) -> ValidationReport {
        let session = parse(&format!("{}{}", HEADER, body)).unwrap();
        validate(&session)
    }

    #[test]
    fn test_static_payload_types_need_no_rtpmap() {
        assert!(report("m=audio 9 RTP/AVP 0 8 18\r\n").is_empty());
    }

    #[test]
    fn test_missing_rtpmap_reported_on_media_line() {
        let report = report("m=audio 9 RTP/AVP 0 111\r\n");
        assert_eq!(
            report.issues_at(&IssueLocation::media_line(0)),
            &[ValidationIssue::MissingRtpMap { payload_type: 111 }]
        );
    }

    #[test]
    fn test_out_of_range_formats_reported() {
        let report = report("m=audio 9 RTP/AVP 200 +0 0\r\n");
        assert_eq!(
            report.issues_at(&IssueLocation::media_line(0)),
            &[
                ValidationIssue::InvalidPayloadType { format: "200".to_string() },
                ValidationIssue::InvalidPayloadType { format: "+0".to_string() },
            ]
        );
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_apt_must_be_plain_payload_type() {
        let report = report(
            "m=video 9 RTP/AVPF 97\r\na=rtpmap:97 rtx/90000\r\na=fmtp:97 apt=+96\r\n",
        );
        assert!(matches!(
            report.issues_at(&IssueLocation::media_attribute(0, 1)),
            [ValidationIssue::InvalidApt { payload_type: 97, .. }]
        ));
    }

    #[test]
    fn test_non_rtp_sections_skip_payload_checks() {
        assert!(report("m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\n").is_empty());
    }

    #[test]
    fn test_unresolved_apt() {
        let report = report(
            "m=video 9 RTP/AVPF 97\r\na=rtpmap:97 rtx/90000\r\na=fmtp:97 apt=96\r\n",
        );
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.issues_at(&IssueLocation::media_attribute(0, 1)),
            &[ValidationIssue::UnresolvedApt { payload_type: 97, apt: 96 }]
        );
    }

    #[test]
    fn test_invalid_apt() {
        let report = report(
            "m=video 9 RTP/AVPF 96 97\r\na=rtpmap:96 VP8/90000\r\na=rtpmap:97 rtx/90000\r\na=fmtp:97 apt=vp8\r\n",
        );
        assert!(matches!(
            report.issues_at(&IssueLocation::media_attribute(0, 2)),
            [ValidationIssue::InvalidApt { payload_type: 97, .. }]
        ));
    }

    #[test]
    fn test_undeclared_payload_type() {
        let report = report("m=audio 9 RTP/AVP 0\r\na=rtpmap:111 opus/48000/2\r\n");
        assert_eq!(
            report.issues_at(&IssueLocation::media_attribute(0, 0)),
            &[ValidationIssue::UndeclaredPayloadType { payload_type: 111 }]
        );
    }

    #[test]
    fn test_ssrc_group_members() {
        let report = report(
            "m=video 9 RTP/AVPF 96\r\na=rtpmap:96 VP8/90000\r\na=ssrc-group:FID 1 2\r\na=ssrc:1 cname:x\r\n",
        );
        assert_eq!(
            report.issues_at(&IssueLocation::media_attribute(0, 1)),
            &[ValidationIssue::UnresolvedSsrcGroupMember {
                semantics: "FID".to_string(),
                ssrc: 2
            }]
        );
    }

    #[test]
    fn test_bundle_group_mids() {
        let report = report("a=group:BUNDLE 0 1\r\nm=audio 9 RTP/AVP 0\r\na=mid:0\r\n");
        assert_eq!(
            report.issues_at(&IssueLocation::session_attribute(0)),
            &[ValidationIssue::UnresolvedGroupMid {
                semantics: "BUNDLE".to_string(),
                mid: "1".to_string()
            }]
        );
    }

    #[test]
    fn test_report_display() {
        let report = report("m=audio 9 RTP/AVP 111\r\n");
        assert_eq!(report.to_string(), "media 0 m= line: payload type 111 has no rtpmap\n");
    }
}
