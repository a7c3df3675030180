//! SDP session model
//!
//! The tree is a strict hierarchy, session → media → attribute. All types
//! serialize with serde so a parsed session can be handed to JSON or any
//! other serde format.

pub mod attribute;
pub mod media;
pub mod session;

pub use attribute::{
    Attribute, Candidate, CandidateTransport, CandidateType, ExtMap, FeedbackPayload,
    Fingerprint, FmtpParameter, FormatParameters, Group, MediaDirection, Msid, MsidSemantic,
    RtcpAddress, RtcpFeedback, RtpMap, SetupRole, Ssrc, SsrcGroup,
};
pub use media::MediaDescription;
pub use session::{
    Bandwidth, ConnectionData, Origin, RepeatTime, SessionDescription, TimeDescription, TimeUnit,
    TimeZoneAdjustment, TypedTime,
};
