//! SDP (RFC 8866) parsing, serialization and validation for rvoip
//!
//! This crate turns session description text into a typed tree, renders
//! the tree back to text and checks the payload type, SSRC and BUNDLE
//! references inside it. It performs no I/O and keeps no state between
//! calls.
//!
//! # Examples
//!
//! ```
//! use rvoip_sdp_core::{parse, serialize, Attribute};
//!
//! let text = "v=0\r\n\
//! o=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n\
//! s=-\r\n\
//! t=0 0\r\n\
//! a=group:BUNDLE 0\r\n\
//! m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
//! c=IN IP4 0.0.0.0\r\n\
//! a=mid:0\r\n\
//! a=rtpmap:111 opus/48000/2\r\n\
//! a=x-vendor-flag\r\n";
//!
//! let mut session = parse(text).unwrap();
//! let audio = &session.media_descriptions[0];
//! assert_eq!(audio.rtpmap(111).unwrap().channels, Some(2));
//! assert!(matches!(audio.attributes[2], Attribute::Unknown { .. }));
//! assert!(session.validate().is_empty());
//!
//! session.media_descriptions[0].attributes.push(Attribute::RtcpMux);
//! assert!(serialize(&session).ends_with("a=x-vendor-flag\r\na=rtcp-mux\r\n"));
//! ```

// Declare modules
pub mod attributes;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod types;
pub mod validation;

// Re-export key public items
pub use error::{Error, Result};
pub use parser::{parse, parse_sdp, tokenize, SdpLine};
pub use serializer::serialize;
pub use types::*;
pub use validation::{validate, IssueLocation, ValidationIssue, ValidationReport};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parser::{parse, parse_sdp};
    pub use crate::serializer::serialize;
    pub use crate::types::{Attribute, MediaDescription, SessionDescription};
    pub use crate::validation::{validate, ValidationReport};
}
