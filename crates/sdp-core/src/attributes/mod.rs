//! SDP Attribute Parsers
//!
//! One parser per recognized attribute name, each turning the text after
//! `a=<name>:` into an [`Attribute`](crate::types::Attribute). Dispatch by
//! name lives in [`crate::parser::parse_attribute`].

pub mod common;

// Media attribute modules
pub mod rtpmap;
pub mod fmtp;
pub mod ptime;

// Transport modules
pub mod candidate;
pub mod ice;
pub mod dtls;

// Identification modules
pub mod ssrc;
pub mod mid;
pub mod msid;

// Grouping
pub mod group;

// RTCP-related
pub mod rtcp;

// Extension modules
pub mod extmap;
pub mod control;
