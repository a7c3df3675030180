//! SDP parsing according to RFC 8866
//!
//! The tokenizer ([`tokenize`]) splits text into typed lines, the
//! assembler ([`parse`]) builds the session tree from them and hands
//! every `a=` line to [`parse_attribute`].

mod attribute_parser;
mod line_parser;
mod media_parser;
mod sdp_parser;
mod session_parser;
mod time_parser;

// Re-export the parsing functions
pub use self::attribute_parser::{is_recognized, parse_attribute};
pub use self::line_parser::{parse_sdp_line, tokenize, SdpLine};
pub use self::media_parser::parse_media_description_line;
pub use self::sdp_parser::{parse, parse_sdp};
pub use self::session_parser::{parse_bandwidth_line, parse_connection_line, parse_origin_line};
pub use self::time_parser::{
    parse_repeat_time_line, parse_time_description_line, parse_time_zone_line, parse_typed_time,
};
