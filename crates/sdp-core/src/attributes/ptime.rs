//! SDP Packet Time Attribute Parsers
//!
//! Implements parsers for `a=ptime` and `a=maxptime` (RFC 8866 section 6.4/6.5).
//! Both carry a duration in milliseconds.

use crate::attributes::common::parse_number;
use crate::error::Result;
use crate::types::Attribute;

/// Parses ptime attribute: a=ptime:<packet time>
pub fn parse_ptime(value: &str) -> Result<Attribute> {
    Ok(Attribute::Ptime(parse_number("ptime", value.trim())?))
}

/// Parses maxptime attribute: a=maxptime:<maximum packet time>
pub fn parse_maxptime(value: &str) -> Result<Attribute> {
    Ok(Attribute::MaxPtime(parse_number("maxptime", value.trim())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_ptime() {
        assert_eq!(parse_ptime("20").unwrap(), Attribute::Ptime(20));
        assert_eq!(parse_maxptime(" 120").unwrap(), Attribute::MaxPtime(120));
        assert!(matches!(parse_ptime("20ms"), Err(Error::InvalidNumber { field: "ptime", .. })));
    }
}
