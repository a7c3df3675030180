//! SDP ICE Attribute Parsers
//!
//! Implements parsers for the ICE attributes defined in RFC 8839:
//! `a=ice-ufrag`, `a=ice-pwd` and `a=ice-options`.

use crate::attributes::common::{parse_all, single_word, words};
use crate::error::{Error, Result};
use crate::types::Attribute;

/// RFC 8839 `ice-char`
fn is_ice_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/'
}

fn ice_credential<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = single_word(name, value)?;
    if let Some(c) = value.chars().find(|c| !is_ice_char(*c)) {
        return Err(Error::malformed_attribute(
            name,
            format!("invalid character {:?} in {:?}", c, value),
        ));
    }
    Ok(value)
}

/// Parses ice-ufrag attribute: a=ice-ufrag:<ufrag>
pub fn parse_ice_ufrag(value: &str) -> Result<Attribute> {
    Ok(Attribute::IceUfrag(ice_credential("ice-ufrag", value)?.to_string()))
}

/// Parses ice-pwd attribute: a=ice-pwd:<password>
pub fn parse_ice_pwd(value: &str) -> Result<Attribute> {
    Ok(Attribute::IcePwd(ice_credential("ice-pwd", value)?.to_string()))
}

/// Parses ice-options attribute: a=ice-options:<option> *(SP <option>)
pub fn parse_ice_options(value: &str) -> Result<Attribute> {
    let options = parse_all("ice-options", value, words, "expected at least one option")?;
    Ok(Attribute::IceOptions(
        options.into_iter().map(str::to_string).collect(),
    ))
}
