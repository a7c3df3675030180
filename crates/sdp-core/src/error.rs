use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing SDP
///
/// Any error aborts the parse as a whole; no partially assembled session
/// is ever returned alongside one. Referential problems that SDP consumers
/// usually tolerate are reported by the validator instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A line does not have the `<letter>=<value>` shape
    #[error("Malformed SDP line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
    },

    /// The description does not start with `v=0`
    #[error("SDP must start with a v=0 line")]
    MissingVersion,

    /// End of input was reached without one of the mandatory `o=`, `s=`, `t=` lines
    #[error("Incomplete SDP session, missing {}", join_line_types(.missing))]
    IncompleteSession {
        /// Line types that never appeared
        missing: Vec<char>,
    },

    /// A line appeared where the section structure does not allow it
    #[error("Unexpected {line_type}= line: {reason}")]
    UnexpectedLine {
        /// Type letter of the offending line
        line_type: char,
        /// What the section structure required instead
        reason: String,
    },

    /// The value of a non-attribute line does not match its grammar
    #[error("Invalid {line_type}= line: {reason}")]
    InvalidLine {
        /// Type letter of the offending line
        line_type: char,
        /// Which part of the value failed
        reason: String,
    },

    /// A recognized attribute's value does not match its sub-grammar
    #[error("Malformed a={name} attribute: {reason}")]
    MalformedAttribute {
        /// Attribute name as written after `a=`
        name: String,
        /// Which part of the value failed
        reason: String,
    },

    /// A numeric field holds non-digit content or overflows its type
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Name of the numeric field, e.g. `clock rate`
        field: &'static str,
        /// Raw field content
        value: String,
    },

    /// Byte input is not valid UTF-8
    #[error("SDP content is not valid UTF-8")]
    InvalidEncoding,
}

impl Error {
    pub(crate) fn malformed_attribute(name: &str, reason: impl Into<String>) -> Self {
        Error::MalformedAttribute {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_line(line_type: char, reason: impl Into<String>) -> Self {
        Error::InvalidLine {
            line_type,
            reason: reason.into(),
        }
    }

    pub(crate) fn unexpected_line(line_type: char, reason: impl Into<String>) -> Self {
        Error::UnexpectedLine {
            line_type,
            reason: reason.into(),
        }
    }
}

fn join_line_types(missing: &[char]) -> String {
    missing
        .iter()
        .map(|t| format!("{t}="))
        .collect::<Vec<_>>()
        .join(", ")
}
