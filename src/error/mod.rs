use core::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid `{field}` value {value:?}: {reason}")]
    FormatViolation {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Malformed ledger index {value:?}: {source}")]
    MalformedNumeric {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("`{0}` is a named field and can't be stored as an additional property")]
    ReservedProperty(String),

    #[error("JSON Serialization error: {source}")]
    JSONSerializationError {
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn format_violation(
        field: &'static str,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Error::FormatViolation {
            field,
            value: value.into(),
            reason,
        }
    }

    /// Wire name of the field that caused the error, if there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::FormatViolation { field, .. } => Some(*field),
            Error::MalformedNumeric { .. } => Some("ledger"),
            Error::ReservedProperty(name) => Some(name.as_str()),
            Error::JSONSerializationError { .. } => None,
        }
    }
}
