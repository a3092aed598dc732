//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// The result type that uses [PayloadError] as the error type.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// The error type for reading a dashboard payload.
///
/// Only the outer shape of a payload is checked; everything below the top
/// level is read leniently.
#[derive(Debug)]
pub enum PayloadError {
    /// A [serde_json::Error] encountered while parsing the payload text.
    Json(serde_json::Error),

    /// The payload parsed, but it is not a JSON object. Holds the JSON type found instead.
    NotAnObject(&'static str),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let payload_error = "payload error:";

        match self {
            PayloadError::Json(error) => write!(f, "{payload_error} invalid JSON: {error}"),
            PayloadError::NotAnObject(kind) => {
                write!(f, "{payload_error} expected a JSON object, found {kind}")
            }
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PayloadError::Json(error) => Some(error),
            PayloadError::NotAnObject(_) => None,
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(error: serde_json::Error) -> Self {
        PayloadError::Json(error)
    }
}
