use axum::http::StatusCode;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Errors surfaced to the HTTP caller
///
/// Serialized as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// A required field is absent or empty
    #[error("missing param: {0}")]
    MissingParam(String),

    /// A field is present but breaks a business rule
    #[error("invalid param: {0}")]
    InvalidParam(String),

    /// Any unexpected failure; the cause is logged, never returned
    #[error("internal server error")]
    Server,
}

impl HttpError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }

    /// Status code this error is answered with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParam(_) | Self::InvalidParam(_) => StatusCode::BAD_REQUEST,
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HttpError", 1)?;
        state.serialize_field("error", &self.to_string())?;
        state.end()
    }
}
