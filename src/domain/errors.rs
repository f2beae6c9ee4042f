use thiserror::Error;

/// Failures raised by the collaborators behind the sign up flow.
///
/// None of these are meant for the caller; the controller logs them and
/// answers with a generic server error.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("failed to encrypt value: {0}")]
    Encryption(String),

    #[error("repository failure: {0}")]
    Repository(String),

    #[error("email validator failure: {0}")]
    EmailValidator(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
