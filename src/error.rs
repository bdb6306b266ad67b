//! Error types for the Speaker Recognition API client.

use thiserror::Error;

/// Result type alias for Speaker Recognition operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The operation category a remote call belongs to.
///
/// Every endpoint is tagged with its category so that a non-success
/// response is surfaced as the matching [`Error`] variant. Callers key
/// their handling off the variant, not the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateProfile,
    DeleteProfile,
    GetProfile,
    Enroll,
    Verify,
    Identify,
    ResetEnrollments,
    Phrases,
}

/// Error type for Speaker Recognition API operations.
///
/// The first eight variants mirror the operation categories one-to-one.
/// Each carries the message extracted from the remote error body or, when
/// no well-formed body is present, the decimal HTTP status code.
#[derive(Error, Debug)]
pub enum Error {
    /// Profile creation was rejected by the service.
    #[error("create profile failed: {0}")]
    CreateProfile(String),

    /// Profile deletion was rejected by the service.
    #[error("delete profile failed: {0}")]
    DeleteProfile(String),

    /// Profile retrieval (single or list) was rejected by the service.
    #[error("get profile failed: {0}")]
    GetProfile(String),

    /// Enrollment upload or enrollment status check failed.
    #[error("enrollment failed: {0}")]
    Enrollment(String),

    /// Verification failed.
    #[error("verification failed: {0}")]
    Verification(String),

    /// Identification submission or identification status check failed.
    #[error("identification failed: {0}")]
    Identification(String),

    /// Resetting a profile's enrollments failed.
    #[error("reset enrollments failed: {0}")]
    ResetEnrollments(String),

    /// Verification phrase listing failed.
    #[error("phrases lookup failed: {0}")]
    Phrases(String),

    /// HTTP request error (no remote status code to interpret).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error on a success payload.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (e.g. opening a file-backed audio source).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates the typed error for an operation category.
    pub(crate) fn remote(operation: Operation, message: impl Into<String>) -> Self {
        let message = message.into();
        match operation {
            Operation::CreateProfile => Error::CreateProfile(message),
            Operation::DeleteProfile => Error::DeleteProfile(message),
            Operation::GetProfile => Error::GetProfile(message),
            Operation::Enroll => Error::Enrollment(message),
            Operation::Verify => Error::Verification(message),
            Operation::Identify => Error::Identification(message),
            Operation::ResetEnrollments => Error::ResetEnrollments(message),
            Operation::Phrases => Error::Phrases(message),
        }
    }

    /// Returns the normalized remote message, if this is a remote error.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Error::CreateProfile(m)
            | Error::DeleteProfile(m)
            | Error::GetProfile(m)
            | Error::Enrollment(m)
            | Error::Verification(m)
            | Error::Identification(m)
            | Error::ResetEnrollments(m)
            | Error::Phrases(m) => Some(m),
            _ => None,
        }
    }
}
