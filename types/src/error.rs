use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong between the browser and the support API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The login endpoint answered with a non-success status.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("server responded with status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// A response arrived but its body is not the shape we expect.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err)
    }
}
