use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TransportError(#[from] reqwest::Error),

    #[error("Status={0}, Response='{1}'")]
    RemoteError(StatusCode, String),

    #[error("Failed to decode response, {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("{0}")]
    ValidationError(String),

    #[error("Login failed, {0}")]
    AuthError(String),

    #[error("Invalid Url {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    InvalidConfig(String),

    #[error("Key {0} is missing")]
    MissingConfig(String),

    #[error(transparent)]
    VarError(#[from] std::env::VarError),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),
}

impl Error {
    /// Status code and body of a failed remote call, if this is one
    pub fn remote_status(&self) -> Option<(StatusCode, &str)> {
        match self {
            Error::RemoteError(status, body) => Some((*status, body.as_str())),
            _ => None,
        }
    }
}
