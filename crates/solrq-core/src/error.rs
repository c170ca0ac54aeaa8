use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The value handed to the encoder is not a recognized parameter shape.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// A search was requested without any query; nothing was sent.
    #[error("Empty query: nothing to send")]
    EmptyQuery,

    #[error("Endpoint not configured: {0}")]
    EndpointNotConfigured(String),

    /// The service could not be reached (refused, timeout, DNS).
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
