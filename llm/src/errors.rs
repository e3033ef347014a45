use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-success status code.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the provider was unexpected (e.g. no choices
    /// returned in a completion).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type ChatResult<T> = Result<T, ChatError>;
