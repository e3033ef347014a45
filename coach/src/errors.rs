use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Chat model error: {0}")]
    Model(#[from] gptlife_llm::ChatError),
    /// The model's reply could not be parsed or validated against the
    /// expected advice shape.
    #[error("Malformed model reply: {0}")]
    MalformedReply(String),
}
