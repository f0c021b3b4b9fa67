use thiserror::Error;

#[derive(Error, Debug)]
pub enum PunError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "llm")]
    #[error("LLM request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Malformed bot reply: {message}")]
    BotReplyError { message: String },
}

pub type Result<T> = std::result::Result<T, PunError>;
