/// Errors returned by the content services.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to resolve media image: {0}")]
    MediaResolution(String),
    #[error("failed to resolve call to action: {0}")]
    CtaResolution(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to read content file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize response: {0}")]
    Serialization(serde_json::Error),
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
