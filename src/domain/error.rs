use thiserror::Error;

/// Unsuspend unified error type
#[derive(Error, Debug)]
pub enum UnsuspendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Tab entry has no url field")]
    MissingUrl,

    #[error("Placeholder payload missing `{key}`: {payload}")]
    MissingPayloadKey { key: &'static str, payload: String },

    #[error("Output error: {0}")]
    Output(String),
}

pub type UnsuspendResult<T> = Result<T, UnsuspendError>;
