use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DocRedactionError {
    #[error("{name} must be provided")]
    MissingArgument { name: String },

    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("expected a JSON object, got {found}")]
    NotAnObject { found: String },

    #[error("mcp error: {reason}")]
    Mcp { reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocRedactionError>;
