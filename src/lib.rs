//! Sensitive-data detection and rule-driven redaction for markdown documents.

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod format;
pub mod mcp;
pub mod redact;
pub mod storage;
pub mod tool;

pub use detect::{detect, Category, Detections};
pub use error::{DocRedactionError, Result};
pub use format::normalize;
pub use redact::{apply_redactions, redact_pattern, RedactionOptions};
pub use tool::remove_empty_entries;
