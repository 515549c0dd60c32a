//! Persistence of detection reports and redacted documents.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Serialize `data` as JSON and write it to `path`, overwriting any
/// existing file.
pub fn save_as_json<T: Serialize>(data: &T, path: &Path, pretty: bool) -> Result<()> {
    let mut json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    json.push('\n');
    save_text(&json, path)?;
    tracing::info!("saved structured output to {}", path.display());
    Ok(())
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn save_text(content: &str, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)?;
    tracing::debug!(bytes = content.len(), "wrote {}", path.display());
    Ok(())
}
