use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::redact::apply_redactions;
use crate::storage;

/// Redact a document according to free-text rules.
pub async fn run(
    input: &str,
    rules: &str,
    symbol: Option<&str>,
    preserve_structure: bool,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let content = super::read_input(input)?;
    let options = config.redaction.options(symbol, preserve_structure);
    let redacted = apply_redactions(&content, rules, &options)?;

    match output {
        Some(path) => {
            storage::save_text(&redacted, path)?;
            eprintln!("doc-redaction: redacted document written to {}", path.display());
        }
        None => print!("{redacted}"),
    }
    Ok(())
}
