use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Config;
use crate::detect::{detect, Category};
use crate::error::Result;
use crate::storage;

/// Scan a document and print (or save) the detection report.
pub async fn run(input: &str, output: Option<&Path>, keep_empty: bool, config: &Config) -> Result<()> {
    let content = super::read_input(input)?;
    let detections = detect(&content);

    let found: usize = detections.iter().map(|(_, values)| values.len()).sum();
    eprintln!(
        "doc-redaction: {} match(es) in {} categor{}",
        found,
        detections.len(),
        if detections.len() == 1 { "y" } else { "ies" }
    );

    let mut report: BTreeMap<Category, Vec<String>> = detections.into_inner();
    if keep_empty || !config.output.omit_empty {
        for category in Category::ALL {
            report.entry(*category).or_default();
        }
    }

    match output {
        Some(path) => storage::save_as_json(&report, path, config.output.pretty)?,
        None => {
            let json = if config.output.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
