use crate::error::Result;
use crate::tool::remove_empty_entries;

/// Drop empty entries from a JSON object and print the result.
pub async fn run(input: &str, pretty: bool) -> Result<()> {
    let raw = super::read_input(input)?;
    let compacted = remove_empty_entries(&raw)?;
    let json = if pretty {
        serde_json::to_string_pretty(&compacted)?
    } else {
        serde_json::to_string(&compacted)?
    };
    println!("{json}");
    Ok(())
}
