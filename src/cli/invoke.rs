use crate::error::Result;
use crate::tool::{invoke, ToolUse};

/// Answer one tool-use envelope read from `input`.
///
/// A request that is not a valid envelope is an error; everything past that
/// point is reported inside the result envelope.
pub async fn run(input: &str) -> Result<()> {
    let raw = super::read_input(input)?;
    let tool: ToolUse = serde_json::from_str(raw.trim())?;
    let result = invoke(&tool);
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
