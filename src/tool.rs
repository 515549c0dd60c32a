//! Tool-invocation envelopes.
//!
//! An orchestrator calls the engines as named tools: it sends a [`ToolUse`]
//! carrying a correlation id and a JSON input, and gets back a [`ToolResult`]
//! echoing that id with a `success`/`error` status and text content.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::detect::detect;
use crate::error::{DocRedactionError, Result};
use crate::redact::{apply_redactions, RedactionOptions, DEFAULT_REDACTION_SYMBOL};

pub const DETECT_TOOL: &str = "detect_sensitive_data";
pub const REDACT_TOOL: &str = "redact_sensitive_data";
pub const OMIT_EMPTY_TOOL: &str = "omit_empty_keys";

/// A tool call from the orchestration layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUse {
    pub tool_use_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub input: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolContent {
    pub text: String,
}

/// Response envelope. `tool_use_id` always echoes the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub tool_use_id: String,
    pub status: ToolStatus,
    pub content: Vec<ToolContent>,
}

impl ToolResult {
    pub fn success(tool_use_id: &str, text: impl Into<String>) -> Self {
        Self::with_status(tool_use_id, ToolStatus::Success, text)
    }

    pub fn error(tool_use_id: &str, text: impl Into<String>) -> Self {
        Self::with_status(tool_use_id, ToolStatus::Error, text)
    }

    fn with_status(tool_use_id: &str, status: ToolStatus, text: impl Into<String>) -> Self {
        Self {
            tool_use_id: tool_use_id.to_string(),
            status,
            content: vec![ToolContent { text: text.into() }],
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    /// All content blocks joined by newlines.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Input of `detect_sensitive_data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DetectInput {
    /// The markdown document content to scan for sensitive information
    #[serde(default)]
    pub markdown_content: Option<String>,
}

/// Input of `redact_sensitive_data`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RedactInput {
    /// The markdown document content to redact sensitive information from
    #[serde(default)]
    pub markdown_content: Option<String>,

    /// What should be redacted, e.g. 'redact all email addresses and phone numbers'
    #[serde(default)]
    pub redaction_rules: Option<String>,

    /// Symbol to use for redaction (default: '[REDACTED]')
    #[serde(default = "default_symbol")]
    pub redaction_symbol: String,

    /// Replace each character of a match with a block glyph, keeping whitespace (default: false)
    #[serde(default)]
    pub preserve_structure: bool,
}

fn default_symbol() -> String {
    DEFAULT_REDACTION_SYMBOL.to_string()
}

impl Default for RedactInput {
    fn default() -> Self {
        Self {
            markdown_content: None,
            redaction_rules: None,
            redaction_symbol: default_symbol(),
            preserve_structure: false,
        }
    }
}

/// Input of `omit_empty_keys`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct OmitEmptyInput {
    /// A JSON-encoded object, e.g. a detection report
    #[serde(default, alias = "s")]
    pub json_object: String,
}

/// Either a validation failure (reported verbatim) or a processing failure.
#[derive(Debug)]
pub enum RedactFailure {
    MissingContent,
    MissingRules,
    Processing(String),
}

impl std::fmt::Display for RedactFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedactFailure::MissingContent => f.write_str("Error: No markdown content provided"),
            RedactFailure::MissingRules => f.write_str("Error: No redaction rules specified"),
            RedactFailure::Processing(reason) => {
                write!(f, "Error processing redaction: {reason}")
            }
        }
    }
}

/// Validate `input` and redact it, returning the success message body.
pub fn run_redaction(input: &RedactInput) -> std::result::Result<String, RedactFailure> {
    let content = input
        .markdown_content
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(RedactFailure::MissingContent)?;
    let rules = input
        .redaction_rules
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(RedactFailure::MissingRules)?;

    let options = RedactionOptions {
        symbol: input.redaction_symbol.clone(),
        preserve_structure: input.preserve_structure,
    };
    let redacted = apply_redactions(content, rules, &options)
        .map_err(|e| RedactFailure::Processing(e.to_string()))?;

    Ok(format!(
        "Successfully redacted sensitive information based on rules: '{rules}'\n\nRedacted markdown document:\n\n{redacted}"
    ))
}

fn parse_input<T: serde::de::DeserializeOwned>(input: &Value) -> serde_json::Result<T> {
    if input.is_null() {
        serde_json::from_value(Value::Object(Map::new()))
    } else {
        serde_json::from_value(input.clone())
    }
}

/// `redact_sensitive_data` tool. Never fails: every problem becomes an
/// error envelope.
pub fn redact_sensitive_data(tool: &ToolUse) -> ToolResult {
    let outcome = parse_input::<RedactInput>(&tool.input)
        .map_err(|e| RedactFailure::Processing(e.to_string()))
        .and_then(|input| run_redaction(&input));

    match outcome {
        Ok(text) => ToolResult::success(&tool.tool_use_id, text),
        Err(failure) => {
            tracing::warn!(tool_use_id = %tool.tool_use_id, "{failure}");
            ToolResult::error(&tool.tool_use_id, failure.to_string())
        }
    }
}

/// `detect_sensitive_data` tool. The content is a JSON detection report.
pub fn detect_sensitive_data(tool: &ToolUse) -> ToolResult {
    let input = match parse_input::<DetectInput>(&tool.input) {
        Ok(input) => input,
        Err(e) => return ToolResult::error(&tool.tool_use_id, format!("Error: {e}")),
    };
    let detections = detect(input.markdown_content.as_deref().unwrap_or_default());
    match serde_json::to_string(&detections) {
        Ok(json) => ToolResult::success(&tool.tool_use_id, json),
        Err(e) => ToolResult::error(&tool.tool_use_id, format!("Error: {e}")),
    }
}

/// `omit_empty_keys` tool.
pub fn omit_empty_keys(tool: &ToolUse) -> ToolResult {
    let compacted = parse_input::<OmitEmptyInput>(&tool.input)
        .map_err(DocRedactionError::from)
        .and_then(|input| remove_empty_entries(&input.json_object))
        .and_then(|map| Ok(serde_json::to_string(&map)?));

    match compacted {
        Ok(json) => ToolResult::success(&tool.tool_use_id, json),
        Err(e) => ToolResult::error(&tool.tool_use_id, format!("Error: {e}")),
    }
}

/// Dispatch a tool call by name.
pub fn invoke(tool: &ToolUse) -> ToolResult {
    tracing::debug!(tool = %tool.name, tool_use_id = %tool.tool_use_id, "tool invoked");
    match tool.name.as_str() {
        DETECT_TOOL => detect_sensitive_data(tool),
        REDACT_TOOL => redact_sensitive_data(tool),
        OMIT_EMPTY_TOOL => omit_empty_keys(tool),
        other => ToolResult::error(&tool.tool_use_id, format!("Error: unknown tool '{other}'")),
    }
}

/// Truthiness of a JSON value: null, false, zero, and empty strings,
/// arrays and objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a JSON object and keep only the entries with truthy values.
///
/// Malformed JSON, or JSON that is not an object, is an error.
pub fn remove_empty_entries(json_object: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(json_object)?;
    let Value::Object(entries) = value else {
        return Err(DocRedactionError::NotAnObject {
            found: kind(&value).to_string(),
        });
    };
    Ok(entries.into_iter().filter(|(_, v)| is_truthy(v)).collect())
}
