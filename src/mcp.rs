//! MCP stdio server exposing the detection and redaction tools.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::transport::stdio;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};

use crate::detect::detect;
use crate::error::DocRedactionError;
use crate::tool::{remove_empty_entries, run_redaction, DetectInput, OmitEmptyInput, RedactInput};

#[derive(Clone)]
pub struct DocRedactionServer {
    tool_router: ToolRouter<Self>,
}

impl Default for DocRedactionServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[tool_router]
impl DocRedactionServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Detect sensitive information (emails, phone numbers, credit cards, IBANs, account numbers, addresses, names, currency amounts, percentages, numbers) in a markdown document. Returns a JSON object mapping category to matches; categories without matches are omitted."
    )]
    async fn detect_sensitive_data(
        &self,
        Parameters(input): Parameters<DetectInput>,
    ) -> Result<CallToolResult, McpError> {
        let detections = detect(input.markdown_content.as_deref().unwrap_or_default());
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &detections,
        )?)]))
    }

    #[tool(
        description = "Redact sensitive information from a markdown document based on user-specified criteria. Supports emails, phone numbers, SSNs, credit cards, zip codes, IP addresses, URLs, dates, names, addresses, and quoted or named custom terms."
    )]
    async fn redact_sensitive_data(
        &self,
        Parameters(input): Parameters<RedactInput>,
    ) -> Result<CallToolResult, McpError> {
        match run_redaction(&input) {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(failure) => Ok(CallToolResult::error(vec![Content::text(failure.to_string())])),
        }
    }

    #[tool(
        description = "Parse a JSON object string and return only the entries whose values are non-empty."
    )]
    async fn omit_empty_keys(
        &self,
        Parameters(input): Parameters<OmitEmptyInput>,
    ) -> Result<CallToolResult, McpError> {
        match remove_empty_entries(&input.json_object) {
            Ok(map) => Ok(CallToolResult::success(vec![Content::text(to_json(&map)?)])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))])),
        }
    }
}

#[tool_handler]
impl ServerHandler for DocRedactionServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Detect sensitive data in document text and redact it according to free-text rules."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Serve the tools over stdin/stdout until the client disconnects.
pub async fn serve_stdio() -> crate::error::Result<()> {
    tracing::info!("mcp server starting on stdio");
    let service = DocRedactionServer::new()
        .serve(stdio())
        .await
        .map_err(|e| DocRedactionError::Mcp {
            reason: format!("failed to start: {e}"),
        })?;
    let reason = service.waiting().await.map_err(|e| DocRedactionError::Mcp {
        reason: format!("server task failed: {e}"),
    })?;
    tracing::info!(?reason, "mcp server stopped");
    Ok(())
}
