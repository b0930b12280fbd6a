//! Tool trait definition

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::{ToolContext, ToolError};
use crate::llm::ToolDefinition;

/// A tool that can be called by the LLM
///
/// Arguments arrive already validated into `Args`; a tool never sees raw
/// model JSON.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Typed arguments for one invocation
    type Args: DeserializeOwned + Send;

    /// Tool name (matches the function name the model calls)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool, returning the JSON payload for the model
    async fn execute(&self, args: Self::Args, ctx: &mut ToolContext) -> Result<Value, ToolError>;

    /// Definition sent to the model
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }
}

/// Result of a tool execution
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }

    /// Serialize a tool outcome; errors become their structured payload
    pub fn from_outcome(outcome: Result<Value, ToolError>) -> Self {
        match outcome {
            Ok(payload) => Self::success(payload.to_string()),
            Err(e) => {
                debug!(code = e.code(), error = %e, "ToolResult::from_outcome: tool failed");
                Self::error(e.to_payload().to_string())
            }
        }
    }

    /// Parse the content back into JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.content).unwrap_or_else(|_| Value::String(self.content.clone()))
    }
}
