//! ToolRequest - a model tool call validated into typed arguments

use serde::de::DeserializeOwned;
use tracing::debug;

use super::ToolError;
use super::builtin::{ListDirectoryArgs, ReadFileArgs, WriteFileArgs};
use crate::llm::ToolCall;

/// One validated tool invocation
#[derive(Debug, Clone)]
pub enum ToolRequest {
    GetFileInfo(ListDirectoryArgs),
    ReadFile(ReadFileArgs),
    WriteFile(WriteFileArgs),
}

impl ToolRequest {
    /// Validate a raw tool call
    ///
    /// Unknown names fail with `UnknownTool`; missing, extra or mistyped
    /// arguments fail with `InvalidArguments`.
    pub fn parse(call: &ToolCall) -> Result<Self, ToolError> {
        debug!(name = %call.name, id = %call.id, "ToolRequest::parse: called");
        match call.name.as_str() {
            "get_file_info" => parse_args(call).map(ToolRequest::GetFileInfo),
            "read_file" => parse_args(call).map(ToolRequest::ReadFile),
            "write_file" => parse_args(call).map(ToolRequest::WriteFile),
            other => Err(ToolError::UnknownTool { name: other.to_string() }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolRequest::GetFileInfo(_) => "get_file_info",
            ToolRequest::ReadFile(_) => "read_file",
            ToolRequest::WriteFile(_) => "write_file",
        }
    }
}

fn parse_args<T: DeserializeOwned>(call: &ToolCall) -> Result<T, ToolError> {
    serde_json::from_value(call.input.clone()).map_err(|e| ToolError::InvalidArguments {
        tool: call.name.clone(),
        reason: e.to_string(),
    })
}
