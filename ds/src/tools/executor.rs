//! ToolExecutor - validates and dispatches tool calls for a session

use serde_json::Value;
use tracing::debug;

use crate::llm::{ToolCall, ToolDefinition};

use super::builtin::{ListDirectoryTool, ReadFileTool, WriteFileTool};
use super::path::normalize_path;
use super::{Tool, ToolContext, ToolError, ToolRequest, ToolResult};

/// Routes tool calls to the filesystem tools
///
/// Every failure, from an unknown tool name to an I/O error, comes back as an
/// error `ToolResult`; `execute` never fails.
pub struct ToolExecutor {
    list: ListDirectoryTool,
    read: ReadFileTool,
    write: WriteFileTool,
}

impl ToolExecutor {
    /// Create executor with the three filesystem tools
    pub fn standard() -> Self {
        Self {
            list: ListDirectoryTool,
            read: ReadFileTool,
            write: WriteFileTool,
        }
    }

    /// Get tool definitions for LLM
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        vec![self.list.definition(), self.read.definition(), self.write.definition()]
    }

    /// Execute a tool call against the session context
    pub async fn execute(&self, tool_call: &ToolCall, ctx: &mut ToolContext) -> ToolResult {
        debug!(name = %tool_call.name, id = %tool_call.id, "ToolExecutor::execute: called");

        // The write gate holds whatever the arguments look like
        if tool_call.name == self.write.name() && !ctx.allow_writes() {
            debug!(id = %tool_call.id, "ToolExecutor::execute: writes disabled");
            let path = tool_call.input.get("path").and_then(Value::as_str).map(normalize_path);
            return ToolResult::from_outcome(Err(ToolError::WriteNotAllowed { path }));
        }

        let outcome = match ToolRequest::parse(tool_call) {
            Ok(request) => self.dispatch(request, ctx).await,
            Err(e) => Err(e),
        };
        ToolResult::from_outcome(outcome)
    }

    async fn dispatch(&self, request: ToolRequest, ctx: &mut ToolContext) -> Result<Value, ToolError> {
        match request {
            ToolRequest::GetFileInfo(args) => self.list.execute(args, ctx).await,
            ToolRequest::ReadFile(args) => self.read.execute(args, ctx).await,
            ToolRequest::WriteFile(args) => self.write.execute(args, ctx).await,
        }
    }

    /// Execute calls one after another, in order
    pub async fn execute_all(&self, tool_calls: &[ToolCall], ctx: &mut ToolContext) -> Vec<(String, ToolResult)> {
        let mut results = Vec::with_capacity(tool_calls.len());

        for call in tool_calls {
            let result = self.execute(call, ctx).await;
            results.push((call.id.clone(), result));
        }

        results
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_standard_executor_has_three_tools() {
        let executor = ToolExecutor::standard();
        let names: Vec<String> = executor.definitions().into_iter().map(|d| d.name).collect();

        assert_eq!(names, vec!["get_file_info", "read_file", "write_file"]);
    }

    #[test]
    fn test_every_definition_parses_as_request() {
        let executor = ToolExecutor::standard();
        let defs = executor.definitions();
        assert_eq!(defs.len(), 3);

        for def in defs {
            let err = ToolRequest::parse(&ToolCall::new("c", &def.name, json!({}))).unwrap_err();
            // Known name, so only the arguments can be wrong
            assert_eq!(err.code(), "invalid_arguments", "tool {}", def.name);
        }
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let executor = ToolExecutor::standard();
        let mut ctx = ToolContext::new(true);

        let call = ToolCall::new("call_1", "unknown_tool", json!({}));

        let result = executor.execute(&call, &mut ctx).await;
        assert!(result.is_error);
        assert_eq!(result.json()["error"], "unknown_tool");
    }

    #[tokio::test]
    async fn test_execute_all_preserves_order_and_ids() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.md"), "alpha").unwrap();
        let dir = temp.path().to_string_lossy().into_owned();
        let file = temp.path().join("a.md").to_string_lossy().into_owned();

        let executor = ToolExecutor::standard();
        let mut ctx = ToolContext::new(false);

        // The read sees the listing that ran before it in the same round
        let calls = vec![
            ToolCall::new("c1", "get_file_info", json!({ "path": dir })),
            ToolCall::new("c2", "read_file", json!({ "path": file })),
            ToolCall::new("c3", "write_file", json!({ "path": file, "content": "x" })),
        ];

        let results = executor.execute_all(&calls, &mut ctx).await;
        let ids: Vec<&str> = results.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);

        assert!(!results[0].1.is_error);
        assert_eq!(results[1].1.json()["content"], "alpha");
        assert_eq!(results[2].1.json()["error"], "write_not_allowed");
        assert_eq!(fs::read_to_string(temp.path().join("a.md")).unwrap(), "alpha");
    }

    #[tokio::test]
    async fn test_write_gate_checked_before_arguments() {
        let executor = ToolExecutor::standard();
        let mut ctx = ToolContext::new(false);

        // Missing content would be invalid_arguments if writes were allowed
        let call = ToolCall::new("w1", "write_file", json!({ "path": "/tmp/docscout-gate/x.md" }));
        let result = executor.execute(&call, &mut ctx).await;
        assert!(result.is_error);
        assert_eq!(result.json()["error"], "write_not_allowed");
        assert_eq!(result.json()["path"], "/tmp/docscout-gate/x.md");

        let call = ToolCall::new("w2", "write_file", json!({ "bogus": 1 }));
        let result = executor.execute(&call, &mut ctx).await;
        assert_eq!(result.json()["error"], "write_not_allowed");
        assert!(result.json().get("path").is_none());
        assert!(!std::path::Path::new("/tmp/docscout-gate").exists());
    }

    #[tokio::test]
    async fn test_malformed_write_reported_when_writes_allowed() {
        let executor = ToolExecutor::standard();
        let mut ctx = ToolContext::new(true);

        let call = ToolCall::new("w1", "write_file", json!({ "path": "/tmp/docscout-gate/x.md" }));
        let result = executor.execute(&call, &mut ctx).await;
        assert_eq!(result.json()["error"], "invalid_arguments");
    }

    #[tokio::test]
    async fn test_listing_not_found_is_structured() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("gone").to_string_lossy().into_owned();

        let executor = ToolExecutor::standard();
        let mut ctx = ToolContext::new(true);
        let result = executor
            .execute(&ToolCall::new("c1", "get_file_info", json!({ "path": missing })), &mut ctx)
            .await;

        assert!(result.is_error);
        assert_eq!(result.json()["error"], "not_found");
        assert!(ctx.discovered_dirs().is_empty());
    }
}
