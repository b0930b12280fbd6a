//! read_file tool - read a confirmed file in full

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::tools::path::normalize_path;
use crate::tools::{Tool, ToolContext, ToolError};

/// Read the whole of `path` as UTF-8 text
///
/// `path` is expected to be normalized already.
pub async fn read_text(path: &Path) -> Result<String, ToolError> {
    debug!(?path, "read_text: called");
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ToolError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(ToolError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ToolError::from_io(path, e))
}

/// Arguments for read_file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadFileArgs {
    pub path: String,
}

/// Read a file's contents, only if a listing or write confirmed it
pub struct ReadFileTool;

#[async_trait]
impl Tool for ReadFileTool {
    type Args = ReadFileArgs;

    fn name(&self) -> &'static str {
        "read_file"
    }

    fn description(&self) -> &'static str {
        "Read a file's content. Must only be used after confirming existence via get_file_info."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path of the file to read."
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: ReadFileArgs, ctx: &mut ToolContext) -> Result<Value, ToolError> {
        let path = normalize_path(&args.path);

        if !ctx.is_confirmed_file(&path) {
            debug!(?path, "ReadFileTool::execute: path not in discovery set");
            return Err(ToolError::FileNotConfirmed { path });
        }

        let content = read_text(&path).await?;
        debug!(?path, bytes = content.len(), "ReadFileTool::execute: read complete");

        Ok(serde_json::json!({
            "path": path.to_string_lossy(),
            "content": content,
        }))
    }
}
