//! write_file tool - write content to a file

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::tools::path::normalize_path;
use crate::tools::{Tool, ToolContext, ToolError};

/// Create or overwrite `path` with `content`, creating parent directories
///
/// Returns the confirmation message. The write is not atomic.
pub async fn write_text(path: &Path, content: &str) -> Result<String, ToolError> {
    debug!(?path, bytes = content.len(), "write_text: called");

    if let Some(parent) = path.parent()
        && let Err(e) = tokio::fs::create_dir_all(parent).await
    {
        debug!(%e, "write_text: failed to create parent directories");
        return Err(ToolError::from_io(parent, e));
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|e| ToolError::from_io(path, e))?;

    Ok(format!("Wrote {} bytes to {}", content.len(), path.display()))
}

/// Arguments for write_file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteFileArgs {
    pub path: String,
    pub content: String,
}

/// Write content to a file when the session allows writes
pub struct WriteFileTool;

#[async_trait]
impl Tool for WriteFileTool {
    type Args = WriteFileArgs;

    fn name(&self) -> &'static str {
        "write_file"
    }

    fn description(&self) -> &'static str {
        "Create or update a file. Creates parent directories if missing. Only when explicitly instructed."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path of the file to write."
                },
                "content": {
                    "type": "string",
                    "description": "Full content to write into the file."
                }
            },
            "required": ["path", "content"]
        })
    }

    async fn execute(&self, args: WriteFileArgs, ctx: &mut ToolContext) -> Result<Value, ToolError> {
        let path = normalize_path(&args.path);

        if !ctx.allow_writes() {
            debug!(?path, "WriteFileTool::execute: writes disabled");
            return Err(ToolError::WriteNotAllowed { path: Some(path) });
        }

        let message = write_text(&path, &args.content).await?;

        // Freshly written files are readable without a listing
        ctx.record_written(&path);

        Ok(serde_json::json!({ "message": message }))
    }
}
