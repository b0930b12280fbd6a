//! Tool error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during tool execution
///
/// None of these end the run: the executor turns each one into a JSON payload
/// the model receives as an ordinary tool result.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Not a file: {}", path.display())]
    IsDirectory { path: PathBuf },

    #[error("Attempted to read a file that has not been confirmed via get_file_info.")]
    FileNotConfirmed { path: PathBuf },

    #[error("Write operations are disabled. Enable allow-writes to proceed.")]
    WriteNotAllowed { path: Option<PathBuf> },

    #[error("Tool not found: {name}")]
    UnknownTool { name: String },

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ToolError {
    /// Map an I/O failure on `path` into the matching variant
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ToolError::NotFound { path },
            _ => ToolError::Io { path, source },
        }
    }

    /// Stable machine-readable code sent to the model
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::NotFound { .. } => "not_found",
            ToolError::NotADirectory { .. } => "not_a_directory",
            ToolError::IsDirectory { .. } => "is_a_directory",
            ToolError::FileNotConfirmed { .. } => "file_not_confirmed",
            ToolError::WriteNotAllowed { .. } => "write_not_allowed",
            ToolError::UnknownTool { .. } => "unknown_tool",
            ToolError::InvalidArguments { .. } => "invalid_arguments",
            ToolError::Io { .. } => "io_error",
        }
    }

    /// Path the error is about, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ToolError::NotFound { path }
            | ToolError::NotADirectory { path }
            | ToolError::IsDirectory { path }
            | ToolError::FileNotConfirmed { path }
            | ToolError::Io { path, .. } => Some(path),
            ToolError::WriteNotAllowed { path } => path.as_ref(),
            ToolError::UnknownTool { .. } | ToolError::InvalidArguments { .. } => None,
        }
    }

    /// Structured payload: `{"error": code, "message": ..., "path"?: ...}`
    pub fn to_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        if let Some(path) = self.path() {
            payload["path"] = serde_json::json!(path.to_string_lossy());
        }
        payload
    }
}
