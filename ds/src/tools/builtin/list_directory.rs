//! get_file_info tool - list one level of a directory

use async_trait::async_trait;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::tools::path::{normalize_path, strip_trailing_junk};
use crate::tools::{Tool, ToolContext, ToolError};

/// Kind of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a listed directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(serialize_with = "lossy_path")]
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub extension: Option<String>,
    pub size: Option<u64>,
}

/// A directory and its immediate children, sorted by name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryListing {
    #[serde(serialize_with = "lossy_path")]
    pub current_path: PathBuf,
    pub items: Vec<DirectoryEntry>,
}

impl DirectoryListing {
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }
}

fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// List the immediate children of `raw` (normalized first)
///
/// Symlinks and special files are skipped. An entry whose size cannot be read
/// is still listed, with no size.
pub async fn list_directory(raw: &str) -> Result<DirectoryListing, ToolError> {
    let current_path = normalize_path(raw);
    debug!(?current_path, "list_directory: called");

    let metadata = tokio::fs::metadata(&current_path)
        .await
        .map_err(|e| ToolError::from_io(&current_path, e))?;
    if !metadata.is_dir() {
        debug!("list_directory: not a directory");
        return Err(ToolError::NotADirectory { path: current_path });
    }

    let mut dir = tokio::fs::read_dir(&current_path)
        .await
        .map_err(|e| ToolError::from_io(&current_path, e))?;

    let mut items = Vec::new();
    while let Some(entry) = dir
        .next_entry()
        .await
        .map_err(|e| ToolError::from_io(&current_path, e))?
    {
        // A lossy name could never be read back, so such entries are left out
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(name = ?entry.file_name(), "list_directory: skipping non-UTF-8 name");
            continue;
        };
        let file_type = match entry.file_type().await {
            Ok(t) => t,
            Err(_) => {
                debug!(%name, "list_directory: failed to get file type, skipping entry");
                continue;
            }
        };
        let path = current_path.join(entry.file_name());

        if file_type.is_dir() {
            items.push(DirectoryEntry {
                name,
                path,
                kind: EntryKind::Directory,
                extension: None,
                size: None,
            });
        } else if file_type.is_file() {
            let size = entry_size(&name, entry.metadata().await);
            let extension = Path::new(&name)
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned());
            items.push(DirectoryEntry {
                name,
                path,
                kind: EntryKind::File,
                extension,
                size,
            });
        } else {
            debug!(%name, "list_directory: skipping symlink or special file");
        }
    }

    items.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(items = items.len(), "list_directory: entries collected");

    Ok(DirectoryListing { current_path, items })
}

/// File size, or none when its metadata could not be read
fn entry_size(name: &str, metadata: std::io::Result<std::fs::Metadata>) -> Option<u64> {
    match metadata {
        Ok(m) => Some(m.len()),
        Err(e) => {
            debug!(%name, error = %e, "entry_size: size unavailable");
            None
        }
    }
}

/// Arguments for get_file_info
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListDirectoryArgs {
    pub path: String,
}

/// List files and directories, recording them as discovered
pub struct ListDirectoryTool;

#[async_trait]
impl Tool for ListDirectoryTool {
    type Args = ListDirectoryArgs;

    fn name(&self) -> &'static str {
        "get_file_info"
    }

    fn description(&self) -> &'static str {
        "List files and directories (non-recursive) for a given directory path."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Directory path to inspect."
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: ListDirectoryArgs, ctx: &mut ToolContext) -> Result<Value, ToolError> {
        let cleaned = strip_trailing_junk(&args.path);
        if cleaned.len() != args.path.len() {
            debug!(raw = %args.path, %cleaned, "ListDirectoryTool::execute: stripped trailing characters");
        }

        let listing = list_directory(cleaned).await?;
        ctx.record_listing(&listing);
        Ok(listing.to_payload())
    }
}
