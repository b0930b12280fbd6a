//! Built-in filesystem tools

mod list_directory;
mod read_file;
mod write_file;

pub use list_directory::{
    DirectoryEntry, DirectoryListing, EntryKind, ListDirectoryArgs, ListDirectoryTool, list_directory,
};
pub use read_file::{ReadFileArgs, ReadFileTool, read_text};
pub use write_file::{WriteFileArgs, WriteFileTool, write_text};
