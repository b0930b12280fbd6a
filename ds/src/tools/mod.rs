//! Tool system for docscout
//!
//! Three filesystem tools the model can call: `get_file_info` lists a
//! directory, `read_file` reads a file the session has already discovered,
//! `write_file` writes when the session allows it. Each session owns a
//! `ToolContext` holding its discovery sets.

mod context;
mod error;
mod executor;
pub mod path;
mod request;
mod traits;

pub mod builtin;

pub use context::ToolContext;
pub use error::ToolError;
pub use executor::ToolExecutor;
pub use request::ToolRequest;
pub use traits::{Tool, ToolResult};
