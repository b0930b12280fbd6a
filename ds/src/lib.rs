//! docscout - a tool-calling agent for file trees
//!
//! docscout sends a goal to an OpenAI-compatible chat model together with
//! three filesystem tools, executes the tool calls the model asks for, and
//! feeds the results back until the model answers or a step budget runs out.
//!
//! # Core Concepts
//!
//! - **Look before reading**: a file can only be read after a directory
//!   listing (or a write) in the same session has shown it exists
//! - **Explicit write permission**: writes are refused unless the session
//!   allows them
//! - **Errors are tool results**: every tool failure goes back to the model as
//!   a structured JSON payload instead of ending the run
//!
//! # Modules
//!
//! - [`agent`] - Session state and the conversation driver
//! - [`llm`] - LLM client trait and OpenAI implementation
//! - [`tools`] - Filesystem tools, path handling and dispatch
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod agent;
pub mod cli;
pub mod config;
pub mod llm;
pub mod tools;

// Re-export commonly used types
pub use agent::{Agent, AgentOutcome, Session};
pub use config::{AgentConfig, Config, LlmConfig};
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient, ToolCall};
pub use tools::{ToolContext, ToolError, ToolExecutor, ToolRequest, ToolResult};
