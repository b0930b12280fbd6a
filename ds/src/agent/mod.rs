//! Agent module - session state and the conversation driver

mod engine;
mod prompt;
mod session;

pub use engine::{Agent, AgentOutcome, DEFAULT_MAX_STEPS};
pub use prompt::{DEFAULT_GOAL, MAX_STEPS_MESSAGE, SYSTEM_PROMPT};
pub use session::{Session, Transcript};
