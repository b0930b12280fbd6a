//! Session state for one agent run

use tracing::debug;

use super::prompt::SYSTEM_PROMPT;
use crate::llm::Message;
use crate::tools::ToolContext;

/// Conversation history: the system instruction plus messages, oldest first
#[derive(Debug, Clone)]
pub struct Transcript {
    system_prompt: String,
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a transcript with the user's goal as the first message
    pub fn new(system_prompt: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            messages: vec![Message::user(goal)],
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Everything one run mutates
///
/// Created once per invocation and dropped at the end; sessions never share
/// state with each other.
#[derive(Debug)]
pub struct Session {
    pub transcript: Transcript,
    pub tools: ToolContext,
    pub verbose: bool,
}

impl Session {
    /// Create a session seeded with the standard system prompt and `goal`
    pub fn new(goal: impl Into<String>, allow_writes: bool, verbose: bool) -> Self {
        Self::with_system_prompt(SYSTEM_PROMPT, goal, allow_writes, verbose)
    }

    pub fn with_system_prompt(
        system_prompt: impl Into<String>,
        goal: impl Into<String>,
        allow_writes: bool,
        verbose: bool,
    ) -> Self {
        debug!(%allow_writes, %verbose, "Session::new: called");
        Self {
            transcript: Transcript::new(system_prompt, goal),
            tools: ToolContext::new(allow_writes),
            verbose,
        }
    }
}
