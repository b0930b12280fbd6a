//! Agent - the conversation driver
//!
//! Runs the tool-calling loop for one session: query the model, execute any
//! tool calls it asks for, feed the results back, and stop on a plain-text
//! answer or when the step budget is spent.

use std::sync::Arc;

use colored::Colorize;
use tracing::{debug, info, warn};

use super::prompt::MAX_STEPS_MESSAGE;
use super::session::Session;
use crate::config::Config;
use crate::llm::{CompletionRequest, CompletionResponse, ContentBlock, LlmClient, LlmError, Message, TokenUsage, ToolCall};
use crate::tools::{ToolExecutor, ToolResult};

/// Default number of model queries per run
pub const DEFAULT_MAX_STEPS: u32 = 20;

/// Longest tool output echoed in verbose mode
const ECHO_LIMIT: usize = 400;

/// Where the driver is in the loop
#[derive(Debug)]
enum DriverState {
    /// Next step is a model query
    AwaitingModel,

    /// The model asked for these calls; run them in order
    ExecutingTools(Vec<ToolCall>),

    /// The model answered without tool calls
    Done(String),
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutcome {
    /// The model produced a final answer
    Completed {
        answer: String,
        rounds: u32,
        usage: TokenUsage,
    },

    /// The step budget ran out first
    StepBudgetExhausted { rounds: u32, usage: TokenUsage },
}

impl AgentOutcome {
    /// Text to show the user
    pub fn message(&self) -> &str {
        match self {
            AgentOutcome::Completed { answer, .. } => answer,
            AgentOutcome::StepBudgetExhausted { .. } => MAX_STEPS_MESSAGE,
        }
    }

    /// Model queries made
    pub fn rounds(&self) -> u32 {
        match self {
            AgentOutcome::Completed { rounds, .. } | AgentOutcome::StepBudgetExhausted { rounds, .. } => *rounds,
        }
    }

    /// Token usage summed over every round
    pub fn usage(&self) -> &TokenUsage {
        match self {
            AgentOutcome::Completed { usage, .. } | AgentOutcome::StepBudgetExhausted { usage, .. } => usage,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, AgentOutcome::Completed { .. })
    }
}

/// Drives sessions against one model client
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    tool_executor: ToolExecutor,
    max_steps: u32,
    max_tokens: u32,
}

impl Agent {
    /// Create an agent with the standard tools
    pub fn new(llm: Arc<dyn LlmClient>, max_steps: u32, max_tokens: u32) -> Self {
        debug!(model = %llm.model(), %max_steps, %max_tokens, "Agent::new: called");
        Self {
            llm,
            tool_executor: ToolExecutor::standard(),
            max_steps,
            max_tokens,
        }
    }

    /// Create an agent using the step budget and token limit from config
    pub fn from_config(llm: Arc<dyn LlmClient>, config: &Config) -> Self {
        Self::new(llm, config.agent.max_steps, config.llm.max_tokens)
    }

    /// Run the loop until the model answers or `max_steps` queries were made
    ///
    /// Tool failures go back to the model as error results; only model
    /// endpoint errors end the run early.
    pub async fn run(&self, session: &mut Session) -> Result<AgentOutcome, LlmError> {
        info!(model = %self.llm.model(), max_steps = self.max_steps, "Agent::run: starting");

        let mut state = DriverState::AwaitingModel;
        let mut rounds: u32 = 0;
        let mut usage = TokenUsage::default();

        loop {
            state = match state {
                DriverState::AwaitingModel => {
                    if rounds >= self.max_steps {
                        warn!(rounds, "Agent::run: step budget exhausted");
                        return Ok(AgentOutcome::StepBudgetExhausted { rounds, usage });
                    }
                    rounds += 1;

                    let request = self.build_request(session);
                    debug!(rounds, messages = request.messages.len(), "Agent::run: calling LLM");
                    let response = match self.llm.complete(request).await {
                        Ok(r) => r,
                        Err(e) => {
                            warn!(rounds, error = %e, "Agent::run: LLM call failed");
                            return Err(e);
                        }
                    };
                    usage.add(&response.usage);
                    debug!(rounds, stop_reason = ?response.stop_reason, tool_calls = response.tool_calls.len(), "Agent::run: LLM response received");

                    if response.tool_calls.is_empty() {
                        let answer = response.content.unwrap_or_default();
                        session.transcript.push(Message::assistant(answer.clone()));
                        DriverState::Done(answer)
                    } else {
                        session.transcript.push(build_assistant_message(&response));
                        DriverState::ExecutingTools(response.tool_calls)
                    }
                }
                DriverState::ExecutingTools(calls) => {
                    let results = self.tool_executor.execute_all(&calls, &mut session.tools).await;
                    debug!(rounds, results = results.len(), "Agent::run: tools executed");

                    for (call, (id, result)) in calls.iter().zip(results) {
                        if session.verbose {
                            echo_call(call);
                            echo_result(&result);
                        }
                        session
                            .transcript
                            .push(Message::tool_result(id, result.content, result.is_error));
                    }
                    DriverState::AwaitingModel
                }
                DriverState::Done(answer) => {
                    info!(rounds, total_tokens = usage.total(), "Agent::run: completed");
                    return Ok(AgentOutcome::Completed { answer, rounds, usage });
                }
            };
        }
    }

    fn build_request(&self, session: &Session) -> CompletionRequest {
        CompletionRequest {
            system_prompt: session.transcript.system_prompt().to_string(),
            messages: session.transcript.messages().to_vec(),
            tools: self.tool_executor.definitions(),
            max_tokens: self.max_tokens,
        }
    }
}

/// Build assistant message from response (text plus tool use blocks)
fn build_assistant_message(response: &CompletionResponse) -> Message {
    debug!(has_content = response.content.is_some(), tool_calls = response.tool_calls.len(), "build_assistant_message: called");
    let mut blocks = Vec::new();

    if let Some(text) = &response.content
        && !text.is_empty()
    {
        blocks.push(ContentBlock::text(text));
    }

    for call in &response.tool_calls {
        blocks.push(ContentBlock::ToolUse {
            id: call.id.clone(),
            name: call.name.clone(),
            input: call.input.clone(),
        });
    }

    Message::assistant_blocks(blocks)
}

fn echo_call(call: &ToolCall) {
    eprintln!("{} {} {}", "Tool:".bright_yellow(), call.name.bright_white(), call.input.to_string().dimmed());
}

fn echo_result(result: &ToolResult) {
    let shown = match result.content.char_indices().nth(ECHO_LIMIT) {
        Some((idx, _)) => format!("{}... ({} bytes total)", &result.content[..idx], result.content.len()),
        None => result.content.clone(),
    };
    if result.is_error {
        eprintln!("{} {}", "Error:".red(), shown);
    } else {
        eprintln!("{}", shown.dimmed());
    }
}
