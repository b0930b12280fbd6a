//! Integration tests for docscout
//!
//! These drive the public API end to end against temporary file trees with a
//! scripted model client.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use tempfile::TempDir;

use docscout::agent::{Agent, MAX_STEPS_MESSAGE, Session};
use docscout::llm::{CompletionRequest, CompletionResponse, ContentBlock, LlmClient, LlmError, MessageContent, ToolCall};
use docscout::tools::{ToolContext, ToolExecutor};

/// Replays canned responses and keeps every request it saw
struct ScriptedClient {
    responses: Mutex<VecDeque<CompletionResponse>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    fn new(responses: Vec<CompletionResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LlmError::InvalidResponse("script exhausted".to_string()))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

fn call(id: &str, name: &str, input: Value) -> CompletionResponse {
    CompletionResponse::tool_use(vec![ToolCall::new(id, name, input)])
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Tool result contents from the transcript, in order
fn tool_results(session: &Session) -> Vec<(String, Value, bool)> {
    session
        .transcript
        .messages()
        .iter()
        .filter_map(|m| match &m.content {
            MessageContent::Blocks(blocks) => Some(blocks.clone()),
            MessageContent::Text(_) => None,
        })
        .flatten()
        .filter_map(|block| match block {
            ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error,
            } => Some((tool_use_id, serde_json::from_str(&content).unwrap(), is_error)),
            _ => None,
        })
        .collect()
}

fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("README.md"), "# Sample\n").unwrap();
    fs::create_dir(temp_dir.path().join("docs")).unwrap();
    fs::write(temp_dir.path().join("docs/guide.md"), "Guide body\n").unwrap();
    temp_dir
}

// =============================================================================
// Exploration Tests
// =============================================================================

#[tokio::test]
async fn test_explore_read_and_write() {
    let temp_dir = sample_tree();
    let root = temp_dir.path();
    let changes = root.join("docs/CHANGES.md");

    let client = ScriptedClient::new(vec![
        call("1", "get_file_info", json!({ "path": path_str(root) })),
        call("2", "get_file_info", json!({ "path": path_str(&root.join("docs")) })),
        call("3", "read_file", json!({ "path": path_str(&root.join("docs/guide.md")) })),
        call("4", "write_file", json!({ "path": path_str(&changes), "content": "- Added guide\n" })),
        CompletionResponse::text("Updated docs/CHANGES.md"),
    ]);
    let agent = Agent::new(client.clone(), 20, 2048);
    let mut session = Session::new("update the changelog", true, false);

    let outcome = agent.run(&mut session).await.expect("run should succeed");

    assert!(outcome.is_completed());
    assert_eq!(outcome.message(), "Updated docs/CHANGES.md");
    assert_eq!(outcome.rounds(), 5);
    assert_eq!(client.request_count(), 5);

    let results = tool_results(&session);
    assert_eq!(results.len(), 4);

    let (_, listing, _) = &results[0];
    let names: Vec<&str> = listing["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["README.md", "docs"]);
    assert_eq!(listing["items"][0]["extension"], "md");
    assert_eq!(listing["items"][1]["type"], "directory");
    assert!(listing["items"][1]["extension"].is_null());

    let (_, read, is_error) = &results[2];
    assert!(!is_error);
    assert_eq!(read["content"], "Guide body\n");

    let (id, written, _) = &results[3];
    assert_eq!(id, "4");
    assert!(written["message"].as_str().unwrap().starts_with("Wrote 14 bytes to "));
    assert_eq!(fs::read_to_string(&changes).unwrap(), "- Added guide\n");
}

#[tokio::test]
async fn test_unlisted_file_is_not_readable() {
    let temp_dir = sample_tree();
    let root = temp_dir.path();

    // docs/ itself is never listed, so docs/guide.md stays unconfirmed
    let client = ScriptedClient::new(vec![
        call("1", "get_file_info", json!({ "path": path_str(root) })),
        call("2", "read_file", json!({ "path": path_str(&root.join("docs/guide.md")) })),
        CompletionResponse::text("could not read"),
    ]);
    let agent = Agent::new(client, 20, 2048);
    let mut session = Session::new("read the guide", true, false);

    agent.run(&mut session).await.unwrap();

    let results = tool_results(&session);
    let (_, payload, is_error) = &results[1];
    assert!(is_error);
    assert_eq!(payload["error"], "file_not_confirmed");
    assert_eq!(payload["path"], path_str(&root.join("docs/guide.md")));
}

#[tokio::test]
async fn test_read_only_session_never_writes() {
    let temp_dir = sample_tree();
    let target = temp_dir.path().join("new/file.md");

    let client = ScriptedClient::new(vec![
        call("1", "write_file", json!({ "path": path_str(&target), "content": "x" })),
        CompletionResponse::text("write refused"),
    ]);
    let agent = Agent::new(client, 20, 2048);
    let mut session = Session::new("write something", false, false);

    agent.run(&mut session).await.unwrap();

    let results = tool_results(&session);
    assert_eq!(results[0].1["error"], "write_not_allowed");
    assert!(!temp_dir.path().join("new").exists());
}

#[tokio::test]
async fn test_budget_exhaustion_message() {
    let temp_dir = sample_tree();
    let root = path_str(temp_dir.path());

    let client = ScriptedClient::new((0..10).map(|i| call(&i.to_string(), "get_file_info", json!({ "path": root }))).collect());
    let agent = Agent::new(client.clone(), 4, 2048);
    let mut session = Session::new("loop forever", false, false);

    let outcome = agent.run(&mut session).await.unwrap();

    assert_eq!(outcome.message(), MAX_STEPS_MESSAGE);
    assert_eq!(client.request_count(), 4);
}

#[tokio::test]
async fn test_model_error_ends_run() {
    let client = ScriptedClient::new(vec![]);
    let agent = Agent::new(client, 20, 2048);
    let mut session = Session::new("anything", false, false);

    assert!(agent.run(&mut session).await.is_err());
}

// =============================================================================
// Router Tests
// =============================================================================

#[tokio::test]
async fn test_listing_path_with_trailing_junk() {
    let temp_dir = sample_tree();
    let executor = ToolExecutor::standard();
    let mut ctx = ToolContext::new(false);

    let raw = format!("{}/docs\"}}", path_str(temp_dir.path()));
    let result = executor
        .execute(&ToolCall::new("1", "get_file_info", json!({ "path": raw })), &mut ctx)
        .await;

    assert!(!result.is_error, "unexpected error: {}", result.content);
    assert_eq!(result.json()["current_path"], path_str(&temp_dir.path().join("docs")));
    assert!(ctx.is_confirmed_file(&temp_dir.path().join("docs/guide.md")));
}

#[tokio::test]
async fn test_listing_a_file_is_not_a_directory() {
    let temp_dir = sample_tree();
    let executor = ToolExecutor::standard();
    let mut ctx = ToolContext::new(false);

    let result = executor
        .execute(
            &ToolCall::new("1", "get_file_info", json!({ "path": path_str(&temp_dir.path().join("README.md")) })),
            &mut ctx,
        )
        .await;

    assert!(result.is_error);
    assert_eq!(result.json()["error"], "not_a_directory");
}
