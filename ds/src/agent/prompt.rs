//! Fixed prompt text

/// System instruction seeded into every session
pub const SYSTEM_PROMPT: &str = r#"You are a repository exploration agent.

You can navigate repositories using tools.
You must explore directories step by step.

Rules:
- Use get_file_info to list files and directories.
- Start with get_file_info on "." to list the root directory, then navigate between files.
- Do not assume any file exists without checking.
- Use read_file only after confirming the file exists.
- Use write_file only when explicitly instructed.
- Never hallucinate file paths.
- Think step by step before taking actions.
"#;

/// Goal used when none is given on the command line
pub const DEFAULT_GOAL: &str = "Please analyze the codebase and update the documentations as needed. \
Focus on .md files, docs/ directory, and ensure all modified code has proper docstrings.";

/// Final answer when the step budget runs out
pub const MAX_STEPS_MESSAGE: &str = "Reached max_steps without completion.";
