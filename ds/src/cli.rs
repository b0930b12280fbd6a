//! CLI definition

use clap::Parser;
use std::path::PathBuf;

use crate::agent::DEFAULT_GOAL;

/// docscout - explore a file tree with an LLM and keep its docs current
#[derive(Debug, Parser)]
#[command(
    name = "ds",
    about = "Tool-calling agent that explores a file tree and updates its documentation",
    version,
    after_help = "Logs are written to: ~/.local/share/docscout/logs/docscout.log"
)]
pub struct Cli {
    /// Instruction for the agent
    #[arg(default_value = DEFAULT_GOAL, hide_default_value = true)]
    pub goal: String,

    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Model to use, overriding config and OPENAI_MODEL
    #[arg(long)]
    pub model: Option<String>,

    /// Maximum model queries before giving up
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u32>,

    /// Refuse every write_file call
    #[arg(long)]
    pub read_only: bool,
}

/// Path of the log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docscout")
        .join("logs")
        .join("docscout.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ds"]).unwrap();
        assert_eq!(cli.goal, DEFAULT_GOAL);
        assert!(!cli.verbose);
        assert!(!cli.read_only);
        assert!(cli.model.is_none());
        assert!(cli.max_steps.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "ds",
            "document the parser",
            "-v",
            "-c",
            "/tmp/ds.yml",
            "--model",
            "gpt-4o",
            "--max-steps",
            "7",
            "--read-only",
        ])
        .unwrap();

        assert_eq!(cli.goal, "document the parser");
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ds.yml")));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.max_steps, Some(7));
        assert!(cli.read_only);
    }

    #[test]
    fn test_rejects_bad_max_steps() {
        assert!(Cli::try_parse_from(["ds", "--max-steps", "many"]).is_err());
    }

    #[test]
    fn test_log_path_location() {
        let path = get_log_path();
        assert!(path.ends_with("docscout/logs/docscout.log"));
    }
}
