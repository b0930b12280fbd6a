//! ds - docscout command-line entry point

use std::fs;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use docscout::agent::{Agent, Session};
use docscout::cli::{Cli, get_log_path};
use docscout::config::Config;
use docscout::llm::create_client;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Write to the log file, never stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

/// Layer command-line flags over the loaded config
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    if let Some(max_steps) = cli.max_steps {
        config.agent.max_steps = max_steps;
    }
    if cli.read_only {
        config.agent.allow_writes = false;
    }
}

fn print_header(config: &Config, goal: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    eprintln!("{} {}", "Working directory:".bright_cyan(), cwd.display());
    eprintln!("{} {}", "Model:".bright_cyan(), config.llm.model);
    eprintln!("{} {}", "Allow writes:".bright_cyan(), config.agent.allow_writes);
    eprintln!("{} {}", "Goal:".bright_cyan(), goal);
    eprintln!();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    info!(
        "docscout loaded config: provider={}, model={}, max_steps={}, allow_writes={}",
        config.llm.provider, config.llm.model, config.agent.max_steps, config.agent.allow_writes
    );

    if cli.verbose {
        print_header(&config, &cli.goal)?;
    }

    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    let agent = Agent::from_config(llm, &config);
    let mut session = Session::new(cli.goal, config.agent.allow_writes, cli.verbose);

    let outcome = agent.run(&mut session).await.context("Agent run failed")?;
    info!(
        rounds = outcome.rounds(),
        total_tokens = outcome.usage().total(),
        completed = outcome.is_completed(),
        "docscout finished"
    );

    println!("{}", outcome.message());
    Ok(())
}
