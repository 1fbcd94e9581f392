//! ballot: command-line front end for the governance engine.

mod script;

use anyhow::Context;
use ballot_governance::GovernanceConfig;
use ballot_utils::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ballot", about = "Token-weighted governance scenario runner")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Voting window length in seconds.
    #[arg(long, env = "BALLOT_VOTING_PERIOD", global = true)]
    voting_period: Option<u64>,

    /// Quorum as a percentage (0-100) of total supply.
    #[arg(long, env = "BALLOT_QUORUM", global = true)]
    quorum: Option<u8>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BALLOT_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BALLOT_LOG_FORMAT", global = true)]
    log_format: Option<LogFormat>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Replay a JSON scenario script step by step.
    Run {
        /// Path to the script (a JSON array of steps).
        script: PathBuf,

        /// Stop at the first failing step and exit non-zero.
        #[arg(long)]
        strict: bool,

        /// Clock reading (Unix seconds) when the script starts.
        #[arg(long, default_value_t = 0)]
        start: u64,
    },
    /// Validate a configuration file and print it normalised.
    CheckConfig {
        /// TOML file to check.
        file: PathBuf,
    },
}

impl Cli {
    /// File settings (or defaults) with flag/env overrides applied.
    fn resolve_config(&self) -> anyhow::Result<GovernanceConfig> {
        let base = match &self.config {
            Some(path) => GovernanceConfig::from_toml_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GovernanceConfig::default(),
        };
        Ok(GovernanceConfig {
            voting_period_secs: self.voting_period.unwrap_or(base.voting_period_secs),
            quorum_percentage: self.quorum.unwrap_or(base.quorum_percentage),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
            log_format: self.log_format.unwrap_or(base.log_format),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::CheckConfig { file } => {
            let config = GovernanceConfig::from_toml_file(file)
                .with_context(|| format!("loading config {}", file.display()))?;
            config.params()?;
            print!("{}", config.to_toml_string()?);
        }
        Command::Run {
            script,
            strict,
            start,
        } => {
            let config = cli.resolve_config()?;
            ballot_utils::init_logging(config.log_format, &config.log_level)?;

            let params = config.params()?;
            tracing::info!(
                script = %script.display(),
                voting_period = %ballot_utils::format_duration(params.voting_period_secs()),
                quorum_percentage = params.quorum_percentage(),
                "replaying scenario"
            );

            let steps = script::load(script)?;
            let runner = script::Runner::new(params, *start);
            let failures = runner.run(&steps, *strict, &mut std::io::stdout())?;
            if failures > 0 {
                tracing::warn!(failures, "scenario finished with failed steps");
            }
        }
    }

    Ok(())
}
