//! `scenario-tags` binary.
//!
//! Exits with status 0 when the tags match, 1 when they do not, and 2 when
//! the configuration or expressions are invalid.

use std::io;

use clap::Parser;
use tracing::error;

use scenario_tags_cli::config::{CliConfig, LogLevel};
use scenario_tags_cli::error::CliError;
use scenario_tags_cli::logging::init_logging;
use scenario_tags_cli::report::{ReportOptions, run};

/// Check a scenario's tags against tag expressions.
#[derive(Parser, Debug)]
#[command(name = "scenario-tags", version, about)]
struct Args {
    /// Tag expression; repeat to AND several OR-clauses (e.g. `@a,~@b:2`).
    #[arg(long = "tags", value_name = "EXPR")]
    tags: Vec<String>,

    /// Print declared limits after the verdict.
    #[arg(long)]
    limits: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Tags carried by the scenario.
    #[arg(value_name = "TAG")]
    scenario_tags: Vec<String>,
}

fn build_config(args: &Args) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(args.log_level, args.tags.clone()))
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    let options = ReportOptions {
        show_limits: args.limits,
    };
    match run(&config, &args.scenario_tags, options, &mut io::stdout().lock()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!(error = %e, "tag filtering failed");
            std::process::exit(2);
        }
    }
}
