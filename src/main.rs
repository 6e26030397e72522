//! nvram-task - Entry point for managing DD-WRT nvram settings.
//!
//! Results go to stdout, logs go to stderr. Every failure, including a bad
//! configuration file, is reported in the selected output format with exit
//! status 1.

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::Parser;
use nvram_task::{
    NvramError,
    cli::{
        CliError, CliService, RunOptions,
        formatting::{format_error, format_failure_json, format_report, format_report_json},
    },
    config::Config,
    reconciler::Reconciler,
    store::NvramStore,
    task::TaskReport,
    tracing_config,
};
use tracing::{debug, error, warn};

#[derive(Parser, Debug)]
#[command(name = "nvram-task", version, about = "Manage DD-WRT nvram settings idempotently")]
struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/nvram-task/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report what would change without touching the store
    #[arg(long)]
    check: bool,

    /// Commit all pending changes after the command
    #[arg(long)]
    commit: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Command to run (get, set, unset, commit, run, help)
    #[arg(default_value = "help")]
    command: String,

    /// Command arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json || cli.command == "run";

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_failure(&CliError::Task(NvramError::from(e)), json),
    };

    let _guard = match tracing_config::init(&config.general) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}: failed to initialize logging: {e}", format_error("Warning"));
            None
        }
    };

    let store: Box<dyn NvramStore> = Box::new(config.store.command_store());
    let reconciler = Reconciler::with_policy(store, config.reconcile);
    let cli_service = CliService::new(Arc::new(reconciler));

    if cli.command == "help" {
        println!("{}", cli_service.help_text());
        return ExitCode::SUCCESS;
    }

    let options = RunOptions {
        check_mode: cli.check,
        commit: cli.commit,
    };
    debug!(command = %cli.command, ?options, "Executing command");

    match cli_service.execute_command(&cli.command, &cli.args, &options) {
        Ok(report) => {
            print_report(&report, json);
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e, json),
    }
}

fn print_report(report: &TaskReport, json: bool) {
    if json {
        println!("{}", format_report_json(report));
    } else {
        println!("{}", format_report(report));
    }
}

fn report_failure(e: &CliError, json: bool) -> ExitCode {
    match e {
        CliError::Task(NvramError::InvalidValue { .. } | NvramError::InvalidKey { .. }) => {
            warn!(kind = e.kind(), "{e}");
        }
        _ => error!(kind = e.kind(), "{e}"),
    }

    if json {
        println!("{}", format_failure_json(&e.failure()));
    } else {
        eprintln!("{}: {}", format_error("Error"), e);
    }
    ExitCode::FAILURE
}
