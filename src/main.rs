mod calc;
mod cmd;
mod data;
mod page;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use data::ViewMode;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calpage", about = "terminal calendar page")]
struct Cli {
    /// Directory holding config.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    config_dir: PathBuf,

    /// View to open the calendar in, overriding the configured default
    #[arg(long, value_enum)]
    view: Option<ViewMode>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.yaml
    Init,
    /// List the talent roster
    Roster,
    /// Print the mini-month grid for a month
    Month {
        /// Month to show as YYYY-MM (default: current month)
        month: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config_dir = if cli.config_dir.is_absolute() {
        cli.config_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.config_dir)
    };
    data::persistence::set_config_dir(config_dir);

    match cli.command {
        None => cmd::root::run(cli.view),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Roster) => cmd::roster::run(),
        Some(Commands::Month { month }) => cmd::month::run(month.as_deref()),
    }
}

/// Routes `tracing` output to `path`. Filter comes from RUST_LOG, default `info`.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["calpage"]).unwrap();
        assert_eq!(cli.config_dir, PathBuf::from("./config"));
        assert!(cli.view.is_none());
        assert!(cli.log_file.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_view_override() {
        let cli = Cli::try_parse_from(["calpage", "--view", "agenda"]).unwrap();
        assert_eq!(cli.view, Some(ViewMode::Agenda));
        assert!(Cli::try_parse_from(["calpage", "--view", "year"]).is_err());
    }

    #[test]
    fn test_cli_month_subcommand() {
        let cli = Cli::try_parse_from(["calpage", "month", "2025-11"]).unwrap();
        match cli.command {
            Some(Commands::Month { month }) => assert_eq!(month.as_deref(), Some("2025-11")),
            _ => panic!("expected month subcommand"),
        }
    }
}
