#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linux2intune::command::SystemRunner;
use linux2intune::config::Config;
use linux2intune::tui::{App, AppError};

#[derive(Parser)]
#[command(name = "linux2intune")]
#[command(about = "Intune and Defender onboarding, updates and system info")]
#[command(version)]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/linux2intune/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Activity log file, overriding the config
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(long)]
    debug_log: Option<PathBuf>,
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.debug_log {
        init_tracing(path)?;
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }
    info!(log_file = %config.log_file.display(), "starting linux2intune");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(
        config.catalog(),
        Box::new(SystemRunner),
        config.activity_log(),
    );
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    match result {
        Err(e) => Err(e),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

/// Sends `tracing` output to `path`; stderr belongs to the TUI.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn init_tracing(path: &Path) -> Result<(), io::Error> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linux2intune=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
