use anyhow::{anyhow, Context, Result};
use clap::Parser;
use polyclip::app::AppState;
use polyclip::cli::{Cli, Commands};
use polyclip::clipboard::{ClipboardWorker, SystemClipboard};
use polyclip::config::Config;
use polyclip::copy::copy_recording_blocking;
use polyclip::recording::load_history;
use polyclip::ui::{self, theme::Theme};
use polyclip::logging;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { file }) => {
            logging::init_stderr();
            handle_list(&file)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Copy { file, index }) => {
            logging::init_stderr();
            handle_copy(&file, index)
        }
        Some(Commands::Tui { file }) => {
            handle_tui(file)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            // No command - launch TUI
            handle_tui(cli.file)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn handle_tui(file: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let path = file
        .or_else(|| config.history_file.clone())
        .ok_or_else(|| anyhow!("No history file given and none configured in config.toml"))?;

    logging::init_file()?;
    let history = load_history(&path)?;
    let theme = Theme::from_config(&config);
    let state = AppState::new(history, theme, ClipboardWorker::system());

    ui::run_tui(state, config.tick_rate())
}

fn handle_list(file: &Path) -> Result<()> {
    let history = load_history(file)?;

    if history.is_empty() {
        println!("No runs recorded for {}", history.track);
        return Ok(());
    }

    println!("\n{} - {} runs\n", history.track, history.len());

    for (idx, entry) in history.entries.iter().enumerate() {
        let marker = if entry.has_recording() { "[rec]" } else { "" };
        println!(
            "{:>3} | {:>10} | {} | {} {}",
            idx + 1,
            entry.time_display(),
            entry.date_display(),
            entry.name,
            marker
        );
    }

    println!();

    Ok(())
}

fn handle_copy(file: &Path, index: usize) -> Result<ExitCode> {
    let history = load_history(file)?;
    let entry = index
        .checked_sub(1)
        .and_then(|i| history.get(i))
        .with_context(|| format!("No run #{index} in {} ({} runs)", history.track, history.len()))?;

    let outcome = copy_recording_blocking(entry, &mut SystemClipboard::new());
    let (message, _) = outcome.notification();

    if outcome.is_error() {
        eprintln!("✗ {message}");
        Ok(ExitCode::FAILURE)
    } else {
        println!("✓ {message}");
        Ok(ExitCode::SUCCESS)
    }
}
