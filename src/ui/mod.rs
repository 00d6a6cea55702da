pub mod components;
pub mod theme;

use crate::app::{event::handle_key_event, AppState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

pub fn run_tui(mut state: AppState, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (file_tx, file_rx) = mpsc::channel();
    let _watcher = setup_history_watcher(&state.history.path, file_tx);

    info!(path = %state.history.path.display(), "Starting browser");
    let result = run_app(&mut terminal, &mut state, file_rx, tick_rate);
    terminal.show_cursor()?;

    result
}

fn setup_history_watcher(path: &Path, tx: mpsc::Sender<()>) -> Option<RecommendedWatcher> {
    let watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                if event.kind.is_modify() {
                    let _ = tx.send(());
                }
            }
        },
        Config::default(),
    );

    match watcher {
        Ok(mut w) => {
            if w.watch(path, RecursiveMode::NonRecursive).is_ok() {
                Some(w)
            } else {
                warn!(path = %path.display(), "Could not watch history file");
                None
            }
        }
        Err(e) => {
            warn!(error = %e, "File watcher unavailable");
            None
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    file_rx: mpsc::Receiver<()>,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        let now = Instant::now();
        state.check_copy_results(now);
        state.tick_notifications(now);

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        let timeout = poll_timeout(state, tick_rate, Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(key, state)?;
                }
            }
        }

        let mut should_reload = false;
        while file_rx.try_recv().is_ok() {
            should_reload = true;
        }
        if should_reload {
            debug!("History file changed on disk");
            if let Err(e) = state.reload_history() {
                warn!(error = %e, "Failed to reload history");
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Wakes the loop no later than the next notification timer.
fn poll_timeout(state: &AppState, tick_rate: Duration, now: Instant) -> Duration {
    state
        .notifications
        .next_deadline(now)
        .map_or(tick_rate, |deadline| deadline.min(tick_rate))
}
