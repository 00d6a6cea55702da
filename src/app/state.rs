use crate::clipboard::ClipboardWorker;
use crate::copy::{apply_completion, copy_recording, show_outcome, CopyOutcome};
use crate::notification::NotificationCenter;
use crate::recording::{load_history, RecordingEntry, RecordingHistory};
use crate::ui::theme::Theme;
use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

pub struct AppState {
    pub history: RecordingHistory,
    pub cursor_position: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub notifications: NotificationCenter,
    pub clipboard: ClipboardWorker,
    pub last_reload_time: Option<Instant>,
}

impl AppState {
    pub fn new(history: RecordingHistory, theme: Theme, clipboard: ClipboardWorker) -> Self {
        Self {
            history,
            cursor_position: 0,
            should_quit: false,
            show_help: false,
            theme,
            notifications: NotificationCenter::new(),
            clipboard,
            last_reload_time: None,
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_position + 1 < self.history.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor_position = self.history.len().saturating_sub(1);
    }

    pub fn selected_entry(&self) -> Option<&RecordingEntry> {
        self.history.get(self.cursor_position)
    }

    pub fn clamp_cursor(&mut self) {
        if !self.history.is_empty() {
            self.cursor_position = self.cursor_position.min(self.history.len() - 1);
        } else {
            self.cursor_position = 0;
        }
    }

    pub fn copy_selected(&mut self, now: Instant) {
        match self.selected_entry().cloned() {
            Some(entry) => copy_recording(&entry, &self.clipboard, &mut self.notifications, now),
            None => {
                warn!("No run selected");
                show_outcome(CopyOutcome::NoRecording, &mut self.notifications, now);
            }
        }
    }

    /// Shows a notification for every clipboard write that finished since
    /// the last call.
    pub fn check_copy_results(&mut self, now: Instant) {
        while let Some(completion) = self.clipboard.try_recv() {
            apply_completion(&completion, &mut self.notifications, now);
        }
    }

    pub fn tick_notifications(&mut self, now: Instant) {
        self.notifications.tick(now);
    }

    /// Reload the history file from disk.
    /// Used when the file watcher reports a modification.
    pub fn reload_history(&mut self) -> Result<()> {
        let history = load_history(&self.history.path)?;
        info!(track = %history.track, count = history.len(), "Reloaded history");
        self.history = history;
        self.clamp_cursor();
        self.last_reload_time = Some(Instant::now());
        Ok(())
    }
}
