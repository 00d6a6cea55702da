use crate::clipboard::{ClipboardBackend, ClipboardWorker, WriteCompletion};
use crate::notification::NotificationCenter;
use crate::recording::RecordingEntry;
use std::time::Instant;
use tracing::{info, warn};

pub const COPIED_MESSAGE: &str = "Copied to clipboard";
pub const FAILED_MESSAGE: &str = "Failed to copy";
pub const NO_RECORDING_MESSAGE: &str = "No recording found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    NoRecording,
}

impl CopyOutcome {
    /// The notification text and whether it is styled as an error.
    pub fn notification(self) -> (&'static str, bool) {
        match self {
            CopyOutcome::Copied => (COPIED_MESSAGE, false),
            CopyOutcome::Failed => (FAILED_MESSAGE, true),
            CopyOutcome::NoRecording => (NO_RECORDING_MESSAGE, true),
        }
    }

    pub fn is_error(self) -> bool {
        self != CopyOutcome::Copied
    }
}

impl From<&WriteCompletion> for CopyOutcome {
    fn from(completion: &WriteCompletion) -> Self {
        match completion.result {
            Ok(()) => CopyOutcome::Copied,
            Err(_) => CopyOutcome::Failed,
        }
    }
}

pub fn show_outcome(outcome: CopyOutcome, notifications: &mut NotificationCenter, now: Instant) -> u64 {
    let (message, is_error) = outcome.notification();
    notifications.show(message, is_error, now)
}

/// Starts copying the entry's recording.
///
/// A missing recording is reported right away. Otherwise the write runs on
/// the worker and its outcome is shown once [`apply_completion`] sees it.
pub fn copy_recording(
    entry: &RecordingEntry,
    worker: &ClipboardWorker,
    notifications: &mut NotificationCenter,
    now: Instant,
) {
    match entry.recording_text() {
        Some(text) => {
            info!(name = %entry.name, frames = entry.frames, "Copying recording");
            worker.submit(text.to_string());
        }
        None => {
            warn!(name = %entry.name, "Entry has no recording");
            show_outcome(CopyOutcome::NoRecording, notifications, now);
        }
    }
}

pub fn apply_completion(
    completion: &WriteCompletion,
    notifications: &mut NotificationCenter,
    now: Instant,
) -> CopyOutcome {
    if let Err(e) = &completion.result {
        warn!(error = %e, "Clipboard write failed");
    }
    let outcome = CopyOutcome::from(completion);
    show_outcome(outcome, notifications, now);
    outcome
}

/// Copies on the calling thread, for non-interactive use.
pub fn copy_recording_blocking(
    entry: &RecordingEntry,
    backend: &mut dyn ClipboardBackend,
) -> CopyOutcome {
    let Some(text) = entry.recording_text() else {
        warn!(name = %entry.name, "Entry has no recording");
        return CopyOutcome::NoRecording;
    };

    let completion = WriteCompletion {
        result: backend.write_text(text),
    };
    if let Err(e) = &completion.result {
        warn!(error = %e, "Clipboard write failed");
    }
    CopyOutcome::from(&completion)
}
