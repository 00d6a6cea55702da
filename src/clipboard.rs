use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

pub trait ClipboardBackend {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard. The arboard handle is opened on first write and
/// kept for later ones; a failed write drops it so the next one reopens.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("Failed to access system clipboard")?,
        };
        let clipboard = self.clipboard.insert(clipboard);

        let result = set_text(clipboard, text);
        if result.is_err() {
            self.clipboard = None;
        }
        result
    }
}

/// Copy text through an open clipboard handle.
///
/// On Linux the write waits briefly so a clipboard manager can take ownership
/// before the handle is dropped.
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<()> {
    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        use std::time::{Duration, Instant};

        clipboard
            .set()
            .wait_until(Instant::now() + Duration::from_millis(250))
            .text(text.to_owned())
            .context("Failed to copy text to clipboard")?;
    }

    #[cfg(not(target_os = "linux"))]
    clipboard
        .set_text(text)
        .context("Failed to copy text to clipboard")?;

    Ok(())
}

/// Result of one background clipboard write.
#[derive(Debug)]
pub struct WriteCompletion {
    pub result: Result<()>,
}

/// Owns a single worker thread that performs clipboard writes one at a time,
/// in submission order. Completions come back over a channel, to be drained
/// with [`ClipboardWorker::try_recv`].
pub struct ClipboardWorker {
    requests: Sender<String>,
    completions_tx: Sender<WriteCompletion>,
    completions: Receiver<WriteCompletion>,
}

impl ClipboardWorker {
    /// Starts the worker. The backend is built on the worker thread and lives
    /// there until the worker is dropped.
    pub fn spawn<F, B>(make_backend: F) -> Self
    where
        F: FnOnce() -> B + Send + 'static,
        B: ClipboardBackend,
    {
        let (requests, request_rx) = mpsc::channel::<String>();
        let (completions_tx, completions) = mpsc::channel();

        let done_tx = completions_tx.clone();
        thread::spawn(move || {
            let mut backend = make_backend();
            for text in request_rx {
                let result = backend.write_text(&text);
                if done_tx.send(WriteCompletion { result }).is_err() {
                    break;
                }
            }
            debug!("Clipboard worker stopped");
        });

        Self {
            requests,
            completions_tx,
            completions,
        }
    }

    pub fn system() -> Self {
        Self::spawn(SystemClipboard::new)
    }

    pub fn submit(&self, text: String) {
        debug!(len = text.len(), "Submitting clipboard write");
        if self.requests.send(text).is_err() {
            warn!("Clipboard worker is not running");
            let _ = self.completions_tx.send(WriteCompletion {
                result: Err(anyhow!("Clipboard worker is not running")),
            });
        }
    }

    pub fn try_recv(&self) -> Option<WriteCompletion> {
        self.completions.try_recv().ok()
    }

    #[cfg(test)]
    pub(crate) fn recv(&self) -> Option<WriteCompletion> {
        self.completions
            .recv_timeout(std::time::Duration::from_secs(5))
            .ok()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records every write; fails all of them when `reject` is set.
    #[derive(Clone, Default)]
    pub struct FakeClipboard {
        pub reject: bool,
        pub first_write_delay: Option<Duration>,
        writes: Arc<Mutex<Vec<String>>>,
    }

    impl FakeClipboard {
        pub fn accepting() -> Self {
            Self::default()
        }

        pub fn rejecting() -> Self {
            Self {
                reject: true,
                ..Self::default()
            }
        }

        pub fn slow_first_write(delay: Duration) -> Self {
            Self {
                first_write_delay: Some(delay),
                ..Self::default()
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }

        pub fn worker(&self) -> ClipboardWorker {
            let backend = self.clone();
            ClipboardWorker::spawn(move || backend)
        }
    }

    impl ClipboardBackend for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            let is_first = self.writes.lock().unwrap().is_empty();
            if let (true, Some(delay)) = (is_first, self.first_write_delay) {
                std::thread::sleep(delay);
            }
            self.writes.lock().unwrap().push(text.to_string());
            if self.reject {
                Err(anyhow!("permission denied"))
            } else {
                Ok(())
            }
        }
    }
}
