//! Copy-to-clipboard for the generated prompt, with transient feedback.

use crate::error::ClipboardError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// How long the "copied" indicator stays on.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Somewhere text can be copied to. Writes may block.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The host's clipboard, via `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

/// The "copied" flag shown next to the result.
///
/// Each copy turns the flag on and schedules it off after the feedback
/// delay. A later copy supersedes earlier resets.
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    copied: Arc<AtomicBool>,
    seq: Arc<AtomicU64>,
    delay: Duration,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

impl CopyIndicator {
    pub fn new(delay: Duration) -> Self {
        Self {
            copied: Arc::new(AtomicBool::new(false)),
            seq: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    /// Turns the indicator on and schedules it off after the delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn flash(&self) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.copied.store(true, Ordering::SeqCst);

        let copied = Arc::clone(&self.copied);
        let current = Arc::clone(&self.seq);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == seq {
                copied.store(false, Ordering::SeqCst);
            }
        });
    }

    /// Turns the indicator off immediately, e.g. when the result changes.
    pub fn reset(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        self.copied.store(false, Ordering::SeqCst);
    }
}

/// Flashes `indicator` and writes `text` to `clipboard` on the blocking pool.
///
/// Clipboard failures are ignored; the indicator flashes either way.
pub async fn copy_to_clipboard(
    text: String,
    clipboard: Arc<dyn Clipboard>,
    indicator: &CopyIndicator,
) {
    indicator.flash();

    match tokio::task::spawn_blocking(move || clipboard.write_text(&text)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => debug!("clipboard write failed: {e}"),
        Err(e) => debug!("clipboard task failed: {e}"),
    }
}
