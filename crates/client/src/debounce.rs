//! Debounced search input.
//!
//! Converts rapid keystrokes into a rate-limited value: the settled value
//! only changes after a quiet period has elapsed with no further
//! keystrokes. A pending timer is invalidated whenever a new keystroke
//! arrives before it fires.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default quiet period before a raw value settles.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// A debounced string input backed by a timer task.
///
/// Keystrokes go in via [`set`](Self::set); consumers watch the settled
/// value via [`subscribe`](Self::subscribe). The timer task is aborted
/// when the input is dropped.
pub struct DebouncedInput {
    raw_tx: watch::Sender<String>,
    settled_rx: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl DebouncedInput {
    /// Create a debounced input with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        let (raw_tx, mut raw_rx) = watch::channel(String::new());
        let (settled_tx, settled_rx) = watch::channel(String::new());

        let task = tokio::spawn(async move {
            while raw_rx.changed().await.is_ok() {
                loop {
                    let pending = raw_rx.borrow_and_update().clone();
                    tokio::select! {
                        () = tokio::time::sleep(delay) => {
                            // Quiet period elapsed: the pending value settles.
                            let _ = settled_tx.send(pending);
                            break;
                        }
                        changed = raw_rx.changed() => {
                            if changed.is_err() {
                                return;
                            }
                            // A newer keystroke invalidated the timer; loop
                            // around and restart it with the newer value.
                        }
                    }
                }
            }
        });

        Self {
            raw_tx,
            settled_rx,
            task,
        }
    }

    /// Record a keystroke. Restarts the quiet-period timer.
    pub fn set(&self, value: impl Into<String>) {
        let _ = self.raw_tx.send(value.into());
    }

    /// The raw (un-debounced) value as typed so far.
    pub fn raw(&self) -> String {
        self.raw_tx.borrow().clone()
    }

    /// The most recently settled value.
    pub fn settled(&self) -> String {
        self.settled_rx.borrow().clone()
    }

    /// Watch settled values as they are emitted.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.settled_rx.clone()
    }
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for DebouncedInput {
    fn drop(&mut self) {
        self.task.abort();
    }
}
