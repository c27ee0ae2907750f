//! Re-projection on external light/dark toggles.

use crate::slots::Mode;
use crate::store::ThemeStore;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Follows an externally owned color-mode signal and re-projects the store.
///
/// After each change the watcher waits `settle_delay` and then reads the
/// latest mode, so a burst of toggles projects once with the final value.
#[derive(Debug, Clone, Copy)]
pub struct ModeWatcher {
    settle_delay: Duration,
}

impl ModeWatcher {
    pub fn new(settle_delay: Duration) -> Self {
        Self { settle_delay }
    }

    /// Run until the sender side of `modes` is dropped.
    pub fn spawn(self, store: Arc<Mutex<ThemeStore>>, mut modes: watch::Receiver<Mode>) -> JoinHandle<()> {
        tokio::spawn(async move {
            while modes.changed().await.is_ok() {
                tokio::time::sleep(self.settle_delay).await;
                let mode = *modes.borrow_and_update();
                let Ok(mut guard) = store.lock() else {
                    tracing::warn!("theme store lock poisoned; stopping mode watcher");
                    break;
                };
                if guard.color_mode() != mode {
                    tracing::debug!(%mode, "color mode toggled; re-projecting");
                }
                guard.set_color_mode(mode);
            }
        })
    }
}
