use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays an action until input has settled.
///
/// Re-scheduling cancels the previously scheduled action before it fires,
/// so the last call always wins. Intended for wiring rapid input events
/// (e.g. search-as-you-type) to the presenter's view-state setters.
///
/// Requires a running tokio runtime.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run after `delay`, cancelling any action that
    /// was scheduled earlier and has not fired yet.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
