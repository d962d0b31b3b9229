//! Cancellation-capable context passed to plugin calls.

use tokio::sync::watch;

/// Context for a single plugin call.
///
/// Carries the scheduler's shutdown signal. Plugins doing bounded in-memory
/// work may ignore it; long-running plugins should check
/// [`is_cancelled`](Self::is_cancelled) between steps.
#[derive(Debug, Clone, Default)]
pub struct FilterContext {
    shutdown: Option<watch::Receiver<bool>>,
}

impl FilterContext {
    /// A context that is never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context cancelled once `true` is sent on the shutdown channel.
    pub fn with_shutdown(shutdown: watch::Receiver<bool>) -> Self {
        Self {
            shutdown: Some(shutdown),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.shutdown.as_ref().is_some_and(|rx| *rx.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_never_cancelled() {
        assert!(!FilterContext::background().is_cancelled());
    }

    #[test]
    fn shutdown_signal_cancels() {
        let (tx, rx) = watch::channel(false);
        let ctx = FilterContext::with_shutdown(rx);
        assert!(!ctx.is_cancelled());

        tx.send(true).unwrap();
        assert!(ctx.is_cancelled());
    }
}
