use std::{sync::Arc, time::Duration};
use tokio::{sync::watch, task::JoinHandle};

// ============================================================================
// Broadcast Reset Signal
// ============================================================================

/// Session-wide cancellation, encoded as a generation counter.
///
/// Every task captures the generation of the session it belongs to. Bumping the counter
/// cancels that session: all current waiters wake, and any wait started afterwards with
/// the stale generation resolves immediately.
#[derive(Debug, Clone)]
pub struct ResetSignal {
    tx: Arc<watch::Sender<u64>>,
}

impl Default for ResetSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetSignal {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        *self.tx.borrow()
    }

    // Cancel `generation`. A no-op if it was already cancelled, so the delayed reset and
    // an explicit reset cannot skip a generation between them.
    pub fn cancel(&self, generation: u64) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == generation {
                *current = current.wrapping_add(1);
                true
            } else {
                false
            }
        })
    }

    #[must_use]
    pub fn listener(&self, generation: u64) -> ResetListener {
        ResetListener {
            rx: self.tx.subscribe(),
            generation,
        }
    }
}

#[derive(Debug)]
pub struct ResetListener {
    rx: watch::Receiver<u64>,
    generation: u64,
}

impl ResetListener {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() != self.generation
    }

    // Resolves once the captured generation has been cancelled, or the signal is gone.
    pub async fn cancelled(&mut self) {
        let generation = self.generation;
        // An Err means the sender was dropped, which also ends the session
        let _ = self.rx.wait_for(|current| *current != generation).await;
    }
}

// ============================================================================
// Deferred Actions
// ============================================================================

// Run `action` once after `delay`
pub fn after_delay<F>(delay: Duration, action: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        action();
    })
}
