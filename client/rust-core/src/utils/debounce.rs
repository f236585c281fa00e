use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delays work until the caller has been quiet for a fixed interval. Each
/// `call` supersedes any pending one, so only the latest survives - the
/// search-as-you-type pattern: keystrokes call `call`, and only the final
/// query actually hits the backend.
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Schedule `work` to run after the delay, unless a newer `call` arrives
    /// first. The returned handle completes either way; superseded work is
    /// simply never started.
    pub fn call<F, Fut>(&self, work: F) -> JoinHandle<()>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.generation.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Still the newest call? Then the caller has been quiet
            if generation.load(Ordering::SeqCst) == my_generation {
                work().await;
            }
        })
    }

    /// Drop any pending call without scheduling new work.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
