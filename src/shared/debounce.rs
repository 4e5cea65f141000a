use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Delays work until its input has been quiet for a fixed period.
///
/// Every `call` cancels the previously scheduled work, so when a burst of
/// calls arrives only the last one runs, after `delay` of silence. Only the
/// quiet period is cancellable: work that has already started runs to
/// completion.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub async fn call<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached: aborting the timer task can no longer reach the work.
            tokio::spawn(work);
        });

        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    /// Cancels work still waiting out its quiet period. Work that has
    /// already fired is left alone.
    pub async fn cancel(&self) {
        if let Some(previous) = self.pending.lock().await.take() {
            previous.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn runs_only_the_last_call() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicU32::new(0));

        for _ in 0..3 {
            let fired = fired.clone();
            debouncer
                .call(async move {
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .await;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_work() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicU32::new(0));

        {
            let fired = fired.clone();
            debouncer
                .call(async move {
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }
        debouncer.cancel().await;

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_the_quiet_period_lets_started_work_finish() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicU32::new(0));

        {
            let fired = fired.clone();
            debouncer
                .call(async move {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }

        // Past the quiet period the work is mid-flight.
        tokio::time::sleep(Duration::from_millis(600)).await;
        debouncer.cancel().await;

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn new_call_does_not_abort_work_already_in_flight() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicU32::new(0));

        {
            let fired = fired.clone();
            debouncer
                .call(async move {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }
        tokio::time::sleep(Duration::from_millis(600)).await;

        {
            let fired = fired.clone();
            debouncer
                .call(async move {
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
