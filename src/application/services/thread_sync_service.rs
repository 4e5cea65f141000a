use crate::application::ports::{MessageGateway, ThreadViewport, UserNotifier};
use crate::domain::entities::ThreadMessage;
use crate::domain::value_objects::RecordId;
use crate::shared::AppError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, warn};

/// Owned handle to a running poller. Dropping it, or calling `stop`, aborts
/// the timer task, so the interval is released on every exit path.
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn stop(self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

struct ThreadState {
    assignment_id: Option<RecordId>,
    messages: Vec<ThreadMessage>,
    last_seen: Option<i64>,
}

struct SendGuard(Arc<AtomicBool>);

impl Drop for SendGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Keeps one assignment's message thread current without manual refreshes.
///
/// A timer task re-fetches the full thread on a fixed interval. Arrival of
/// strictly newer messages is detected by comparing the newest id against the
/// remembered `last_seen`; only then is one scroll-to-latest requested, so an
/// unchanged thread never yanks the reader away from older history. A failed
/// tick is logged and swallowed; the timer keeps running.
pub struct ThreadSyncService {
    gateway: Arc<dyn MessageGateway>,
    notifier: Arc<dyn UserNotifier>,
    viewport: Arc<dyn ThreadViewport>,
    poll_interval: Duration,
    state: Arc<RwLock<ThreadState>>,
    sending: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    poller: Arc<Mutex<Option<AbortHandle>>>,
}

impl ThreadSyncService {
    pub fn new(
        gateway: Arc<dyn MessageGateway>,
        notifier: Arc<dyn UserNotifier>,
        viewport: Arc<dyn ThreadViewport>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            gateway,
            notifier,
            viewport,
            poll_interval,
            state: Arc::new(RwLock::new(ThreadState {
                assignment_id: None,
                messages: Vec::new(),
                last_seen: None,
            })),
            sending: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
            poller: Arc::new(Mutex::new(None)),
        }
    }

    /// Begins polling the given assignment's thread. Any previous poller is
    /// cancelled first, so at most one timer is ever active per service. The
    /// first tick fires immediately.
    pub async fn start(&self, assignment_id: RecordId) -> PollHandle {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(previous) = self.poller.lock().await.take() {
            previous.abort();
        }

        {
            let mut state = self.state.write().await;
            state.assignment_id = Some(assignment_id.clone());
            state.messages.clear();
            state.last_seen = None;
        }

        debug!(assignment = %assignment_id, "starting thread poller");
        let service = self.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(service.poll_interval);
            loop {
                interval.tick().await;
                if service.generation.load(Ordering::SeqCst) != generation {
                    break;
                }
                if let Err(err) = service.refresh(&assignment_id, generation).await {
                    warn!(assignment = %assignment_id, error = %err, "thread poll failed");
                }
            }
        });

        *self.poller.lock().await = Some(task.abort_handle());
        PollHandle { task }
    }

    /// Cancels the current poller, if any. Ticks from a superseded poller
    /// become inert even if the abort races an in-flight fetch.
    pub async fn stop(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = self.poller.lock().await.take() {
            previous.abort();
        }
    }

    /// Sends a message, then replaces the thread with server truth so
    /// ordering and ids stay authoritative. On failure the caller keeps the
    /// composed text for retry. Overlapping sends are rejected.
    pub async fn send(&self, body: &str) -> Result<ThreadMessage, AppError> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "message body must not be empty".to_string(),
            ));
        }

        let assignment_id = self
            .state
            .read()
            .await
            .assignment_id
            .clone()
            .ok_or_else(|| AppError::InvalidInput("no conversation is open".to_string()))?;

        if self.sending.swap(true, Ordering::SeqCst) {
            return Err(AppError::InvalidInput(
                "a send is already in flight".to_string(),
            ));
        }
        let _guard = SendGuard(Arc::clone(&self.sending));

        match self.gateway.send_message(&assignment_id, trimmed).await {
            Ok(message) => {
                let generation = self.generation.load(Ordering::SeqCst);
                if let Err(err) = self.refresh(&assignment_id, generation).await {
                    // the next poll tick will catch the thread up
                    warn!(assignment = %assignment_id, error = %err, "refresh after send failed");
                }
                Ok(message)
            }
            Err(err) => {
                self.notifier.error(&err.to_string()).await;
                Err(err)
            }
        }
    }

    pub async fn messages(&self) -> Vec<ThreadMessage> {
        self.state.read().await.messages.clone()
    }

    pub async fn last_seen(&self) -> Option<i64> {
        self.state.read().await.last_seen
    }

    pub async fn assignment_id(&self) -> Option<RecordId> {
        self.state.read().await.assignment_id.clone()
    }

    async fn refresh(&self, assignment_id: &RecordId, generation: u64) -> Result<(), AppError> {
        let mut messages = self.gateway.list_thread(assignment_id).await?;
        messages.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        let newest = messages.last().map(|message| message.id);

        let arrived = {
            let mut state = self.state.write().await;
            if self.generation.load(Ordering::SeqCst) != generation {
                return Ok(());
            }
            let arrived = newest.is_some() && newest != state.last_seen;
            state.messages = messages;
            state.last_seen = newest;
            arrived
        };

        if arrived {
            self.viewport.reveal_latest().await;
        }
        Ok(())
    }
}

impl Clone for ThreadSyncService {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            notifier: self.notifier.clone(),
            viewport: self.viewport.clone(),
            poll_interval: self.poll_interval,
            state: self.state.clone(),
            sending: self.sending.clone(),
            generation: self.generation.clone(),
            poller: self.poller.clone(),
        }
    }
}
