//! Request queue with single-lane rate limiting.
//!
//! Every outbound call from one client passes through this queue. A single
//! drain task services entries strictly FIFO and paces them so the remote
//! instance never sees a burst; spacing is measured from the completion of
//! the previously issued request, so a slow call delays its successors by at
//! least its own duration.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::oneshot;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::config::RateLimitConfig;
use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::retry::{self, RetryConfig};
use crate::transport::HttpTransport;

/// A queued call: the descriptor, the credentials snapshot taken at enqueue
/// time, the per-call configs, the arrival instant, and the channel that
/// settles the caller.
pub(crate) struct QueueEntry {
    pub(crate) request: ApiRequest,
    pub(crate) credentials: Credentials,
    pub(crate) retry: RetryConfig,
    pub(crate) rate_limit: RateLimitConfig,
    pub(crate) enqueued_at: Instant,
    pub(crate) reply: oneshot::Sender<Result<ApiResponse>>,
}

struct QueueState {
    entries: VecDeque<QueueEntry>,
    draining: bool,
    last_issued: Option<Instant>,
}

/// Serializes all outbound calls from one client into a single paced lane.
pub(crate) struct RequestQueue {
    transport: Arc<dyn HttpTransport>,
    state: Mutex<QueueState>,
}

impl RequestQueue {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Arc<Self> {
        Arc::new(Self {
            transport,
            state: Mutex::new(QueueState {
                entries: VecDeque::new(),
                draining: false,
                last_issued: None,
            }),
        })
    }

    /// Append an entry and make sure a drain task is running.
    ///
    /// The drain flag is flipped under the same lock as the push, so
    /// enqueues that race an active drain never spawn a second task.
    pub(crate) fn enqueue(self: &Arc<Self>, entry: QueueEntry) {
        let spawn_drain = {
            let mut state = self.lock_state();
            state.entries.push_back(entry);
            if state.draining {
                false
            } else {
                state.draining = true;
                true
            }
        };

        if spawn_drain {
            let queue = Arc::clone(self);
            tokio::spawn(async move { queue.drain().await });
        }
    }

    /// Number of entries waiting to be serviced.
    pub(crate) fn len(&self) -> usize {
        self.lock_state().entries.len()
    }

    /// Whether a drain task is currently active.
    pub(crate) fn is_draining(&self) -> bool {
        self.lock_state().draining
    }

    /// Drop all pending entries and clear the drain flag without settling
    /// them; abandoned callers observe a failed request. Destructive,
    /// intended for test isolation only.
    pub(crate) fn reset(&self) {
        let mut state = self.lock_state();
        state.entries.clear();
        state.draining = false;
        state.last_issued = None;
    }

    fn lock_state(&self) -> MutexGuard<'_, QueueState> {
        // Entries are plain data; a poisoned lock only means some test
        // thread panicked mid-push, so take the guard anyway.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Sole consumer: pops entries in arrival order until the queue is
    /// empty, then clears the drain flag and exits. The flag is cleared on
    /// every exit path; servicing an entry cannot fail out of the loop.
    async fn drain(self: Arc<Self>) {
        loop {
            let entry = {
                let mut state = self.lock_state();
                match state.entries.pop_front() {
                    Some(entry) => entry,
                    None => {
                        state.draining = false;
                        return;
                    }
                }
            };

            self.service(entry).await;
        }
    }

    async fn service(&self, entry: QueueEntry) {
        // Expiry is checked lazily, when the entry reaches the head of the
        // queue. An expired entry never touches the network.
        if entry.enqueued_at.elapsed() > entry.rate_limit.queue_timeout {
            debug!(
                endpoint = entry.request.endpoint(),
                "dropping expired queue entry"
            );
            let _ = entry.reply.send(Err(Error::new(ErrorKind::QueueTimeout)));
            return;
        }

        // Pace from the completion of the previously issued request.
        let deadline = {
            let state = self.lock_state();
            state
                .last_issued
                .map(|last| last + entry.rate_limit.min_interval())
        };
        if let Some(deadline) = deadline {
            sleep_until(deadline).await;
        }

        let result = retry::execute(
            self.transport.as_ref(),
            &entry.request,
            &entry.credentials,
            &entry.retry,
        )
        .await;

        self.lock_state().last_issued = Some(Instant::now());

        // A failure settles this entry only; siblings are unaffected.
        let _ = entry.reply.send(result);
    }
}
