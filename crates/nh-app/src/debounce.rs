//! Trailing-edge debouncer for a rapidly changing value.
//!
//! Each [`Debouncer::set`] restarts the delay and aborts the update scheduled
//! by the previous value. There is no maximum wait: input that never settles
//! never publishes.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Duration, Instant};
use tracing::trace;

pub struct Debouncer<T> {
    tx: Arc<watch::Sender<T>>,
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx: Arc::new(tx),
            delay,
            pending: None,
        }
    }

    /// Schedule `value` to be published once `delay` passes without another
    /// `set`. Must be called inside a tokio runtime.
    pub fn set(&mut self, value: T) {
        self.cancel();

        let tx = Arc::clone(&self.tx);
        let deadline = Instant::now() + self.delay;
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            let published = tx.send_if_modified(|current| {
                if *current == value {
                    false
                } else {
                    *current = value;
                    true
                }
            });
            trace!(published, "debounce window elapsed");
        });

        self.pending = Some(handle.abort_handle());
    }

    /// Drop the pending update, if any. The published value is unchanged.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// The last published value.
    pub fn current(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
