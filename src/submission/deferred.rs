//! Cancellable one-shot tasks that report back over a channel

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A spawned future whose output is posted to the owner's event channel.
///
/// Dropping the task aborts it, so an owner that resets or goes away never
/// receives a late event from it.
#[derive(Debug)]
pub struct DeferredTask {
    handle: JoinHandle<()>,
}

impl DeferredTask {
    /// Run `future` and send its output to `events`
    pub fn spawn<F, E>(future: F, events: UnboundedSender<E>) -> Self
    where
        F: Future<Output = E> + Send + 'static,
        E: Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let event = future.await;
            // The receiver is gone only when the owner has shut down
            let _ = events.send(event);
        });
        Self { handle }
    }

    /// Send `event` after `delay`
    pub fn after<E>(delay: Duration, event: E, events: UnboundedSender<E>) -> Self
    where
        E: Send + 'static,
    {
        Self::spawn(
            async move {
                tokio::time::sleep(delay).await;
                event
            },
            events,
        )
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for DeferredTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
