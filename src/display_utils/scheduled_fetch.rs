use std::future::Future;
use std::time::Duration;

use tokio::{sync::oneshot, task::JoinHandle};

/// A fetch that fires once after a delay and can be called off until it completes.
///
/// Dropping the handle cancels it: before the delay elapses the fetch is never
/// started, while it is in flight its result is discarded.
pub struct ScheduledFetch<T> {
    cancel: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Option<T>>>,
}

impl<T: Send + 'static> ScheduledFetch<T> {
    pub fn schedule<F>(delay: Duration, fetch: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (cancel, mut cancelled) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = &mut cancelled => {
                    debug!("Scheduled fetch cancelled before firing");
                    return None;
                }
                _ = tokio::time::sleep(delay) => {}
            }
            debug!("Scheduled fetch firing after {} ms", delay.as_millis());
            tokio::select! {
                _ = &mut cancelled => {
                    debug!("Scheduled fetch cancelled in flight");
                    None
                }
                output = fetch => Some(output),
            }
        });
        ScheduledFetch {
            cancel: Some(cancel),
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // the task may already be done, then nobody is listening
            let _ = cancel.send(());
        }
    }

    /// Waits for the task, `None` when it was cancelled or already joined.
    pub async fn join(&mut self) -> Option<T> {
        let handle = self.handle.take()?;
        match handle.await {
            Ok(output) => output,
            Err(err) => {
                error!("Scheduled fetch task failed: {err}");
                None
            }
        }
    }
}

impl<T> Drop for ScheduledFetch<T> {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}
