/// Timer abstraction for the simulated thinking and emotion-reset delays
use super::turn::TurnEvent;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

pub trait Scheduler {
    /// Delivers `event` once `after` has elapsed. Never blocks the caller.
    fn schedule(&self, after: Duration, event: TurnEvent);
}

/// Sleeps on the tokio runtime and posts the event back to the UI thread
pub struct TokioScheduler {
    handle: Handle,
    sender: std_mpsc::Sender<TurnEvent>,
    notify: Arc<dyn Fn() + Send + Sync>,
}

impl TokioScheduler {
    /// `notify` runs after each delivery so the UI can wake up and drain the channel
    pub fn new(
        handle: Handle,
        sender: std_mpsc::Sender<TurnEvent>,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            handle,
            sender,
            notify,
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, after: Duration, event: TurnEvent) {
        let sender = self.sender.clone();
        let notify = Arc::clone(&self.notify);

        self.handle.spawn(async move {
            tokio::time::sleep(after).await;

            // receiver is gone once the window has closed
            if sender.send(event).is_err() {
                log::debug!("⏰ Dropped {:?}: conversation closed", event);
                return;
            }
            notify();
        });
    }
}
