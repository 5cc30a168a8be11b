use super::error::NotifyError;
use super::mailer::Mailer;
use super::NotificationChannel;
use crate::model::NotificationEvent;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Sending half of the notification queue.
///
/// `publish` never waits: a full queue or a stopped dispatcher is reported immediately
/// and the event is dropped.
#[derive(Clone)]
pub struct NotificationProducer {
    sender: mpsc::Sender<NotificationEvent>,
}

impl NotificationChannel for NotificationProducer {
    fn publish(&self, event: NotificationEvent) -> Result<(), NotifyError> {
        self.sender.try_send(event).map_err(|e| match e {
            TrySendError::Full(_) => NotifyError::QueueFull,
            TrySendError::Closed(_) => NotifyError::ChannelClosed,
        })
    }
}

/// Task that drains the queue and hands each event to a [`Mailer`].
pub struct NotificationDispatcher {
    receiver: mpsc::Receiver<NotificationEvent>,
    mailer: Arc<dyn Mailer>,
}

impl NotificationDispatcher {
    /// Delivers events until every producer has been dropped or `shutdown` fires. On
    /// shutdown, events already queued are still delivered. Failed deliveries are logged
    /// and discarded.
    pub async fn run(mut self, shutdown: CancellationToken) {
        info!("Notification dispatcher started");
        let mut delivered = 0u64;
        let mut failed = 0u64;

        let mut closed = false;
        loop {
            if !closed && shutdown.is_cancelled() {
                self.receiver.close();
                closed = true;
            }
            let event = tokio::select! {
                event = self.receiver.recv() => event,
                _ = shutdown.cancelled(), if !closed => continue,
            };
            let Some(event) = event else { break };

            debug!(order_id = %event.order.order_id, "Dispatching notification");
            match self.mailer.deliver(&event).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    failed += 1;
                    warn!(
                        order_id = %event.order.order_id,
                        error = %e,
                        "Notification delivery failed"
                    );
                }
            }
        }

        info!(delivered, failed, "Notification dispatcher stopped");
    }
}

/// Creates a bounded notification queue and the dispatcher that drains it.
///
/// A `capacity` of zero is raised to one.
pub fn new(capacity: usize, mailer: Arc<dyn Mailer>) -> (NotificationProducer, NotificationDispatcher) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (
        NotificationProducer { sender },
        NotificationDispatcher { receiver, mailer },
    )
}
