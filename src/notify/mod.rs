//! Fire-and-forget notification channel.
//!
//! Producers push events into a bounded queue with [`NotificationChannel::publish`]; a
//! [`NotificationDispatcher`] task drains it and calls a [`Mailer`]. Nothing is retried.

pub mod error;
pub mod mailer;
pub mod queue;

pub use error::{MailError, NotifyError};
pub use mailer::{LogMailer, Mailer};
pub use queue::{new, NotificationDispatcher, NotificationProducer};

use crate::model::NotificationEvent;

/// Accepts an event for asynchronous delivery. Must not block.
pub trait NotificationChannel: Send + Sync {
    fn publish(&self, event: NotificationEvent) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderId, OrderStatus};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};
    use tokio_util::sync::CancellationToken;

    #[derive(Default)]
    struct CollectingMailer {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Mailer for CollectingMailer {
        async fn deliver(&self, event: &NotificationEvent) -> Result<(), MailError> {
            self.seen.lock().unwrap().push(event.receiver_email.clone());
            Ok(())
        }
    }

    fn event(to: &str) -> NotificationEvent {
        let order = Order {
            order_id: OrderId::from("o-1"),
            account_number: "acc-1".into(),
            name: "Desk".into(),
            quantity: 1,
            price: Decimal::new(1999, 2),
            status: OrderStatus::Placed,
        };
        NotificationEvent::order_placed(to, order)
    }

    #[tokio::test]
    async fn test_dispatcher_delivers_in_order() {
        let mailer = Arc::new(CollectingMailer::default());
        let (producer, dispatcher) = new(8, mailer.clone());
        let handle = tokio::spawn(dispatcher.run(CancellationToken::new()));

        producer.publish(event("a@x.io")).unwrap();
        producer.publish(event("b@x.io")).unwrap();
        drop(producer);
        handle.await.unwrap();

        assert_eq!(*mailer.seen.lock().unwrap(), vec!["a@x.io", "b@x.io"]);
    }

    #[tokio::test]
    async fn test_shutdown_drains_queued_events() {
        let mailer = Arc::new(CollectingMailer::default());
        let (producer, dispatcher) = new(8, mailer.clone());
        let shutdown = CancellationToken::new();

        producer.publish(event("a@x.io")).unwrap();
        producer.publish(event("b@x.io")).unwrap();
        shutdown.cancel();

        // The producer is still alive; cancellation alone must stop the dispatcher.
        dispatcher.run(shutdown).await;

        assert_eq!(mailer.seen.lock().unwrap().len(), 2);
        assert_eq!(producer.publish(event("c@x.io")), Err(NotifyError::ChannelClosed));
    }

    #[tokio::test]
    async fn test_full_queue_rejects_without_blocking() {
        let (producer, _dispatcher) = new(1, Arc::new(LogMailer));

        producer.publish(event("a@x.io")).unwrap();
        assert_eq!(producer.publish(event("b@x.io")), Err(NotifyError::QueueFull));
    }

    #[tokio::test]
    async fn test_zero_capacity_still_holds_one_event() {
        let (producer, _dispatcher) = new(0, Arc::new(LogMailer));

        producer.publish(event("a@x.io")).unwrap();
        assert_eq!(producer.publish(event("b@x.io")), Err(NotifyError::QueueFull));
    }

    #[tokio::test]
    async fn test_stopped_dispatcher_reports_closed() {
        let (producer, dispatcher) = new(4, Arc::new(LogMailer));
        drop(dispatcher);

        assert_eq!(producer.publish(event("a@x.io")), Err(NotifyError::ChannelClosed));
    }

    #[tokio::test]
    async fn test_log_mailer_rejects_bad_recipient() {
        let result = LogMailer.deliver(&event("not-an-address")).await;
        assert!(matches!(result, Err(MailError::InvalidRecipient(_))));
    }
}
