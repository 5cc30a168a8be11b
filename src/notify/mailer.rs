use super::error::MailError;
use crate::model::NotificationEvent;
use async_trait::async_trait;
use tracing::info;

/// Final delivery step for a notification (e-mail, SMS, ...).
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, event: &NotificationEvent) -> Result<(), MailError>;
}

/// Mailer that writes each delivery to the log instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn deliver(&self, event: &NotificationEvent) -> Result<(), MailError> {
        if !event.receiver_email.contains('@') {
            return Err(MailError::InvalidRecipient(event.receiver_email.clone()));
        }
        info!(
            to = %event.receiver_email,
            order_id = %event.order.order_id,
            message = %event.message,
            "Notification delivered"
        );
        Ok(())
    }
}
