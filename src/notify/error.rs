//! Error types for the notification channel.

use thiserror::Error;

/// Errors returned when an event cannot be handed to the channel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifyError {
    /// The bounded queue is full. The event is dropped.
    #[error("Notification queue is full")]
    QueueFull,

    /// The dispatcher has stopped.
    #[error("Notification channel closed")]
    ChannelClosed,
}

/// Errors raised by a [`Mailer`](super::Mailer) while delivering an event.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MailError {
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Mail delivery failed: {0}")]
    DeliveryFailed(String),
}
