use super::Order;
use serde::{Deserialize, Serialize};

/// Message attached to every order-placed notification.
pub const ORDER_PLACED_MESSAGE: &str = "Order status is updated to PLACED state";

/// Fire-and-forget event handed to the notification channel after a successful create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    pub receiver_email: String,
    pub message: String,
    pub order: Order,
}

impl NotificationEvent {
    pub fn order_placed(receiver_email: impl Into<String>, order: Order) -> Self {
        Self {
            receiver_email: receiver_email.into(),
            message: ORDER_PLACED_MESSAGE.to_string(),
            order,
        }
    }
}
