use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Opaque order identifier. Generated locally on creation, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Returns a fresh random (UUID v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of an order as reported by the orders service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Placed,
    Shipped,
    Delivered,
    Cancelled,
}

/// Rejected order payload. Raised at the HTTP edge before any remote call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderValidationError {
    #[error("Account number must not be empty")]
    MissingAccount,
    #[error("Order name must not be empty")]
    MissingName,
    #[error("Quantity must be greater than zero")]
    InvalidQuantity,
    #[error("Price must not be negative")]
    NegativePrice,
}

/// An order as submitted for creation: everything but the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub account_number: String,
    pub name: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        check_fields(&self.account_number, &self.name, self.quantity, self.price)
    }
}

/// A complete order, as stored by the orders service.
///
/// # Wire format
/// ```json
/// {"orderId":"…","accountNumber":"…","name":"Desk","qty":2,"price":50.99,"status":"Pending"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub account_number: String,
    pub name: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    /// Promotes a draft into an order carrying `order_id`.
    pub fn from_draft(order_id: OrderId, draft: OrderDraft) -> Self {
        Self {
            order_id,
            account_number: draft.account_number,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            status: draft.status,
        }
    }

    pub fn validate(&self) -> Result<(), OrderValidationError> {
        check_fields(&self.account_number, &self.name, self.quantity, self.price)
    }
}

fn check_fields(
    account_number: &str,
    name: &str,
    quantity: u32,
    price: Decimal,
) -> Result<(), OrderValidationError> {
    if account_number.trim().is_empty() {
        return Err(OrderValidationError::MissingAccount);
    }
    if name.trim().is_empty() {
        return Err(OrderValidationError::MissingName);
    }
    if quantity == 0 {
        return Err(OrderValidationError::InvalidQuantity);
    }
    if price.is_sign_negative() && !price.is_zero() {
        return Err(OrderValidationError::NegativePrice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn draft() -> OrderDraft {
        OrderDraft {
            account_number: "acc-1".into(),
            name: "Test Order".into(),
            quantity: 2,
            price: Decimal::from_str("50.99").unwrap(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_order_wire_format() {
        let order = Order::from_draft(OrderId::from("o-1"), draft());
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["orderId"], "o-1");
        assert_eq!(json["accountNumber"], "acc-1");
        assert_eq!(json["qty"], 2);
        assert!(json["price"].is_number());
        assert!((json["price"].as_f64().unwrap() - 50.99).abs() < 1e-9);
        assert_eq!(json["status"], "Pending");
    }

    #[test]
    fn test_draft_accepts_missing_status() {
        let draft: OrderDraft = serde_json::from_str(
            r#"{"accountNumber":"acc-9","name":"Lamp","qty":1,"price":12.5}"#,
        )
        .unwrap();
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.price, Decimal::from_str("12.5").unwrap());
    }

    #[test]
    fn test_validation_rules() {
        assert!(draft().validate().is_ok());

        let mut zero_qty = draft();
        zero_qty.quantity = 0;
        assert_eq!(zero_qty.validate(), Err(OrderValidationError::InvalidQuantity));

        let mut negative = draft();
        negative.price = Decimal::from_str("-0.01").unwrap();
        assert_eq!(negative.validate(), Err(OrderValidationError::NegativePrice));

        let mut free = draft();
        free.price = Decimal::ZERO;
        assert!(free.validate().is_ok());

        let mut blank = draft();
        blank.name = "  ".into();
        assert_eq!(blank.validate(), Err(OrderValidationError::MissingName));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }
}
