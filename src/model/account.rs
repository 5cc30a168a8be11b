use serde::{Deserialize, Serialize};

/// A customer account held by the local accounts store.
///
/// # Record Store
/// `Account` implements [`Record`](record_actor::Record) (see [`crate::account_actor`]) and is
/// keyed by `email`: two accounts can never share an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Assigned by the store on creation.
    pub account_number: String,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
}

/// Payload for opening a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreate {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
}

/// Payload for updating an existing account. The email itself is the key and cannot change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub mobile_number: Option<String>,
}

/// Body of `PUT /api/accounts/update`: the key plus the fields to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdateRequest {
    pub email: String,
    #[serde(flatten)]
    pub update: AccountUpdate,
}
