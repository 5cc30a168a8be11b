//! Account store: the `Record` implementation for [`Account`] and its actor constructor.

pub mod error;
pub mod record;

pub use error::*;

use crate::clients::AccountClient;
use crate::model::Account;
use record_actor::RecordActor;

/// Creates a new account actor and its client.
pub fn new(mailbox_capacity: usize) -> (RecordActor<Account>, AccountClient) {
    let (actor, generic_client) = RecordActor::new(mailbox_capacity);
    (actor, AccountClient::new(generic_client))
}
