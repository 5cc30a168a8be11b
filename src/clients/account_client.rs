use crate::account_actor::AccountError;
use crate::model::{Account, AccountCreate, AccountUpdate};
use record_actor::{RecordClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the account actor.
///
/// Translates store-level errors into [`AccountError`] so callers never see
/// [`StoreError`] directly.
#[derive(Clone)]
pub struct AccountClient {
    inner: RecordClient<Account>,
}

impl AccountClient {
    pub fn new(inner: RecordClient<Account>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, account), fields(email = %account.email))]
    pub async fn create_account(&self, account: AccountCreate) -> Result<Account, AccountError> {
        debug!("Sending request");
        self.inner.create(account).await.map_err(map_error)
    }

    #[instrument(skip(self))]
    pub async fn fetch_account(&self, email: &str) -> Result<Account, AccountError> {
        debug!("Sending request");
        self.inner
            .get(email.to_string())
            .await
            .map_err(map_error)?
            .ok_or_else(|| AccountError::NotFound(email.to_string()))
    }

    #[instrument(skip(self, update))]
    pub async fn update_account(
        &self,
        email: &str,
        update: AccountUpdate,
    ) -> Result<Account, AccountError> {
        debug!(?update, "Sending request");
        self.inner
            .update(email.to_string(), update)
            .await
            .map_err(map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_account(&self, email: &str) -> Result<Account, AccountError> {
        debug!("Sending request");
        self.inner.delete(email.to_string()).await.map_err(map_error)
    }
}

fn map_error(e: StoreError) -> AccountError {
    match e {
        StoreError::NotFound(email) => AccountError::NotFound(email),
        StoreError::AlreadyExists(email) => AccountError::AlreadyExists(email),
        StoreError::Rejected(source) => match source.downcast::<AccountError>() {
            Ok(account_error) => *account_error,
            Err(other) => AccountError::ValidationError(other.to_string()),
        },
        other @ (StoreError::ActorClosed | StoreError::ActorDropped) => {
            AccountError::ActorCommunicationError(other.to_string())
        }
    }
}
