use accounts_service::account_actor::{self, AccountError};
use accounts_service::clients::AccountClient;
use accounts_service::model::{Account, AccountCreate, AccountUpdate};
use record_actor::mock::MockRecordClient;
use record_actor::StoreError;

fn jane() -> AccountCreate {
    AccountCreate {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        mobile_number: "12345678".into(),
    }
}

/// Real account actor behind the typed client.
#[tokio::test]
async fn test_account_lifecycle() {
    let (actor, client) = account_actor::new(8);
    let handle = tokio::spawn(actor.run());

    // 1. Create assigns an account number
    let created = client.create_account(jane()).await.unwrap();
    assert_eq!(created.email, "jane@example.com");
    assert!(uuid::Uuid::parse_str(&created.account_number).is_ok());

    // 2. Fetch by email
    let fetched = client.fetch_account("jane@example.com").await.unwrap();
    assert_eq!(fetched, created);

    // 3. Update name and mobile, keep key and account number
    let updated = client
        .update_account(
            "jane@example.com",
            AccountUpdate {
                name: Some("Jane Roe".into()),
                mobile_number: Some("87654321".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Jane Roe");
    assert_eq!(updated.mobile_number, "87654321");
    assert_eq!(updated.account_number, created.account_number);

    // 4. Delete, then the account is gone
    client.delete_account("jane@example.com").await.unwrap();
    let missing = client.fetch_account("jane@example.com").await;
    assert_eq!(
        missing,
        Err(AccountError::NotFound("jane@example.com".into()))
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let (actor, client) = account_actor::new(8);
    tokio::spawn(actor.run());

    client.create_account(jane()).await.unwrap();
    let err = client.create_account(jane()).await.unwrap_err();

    assert_eq!(err, AccountError::AlreadyExists("jane@example.com".into()));
    assert_eq!(
        err.to_string(),
        "Account already registered with given Email jane@example.com"
    );
}

#[tokio::test]
async fn test_validation_messages() {
    let (actor, client) = account_actor::new(8);
    tokio::spawn(actor.run());

    let short_name = AccountCreate {
        name: "Rol".into(),
        ..jane()
    };
    let err = client.create_account(short_name).await.unwrap_err();
    assert_eq!(
        err,
        AccountError::ValidationError(
            "Name must be longer than 4 letters and contain only letters and spaces".into()
        )
    );

    let bad_email = AccountCreate {
        email: "johndoe3".into(),
        ..jane()
    };
    let err = client.create_account(bad_email).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email format");

    let bad_mobile = AccountCreate {
        mobile_number: "123456789".into(),
        ..jane()
    };
    let err = client.create_account(bad_mobile).await.unwrap_err();
    assert_eq!(err.to_string(), "Mobile number must be 8 digits");

    client.create_account(jane()).await.unwrap();
    let err = client
        .update_account(
            "jane@example.com",
            AccountUpdate {
                name: Some("Jane Roe".into()),
                mobile_number: Some("12".into()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AccountError::ValidationError(_)));

    // A rejected update leaves the stored account untouched
    let stored = client.fetch_account("jane@example.com").await.unwrap();
    assert_eq!(stored.name, "Jane Doe");
}

#[tokio::test]
async fn test_missing_account_messages() {
    let (actor, client) = account_actor::new(8);
    tokio::spawn(actor.run());

    let err = client
        .update_account("ghost@example.com", AccountUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Account not found with the given input data Email : 'ghost@example.com'"
    );

    let err = client.delete_account("ghost@example.com").await.unwrap_err();
    assert!(matches!(err, AccountError::NotFound(_)));
}

/// Typed client over a scripted store: error mapping only.
#[tokio::test]
async fn test_client_maps_store_errors() {
    let mut mock = MockRecordClient::<Account>::new();
    mock.expect_get("jane@example.com".into()).return_ok(None);
    mock.expect_delete("jane@example.com".into())
        .return_err(StoreError::ActorClosed);
    let client = AccountClient::new(mock.client());

    let missing = client.fetch_account("jane@example.com").await;
    assert_eq!(
        missing,
        Err(AccountError::NotFound("jane@example.com".into()))
    );

    let closed = client.delete_account("jane@example.com").await;
    assert!(matches!(closed, Err(AccountError::ActorCommunicationError(_))));

    mock.verify();
}
