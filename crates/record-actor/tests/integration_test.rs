use record_actor::{Record, RecordActor, StoreError};

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct Device {
    serial: String,
    label: String,
    firmware: u32,
}

#[derive(Debug)]
struct DeviceCreate {
    serial: String,
    label: String,
}

#[derive(Debug)]
struct DeviceUpdate {
    label: Option<String>,
    firmware: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
enum DeviceError {
    #[error("Serial must not be empty")]
    EmptySerial,
    #[error("Firmware cannot be downgraded")]
    Downgrade,
}

impl Record for Device {
    type Key = String;
    type Create = DeviceCreate;
    type Update = DeviceUpdate;
    type Error = DeviceError;

    fn key_of(params: &DeviceCreate) -> String {
        params.serial.clone()
    }

    fn from_create(params: DeviceCreate) -> Result<Self, DeviceError> {
        if params.serial.is_empty() {
            return Err(DeviceError::EmptySerial);
        }
        Ok(Self {
            serial: params.serial,
            label: params.label,
            firmware: 1,
        })
    }

    fn apply_update(&mut self, update: DeviceUpdate) -> Result<(), DeviceError> {
        if let Some(firmware) = update.firmware {
            if firmware < self.firmware {
                return Err(DeviceError::Downgrade);
            }
            self.firmware = firmware;
        }
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }
}

fn create(serial: &str, label: &str) -> DeviceCreate {
    DeviceCreate {
        serial: serial.into(),
        label: label.into(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = RecordActor::<Device>::new(10);
    tokio::spawn(actor.run());

    // 1. Create
    let device = client.create(create("SN-1", "kitchen")).await.unwrap();
    assert_eq!(device.firmware, 1);

    // 2. Get
    let fetched = client.get("SN-1".into()).await.unwrap();
    assert_eq!(fetched, Some(device.clone()));

    // 3. Update
    let updated = client
        .update(
            "SN-1".into(),
            DeviceUpdate {
                label: Some("garage".into()),
                firmware: Some(3),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "garage");
    assert_eq!(updated.firmware, 3);

    // 4. Delete returns the last state
    let deleted = client.delete("SN-1".into()).await.unwrap();
    assert_eq!(deleted, updated);
    assert_eq!(client.get("SN-1".into()).await.unwrap(), None);
}

#[tokio::test]
async fn test_duplicate_key_is_rejected() {
    let (actor, client) = RecordActor::<Device>::new(10);
    tokio::spawn(actor.run());

    client.create(create("SN-2", "hall")).await.unwrap();
    let result = client.create(create("SN-2", "attic")).await;

    assert!(matches!(result, Err(StoreError::AlreadyExists(key)) if key == "SN-2"));
    // The original record is untouched
    let stored = client.get("SN-2".into()).await.unwrap().unwrap();
    assert_eq!(stored.label, "hall");
}

#[tokio::test]
async fn test_validation_errors_surface_as_rejected() {
    let (actor, client) = RecordActor::<Device>::new(10);
    tokio::spawn(actor.run());

    let result = client.create(create("", "nowhere")).await;
    match result {
        Err(StoreError::Rejected(e)) => assert_eq!(e.to_string(), "Serial must not be empty"),
        other => panic!("expected Rejected, got {other:?}"),
    }

    client.create(create("SN-3", "office")).await.unwrap();
    client
        .update(
            "SN-3".into(),
            DeviceUpdate {
                label: None,
                firmware: Some(5),
            },
        )
        .await
        .unwrap();
    let downgrade = client
        .update(
            "SN-3".into(),
            DeviceUpdate {
                label: Some("lab".into()),
                firmware: Some(2),
            },
        )
        .await;
    assert!(matches!(downgrade, Err(StoreError::Rejected(_))));

    let stored = client.get("SN-3".into()).await.unwrap().unwrap();
    assert_eq!(stored.firmware, 5);
    assert_eq!(stored.label, "office");
}

#[tokio::test]
async fn test_missing_keys_report_not_found() {
    let (actor, client) = RecordActor::<Device>::new(10);
    tokio::spawn(actor.run());

    let update = client
        .update(
            "ghost".into(),
            DeviceUpdate {
                label: None,
                firmware: None,
            },
        )
        .await;
    assert!(matches!(update, Err(StoreError::NotFound(key)) if key == "ghost"));

    let delete = client.delete("ghost".into()).await;
    assert!(matches!(delete, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_concurrent_creates_with_same_key_admit_one() {
    let (actor, client) = RecordActor::<Device>::new(64);
    tokio::spawn(actor.run());

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(create("SN-race", &format!("writer-{i}"))).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }
    assert_eq!(created, 1);
}

#[tokio::test]
async fn test_actor_stops_when_clients_dropped() {
    let (actor, client) = RecordActor::<Device>::new(4);
    let handle = tokio::spawn(actor.run());

    client.create(create("SN-4", "porch")).await.unwrap();
    drop(client);

    handle.await.unwrap();
}

#[tokio::test]
async fn test_zero_buffer_size_still_serves_requests() {
    let (actor, client) = RecordActor::<Device>::new(0);
    tokio::spawn(actor.run());

    client.create(create("SN-5", "shed")).await.unwrap();
    let fetched = client.get("SN-5".into()).await.unwrap().unwrap();

    assert_eq!(fetched.label, "shed");
}
