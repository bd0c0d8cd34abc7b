// dinein-client/tests/session_store.rs
// 会话持久化测试

use dinein_client::models::{CartItem, ExtraPercent};
use dinein_client::{ClientConfig, ClientError, FileStore, KvStore, Session};
use tempfile::TempDir;

#[test]
fn test_file_store_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("session.json");

    {
        let session = Session::open_file(&path).unwrap();
        session.set_business_id(4).unwrap();
        session.set_auth_token("abc").unwrap();
        session
            .set_existing_items(&[CartItem::new(1, "Tea", 20.0).with_quantity(2)])
            .unwrap();
        session
            .set_extra_percent(&ExtraPercent {
                vat_low: 5.0,
                ..Default::default()
            })
            .unwrap();
        session.set_item_tag(1, "ORD00003").unwrap();
    }

    assert!(path.exists());
    let session = Session::open_file(&path).unwrap();
    assert_eq!(session.business_id(), Some(4));
    assert_eq!(session.auth_token().as_deref(), Some("abc"));
    assert_eq!(session.existing_items()[0].quantity, 2);
    assert_eq!(session.extra_percent().map(|p| p.vat_low), Some(5.0));
    assert_eq!(session.item_tag(1).as_deref(), Some("ORD00003"));
}

#[test]
fn test_file_store_remove_persists() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");

    let store = FileStore::open(&path).unwrap();
    store.set("token", "abc").unwrap();
    store.set("role", "Admin").unwrap();
    store.remove("token").unwrap();
    assert_eq!(store.path(), path.as_path());

    let reopened = FileStore::open(&path).unwrap();
    assert!(reopened.get("token").is_none());
    assert_eq!(reopened.get("role").as_deref(), Some("Admin"));
}

#[test]
fn test_corrupt_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");
    std::fs::write(&path, "{ nope").unwrap();

    assert!(matches!(FileStore::open(&path), Err(ClientError::Serialization(_))));
}

#[test]
fn test_config_selects_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");

    let config = ClientConfig::default().with_storage_path(&path);
    let session = Session::from_config(&config).unwrap();
    session.set_table_number(9).unwrap();
    assert!(path.exists());

    let in_memory = Session::from_config(&ClientConfig::default()).unwrap();
    assert!(in_memory.table_number().is_none());
}
