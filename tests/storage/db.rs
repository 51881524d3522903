use chrono::NaiveDate;
use memocal::storage::LocalStorage;

fn temp_db_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("memocal-test-{}-{}", std::process::id(), name))
        .join("memocal.db")
}

#[tokio::test]
async fn test_local_storage_creation() {
    // Test that we can create local storage (use in-memory database for tests)
    let result = LocalStorage::in_memory().await;
    assert!(result.is_ok(), "LocalStorage should be created successfully");
}

#[tokio::test]
async fn test_new_database_is_empty() {
    let storage = LocalStorage::in_memory().await.unwrap();
    assert_eq!(storage.memo_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_reopen_keeps_existing_memos() {
    let path = temp_db_path("reopen");
    let _ = std::fs::remove_file(&path);
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    let storage = LocalStorage::open(&path).await.unwrap();
    storage.save_memo(date, "dentist").await.unwrap();
    storage.close().await.unwrap();

    // Opening again must not recreate the table
    let storage = LocalStorage::open(&path).await.unwrap();
    assert_eq!(storage.get_memo(date).await.unwrap(), "dentist");
    assert_eq!(storage.memo_count().await.unwrap(), 1);
    storage.close().await.unwrap();

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[tokio::test]
async fn test_path_with_url_characters() {
    let path = temp_db_path("url-chars").with_file_name("memo?cal#1.db");
    let _ = std::fs::remove_file(&path);
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let storage = LocalStorage::open(&path).await.unwrap();
    storage.save_memo(date, "picnic").await.unwrap();
    storage.close().await.unwrap();

    // The file carries the literal name, query and fragment characters included
    assert!(path.exists());

    let storage = LocalStorage::open(&path).await.unwrap();
    assert_eq!(storage.get_memo(date).await.unwrap(), "picnic");
    storage.close().await.unwrap();

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}
