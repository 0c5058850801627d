use std::sync::Arc;

use bingo_domain::storage::KeyValueStore;
use bingo_infrastructure::persistence::{Database, SqliteKeyValueStore};

mod test_helpers;

#[tokio::test]
async fn kv_store_set_get_overwrite_remove_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let store = SqliteKeyValueStore::new(Arc::new(pool));

    assert_eq!(store.get("totalScore").await.expect("get missing"), None);

    store.set("totalScore", "150").await.expect("set");
    assert_eq!(
        store.get("totalScore").await.expect("get"),
        Some("150".to_string())
    );

    store.set("totalScore", "250").await.expect("overwrite");
    assert_eq!(
        store.get("totalScore").await.expect("get overwritten"),
        Some("250".to_string())
    );

    store.remove("totalScore").await.expect("remove");
    assert_eq!(store.get("totalScore").await.expect("get removed"), None);

    store.remove("totalScore").await.expect("remove twice");
}

#[tokio::test]
async fn kv_store_keeps_json_documents_verbatim() {
    let pool = test_helpers::setup_in_memory_db().await;
    let store = SqliteKeyValueStore::new(Arc::new(pool));

    let tasks = r#"[{"id":1,"title":"Stretch \"10\" min","completed":false}]"#;
    store.set("tasks_3x3", tasks).await.expect("set json");

    assert_eq!(
        store.get("tasks_3x3").await.expect("get json").as_deref(),
        Some(tasks)
    );
}

#[tokio::test]
async fn kv_store_survives_reopen_integration() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("nested").join("daily-bingo.db");
    let db_path = db_path.to_str().expect("utf-8 path").to_string();

    {
        let database = Database::new(&db_path).await.expect("open db");
        database.run_migrations().await.expect("migrate");
        let store = SqliteKeyValueStore::new(Arc::new(database.pool().clone()));
        store.set("lastResetDay", "2025-04-01").await.expect("set");
        database.pool().close().await;
    }

    let database = Database::new(&db_path).await.expect("reopen db");
    database.run_migrations().await.expect("migrate again");
    let store = SqliteKeyValueStore::new(Arc::new(database.pool().clone()));

    assert_eq!(
        store.get("lastResetDay").await.expect("get after reopen"),
        Some("2025-04-01".to_string())
    );
}
