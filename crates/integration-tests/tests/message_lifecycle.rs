//! End-to-end message lifecycle against SQLite
//!
//! Service -> SqliteMessageRepository -> translate, with a real store.

use std::sync::Arc;

use msgboard_core::application::MessageService;
use msgboard_core::domain::Message;
use msgboard_core::error::AppError;
use msgboard_core::port::time_provider::{FixedTimeProvider, SystemTimeProvider};
use msgboard_core::port::MessageRepository;
use msgboard_infra_sqlite::{create_pool, ensure_schema, SqliteMessageRepository};

async fn setup(clock_ms: i64) -> (MessageService, Arc<SqliteMessageRepository>) {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    ensure_schema(&pool).await.unwrap();

    let repo = Arc::new(SqliteMessageRepository::new(pool));
    let service = MessageService::new(repo.clone(), Arc::new(FixedTimeProvider(clock_ms)));
    (service, repo)
}

#[tokio::test]
async fn test_create_get_update_delete_scenario() {
    let (service, _) = setup(1_000).await;

    // Create on empty store
    let created = service.create(Message::new("title", "body")).await.unwrap();
    assert_eq!(
        created,
        Message {
            id: 1,
            title: "title".to_string(),
            body: "body".to_string(),
            created_at: 1_000,
        }
    );

    // Get returns the identical entity
    assert_eq!(service.get(1).await.unwrap(), created);

    // Update keeps id and created_at
    let updated = service
        .update(Message::with_id(1, "new", "new body"))
        .await
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.title, "new");
    assert_eq!(updated.body, "new body");
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(service.get(1).await.unwrap(), updated);

    // Delete, then Get is NotFound
    service.delete(1).await.unwrap();
    let err = service.get(1).await.unwrap_err();
    assert_eq!(err.status(), 404);
}

#[tokio::test]
async fn test_create_ignores_caller_timestamp() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    ensure_schema(&pool).await.unwrap();
    let repo = Arc::new(SqliteMessageRepository::new(pool));
    let service = MessageService::new(repo, Arc::new(SystemTimeProvider));

    let before = chrono::Utc::now().timestamp_millis();
    let request = Message {
        id: 0,
        title: "title".to_string(),
        body: "body".to_string(),
        created_at: 1, // 1970
    };
    let created = service.create(request).await.unwrap();
    let after = chrono::Utc::now().timestamp_millis();

    assert!(created.created_at >= before && created.created_at <= after);
    assert_eq!(service.get(created.id).await.unwrap().created_at, created.created_at);
}

#[tokio::test]
async fn test_get_all_empty_table_is_not_found() {
    let (service, _) = setup(1_000).await;

    let err = service.get_all().await.unwrap_err();
    assert_eq!(err, AppError::NotFound("no records found".to_string()));

    service.create(Message::new("a", "b")).await.unwrap();
    assert_eq!(service.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_fields_never_persisted() {
    let (service, repo) = setup(1_000).await;

    let err = service.create(Message::new(" \t", "body")).await.unwrap_err();
    assert_eq!(err, AppError::Validation("enter a valid title".to_string()));

    let err = service.create(Message::new("title", "\n")).await.unwrap_err();
    assert_eq!(err, AppError::Validation("enter a valid body".to_string()));

    assert_eq!(repo.get_all().await.unwrap_err().status(), 404);
}

#[tokio::test]
async fn test_whitespace_is_trimmed_before_storage() {
    let (service, _) = setup(1_000).await;

    let created = service
        .create(Message::new("  padded title  ", "\tpadded body\n"))
        .await
        .unwrap();

    let stored = service.get(created.id).await.unwrap();
    assert_eq!(stored.title, "padded title");
    assert_eq!(stored.body, "padded body");
}

#[tokio::test]
async fn test_duplicate_title_is_conflict() {
    let (service, _) = setup(1_000).await;
    service.create(Message::new("title", "body")).await.unwrap();

    // Trimming happens first, so padded duplicates collide too
    let err = service
        .create(Message::new(" title ", "other body"))
        .await
        .unwrap_err();
    assert_eq!(err, AppError::Conflict("title already taken".to_string()));
    assert_eq!(err.status(), 409);
}

#[tokio::test]
async fn test_update_to_taken_title_is_conflict() {
    let (service, _) = setup(1_000).await;
    service.create(Message::new("first", "body")).await.unwrap();
    let second = service.create(Message::new("second", "body")).await.unwrap();

    let err = service
        .update(Message::with_id(second.id, "first", "body"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "title already taken");
    assert_eq!(service.get(second.id).await.unwrap().title, "second");
}

#[tokio::test]
async fn test_update_and_delete_missing_are_not_found() {
    let (service, _) = setup(1_000).await;

    let err = service
        .update(Message::with_id(7, "title", "body"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), 404);

    let err = service.delete(7).await.unwrap_err();
    assert_eq!(err.status(), 404);
}

#[tokio::test]
async fn test_persistence_across_pools() {
    let db_path = std::env::temp_dir().join(format!(
        "msgboard_persistence_{}.db",
        std::process::id()
    ));
    let db_path = db_path.to_str().unwrap().to_string();
    let _ = std::fs::remove_file(&db_path);

    {
        let pool = create_pool(&db_path).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let service = MessageService::new(
            Arc::new(SqliteMessageRepository::new(pool.clone())),
            Arc::new(FixedTimeProvider(42)),
        );
        service.create(Message::new("kept", "body")).await.unwrap();
        pool.close().await;
    }

    {
        let pool = create_pool(&db_path).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let repo = SqliteMessageRepository::new(pool.clone());

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "kept");
        assert_eq!(all[0].created_at, 42);
        pool.close().await;
    }

    let _ = std::fs::remove_file(&db_path);
    let _ = std::fs::remove_file(format!("{}-wal", db_path));
    let _ = std::fs::remove_file(format!("{}-shm", db_path));
}
