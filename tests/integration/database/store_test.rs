//! Postgres-backed task store tests
//!
//! The in-memory variant covers the store contract in unit tests; these
//! verify the SQL path against a real database. Each test is skipped
//! when DATABASE_URL is unset and serialized because they share the
//! tasks table.

#[cfg(feature = "ssr")]
mod tests {
    use serial_test::serial;

    use taskboard::backend::tasks::store::TaskStore;
    use taskboard::shared::task::{NewTask, TaskPatch};

    use crate::common::database::TestDatabase;

    #[tokio::test]
    #[serial]
    async fn test_insert_and_list_round_trip() {
        let Some(db) = TestDatabase::connect().await else {
            return;
        };
        db.cleanup().await.unwrap();
        let store = TaskStore::postgres(db.pool().clone());

        let created = store
            .insert_one(NewTask::new("Persisted", "On disk"))
            .await
            .unwrap();
        assert!(!created.is_completed);

        let listed = store.find_all().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_orders_newest_first() {
        let Some(db) = TestDatabase::connect().await else {
            return;
        };
        db.cleanup().await.unwrap();
        let store = TaskStore::postgres(db.pool().clone());

        for title in ["first", "second"] {
            store.insert_one(NewTask::new(title, "d")).await.unwrap();
        }

        let listed = store.find_all().await.unwrap();
        assert_eq!(listed[0].title, "second");
        assert_eq!(listed[1].title, "first");
    }

    #[tokio::test]
    #[serial]
    async fn test_partial_update_touches_only_patched_fields() {
        let Some(db) = TestDatabase::connect().await else {
            return;
        };
        db.cleanup().await.unwrap();
        let store = TaskStore::postgres(db.pool().clone());

        let created = store
            .insert_one(NewTask::new("Original", "Unchanged"))
            .await
            .unwrap();

        let updated = store
            .update_one(created.id, TaskPatch::completion(true))
            .await
            .unwrap()
            .expect("record exists");

        assert!(updated.is_completed);
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.description, "Unchanged");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_missing_row_returns_none() {
        let Some(db) = TestDatabase::connect().await else {
            return;
        };
        db.cleanup().await.unwrap();
        let store = TaskStore::postgres(db.pool().clone());

        let result = store
            .update_one(uuid::Uuid::new_v4(), TaskPatch::completion(true))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_reports_whether_row_existed() {
        let Some(db) = TestDatabase::connect().await else {
            return;
        };
        db.cleanup().await.unwrap();
        let store = TaskStore::postgres(db.pool().clone());

        let created = store.insert_one(NewTask::new("gone", "d")).await.unwrap();
        assert!(store.delete_one(created.id).await.unwrap());
        assert!(!store.delete_one(created.id).await.unwrap());
    }
}
