//! Broadcast channel and session registry integration tests
//!
//! Exercises the fan-out primitive the way the handlers use it: cloned
//! publishers, one event per mutation, sequence numbers for gap
//! detection. Wire-shape assertions cover what actually travels in the
//! SSE `event:` and `data:` fields.

#[cfg(feature = "ssr")]
mod tests {
    use tokio::time::{timeout, Duration};
    use uuid::Uuid;

    use taskboard::backend::realtime::broadcast::TaskEventPublisher;
    use taskboard::backend::realtime::registry::SessionRegistry;
    use taskboard::shared::event::TaskEvent;
    use taskboard::shared::task::Task;

    use crate::common::fixtures::sample_task;

    #[tokio::test]
    async fn test_cloned_publishers_share_one_channel() {
        let publisher = TaskEventPublisher::new();
        let mut rx = publisher.subscribe();

        // Handlers each hold a clone; events from any of them reach
        // every subscriber with one shared sequence.
        let clone_a = publisher.clone();
        let clone_b = publisher.clone();
        clone_a.publish(TaskEvent::deleted(Uuid::new_v4()));
        clone_b.publish(TaskEvent::deleted(Uuid::new_v4()));

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.seq, 1);
        assert_eq!(second.seq, 2);
        assert_eq!(publisher.last_seq(), 2);
    }

    #[tokio::test]
    async fn test_every_subscriber_gets_every_event() {
        let publisher = TaskEventPublisher::new();
        let mut receivers: Vec<_> = (0..3).map(|_| publisher.subscribe()).collect();
        assert_eq!(publisher.subscriber_count(), 3);

        let event = TaskEvent::created(sample_task("fan-out"));
        assert_eq!(publisher.publish(event.clone()), 3);

        for rx in &mut receivers {
            let received = timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("receive timed out")
                .unwrap();
            assert_eq!(received.event, event);
        }
    }

    #[tokio::test]
    async fn test_created_wire_shape_is_full_record() {
        let task = sample_task("wire");
        let event = TaskEvent::created(task.clone());

        assert_eq!(event.event_name(), "created");
        let payload: Task = serde_json::from_str(&event.payload_json().unwrap()).unwrap();
        assert_eq!(payload, task);
    }

    #[tokio::test]
    async fn test_deleted_wire_shape_is_id_only() {
        let id = Uuid::new_v4();
        let event = TaskEvent::deleted(id);

        assert_eq!(event.event_name(), "deleted");
        let payload: serde_json::Value =
            serde_json::from_str(&event.payload_json().unwrap()).unwrap();
        assert_eq!(payload, serde_json::json!({ "id": id }));
    }

    #[tokio::test]
    async fn test_registry_tracks_connection_lifecycle() {
        let registry = SessionRegistry::new();
        let guard_a = registry.register();
        let guard_b = registry.register();
        assert_eq!(registry.session_count(), 2);

        drop(guard_a);
        assert_eq!(registry.session_count(), 1);
        assert!(registry.is_registered(guard_b.id()));
    }
}
