//! Property-based tests for the client task view merge rules

use std::collections::HashSet;

use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

use taskboard::client::view::TaskView;
use taskboard::shared::event::TaskEvent;
use taskboard::shared::task::Task;

// A small id pool so generated events actually collide with each other
// and with snapshot records.
fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn arb_task() -> impl Strategy<Value = Task> {
    (0u128..4, "[a-z]{1,20}", any::<bool>()).prop_map(|(n, title, is_completed)| Task {
        id: id(n),
        title,
        description: "generated".to_string(),
        is_completed,
        created_at: Utc::now(),
    })
}

fn arb_event() -> impl Strategy<Value = TaskEvent> {
    prop_oneof![
        arb_task().prop_map(TaskEvent::Created),
        arb_task().prop_map(TaskEvent::Updated),
        (0u128..4).prop_map(|n| TaskEvent::deleted(id(n))),
    ]
}

fn arb_snapshot() -> impl Strategy<Value = Vec<Task>> {
    proptest::collection::vec(arb_task(), 0..4).prop_map(|tasks| {
        let mut seen = HashSet::new();
        tasks
            .into_iter()
            .filter(|task| seen.insert(task.id))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_ids_stay_unique_under_any_event_sequence(
        snapshot in arb_snapshot(),
        events in proptest::collection::vec(arb_event(), 0..20),
    ) {
        let mut view = TaskView::new();
        view.apply_snapshot(snapshot);
        for event in events {
            view.apply_event(event);
        }

        let ids: HashSet<Uuid> = view.tasks().iter().map(|task| task.id).collect();
        prop_assert_eq!(ids.len(), view.tasks().len());
    }

    #[test]
    fn test_buffered_events_converge_to_same_state(
        snapshot in arb_snapshot(),
        events in proptest::collection::vec(arb_event(), 0..20),
    ) {
        // Snapshot first, then events
        let mut eager = TaskView::new();
        eager.apply_snapshot(snapshot.clone());
        for event in events.clone() {
            eager.apply_event(event);
        }

        // Same events buffered before the snapshot lands
        let mut buffered = TaskView::new();
        for event in events {
            buffered.apply_event(event);
        }
        buffered.apply_snapshot(snapshot);

        prop_assert_eq!(eager.tasks(), buffered.tasks());
    }

    #[test]
    fn test_delete_wins_over_prior_state(
        snapshot in arb_snapshot(),
        events in proptest::collection::vec(arb_event(), 0..10),
        victim in 0u128..4,
    ) {
        let mut view = TaskView::new();
        view.apply_snapshot(snapshot);
        for event in events {
            view.apply_event(event);
        }

        view.apply_event(TaskEvent::deleted(id(victim)));
        prop_assert!(view.tasks().iter().all(|task| task.id != id(victim)));
    }

    #[test]
    fn test_partitions_cover_the_whole_view(
        snapshot in arb_snapshot(),
        events in proptest::collection::vec(arb_event(), 0..20),
    ) {
        let mut view = TaskView::new();
        view.apply_snapshot(snapshot);
        for event in events {
            view.apply_event(event);
        }

        let partitioned = view.pending_tasks().count() + view.completed_tasks().count();
        prop_assert_eq!(partitioned, view.tasks().len());
    }
}
