/**
 * Task View
 *
 * Client-side state container: a single in-memory ordered collection of
 * tasks, seeded by the full List fetch and kept current by applying the
 * broadcast events as they arrive.
 *
 * # Merge Rules
 *
 * - `created`: insert at the front (the list is newest-first); if a
 *   record with the same id is already present, replace it instead so a
 *   duplicate delivery never duplicates a row
 * - `updated`: replace the record matching `id`; silent no-op when no
 *   record matches
 * - `deleted`: remove the record matching `id`
 *
 * # Interleaving
 *
 * The initial List and the event stream may interleave. Events that
 * arrive before the snapshot resolves are buffered and applied in
 * order once it lands; `mark_stale` re-enters that buffering mode when
 * the session manager requests a resync.
 *
 * There are no optimistic updates: mutations issued by this client are
 * reflected only when their broadcast event round-trips back.
 */
use uuid::Uuid;

use crate::shared::event::TaskEvent;
use crate::shared::task::Task;

/// In-memory view of the task list
#[derive(Default)]
pub struct TaskView {
    tasks: Vec<Task>,
    synced: bool,
    pending: Vec<TaskEvent>,
}

impl TaskView {
    /// Empty, un-synced view; events buffer until the first snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a List snapshot has been applied since the last resync
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    /// The current task collection, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of events waiting for the snapshot
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Seed the view from a full List response
    ///
    /// Replaces the collection wholesale, then applies any events that
    /// were buffered while the fetch was in flight, in arrival order.
    pub fn apply_snapshot(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.synced = true;
        let buffered = std::mem::take(&mut self.pending);
        for event in buffered {
            self.merge(event);
        }
    }

    /// Re-enter buffering mode until the next snapshot arrives
    ///
    /// Called when the session manager signals a resync (reconnect or
    /// sequence gap): the current collection may be missing events, so
    /// new ones are held back rather than merged into stale state.
    pub fn mark_stale(&mut self) {
        self.synced = false;
    }

    /// Apply one broadcast event
    ///
    /// Buffers the event when no snapshot has been applied yet.
    pub fn apply_event(&mut self, event: TaskEvent) {
        if self.synced {
            self.merge(event);
        } else {
            self.pending.push(event);
        }
    }

    fn merge(&mut self, event: TaskEvent) {
        match event {
            TaskEvent::Created(task) => match self.position(task.id) {
                Some(pos) => self.tasks[pos] = task,
                None => self.tasks.insert(0, task),
            },
            TaskEvent::Updated(task) => {
                // Unknown id: silent no-op, the record is not in this view
                if let Some(pos) = self.position(task.id) {
                    self.tasks[pos] = task;
                }
            }
            TaskEvent::Deleted(deleted) => {
                self.tasks.retain(|task| task.id != deleted.id);
            }
        }
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Tasks not yet completed, in view order
    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.is_completed)
    }

    /// Completed tasks, in view order
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_completed)
    }
}
