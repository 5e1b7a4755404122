//! Task list store: commands, hydration, persist-on-mutation.
//!
//! # Responsibility
//! - Own the authoritative task list and mutate it only through commands.
//! - Hand the full serialized list to storage after every mutation.
//!
//! # Invariants
//! - Task ids are unique within the list.
//! - New tasks are prepended; commands never reorder survivors.
//! - Invalid interactive input (blank text, unknown id) is a silent no-op.
//! - A failed save is logged and not retried; memory stays authoritative.

use crate::clock::{Clock, SystemClock};
use crate::idgen::{IdGenerator, UuidIdGenerator};
use crate::model::task::{normalize_text, Filter, Task, TaskId};
use crate::query::filter::{snapshot, TaskListSnapshot};
use crate::storage::task_storage::StorageAdapter;
use crate::storage::wire::{decode_tasks, encode_tasks};
use log::{info, warn};

/// Single-owner state store behind the task list view.
///
/// All mutation goes through the command methods; reads go through
/// [`TaskListStore::snapshot`] and [`TaskListStore::tasks`]. The selected
/// [`Filter`] is transient display state and is never persisted.
pub struct TaskListStore<S: StorageAdapter> {
    tasks: Vec<Task>,
    filter: Filter,
    storage: S,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl<S: StorageAdapter> TaskListStore<S> {
    /// Opens a store with default id generation and wall-clock time,
    /// hydrating from whatever `storage` holds.
    pub fn open(storage: S) -> Self {
        Self::with_capabilities(storage, Box::new(UuidIdGenerator), Box::new(SystemClock))
    }

    /// Opens a store with injected capabilities, for deterministic tests.
    pub fn with_capabilities(
        storage: S,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let mut store = Self {
            tasks: Vec::new(),
            filter: Filter::default(),
            storage,
            ids,
            clock,
        };
        store.hydrate();
        store
    }

    /// Adds a task from raw user input at the head of the list.
    ///
    /// Input is trimmed; blank input is a silent no-op returning `None`.
    pub fn create(&mut self, text: &str) -> Option<TaskId> {
        // Validate before drawing an id, so rejected input consumes nothing.
        let text = normalize_text(text)?;
        let task = Task::new(self.ids.next_id(), &text, self.clock.now_epoch_ms()).ok()?;
        let id = task.id;
        self.tasks.insert(0, task);
        info!(
            "event=task_create module=store status=ok id={id} tasks={}",
            self.tasks.len()
        );
        self.persist();
        Some(id)
    }

    /// Flips completion for `id`. Unknown ids are a silent no-op.
    ///
    /// Returns whether a task changed. Ordering and all other fields are
    /// untouched either way.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                let completed = task.completed;
                info!("event=task_toggle module=store status=ok id={id} completed={completed}");
                self.persist();
                true
            }
            None => {
                info!("event=task_toggle module=store status=noop id={id} reason=unknown_id");
                false
            }
        }
    }

    /// Removes the task with `id` if present. Unknown ids are a no-op.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            info!("event=task_remove module=store status=noop id={id} reason=unknown_id");
            return false;
        }
        info!(
            "event=task_remove module=store status=ok id={id} tasks={}",
            self.tasks.len()
        );
        self.persist();
        true
    }

    /// Removes every completed task, preserving the order of the rest.
    ///
    /// Returns how many tasks were removed. Removing nothing is a no-op
    /// and does not rewrite storage.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.is_active());
        let removed = before - self.tasks.len();
        if removed > 0 {
            info!(
                "event=tasks_clear_completed module=store status=ok removed={removed} tasks={}",
                self.tasks.len()
            );
            self.persist();
        }
        removed
    }

    /// Selects the display filter. Transient; never persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Currently selected display filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Read-only view of the authoritative list, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Derived state for the view layer under the selected filter.
    pub fn snapshot(&self) -> TaskListSnapshot {
        snapshot(&self.tasks, self.filter)
    }

    /// Read-only access to the underlying adapter, for assertions and
    /// embedding.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn hydrate(&mut self) {
        match self.storage.load_raw() {
            Ok(Some(raw)) => {
                self.tasks = decode_tasks(&raw);
                info!(
                    "event=store_hydrate module=store status=ok tasks={}",
                    self.tasks.len()
                );
                // Hydration counts as a mutation: write the sanitized list
                // back so dropped entries do not survive on disk.
                self.persist();
            }
            Ok(None) => {
                info!("event=store_hydrate module=store status=ok tasks=0 prior_state=absent");
            }
            Err(err) => {
                // Unreadable storage degrades to an empty session; the
                // payload on disk is left alone.
                warn!("event=store_hydrate module=store status=error error={err}");
            }
        }
    }

    fn persist(&mut self) {
        let raw = match encode_tasks(&self.tasks) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("event=tasks_save module=store status=error error_code=encode_failed error={err}");
                return;
            }
        };
        if let Err(err) = self.storage.save_raw(&raw) {
            // Best-effort durability: the in-memory list stays authoritative
            // and the save is not retried.
            warn!("event=tasks_save module=store status=error error_code=save_failed error={err}");
        }
    }
}
