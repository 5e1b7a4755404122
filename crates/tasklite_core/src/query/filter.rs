//! Pure filtered views over the task list.
//!
//! # Responsibility
//! - Derive display subsets, counters and flags from `(tasks, filter)`.
//!
//! # Invariants
//! - Filtering preserves list order.
//! - `incomplete_count(tasks) == filtered(tasks, Active).len()` always.

use crate::model::task::{Filter, Task};

/// Whether one task is visible under `filter`.
pub fn matches(task: &Task, filter: Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::Active => !task.completed,
        Filter::Completed => task.completed,
    }
}

/// Returns the subset of `tasks` selected by `filter`, order preserved.
pub fn filtered(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| matches(task, filter)).collect()
}

/// Count of tasks with `completed == false`.
pub fn incomplete_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.is_active()).count()
}

/// Whether at least one completed task exists.
///
/// Drives whether a clear-completed control is actionable.
pub fn any_completed(tasks: &[Task]) -> bool {
    tasks.iter().any(|task| task.completed)
}

/// Read-only derived state handed to view layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListSnapshot {
    /// Tasks visible under the selected filter, newest first.
    pub visible: Vec<Task>,
    /// Count of incomplete tasks, regardless of filter.
    pub incomplete_count: usize,
    /// Whether at least one completed task exists, regardless of filter.
    pub any_completed: bool,
    /// The filter this snapshot was derived under.
    pub filter: Filter,
    /// Total task count, regardless of filter.
    pub total: usize,
}

/// Derives the full view snapshot for `(tasks, filter)`.
pub fn snapshot(tasks: &[Task], filter: Filter) -> TaskListSnapshot {
    TaskListSnapshot {
        visible: filtered(tasks, filter).into_iter().cloned().collect(),
        incomplete_count: incomplete_count(tasks),
        any_completed: any_completed(tasks),
        filter,
        total: tasks.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::{any_completed, filtered, incomplete_count, snapshot};
    use crate::model::task::{Filter, Task};
    use uuid::Uuid;

    fn sample_tasks() -> Vec<Task> {
        let mut tasks = Vec::new();
        for (n, completed) in [(1_u128, false), (2, true), (3, false), (4, true)] {
            let mut task =
                Task::new(Uuid::from_u128(n), &format!("task {n}"), n as i64).unwrap();
            task.completed = completed;
            tasks.push(task);
        }
        tasks
    }

    #[test]
    fn filters_select_expected_subsets_in_order() {
        let tasks = sample_tasks();

        let all = filtered(&tasks, Filter::All);
        assert_eq!(all.len(), 4);

        let active: Vec<&str> = filtered(&tasks, Filter::Active)
            .iter()
            .map(|task| task.text.as_str())
            .collect();
        assert_eq!(active, ["task 1", "task 3"]);

        let completed: Vec<&str> = filtered(&tasks, Filter::Completed)
            .iter()
            .map(|task| task.text.as_str())
            .collect();
        assert_eq!(completed, ["task 2", "task 4"]);
    }

    #[test]
    fn incomplete_count_matches_active_filter_length() {
        let tasks = sample_tasks();
        assert_eq!(incomplete_count(&tasks), filtered(&tasks, Filter::Active).len());
        assert_eq!(incomplete_count(&[]), 0);
    }

    #[test]
    fn any_completed_reflects_presence_of_completed_tasks() {
        assert!(any_completed(&sample_tasks()));
        assert!(!any_completed(&[]));

        let only_active: Vec<Task> = sample_tasks()
            .into_iter()
            .filter(|task| task.is_active())
            .collect();
        assert!(!any_completed(&only_active));
    }

    #[test]
    fn snapshot_bundles_derived_state() {
        let tasks = sample_tasks();
        let snap = snapshot(&tasks, Filter::Completed);

        assert_eq!(snap.visible.len(), 2);
        assert_eq!(snap.incomplete_count, 2);
        assert!(snap.any_completed);
        assert_eq!(snap.filter, Filter::Completed);
        assert_eq!(snap.total, 4);
    }
}
