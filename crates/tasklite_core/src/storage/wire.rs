//! Persisted wire format for the task list.
//!
//! # Responsibility
//! - Encode the full task list as one JSON array.
//! - Decode defensively: drop invalid entries, survive malformed payloads.
//!
//! # Invariants
//! - Wire field names are `id`, `text`, `completed`, `createdAt`.
//! - Decoding never fails; the worst payload yields an empty list.
//! - Decoded lists keep payload order and contain no duplicate ids.

use crate::model::task::{Task, TaskId};
use log::warn;
use serde::Deserialize;
use std::collections::HashSet;

/// Serializes the full task list for storage.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Parses a persisted payload back into tasks.
///
/// Entries that fail validation (bad record shape, malformed or nil id,
/// text that trims to empty, duplicate id) are dropped with a warn event;
/// a payload that is not a JSON array at all is treated as no prior state.
pub fn decode_tasks(raw: &str) -> Vec<Task> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(err) => {
            warn!("event=tasks_decode module=wire status=error error_code=malformed_payload error={err}");
            return Vec::new();
        }
    };

    let mut tasks: Vec<Task> = Vec::with_capacity(values.len());
    let mut seen_ids: HashSet<TaskId> = HashSet::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        match decode_entry(value) {
            Ok(task) => {
                if seen_ids.insert(task.id) {
                    tasks.push(task);
                } else {
                    warn!(
                        "event=tasks_decode module=wire status=dropped index={index} reason=duplicate id {}",
                        task.id
                    );
                }
            }
            Err(reason) => {
                warn!("event=tasks_decode module=wire status=dropped index={index} reason={reason}");
            }
        }
    }

    tasks
}

/// Raw record shape of one persisted entry, before validation.
#[derive(Debug, Deserialize)]
struct RawTask {
    id: String,
    text: String,
    completed: bool,
    #[serde(rename = "createdAt")]
    created_at: i64,
}

fn decode_entry(value: serde_json::Value) -> Result<Task, String> {
    let raw: RawTask =
        serde_json::from_value(value).map_err(|err| format!("invalid record shape: {err}"))?;

    let id = TaskId::parse_str(&raw.id).map_err(|_| format!("malformed id `{}`", raw.id))?;

    let mut task =
        Task::new(id, &raw.text, raw.created_at).map_err(|err| err.to_string())?;
    task.completed = raw.completed;
    Ok(task)
}
