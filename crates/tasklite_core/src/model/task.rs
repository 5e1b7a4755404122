//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record and its display filter.
//! - Enforce record invariants at construction time.
//!
//! # Invariants
//! - `id` is stable, non-nil, and never reused for another task.
//! - `text` is trimmed and non-empty; there is no edit operation.
//! - `created_at` is epoch milliseconds and never changes after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Display-only selection over the task list.
///
/// Transient UI state: never serialized, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Full list, unchanged order.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks only.
    Completed,
}

impl Filter {
    /// Stable lowercase label used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses a label produced by `as_str`. Case-insensitive, trims input.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Validation error for task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty or whitespace-only after trimming.
    BlankText,
    /// Id is the nil uuid.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "task text must not be blank"),
            Self::NilId => write!(f, "task id must not be nil"),
        }
    }
}

impl Error for TaskValidationError {}

/// Trims task text and rejects blank input.
///
/// Creation and hydration both go through this rule, so a payload entry
/// whose text trims to empty is dropped by the same predicate that makes
/// `create("   ")` a no-op.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id assigned at creation.
    pub id: TaskId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// Completion flag, flipped by toggle.
    pub completed: bool,
    /// Creation time in epoch milliseconds. Serialized as `createdAt` to
    /// match the persisted wire contract.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Builds a validated, not-yet-completed task.
    ///
    /// Text is trimmed before the blank check; blank input and nil ids are
    /// rejected.
    pub fn new(
        id: TaskId,
        text: &str,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let text = normalize_text(text).ok_or(TaskValidationError::BlankText)?;
        Ok(Self {
            id,
            text,
            completed: false,
            created_at,
        })
    }

    /// Flips completion state. Touches no other field.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns whether this task still needs doing.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Re-checks record invariants on an already-built value.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::BlankText);
        }
        Ok(())
    }
}
