//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch any schema drift between
//! the two. The extended fields (`priority`, `category`, `due_date`) carry
//! serde defaults so responses from earlier backend iterations that omit
//! them still deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Task priority as stored by the backend. Serialized as the capitalized
/// strings the server's choice field uses.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A single todo item returned by the API.
///
/// `id` is assigned by the server and never mutated client-side; the client
/// only ever replaces a whole item with the server's response to a write.
/// `subtasks` is carried opaquely: the backend stores and round-trips a
/// list of free-form objects, but no page iteration ever submits or
/// renders them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub subtasks: Vec<serde_json::Value>,
}

/// Transient form state: the same fields as [`TodoItem`] minus `id` and
/// `completed`. Never persisted — a draft only leaves the client as a
/// [`CreateTask`] payload after validation, and resets to defaults once the
/// server confirms the create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DraftTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl DraftTask {
    /// Required-field check, run locally before any request is built.
    /// Whitespace-only input counts as empty.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        Ok(())
    }

    /// Clear the draft back to empty defaults after a successful submit.
    pub fn reset(&mut self) {
        *self = DraftTask::default();
    }
}

/// Request payload for creating a new todo. Optional fields are omitted
/// from the JSON entirely so the server applies its own defaults
/// (`category = "General"`, `priority = Medium`).
#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl From<&DraftTask> for CreateTask {
    fn from(draft: &DraftTask) -> Self {
        CreateTask {
            title: draft.title.clone(),
            description: draft.description.clone(),
            priority: draft.priority,
            category: draft.category.clone(),
            due_date: draft.due_date,
        }
    }
}

/// Request payload for marking an item completed. The only update the UI
/// exposes is the false→true completion flip, so the body is fixed.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteTask {
    pub completed: bool,
}
