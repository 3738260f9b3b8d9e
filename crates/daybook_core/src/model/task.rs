//! Task and subtask records.
//!
//! # Invariants
//! - `completed_at` is set iff `status == TaskStatus::Completed`.
//! - `due_time` is only meaningful together with `due_date`.

use super::{new_id, now_epoch_ms, parse_clock_time, require_text, EntityId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Personal,
    Work,
    Shopping,
    Health,
    Study,
    Other,
}

/// Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: EntityId,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    /// `HH:MM`, local to the device.
    pub due_time: Option<String>,
    pub subtasks: Vec<Subtask>,
    pub status: TaskStatus,
    pub created_at: i64,
    pub completed_at: Option<i64>,
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<String>,
}

impl NewTask {
    /// A pending personal task of medium priority with no due date.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: TaskCategory::Personal,
            priority: TaskPriority::Medium,
            due_date: None,
            due_time: None,
        }
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }
}

/// Partial update; `None` leaves a field untouched.
///
/// Optional fields use `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<TaskCategory>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub due_time: Option<Option<String>>,
}

impl Task {
    pub fn from_new(input: NewTask) -> Self {
        Self {
            id: new_id(),
            title: input.title.trim().to_string(),
            description: input.description,
            category: input.category,
            priority: input.priority,
            due_date: input.due_date,
            due_time: input.due_time,
            subtasks: Vec::new(),
            status: TaskStatus::Pending,
            created_at: now_epoch_ms(),
            completed_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        if let Some(time) = self.due_time.as_deref() {
            parse_clock_time("due_time", time)?;
        }
        for subtask in &self.subtasks {
            require_text("subtask.title", &subtask.title)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(due_time) = patch.due_time {
            self.due_time = due_time;
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Flips pending/completed and keeps `completed_at` in step.
    pub fn toggle(&mut self) {
        if self.is_completed() {
            self.status = TaskStatus::Pending;
            self.completed_at = None;
        } else {
            self.status = TaskStatus::Completed;
            self.completed_at = Some(now_epoch_ms());
        }
    }
}

impl Subtask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into().trim().to_string(),
            completed: false,
        }
    }
}
