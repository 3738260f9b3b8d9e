//! Habits and their per-day completion logs.
//!
//! # Invariants
//! - At most one `HabitLog` exists per `(habit_id, date)`.

use super::{new_id, now_epoch_ms, require_text, EntityId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: EntityId,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitLog {
    pub habit_id: EntityId,
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl Habit {
    pub fn from_new(input: NewHabit) -> Self {
        Self {
            id: new_id(),
            name: input.name.trim().to_string(),
            icon: input.icon,
            color: input.color,
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}
