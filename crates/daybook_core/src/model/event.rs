//! Calendar event records.
//!
//! # Invariants
//! - `end_time` is not earlier than `start_time` when both are set.

use super::{new_id, parse_clock_time, require_text, EntityId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EntityId,
    pub title: String,
    pub date: NaiveDate,
    /// `HH:MM`; `None` marks an all-day event.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl NewEvent {
    pub fn all_day(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            start_time: None,
            end_time: None,
            color: None,
            description: None,
        }
    }

    pub fn at(mut self, start: &str, end: Option<&str>) -> Self {
        self.start_time = Some(start.to_string());
        self.end_time = end.map(str::to_string);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<Option<String>>,
    pub end_time: Option<Option<String>>,
    pub color: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

impl CalendarEvent {
    pub fn from_new(input: NewEvent) -> Self {
        Self {
            id: new_id(),
            title: input.title.trim().to_string(),
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            color: input.color,
            description: input.description,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        let start = self
            .start_time
            .as_deref()
            .map(|value| parse_clock_time("start_time", value))
            .transpose()?;
        let end = self
            .end_time
            .as_deref()
            .map(|value| parse_clock_time("end_time", value))
            .transpose()?;
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(ValidationError::EndBeforeStart);
            }
        }
        Ok(())
    }

    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    /// Start as minutes after midnight; all-day events have none.
    pub fn start_minutes(&self) -> Option<u16> {
        self.start_time
            .as_deref()
            .and_then(|value| parse_clock_time("start_time", value).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarEvent, NewEvent};
    use crate::model::ValidationError;
    use chrono::NaiveDate;

    #[test]
    fn end_before_start_is_rejected() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
        let event =
            CalendarEvent::from_new(NewEvent::all_day("standup", date).at("10:00", Some("09:30")));
        assert_eq!(event.validate(), Err(ValidationError::EndBeforeStart));
    }
}
