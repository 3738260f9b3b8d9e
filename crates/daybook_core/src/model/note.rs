//! Note records.
//!
//! # Invariants
//! - `tags` are lowercase, deduplicated and sorted.
//! - `updated_at` moves forward on every content, pin or tag change.

use super::{new_id, now_epoch_ms, EntityId, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub tags: Vec<String>,
    pub color: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<Option<String>>,
}

impl Note {
    pub fn from_new(input: NewNote) -> Self {
        let now = now_epoch_ms();
        Self {
            id: new_id(),
            title: input.title.trim().to_string(),
            content: input.content,
            is_pinned: false,
            tags: normalize_tags(&input.tags),
            color: input.color,
            created_at: now,
            updated_at: now,
        }
    }

    /// A note needs a title or a body; both blank is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() && self.content.trim().is_empty() {
            return Err(ValidationError::EmptyField("content"));
        }
        Ok(())
    }

    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }

    /// Bumps `updated_at`, never moving it backwards.
    pub fn touch(&mut self) {
        self.updated_at = now_epoch_ms().max(self.updated_at + 1);
    }
}

/// Trims, lowercases and deduplicates tags; blank entries are dropped.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.trim().trim_start_matches('#').to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_tags;

    #[test]
    fn tags_are_lowercased_deduplicated_and_sorted() {
        let tags = vec![
            "Work".to_string(),
            " #ideas ".to_string(),
            "work".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(normalize_tags(&tags), vec!["ideas", "work"]);
    }
}
