//! Note list projection and markdown previews.
//!
//! # Invariants
//! - Pinned notes come first; within each group newest `updated_at` first.
//! - Previews never exceed `PREVIEW_MAX_CHARS` characters.

use crate::model::note::Note;
use once_cell::sync::Lazy;
use regex::Regex;

pub const PREVIEW_MAX_CHARS: usize = 100;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\([^)]*\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\*_`#>~]+|^\s*[-+]\s").expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-insensitive match on title, content or tags.
    pub search: Option<String>,
    /// Exact tag match after normalization.
    pub tag: Option<String>,
    pub pinned_only: bool,
}

pub fn visible_notes<'a>(
    notes: impl IntoIterator<Item = &'a Note>,
    filter: &NoteFilter,
) -> Vec<&'a Note> {
    let needle = filter
        .search
        .as_deref()
        .map(|text| text.trim().to_lowercase())
        .filter(|text| !text.is_empty());
    let tag = filter
        .tag
        .as_deref()
        .map(|tag| tag.trim().trim_start_matches('#').to_lowercase())
        .filter(|tag| !tag.is_empty());

    let mut selected = notes
        .into_iter()
        .filter(|note| !filter.pinned_only || note.is_pinned)
        .filter(|note| tag.as_ref().map_or(true, |tag| note.tags.contains(tag)))
        .filter(|note| match needle.as_deref() {
            None => true,
            Some(needle) => note_matches(note, needle),
        })
        .collect::<Vec<_>>();
    selected.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then(b.updated_at.cmp(&a.updated_at))
            .then(a.id.cmp(&b.id))
    });
    selected
}

fn note_matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
        || note.tags.iter().any(|tag| tag.contains(needle))
}

/// Plain-text summary of markdown content; `None` when nothing remains.
pub fn note_preview(content: &str) -> Option<String> {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let stripped = without_links
        .lines()
        .map(|line| MARKDOWN_SYMBOL_RE.replace_all(line, " ").into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let normalized = WHITESPACE_RE.replace_all(&stripped, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{note_preview, visible_notes, NoteFilter, PREVIEW_MAX_CHARS};
    use crate::model::note::{NewNote, Note};

    fn note(title: &str, tags: &[&str], updated_at: i64, pinned: bool) -> Note {
        let mut note = Note::from_new(NewNote {
            title: title.to_string(),
            content: format!("body of {title}"),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            color: None,
        });
        note.updated_at = updated_at;
        note.is_pinned = pinned;
        note
    }

    #[test]
    fn pinned_first_then_newest() {
        let notes = vec![
            note("old", &[], 1, false),
            note("new", &[], 3, false),
            note("pinned", &[], 2, true),
        ];
        let titles = visible_notes(&notes, &NoteFilter::default())
            .into_iter()
            .map(|note| note.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["pinned", "new", "old"]);
    }

    #[test]
    fn tag_and_search_filters_combine() {
        let notes = vec![
            note("Recipes", &["Food"], 1, false),
            note("Groceries", &["food"], 2, false),
            note("Standup", &["work"], 3, false),
        ];
        let filter = NoteFilter {
            search: Some("RECI".to_string()),
            tag: Some("#food".to_string()),
            pinned_only: false,
        };
        let found = visible_notes(&notes, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Recipes");
    }

    #[test]
    fn preview_strips_markdown_and_caps_length() {
        let preview = note_preview("# Plan\n\n- [docs](https://x.io) ![pic](a.png) **bold**")
            .expect("preview text");
        assert_eq!(preview, "Plan docs bold");
        assert_eq!(note_preview("![only](a.png)"), None);
        let long = "word ".repeat(50);
        assert_eq!(
            note_preview(&long).expect("preview").chars().count(),
            PREVIEW_MAX_CHARS
        );
    }
}
