//! Note store.

use super::{find_mut, PersistedStore, StoreError, StoreResult, StoreState};
use crate::model::note::{normalize_tags, NewNote, Note, NotePatch};
use crate::model::EntityId;
use crate::persist::StateStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteState {
    pub notes: BTreeMap<EntityId, Note>,
}

impl StoreState for NoteState {
    const NAME: &'static str = "notes";
}

pub struct NoteStore<B: StateStorage> {
    inner: PersistedStore<NoteState, B>,
}

impl<B: StateStorage> NoteStore<B> {
    pub fn open(storage: B) -> Self {
        Self {
            inner: PersistedStore::open(storage),
        }
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.inner.state().notes.values()
    }

    pub fn get(&self, id: EntityId) -> Option<&Note> {
        self.inner.state().notes.get(&id)
    }

    pub fn add_note(&mut self, input: NewNote) -> StoreResult<Note> {
        let note = Note::from_new(input);
        note.validate()?;
        self.inner.mutate(|state| {
            state.notes.insert(note.id, note.clone());
            Ok(note)
        })
    }

    pub fn update_note(&mut self, id: EntityId, patch: NotePatch) -> StoreResult<Note> {
        self.inner.mutate(|state| {
            let note = find_mut(&mut state.notes, id)?;
            let mut updated = note.clone();
            updated.apply(patch);
            updated.validate()?;
            updated.touch();
            *note = updated.clone();
            Ok(updated)
        })
    }

    pub fn toggle_pin(&mut self, id: EntityId) -> StoreResult<Note> {
        self.inner.mutate(|state| {
            let note = find_mut(&mut state.notes, id)?;
            note.is_pinned = !note.is_pinned;
            note.touch();
            Ok(note.clone())
        })
    }

    /// Replaces the full tag set after normalization.
    pub fn set_tags(&mut self, id: EntityId, tags: &[String]) -> StoreResult<Note> {
        let tags = normalize_tags(tags);
        self.inner.mutate(|state| {
            let note = find_mut(&mut state.notes, id)?;
            note.tags = tags;
            note.touch();
            Ok(note.clone())
        })
    }

    pub fn delete_note(&mut self, id: EntityId) -> StoreResult<Note> {
        self.inner
            .mutate(|state| state.notes.remove(&id).ok_or(StoreError::NotFound(id)))
    }

    /// All tags in use, sorted and unique.
    pub fn all_tags(&self) -> Vec<String> {
        let tags = self
            .notes()
            .flat_map(|note| note.tags.iter().cloned())
            .collect::<Vec<_>>();
        normalize_tags(&tags)
    }
}
