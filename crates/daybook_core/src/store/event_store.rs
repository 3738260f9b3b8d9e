//! Calendar event store.

use super::{find_mut, PersistedStore, StoreError, StoreResult, StoreState};
use crate::model::event::{CalendarEvent, EventPatch, NewEvent};
use crate::model::EntityId;
use crate::persist::StateStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventState {
    pub events: BTreeMap<EntityId, CalendarEvent>,
}

impl StoreState for EventState {
    const NAME: &'static str = "events";
}

pub struct EventStore<B: StateStorage> {
    inner: PersistedStore<EventState, B>,
}

impl<B: StateStorage> EventStore<B> {
    pub fn open(storage: B) -> Self {
        Self {
            inner: PersistedStore::open(storage),
        }
    }

    pub fn events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.inner.state().events.values()
    }

    pub fn add_event(&mut self, input: NewEvent) -> StoreResult<CalendarEvent> {
        let event = CalendarEvent::from_new(input);
        event.validate()?;
        self.inner.mutate(|state| {
            state.events.insert(event.id, event.clone());
            Ok(event)
        })
    }

    pub fn update_event(&mut self, id: EntityId, patch: EventPatch) -> StoreResult<CalendarEvent> {
        self.inner.mutate(|state| {
            let event = find_mut(&mut state.events, id)?;
            let mut updated = event.clone();
            updated.apply(patch);
            updated.validate()?;
            *event = updated.clone();
            Ok(updated)
        })
    }

    pub fn delete_event(&mut self, id: EntityId) -> StoreResult<CalendarEvent> {
        self.inner
            .mutate(|state| state.events.remove(&id).ok_or(StoreError::NotFound(id)))
    }
}
