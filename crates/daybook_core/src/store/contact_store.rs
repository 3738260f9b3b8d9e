//! Contact store.

use super::{find_mut, PersistedStore, StoreError, StoreResult, StoreState};
use crate::model::contact::{Contact, ContactPatch, NewContact};
use crate::model::EntityId;
use crate::persist::StateStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactState {
    pub contacts: BTreeMap<EntityId, Contact>,
}

impl StoreState for ContactState {
    const NAME: &'static str = "contacts";
}

pub struct ContactStore<B: StateStorage> {
    inner: PersistedStore<ContactState, B>,
}

impl<B: StateStorage> ContactStore<B> {
    pub fn open(storage: B) -> Self {
        Self {
            inner: PersistedStore::open(storage),
        }
    }

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.inner.state().contacts.values()
    }

    pub fn get(&self, id: EntityId) -> Option<&Contact> {
        self.inner.state().contacts.get(&id)
    }

    pub fn add_contact(&mut self, input: NewContact) -> StoreResult<Contact> {
        let contact = Contact::from_new(input);
        contact.validate()?;
        self.inner.mutate(|state| {
            state.contacts.insert(contact.id, contact.clone());
            Ok(contact)
        })
    }

    pub fn update_contact(&mut self, id: EntityId, patch: ContactPatch) -> StoreResult<Contact> {
        self.inner.mutate(|state| {
            let contact = find_mut(&mut state.contacts, id)?;
            let mut updated = contact.clone();
            updated.apply(patch);
            updated.validate()?;
            *contact = updated.clone();
            Ok(updated)
        })
    }

    pub fn toggle_favorite(&mut self, id: EntityId) -> StoreResult<Contact> {
        self.inner.mutate(|state| {
            let contact = find_mut(&mut state.contacts, id)?;
            contact.is_favorite = !contact.is_favorite;
            Ok(contact.clone())
        })
    }

    pub fn delete_contact(&mut self, id: EntityId) -> StoreResult<Contact> {
        self.inner
            .mutate(|state| state.contacts.remove(&id).ok_or(StoreError::NotFound(id)))
    }
}
