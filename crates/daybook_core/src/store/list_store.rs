//! Shopping list store.
//!
//! Lists and items live in separate collections. Deleting a list leaves
//! its items behind; `items_for` of a removed list still returns them.

use super::{find_mut, PersistedStore, StoreError, StoreResult, StoreState};
use crate::model::shopping::{NewItem, ShoppingItem, ShoppingList};
use crate::model::{require_text, EntityId};
use crate::persist::StateStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub lists: BTreeMap<EntityId, ShoppingList>,
    pub items: BTreeMap<EntityId, ShoppingItem>,
}

impl StoreState for ListState {
    const NAME: &'static str = "lists";
}

pub struct ListStore<B: StateStorage> {
    inner: PersistedStore<ListState, B>,
}

impl<B: StateStorage> ListStore<B> {
    pub fn open(storage: B) -> Self {
        Self {
            inner: PersistedStore::open(storage),
        }
    }

    /// Lists in creation order.
    pub fn lists(&self) -> Vec<&ShoppingList> {
        let mut lists = self.inner.state().lists.values().collect::<Vec<_>>();
        lists.sort_by_key(|list| (list.created_at, list.id));
        lists
    }

    /// Items of one list in creation order.
    pub fn items_for(&self, list_id: EntityId) -> Vec<&ShoppingItem> {
        let mut items = self
            .inner
            .state()
            .items
            .values()
            .filter(|item| item.list_id == list_id)
            .collect::<Vec<_>>();
        items.sort_by_key(|item| (item.created_at, item.id));
        items
    }

    pub fn add_list(&mut self, name: &str) -> StoreResult<ShoppingList> {
        let list = ShoppingList::named(name);
        list.validate()?;
        self.inner.mutate(|state| {
            state.lists.insert(list.id, list.clone());
            Ok(list)
        })
    }

    pub fn rename_list(&mut self, id: EntityId, name: &str) -> StoreResult<ShoppingList> {
        require_text("name", name)?;
        self.inner.mutate(|state| {
            let list = find_mut(&mut state.lists, id)?;
            list.name = name.trim().to_string();
            Ok(list.clone())
        })
    }

    pub fn delete_list(&mut self, id: EntityId) -> StoreResult<ShoppingList> {
        self.inner
            .mutate(|state| state.lists.remove(&id).ok_or(StoreError::NotFound(id)))
    }

    pub fn add_item(&mut self, list_id: EntityId, input: NewItem) -> StoreResult<ShoppingItem> {
        let item = ShoppingItem::from_new(list_id, input);
        item.validate()?;
        self.inner.mutate(|state| {
            if !state.lists.contains_key(&list_id) {
                return Err(StoreError::NotFound(list_id));
            }
            state.items.insert(item.id, item.clone());
            Ok(item)
        })
    }

    pub fn toggle_item(&mut self, item_id: EntityId) -> StoreResult<ShoppingItem> {
        self.inner.mutate(|state| {
            let item = find_mut(&mut state.items, item_id)?;
            item.checked = !item.checked;
            Ok(item.clone())
        })
    }

    pub fn delete_item(&mut self, item_id: EntityId) -> StoreResult<ShoppingItem> {
        self.inner.mutate(|state| {
            state
                .items
                .remove(&item_id)
                .ok_or(StoreError::NotFound(item_id))
        })
    }

    /// Drops checked items of one list and returns how many were removed.
    pub fn clear_checked(&mut self, list_id: EntityId) -> usize {
        self.inner.update(|state| {
            let before = state.items.len();
            state
                .items
                .retain(|_, item| !(item.list_id == list_id && item.checked));
            before - state.items.len()
        })
    }
}
