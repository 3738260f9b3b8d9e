//! Shopping lists and their items.
//!
//! Items reference their list by id only; removing a list leaves its
//! items in place.

use super::{new_id, now_epoch_ms, require_text, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: EntityId,
    pub name: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: EntityId,
    pub list_id: EntityId,
    pub name: String,
    pub quantity: Option<String>,
    pub checked: bool,
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: Option<String>,
}

impl ShoppingList {
    pub fn named(name: &str) -> Self {
        Self {
            id: new_id(),
            name: name.trim().to_string(),
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

impl ShoppingItem {
    pub fn from_new(list_id: EntityId, input: NewItem) -> Self {
        Self {
            id: new_id(),
            list_id,
            name: input.name.trim().to_string(),
            quantity: input.quantity,
            checked: false,
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}
