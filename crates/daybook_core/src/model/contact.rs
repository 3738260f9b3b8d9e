//! Contact records.

use super::{new_id, now_epoch_ms, require_text, EntityId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactGroup {
    Family,
    Friends,
    Work,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub group: ContactGroup,
    pub is_favorite: bool,
    pub notes: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub group: ContactGroup,
    pub notes: Option<String>,
}

impl NewContact {
    pub fn named(name: impl Into<String>, group: ContactGroup) -> Self {
        Self {
            name: name.into(),
            phone: None,
            email: None,
            birthday: None,
            group,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub birthday: Option<Option<NaiveDate>>,
    pub group: Option<ContactGroup>,
    pub notes: Option<Option<String>>,
}

impl Contact {
    pub fn from_new(input: NewContact) -> Self {
        Self {
            id: new_id(),
            name: input.name.trim().to_string(),
            phone: input.phone,
            email: input.email,
            birthday: input.birthday,
            group: input.group,
            is_favorite: false,
            notes: input.notes,
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }

    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(group) = patch.group {
            self.group = group;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
