//! User profile store: one settings row plus counters.
//!
//! Unlike the collection stores, a malformed profile is the case the UI
//! cares most about: the fallback is a fresh default profile.

use super::{PersistedStore, StoreResult, StoreState};
use crate::model::profile::{Language, Module, Settings, SettingsPatch, StatEvent, UserProfile};
use crate::model::require_text;
use crate::persist::StateStorage;
use crate::platform::HostUser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub profile: UserProfile,
}

impl StoreState for UserState {
    const NAME: &'static str = "user";
}

pub struct UserStore<B: StateStorage> {
    inner: PersistedStore<UserState, B>,
}

impl<B: StateStorage> UserStore<B> {
    pub fn open(storage: B) -> Self {
        Self {
            inner: PersistedStore::open(storage),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.inner.state().profile
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> UserProfile {
        self.apply(|profile| profile.settings.apply(patch))
    }

    /// Enables a disabled module or disables an enabled one.
    pub fn toggle_module(&mut self, module: Module) -> UserProfile {
        self.apply(|profile| {
            let modules = &mut profile.settings.enabled_modules;
            if modules.contains(&module) {
                modules.retain(|current| *current != module);
            } else {
                modules.push(module);
                modules.sort();
            }
        })
    }

    pub fn set_display_name(&mut self, name: &str) -> StoreResult<UserProfile> {
        require_text("display_name", name)?;
        Ok(self.apply(|profile| profile.display_name = Some(name.trim().to_string())))
    }

    pub fn record(&mut self, event: StatEvent) -> UserProfile {
        self.apply(|profile| profile.stats.record(event))
    }

    /// Fills blanks in the profile from the host user; explicit choices win.
    ///
    /// Returns `true` when anything changed.
    pub fn seed_from_host(&mut self, user: &HostUser) -> bool {
        let profile = self.profile();
        let name = user.display_name();
        let wants_name = profile.display_name.is_none() && name.is_some();
        let language = user.language_code.as_deref().and_then(Language::from_code);
        let wants_language = language.is_some_and(|lang| lang != profile.settings.language)
            && profile.settings == Settings::default();
        if !wants_name && !wants_language {
            return false;
        }
        self.apply(|profile| {
            if wants_name {
                profile.display_name = name;
            }
            if let (true, Some(language)) = (wants_language, language) {
                profile.settings.language = language;
            }
        });
        true
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    fn apply(&mut self, change: impl FnOnce(&mut UserProfile)) -> UserProfile {
        self.inner.update(|state| {
            change(&mut state.profile);
            state.profile.clone()
        })
    }
}
