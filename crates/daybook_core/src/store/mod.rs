//! Persisted feature stores.
//!
//! # Responsibility
//! - Hold each feature's collection in memory and expose its mutations.
//! - Write the full state envelope to storage after every mutation.
//!
//! # Invariants
//! - Invalid input is rejected before state is touched.
//! - Persistence never fails a mutation; write errors are logged only.
//! - A missing or malformed stored record loads as the default state.

use crate::model::{EntityId, ValidationError};
use crate::persist::{decode_state, encode_state, namespace_key, StateStorage};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_store;
pub mod event_store;
pub mod finance_store;
pub mod habit_store;
pub mod list_store;
pub mod note_store;
pub mod task_store;
pub mod ui_store;
pub mod user_store;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(ValidationError),
    NotFound(EntityId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Serializable state of one store, saved under its own namespace.
pub trait StoreState: Serialize + DeserializeOwned + Default {
    /// Short store name; the storage key is `daybook-<NAME>`.
    const NAME: &'static str;
}

/// In-memory state plus the backend it is mirrored to.
pub struct PersistedStore<S: StoreState, B: StateStorage> {
    state: S,
    storage: B,
    namespace: String,
}

impl<S: StoreState, B: StateStorage> PersistedStore<S, B> {
    /// Loads state from `storage`, falling back to `S::default()`.
    pub fn open(storage: B) -> Self {
        let namespace = namespace_key(S::NAME);
        let state = load_or_default::<S>(&storage, &namespace);
        Self {
            state,
            storage,
            namespace,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Runs `apply` on the state, then persists it when `apply` succeeds.
    pub fn mutate<T>(&mut self, apply: impl FnOnce(&mut S) -> StoreResult<T>) -> StoreResult<T> {
        let value = apply(&mut self.state)?;
        self.persist();
        Ok(value)
    }

    /// Infallible variant of [`PersistedStore::mutate`].
    pub fn update<T>(&mut self, apply: impl FnOnce(&mut S) -> T) -> T {
        let value = apply(&mut self.state);
        self.persist();
        value
    }

    /// Replaces the state with its default and persists the result.
    pub fn reset(&mut self) {
        self.state = S::default();
        self.persist();
    }

    fn persist(&self) {
        let outcome = encode_state(&self.state)
            .and_then(|payload| self.storage.save(&self.namespace, &payload));
        if let Err(err) = outcome {
            error!(
                "event=store_persist module=store status=error store={} error={}",
                S::NAME,
                err
            );
        }
    }
}

fn load_or_default<S: StoreState>(storage: &impl StateStorage, namespace: &str) -> S {
    let payload = match storage.load(namespace) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            info!(
                "event=store_load module=store status=empty store={}",
                S::NAME
            );
            return S::default();
        }
        Err(err) => {
            warn!(
                "event=store_load module=store status=fallback reason=storage store={} error={}",
                S::NAME,
                err
            );
            return S::default();
        }
    };

    match decode_state::<S>(&payload) {
        Ok(state) => {
            info!("event=store_load module=store status=ok store={}", S::NAME);
            state
        }
        Err(err) => {
            warn!(
                "event=store_load module=store status=fallback reason=malformed store={} error={}",
                S::NAME,
                err
            );
            S::default()
        }
    }
}

/// Looks up a record or reports `StoreError::NotFound`.
pub(crate) fn find_mut<T>(
    records: &mut std::collections::BTreeMap<EntityId, T>,
    id: EntityId,
) -> StoreResult<&mut T> {
    records.get_mut(&id).ok_or(StoreError::NotFound(id))
}
