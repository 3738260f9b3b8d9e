//! Core state and view logic for the Daybook mini app.
//! Owns every persisted store and the derived views the UI renders.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod platform;
pub mod session;
pub mod store;
pub mod views;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, init_logging_from, logging_status};
pub use model::{EntityId, ValidationError};
pub use persist::{MemoryStateStorage, PersistError, SqliteStateStorage, StateStorage};
pub use platform::{DetachedBridge, HostBridge};
pub use session::Session;
pub use store::contact_store::ContactStore;
pub use store::event_store::EventStore;
pub use store::finance_store::FinanceStore;
pub use store::habit_store::HabitStore;
pub use store::list_store::ListStore;
pub use store::note_store::NoteStore;
pub use store::task_store::TaskStore;
pub use store::ui_store::UiStore;
pub use store::user_store::UserStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
