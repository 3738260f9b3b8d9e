//! App session: every store opened over one storage plus the host bridge.
//!
//! # Responsibility
//! - Open all feature stores against the same backend at startup.
//! - Run the cross-store flows the UI triggers (stats, haptics, confirms).
//!
//! # Invariants
//! - Stores are independent; a flow touching two stores is not atomic.
//! - Haptics fire only after the underlying mutation succeeded.

use crate::model::finance::{NewTransaction, Transaction};
use crate::model::habit::HabitLog;
use crate::model::profile::StatEvent;
use crate::model::task::Task;
use crate::model::EntityId;
use crate::persist::StateStorage;
use crate::platform::{ColorScheme, Haptic, HostBridge, ImpactStyle, NotificationKind};
use crate::store::contact_store::ContactStore;
use crate::store::event_store::EventStore;
use crate::store::finance_store::FinanceStore;
use crate::store::habit_store::HabitStore;
use crate::store::list_store::ListStore;
use crate::store::note_store::NoteStore;
use crate::store::task_store::TaskStore;
use crate::store::ui_store::{ToastLevel, UiStore};
use crate::store::user_store::UserStore;
use crate::store::StoreResult;
use chrono::NaiveDate;
use log::info;

pub struct Session<B: StateStorage + Clone> {
    pub tasks: TaskStore<B>,
    pub finance: FinanceStore<B>,
    pub habits: HabitStore<B>,
    pub notes: NoteStore<B>,
    pub contacts: ContactStore<B>,
    pub events: EventStore<B>,
    pub lists: ListStore<B>,
    pub user: UserStore<B>,
    pub ui: UiStore,
    bridge: Box<dyn HostBridge>,
}

impl<B: StateStorage + Clone> Session<B> {
    /// Opens every store and performs the host handshake.
    pub fn start(storage: B, bridge: Box<dyn HostBridge>, today: NaiveDate) -> Self {
        let mut session = Self {
            tasks: TaskStore::open(storage.clone()),
            finance: FinanceStore::open(storage.clone()),
            habits: HabitStore::open(storage.clone()),
            notes: NoteStore::open(storage.clone()),
            contacts: ContactStore::open(storage.clone()),
            events: EventStore::open(storage.clone()),
            lists: ListStore::open(storage.clone()),
            user: UserStore::open(storage),
            ui: UiStore::new(today),
            bridge,
        };

        session.bridge.ready();
        session.bridge.expand();
        if let Some(host_user) = session.bridge.user() {
            session.user.seed_from_host(&host_user);
        }
        info!(
            "event=session_start module=session status=ok attached={}",
            session.bridge.is_attached()
        );
        session
    }

    pub fn bridge(&self) -> &dyn HostBridge {
        self.bridge.as_ref()
    }

    /// Effective color scheme for the stored theme preference.
    pub fn color_scheme(&self) -> ColorScheme {
        crate::platform::resolve_theme(self.user.profile().settings.theme, self.bridge())
    }

    /// Toggles a task; completing it bumps the counter and buzzes.
    pub fn toggle_task(&mut self, id: EntityId) -> StoreResult<Task> {
        let task = self.tasks.toggle_task(id)?;
        if task.is_completed() {
            self.user.record(StatEvent::TaskCompleted);
            self.bridge
                .haptic(Haptic::Notification(NotificationKind::Success));
        } else {
            self.bridge.haptic(Haptic::Selection);
        }
        Ok(task)
    }

    pub fn record_transaction(&mut self, input: NewTransaction) -> StoreResult<Transaction> {
        match self.finance.add_transaction(input) {
            Ok(transaction) => {
                self.user.record(StatEvent::TransactionRecorded);
                self.bridge.haptic(Haptic::Impact(ImpactStyle::Light));
                self.ui.push_toast(ToastLevel::Success, "Transaction saved");
                Ok(transaction)
            }
            Err(err) => {
                self.bridge
                    .haptic(Haptic::Notification(NotificationKind::Error));
                Err(err)
            }
        }
    }

    pub fn toggle_habit(&mut self, id: EntityId, date: NaiveDate) -> StoreResult<HabitLog> {
        let log = self.habits.toggle_habit(id, date)?;
        if log.completed {
            self.user.record(StatEvent::HabitChecked);
            self.bridge.haptic(Haptic::Impact(ImpactStyle::Medium));
        }
        Ok(log)
    }

    /// Deletes a task after the user confirms; `Ok(None)` when declined.
    pub fn delete_task_confirmed(&mut self, id: EntityId) -> StoreResult<Option<Task>> {
        if !self.bridge.confirm("Delete this task?") {
            return Ok(None);
        }
        let task = self.tasks.delete_task(id)?;
        self.bridge.haptic(Haptic::Impact(ImpactStyle::Heavy));
        Ok(Some(task))
    }
}
