//! Ephemeral UI state: active modal, toast queue, selected calendar date.
//!
//! Never persisted; a fresh `UiStore` is created per session.

use chrono::NaiveDate;

/// Maximum toasts kept at once; the oldest is dropped first.
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    AddTask,
    EditTask,
    AddTransaction,
    AddGoal,
    AddHabit,
    AddNote,
    AddContact,
    AddEvent,
    AddList,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct UiStore {
    active_modal: Option<ModalKind>,
    toasts: Vec<Toast>,
    next_toast_id: u64,
    selected_date: NaiveDate,
}

impl UiStore {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_modal: None,
            toasts: Vec::new(),
            next_toast_id: 1,
            selected_date: today,
        }
    }

    /// Opens `kind`, replacing any modal already shown.
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.active_modal = Some(kind);
    }

    pub fn close_modal(&mut self) -> Option<ModalKind> {
        self.active_modal.take()
    }

    pub fn active_modal(&self) -> Option<ModalKind> {
        self.active_modal
    }

    pub fn push_toast(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    /// Returns `false` when the toast was already gone.
    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }
}

#[cfg(test)]
mod tests {
    use super::{ModalKind, ToastLevel, UiStore};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn modal_replaces_and_closes() {
        let mut ui = UiStore::new(today());
        ui.open_modal(ModalKind::AddTask);
        ui.open_modal(ModalKind::Settings);
        assert_eq!(ui.close_modal(), Some(ModalKind::Settings));
        assert_eq!(ui.active_modal(), None);
    }

    #[test]
    fn toast_queue_is_bounded_and_dismissable() {
        let mut ui = UiStore::new(today());
        let first = ui.push_toast(ToastLevel::Info, "one");
        for message in ["two", "three", "four"] {
            ui.push_toast(ToastLevel::Success, message);
        }
        assert_eq!(ui.toasts().len(), 3);
        assert!(!ui.dismiss_toast(first));
        let last = ui.toasts()[2].id;
        assert!(ui.dismiss_toast(last));
        assert_eq!(ui.toasts().len(), 2);
    }

    #[test]
    fn selected_date_starts_at_today() {
        let mut ui = UiStore::new(today());
        assert_eq!(ui.selected_date(), today());
        let other = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        ui.select_date(other);
        assert_eq!(ui.selected_date(), other);
    }
}
