//! Single-row user profile: settings plus usage counters.

use super::now_epoch_ms;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Ru,
    Uz,
}

impl Language {
    /// Maps an IETF language code (`ru`, `uz-Latn`, `en-US`) to a supported language.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            "uz" => Some(Self::Uz),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Uzs,
    Usd,
    Eur,
    Rub,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Uzs => "so'm",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Rub => "₽",
        }
    }

    /// Number of minor units per major unit.
    pub fn minor_units(self) -> i64 {
        match self {
            Self::Uzs => 1,
            Self::Usd | Self::Eur | Self::Rub => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

/// Feature areas the user can hide from navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Tasks,
    Finance,
    Habits,
    Notes,
    Contacts,
    Calendar,
    Lists,
}

impl Module {
    pub const ALL: [Module; 7] = [
        Module::Tasks,
        Module::Finance,
        Module::Habits,
        Module::Notes,
        Module::Contacts,
        Module::Calendar,
        Module::Lists,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub language: Language,
    pub currency: Currency,
    pub theme: Theme,
    /// Kept sorted and unique.
    pub enabled_modules: Vec<Module>,
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            currency: Currency::Uzs,
            theme: Theme::System,
            enabled_modules: Module::ALL.to_vec(),
            notifications_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub language: Option<Language>,
    pub currency: Option<Currency>,
    pub theme: Option<Theme>,
    pub notifications_enabled: Option<bool>,
}

impl Settings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(enabled) = patch.notifications_enabled {
            self.notifications_enabled = enabled;
        }
    }

    pub fn is_enabled(&self, module: Module) -> bool {
        self.enabled_modules.contains(&module)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub tasks_completed: u64,
    pub transactions_recorded: u64,
    pub habits_checked: u64,
}

/// One counted user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatEvent {
    TaskCompleted,
    TransactionRecorded,
    HabitChecked,
}

impl Stats {
    pub fn record(&mut self, event: StatEvent) {
        let counter = match event {
            StatEvent::TaskCompleted => &mut self.tasks_completed,
            StatEvent::TransactionRecorded => &mut self.transactions_recorded,
            StatEvent::HabitChecked => &mut self.habits_checked,
        };
        *counter = counter.saturating_add(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub settings: Settings,
    pub stats: Stats,
    pub created_at: i64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            display_name: None,
            settings: Settings::default(),
            stats: Stats::default(),
            created_at: now_epoch_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Language, StatEvent, Stats};

    #[test]
    fn language_from_code_uses_primary_subtag() {
        assert_eq!(Language::from_code("uz-Latn"), Some(Language::Uz));
        assert_eq!(Language::from_code("RU"), Some(Language::Ru));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn stats_count_each_event_kind() {
        let mut stats = Stats::default();
        stats.record(StatEvent::TaskCompleted);
        stats.record(StatEvent::TaskCompleted);
        stats.record(StatEvent::HabitChecked);
        assert_eq!(stats.tasks_completed, 2);
        assert_eq!(stats.habits_checked, 1);
        assert_eq!(stats.transactions_recorded, 0);
    }
}
