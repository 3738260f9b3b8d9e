//! Host bridge seam for the embedding messaging app.
//!
//! # Responsibility
//! - Describe the host capabilities core logic may use (haptics, dialogs,
//!   color scheme, viewport, identity).
//! - Provide `DetachedBridge`, the fallback when no host app is present.
//!
//! # Invariants
//! - Every capability is optional: the detached bridge never fails.
//! - Dialog text is not logged; only its length is.

use crate::config::CoreConfig;
use crate::model::profile::Theme;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
    Rigid,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Haptic {
    Impact(ImpactStyle),
    Notification(NotificationKind),
    Selection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// Viewport metrics in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub height: u32,
    pub stable_height: u32,
    pub is_expanded: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            height: 640,
            stable_height: 640,
            is_expanded: true,
        }
    }
}

/// Identity of the user the host app launched us for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

impl HostUser {
    /// `first last`, trimmed; `None` when both are blank.
    pub fn display_name(&self) -> Option<String> {
        let full = match self.last_name.as_deref() {
            Some(last) => format!("{} {}", self.first_name.trim(), last.trim()),
            None => self.first_name.clone(),
        };
        let full = full.trim();
        if full.is_empty() {
            None
        } else {
            Some(full.to_string())
        }
    }
}

/// Capabilities offered by the host app.
pub trait HostBridge {
    /// Tells the host the app finished its first render.
    fn ready(&self);
    /// Asks the host to expand to full height.
    fn expand(&self);
    fn haptic(&self, feedback: Haptic);
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn color_scheme(&self) -> ColorScheme;
    fn viewport(&self) -> Viewport;
    fn user(&self) -> Option<HostUser>;

    /// `false` for the detached fallback.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Fallback used outside the host app (plain browser, tests).
#[derive(Debug, Clone)]
pub struct DetachedBridge {
    confirm_default: bool,
    viewport: Viewport,
}

impl DetachedBridge {
    pub fn new(confirm_default: bool) -> Self {
        Self {
            confirm_default,
            viewport: Viewport::default(),
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.confirm_default)
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}

impl Default for DetachedBridge {
    fn default() -> Self {
        Self::new(false)
    }
}

impl HostBridge for DetachedBridge {
    fn ready(&self) {
        info!("event=bridge_ready module=platform status=detached");
    }

    fn expand(&self) {}

    fn haptic(&self, feedback: Haptic) {
        debug!("event=haptic module=platform status=skipped feedback={feedback:?}");
    }

    fn alert(&self, message: &str) {
        info!(
            "event=dialog module=platform status=detached kind=alert chars={}",
            message.chars().count()
        );
    }

    fn confirm(&self, message: &str) -> bool {
        info!(
            "event=dialog module=platform status=detached kind=confirm chars={} answer={}",
            message.chars().count(),
            self.confirm_default
        );
        self.confirm_default
    }

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn user(&self) -> Option<HostUser> {
        None
    }

    fn is_attached(&self) -> bool {
        false
    }
}

/// Resolves the effective scheme; `Theme::System` follows the host.
pub fn resolve_theme(theme: Theme, bridge: &dyn HostBridge) -> ColorScheme {
    match theme {
        Theme::Light => ColorScheme::Light,
        Theme::Dark => ColorScheme::Dark,
        Theme::System => bridge.color_scheme(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        resolve_theme, ColorScheme, DetachedBridge, Haptic, HostBridge, HostUser, Viewport,
    };
    use crate::config::CoreConfig;
    use crate::model::profile::Theme;

    #[test]
    fn detached_bridge_is_inert_and_answers_default() {
        let bridge = DetachedBridge::new(true);
        bridge.ready();
        bridge.expand();
        bridge.haptic(Haptic::Selection);
        assert!(bridge.confirm("delete everything?"));
        assert!(!DetachedBridge::default().confirm("delete?"));
        assert!(bridge.user().is_none());
        assert!(!bridge.is_attached());
    }

    #[test]
    fn detached_bridge_takes_config_and_viewport() {
        let config = CoreConfig {
            confirm_default: true,
            ..CoreConfig::default()
        };
        let compact = Viewport {
            height: 480,
            stable_height: 420,
            is_expanded: false,
        };
        let bridge = DetachedBridge::from_config(&config).with_viewport(compact);
        assert!(bridge.confirm("clear list?"));
        assert_eq!(bridge.viewport(), compact);
        assert_eq!(DetachedBridge::default().viewport(), Viewport::default());
    }

    #[test]
    fn system_theme_follows_bridge() {
        let bridge = DetachedBridge::default();
        assert_eq!(resolve_theme(Theme::System, &bridge), ColorScheme::Light);
        assert_eq!(resolve_theme(Theme::Dark, &bridge), ColorScheme::Dark);
    }

    #[test]
    fn display_name_joins_and_trims() {
        let mut user = HostUser {
            id: 7,
            first_name: " Aziza ".to_string(),
            last_name: Some("Karimova".to_string()),
            username: None,
            language_code: Some("uz".to_string()),
        };
        assert_eq!(user.display_name().as_deref(), Some("Aziza Karimova"));
        user.first_name = " ".to_string();
        user.last_name = None;
        assert_eq!(user.display_name(), None);
    }
}
