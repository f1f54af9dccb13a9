// SPDX-License-Identifier: MPL-2.0
//! Preference and session persistence helpers.
//!
//! Failures are reported through the notification manager; a broken disk
//! should never take the UI down.

use super::config;
use super::persisted_state::AppState;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::theming::ThemeMode;

/// Persists the current preferences to `settings.toml`.
///
/// Guarded during unit tests to keep isolation: the tests exercise the config
/// round-trip through `config::save_with_override` directly.
pub fn persist_preferences(
    font_size: u16,
    theme_mode: ThemeMode,
    sort_order: config::SortOrder,
    tag_separator: &str,
    notifications: &mut Manager,
) {
    if cfg!(test) {
        return;
    }

    let config = config::Config {
        general: config::GeneralConfig {
            font_size: Some(font_size),
            theme_mode,
        },
        library: config::LibraryConfig {
            sort_order: Some(sort_order),
            tag_separator: Some(tag_separator.to_string()),
        },
    };

    if config::save(&config).is_err() {
        notifications.push(Notification::warning("Could not save settings.toml"));
    }
}

/// Persists the session state to `state.cbor`.
pub fn save_session(app_state: &AppState, notifications: &mut Manager) {
    if let Some(warning) = app_state.save() {
        notifications.push(Notification::warning(warning));
    }
}
