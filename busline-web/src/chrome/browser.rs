//! Fallback chrome for running outside the host WebView (plain browser or
//! native tooling). Dialogs degrade to the native browser ones, haptics and
//! the host buttons degrade to log lines, and the user is a fixed demo stub.

use super::{HostUser, Impact, Notice, PlatformChrome, Theme};
use yew::Callback;

const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Default)]
pub struct BrowserChrome;

#[cfg(target_arch = "wasm32")]
fn native_confirm(message: &str) -> Option<bool> {
    web_sys::window().and_then(|window| window.confirm_with_message(message).ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn native_confirm(_message: &str) -> Option<bool> {
    None
}

#[cfg(target_arch = "wasm32")]
fn native_alert(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.alert_with_message(message).ok())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn native_alert(_message: &str) -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn detect_theme() -> Theme {
    let saved = crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    match saved.as_deref() {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None => {
            let prefers_dark = web_sys::window()
                .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
                .flatten()
                .is_some_and(|query| query.matches());
            if prefers_dark { Theme::Dark } else { Theme::Light }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_theme() -> Theme {
    let _ = THEME_STORAGE_KEY;
    Theme::Light
}

impl PlatformChrome for BrowserChrome {
    fn is_embedded(&self) -> bool {
        false
    }

    fn show_main_button(&self, label: &str, _on_click: Callback<()>) {
        log::info!("[main-button] show: {label}");
    }

    fn hide_main_button(&self) {
        log::info!("[main-button] hide");
    }

    fn show_back_button(&self, _on_click: Callback<()>) {
        log::info!("[back-button] show");
    }

    fn hide_back_button(&self) {
        log::info!("[back-button] hide");
    }

    fn haptic_impact(&self, impact: Impact) {
        log::debug!("[haptic] impact: {}", impact.wire_name());
    }

    fn haptic_notification(&self, notice: Notice) {
        log::debug!("[haptic] notification: {}", notice.wire_name());
    }

    fn haptic_selection(&self) {
        log::debug!("[haptic] selection changed");
    }

    fn show_confirm(&self, message: &str, on_choice: Callback<bool>) {
        let confirmed = native_confirm(message).unwrap_or(false);
        on_choice.emit(confirmed);
    }

    fn show_alert(&self, message: &str) {
        if !native_alert(message) {
            log::warn!("[alert] {message}");
        }
    }

    fn send_data(&self, payload: &serde_json::Value) {
        log::info!("[send-data] {payload}");
    }

    fn user(&self) -> Option<HostUser> {
        // Demo identity for development outside the host.
        Some(HostUser {
            id: 12_345_678,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("test_user".to_string()),
        })
    }

    fn color_scheme(&self) -> Theme {
        detect_theme()
    }
}
