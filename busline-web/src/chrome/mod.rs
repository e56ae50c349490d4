//! The platform chrome adapter: one interface over the host platform's UI
//! affordances (primary/back buttons, haptics, dialogs). Host availability is
//! detected once at startup; the rest of the app talks to the trait and never
//! learns which side it got.

pub mod browser;
#[cfg(any(test, not(target_arch = "wasm32")))]
pub mod recording;
#[cfg(target_arch = "wasm32")]
pub mod telegram;

use serde::Deserialize;
use std::rc::Rc;
use yew::Callback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Light,
    Medium,
    Heavy,
}

impl Impact {
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Warning,
    Error,
}

impl Notice {
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The host platform's notion of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl HostUser {
    /// First and last name joined, skipping whichever is absent.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }
}

/// Host UI affordances as consumed by the wizard and the pages. Every method
/// has a defined fallback when the host platform is absent, so callers never
/// branch on availability.
pub trait PlatformChrome {
    /// Whether a real host WebView is driving the buttons. The fallback
    /// returns false so pages render their own in-page navigation.
    fn is_embedded(&self) -> bool;
    /// Show the host's primary action button with `label`, rebinding its
    /// click handler. The previous handler, if any, is unbound first.
    fn show_main_button(&self, label: &str, on_click: Callback<()>);
    fn hide_main_button(&self);
    fn show_back_button(&self, on_click: Callback<()>);
    fn hide_back_button(&self);
    fn haptic_impact(&self, impact: Impact);
    fn haptic_notification(&self, notice: Notice);
    fn haptic_selection(&self);
    /// Modal confirmation; `on_choice` fires once with the user's answer.
    fn show_confirm(&self, message: &str, on_choice: Callback<bool>);
    fn show_alert(&self, message: &str);
    /// Hand a payload back to the hosting chat platform.
    fn send_data(&self, payload: &serde_json::Value);
    fn user(&self) -> Option<HostUser>;
    fn color_scheme(&self) -> Theme;
}

/// Detect the host once and hand back the matching adapter.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn detect() -> Rc<dyn PlatformChrome> {
    match telegram::TelegramChrome::attach() {
        Some(chrome) => {
            log::info!("running inside the host WebView");
            Rc::new(chrome)
        }
        None => {
            log::info!("host platform unavailable; using the browser fallback");
            Rc::new(browser::BrowserChrome::default())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn detect() -> Rc<dyn PlatformChrome> {
    Rc::new(browser::BrowserChrome::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_skips_a_missing_last_name() {
        let user = HostUser {
            id: 1,
            first_name: "Ann".into(),
            last_name: None,
            username: None,
        };
        assert_eq!(user.full_name(), "Ann");

        let user = HostUser {
            last_name: Some("Lee".into()),
            ..user
        };
        assert_eq!(user.full_name(), "Ann Lee");
    }

    #[test]
    fn wire_names_match_the_host_api() {
        assert_eq!(Impact::Medium.wire_name(), "medium");
        assert_eq!(Notice::Success.wire_name(), "success");
        assert_eq!(Theme::Dark.css_name(), "dark");
    }
}
