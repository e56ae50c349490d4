//! Recording chrome for native tests: every call is appended to an event log
//! and the registered button handlers can be fired from the test.

use super::{HostUser, Impact, Notice, PlatformChrome, Theme};
use std::cell::RefCell;
use yew::Callback;

#[derive(Debug, Default)]
pub struct RecordingChrome {
    events: RefCell<Vec<String>>,
    main_click: RefCell<Option<Callback<()>>>,
    back_click: RefCell<Option<Callback<()>>>,
    /// Answer handed to `show_confirm` callers.
    pub confirm_answer: std::cell::Cell<bool>,
    pub host_user: RefCell<Option<HostUser>>,
}

impl RecordingChrome {
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: impl Into<String>) {
        self.events.borrow_mut().push(event.into());
    }

    /// Fire the currently bound primary-button handler, as the host would.
    pub fn click_main(&self) {
        let handler = self.main_click.borrow().clone();
        if let Some(handler) = handler {
            handler.emit(());
        }
    }

    pub fn click_back(&self) {
        let handler = self.back_click.borrow().clone();
        if let Some(handler) = handler {
            handler.emit(());
        }
    }

    #[must_use]
    pub fn main_button_visible(&self) -> bool {
        self.main_click.borrow().is_some()
    }

    #[must_use]
    pub fn back_button_visible(&self) -> bool {
        self.back_click.borrow().is_some()
    }
}

impl PlatformChrome for RecordingChrome {
    fn is_embedded(&self) -> bool {
        true
    }

    fn show_main_button(&self, label: &str, on_click: Callback<()>) {
        self.record(format!("main:show:{label}"));
        *self.main_click.borrow_mut() = Some(on_click);
    }

    fn hide_main_button(&self) {
        self.record("main:hide");
        *self.main_click.borrow_mut() = None;
    }

    fn show_back_button(&self, on_click: Callback<()>) {
        self.record("back:show");
        *self.back_click.borrow_mut() = Some(on_click);
    }

    fn hide_back_button(&self) {
        self.record("back:hide");
        *self.back_click.borrow_mut() = None;
    }

    fn haptic_impact(&self, impact: Impact) {
        self.record(format!("haptic:impact:{}", impact.wire_name()));
    }

    fn haptic_notification(&self, notice: Notice) {
        self.record(format!("haptic:notice:{}", notice.wire_name()));
    }

    fn haptic_selection(&self) {
        self.record("haptic:selection");
    }

    fn show_confirm(&self, message: &str, on_choice: Callback<bool>) {
        self.record(format!("confirm:{message}"));
        on_choice.emit(self.confirm_answer.get());
    }

    fn show_alert(&self, message: &str) {
        self.record(format!("alert:{message}"));
    }

    fn send_data(&self, payload: &serde_json::Value) {
        self.record(format!("send:{payload}"));
    }

    fn user(&self) -> Option<HostUser> {
        self.host_user.borrow().clone()
    }

    fn color_scheme(&self) -> Theme {
        Theme::Light
    }
}
