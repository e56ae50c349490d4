//! Live chrome bound to the Telegram WebApp object. All access goes through
//! `js_sys::Reflect` so a partially shimmed host degrades to no-ops instead
//! of throwing.

use super::{HostUser, Impact, Notice, PlatformChrome, Theme};
use js_sys::{Array, Function};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use yew::Callback;

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    let value = js_sys::Reflect::get(target, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn invoke(target: &JsValue, method: &str, args: &Array) -> Option<JsValue> {
    let func: Function = property(target, method)?.dyn_into().ok()?;
    match js_sys::Reflect::apply(&func, target, args) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!(
                "host call {method} failed: {}",
                crate::dom::js_error_message(&err)
            );
            None
        }
    }
}

pub struct TelegramChrome {
    webapp: JsValue,
    main_click: RefCell<Option<Closure<dyn FnMut()>>>,
    back_click: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TelegramChrome {
    /// Bind to `window.Telegram.WebApp` when present and signal readiness.
    #[must_use]
    pub fn attach() -> Option<Self> {
        let window = web_sys::window()?;
        let telegram = property(&window, "Telegram")?;
        let webapp = property(&telegram, "WebApp")?;
        invoke(&webapp, "ready", &Array::new());
        invoke(&webapp, "expand", &Array::new());
        Some(Self {
            webapp,
            main_click: RefCell::new(None),
            back_click: RefCell::new(None),
        })
    }

    fn main_button(&self) -> Option<JsValue> {
        property(&self.webapp, "MainButton")
    }

    fn back_button(&self) -> Option<JsValue> {
        property(&self.webapp, "BackButton")
    }

    fn haptics(&self) -> Option<JsValue> {
        property(&self.webapp, "HapticFeedback")
    }

    fn unbind(button: &JsValue, slot: &RefCell<Option<Closure<dyn FnMut()>>>) {
        if let Some(old) = slot.borrow_mut().take() {
            let args = Array::of1(old.as_ref().unchecked_ref());
            invoke(button, "offClick", &args);
        }
    }

    fn bind(button: &JsValue, slot: &RefCell<Option<Closure<dyn FnMut()>>>, on_click: Callback<()>) {
        Self::unbind(button, slot);
        let closure = Closure::wrap(Box::new(move || on_click.emit(())) as Box<dyn FnMut()>);
        let args = Array::of1(closure.as_ref().unchecked_ref());
        invoke(button, "onClick", &args);
        *slot.borrow_mut() = Some(closure);
    }
}

impl PlatformChrome for TelegramChrome {
    fn is_embedded(&self) -> bool {
        true
    }

    fn show_main_button(&self, label: &str, on_click: Callback<()>) {
        let Some(button) = self.main_button() else {
            return;
        };
        invoke(&button, "setText", &Array::of1(&JsValue::from_str(label)));
        Self::bind(&button, &self.main_click, on_click);
        invoke(&button, "show", &Array::new());
    }

    fn hide_main_button(&self) {
        if let Some(button) = self.main_button() {
            Self::unbind(&button, &self.main_click);
            invoke(&button, "hide", &Array::new());
        }
    }

    fn show_back_button(&self, on_click: Callback<()>) {
        let Some(button) = self.back_button() else {
            return;
        };
        Self::bind(&button, &self.back_click, on_click);
        invoke(&button, "show", &Array::new());
    }

    fn hide_back_button(&self) {
        if let Some(button) = self.back_button() {
            Self::unbind(&button, &self.back_click);
            invoke(&button, "hide", &Array::new());
        }
    }

    fn haptic_impact(&self, impact: Impact) {
        if let Some(haptics) = self.haptics() {
            let args = Array::of1(&JsValue::from_str(impact.wire_name()));
            invoke(&haptics, "impactOccurred", &args);
        }
    }

    fn haptic_notification(&self, notice: Notice) {
        if let Some(haptics) = self.haptics() {
            let args = Array::of1(&JsValue::from_str(notice.wire_name()));
            invoke(&haptics, "notificationOccurred", &args);
        }
    }

    fn haptic_selection(&self) {
        if let Some(haptics) = self.haptics() {
            invoke(&haptics, "selectionChanged", &Array::new());
        }
    }

    fn show_confirm(&self, message: &str, on_choice: Callback<bool>) {
        let callback = Closure::once_into_js(move |confirmed: JsValue| {
            on_choice.emit(confirmed.as_bool().unwrap_or(false));
        });
        let args = Array::of2(&JsValue::from_str(message), &callback);
        invoke(&self.webapp, "showConfirm", &args);
    }

    fn show_alert(&self, message: &str) {
        invoke(&self.webapp, "showAlert", &Array::of1(&JsValue::from_str(message)));
    }

    fn send_data(&self, payload: &serde_json::Value) {
        let json = payload.to_string();
        invoke(&self.webapp, "sendData", &Array::of1(&JsValue::from_str(&json)));
    }

    fn user(&self) -> Option<HostUser> {
        let init_data = property(&self.webapp, "initDataUnsafe")?;
        let user = property(&init_data, "user")?;
        serde_wasm_bindgen::from_value(user).ok()
    }

    fn color_scheme(&self) -> Theme {
        match property(&self.webapp, "colorScheme").and_then(|value| value.as_string()) {
            Some(scheme) if scheme == "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}
