//! Small wrappers over the browser globals used by storage and chrome.

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Storage, Window};

/// The global `window` handle.
///
/// # Panics
/// Panics when called outside a browser, where no `window` exists.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// The active document.
///
/// # Panics
/// Panics when the window carries no document.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Best-effort readable text for a thrown JavaScript value.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// The `localStorage` handle behind the persisted booking data.
///
/// # Errors
/// Fails when storage is disabled or the window refuses access.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Resolve after `duration_ms` using a `setTimeout`-backed promise. Drives the
/// simulated request latency of the mock data service.
///
/// # Errors
/// Fails when the timer cannot be scheduled or the promise rejects.
///
/// # Panics
/// Panics when called outside a browser, where no `window` exists.
#[allow(clippy::future_not_send)] // JsFuture is not Send; wasm runs single-threaded.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve slot was not filled"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}
