//! In-browser tests run through `wasm-pack test`.

#![cfg(target_arch = "wasm32")]

use busline_core::store::ObjectStore;
use busline_web::storage::LocalStorageStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let store = LocalStorageStore;
    store.write("busline_test_key", "value").unwrap();
    assert_eq!(
        store.read("busline_test_key").unwrap().as_deref(),
        Some("value")
    );
}

#[wasm_bindgen_test]
fn chrome_detection_falls_back_to_the_browser_adapter() {
    // The test harness page has no Telegram object, so detection must land
    // on the fallback with its demo identity.
    let chrome = busline_web::chrome::detect();
    assert!(!chrome.is_embedded());
    assert_eq!(chrome.user().map(|user| user.id), Some(12_345_678));
}
