//! Browser-backed implementations of the core storage and latency seams.

use async_trait::async_trait;
use busline_core::api::Latency;
use busline_core::store::{ObjectStore, StoreError};

/// `localStorage`-backed object store; the durable side of the mock API.
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl ObjectStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = crate::dom::local_storage()
            .map_err(|err| StoreError::Unavailable(crate::dom::js_error_message(&err)))?;
        storage
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(crate::dom::js_error_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = crate::dom::local_storage()
            .map_err(|err| StoreError::Unavailable(crate::dom::js_error_message(&err)))?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Unavailable(crate::dom::js_error_message(&err)))
    }
}

/// Simulated network delay so loading states are visible in the UI.
#[derive(Debug, Clone, Copy)]
pub struct FrameLatency {
    pub delay_ms: i32,
}

impl Default for FrameLatency {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}

#[async_trait(?Send)]
impl Latency for FrameLatency {
    async fn pause(&self) {
        if let Err(err) = crate::dom::sleep_ms(self.delay_ms).await {
            log::warn!(
                "latency timer failed: {}",
                crate::dom::js_error_message(&err)
            );
        }
    }
}
