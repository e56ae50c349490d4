//! The context bundle handed down to every page: the chrome adapter and the
//! data service, constructed once at app start.

use crate::chrome::PlatformChrome;
use busline_core::api::DataService;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct Services {
    pub chrome: Rc<dyn PlatformChrome>,
    pub api: Rc<dyn DataService>,
}

impl Services {
    #[must_use]
    pub fn new(chrome: Rc<dyn PlatformChrome>, api: Rc<dyn DataService>) -> Self {
        Self { chrome, api }
    }

    /// The host user id, or 0 when no identity is available.
    #[must_use]
    pub fn user_id(&self) -> i64 {
        self.chrome.user().map_or(0, |user| user.id)
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.chrome, &other.chrome) && Rc::ptr_eq(&self.api, &other.api)
    }
}

/// Pull [`Services`] out of the component context.
///
/// # Panics
/// Panics when no `ContextProvider<Services>` is above the caller; that is a
/// wiring bug, not a runtime condition.
#[hook]
#[must_use]
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services context should be provided by the app shell")
}

/// Services over an in-memory store and the recording chrome, for tests.
#[cfg(any(test, not(target_arch = "wasm32")))]
#[must_use]
pub fn test_services() -> (Services, Rc<crate::chrome::recording::RecordingChrome>) {
    use busline_core::api::{MockApi, NoLatency};
    use busline_core::store::MemoryStore;

    let chrome = Rc::new(crate::chrome::recording::RecordingChrome::default());
    let api = MockApi::new(MemoryStore::default(), NoLatency)
        .expect("in-memory store should always seed");
    (
        Services::new(chrome.clone(), Rc::new(api)),
        chrome,
    )
}
