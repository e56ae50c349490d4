#![forbid(unsafe_code)]

pub mod api;
pub mod assistant;
pub mod countries;
pub mod models;
pub mod store;
pub mod validate;
pub mod wizard;

pub use api::{
    ApiError, BookingPatch, DataService, Latency, MockApi, NewRoute, NewSchedule, NoLatency,
    RoutePatch,
};
pub use countries::Country;
pub use models::{Booking, BookingForm, BookingStatus, DayCode, Route, Schedule};
pub use store::{MemoryStore, ObjectStore, StoreError};
pub use wizard::{BookingWizard, WizardStep};
