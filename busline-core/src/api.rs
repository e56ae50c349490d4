//! Mock data service: network-shaped CRUD over a durable key-value store.
//! Every operation is asynchronous and pauses through an injectable
//! [`Latency`] so the UI exercises its loading states; tests inject
//! [`NoLatency`].

use crate::models::{Booking, BookingForm, BookingStatus, DayCode, Route, Schedule};
use crate::store::{ObjectStore, StoreError};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const ROUTES_KEY: &str = "bus_app_routes";
pub const BOOKINGS_KEY: &str = "bus_app_bookings";
pub const SCHEDULES_KEY: &str = "bus_app_schedules";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Route not found")]
    RouteNotFound,
    #[error("Booking not found")]
    BookingNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Simulated network pause before each operation resolves.
#[async_trait(?Send)]
pub trait Latency {
    async fn pause(&self);
}

/// Zero-delay latency for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLatency;

#[async_trait(?Send)]
impl Latency for NoLatency {
    async fn pause(&self) {}
}

/// Payload for creating a route; the service assigns the id.
#[derive(Debug, Clone)]
pub struct NewRoute {
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub duration: String,
    pub price: f64,
    pub currency: String,
    pub available_days: Vec<DayCode>,
}

#[derive(Debug, Clone, Default)]
pub struct RoutePatch {
    pub name: Option<String>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub available_days: Option<Vec<DayCode>>,
}

#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub status: Option<BookingStatus>,
}

/// Payload for creating a timetable entry; the service assigns the id and
/// starts with every seat free.
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub route_id: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub date: NaiveDate,
    pub total_seats: u32,
}

/// The consumed interface of the data service: what the wizard, the schedule
/// browser and the admin panel talk to.
#[async_trait(?Send)]
pub trait DataService {
    async fn list_routes(&self) -> Result<Vec<Route>, ApiError>;
    async fn route(&self, id: &str) -> Result<Route, ApiError>;
    /// Routes whose available weekdays include the weekday of `date`.
    async fn routes_available_on(&self, date: NaiveDate) -> Result<Vec<Route>, ApiError>;
    async fn create_route(&self, route: NewRoute) -> Result<Route, ApiError>;
    async fn update_route(&self, id: &str, patch: RoutePatch) -> Result<Route, ApiError>;
    async fn delete_route(&self, id: &str) -> Result<(), ApiError>;

    /// Creates a Pending booking; the total is recomputed from the route's
    /// current price, never trusted from the caller.
    async fn create_booking(&self, form: &BookingForm, user_id: i64) -> Result<Booking, ApiError>;
    async fn update_booking(&self, id: &str, patch: BookingPatch) -> Result<Booking, ApiError>;
    async fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError>;

    async fn list_schedules(&self) -> Result<Vec<Schedule>, ApiError>;
    async fn schedules_for(&self, route_id: &str, date: NaiveDate)
    -> Result<Vec<Schedule>, ApiError>;
    async fn create_schedule(&self, schedule: NewSchedule) -> Result<Schedule, ApiError>;
}

/// The demo routes the store is seeded with on first use.
#[must_use]
pub fn demo_routes() -> Vec<Route> {
    let route = |id: &str, origin: &str, destination: &str, duration: &str, price, days: &[u8]| {
        Route {
            id: id.to_string(),
            name: format!("{origin} – {destination}"),
            origin: origin.to_string(),
            destination: destination.to_string(),
            duration: duration.to_string(),
            price,
            currency: "BYN".to_string(),
            available_days: days.to_vec(),
        }
    };
    vec![
        route("minsk-vilnius", "Minsk", "Vilnius", "04:30", 45.0, &[0, 1, 2, 3, 4, 5, 6]),
        route("minsk-warsaw", "Minsk", "Warsaw", "06:15", 90.0, &[1, 3, 5]),
        route("minsk-riga", "Minsk", "Riga", "08:00", 70.0, &[0, 4, 6]),
        route("minsk-kyiv", "Minsk", "Kyiv", "10:30", 85.0, &[2, 5]),
    ]
}

pub struct MockApi<S, L = NoLatency> {
    store: S,
    latency: L,
}

impl<S: ObjectStore, L: Latency> MockApi<S, L> {
    /// Wraps a store, seeding the three collections on first use.
    pub fn new(store: S, latency: L) -> Result<Self, StoreError> {
        let api = Self { store, latency };
        if api.store.read(ROUTES_KEY)?.is_none() {
            api.save(ROUTES_KEY, &demo_routes())?;
            log::info!("seeded route storage with demo routes");
        }
        if api.store.read(BOOKINGS_KEY)?.is_none() {
            api.save(BOOKINGS_KEY, &Vec::<Booking>::new())?;
        }
        if api.store.read(SCHEDULES_KEY)?.is_none() {
            api.save(SCHEDULES_KEY, &Vec::<Schedule>::new())?;
        }
        Ok(api)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.store.read(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        self.store.write(key, &json)
    }

    fn fresh_booking_id() -> String {
        let millis = Utc::now().timestamp_millis().unsigned_abs();
        format!("BK-{:08}", millis % 100_000_000)
    }

    fn fresh_route_id() -> String {
        format!("route-{}", Utc::now().timestamp_millis())
    }
}

#[async_trait(?Send)]
impl<S: ObjectStore, L: Latency> DataService for MockApi<S, L> {
    async fn list_routes(&self) -> Result<Vec<Route>, ApiError> {
        self.latency.pause().await;
        Ok(self.load(ROUTES_KEY)?)
    }

    async fn route(&self, id: &str) -> Result<Route, ApiError> {
        self.latency.pause().await;
        self.load::<Route>(ROUTES_KEY)?
            .into_iter()
            .find(|route| route.id == id)
            .ok_or(ApiError::RouteNotFound)
    }

    async fn routes_available_on(&self, date: NaiveDate) -> Result<Vec<Route>, ApiError> {
        self.latency.pause().await;
        let mut routes: Vec<Route> = self
            .load::<Route>(ROUTES_KEY)?
            .into_iter()
            .filter(|route| route.runs_on(date))
            .collect();
        routes.sort_by(|a, b| a.price.total_cmp(&b.price));
        Ok(routes)
    }

    async fn create_route(&self, route: NewRoute) -> Result<Route, ApiError> {
        self.latency.pause().await;
        let mut routes = self.load::<Route>(ROUTES_KEY)?;
        let created = Route {
            id: Self::fresh_route_id(),
            name: route.name,
            origin: route.origin,
            destination: route.destination,
            duration: route.duration,
            price: route.price,
            currency: route.currency,
            available_days: route.available_days,
        };
        routes.push(created.clone());
        self.save(ROUTES_KEY, &routes)?;
        Ok(created)
    }

    async fn update_route(&self, id: &str, patch: RoutePatch) -> Result<Route, ApiError> {
        self.latency.pause().await;
        let mut routes = self.load::<Route>(ROUTES_KEY)?;
        let route = routes
            .iter_mut()
            .find(|route| route.id == id)
            .ok_or(ApiError::RouteNotFound)?;
        if let Some(name) = patch.name {
            route.name = name;
        }
        if let Some(duration) = patch.duration {
            route.duration = duration;
        }
        if let Some(price) = patch.price {
            route.price = price;
        }
        if let Some(currency) = patch.currency {
            route.currency = currency;
        }
        if let Some(days) = patch.available_days {
            route.available_days = days;
        }
        let updated = route.clone();
        self.save(ROUTES_KEY, &routes)?;
        Ok(updated)
    }

    async fn delete_route(&self, id: &str) -> Result<(), ApiError> {
        self.latency.pause().await;
        let mut routes = self.load::<Route>(ROUTES_KEY)?;
        routes.retain(|route| route.id != id);
        self.save(ROUTES_KEY, &routes)?;
        Ok(())
    }

    async fn create_booking(&self, form: &BookingForm, user_id: i64) -> Result<Booking, ApiError> {
        self.latency.pause().await;
        let route_id = form.route_id.clone().ok_or(ApiError::RouteNotFound)?;
        let route = self
            .load::<Route>(ROUTES_KEY)?
            .into_iter()
            .find(|route| route.id == route_id)
            .ok_or(ApiError::RouteNotFound)?;

        let mut bookings = self.load::<Booking>(BOOKINGS_KEY)?;
        let booking = Booking {
            id: Self::fresh_booking_id(),
            user_id,
            route_id,
            schedule_id: form.schedule_id.clone(),
            passenger_name: form.passenger_name.clone(),
            passenger_phone: form.passenger_phone.clone(),
            ticket_count: form.ticket_count,
            total_price: route.price * f64::from(form.ticket_count),
            currency: route.currency,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        bookings.push(booking.clone());
        self.save(BOOKINGS_KEY, &bookings)?;
        Ok(booking)
    }

    async fn update_booking(&self, id: &str, patch: BookingPatch) -> Result<Booking, ApiError> {
        self.latency.pause().await;
        let mut bookings = self.load::<Booking>(BOOKINGS_KEY)?;
        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or(ApiError::BookingNotFound)?;
        if let Some(status) = patch.status {
            booking.status = status;
        }
        let updated = booking.clone();
        self.save(BOOKINGS_KEY, &bookings)?;
        Ok(updated)
    }

    async fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        self.latency.pause().await;
        Ok(self
            .load::<Booking>(BOOKINGS_KEY)?
            .into_iter()
            .filter(|booking| booking.user_id == user_id)
            .collect())
    }

    async fn list_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        self.latency.pause().await;
        Ok(self.load(SCHEDULES_KEY)?)
    }

    async fn schedules_for(
        &self,
        route_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Schedule>, ApiError> {
        self.latency.pause().await;
        Ok(self
            .load::<Schedule>(SCHEDULES_KEY)?
            .into_iter()
            .filter(|schedule| schedule.route_id == route_id && schedule.date == date)
            .collect())
    }

    async fn create_schedule(&self, schedule: NewSchedule) -> Result<Schedule, ApiError> {
        self.latency.pause().await;
        if !self
            .load::<Route>(ROUTES_KEY)?
            .iter()
            .any(|route| route.id == schedule.route_id)
        {
            return Err(ApiError::RouteNotFound);
        }
        let mut schedules = self.load::<Schedule>(SCHEDULES_KEY)?;
        let created = Schedule {
            id: format!("sched-{}", Utc::now().timestamp_millis()),
            route_id: schedule.route_id,
            departure_time: schedule.departure_time,
            arrival_time: schedule.arrival_time,
            date: schedule.date,
            available_seats: schedule.total_seats,
            total_seats: schedule.total_seats,
        };
        schedules.push(created.clone());
        self.save(SCHEDULES_KEY, &schedules)?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::wizard::{BookingWizard, WizardStep};
    use futures::executor::block_on;

    fn api() -> MockApi<MemoryStore> {
        MockApi::new(MemoryStore::default(), NoLatency).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_use_seeds_demo_routes() {
        let api = api();
        let routes = block_on(api.list_routes()).unwrap();
        assert_eq!(routes.len(), 4);
        assert!(routes.iter().any(|route| route.id == "minsk-vilnius"));
    }

    #[test]
    fn seeding_does_not_overwrite_existing_data() {
        let store = MemoryStore::default();
        store.write(ROUTES_KEY, "[]").unwrap();
        let api = MockApi::new(store, NoLatency).unwrap();
        assert!(block_on(api.list_routes()).unwrap().is_empty());
    }

    #[test]
    fn weekday_filter_excludes_routes_not_running_that_day() {
        let api = api();
        // 2026-08-25 is a Tuesday; minsk-warsaw runs Mon/Wed/Fri only.
        let routes = block_on(api.routes_available_on(date(2026, 8, 25))).unwrap();
        assert!(!routes.iter().any(|route| route.id == "minsk-warsaw"));
        assert!(routes.iter().any(|route| route.id == "minsk-vilnius"));
        // minsk-kyiv runs Tue/Fri.
        assert!(routes.iter().any(|route| route.id == "minsk-kyiv"));
    }

    #[test]
    fn available_routes_come_back_sorted_by_price() {
        let api = api();
        // Friday: every demo route runs.
        let routes = block_on(api.routes_available_on(date(2026, 8, 28))).unwrap();
        let prices: Vec<f64> = routes.iter().map(|route| route.price).collect();
        assert_eq!(prices, vec![45.0, 70.0, 85.0, 90.0]);
    }

    #[test]
    fn booking_total_is_recomputed_from_the_route_price() {
        let api = api();
        let mut form = BookingForm::default();
        form.passenger_name = "Ann Lee".into();
        form.passenger_phone = "291234567".into();
        form.route_id = Some("minsk-warsaw".into());
        form.ticket_count = 3;

        let booking = block_on(api.create_booking(&form, 42)).unwrap();
        assert_eq!(booking.total_price, 270.0);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.currency, "BYN");
        assert!(booking.id.starts_with("BK-"));
    }

    #[test]
    fn booking_against_a_vanished_route_is_rejected() {
        let api = api();
        let mut form = BookingForm::default();
        form.route_id = Some("minsk-gone".into());
        let err = block_on(api.create_booking(&form, 42)).unwrap_err();
        assert!(matches!(err, ApiError::RouteNotFound));
    }

    #[test]
    fn cancelling_a_booking_persists_the_status_change() {
        let api = api();
        let mut form = BookingForm::default();
        form.route_id = Some("minsk-riga".into());
        let booking = block_on(api.create_booking(&form, 7)).unwrap();

        let patch = BookingPatch {
            status: Some(BookingStatus::Cancelled),
        };
        let updated = block_on(api.update_booking(&booking.id, patch)).unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);

        let bookings = block_on(api.bookings_for_user(7)).unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].status, BookingStatus::Cancelled);
    }

    #[test]
    fn bookings_are_scoped_to_their_user() {
        let api = api();
        let mut form = BookingForm::default();
        form.route_id = Some("minsk-vilnius".into());
        block_on(api.create_booking(&form, 1)).unwrap();
        assert!(block_on(api.bookings_for_user(2)).unwrap().is_empty());
    }

    #[test]
    fn admin_route_crud_round_trip() {
        let api = api();
        let created = block_on(api.create_route(NewRoute {
            name: "Minsk – Lviv".into(),
            origin: "Minsk".into(),
            destination: "Lviv".into(),
            duration: "09:45".into(),
            price: 95.0,
            currency: "BYN".into(),
            available_days: vec![4],
        }))
        .unwrap();

        let patched = block_on(api.update_route(
            &created.id,
            RoutePatch {
                price: Some(99.0),
                ..RoutePatch::default()
            },
        ))
        .unwrap();
        assert_eq!(patched.price, 99.0);

        block_on(api.delete_route(&created.id)).unwrap();
        assert!(matches!(
            block_on(api.route(&created.id)),
            Err(ApiError::RouteNotFound)
        ));
    }

    #[test]
    fn schedules_are_scoped_to_route_and_date() {
        let api = api();
        let created = block_on(api.create_schedule(NewSchedule {
            route_id: "minsk-vilnius".into(),
            departure_time: "08:00".into(),
            arrival_time: "12:30".into(),
            date: date(2026, 8, 28),
            total_seats: 48,
        }))
        .unwrap();
        assert_eq!(created.available_seats, 48);

        let same_day = block_on(api.schedules_for("minsk-vilnius", date(2026, 8, 28))).unwrap();
        assert_eq!(same_day.len(), 1);
        assert!(
            block_on(api.schedules_for("minsk-vilnius", date(2026, 8, 29)))
                .unwrap()
                .is_empty()
        );
        assert_eq!(block_on(api.list_schedules()).unwrap().len(), 1);

        let err = block_on(api.create_schedule(NewSchedule {
            route_id: "minsk-gone".into(),
            departure_time: "08:00".into(),
            arrival_time: "12:30".into(),
            date: date(2026, 8, 28),
            total_seats: 48,
        }))
        .unwrap_err();
        assert!(matches!(err, ApiError::RouteNotFound));
    }

    // Full pass through the wizard ending in exactly one pending booking.
    #[test]
    fn completed_wizard_produces_one_pending_booking() {
        let api = api();
        let today = date(2026, 8, 26); // a Wednesday
        let mut wizard = BookingWizard::new(Some("Ann Lee"));

        assert!(wizard.next(today)); // name pre-filled
        wizard.form.travel_date = Some(today);
        assert!(wizard.next(today));

        let available = block_on(api.routes_available_on(today)).unwrap();
        assert!(available.iter().any(|route| route.id == "minsk-warsaw"));
        wizard.form.route_id = Some("minsk-warsaw".into());
        assert!(wizard.next(today));

        let route = block_on(api.route("minsk-warsaw")).unwrap();
        wizard.set_route_loaded(true);
        wizard.form.ticket_count = 2;
        assert!(wizard.next(today));

        wizard.form.country_code = Some("BY".into());
        wizard.form.passenger_phone = "291234567".into();
        assert!(wizard.next(today));
        assert_eq!(wizard.step(), WizardStep::Confirm);

        let booking = block_on(api.create_booking(&wizard.form, 99)).unwrap();
        assert_eq!(booking.total_price, route.price * 2.0);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(block_on(api.bookings_for_user(99)).unwrap().len(), 1);
    }
}
