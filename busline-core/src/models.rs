use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Day-of-week code as stored in route data: 0 = Sunday .. 6 = Saturday.
pub type DayCode = u8;

/// Map a calendar date onto the Sunday-based day code used by route data.
#[must_use]
pub fn day_code(date: NaiveDate) -> DayCode {
    use chrono::Datelike;
    u8::try_from(date.weekday().num_days_from_sunday()).unwrap_or(0)
}

/// A fixed origin-destination bus service offered on certain weekdays at a
/// fixed price. Immutable reference data for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub destination: String,
    /// Travel time in "HH:MM" form.
    pub duration: String,
    pub price: f64,
    pub currency: String,
    pub available_days: Vec<DayCode>,
}

impl Route {
    /// Whether this route runs on the weekday of `date`.
    #[must_use]
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        self.available_days.contains(&day_code(date))
    }

    /// Case-insensitive free-text match against name, origin and destination.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.origin.to_lowercase().contains(&needle)
            || self.destination.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub route_id: String,
    /// "HH:MM"
    pub departure_time: String,
    /// "HH:MM"
    pub arrival_time: String,
    pub date: NaiveDate,
    pub available_seats: u32,
    pub total_seats: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A reservation record tied to a route, passenger and ticket count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: i64,
    pub route_id: String,
    #[serde(default)]
    pub schedule_id: Option<String>,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub ticket_count: u8,
    pub total_price: f64,
    pub currency: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// The in-progress booking captured by the wizard, one field per step.
/// Discarded when the wizard unmounts or completes.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub passenger_name: String,
    /// Digits only; the dial code lives on the selected country.
    pub passenger_phone: String,
    pub ticket_count: u8,
    pub travel_date: Option<NaiveDate>,
    pub route_id: Option<String>,
    pub schedule_id: Option<String>,
    pub country_code: Option<String>,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            passenger_name: String::new(),
            passenger_phone: String::new(),
            ticket_count: 1,
            travel_date: None,
            route_id: None,
            schedule_id: None,
            country_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn route(days: &[DayCode]) -> Route {
        Route {
            id: "minsk-warsaw".into(),
            name: "Minsk – Warsaw".into(),
            origin: "Minsk".into(),
            destination: "Warsaw".into(),
            duration: "06:15".into(),
            price: 90.0,
            currency: "BYN".into(),
            available_days: days.to_vec(),
        }
    }

    #[test]
    fn day_code_is_sunday_based() {
        // 2026-08-23 is a Sunday.
        assert_eq!(day_code(date(2026, 8, 23)), 0);
        assert_eq!(day_code(date(2026, 8, 24)), 1);
        assert_eq!(day_code(date(2026, 8, 29)), 6);
    }

    #[test]
    fn mon_wed_fri_route_skips_tuesday() {
        let r = route(&[1, 3, 5]);
        // 2026-08-25 is a Tuesday, 2026-08-26 a Wednesday.
        assert!(!r.runs_on(date(2026, 8, 25)));
        assert!(r.runs_on(date(2026, 8, 26)));
    }

    #[test]
    fn query_matches_any_of_name_origin_destination() {
        let r = route(&[0]);
        assert!(r.matches_query("warsaw"));
        assert!(r.matches_query("MINSK"));
        assert!(r.matches_query("insk – war"));
        assert!(!r.matches_query("riga"));
    }

    #[test]
    fn route_round_trips_through_the_persisted_layout() {
        let r = route(&[1, 3, 5]);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"availableDays\":[1,3,5]"), "{json}");
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn booking_status_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::from_str::<BookingStatus>("\"cancelled\"").unwrap(),
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn empty_form_starts_with_one_ticket() {
        let form = BookingForm::default();
        assert_eq!(form.ticket_count, 1);
        assert!(form.travel_date.is_none());
        assert!(form.route_id.is_none());
    }
}
