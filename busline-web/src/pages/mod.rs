//! One module per navigable page.

pub mod admin;
pub mod assistant;
pub mod booking;
pub mod my_bookings;
pub mod not_found;
pub mod prices;
pub mod schedule;

pub use admin::AdminPage;
pub use assistant::AssistantPage;
pub use booking::BookingPage;
pub use my_bookings::MyBookingsPage;
pub use not_found::NotFoundPage;
pub use prices::PricesPage;
pub use schedule::SchedulePage;

use busline_core::models::DayCode;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// "Mon, Wed, Fri" style rendering of a route's day codes; a full week
/// collapses to "Daily".
pub(crate) fn day_names(days: &[DayCode]) -> String {
    if days.len() >= DAY_NAMES.len() {
        return "Daily".to_string();
    }
    let mut codes: Vec<DayCode> = days.to_vec();
    codes.sort_unstable();
    codes
        .iter()
        .filter_map(|&code| DAY_NAMES.get(usize::from(code)).copied())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_names_are_sorted_and_collapse_to_daily() {
        assert_eq!(day_names(&[5, 1, 3]), "Mon, Wed, Fri");
        assert_eq!(day_names(&[0, 1, 2, 3, 4, 5, 6]), "Daily");
        assert_eq!(day_names(&[9]), "");
    }
}
