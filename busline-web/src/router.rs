use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Booking,
    #[at("/schedule")]
    Schedule,
    #[at("/prices")]
    Prices,
    #[at("/bookings")]
    MyBookings,
    #[at("/assistant")]
    Assistant,
    #[at("/admin")]
    Admin,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Booking => "Booking",
            Self::Schedule => "Schedule",
            Self::Prices => "Prices",
            Self::MyBookings => "My tickets",
            Self::Assistant => "Assistant",
            Self::Admin => "Admin",
            Self::NotFound => "Not found",
        }
    }

    /// The entries shown in the navigation menu, in order.
    pub const MENU: [Self; 6] = [
        Self::Booking,
        Self::Schedule,
        Self::Prices,
        Self::MyBookings,
        Self::Assistant,
        Self::Admin,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_entry_has_a_title() {
        for route in Route::MENU {
            assert!(!route.title().is_empty());
        }
    }
}
