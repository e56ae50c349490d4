//! Field-level validation for the booking form. Errors are meant to be shown
//! inline next to the offending input; nothing here is fatal.

use crate::countries::Country;
use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_PHONE_DIGITS: usize = 9;
pub const MIN_TICKETS: u8 = 1;
pub const MAX_TICKETS: u8 = 10;
/// Bookings open from today through this many days ahead.
pub const BOOKING_WINDOW_DAYS: u64 = 90;

// Cyrillic or Latin letters, spaces and hyphens.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[А-Яа-яЁёA-Za-z\s-]+$").expect("name pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least {MIN_NAME_LEN} characters long")]
    NameTooShort,
    #[error("Name may only contain letters, spaces and hyphens")]
    NameBadCharacters,
    #[error("Pick a travel date")]
    DateMissing,
    #[error("The travel date cannot be in the past")]
    DateInPast,
    #[error("Bookings open at most {BOOKING_WINDOW_DAYS} days ahead")]
    DateTooFar,
    #[error("Select a country first")]
    CountryMissing,
    #[error("Enter a phone number")]
    PhoneEmpty,
    #[error("The phone number is too short")]
    PhoneTooShort,
    #[error("Unknown operator code for {0}")]
    PhoneBadOperator(String),
    #[error("Ticket count must be between {MIN_TICKETS} and {MAX_TICKETS}")]
    TicketCountOutOfRange,
}

/// Trimmed length >= 3 and letters/spaces/hyphens only (Cyrillic or Latin).
pub fn passenger_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return Err(ValidationError::NameBadCharacters);
    }
    Ok(())
}

/// Within [today, today + 90 days], both ends inclusive.
pub fn travel_date(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date < today {
        return Err(ValidationError::DateInPast);
    }
    let horizon = today
        .checked_add_days(Days::new(BOOKING_WINDOW_DAYS))
        .unwrap_or(today);
    if date > horizon {
        return Err(ValidationError::DateTooFar);
    }
    Ok(())
}

/// Digits only, length >= 9, prefix matching one of the country's operator
/// codes.
pub fn phone(digits: &str, country: &Country) -> Result<(), ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::PhoneEmpty);
    }
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(ValidationError::PhoneTooShort);
    }
    let matches_operator = country
        .operator_codes
        .iter()
        .any(|code| digits.starts_with(code));
    if !matches_operator {
        return Err(ValidationError::PhoneBadOperator(country.name.to_string()));
    }
    Ok(())
}

pub fn ticket_count(count: u8) -> Result<(), ValidationError> {
    if (MIN_TICKETS..=MAX_TICKETS).contains(&count) {
        Ok(())
    } else {
        Err(ValidationError::TicketCountOutOfRange)
    }
}

/// Strip everything but ASCII digits from raw phone input.
#[must_use]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_rules_from_booking_form() {
        assert_eq!(passenger_name("Al"), Err(ValidationError::NameTooShort));
        assert_eq!(passenger_name("Ann Lee"), Ok(()));
        assert_eq!(
            passenger_name("Ann123"),
            Err(ValidationError::NameBadCharacters)
        );
        assert_eq!(passenger_name("Анна-Мария"), Ok(()));
        assert_eq!(passenger_name("  Jo "), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn date_window_is_inclusive_on_both_ends() {
        let today = date(2026, 8, 26);
        assert_eq!(travel_date(today, today), Ok(()));
        assert_eq!(
            travel_date(date(2026, 8, 25), today),
            Err(ValidationError::DateInPast)
        );
        // Day 90 is the last bookable day; day 91 is out.
        assert_eq!(travel_date(date(2026, 11, 24), today), Ok(()));
        assert_eq!(
            travel_date(date(2026, 11, 25), today),
            Err(ValidationError::DateTooFar)
        );
    }

    #[test]
    fn phone_rules_for_belarus() {
        let by = countries::by_code("BY").unwrap();
        assert_eq!(phone("291234567", by), Ok(()));
        assert!(matches!(
            phone("111234567", by),
            Err(ValidationError::PhoneBadOperator(_))
        ));
        assert_eq!(phone("2912345", by), Err(ValidationError::PhoneTooShort));
        assert_eq!(phone("", by), Err(ValidationError::PhoneEmpty));
    }

    #[test]
    fn ticket_count_bounds() {
        assert_eq!(ticket_count(0), Err(ValidationError::TicketCountOutOfRange));
        assert_eq!(ticket_count(1), Ok(()));
        assert_eq!(ticket_count(10), Ok(()));
        assert_eq!(
            ticket_count(11),
            Err(ValidationError::TicketCountOutOfRange)
        );
    }

    #[test]
    fn digits_only_strips_formatting() {
        assert_eq!(digits_only("+375 29 123-45-67"), "375291234567");
        assert_eq!(digits_only("abc"), "");
    }
}
