//! The booking wizard's step state machine. The UI layer owns rendering and
//! the host-platform chrome; this type is the sole writer of the current step
//! and the in-progress form.

use crate::countries;
use crate::models::BookingForm;
use crate::validate;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Name,
    Date,
    Route,
    Tickets,
    Phone,
    Confirm,
}

impl WizardStep {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Date,
        Self::Route,
        Self::Tickets,
        Self::Phone,
        Self::Confirm,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|step| *step == self).unwrap_or(0)
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Name => "Passenger name",
            Self::Date => "Travel date",
            Self::Route => "Route",
            Self::Tickets => "Tickets",
            Self::Phone => "Contact phone",
            Self::Confirm => "Confirmation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    step: WizardStep,
    pub form: BookingForm,
    /// Set by the Tickets step once route reference data has loaded without
    /// error; advancing past Tickets requires it.
    route_loaded: bool,
}

impl BookingWizard {
    /// A fresh wizard at the Name step. The host profile name, when present,
    /// is applied exactly once here and never re-applied on later renders.
    #[must_use]
    pub fn new(prefill_name: Option<&str>) -> Self {
        let mut form = BookingForm::default();
        if let Some(name) = prefill_name {
            form.passenger_name = name.trim().to_string();
        }
        Self {
            step: WizardStep::Name,
            form,
            route_loaded: false,
        }
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether `step`'s owned fields currently pass validation.
    #[must_use]
    pub fn step_complete(&self, step: WizardStep, today: NaiveDate) -> bool {
        match step {
            WizardStep::Name => validate::passenger_name(&self.form.passenger_name).is_ok(),
            WizardStep::Date => self
                .form
                .travel_date
                .is_some_and(|date| validate::travel_date(date, today).is_ok()),
            WizardStep::Route => self.form.route_id.is_some(),
            WizardStep::Tickets => {
                self.route_loaded && validate::ticket_count(self.form.ticket_count).is_ok()
            }
            WizardStep::Phone => self
                .form
                .country_code
                .as_deref()
                .and_then(countries::by_code)
                .is_some_and(|country| {
                    validate::phone(&self.form.passenger_phone, country).is_ok()
                }),
            WizardStep::Confirm => true,
        }
    }

    /// Whether the active step allows advancing.
    #[must_use]
    pub fn can_advance(&self, today: NaiveDate) -> bool {
        self.step_complete(self.step, today)
    }

    /// Advance by one step; a no-op unless the active step is complete.
    /// Clamped at the Confirm step. Returns whether the step changed.
    pub fn next(&mut self, today: NaiveDate) -> bool {
        if !self.can_advance(today) {
            return false;
        }
        match WizardStep::from_index(self.step.index() + 1) {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step, clamped at Name. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        match self.step.index().checked_sub(1).and_then(WizardStep::from_index) {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Jump to an already-visited step. Skipping ahead is refused; jumping to
    /// the current step is an accepted no-op.
    pub fn go_to(&mut self, step: WizardStep) -> bool {
        if step > self.step {
            return false;
        }
        self.step = step;
        true
    }

    pub fn set_route_loaded(&mut self, loaded: bool) {
        self.route_loaded = loaded;
    }

    /// Label for the host platform's primary action button on the active step.
    #[must_use]
    pub const fn main_button_label(&self) -> &'static str {
        match self.step {
            WizardStep::Name | WizardStep::Date | WizardStep::Route | WizardStep::Tickets => {
                "Continue"
            }
            WizardStep::Phone => "Confirm phone",
            WizardStep::Confirm => "Book tickets",
        }
    }

    /// The host back button is hidden only on the first step.
    #[must_use]
    pub fn shows_back_button(&self) -> bool {
        self.step != WizardStep::Name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    fn filled_wizard() -> BookingWizard {
        let mut wizard = BookingWizard::new(None);
        wizard.form.passenger_name = "Ann Lee".into();
        wizard.form.travel_date = Some(today());
        wizard.form.route_id = Some("minsk-vilnius".into());
        wizard.form.ticket_count = 2;
        wizard.set_route_loaded(true);
        wizard.form.country_code = Some("BY".into());
        wizard.form.passenger_phone = "291234567".into();
        wizard
    }

    #[test]
    fn prefilled_name_is_applied_once_at_construction() {
        let wizard = BookingWizard::new(Some("  Ann Lee "));
        assert_eq!(wizard.form.passenger_name, "Ann Lee");
        assert!(BookingWizard::new(None).form.passenger_name.is_empty());
    }

    #[test]
    fn next_is_a_noop_while_the_active_step_is_invalid() {
        let mut wizard = BookingWizard::new(None);
        assert!(!wizard.next(today()));
        assert_eq!(wizard.step(), WizardStep::Name);

        wizard.form.passenger_name = "Ann Lee".into();
        assert!(wizard.next(today()));
        assert_eq!(wizard.step(), WizardStep::Date);
    }

    #[test]
    fn next_clamps_at_the_confirm_step() {
        let mut wizard = filled_wizard();
        for _ in 0..10 {
            wizard.next(today());
        }
        assert_eq!(wizard.step(), WizardStep::Confirm);
        assert!(!wizard.next(today()));
        assert_eq!(wizard.step(), WizardStep::Confirm);
    }

    #[test]
    fn back_clamps_at_the_name_step() {
        let mut wizard = BookingWizard::new(None);
        assert!(!wizard.back());
        assert_eq!(wizard.step(), WizardStep::Name);

        wizard.form.passenger_name = "Ann Lee".into();
        wizard.next(today());
        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::Name);
    }

    #[test]
    fn go_to_only_reaches_visited_steps() {
        let mut wizard = filled_wizard();
        wizard.next(today());
        wizard.next(today());
        assert_eq!(wizard.step(), WizardStep::Route);

        assert!(!wizard.go_to(WizardStep::Phone));
        assert_eq!(wizard.step(), WizardStep::Route);

        assert!(wizard.go_to(WizardStep::Name));
        assert_eq!(wizard.step(), WizardStep::Name);
    }

    #[test]
    fn go_to_current_step_is_an_accepted_noop() {
        let mut wizard = filled_wizard();
        wizard.next(today());
        let before = wizard.clone();
        assert!(wizard.go_to(WizardStep::Date));
        assert_eq!(wizard, before);
    }

    #[test]
    fn tickets_step_requires_loaded_route_data() {
        let mut wizard = filled_wizard();
        wizard.set_route_loaded(false);
        assert!(!wizard.step_complete(WizardStep::Tickets, today()));
        wizard.set_route_loaded(true);
        assert!(wizard.step_complete(WizardStep::Tickets, today()));
    }

    #[test]
    fn phone_step_requires_a_known_country() {
        let mut wizard = filled_wizard();
        wizard.form.country_code = None;
        assert!(!wizard.step_complete(WizardStep::Phone, today()));
        wizard.form.country_code = Some("BY".into());
        wizard.form.passenger_phone = "111234567".into();
        assert!(!wizard.step_complete(WizardStep::Phone, today()));
    }

    #[test]
    fn back_button_hidden_only_on_the_first_step() {
        let mut wizard = filled_wizard();
        assert!(!wizard.shows_back_button());
        wizard.next(today());
        assert!(wizard.shows_back_button());
    }

    #[test]
    fn main_button_label_changes_on_the_last_steps() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.main_button_label(), "Continue");
        for _ in 0..5 {
            wizard.next(today());
        }
        assert_eq!(wizard.step(), WizardStep::Confirm);
        assert_eq!(wizard.main_button_label(), "Book tickets");
    }
}
