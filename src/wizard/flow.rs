/// Wizard flow management
///
/// `BookingWizard` owns the booking state and is the only thing that mutates
/// it. Every operation returns a `Transition`: either applied, carrying the
/// notifications for the frontend, or ignored with the reason. Ignored
/// transitions leave the state untouched.

use chrono::{Days, Local, NaiveDate};

use super::state::WizardState;
use super::steps::{Direction, WizardStep};
use crate::messaging::{Action, Notification};
use crate::slots;

/// Default number of days ahead a date may be booked
pub const DEFAULT_HORIZON_DAYS: u64 = 60;

/// Source of "today" for date validation
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Screen the frontend should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Service,
    Date,
    Specialist,
    Review,
    Confirmation,
}

impl Screen {
    /// Screen matching a state snapshot
    pub fn for_state(state: &WizardState) -> Self {
        if state.is_confirmed() {
            return Screen::Confirmation;
        }
        match state.step() {
            WizardStep::Service => Screen::Service,
            WizardStep::Date => Screen::Date,
            WizardStep::Specialist => Screen::Specialist,
            WizardStep::Review => Screen::Review,
        }
    }
}

/// Result of a wizard operation
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// State changed
    Applied { notifications: Vec<Notification> },

    /// Precondition not met, nothing changed
    Ignored { reason: String },
}

impl Transition {
    fn applied(notification: Notification) -> Self {
        Transition::Applied {
            notifications: vec![notification],
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied { .. })
    }

    /// Notifications to present; empty for ignored transitions
    pub fn notifications(&self) -> &[Notification] {
        match self {
            Transition::Applied { notifications } => notifications,
            Transition::Ignored { .. } => &[],
        }
    }
}

/// Booking flow controller
pub struct BookingWizard<C: Clock = SystemClock> {
    state: WizardState,
    clock: C,
    horizon_days: u64,
}

impl BookingWizard<SystemClock> {
    /// Create a wizard that validates dates against the local calendar
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for BookingWizard<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BookingWizard<C> {
    /// Create a wizard with an explicit clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: WizardState::new(),
            clock,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    /// Change how far ahead dates may be booked
    pub fn with_horizon_days(mut self, days: u64) -> Self {
        self.horizon_days = days;
        self
    }

    /// Get wizard state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Get current step
    pub fn current_step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn current_screen(&self) -> Screen {
        Screen::for_state(&self.state)
    }

    /// Check if the booking is confirmed
    pub fn is_confirmed(&self) -> bool {
        self.state.is_confirmed()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// First and last bookable dates, both inclusive
    pub fn bookable_range(&self) -> (NaiveDate, NaiveDate) {
        let today = self.clock.today();
        let first = today.succ_opt().unwrap_or(today);
        let last = today
            .checked_add_days(Days::new(self.horizon_days))
            .unwrap_or(NaiveDate::MAX);
        (first, last)
    }

    /// Check whether `date` may be booked today
    pub fn is_bookable(&self, date: NaiveDate) -> bool {
        let today = self.clock.today();
        let (_, last) = self.bookable_range();
        date > today && date <= last
    }

    /// Slots offered on the chosen date
    pub fn available_slots(&self) -> Vec<&'static str> {
        slots::available_slots(self.state.date())
    }

    /// Time to display for the booking
    pub fn display_time(&self) -> &str {
        self.state.display_time()
    }

    /// Route a screen action to its transition
    pub fn dispatch(&mut self, action: Action) -> Transition {
        tracing::debug!("Dispatching: {}", action.description());
        match action {
            Action::SelectService(id) => self.select_service(&id),
            Action::SelectDate(date) => self.select_date(date),
            Action::SelectTime(slot) => self.select_time(&slot),
            Action::SelectSpecialist(id) => self.select_specialist(&id),
            Action::Confirm => self.confirm(),
            Action::Edit => self.edit(),
            Action::BookAnother => self.book_another(),
        }
    }

    /// Choose a service and move to the date step
    pub fn select_service(&mut self, id: &str) -> Transition {
        if self.state.confirmed {
            return self.ignore("booking already confirmed");
        }
        let id = id.trim();
        if id.is_empty() {
            return self.ignore("service id is empty");
        }

        self.state.service = Some(id.to_string());
        self.advance_to(WizardStep::Date);
        tracing::info!(service = id, "Service selected");
        Transition::applied(Notification::service_chosen(id))
    }

    /// Choose a date and move to the specialist step
    ///
    /// The date must fall after today and within the booking horizon. A time
    /// picked for an earlier date is dropped if the new date does not offer it.
    pub fn select_date(&mut self, date: NaiveDate) -> Transition {
        if self.state.confirmed {
            return self.ignore("booking already confirmed");
        }
        if !self.is_bookable(date) {
            let (first, last) = self.bookable_range();
            return self.ignore(format!("{} is outside {}..={}", date, first, last));
        }

        if let Some(time) = self.state.time.as_deref() {
            if !slots::is_available(Some(date), time) {
                tracing::debug!(time, %date, "Dropping time not offered on new date");
                self.state.time = None;
            }
        }

        self.state.date = Some(date);
        self.advance_to(WizardStep::Specialist);
        tracing::info!(%date, "Date selected");
        Transition::applied(Notification::date_chosen())
    }

    /// Choose a time on the selected date; the step does not change
    pub fn select_time(&mut self, slot: &str) -> Transition {
        if self.state.confirmed {
            return self.ignore("booking already confirmed");
        }
        let Some(date) = self.state.date else {
            return self.ignore("no date selected");
        };
        let slot = slot.trim();
        if !slots::is_available(Some(date), slot) {
            return self.ignore(format!("{} is not offered on {}", slot, date));
        }

        self.state.time = Some(slot.to_string());
        tracing::info!(time = slot, "Time selected");
        Transition::applied(Notification::time_chosen(slot))
    }

    /// Choose a specialist and move to the review step
    pub fn select_specialist(&mut self, id: &str) -> Transition {
        if self.state.confirmed {
            return self.ignore("booking already confirmed");
        }
        let id = id.trim();
        if id.is_empty() {
            return self.ignore("specialist id is empty");
        }

        self.state.specialist = Some(id.to_string());
        self.advance_to(WizardStep::Review);
        tracing::info!(specialist = id, "Specialist selected");
        Transition::applied(Notification::specialist_chosen())
    }

    /// Confirm the booking
    ///
    /// Needs a service, date and specialist. This only flips local state.
    pub fn confirm(&mut self) -> Transition {
        if self.state.confirmed {
            return self.ignore("booking already confirmed");
        }
        if !self.state.is_complete() {
            return self.ignore("service, date and specialist are required");
        }

        self.state.confirmed = true;
        tracing::info!(
            service = self.state.service(),
            date = ?self.state.date(),
            time = self.state.display_time(),
            specialist = self.state.specialist(),
            "Booking confirmed"
        );
        Transition::applied(Notification::booking_confirmed())
    }

    /// Go back to the service step keeping every selection
    pub fn edit(&mut self) -> Transition {
        if self.state.confirmed {
            return self.ignore("booking already confirmed");
        }

        self.state.step = WizardStep::Service;
        self.state.direction = Direction::Backward;
        tracing::info!("Editing booking");
        Transition::Applied {
            notifications: Vec::new(),
        }
    }

    /// Start over after a confirmed booking
    pub fn book_another(&mut self) -> Transition {
        if !self.state.confirmed {
            return self.ignore("booking not confirmed yet");
        }

        self.state.reset();
        tracing::info!("Wizard reset for another booking");
        Transition::applied(Notification::wizard_reset())
    }

    fn advance_to(&mut self, step: WizardStep) {
        self.state.step = step;
        self.state.direction = Direction::Forward;
    }

    fn ignore(&self, reason: impl Into<String>) -> Transition {
        let reason = reason.into();
        tracing::debug!(step = %self.state.step(), "Transition ignored: {}", reason);
        Transition::Ignored { reason }
    }
}
