/// Wizard state
///
/// Everything the booking flow has collected so far. Only `BookingWizard`
/// mutates it; everyone else reads a snapshot.

use chrono::NaiveDate;

use super::steps::{Direction, WizardStep};

/// Shown when the user never picked a time
pub const PLACEHOLDER_TIME: &str = "10:00 AM";

/// Wizard state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub(super) step: WizardStep,
    pub(super) service: Option<String>,
    pub(super) date: Option<NaiveDate>,
    pub(super) time: Option<String>,
    pub(super) specialist: Option<String>,
    pub(super) confirmed: bool,
    pub(super) direction: Direction,
}

impl WizardState {
    /// Create a fresh state on the service step
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn specialist(&self) -> Option<&str> {
        self.specialist.as_deref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Time to show on review and confirmation screens
    pub fn display_time(&self) -> &str {
        self.time.as_deref().unwrap_or(PLACEHOLDER_TIME)
    }

    /// Check if everything needed to confirm has been chosen
    pub fn is_complete(&self) -> bool {
        self.service.is_some() && self.date.is_some() && self.specialist.is_some()
    }

    /// Get completion progress (0.0-1.0)
    pub fn progress(&self) -> f32 {
        if self.confirmed {
            return 1.0;
        }
        self.step.index() as f32 / WizardStep::total_steps() as f32
    }

    /// Clear every selection and go back to the first step
    pub(super) fn reset(&mut self) {
        *self = Self {
            direction: Direction::Backward,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wizard_state() {
        let state = WizardState::new();
        assert_eq!(state.step(), WizardStep::Service);
        assert!(state.service().is_none());
        assert!(state.date().is_none());
        assert!(state.time().is_none());
        assert!(state.specialist().is_none());
        assert!(!state.is_confirmed());
        assert_eq!(state.direction(), Direction::Still);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_display_time_placeholder() {
        let mut state = WizardState::new();
        assert_eq!(state.display_time(), "10:00 AM");

        state.time = Some("15:00".to_string());
        assert_eq!(state.display_time(), "15:00");
    }

    #[test]
    fn test_is_complete_ignores_time() {
        let mut state = WizardState::new();
        state.service = Some("spa".to_string());
        state.date = NaiveDate::from_ymd_opt(2026, 10, 20);
        assert!(!state.is_complete());

        state.specialist = Some("emma".to_string());
        assert!(state.is_complete());
    }

    #[test]
    fn test_reset() {
        let mut state = WizardState::new();
        state.step = WizardStep::Review;
        state.service = Some("yoga".to_string());
        state.time = Some("11:00".to_string());
        state.confirmed = true;

        state.reset();
        assert_eq!(state.step(), WizardStep::Service);
        assert!(state.service().is_none());
        assert!(state.time().is_none());
        assert!(!state.is_confirmed());
        assert_eq!(state.direction(), Direction::Backward);
    }
}
