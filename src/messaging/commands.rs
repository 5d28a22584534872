/// Actions requested by screens
///
/// Screens never touch wizard state. They hand one of these to
/// `BookingWizard::dispatch`, which routes it to the matching transition.
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectService(String),
    SelectDate(NaiveDate),
    SelectTime(String),
    SelectSpecialist(String),
    Confirm,
    Edit,
    BookAnother,
}

impl Action {
    /// Get a human-readable description of the action
    pub fn description(&self) -> String {
        match self {
            Action::SelectService(id) => format!("Select service '{}'", id),
            Action::SelectDate(date) => format!("Select date {}", date),
            Action::SelectTime(slot) => format!("Select time {}", slot),
            Action::SelectSpecialist(id) => format!("Select specialist '{}'", id),
            Action::Confirm => "Confirm booking".to_string(),
            Action::Edit => "Edit booking".to_string(),
            Action::BookAnother => "Book another".to_string(),
        }
    }
}
