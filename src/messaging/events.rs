/// Notifications emitted by wizard transitions
///
/// A transition never presents anything itself. It returns the notifications
/// that describe what happened and the frontend decides how to show them.
use std::time::Duration;

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    ServiceChosen,
    DateChosen,
    TimeChosen,
    SpecialistChosen,
    BookingConfirmed,
    WizardReset,
}

/// A toast-style notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    /// How long the frontend should keep it visible
    pub duration: Duration,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, description: &str, millis: u64) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            duration: Duration::from_millis(millis),
        }
    }

    /// Service picked; catalog services carry their own copy
    pub fn service_chosen(service_id: &str) -> Self {
        match crate::catalog::find_service(service_id) {
            Some(service) => Self::new(
                NotificationKind::ServiceChosen,
                service.toast_title,
                service.toast_message,
                3000,
            ),
            None => Self {
                kind: NotificationKind::ServiceChosen,
                title: "✨ Path Selected".to_string(),
                description: format!("You've chosen {}. Your journey begins!", service_id),
                duration: Duration::from_millis(3000),
            },
        }
    }

    pub fn date_chosen() -> Self {
        Self::new(
            NotificationKind::DateChosen,
            "🗓️ Date Chosen!",
            "You've selected a magical day for your journey.",
            2000,
        )
    }

    pub fn time_chosen(slot: &str) -> Self {
        Self {
            kind: NotificationKind::TimeChosen,
            title: "🕰️ Time Chosen!".to_string(),
            description: format!("Your session starts at {}.", slot),
            duration: Duration::from_millis(2000),
        }
    }

    pub fn specialist_chosen() -> Self {
        Self::new(
            NotificationKind::SpecialistChosen,
            "👤 Guide Selected!",
            "Your personal wellness guide is ready for your journey.",
            2000,
        )
    }

    pub fn booking_confirmed() -> Self {
        Self::new(
            NotificationKind::BookingConfirmed,
            "🎉 Journey Confirmed!",
            "Your wellness quest has been scheduled. Get ready for transformation!",
            4000,
        )
    }

    pub fn wizard_reset() -> Self {
        Self::new(
            NotificationKind::WizardReset,
            "🌱 New Journey",
            "Choose your next path to wellness.",
            2000,
        )
    }

    /// Get a single-line description for logs
    pub fn summary(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}
