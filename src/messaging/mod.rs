/// Messaging between screens and the wizard
///
/// Command/query separation for the booking flow:
/// - **Actions**: requests coming from a screen (imperative)
/// - **Notifications**: what a transition did (past tense, returned to the caller)
///
/// ## Architecture
///
/// ```text
/// ┌─────────┐     Action      ┌───────────────┐   Vec<Notification>   ┌──────────┐
/// │ Screen  │ ──────────────> │ BookingWizard │ ────────────────────> │ Frontend │
/// └─────────┘                 └───────────────┘                       └──────────┘
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let mut wizard = BookingWizard::new();
/// let transition = wizard.dispatch(Action::SelectService("spa".into()));
/// for notification in transition.notifications() {
///     println!("{}", notification.title);
/// }
/// ```

pub mod commands;
pub mod events;

// Re-export commonly used types
pub use commands::Action;
pub use events::{Notification, NotificationKind};
