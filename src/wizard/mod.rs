/// Booking wizard module
///
/// Walks the user through choosing a wellness session.
///
/// ## Architecture
///
/// ```text
/// BookingWizard
///   ├── WizardState (selections, confirmed flag, direction)
///   ├── WizardStep (Service → Date → Specialist → Review)
///   └── Transitions (select_*, confirm, edit, book_another)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use wizard::{BookingWizard, Screen};
///
/// let mut flow = BookingWizard::new();
///
/// match flow.current_screen() {
///     Screen::Service => {
///         // Render service cards
///     }
///     Screen::Confirmation => {
///         // Render the confirmed booking
///     }
///     // ... other screens
///     _ => {}
/// }
///
/// let transition = flow.select_service("spa");
/// ```
///
/// ## Steps
///
/// 1. **Service** - Pick a wellness service
/// 2. **Date** - Pick a day within the booking window (and optionally a time)
/// 3. **Specialist** - Pick who runs the session
/// 4. **Review** - Confirm, or go back and edit
///
/// Confirming ends the flow until the user books another session.

pub mod flow;
pub mod state;
pub mod steps;

// Re-export commonly used types
pub use flow::{BookingWizard, Clock, FixedClock, Screen, SystemClock, Transition, DEFAULT_HORIZON_DAYS};
pub use state::{WizardState, PLACEHOLDER_TIME};
pub use steps::{Direction, WizardStep};
