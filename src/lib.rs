//! Serene Steps: a wellness session booking wizard.
//!
//! The booking core is [`wizard::BookingWizard`], a small state machine
//! walking service → date → specialist → review → confirmation, and
//! [`slots::available_slots`], which derives bookable times from a date.
//! Everything else renders that state or configures the app around it.

pub mod catalog;
pub mod config;
pub mod decoration;
pub mod error;
pub mod frontend;
pub mod messaging;
pub mod slots;
pub mod theme;
pub mod view;
pub mod wizard;

pub use slots::available_slots;
pub use wizard::{BookingWizard, Screen, Transition, WizardState, WizardStep};
