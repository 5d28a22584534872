//! Screen rendering
//!
//! Screens are pure functions from a state snapshot to a `ScreenView`. They
//! never mutate the wizard; user input comes back as an `Action`.

pub mod progress;
pub mod screens;

use chrono::{Datelike, NaiveDate};

use crate::theme::ThemePalette;
use crate::wizard::{BookingWizard, Clock, Screen, WizardState};

pub use progress::{guide_message, progress_tracker, tracker_line, StepMarker, TrackerEntry};

/// Everything a screen needs besides the state
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub palette: ThemePalette,
    pub today: NaiveDate,
    /// First and last bookable dates
    pub bookable: (NaiveDate, NaiveDate),
}

impl RenderContext {
    pub fn for_wizard<C: Clock>(wizard: &BookingWizard<C>, palette: ThemePalette) -> Self {
        Self {
            palette,
            today: wizard.today(),
            bookable: wizard.bookable_range(),
        }
    }
}

/// What a frontend draws for one screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub screen: Screen,
    pub heading: String,
    pub subtitle: String,
    pub lines: Vec<String>,
    /// Inputs the screen accepts, e.g. `"1-4  choose a service"`
    pub hints: Vec<String>,
    pub accent: u32,
}

/// Render whichever screen `state` is on
pub fn render(state: &WizardState, ctx: &RenderContext) -> ScreenView {
    match Screen::for_state(state) {
        Screen::Service => screens::service(state, ctx),
        Screen::Date => screens::date(state, ctx),
        Screen::Specialist => screens::specialist(state, ctx),
        Screen::Review => screens::review(state, ctx),
        Screen::Confirmation => screens::confirmation(state, ctx),
    }
}

/// Long date form, e.g. "Wednesday, October 21st, 2026"
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}{}, {}",
        date.format("%A"),
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
