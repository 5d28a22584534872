//! Progress tracker and guide messages shown around every screen.

use crate::catalog;
use crate::wizard::{WizardState, WizardStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Done,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerEntry {
    pub label: &'static str,
    pub marker: StepMarker,
}

/// Step labels with their state; hidden (empty) once the booking is confirmed
pub fn progress_tracker(state: &WizardState) -> Vec<TrackerEntry> {
    if state.is_confirmed() {
        return Vec::new();
    }

    let current = state.step();
    WizardStep::all_steps()
        .into_iter()
        .map(|step| TrackerEntry {
            label: step.label(),
            marker: match step.cmp(&current) {
                std::cmp::Ordering::Less => StepMarker::Done,
                std::cmp::Ordering::Equal => StepMarker::Current,
                std::cmp::Ordering::Greater => StepMarker::Upcoming,
            },
        })
        .collect()
}

/// One-line tracker, e.g. `✓ Path ─ ◉ Date ─ ○ Guide ─ ○ Review`
pub fn tracker_line(entries: &[TrackerEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let symbol = match entry.marker {
                StepMarker::Done => "✓",
                StepMarker::Current => "◉",
                StepMarker::Upcoming => "○",
            };
            format!("{} {}", symbol, entry.label)
        })
        .collect::<Vec<_>>()
        .join(" ─ ")
}

/// What the guide character says on the current screen
pub fn guide_message(state: &WizardState) -> &'static str {
    if state.is_confirmed() {
        return "Your journey awaits! I'll be your guide to wellness.";
    }

    match state.step() {
        WizardStep::Service => "Choose your path to wellness...",
        WizardStep::Date => state
            .service()
            .and_then(catalog::find_service)
            .map(|s| s.guide_hint)
            .unwrap_or("Pick a day that feels right for you."),
        WizardStep::Specialist => "Pick a guide for your journey!",
        WizardStep::Review => "Almost there! Review your magical journey.",
    }
}
