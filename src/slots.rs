/// Time slot derivation
///
/// Bookable times are derived from the chosen date with a fixed weekday rule.
/// There is no availability source behind this; the same date always yields
/// the same slots.

use chrono::{Datelike, NaiveDate, Weekday};

/// Every slot offered on a regular weekday, in display order
pub const BASE_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
];

/// Get the slots offered on `date`
///
/// - No date: nothing is offered
/// - Sunday: every third slot is dropped (indices 0, 3, 6)
/// - Saturday: only odd indices are kept
/// - Any other day: the full base set
pub fn available_slots(date: Option<NaiveDate>) -> Vec<&'static str> {
    let Some(date) = date else {
        return Vec::new();
    };

    let keep: fn(usize) -> bool = match date.weekday() {
        Weekday::Sun => |i| i % 3 != 0,
        Weekday::Sat => |i| i % 2 != 0,
        _ => |_| true,
    };

    BASE_SLOTS
        .iter()
        .enumerate()
        .filter(|(i, _)| keep(*i))
        .map(|(_, slot)| *slot)
        .collect()
}

/// Check whether `slot` is offered on `date`
pub fn is_available(date: Option<NaiveDate>, slot: &str) -> bool {
    available_slots(date).iter().any(|s| *s == slot)
}
