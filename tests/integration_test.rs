// Integration tests for Serene Steps
// These drive a whole booking through the public API

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serene_steps::decoration::DecorationGenerator;
use serene_steps::frontend::Frontend;
use serene_steps::messaging::{Action, NotificationKind};
use serene_steps::theme::ThemeMode;
use serene_steps::view::{self, RenderContext};
use serene_steps::wizard::{BookingWizard, Direction, FixedClock, Screen, WizardStep};
use serene_steps::available_slots;
use std::io::Cursor;

/// A Friday
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn next(weekday: Weekday) -> NaiveDate {
    let mut date = today().succ_opt().unwrap();
    while date.weekday() != weekday {
        date = date.succ_opt().unwrap();
    }
    date
}

#[test]
fn test_full_booking_round_trip() {
    let mut wizard = BookingWizard::with_clock(FixedClock(today()));

    let mut kinds = Vec::new();
    for action in [
        Action::SelectService("yoga".to_string()),
        Action::SelectDate(next(Weekday::Sun)),
        Action::SelectTime("11:00".to_string()),
        Action::SelectSpecialist("michael".to_string()),
        Action::Confirm,
    ] {
        let transition = wizard.dispatch(action);
        assert!(transition.is_applied());
        kinds.extend(transition.notifications().iter().map(|n| n.kind));
    }

    assert_eq!(
        kinds,
        [
            NotificationKind::ServiceChosen,
            NotificationKind::DateChosen,
            NotificationKind::TimeChosen,
            NotificationKind::SpecialistChosen,
            NotificationKind::BookingConfirmed,
        ]
    );
    assert_eq!(wizard.current_screen(), Screen::Confirmation);
    assert_eq!(wizard.display_time(), "11:00");

    let ctx = RenderContext::for_wizard(&wizard, ThemeMode::Calm.palette());
    let screen = view::render(wizard.state(), &ctx);
    assert!(screen.lines.iter().any(|l| l.contains("Yoga Session")));
    assert!(screen.lines.iter().any(|l| l.contains("Michael Chen")));

    wizard.book_another();
    assert_eq!(wizard.current_step(), WizardStep::Service);
    assert!(wizard.state().service().is_none());
    assert!(!wizard.is_confirmed());
}

#[test]
fn test_edit_from_review_preserves_choices() {
    let mut wizard = BookingWizard::with_clock(FixedClock(today()));
    let date = today().checked_add_days(Days::new(10)).unwrap();
    wizard.select_service("spa");
    wizard.select_date(date);
    wizard.select_specialist("emma");

    wizard.edit();
    assert_eq!(wizard.current_step(), WizardStep::Service);
    assert_eq!(wizard.state().direction(), Direction::Backward);
    assert_eq!(wizard.state().service(), Some("spa"));
    assert_eq!(wizard.state().date(), Some(date));
    assert_eq!(wizard.state().specialist(), Some("emma"));

    // Confirming straight from the service screen still works: all fields are set
    assert!(wizard.confirm().is_applied());
}

#[test]
fn test_weekend_slot_rules() {
    assert_eq!(
        available_slots(Some(next(Weekday::Sun))),
        ["10:00", "11:00", "14:00", "15:00", "17:00"]
    );
    assert_eq!(
        available_slots(Some(next(Weekday::Sat))),
        ["10:00", "12:00", "15:00", "17:00"]
    );
    assert_eq!(available_slots(Some(next(Weekday::Wed))).len(), 8);
    assert!(available_slots(None).is_empty());
}

#[test]
fn test_terminal_session() {
    let wizard = BookingWizard::with_clock(FixedClock(today()));
    let mut frontend = Frontend::new(wizard, ThemeMode::Forest, DecorationGenerator::seeded(5));

    let script = "4\n2026-10-21\n3\nconfirm\nquit\n";
    let mut out = Vec::new();
    frontend.run(Cursor::new(script), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Meditation Circle Selected"));
    assert!(output.contains("Booking Summary"));
    assert!(output.contains("Booking Confirmed!"));
    assert!(output.contains("Sarah Williams"));
    assert!(output.contains("10:00 AM"));
    assert!(frontend.wizard().is_confirmed());
}
