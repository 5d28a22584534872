//! The five booking screens.
//!
//! Each screen renders a snapshot and interprets a line of user input as the
//! `Action` it would fire. Interpretation only checks shape (a known option
//! number, a parseable date); the wizard decides whether the action applies.

use chrono::NaiveDate;

use super::{long_date, RenderContext, ScreenView};
use crate::catalog::{self, SERVICES, SPECIALISTS};
use crate::error::InputError;
use crate::messaging::Action;
use crate::slots;
use crate::wizard::{Screen, WizardState, WizardStep};

fn marker(selected: bool) -> &'static str {
    if selected {
        "●"
    } else {
        "○"
    }
}

pub fn service(state: &WizardState, ctx: &RenderContext) -> ScreenView {
    let lines = SERVICES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{} {}. {} — {}",
                marker(state.service() == Some(s.id)),
                i + 1,
                s.title,
                s.description
            )
        })
        .collect();

    ScreenView {
        screen: Screen::Service,
        heading: WizardStep::Service.title().to_string(),
        subtitle: "Select the wellness journey that calls to you".to_string(),
        lines,
        hints: vec![format!("1-{}  choose a service", SERVICES.len())],
        accent: ctx.palette.primary,
    }
}

pub fn date(state: &WizardState, ctx: &RenderContext) -> ScreenView {
    let (first, last) = ctx.bookable;
    let mut lines = vec![
        format!(
            "Bookable: {} to {}",
            first.format("%b %-d, %Y"),
            last.format("%b %-d, %Y")
        ),
        format!("Today is {} and cannot be booked", ctx.today.format("%a %b %-d")),
    ];
    match state.date() {
        Some(date) => lines.push(format!("Selected: {}", long_date(date))),
        None => lines.push("Select a date".to_string()),
    }

    ScreenView {
        screen: Screen::Date,
        heading: WizardStep::Date.title().to_string(),
        subtitle: "Choose your preferred appointment date".to_string(),
        lines,
        hints: vec!["YYYY-MM-DD  pick a day".to_string()],
        accent: ctx.palette.primary,
    }
}

pub fn specialist(state: &WizardState, ctx: &RenderContext) -> ScreenView {
    let mut lines: Vec<String> = SPECIALISTS
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{} {}. {}, {} ★ {:.1} ({})",
                marker(state.specialist() == Some(s.id)),
                i + 1,
                s.name,
                s.title,
                s.rating,
                s.specialties.join(", ")
            )
        })
        .collect();

    let offered = slots::available_slots(state.date());
    if let Some(date) = state.date() {
        lines.push(String::new());
        lines.push(format!(
            "Available times for {}: {}",
            date.format("%A, %B %-d"),
            offered
                .iter()
                .map(|slot| {
                    if state.time() == Some(*slot) {
                        format!("[{}]", slot)
                    } else {
                        slot.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        ));
    }

    let mut hints = vec![format!("1-{}  choose a specialist", SPECIALISTS.len())];
    if !offered.is_empty() {
        hints.push("HH:MM  pick a time (optional)".to_string());
    }

    ScreenView {
        screen: Screen::Specialist,
        heading: WizardStep::Specialist.title().to_string(),
        subtitle: "Our team of certified professionals are here to guide you on your wellness journey"
            .to_string(),
        lines,
        hints,
        accent: ctx.palette.primary,
    }
}

fn detail_lines(state: &WizardState) -> Vec<String> {
    vec![
        format!(
            "Service:    {}",
            state
                .service()
                .map(catalog::service_name)
                .unwrap_or("No service selected")
        ),
        format!(
            "Date:       {}",
            state
                .date()
                .map(long_date)
                .unwrap_or_else(|| "No date selected".to_string())
        ),
        format!("Time:       {}", state.display_time()),
        format!(
            "Specialist: {}",
            state
                .specialist()
                .map(catalog::specialist_name)
                .unwrap_or("No specialist selected")
        ),
    ]
}

pub fn review(state: &WizardState, ctx: &RenderContext) -> ScreenView {
    let mut hints = vec!["edit  change your selections".to_string()];
    if state.is_complete() {
        hints.push("confirm  book it".to_string());
    }
    if state.date().is_some() {
        hints.push("HH:MM  pick a time (optional)".to_string());
    }

    ScreenView {
        screen: Screen::Review,
        heading: WizardStep::Review.title().to_string(),
        subtitle: "Review your appointment details".to_string(),
        lines: detail_lines(state),
        hints,
        accent: ctx.palette.primary,
    }
}

pub fn confirmation(state: &WizardState, ctx: &RenderContext) -> ScreenView {
    let mut lines = detail_lines(state);
    lines.push(String::new());
    lines.push(
        "A confirmation with all details and instructions is on its way to you.".to_string(),
    );

    ScreenView {
        screen: Screen::Confirmation,
        heading: "Booking Confirmed!".to_string(),
        subtitle: "Your wellness appointment has been successfully scheduled.".to_string(),
        lines,
        hints: vec!["again  book another appointment".to_string()],
        accent: ctx.palette.secondary,
    }
}

/// Turn a line typed on `screen` into the action it requests
pub fn interpret(screen: Screen, input: &str) -> Result<Action, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    match (screen, input.to_ascii_lowercase().as_str()) {
        (Screen::Review, "edit") => return Ok(Action::Edit),
        (Screen::Review, "confirm") => return Ok(Action::Confirm),
        (Screen::Confirmation, "again") => return Ok(Action::BookAnother),
        _ => {}
    }

    match screen {
        Screen::Service => pick(input, SERVICES.len())
            .map(|i| Action::SelectService(SERVICES[i].id.to_string())),
        Screen::Date => NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Action::SelectDate)
            .map_err(|_| InputError::BadDate(input.to_string())),
        Screen::Specialist | Screen::Review if looks_like_time(input) => {
            Ok(Action::SelectTime(input.to_string()))
        }
        Screen::Specialist => pick(input, SPECIALISTS.len())
            .map(|i| Action::SelectSpecialist(SPECIALISTS[i].id.to_string())),
        Screen::Review | Screen::Confirmation => Err(InputError::Unrecognized(input.to_string())),
    }
}

fn pick(input: &str, count: usize) -> Result<usize, InputError> {
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(InputError::BadOption {
            input: input.to_string(),
            count,
        }),
    }
}

fn looks_like_time(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePalette;
    use crate::wizard::{BookingWizard, FixedClock};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn setup() -> (BookingWizard<FixedClock>, RenderContext) {
        let wizard = BookingWizard::with_clock(FixedClock(today()));
        let ctx = RenderContext::for_wizard(&wizard, ThemePalette::default());
        (wizard, ctx)
    }

    #[test]
    fn test_service_screen_marks_selection() {
        let (mut wizard, ctx) = setup();
        wizard.select_service("yoga");
        wizard.edit();

        let view = service(wizard.state(), &ctx);
        assert_eq!(view.lines.len(), 4);
        assert!(view.lines[1].starts_with("● 2. Yoga Session"));
        assert!(view.lines[0].starts_with("○ 1. Spa Treatment"));
    }

    #[test]
    fn test_date_screen_shows_window() {
        let (wizard, ctx) = setup();
        let view = date(wizard.state(), &ctx);
        assert_eq!(view.lines[0], "Bookable: Oct 17, 2026 to Dec 15, 2026");
        assert_eq!(view.lines[1], "Today is Fri Oct 16 and cannot be booked");
        assert_eq!(view.lines[2], "Select a date");
    }

    #[test]
    fn test_specialist_screen_lists_slots() {
        let (mut wizard, ctx) = setup();
        wizard.select_service("spa");
        // Saturday
        wizard.select_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        wizard.select_time("12:00");

        let view = specialist(wizard.state(), &ctx);
        let slots_line = view.lines.last().unwrap();
        assert!(slots_line.contains("10:00  [12:00]  15:00  17:00"));
        assert!(view.hints.iter().any(|h| h.starts_with("HH:MM")));
    }

    #[test]
    fn test_review_screen_uses_catalog_names() {
        let (mut wizard, ctx) = setup();
        wizard.select_service("therapy");
        wizard.select_date(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        wizard.select_specialist("sarah");

        let view = review(wizard.state(), &ctx);
        assert_eq!(view.lines[0], "Service:    Therapy Session");
        assert_eq!(view.lines[1], "Date:       Wednesday, October 21st, 2026");
        assert_eq!(view.lines[2], "Time:       10:00 AM");
        assert_eq!(view.lines[3], "Specialist: Sarah Williams");
        assert!(view.hints.iter().any(|h| h.starts_with("confirm")));
    }

    #[test]
    fn test_confirmation_shows_chosen_specialist() {
        let (mut wizard, ctx) = setup();
        wizard.select_service("meditation");
        wizard.select_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        wizard.select_specialist("david");
        wizard.confirm();

        let view = confirmation(wizard.state(), &ctx);
        assert_eq!(view.heading, "Booking Confirmed!");
        assert!(view.lines.iter().any(|l| l.contains("David Patel")));
        assert_eq!(view.accent, ctx.palette.secondary);
    }

    #[test]
    fn test_interpret_options() {
        assert_eq!(
            interpret(Screen::Service, "3"),
            Ok(Action::SelectService("therapy".to_string()))
        );
        assert_eq!(
            interpret(Screen::Specialist, " 2 "),
            Ok(Action::SelectSpecialist("michael".to_string()))
        );
        assert!(matches!(
            interpret(Screen::Service, "9"),
            Err(InputError::BadOption { count: 4, .. })
        ));
    }

    #[test]
    fn test_interpret_dates_and_times() {
        assert_eq!(
            interpret(Screen::Date, "2026-10-20"),
            Ok(Action::SelectDate(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()))
        );
        assert!(matches!(
            interpret(Screen::Date, "next tuesday"),
            Err(InputError::BadDate(_))
        ));
        assert_eq!(
            interpret(Screen::Review, "15:00"),
            Ok(Action::SelectTime("15:00".to_string()))
        );
    }

    #[test]
    fn test_interpret_keywords() {
        assert_eq!(interpret(Screen::Review, "Confirm"), Ok(Action::Confirm));
        assert_eq!(interpret(Screen::Review, "edit"), Ok(Action::Edit));
        assert_eq!(interpret(Screen::Confirmation, "again"), Ok(Action::BookAnother));
        assert_eq!(interpret(Screen::Service, ""), Err(InputError::Empty));
        assert!(matches!(
            interpret(Screen::Confirmation, "confirm"),
            Err(InputError::Unrecognized(_))
        ));
    }
}
