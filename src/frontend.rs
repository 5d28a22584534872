/// Terminal frontend
///
/// Draws the current screen as text and feeds typed lines back into the
/// wizard. It is a rendering collaborator only: all booking decisions stay
/// in `BookingWizard`.

use std::io::{BufRead, Write};

use crate::decoration::{DecorationGenerator, Sparkle};
use crate::messaging::Notification;
use crate::theme::{ThemeMode, ThemePalette};
use crate::view::{self, progress, screens, RenderContext};
use crate::wizard::{BookingWizard, Clock, Screen, Transition};

const SPARKLE_WIDTH: usize = 48;

pub struct Frontend<C: Clock> {
    wizard: BookingWizard<C>,
    theme: ThemeMode,
    decorations: DecorationGenerator,
    sparkle_count: usize,
    testimonial_index: usize,
    tip_index: usize,
    color: bool,
}

impl<C: Clock> Frontend<C> {
    pub fn new(wizard: BookingWizard<C>, theme: ThemeMode, decorations: DecorationGenerator) -> Self {
        Self {
            wizard,
            theme,
            decorations,
            sparkle_count: crate::decoration::DEFAULT_SPARKLE_COUNT,
            testimonial_index: 0,
            tip_index: 0,
            color: false,
        }
    }

    pub fn with_sparkle_count(mut self, count: usize) -> Self {
        self.sparkle_count = count;
        self
    }

    /// Emit ANSI colors from the theme palette
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn wizard(&self) -> &BookingWizard<C> {
        &self.wizard
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> std::io::Result<()> {
        self.draw(out)?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();

            match command {
                "quit" | "q" | "exit" => break,
                "help" | "?" => {
                    self.draw_help(out)?;
                    continue;
                }
                "tip" => {
                    self.draw_tip(out)?;
                    continue;
                }
                _ => {}
            }

            if let Some(mode) = command.strip_prefix("theme ") {
                match mode.parse::<ThemeMode>() {
                    Ok(mode) => {
                        tracing::info!(theme = %mode, "Theme changed");
                        self.theme = mode;
                        self.draw(out)?;
                    }
                    Err(message) => writeln!(out, "  ✗ {}", message)?,
                }
                continue;
            }

            let screen = self.wizard.current_screen();
            match screens::interpret(screen, command) {
                Ok(action) => {
                    let transition = self.wizard.dispatch(action);
                    self.show_transition(&transition, screen, out)?;
                }
                Err(err) => writeln!(out, "  ✗ {}", err)?,
            }
        }

        tracing::info!("Frontend closed");
        Ok(())
    }

    fn palette(&self) -> ThemePalette {
        self.theme.palette()
    }

    fn paint(&self, color: u32, text: &str) -> String {
        if self.color {
            ThemePalette::paint(color, text)
        } else {
            text.to_string()
        }
    }

    fn show_transition<W: Write>(
        &mut self,
        transition: &Transition,
        before: Screen,
        out: &mut W,
    ) -> std::io::Result<()> {
        match transition {
            Transition::Applied { notifications } => {
                for notification in notifications {
                    self.draw_notification(notification, out)?;
                }
                if self.wizard.current_screen() != before {
                    let sparkles = self.decorations.sparkles(self.sparkle_count);
                    writeln!(out, "{}", sparkle_line(&sparkles))?;
                    self.draw(out)?;
                }
            }
            Transition::Ignored { reason } => {
                writeln!(out, "  ✗ Not now: {}", reason)?;
            }
        }
        Ok(())
    }

    fn draw_notification<W: Write>(&self, n: &Notification, out: &mut W) -> std::io::Result<()> {
        tracing::debug!("Notification: {}", n.summary());
        writeln!(
            out,
            "  ┃ {}  {}",
            self.paint(self.palette().accent, &n.title),
            n.description
        )
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let palette = self.palette();
        let ctx = RenderContext::for_wizard(&self.wizard, palette);
        let state = self.wizard.state();
        let screen = view::render(state, &ctx);

        writeln!(out)?;
        let tracker = progress::progress_tracker(state);
        if !tracker.is_empty() {
            writeln!(out, "{}", self.paint(palette.secondary, &progress::tracker_line(&tracker)))?;
        }
        writeln!(out, "🧚 {}", progress::guide_message(state))?;
        writeln!(out)?;
        writeln!(out, "{}", self.paint(screen.accent, &screen.heading))?;
        writeln!(out, "{}", screen.subtitle)?;
        for line in &screen.lines {
            writeln!(out, "  {}", line)?;
        }
        for hint in &screen.hints {
            writeln!(out, "  › {}", hint)?;
        }

        if matches!(screen.screen, Screen::Service | Screen::Confirmation) {
            let testimonial = DecorationGenerator::testimonial(self.testimonial_index);
            self.testimonial_index += 1;
            let quote = self.decorations.quote();
            writeln!(out)?;
            writeln!(out, "  “{}” — {}", testimonial.text, testimonial.author)?;
            writeln!(out, "  {} — {}", self.paint(palette.primary, quote.text), quote.author)?;
        }
        Ok(())
    }

    fn draw_tip<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let tip = DecorationGenerator::tip(self.tip_index);
        self.tip_index += 1;
        writeln!(out, "  {} {}", self.paint(self.palette().accent, "✧ Wellness Guide:"), tip)
    }

    fn draw_help<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "  Commands: the hints under each screen, plus")?;
        writeln!(out, "  › theme calm|sunset|forest  switch colors")?;
        writeln!(out, "  › tip                       next wellness tip")?;
        writeln!(out, "  › help                      show this")?;
        writeln!(out, "  › quit                      leave")
    }
}

/// One text row with a sparkle at each particle's horizontal position
fn sparkle_line(sparkles: &[Sparkle]) -> String {
    let mut row = vec![' '; SPARKLE_WIDTH];
    for sparkle in sparkles {
        let column = ((sparkle.x / 100.0) * SPARKLE_WIDTH as f32) as usize;
        row[column.min(SPARKLE_WIDTH - 1)] = '✦';
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}
