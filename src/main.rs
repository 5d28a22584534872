use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serene_steps::config::Config;
use serene_steps::decoration::DecorationGenerator;
use serene_steps::error::{AppResult, CliError, ConfigError};
use serene_steps::frontend::Frontend;
use serene_steps::theme::ThemeMode;
use serene_steps::wizard::BookingWizard;
use tracing_subscriber::filter::LevelFilter;

const LOG_TARGET_STARTUP: &str = "serene_steps::startup";

/// The screen is on stdout; keep stderr to problems only
const CONSOLE_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Command-line overrides for the stored config
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<PathBuf>,
    theme: Option<ThemeMode>,
    seed: Option<u64>,
}

impl CliArgs {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, CliError> {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args.next().ok_or(CliError::MissingValue("--config"))?;
                    parsed.config_path = Some(PathBuf::from(value));
                }
                "--theme" => {
                    let value = args.next().ok_or(CliError::MissingValue("--theme"))?;
                    let mode = value.parse().map_err(|reason| CliError::InvalidValue {
                        flag: "--theme",
                        value: value.clone(),
                        reason,
                    })?;
                    parsed.theme = Some(mode);
                }
                "--seed" => {
                    let value = args.next().ok_or(CliError::MissingValue("--seed"))?;
                    let seed = value.parse().map_err(|e: std::num::ParseIntError| {
                        CliError::InvalidValue {
                            flag: "--seed",
                            value: value.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                    parsed.seed = Some(seed);
                }
                _ => return Err(CliError::UnknownArgument(arg)),
            }
        }

        Ok(parsed)
    }

    /// The `--config` path, or the platform default
    fn resolve_config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }
}

/// Initialize tracing with file rotation
///
/// Logs are written to `<config dir>/SereneSteps/logs/serene-steps.YYYY-MM-DD.log`.
/// Debug builds also send warnings and errors to stderr.
fn initialize_tracing(default_level: &str) {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

    let log_dir = Config::app_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "serene-steps.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .with_filter(CONSOLE_LOG_LEVEL);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

fn log_runtime_environment(config: &Config, config_path: &Path) {
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting Serene Steps v{} on {} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Configuration file: {}",
        config_path.display()
    );
    tracing::debug!(
        target: LOG_TARGET_STARTUP,
        theme = %config.theme,
        horizon_days = config.booking_horizon_days,
        seed = ?config.decoration_seed,
        "Effective configuration"
    );
}

fn main() -> AppResult<()> {
    let args = CliArgs::parse(std::env::args().skip(1)).context("Invalid command line")?;

    // Loaded before tracing starts, so the path is logged afterwards
    let config_path = args
        .resolve_config_path()
        .context("Failed to locate configuration")?;
    let mut config = Config::load_from(&config_path).context("Failed to load configuration")?;

    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(seed) = args.seed {
        config.decoration_seed = Some(seed);
    }

    initialize_tracing(&config.log_level);
    log_runtime_environment(&config, &config_path);

    let wizard = BookingWizard::new().with_horizon_days(config.booking_horizon_days);
    let mut frontend = Frontend::new(
        wizard,
        config.theme,
        DecorationGenerator::new(config.decoration_seed),
    )
    .with_sparkle_count(config.sparkle_count)
    .with_color(io::stdout().is_terminal());

    println!("===========================================");
    println!("  Serene Steps - Wellness Booking");
    println!("  Type 'help' for commands, 'quit' to leave");
    println!("===========================================");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    frontend
        .run(stdin.lock(), &mut stdout)
        .context("Terminal I/O failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(CliArgs::parse(Vec::new()), Ok(CliArgs::default()));
    }

    #[test]
    fn test_parse_all_flags() {
        let parsed = CliArgs::parse(args(&["--theme", "forest", "--seed", "7", "--config", "/tmp/c.json"]))
            .unwrap();
        assert_eq!(parsed.theme, Some(ThemeMode::Forest));
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.config_path, Some(PathBuf::from("/tmp/c.json")));
    }

    #[test]
    fn test_config_path_prefers_flag() {
        let parsed = CliArgs::parse(args(&["--config", "/tmp/serene.json"])).unwrap();
        assert_eq!(
            parsed.resolve_config_path().unwrap(),
            PathBuf::from("/tmp/serene.json")
        );
    }

    #[test]
    fn test_console_logs_stay_quiet() {
        assert!(CONSOLE_LOG_LEVEL < LevelFilter::INFO);
        assert!(CONSOLE_LOG_LEVEL >= LevelFilter::WARN);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            CliArgs::parse(args(&["--theme"])),
            Err(CliError::MissingValue("--theme"))
        );
        assert!(matches!(
            CliArgs::parse(args(&["--seed", "abc"])),
            Err(CliError::InvalidValue { flag: "--seed", .. })
        ));
        assert_eq!(
            CliArgs::parse(args(&["--verbose"])),
            Err(CliError::UnknownArgument("--verbose".to_string()))
        );
    }
}
