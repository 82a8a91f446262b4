/*!
Logger setup for the binaries.

Everything goes to stderr; stdout is reserved for the benchmark's results.
*/
use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Environment variable holding the log level (`off`, `error`, `warn`,
/// `info`, `debug` or `trace`).
pub const LOG_ENV: &str = "WORDFREQ_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a level name; anything unrecognized falls back to `warn`.
pub fn level_from(setting: Option<&str>) -> LevelFilter {
    setting
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initialize the terminal logger at the level named by [`LOG_ENV`].
/// Does nothing if a logger has already been set.
pub fn initialize() {
    let setting = std::env::var(LOG_ENV).ok();
    let level = level_from(setting.as_deref());

    let _ = TermLogger::init(
        level,
        build_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
#[cfg(test)]
pub(crate) fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Never);
}
