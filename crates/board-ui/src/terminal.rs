//! Terminal detection utilities.
//!
//! Provides functions to detect TTY status, terminal width, and color
//! support.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Returns the terminal width in columns, defaulting to 80 if detection fails.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _rows)| cols as usize)
        .unwrap_or(80)
}

/// Turns color off for the rest of the process, regardless of environment.
///
/// Used when `display.color` is `false` in the board config.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Determines if ANSI color codes should be used.
///
/// Respects standard conventions:
/// - [`disable_color`] has been called: no color
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    color_choice(
        COLOR_DISABLED.load(Ordering::Relaxed),
        |name| env::var_os(name).map(|v| v.to_string_lossy().into_owned()),
        is_tty,
    )
}

/// The color decision behind [`supports_color`], with the override flag,
/// the environment and TTY detection passed in.
fn color_choice(
    disabled: bool,
    var: impl Fn(&str) -> Option<String>,
    tty: impl FnOnce() -> bool,
) -> bool {
    if disabled {
        return false;
    }

    // NO_COLOR standard -- any value disables color.
    if var("NO_COLOR").is_some() {
        return false;
    }

    if var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }

    if var("TERM").as_deref() == Some("dumb") {
        return false;
    }

    // CLICOLOR_FORCE forces color even in non-TTY.
    if var("CLICOLOR_FORCE").is_some() {
        return true;
    }

    tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_width_returns_positive() {
        // Even when not a TTY, we should get the default of 80.
        let width = terminal_width();
        assert!(width > 0);
    }

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn disabled_flag_wins_over_environment() {
        assert!(!color_choice(true, env(&[("CLICOLOR_FORCE", "1")]), || true));
        assert!(color_choice(false, env(&[("CLICOLOR_FORCE", "1")]), || false));
    }

    #[test]
    fn environment_conventions() {
        assert!(!color_choice(false, env(&[("NO_COLOR", "")]), || true));
        assert!(!color_choice(false, env(&[("CLICOLOR", "0")]), || true));
        assert!(!color_choice(false, env(&[("TERM", "dumb")]), || true));
        assert!(color_choice(false, env(&[("TERM", "xterm")]), || true));
        assert!(!color_choice(false, env(&[]), || false));
    }
}
