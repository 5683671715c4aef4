//! Ayu color theme and styling functions for board output.
//!
//! Uses the Ayu Dark color palette for consistent terminal styling.
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Design principles:
//! - Active projects use standard text; finished ones are dimmed
//! - Headers are accent-colored, ids and metadata are muted
//! - Small Unicode symbols for icons, NOT emoji blobs

use board_core::project::{Project, ProjectStatus};
use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

const STATUS_FINISHED: (u8, u8, u8) = (0x80, 0x90, 0xa0); // #8090a0 - dimmed

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

/// Active status icon (hollow circle -- still being worked on).
pub const STATUS_ICON_ACTIVE: &str = "\u{25CB}";
/// Finished status icon (checkmark -- completed).
pub const STATUS_ICON_FINISHED: &str = "\u{2713}";

pub const ICON_PASS: &str = "\u{2713}";
pub const ICON_WARN: &str = "\u{26A0}";
pub const ICON_FAIL: &str = "\u{2716}";

pub const SEPARATOR_LIGHT: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

/// Applies truecolor foreground to a string, falling back to plain text
/// when color is not supported.
fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a category header in uppercase with accent color and bold.
pub fn render_category(s: &str) -> String {
    color_bold_str(&s.to_uppercase(), ACCENT)
}

/// Renders the light separator line in muted color.
pub fn render_separator() -> String {
    render_muted(SEPARATOR_LIGHT)
}

pub fn render_pass_icon() -> String {
    color_str(ICON_PASS, PASS)
}

pub fn render_warn_icon() -> String {
    color_str(ICON_WARN, WARN)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

// ---------------------------------------------------------------------------
// Status rendering
// ---------------------------------------------------------------------------

pub fn render_status_icon(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => STATUS_ICON_ACTIVE,
        ProjectStatus::Finished => STATUS_ICON_FINISHED,
    }
}

/// Returns the status icon, dimmed for finished projects.
pub fn render_status_icon_colored(status: ProjectStatus) -> String {
    let icon = render_status_icon(status);
    match status {
        ProjectStatus::Active => icon.to_string(),
        ProjectStatus::Finished => color_str(icon, STATUS_FINISHED),
    }
}

/// Renders a status name; only finished gets color.
pub fn render_status(status: ProjectStatus) -> String {
    match status {
        ProjectStatus::Active => status.as_str().to_string(),
        ProjectStatus::Finished => color_str(status.as_str(), STATUS_FINISHED),
    }
}

/// Renders an entire line in the finished/dimmed style.
pub fn render_finished_line(line: &str) -> String {
    color_str(line, STATUS_FINISHED)
}

// ---------------------------------------------------------------------------
// Compact project rendering
// ---------------------------------------------------------------------------

/// Renders a compact one-line project summary.
/// Format: `ICON ID Status - Title (n people)`
///
/// Finished projects are dimmed as a whole.
pub fn render_project_compact(project: &Project) -> String {
    let status = project.status();
    if status == ProjectStatus::Finished {
        let line = format!(
            "{} {} {} - {} ({})",
            render_status_icon(status),
            project.id(),
            status.as_str(),
            project.title(),
            project.persons(),
        );
        render_finished_line(&line)
    } else {
        format!(
            "{} {} {} - {} {}",
            render_status_icon_colored(status),
            render_muted(project.id()),
            render_status(status),
            render_bold(project.title()),
            render_muted(&format!("({})", project.persons())),
        )
    }
}
