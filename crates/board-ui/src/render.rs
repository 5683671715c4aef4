//! Renders the element tree as terminal text.
//!
//! Output is read back from the document, not from the store, so what is
//! printed is exactly what the views rendered.

use board_core::project::ProjectStatus;

use crate::dom::{Document, Element};
use crate::styles::{
    render_bold, render_category, render_finished_line, render_muted, render_separator,
    render_status_icon_colored,
};
use crate::terminal::terminal_width;

const ROW_INDENT: &str = "    ";

/// Renders every project column in the document, in page order.
pub fn render_document(document: &Document) -> String {
    let columns: Vec<String> = document
        .body()
        .query_selector_all(".projects")
        .iter()
        .map(render_column)
        .collect();
    columns.join("\n")
}

fn column_status(section: &Element) -> Option<ProjectStatus> {
    section
        .id()?
        .strip_suffix("-projects")
        .and_then(|s| s.parse().ok())
}

fn part_text(element: &Element, selector: &str) -> String {
    element
        .query_selector(selector)
        .map(|e| e.text())
        .unwrap_or_default()
}

/// Renders one `section.projects` column: header, separator, then one
/// three-line block per `<li>`.
fn render_column(section: &Element) -> String {
    let status = column_status(section);
    let rows = section
        .query_selector("ul")
        .map(|ul| ul.children())
        .unwrap_or_default();

    let mut lines = vec![
        format!(
            "{} {}",
            render_category(&part_text(section, "h2")),
            render_muted(&format!("({})", rows.len()))
        ),
        render_separator(),
    ];
    if rows.is_empty() {
        lines.push(format!("  {}", render_muted("(no projects)")));
    }

    let width = terminal_width().saturating_sub(ROW_INDENT.len()).max(20);
    for row in &rows {
        let icon = status
            .map(render_status_icon_colored)
            .unwrap_or_else(|| " ".to_string());
        let title = part_text(row, "h2");
        let title = if status == Some(ProjectStatus::Finished) {
            render_finished_line(&title)
        } else {
            render_bold(&title)
        };
        lines.push(format!(
            "  {} {} {}",
            icon,
            title,
            render_muted(&row.id().unwrap_or_default())
        ));
        lines.push(format!("{}{}", ROW_INDENT, render_muted(&part_text(row, "h3"))));
        lines.push(format!(
            "{}{}",
            ROW_INDENT,
            truncate(&part_text(row, "p"), width)
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Shortens `s` to at most `max` characters, ending in `...` when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
