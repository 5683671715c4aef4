//! Output formatting helpers for the `pb` CLI.
//!
//! Provides JSON output and the JSON view of the board.

use board_core::project::{Project, ProjectStatus, filter_by_status};
use serde::Serialize;
use std::io::{self, Write};

/// JSON view of one project.
///
/// `people_count` is serialized as `people`, `status` as a lowercase string.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: String,
}

impl ProjectView {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            description: project.description().to_string(),
            people: project.people_count(),
            status: project.status().as_str().to_string(),
        }
    }
}

/// JSON view of the whole board: one array per column, in store order.
#[derive(Debug, Serialize)]
pub struct BoardView {
    pub active: Vec<ProjectView>,
    pub finished: Vec<ProjectView>,
}

impl BoardView {
    pub fn from_projects(projects: &[Project]) -> Self {
        let column = |status: ProjectStatus| -> Vec<ProjectView> {
            filter_by_status(projects, status)
                .iter()
                .map(ProjectView::from_project)
                .collect()
        };
        Self {
            active: column(ProjectStatus::Active),
            finished: column(ProjectStatus::Finished),
        }
    }
}

/// Print a value as pretty JSON to stdout.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}
