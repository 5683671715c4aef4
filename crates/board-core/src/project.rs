//! The `Project` entity and its status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which column of the board a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Newly created projects start here.
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    /// Both statuses, in board column order.
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project status: {0} (expected 'active' or 'finished')")]
pub struct ParseStatusError(pub String);

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// A single project on the board.
///
/// Everything except `status` is fixed at creation. The status can only be
/// changed through [`crate::store::ProjectStore::move_project`], so copies
/// handed to listeners cannot be used to alter store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: String,
    title: String,
    description: String,
    people_count: u32,
    status: ProjectStatus,
}

impl Project {
    /// Creates a project in the given status.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            people_count,
            status,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people_count(&self) -> u32 {
        self.people_count
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    /// Human-readable assignee count: `"1 person"` or `"<n> people"`.
    pub fn persons(&self) -> String {
        persons_label(self.people_count)
    }
}

/// Pluralizes a people count. Only exactly one is singular.
pub fn persons_label(count: u32) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{} people", count)
    }
}

/// Returns the projects in `projects` with the given status, preserving order.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.status == status)
        .cloned()
        .collect()
}
