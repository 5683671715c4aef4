//! Session scripts: one board action per line.
//!
//! ```text
//! # comments and blank lines are ignored
//! add Website relaunch | Rebuild the marketing site | 3
//! drag #1 finished
//! move prj-k3x9a2 active
//! list finished
//! show
//! ```
//!
//! `#n` refers to the n-th project created in this session (1-based).

use board_core::project::{ParseStatusError, ProjectStatus};
use thiserror::Error;

/// Errors found while parsing or running a script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}' (expected add, move, drag, show or list)")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: {source}")]
    BadStatus {
        line: usize,
        #[source]
        source: ParseStatusError,
    },

    #[error("line {line}: no project {reference} has been created yet")]
    UnknownProject { line: usize, reference: String },
}

/// How a script line names a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
    /// A literal project id.
    Id(String),
    /// The n-th project created in the session, 1-based.
    Created(usize),
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => f.write_str(id),
            Self::Created(n) => write!(f, "#{}", n),
        }
    }
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Fill the form with raw values and submit it.
    Add {
        title: String,
        description: String,
        people: String,
    },
    /// Change status through the store directly.
    Move {
        project: ProjectRef,
        status: ProjectStatus,
    },
    /// Change status by dragging the row onto a column.
    Drag {
        project: ProjectRef,
        status: ProjectStatus,
    },
    Show,
    List(Option<ProjectStatus>),
}

/// A step together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: Step,
}

/// Parses a whole script. Stops at the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut steps = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if let Some(step) = parse_line(line, raw)? {
            steps.push(ScriptLine { line, step });
        }
    }
    Ok(steps)
}

/// Parses one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: usize, raw: &str) -> Result<Option<Step>, ScriptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = trimmed
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((trimmed, ""));

    let step = match command.to_ascii_lowercase().as_str() {
        "add" => parse_add(line, rest)?,
        "move" => {
            let (project, status) = parse_transition(line, "move", rest)?;
            Step::Move { project, status }
        }
        "drag" => {
            let (project, status) = parse_transition(line, "drag", rest)?;
            Step::Drag { project, status }
        }
        "show" => {
            expect_no_args(line, "show", rest)?;
            Step::Show
        }
        "list" => {
            if rest.is_empty() {
                Step::List(None)
            } else {
                Step::List(Some(parse_status(line, rest)?))
            }
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };
    Ok(Some(step))
}

fn parse_add(line: usize, rest: &str) -> Result<Step, ScriptError> {
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [title, description, people] => Ok(Step::Add {
            title: title.to_string(),
            description: description.to_string(),
            people: people.to_string(),
        }),
        _ => Err(ScriptError::Malformed {
            line,
            reason: "expected 'add <title> | <description> | <people>'".into(),
        }),
    }
}

fn parse_transition(
    line: usize,
    command: &str,
    rest: &str,
) -> Result<(ProjectRef, ProjectStatus), ScriptError> {
    let words: Vec<&str> = rest.split_whitespace().collect();
    let [project, status] = words.as_slice() else {
        return Err(ScriptError::Malformed {
            line,
            reason: format!("expected '{} <id|#n> <active|finished>'", command),
        });
    };
    Ok((parse_ref(line, project)?, parse_status(line, status)?))
}

fn parse_ref(line: usize, word: &str) -> Result<ProjectRef, ScriptError> {
    let Some(index) = word.strip_prefix('#') else {
        return Ok(ProjectRef::Id(word.to_string()));
    };
    match index.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(ProjectRef::Created(n)),
        _ => Err(ScriptError::Malformed {
            line,
            reason: format!("'{}' is not a project number (use #1, #2, ...)", word),
        }),
    }
}

fn parse_status(line: usize, word: &str) -> Result<ProjectStatus, ScriptError> {
    word.parse()
        .map_err(|source| ScriptError::BadStatus { line, source })
}

fn expect_no_args(line: usize, command: &str, rest: &str) -> Result<(), ScriptError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::Malformed {
            line,
            reason: format!("'{}' takes no arguments", command),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_blank_lines_and_comments() {
        let steps = parse_script("\n  # heading\n\nshow\n   \n").unwrap();
        assert_eq!(steps, vec![ScriptLine { line: 4, step: Step::Show }]);
    }

    #[test]
    fn add_keeps_raw_fields() {
        let step = parse_line(1, "add  Launch |  Ship the board | 3 ").unwrap();
        assert_eq!(
            step,
            Some(Step::Add {
                title: "Launch".into(),
                description: "Ship the board".into(),
                people: "3".into(),
            })
        );
        // Empty fields are left for form validation to reject.
        assert_eq!(
            parse_line(1, "add | | ").unwrap(),
            Some(Step::Add {
                title: String::new(),
                description: String::new(),
                people: String::new(),
            })
        );
    }

    #[test]
    fn add_needs_three_fields() {
        assert!(matches!(
            parse_line(7, "add Launch | Ship it"),
            Err(ScriptError::Malformed { line: 7, .. })
        ));
        assert!(matches!(
            parse_line(7, "add"),
            Err(ScriptError::Malformed { line: 7, .. })
        ));
    }

    #[test]
    fn move_and_drag_take_ref_and_status() {
        assert_eq!(
            parse_line(1, "move prj-abc123 Finished").unwrap(),
            Some(Step::Move {
                project: ProjectRef::Id("prj-abc123".into()),
                status: ProjectStatus::Finished,
            })
        );
        assert_eq!(
            parse_line(1, "DRAG #2 active").unwrap(),
            Some(Step::Drag {
                project: ProjectRef::Created(2),
                status: ProjectStatus::Active,
            })
        );
    }

    #[test]
    fn rejects_bad_refs_and_statuses() {
        assert!(matches!(
            parse_line(3, "drag #0 finished"),
            Err(ScriptError::Malformed { line: 3, .. })
        ));
        assert!(matches!(
            parse_line(3, "move #x finished"),
            Err(ScriptError::Malformed { .. })
        ));
        assert!(matches!(
            parse_line(3, "move #1 done"),
            Err(ScriptError::BadStatus { line: 3, .. })
        ));
        assert!(matches!(
            parse_line(3, "move #1"),
            Err(ScriptError::Malformed { .. })
        ));
    }

    #[test]
    fn list_filter_is_optional() {
        assert_eq!(parse_line(1, "list").unwrap(), Some(Step::List(None)));
        assert_eq!(
            parse_line(1, "list finished").unwrap(),
            Some(Step::List(Some(ProjectStatus::Finished)))
        );
        assert!(parse_line(1, "show all").is_err());
    }

    #[test]
    fn unknown_command_names_line() {
        let err = parse_script("show\nfly #1 away\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 2,
                command: "fly".into(),
            }
        );
        assert!(err.to_string().starts_with("line 2: unknown command 'fly'"));
    }
}
