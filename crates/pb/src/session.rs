//! A board session driven by script steps.

use std::cell::RefCell;
use std::rc::Rc;

use board_config::config::BoardConfig;
use board_core::project::{Project, ProjectStatus};
use board_core::store::ProjectStore;
use board_ui::board::Board;
use board_ui::component::ComponentError;

use crate::script::{ProjectRef, ScriptError, ScriptLine, Step};

/// What a step did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { id: String, title: String },
    /// The form refused the input; the store was not touched.
    Rejected { message: String },
    Moved { id: String, status: ProjectStatus },
    /// The project already had the requested status.
    Unchanged { id: String, status: ProjectStatus },
    /// No project has this id.
    Ignored { id: String },
    Show(String),
    List(Vec<Project>),
}

/// A fresh board plus the bookkeeping scripts need.
pub struct Session {
    board: Board,
    created: Vec<String>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl Session {
    /// Builds a board with the config's id settings and form rules.
    pub fn new(config: &BoardConfig) -> Result<Self, ComponentError> {
        let alerts = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&alerts);
        let board = Board::new(
            ProjectStore::with_id_config(config.id_config()),
            config.input_rules(),
            Rc::new(move |message: &str| sink.borrow_mut().push(message.to_string())),
        )?;
        Ok(Self {
            board,
            created: Vec::new(),
            alerts,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs one step.
    pub fn execute(&mut self, line: &ScriptLine) -> Result<Outcome, ScriptError> {
        tracing::debug!(line = line.line, step = ?line.step, "executing step");
        let outcome = match &line.step {
            Step::Add {
                title,
                description,
                people,
            } => self.add(title, description, people),
            Step::Move { project, status } => {
                let id = self.resolve(line.line, project)?;
                let moved = self.board.store().move_project(&id, *status);
                self.transition_outcome(id, *status, moved)
            }
            Step::Drag { project, status } => {
                let id = self.resolve(line.line, project)?;
                let moved = self.board.drag(&id, *status);
                self.transition_outcome(id, *status, moved)
            }
            Step::Show => Outcome::Show(self.board.render()),
            Step::List(filter) => {
                let projects = match filter {
                    Some(status) => self.board.store().projects_with_status(*status),
                    None => self.board.snapshot(),
                };
                Outcome::List(projects)
            }
        };
        Ok(outcome)
    }

    fn add(&mut self, title: &str, description: &str, people: &str) -> Outcome {
        self.board.fill_form(title, description, people);
        if self.board.submit_form() {
            // The form only ever appends, so the newest project is last.
            if let Some(project) = self.board.snapshot().last() {
                self.created.push(project.id().to_string());
                return Outcome::Added {
                    id: project.id().to_string(),
                    title: project.title().to_string(),
                };
            }
        }
        let message = self.alerts.borrow_mut().drain(..).last().unwrap_or_default();
        Outcome::Rejected { message }
    }

    fn resolve(&self, line: usize, project: &ProjectRef) -> Result<String, ScriptError> {
        match project {
            ProjectRef::Id(id) => Ok(id.clone()),
            ProjectRef::Created(n) => n
                .checked_sub(1)
                .and_then(|i| self.created.get(i))
                .cloned()
                .ok_or_else(|| ScriptError::UnknownProject {
                    line,
                    reference: project.to_string(),
                }),
        }
    }

    fn transition_outcome(&self, id: String, status: ProjectStatus, moved: bool) -> Outcome {
        if moved {
            Outcome::Moved { id, status }
        } else if self.board.store().get(&id).is_some() {
            Outcome::Unchanged { id, status }
        } else {
            Outcome::Ignored { id }
        }
    }
}
