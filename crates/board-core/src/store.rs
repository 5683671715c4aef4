//! The observable project store.
//!
//! [`ProjectStore`] is the single writer for all project state. Every
//! successful mutation is followed, synchronously and before the mutating
//! call returns, by a broadcast to every registered listener in
//! registration order. Each listener receives its own copy of the full
//! project sequence, so nothing a listener does with it can reach back into
//! the store.
//!
//! The store is a cheap, cloneable handle (`Rc<RefCell<..>>`): one store is
//! created when a board starts and a clone is handed to every view that
//! needs it. It is deliberately single-threaded.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::Utc;

use crate::idgen::{self, DEFAULT_LENGTH, DEFAULT_PREFIX};
use crate::project::{Project, ProjectStatus, filter_by_status};

/// Callback invoked with a snapshot of every project after each change.
pub type Listener = Rc<dyn Fn(Vec<Project>)>;

/// How new project ids are shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdConfig {
    pub prefix: String,
    pub length: usize,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            length: DEFAULT_LENGTH,
        }
    }
}

#[derive(Default)]
struct StoreState {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
    ids: IdConfig,
    /// Bumped on every add so ids differ even for identical input.
    sequence: u64,
}

/// Handle to the board's project store.
///
/// Cloning the handle does not copy the store; all clones observe and
/// mutate the same state.
#[derive(Clone, Default)]
pub struct ProjectStore {
    inner: Rc<RefCell<StoreState>>,
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("ProjectStore")
            .field("projects", &state.projects.len())
            .field("listeners", &state.listeners.len())
            .field("ids", &state.ids)
            .finish()
    }
}

impl ProjectStore {
    /// Creates an empty store using the default id shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose ids use the given prefix and length.
    pub fn with_id_config(ids: IdConfig) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().ids = ids;
        store
    }

    /// Registers a listener.
    ///
    /// The listener is not called until the next mutation. Registering the
    /// same callback twice is allowed and results in two calls per change.
    pub fn subscribe(&self, listener: impl Fn(Vec<Project>) + 'static) {
        let mut state = self.inner.borrow_mut();
        state.listeners.push(Rc::new(listener));
        tracing::debug!(listeners = state.listeners.len(), "store listener registered");
    }

    /// Adds a new active project and notifies every listener.
    ///
    /// No validation happens here; callers validate input first. Returns the
    /// new project's id.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> String {
        let title = title.into();
        let description = description.into();

        let id = {
            let mut state = self.inner.borrow_mut();
            state.sequence += 1;
            let id = idgen::generate_unique_id(
                &state.ids.prefix,
                &title,
                &description,
                Utc::now(),
                state.ids.length,
                state.sequence,
                |candidate| state.projects.iter().any(|p| p.id() == candidate),
            );
            state.projects.push(Project::new(
                id.clone(),
                title,
                description,
                people_count,
                ProjectStatus::Active,
            ));
            id
        };

        tracing::debug!(%id, "project added");
        self.notify();
        id
    }

    /// Moves a project to `new_status` and notifies every listener.
    ///
    /// Unknown ids and moves to the project's current status are ignored
    /// without notifying anyone. Returns `true` if the status changed.
    pub fn move_project(&self, id: &str, new_status: ProjectStatus) -> bool {
        {
            let mut state = self.inner.borrow_mut();
            let Some(project) = state.projects.iter_mut().find(|p| p.id() == id) else {
                tracing::debug!(%id, "move ignored: unknown project");
                return false;
            };
            if project.status() == new_status {
                tracing::debug!(%id, status = %new_status, "move ignored: status unchanged");
                return false;
            }
            project.set_status(new_status);
        }

        tracing::debug!(%id, status = %new_status, "project moved");
        self.notify();
        true
    }

    /// Returns a copy of every project in creation order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.inner.borrow().projects.clone()
    }

    /// Returns a copy of the projects with the given status.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        filter_by_status(&self.inner.borrow().projects, status)
    }

    /// Returns a copy of the project with the given id.
    pub fn get(&self, id: &str) -> Option<Project> {
        self.inner
            .borrow()
            .projects
            .iter()
            .find(|p| p.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Calls every listener registered before this notification started.
    ///
    /// No borrow is held while a listener runs, so listeners may read from
    /// (or write to) the store. Each listener gets a fresh snapshot.
    fn notify(&self) {
        let listeners: Vec<Listener> = self.inner.borrow().listeners.clone();
        tracing::debug!(listeners = listeners.len(), "notifying store listeners");
        for listener in listeners {
            listener(self.snapshot());
        }
    }
}
