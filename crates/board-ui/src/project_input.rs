//! The "add project" form.

use std::fmt;
use std::rc::Rc;

use board_core::store::ProjectStore;
use board_core::validation::{InputRules, NewProject, validate_project_input};

use crate::component::{Component, ComponentError, MountOptions, mount_component};
use crate::dom::{Document, Element};
use crate::drag::bind;
use crate::event::{Event, EventKind};

pub const TEMPLATE_ID: &str = "project-input";
pub const HOST_ID: &str = "app";
pub const ELEMENT_ID: &str = "user-input";

/// Message shown when the form is submitted with invalid input.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input please try again!";

/// Receives blocking user-facing messages.
pub type AlertSink = Rc<dyn Fn(&str)>;

/// The form: three inputs, validated on submit.
#[derive(Clone)]
pub struct ProjectInput {
    element: Element,
    title_input: Element,
    description_input: Element,
    people_input: Element,
    store: ProjectStore,
    rules: InputRules,
    alert: AlertSink,
}

impl fmt::Debug for ProjectInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectInput")
            .field("element", &self.element)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl ProjectInput {
    /// Mounts the form as the first child of `app`.
    pub fn new(
        document: &Document,
        store: &ProjectStore,
        rules: InputRules,
        alert: AlertSink,
    ) -> Result<Self, ComponentError> {
        let options = MountOptions {
            template_id: TEMPLATE_ID,
            host_id: HOST_ID,
            insert_at_start: true,
            element_id: Some(ELEMENT_ID),
        };
        mount_component(document, &options, |mounted| {
            Ok(Self {
                element: mounted.element.clone(),
                title_input: mounted.part("#title")?,
                description_input: mounted.part("#description")?,
                people_input: mounted.part("#people")?,
                store: store.clone(),
                rules,
                alert,
            })
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Sets the raw values of the three inputs.
    pub fn fill(&self, title: &str, description: &str, people: &str) {
        self.title_input.set_value(title);
        self.description_input.set_value(description);
        self.people_input.set_value(people);
    }

    /// The raw values of the three inputs, in form order.
    pub fn values(&self) -> (String, String, String) {
        (
            self.title_input.value(),
            self.description_input.value(),
            self.people_input.value(),
        )
    }

    /// Reads and validates the inputs. Alerts and returns `None` on failure.
    fn gather_user_input(&self) -> Option<NewProject> {
        let (title, description, people) = self.values();
        match validate_project_input(&title, &description, &people, &self.rules) {
            Ok(input) => Some(input),
            Err(e) => {
                tracing::warn!(error = %e, "rejected project input");
                (self.alert)(INVALID_INPUT_MESSAGE);
                None
            }
        }
    }

    pub fn clear_input(&self) {
        self.fill("", "", "");
    }

    fn submit_handler(&self, event: &mut Event) {
        event.prevent_default();
        if let Some(input) = self.gather_user_input() {
            self.store
                .add_project(&input.title, &input.description, input.people_count);
            self.clear_input();
        }
    }
}

impl Component for ProjectInput {
    fn configure(&mut self) {
        self.element
            .add_event_listener(EventKind::Submit, bind(&Rc::new(self.clone()), Self::submit_handler));
    }

    // Static markup.
    fn render_content(&mut self) {}
}
