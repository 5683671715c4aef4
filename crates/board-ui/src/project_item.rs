//! One project rendered as a draggable list row.

use std::rc::Rc;

use board_core::project::Project;

use crate::component::{Component, ComponentError, MountOptions, mount_component};
use crate::dom::{Document, Element};
use crate::drag::{DragEffect, Draggable, TEXT_PLAIN, register_draggable};
use crate::event::Event;

/// Template the row is instantiated from.
pub const TEMPLATE_ID: &str = "single-project";

/// A project row. Its root element's id is the project id.
#[derive(Debug, Clone)]
pub struct ProjectItem {
    project: Project,
    element: Element,
    title: Element,
    people: Element,
    description: Element,
}

impl ProjectItem {
    /// Builds a row for `project` and appends it to the element `host_id`.
    pub fn new(document: &Document, host_id: &str, project: Project) -> Result<Self, ComponentError> {
        let element_id = project.id().to_string();
        let options = MountOptions {
            template_id: TEMPLATE_ID,
            host_id,
            insert_at_start: false,
            element_id: Some(&element_id),
        };
        mount_component(document, &options, |mounted| {
            Ok(Self {
                element: mounted.element.clone(),
                title: mounted.part("h2")?,
                people: mounted.part("h3")?,
                description: mounted.part("p")?,
                project,
            })
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// `"1 person"` or `"<n> people"`.
    pub fn persons(&self) -> String {
        self.project.persons()
    }
}

/// The drag source registered on a row.
///
/// Holds only the project id: the row's listeners must not own the row's
/// elements, or a row dropped by a re-render would never be freed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDrag {
    id: String,
}

impl ProjectDrag {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Draggable for ProjectDrag {
    fn drag_start_handler(&self, event: &mut Event) {
        let Some(data_transfer) = event.data_transfer_mut() else {
            tracing::warn!(id = %self.id, "drag start without data transfer");
            return;
        };
        data_transfer.set_data(TEXT_PLAIN, self.id.as_str());
        data_transfer.effect_allowed = DragEffect::Move;
    }

    fn drag_end_handler(&self, _event: &mut Event) {
        tracing::debug!(id = %self.id, "drag end");
    }
}

impl Component for ProjectItem {
    fn configure(&mut self) {
        let source = Rc::new(ProjectDrag::new(self.project.id()));
        register_draggable(&self.element, &source);
    }

    fn render_content(&mut self) {
        self.title.set_text(self.project.title());
        self.people.set_text(format!("{} assigned.", self.persons()));
        self.description.set_text(self.project.description());
    }
}
