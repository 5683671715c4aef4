//! A status column: subscribes to the store, renders its projects, and
//! accepts dropped projects.

use std::cell::RefCell;
use std::rc::Rc;

use board_core::project::{Project, ProjectStatus, filter_by_status};
use board_core::store::ProjectStore;

use crate::component::{Component, ComponentError, MountOptions, mount_component};
use crate::dom::{Document, Element};
use crate::drag::{DropTarget, TEXT_PLAIN, register_drop_target};
use crate::event::Event;
use crate::project_item::ProjectItem;

/// Template the column is instantiated from.
pub const TEMPLATE_ID: &str = "project-list";

/// Element every column is appended to.
pub const HOST_ID: &str = "app";

/// Class set on the `<ul>` while a payload hovers over the column.
pub const DROPPABLE_CLASS: &str = "droppable";

/// One column of the board, fixed to a single status.
///
/// Cloning shares the column: all clones see the same elements and cache.
#[derive(Debug, Clone)]
pub struct ProjectList {
    status: ProjectStatus,
    document: Document,
    store: ProjectStore,
    element: Element,
    heading: Element,
    list: Element,
    assigned_projects: Rc<RefCell<Vec<Project>>>,
}

impl ProjectList {
    /// Builds the column for `status` and subscribes it to `store`.
    pub fn new(
        document: &Document,
        store: &ProjectStore,
        status: ProjectStatus,
    ) -> Result<Self, ComponentError> {
        let element_id = format!("{}-projects", status);
        let options = MountOptions {
            template_id: TEMPLATE_ID,
            host_id: HOST_ID,
            insert_at_start: false,
            element_id: Some(&element_id),
        };
        mount_component(document, &options, |mounted| {
            Ok(Self {
                status,
                document: document.clone(),
                store: store.clone(),
                element: mounted.element.clone(),
                heading: mounted.part("h2")?,
                list: mounted.part("ul")?,
                assigned_projects: Rc::new(RefCell::new(Vec::new())),
            })
        })
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The `<ul>` holding one row per project.
    pub fn list_element(&self) -> &Element {
        &self.list
    }

    /// Id of the `<ul>`, e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// The projects this column rendered last, in store order.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned_projects.borrow().clone()
    }

    /// Replaces the cache with the matching subset of `projects` and
    /// re-renders every row.
    fn on_projects_changed(&self, projects: Vec<Project>) {
        *self.assigned_projects.borrow_mut() = filter_by_status(&projects, self.status);
        self.render_projects();
    }

    fn render_projects(&self) {
        self.list.clear_children();
        let list_id = self.list_id();
        for project in self.assigned_projects() {
            let id = project.id().to_string();
            if let Err(e) = ProjectItem::new(&self.document, &list_id, project) {
                tracing::error!(%id, list = %list_id, error = %e, "failed to render project row");
            }
        }
    }
}

impl DropTarget for ProjectList {
    fn drag_over_handler(&self, event: &mut Event) {
        let carries_text = event
            .data_transfer()
            .and_then(|dt| dt.types().first().map(|t| *t == TEXT_PLAIN))
            .unwrap_or(false);
        if carries_text {
            event.prevent_default();
            self.list.add_class(DROPPABLE_CLASS);
        }
    }

    fn drop_handler(&self, event: &mut Event) {
        let project_id = event
            .data_transfer()
            .map(|dt| dt.get_data(TEXT_PLAIN))
            .unwrap_or_default();
        self.list.remove_class(DROPPABLE_CLASS);
        tracing::debug!(id = %project_id, target = %self.status, "project dropped");
        self.store.move_project(&project_id, self.status);
    }

    fn drag_leave_handler(&self, _event: &mut Event) {
        self.list.remove_class(DROPPABLE_CLASS);
    }
}

impl Component for ProjectList {
    fn configure(&mut self) {
        register_drop_target(&self.element, &Rc::new(self.clone()));

        let this = self.clone();
        self.store
            .subscribe(move |projects| this.on_projects_changed(projects));
    }

    fn render_content(&mut self) {
        self.list.set_id(self.list_id());
        self.heading
            .set_text(format!("{} PROJECTS", self.status.as_str().to_uppercase()));
    }
}
