//! The assembled board: one document, one store, the input form and the two
//! status columns.

use board_core::project::{Project, ProjectStatus};
use board_core::store::ProjectStore;
use board_core::validation::InputRules;

use crate::component::ComponentError;
use crate::dom::{Document, Element, Template};
use crate::drag::{DataTransfer, TEXT_PLAIN};
use crate::event::{Event, EventKind};
use crate::project_input::{self, AlertSink, ProjectInput};
use crate::project_item;
use crate::project_list::{self, ProjectList};
use crate::render;

fn form_control(id: &str, label: &str, tag: &str) -> Element {
    Element::new("div")
        .with_class("form-control")
        .with_child(
            Element::new("label")
                .with_attribute("for", id)
                .with_text(label),
        )
        .with_child(Element::new(tag).with_id(id))
}

/// Builds the page every board runs on: an empty `app` host plus the
/// `project-input`, `single-project` and `project-list` templates.
pub fn standard_document() -> Document {
    let document = Document::new();
    document
        .body()
        .append_child(Element::new("div").with_id(project_list::HOST_ID));

    document.add_template(
        project_input::TEMPLATE_ID,
        Template::single(
            Element::new("form")
                .with_child(form_control("title", "Title", "input"))
                .with_child(form_control("description", "Description", "textarea"))
                .with_child(
                    form_control("people", "People", "input")
                        .with_attribute("data-type", "number"),
                )
                .with_child(
                    Element::new("button")
                        .with_attribute("type", "submit")
                        .with_text("ADD PROJECT"),
                ),
        ),
    );
    document.add_template(
        project_item::TEMPLATE_ID,
        Template::single(
            Element::new("li")
                .with_child(Element::new("h2"))
                .with_child(Element::new("h3"))
                .with_child(Element::new("p")),
        ),
    );
    document.add_template(
        project_list::TEMPLATE_ID,
        Template::single(
            Element::new("section")
                .with_class("projects")
                .with_child(Element::new("header").with_child(Element::new("h2")))
                .with_child(Element::new("ul")),
        ),
    );

    document
}

/// A fully wired board.
///
/// Construction order matches the page: the form first, then the active
/// column, then the finished column.
#[derive(Debug)]
pub struct Board {
    document: Document,
    store: ProjectStore,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl Board {
    /// Builds a board on the standard document.
    pub fn new(
        store: ProjectStore,
        rules: InputRules,
        alert: AlertSink,
    ) -> Result<Self, ComponentError> {
        Self::with_document(standard_document(), store, rules, alert)
    }

    /// Builds a board on a caller-supplied document.
    pub fn with_document(
        document: Document,
        store: ProjectStore,
        rules: InputRules,
        alert: AlertSink,
    ) -> Result<Self, ComponentError> {
        let input = ProjectInput::new(&document, &store, rules, alert)?;
        let active = ProjectList::new(&document, &store, ProjectStatus::Active)?;
        let finished = ProjectList::new(&document, &store, ProjectStatus::Finished)?;
        tracing::debug!("board ready");
        Ok(Self {
            document,
            store,
            input,
            active,
            finished,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    /// The column for `status`.
    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.store.snapshot()
    }

    /// Types values into the form without submitting it.
    pub fn fill_form(&self, title: &str, description: &str, people: &str) {
        self.input.fill(title, description, people);
    }

    /// Submits the form. Returns `true` if a project was added.
    pub fn submit_form(&self) -> bool {
        let before = self.store.len();
        self.input
            .element()
            .dispatch_event(&mut Event::new(EventKind::Submit));
        self.store.len() > before
    }

    /// Drags the row for `project_id` onto the `target` column.
    ///
    /// Returns `true` if the drop changed the project's status. Dragging a
    /// project onto its own column, or an id with no row, changes nothing.
    pub fn drag(&self, project_id: &str, target: ProjectStatus) -> bool {
        let Some(source) = self.document.element_by_id(project_id) else {
            tracing::debug!(id = project_id, "no row to drag");
            return false;
        };

        let mut start = Event::drag(EventKind::DragStart, DataTransfer::new());
        source.dispatch_event(&mut start);
        let payload = start.into_data_transfer().unwrap_or_default();

        let moved = self.drop_payload(target, payload.clone());

        // The source row may already be detached by the re-render; its
        // listeners still run.
        source.dispatch_event(&mut Event::drag(EventKind::DragEnd, payload));
        moved
    }

    /// Delivers `payload` to the `target` column as `dragover` followed by
    /// `drop`, or `dragleave` if the column refuses it.
    pub fn drop_payload(&self, target: ProjectStatus, payload: DataTransfer) -> bool {
        let list = self.list(target).element();
        let project_id = payload.get_data(TEXT_PLAIN);
        let before = self.store.get(&project_id).map(|p| p.status());

        let mut over = Event::drag(EventKind::DragOver, payload.clone());
        if list.dispatch_event(&mut over) {
            list.dispatch_event(&mut Event::drag(EventKind::DragLeave, payload));
            return false;
        }
        list.dispatch_event(&mut Event::drag(EventKind::Drop, payload));

        let after = self.store.get(&project_id).map(|p| p.status());
        before.is_some() && before != after
    }

    /// Renders both columns as terminal text.
    pub fn render(&self) -> String {
        render::render_document(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn board() -> Board {
        Board::new(ProjectStore::new(), InputRules::default(), Rc::new(|_: &str| {})).unwrap()
    }

    fn row_ids(board: &Board, status: ProjectStatus) -> Vec<String> {
        board
            .list(status)
            .list_element()
            .children()
            .iter()
            .filter_map(Element::id)
            .collect()
    }

    #[test]
    fn standard_document_has_host_and_templates() {
        let doc = standard_document();
        assert!(doc.element_by_id("app").is_some());
        for id in ["project-input", "single-project", "project-list"] {
            assert!(doc.template(id).is_some(), "missing template {}", id);
        }
    }

    #[test]
    fn page_order_is_form_then_columns() {
        let board = board();
        let ids: Vec<Option<String>> = board
            .document()
            .element_by_id("app")
            .unwrap()
            .children()
            .iter()
            .map(Element::id)
            .collect();
        assert_eq!(
            ids,
            vec![
                Some("user-input".to_string()),
                Some("active-projects".to_string()),
                Some("finished-projects".to_string()),
            ]
        );
    }

    #[test]
    fn form_submit_renders_row_in_active_column() {
        let board = board();
        board.fill_form("Launch", "Ship the board", "2");
        assert!(board.submit_form());

        let id = board.snapshot()[0].id().to_string();
        assert_eq!(row_ids(&board, ProjectStatus::Active), vec![id]);
        assert!(row_ids(&board, ProjectStatus::Finished).is_empty());
    }

    #[test]
    fn invalid_form_alerts_once() {
        let alerts = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&alerts);
        let board = Board::new(
            ProjectStore::new(),
            InputRules::default(),
            Rc::new(move |msg: &str| sink.borrow_mut().push(msg.to_string())),
        )
        .unwrap();

        board.fill_form("", "Ship the board", "2");
        assert!(!board.submit_form());
        assert_eq!(*alerts.borrow(), vec!["Invalid input please try again!".to_string()]);
    }

    #[test]
    fn drag_round_trip_moves_exactly_once() {
        let board = board();
        let x = board.store().add_project("X", "Project X", 1);
        let y = board.store().add_project("Y", "Project Y", 1);
        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        board.store().subscribe(move |_| counter.set(counter.get() + 1));

        assert!(board.drag(&x, ProjectStatus::Finished));

        assert_eq!(notifications.get(), 1);
        assert_eq!(board.store().get(&x).unwrap().status(), ProjectStatus::Finished);
        assert_eq!(board.store().get(&y).unwrap().status(), ProjectStatus::Active);
        assert_eq!(row_ids(&board, ProjectStatus::Active), vec![y]);
        assert_eq!(row_ids(&board, ProjectStatus::Finished), vec![x.clone()]);
        assert!(
            !board
                .list(ProjectStatus::Finished)
                .list_element()
                .has_class(project_list::DROPPABLE_CLASS)
        );

        // Same column again: no move, no notification.
        assert!(!board.drag(&x, ProjectStatus::Finished));
        assert_eq!(notifications.get(), 1);
    }

    #[test]
    fn stale_or_foreign_payload_changes_nothing() {
        let board = board();
        board.store().add_project("X", "Project X", 1);
        let before = board.snapshot();

        let mut stale = DataTransfer::new();
        stale.set_data(TEXT_PLAIN, "prj-gone");
        assert!(!board.drop_payload(ProjectStatus::Finished, stale));

        let mut foreign = DataTransfer::new();
        foreign.set_data("text/uri-list", "https://example.com");
        assert!(!board.drop_payload(ProjectStatus::Finished, foreign));

        assert!(!board.drag("prj-gone", ProjectStatus::Finished));
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn render_lists_both_columns() {
        let board = board();
        board.store().add_project("Launch", "Ship the board", 3);
        let out = board.render();
        assert!(out.contains("ACTIVE PROJECTS"));
        assert!(out.contains("FINISHED PROJECTS"));
        assert!(out.contains("Launch"));
        assert!(out.contains("3 people assigned."));
    }
}
