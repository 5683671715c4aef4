//! In-memory element tree the board's views render into.
//!
//! [`Element`] is a shared handle (`Rc<RefCell<..>>`) to one node; cloning
//! the handle never copies the node. [`Document`] owns the `body` root plus a
//! set of named [`Template`]s whose content is deep-cloned to build views.
//!
//! Events dispatched on an element run that element's listeners, then bubble
//! to each ancestor. The propagation path is fixed when dispatch starts, so
//! listeners may restructure the tree without affecting the current event.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::event::{Event, EventKind};

/// Callback registered for one event type on one element.
pub type EventHandler = Rc<dyn Fn(&mut Event)>;

struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    value: String,
    children: Vec<Element>,
    parent: Weak<RefCell<Node>>,
    listeners: Vec<(EventKind, EventHandler)>,
}

/// Where [`Element::insert_adjacent`] places a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// As the first child.
    AfterBegin,
    /// As the last child.
    BeforeEnd,
}

/// Handle to a node in the element tree.
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Element")
            .field("tag", &node.tag)
            .field("id", &node.id)
            .field("children", &node.children.len())
            .finish()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Element {}

impl Element {
    /// Creates a detached element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
            value: String::new(),
            children: Vec::new(),
            parent: Weak::new(),
            listeners: Vec::new(),
        })))
    }

    // -- builder helpers, used to describe templates --------------------------

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_child(self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    // -- properties -----------------------------------------------------------

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        self.0.borrow_mut().id = Some(id.into());
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.0.borrow_mut().text = text.into();
    }

    /// The current value of a form control.
    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.0.borrow_mut().value = value.into();
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        match node.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    /// Adds `class` unless already present.
    pub fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    // -- structure ------------------------------------------------------------

    pub fn children(&self) -> Vec<Element> {
        self.0.borrow().children.clone()
    }

    pub fn first_element_child(&self) -> Option<Element> {
        self.0.borrow().children.first().cloned()
    }

    pub fn parent(&self) -> Option<Element> {
        self.0.borrow().parent.upgrade().map(Element)
    }

    pub fn append_child(&self, child: Element) {
        self.insert_adjacent(InsertPosition::BeforeEnd, child);
    }

    /// Attaches `child` as the first or last child, detaching it from any
    /// previous parent first.
    pub fn insert_adjacent(&self, position: InsertPosition, child: Element) {
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        let mut node = self.0.borrow_mut();
        match position {
            InsertPosition::AfterBegin => node.children.insert(0, child),
            InsertPosition::BeforeEnd => node.children.push(child),
        }
    }

    /// Removes this element from its parent, if any.
    pub fn detach(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.0.borrow_mut().children.retain(|c| c != self);
        self.0.borrow_mut().parent = Weak::new();
    }

    /// Removes every child (the `innerHTML = ''` of this tree).
    pub fn clear_children(&self) {
        let children = std::mem::take(&mut self.0.borrow_mut().children);
        for child in children {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    /// Finds the first descendant matching `selector`, depth first.
    ///
    /// Supported selectors are a tag name (`ul`), an id (`#title`) or a
    /// class (`.projects`).
    pub fn query_selector(&self, selector: &str) -> Option<Element> {
        for child in self.children() {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.query_selector(selector) {
                return Some(found);
            }
        }
        None
    }

    /// Returns every descendant matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let mut found = Vec::new();
        for child in self.children() {
            if child.matches(selector) {
                found.push(child.clone());
            }
            found.extend(child.query_selector_all(selector));
        }
        found
    }

    /// Finds this element or a descendant with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        if self.0.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.query_selector(&format!("#{}", id))
    }

    fn matches(&self, selector: &str) -> bool {
        let node = self.0.borrow();
        if let Some(id) = selector.strip_prefix('#') {
            node.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            node.classes.iter().any(|c| c == class)
        } else {
            node.tag == selector
        }
    }

    /// Copies this element and all descendants into a new detached tree.
    ///
    /// Event listeners are not copied.
    pub fn deep_clone(&self) -> Element {
        let node = self.0.borrow();
        let copy = Element::new(node.tag.clone());
        {
            let mut c = copy.0.borrow_mut();
            c.id = node.id.clone();
            c.classes = node.classes.clone();
            c.attributes = node.attributes.clone();
            c.text = node.text.clone();
            c.value = node.value.clone();
        }
        for child in &node.children {
            copy.append_child(child.deep_clone());
        }
        copy
    }

    // -- events ---------------------------------------------------------------

    pub fn add_event_listener(&self, kind: EventKind, handler: EventHandler) {
        self.0.borrow_mut().listeners.push((kind, handler));
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Runs listeners for `event` on this element and then each ancestor.
    ///
    /// Returns `false` if any listener called
    /// [`Event::prevent_default`].
    pub fn dispatch_event(&self, event: &mut Event) -> bool {
        let mut path = vec![self.clone()];
        let mut current = self.parent();
        while let Some(el) = current {
            current = el.parent();
            path.push(el);
        }

        for el in path {
            let handlers: Vec<EventHandler> = el
                .0
                .borrow()
                .listeners
                .iter()
                .filter(|(k, _)| *k == event.kind())
                .map(|(_, h)| Rc::clone(h))
                .collect();
            for handler in handlers {
                handler(event);
            }
            if event.propagation_stopped() {
                break;
            }
        }

        !event.default_prevented()
    }
}

/// Reusable markup, instantiated by deep-cloning its content.
#[derive(Debug, Clone, Default)]
pub struct Template {
    content: Vec<Element>,
}

impl Template {
    pub fn new(content: Vec<Element>) -> Self {
        Self { content }
    }

    /// A template whose content is a single element.
    pub fn single(root: Element) -> Self {
        Self::new(vec![root])
    }

    /// Returns a detached deep copy of the content.
    pub fn instantiate(&self) -> Vec<Element> {
        self.content.iter().map(Element::deep_clone).collect()
    }
}

struct DocumentInner {
    body: Element,
    templates: RefCell<HashMap<String, Template>>,
}

/// Handle to the document: the `body` root plus named templates.
#[derive(Clone)]
pub struct Document(Rc<DocumentInner>);

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.0.templates.borrow().keys().cloned().collect();
        names.sort();
        f.debug_struct("Document")
            .field("body", &self.0.body)
            .field("templates", &names)
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document with an empty `body`.
    pub fn new() -> Self {
        Self(Rc::new(DocumentInner {
            body: Element::new("body"),
            templates: RefCell::new(HashMap::new()),
        }))
    }

    pub fn body(&self) -> Element {
        self.0.body.clone()
    }

    /// Registers (or replaces) the template with the given id.
    pub fn add_template(&self, id: impl Into<String>, template: Template) {
        self.0.templates.borrow_mut().insert(id.into(), template);
    }

    pub fn template(&self, id: &str) -> Option<Template> {
        self.0.templates.borrow().get(id).cloned()
    }

    /// Finds an attached element by id.
    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        self.0.body.find_by_id(id)
    }
}
