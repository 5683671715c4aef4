//! Drag-and-drop capabilities.
//!
//! A drag source and a drop target never reference each other. The source
//! writes a text payload into the event's [`DataTransfer`]; the target reads
//! it back on drop. Any view that knows an id can be [`Draggable`], and any
//! view that knows what to do with an id can be a [`DropTarget`].

use std::fmt;
use std::rc::Rc;

use crate::dom::{Element, EventHandler};
use crate::event::{Event, EventKind};

/// The payload format the board uses for project ids.
pub const TEXT_PLAIN: &str = "text/plain";

/// Which drop operations the source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragEffect {
    #[default]
    Uninitialized,
    None,
    Copy,
    Link,
    Move,
    All,
}

impl DragEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::None => "none",
            Self::Copy => "copy",
            Self::Link => "link",
            Self::Move => "move",
            Self::All => "all",
        }
    }
}

impl fmt::Display for DragEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed payloads carried by a drag, keyed by format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
    pub effect_allowed: DragEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous value.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let data = data.into();
        match self.items.iter_mut().find(|(f, _)| f == format) {
            Some(entry) => entry.1 = data,
            None => self.items.push((format.to_string(), data)),
        }
    }

    /// Returns the data for `format`, or an empty string if none was set.
    pub fn get_data(&self, format: &str) -> String {
        self.items
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, d)| d.clone())
            .unwrap_or_default()
    }

    /// Formats in the order they were first set.
    pub fn types(&self) -> Vec<&str> {
        self.items.iter().map(|(f, _)| f.as_str()).collect()
    }
}

/// A view that can be picked up and dragged.
pub trait Draggable {
    fn drag_start_handler(&self, event: &mut Event);
    fn drag_end_handler(&self, event: &mut Event);
}

/// A view that accepts drops.
pub trait DropTarget {
    fn drag_over_handler(&self, event: &mut Event);
    fn drop_handler(&self, event: &mut Event);
    fn drag_leave_handler(&self, event: &mut Event);
}

/// Binds `handler` to `this`, producing an event listener that always runs
/// against the same instance no matter who dispatches the event.
pub fn bind<T: 'static>(this: &Rc<T>, handler: fn(&T, &mut Event)) -> EventHandler {
    let this = Rc::clone(this);
    Rc::new(move |event: &mut Event| handler(&this, event))
}

/// Registers `source`'s drag handlers on `element`.
pub fn register_draggable<T: Draggable + 'static>(element: &Element, source: &Rc<T>) {
    element.set_attribute("draggable", "true");
    element.add_event_listener(EventKind::DragStart, bind(source, T::drag_start_handler));
    element.add_event_listener(EventKind::DragEnd, bind(source, T::drag_end_handler));
}

/// Registers `target`'s drop handlers on `element`.
pub fn register_drop_target<T: DropTarget + 'static>(element: &Element, target: &Rc<T>) {
    element.add_event_listener(EventKind::DragOver, bind(target, T::drag_over_handler));
    element.add_event_listener(EventKind::DragLeave, bind(target, T::drag_leave_handler));
    element.add_event_listener(EventKind::Drop, bind(target, T::drop_handler));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn data_transfer_set_get_and_types() {
        let mut dt = DataTransfer::new();
        assert_eq!(dt.get_data(TEXT_PLAIN), "");
        dt.set_data(TEXT_PLAIN, "prj-1");
        dt.set_data("text/uri-list", "x");
        dt.set_data(TEXT_PLAIN, "prj-2");
        assert_eq!(dt.get_data(TEXT_PLAIN), "prj-2");
        assert_eq!(dt.types(), vec![TEXT_PLAIN, "text/uri-list"]);
        assert_eq!(dt.effect_allowed, DragEffect::Uninitialized);
    }

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Draggable for Recorder {
        fn drag_start_handler(&self, event: &mut Event) {
            if let Some(dt) = event.data_transfer_mut() {
                dt.set_data(TEXT_PLAIN, self.name);
            }
            self.log.borrow_mut().push(format!("{} start", self.name));
        }

        fn drag_end_handler(&self, _event: &mut Event) {
            self.log.borrow_mut().push(format!("{} end", self.name));
        }
    }

    #[test]
    fn bound_handlers_keep_their_instance() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::new(Recorder { name: "a", log: Rc::clone(&log) });
        let b = Rc::new(Recorder { name: "b", log: Rc::clone(&log) });
        let el_a = Element::new("li");
        let el_b = Element::new("li");
        register_draggable(&el_a, &a);
        register_draggable(&el_b, &b);

        let mut event = Event::drag(EventKind::DragStart, DataTransfer::new());
        el_b.dispatch_event(&mut event);
        el_a.dispatch_event(&mut Event::drag(EventKind::DragEnd, DataTransfer::new()));

        assert_eq!(event.data_transfer().unwrap().get_data(TEXT_PLAIN), "b");
        assert_eq!(*log.borrow(), vec!["b start", "a end"]);
        assert_eq!(el_a.attribute("draggable").as_deref(), Some("true"));
    }
}
