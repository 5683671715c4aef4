//! Events dispatched through the element tree.

use std::fmt;

use crate::drag::DataTransfer;

/// The event types the board listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DragStart,
    DragEnd,
    DragOver,
    DragLeave,
    Drop,
    Submit,
}

impl EventKind {
    /// Returns the platform name of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DragStart => "dragstart",
            Self::DragEnd => "dragend",
            Self::DragOver => "dragover",
            Self::DragLeave => "dragleave",
            Self::Drop => "drop",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event travelling from its target up through its ancestors.
///
/// Drag events carry a [`DataTransfer`]; other events do not.
#[derive(Debug, Clone)]
pub struct Event {
    kind: EventKind,
    data_transfer: Option<DataTransfer>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            data_transfer: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Creates a drag event carrying `data_transfer`.
    pub fn drag(kind: EventKind, data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            ..Self::new(kind)
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn data_transfer(&self) -> Option<&DataTransfer> {
        self.data_transfer.as_ref()
    }

    pub fn data_transfer_mut(&mut self) -> Option<&mut DataTransfer> {
        self.data_transfer.as_mut()
    }

    /// Takes the drag payload out of a finished event.
    pub fn into_data_transfer(self) -> Option<DataTransfer> {
        self.data_transfer
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
