//! Views for the project board.
//!
//! A small element tree ([`dom`]) with bubbling events ([`event`]), a
//! drag-and-drop protocol ([`drag`]), the shared view lifecycle
//! ([`component`]), the three board views, and Ayu-themed terminal output
//! ([`styles`], [`render`]).

pub mod board;
pub mod component;
pub mod dom;
pub mod drag;
pub mod event;
pub mod project_input;
pub mod project_item;
pub mod project_list;
pub mod render;
pub mod styles;
pub mod terminal;
