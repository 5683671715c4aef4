//! Core types for the project board.
//!
//! This crate holds the domain model ([`project::Project`]), id generation,
//! input validation rules, and the observable [`store::ProjectStore`] that
//! every view subscribes to.

pub mod idgen;
pub mod project;
pub mod store;
pub mod validation;
