//! Configuration management for the project board.
//!
//! This crate handles loading and saving `board.yaml` files, discovering
//! them in the filesystem, and converting the typed configuration into the
//! settings the core store and form validation consume.

pub mod config;
pub mod discover;
