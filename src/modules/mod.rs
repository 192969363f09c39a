//! UI Modules
//!
//! Each module implements the Module trait and handles its own key input.
//!
//! Modules:
//! - post_project: four-step project posting wizard

pub mod post_project;
