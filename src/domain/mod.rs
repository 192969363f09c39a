//! Domain layer - pure data types with no UI or I/O

pub mod chain;
pub mod project;
