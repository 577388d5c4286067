//! Small shared utilities

pub mod mime;
pub mod url;
