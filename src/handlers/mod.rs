//! HTTP handlers for subject CRUD.

pub mod subject;
pub use subject::*;
