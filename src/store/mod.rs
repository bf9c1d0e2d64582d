//! Entity store: owns the subjects table and the four persistence operations.
//!
//! Every call is its own unit of work. Not-found on update/delete is reported as
//! `false`, never as an error.

mod memory;
mod postgres;

pub use memory::InMemorySubjectStore;
pub use postgres::{ensure_database_exists, PgSubjectStore, SUBJECTS_TABLE};

use crate::error::AppError;
use crate::subject::{Subject, SubjectFields};
use async_trait::async_trait;

#[async_trait]
pub trait SubjectStore: Send + Sync {
    /// Create the subjects table if it does not exist. Safe to call on every start.
    async fn initialize(&self) -> Result<(), AppError>;

    /// Insert a new row under a freshly generated id and return that id.
    async fn create(&self, fields: &SubjectFields) -> Result<String, AppError>;

    /// Replace all fields of the row with `id`. Returns whether a row matched.
    async fn update(&self, id: &str, fields: &SubjectFields) -> Result<bool, AppError>;

    /// Remove the row with `id`. Returns whether a row was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// All rows, in whatever order the backend yields them.
    async fn list_all(&self) -> Result<Vec<Subject>, AppError>;

    /// Cheap connectivity check used by readiness.
    async fn ping(&self) -> Result<(), AppError>;
}

/// New subject id: random 128-bit value in canonical hyphenated form.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
