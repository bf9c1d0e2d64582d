//! Subjects API: REST backend for course subjects stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod subject;

pub use config::{AppConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use response::{Envelope, Status};
pub use routes::{app_router, common_routes, docs_routes, subject_routes, ApiDoc};
pub use service::{RequestValidator, SubjectMapper};
pub use state::AppState;
pub use store::{ensure_database_exists, InMemorySubjectStore, PgSubjectStore, SubjectStore};
pub use subject::{Subject, SubjectFields};
