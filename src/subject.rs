//! The subject entity and the field set accepted on create and update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored subject. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub teacher: String,
    pub inprogress: bool,
    pub description: String,
}

/// The four caller-owned fields. Create and update both replace all of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubjectFields {
    pub name: String,
    pub teacher: String,
    pub inprogress: bool,
    pub description: String,
}

impl SubjectFields {
    pub const REQUIRED: [&'static str; 4] = ["name", "teacher", "inprogress", "description"];

    pub fn into_subject(self, id: String) -> Subject {
        Subject {
            id,
            name: self.name,
            teacher: self.teacher,
            inprogress: self.inprogress,
            description: self.description,
        }
    }
}
