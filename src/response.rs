//! Response envelope shared by every subject endpoint: `{status, message?, subjects?}`.

use crate::subject::Subject;
use serde::Serialize;
use utoipa::ToSchema;

pub const MSG_CREATED: &str = "Disciplina Adicionada!";
pub const MSG_UPDATED: &str = "Disciplina Atualizada!";
pub const MSG_REMOVED: &str = "Disciplina Removida!";
pub const MSG_NOT_FOUND: &str = "Disciplina não encontrada!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct Envelope {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<Subject>>,
}

impl Envelope {
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            subjects: None,
        }
    }

    /// `subjects` is always serialized, even when empty.
    pub fn success_subjects(subjects: Vec<Subject>) -> Self {
        Self {
            status: Status::Success,
            message: None,
            subjects: Some(subjects),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message.into()),
            subjects: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
