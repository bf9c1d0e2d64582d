//! Request mapper: payload in, store call, envelope out.

use crate::error::AppError;
use crate::response::{Envelope, MSG_CREATED, MSG_NOT_FOUND, MSG_REMOVED, MSG_UPDATED};
use crate::service::RequestValidator;
use crate::store::SubjectStore;
use serde_json::Value;

pub struct SubjectMapper;

impl SubjectMapper {
    pub async fn list(store: &dyn SubjectStore) -> Result<Envelope, AppError> {
        let subjects = store.list_all().await?;
        Ok(Envelope::success_subjects(subjects))
    }

    /// The created record and its id are not echoed back.
    pub async fn create(store: &dyn SubjectStore, payload: Value) -> Result<Envelope, AppError> {
        let fields = RequestValidator::subject_fields(payload)?;
        store.create(&fields).await?;
        Ok(Envelope::success_message(MSG_CREATED))
    }

    /// Reports success even when no row has `id`; the miss is only logged.
    pub async fn update(store: &dyn SubjectStore, id: &str, payload: Value) -> Result<Envelope, AppError> {
        let fields = RequestValidator::subject_fields(payload)?;
        if !store.update(id, &fields).await? {
            tracing::warn!(id = %id, "update matched no subject");
        }
        Ok(Envelope::success_message(MSG_UPDATED))
    }

    pub async fn delete(store: &dyn SubjectStore, id: &str) -> Result<Envelope, AppError> {
        if store.delete(id).await? {
            tracing::info!(id = %id, "subject removed");
            Ok(Envelope::success_message(MSG_REMOVED))
        } else {
            Ok(Envelope::fail(MSG_NOT_FOUND))
        }
    }
}
