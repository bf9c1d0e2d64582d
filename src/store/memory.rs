//! In-process store with the same contract as the PostgreSQL one. Nothing survives a restart.

use crate::error::AppError;
use crate::store::{generate_id, SubjectStore};
use crate::subject::{Subject, SubjectFields};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySubjectStore {
    rows: RwLock<HashMap<String, Subject>>,
}

impl InMemorySubjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubjectStore for InMemorySubjectStore {
    async fn initialize(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create(&self, fields: &SubjectFields) -> Result<String, AppError> {
        let mut rows = self.rows.write().await;
        let mut id = generate_id();
        while rows.contains_key(&id) {
            id = generate_id();
        }
        rows.insert(id.clone(), fields.clone().into_subject(id.clone()));
        tracing::info!(id = %id, "subject created");
        Ok(id)
    }

    async fn update(&self, id: &str, fields: &SubjectFields) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(id) {
            Some(row) => {
                *row = fields.clone().into_subject(id.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.rows.write().await.remove(id).is_some())
    }

    async fn list_all(&self) -> Result<Vec<Subject>, AppError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
