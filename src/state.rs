//! Shared application state for all routes.

use crate::store::SubjectStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Initialized once at startup and shared by every request.
    pub store: Arc<dyn SubjectStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SubjectStore>) -> Self {
        Self { store }
    }
}
