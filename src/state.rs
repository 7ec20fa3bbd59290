use crate::session::SessionStore;
use crate::source::RecordSource;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    /// `database.collection` shown on the page.
    pub namespace: String,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(namespace: impl Into<String>, source: Arc<dyn RecordSource>, session_idle: Duration) -> Self {
        Self {
            namespace: namespace.into(),
            sessions: SessionStore::new(source, session_idle),
        }
    }
}
