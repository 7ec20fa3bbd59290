use crate::models::Dataset;
use crate::source::RecordSource;
use chrono::{DateTime, Local};
use std::sync::Arc;
use tracing::{error, info};

/// Loads a session's dataset at most once and hands out the stored copy
/// afterwards. There is no refresh; a new session gets a new cache.
pub struct SessionCache {
    source: Arc<dyn RecordSource>,
    loaded: bool,
    dataset: Dataset,
    loaded_at: Option<DateTime<Local>>,
}

impl SessionCache {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            loaded: false,
            dataset: Dataset::empty(),
            loaded_at: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    /// The cached dataset, without triggering a load.
    pub fn peek(&self) -> Option<&Dataset> {
        self.loaded.then_some(&self.dataset)
    }

    /// A failed fetch is cached as an empty dataset, same as an empty store.
    pub async fn get_or_load(&mut self) -> Dataset {
        if !self.loaded {
            self.dataset = match self.source.fetch().await {
                Ok(dataset) => {
                    info!(records = dataset.len(), "dataset loaded");
                    dataset
                }
                Err(err) => {
                    error!("failed to load dataset: {err}");
                    Dataset::empty()
                }
            };
            self.loaded = true;
            self.loaded_at = Some(Local::now());
        }
        self.dataset.clone()
    }
}
