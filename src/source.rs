//! Reads engagement records out of the document store.

use crate::config::SourceConfig;
use crate::errors::ConnectionError;
use crate::models::{Dataset, Record};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::ClientOptions,
    Client,
};
use tokio::time::timeout;
use tracing::{debug, warn};

const APP_NAME: &str = "engagement-dashboard";

/// Anything that can produce a full dataset in one attempt.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Dataset, ConnectionError>;
}

/// A MongoDB collection of `{ username, likes, comments }` documents.
pub struct MongoSource {
    config: SourceConfig,
}

impl MongoSource {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    async fn fetch_documents(&self) -> Result<Vec<Document>, ConnectionError> {
        let mut options = ClientOptions::parse(&self.config.uri).await?;
        options.app_name = Some(APP_NAME.to_owned());
        options.connect_timeout = Some(self.config.connect_timeout);
        options.server_selection_timeout = Some(self.config.connect_timeout);

        let client = Client::with_options(options)?;
        let collection = client
            .database(&self.config.database)
            .collection::<Document>(&self.config.collection);

        let cursor = collection
            .find(doc! {})
            .projection(doc! { "_id": 0, "username": 1, "likes": 1, "comments": 1 })
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }
}

#[async_trait]
impl RecordSource for MongoSource {
    async fn fetch(&self) -> Result<Dataset, ConnectionError> {
        // Server selection is bounded by the driver; this also bounds the cursor drain.
        let bound = self.config.connect_timeout * 2;
        let documents = timeout(bound, self.fetch_documents())
            .await
            .map_err(|_| ConnectionError::TimedOut(bound))??;

        debug!(
            documents = documents.len(),
            namespace = %self.config.namespace(),
            "fetched documents"
        );
        let (dataset, skipped) = decode_documents(&documents);
        if skipped > 0 {
            warn!(skipped, "ignored documents without a string username");
        }
        Ok(dataset)
    }
}

/// Turns projected documents into records, returning how many were skipped.
pub fn decode_documents(documents: &[Document]) -> (Dataset, usize) {
    let records: Vec<Record> = documents.iter().filter_map(decode_document).collect();
    let skipped = documents.len() - records.len();
    (Dataset::from(records), skipped)
}

fn decode_document(document: &Document) -> Option<Record> {
    let username = match document.get("username") {
        Some(Bson::String(name)) => name.clone(),
        _ => return None,
    };
    Some(Record {
        username,
        likes: document.get("likes").and_then(count),
        comments: document.get("comments").and_then(count),
    })
}

fn count(value: &Bson) -> Option<u64> {
    match value {
        Bson::Int32(n) => u64::try_from(*n).ok(),
        Bson::Int64(n) => u64::try_from(*n).ok(),
        Bson::Double(n) if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 => Some(*n as u64),
        _ => None,
    }
}
