use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// One post's engagement snapshot. Counts are `None` when the stored
/// document lacked the field or held something that is not a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub username: String,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
}

impl Record {
    pub fn new(username: impl Into<String>, likes: u64, comments: u64) -> Self {
        Self {
            username: username.into(),
            likes: Some(likes),
            comments: Some(comments),
        }
    }
}

/// Records in the order the store returned them. Cloning shares the
/// underlying slice; a dataset is never mutated after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Arc<[Record]>);

impl Dataset {
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self(Arc::from(records))
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Usernames picked in the dashboard.
pub type Selection = BTreeSet<String>;

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub usernames: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTotals {
    pub username: String,
    pub posts: u64,
    pub likes: u64,
    pub comments: u64,
    pub avg_likes: Option<f64>,
    pub avg_comments: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub loaded: bool,
    pub loaded_at: Option<String>,
    pub record_count: usize,
    pub unique_users: usize,
    pub usernames: Vec<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterResponse {
    pub selection: Vec<String>,
    pub records: Dataset,
    pub totals: Vec<UserTotals>,
    pub prompt: Option<String>,
}
