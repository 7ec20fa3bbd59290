use crate::cache::SessionCache;
use crate::source::RecordSource;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

pub type SharedSession = Arc<Mutex<SessionCache>>;

struct Entry {
    cache: SharedSession,
    last_seen: Instant,
}

/// Owns one `SessionCache` per browser session. Nothing is shared
/// between sessions except the read-only source.
#[derive(Clone)]
pub struct SessionStore {
    source: Arc<dyn RecordSource>,
    idle: Duration,
    sessions: Arc<Mutex<HashMap<String, Entry>>>,
}

impl SessionStore {
    pub fn new(source: Arc<dyn RecordSource>, idle: Duration) -> Self {
        Self {
            source,
            idle,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the live session named `id`, or starts a new one when `id`
    /// is missing, unknown or expired. The returned id is the one to keep.
    pub async fn open(&self, id: Option<&str>) -> (String, SharedSession) {
        self.open_at(id, Instant::now()).await
    }

    async fn open_at(&self, id: Option<&str>, now: Instant) -> (String, SharedSession) {
        let mut sessions = self.sessions.lock().await;
        self.expire_idle(&mut sessions, now);

        if let Some(id) = id {
            if let Some(entry) = sessions.get_mut(id) {
                entry.last_seen = now;
                return (id.to_owned(), Arc::clone(&entry.cache));
            }
        }

        let id = Uuid::new_v4().to_string();
        let cache = Arc::new(Mutex::new(SessionCache::new(Arc::clone(&self.source))));
        sessions.insert(
            id.clone(),
            Entry {
                cache: Arc::clone(&cache),
                last_seen: now,
            },
        );
        info!(session = %id, "session started");
        (id, cache)
    }

    /// The live session named `id`, if any. Never starts a session.
    pub async fn find(&self, id: &str) -> Option<SharedSession> {
        self.find_at(id, Instant::now()).await
    }

    async fn find_at(&self, id: &str, now: Instant) -> Option<SharedSession> {
        let mut sessions = self.sessions.lock().await;
        self.expire_idle(&mut sessions, now);
        let entry = sessions.get_mut(id)?;
        entry.last_seen = now;
        Some(Arc::clone(&entry.cache))
    }

    fn expire_idle(&self, sessions: &mut HashMap<String, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= self.idle);
        if sessions.len() < before {
            info!(expired = before - sessions.len(), "dropped idle sessions");
        }
    }

    /// Drops the session and its cached dataset. Returns whether it existed.
    pub async fn end(&self, id: &str) -> bool {
        let removed = self.sessions.lock().await.remove(id).is_some();
        if removed {
            info!(session = %id, "session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
