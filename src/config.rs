use std::{env, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "instagram_data";
const DEFAULT_COLLECTION: &str = "posts";
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_SESSION_IDLE_SECS: u64 = 3_600;

/// Where the engagement records live. Fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout: Duration,
}

impl SourceConfig {
    /// The connection string with any `user:password@` part masked.
    pub fn redacted_uri(&self) -> String {
        let Some((scheme, rest)) = self.uri.split_once("://") else {
            return self.uri.clone();
        };
        let authority_end = rest.find('/').unwrap_or(rest.len());
        match rest[..authority_end].rfind('@') {
            Some(at) => format!("{scheme}://***@{}", &rest[at + 1..]),
            None => self.uri.clone(),
        }
    }

    /// `database.collection`, as shown on the dashboard.
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub source: SourceConfig,
    pub session_idle: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        let positive = |key: &str, default: u64| {
            lookup(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(default)
        };

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            source: SourceConfig {
                uri: text("MONGODB_URI", DEFAULT_URI),
                database: text("DASHBOARD_DATABASE", DEFAULT_DATABASE),
                collection: text("DASHBOARD_COLLECTION", DEFAULT_COLLECTION),
                connect_timeout: Duration::from_millis(positive(
                    "DASHBOARD_CONNECT_TIMEOUT_MS",
                    DEFAULT_CONNECT_TIMEOUT_MS,
                )),
            },
            session_idle: Duration::from_secs(positive(
                "DASHBOARD_SESSION_IDLE_SECS",
                DEFAULT_SESSION_IDLE_SECS,
            )),
        }
    }
}
