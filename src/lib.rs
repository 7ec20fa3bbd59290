pub mod app;
pub mod cache;
pub mod config;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod session;
pub mod source;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use source::{MongoSource, RecordSource};
pub use state::AppState;
