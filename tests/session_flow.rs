use async_trait::async_trait;
use engagement_dashboard::errors::ConnectionError;
use engagement_dashboard::models::{Dataset, FilterResponse, Record, SessionResponse};
use engagement_dashboard::{router, AppState, RecordSource};
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

struct CountingSource {
    calls: AtomicUsize,
    delay: Duration,
}

#[async_trait]
impl RecordSource for CountingSource {
    async fn fetch(&self) -> Result<Dataset, ConnectionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(Dataset::from(vec![
            Record::new("a", 10, 2),
            Record::new("b", 5, 7),
            Record::new("a", 3, 1),
        ]))
    }
}

async fn serve() -> (String, Arc<CountingSource>) {
    let (base_url, source, _) = serve_with_delay(Duration::ZERO).await;
    (base_url, source)
}

async fn serve_with_delay(delay: Duration) -> (String, Arc<CountingSource>, AppState) {
    let source = Arc::new(CountingSource {
        calls: AtomicUsize::new(0),
        delay,
    });
    let state = AppState::new("test.posts", source.clone(), Duration::from_secs(60));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), source, state)
}

fn session_client() -> Client {
    Client::builder().cookie_store(true).build().unwrap()
}

async fn load(client: &Client, base_url: &str) -> SessionResponse {
    client
        .post(format!("{base_url}/api/load"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn select(client: &Client, base_url: &str, usernames: &[&str]) -> FilterResponse {
    client
        .post(format!("{base_url}/api/filter"))
        .json(&serde_json::json!({ "usernames": usernames }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn repeated_loads_fetch_once_per_session() {
    let (base_url, source) = serve().await;
    let client = session_client();

    let first = load(&client, &base_url).await;
    let second = load(&client, &base_url).await;

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.record_count, 3);
    assert_eq!(first.unique_users, 2);
    assert_eq!(first.usernames, vec!["a".to_string(), "b".to_string()]);
    assert!(first.notice.is_none());
    assert_eq!(first.loaded_at, second.loaded_at);
}

#[tokio::test]
async fn filter_returns_selected_records_in_order() {
    let (base_url, _) = serve().await;
    let client = session_client();
    load(&client, &base_url).await;

    let filtered = select(&client, &base_url, &["a"]).await;
    assert_eq!(
        filtered.records.records(),
        &[Record::new("a", 10, 2), Record::new("a", 3, 1)]
    );
    assert_eq!(filtered.selection, vec!["a".to_string()]);
    assert_eq!(filtered.totals.len(), 1);
    assert_eq!(filtered.totals[0].likes, 13);
    assert!(filtered.prompt.is_none());

    let none = select(&client, &base_url, &[]).await;
    assert!(none.records.is_empty());
    assert!(none.totals.is_empty());
    assert!(none.prompt.is_some());
}

#[tokio::test]
async fn each_session_loads_independently() {
    let (base_url, source) = serve().await;
    let alice = session_client();
    let bob = session_client();

    load(&alice, &base_url).await;
    let untouched: SessionResponse = bob
        .get(format!("{base_url}/api/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!untouched.loaded);

    load(&bob, &base_url).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn ending_a_session_discards_its_dataset() {
    let (base_url, source) = serve().await;
    let client = session_client();
    load(&client, &base_url).await;

    let response = client
        .delete(format!("{base_url}/api/session"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let status: SessionResponse = client
        .get(format!("{base_url}/api/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!status.loaded);

    load(&client, &base_url).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn concurrent_first_loads_fetch_once() {
    let (base_url, source, _) = serve_with_delay(Duration::from_millis(200)).await;
    let client = session_client();
    // Establish the session cookie before racing the loads.
    client
        .get(format!("{base_url}/api/session"))
        .send()
        .await
        .unwrap();

    let (first, second) = tokio::join!(load(&client, &base_url), load(&client, &base_url));

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.record_count, 3);
    assert_eq!(second.record_count, 3);
    assert_eq!(first.loaded_at, second.loaded_at);
}

#[tokio::test]
async fn filter_before_load_does_not_start_sessions() {
    let (base_url, source, state) = serve_with_delay(Duration::ZERO).await;
    let client = session_client();

    for _ in 0..3 {
        let response = client
            .post(format!("{base_url}/api/filter"))
            .json(&serde_json::json!({ "usernames": ["a"] }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
        assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
    }
    assert_eq!(state.sessions.len().await, 0);

    // A live session that has not loaded yet is still refused, and kept.
    client
        .get(format!("{base_url}/api/session"))
        .send()
        .await
        .unwrap();
    let response = client
        .post(format!("{base_url}/api/filter"))
        .json(&serde_json::json!({ "usernames": ["a"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
    assert_eq!(state.sessions.len().await, 1);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}
