use crate::cache::SessionCache;
use crate::errors::AppError;
use crate::filter::{distinct_usernames, filter as select_records};
use crate::models::{FilterRequest, FilterResponse, Selection, SessionResponse};
use crate::session::SharedSession;
use crate::state::AppState;
use crate::stats::summarize;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const SESSION_COOKIE: &str = "session";

const EMPTY_NOTICE: &str =
    "No data available: the record store could not be reached or holds no posts.";
const EMPTY_SELECTION_PROMPT: &str = "Choose at least one username to draw the charts.";

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.namespace))
}

pub async fn get_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let (jar, session) = attach_session(&state, jar).await;
    let cache = session.lock().await;
    (jar, Json(describe(&cache)))
}

pub async fn load(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let (jar, session) = attach_session(&state, jar).await;
    let mut cache = session.lock().await;
    cache.get_or_load().await;
    (jar, Json(describe(&cache)))
}

pub async fn filter(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<FilterRequest>,
) -> Result<Json<FilterResponse>, AppError> {
    let not_loaded = || AppError::conflict("load the data before choosing users");
    // Filtering never starts a session; only a load does.
    let session = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.find(cookie.value()).await,
        None => None,
    }
    .ok_or_else(not_loaded)?;
    let dataset = session.lock().await.peek().cloned().ok_or_else(not_loaded)?;

    let selection: Selection = payload.usernames.into_iter().collect();
    let records = select_records(&dataset, &selection);
    let prompt = selection
        .is_empty()
        .then(|| EMPTY_SELECTION_PROMPT.to_owned());

    Ok(Json(FilterResponse {
        selection: selection.into_iter().collect(),
        totals: summarize(&records),
        records,
        prompt,
    }))
}

pub async fn end_session(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.end(cookie.value()).await;
    }
    let removal = Cookie::build(SESSION_COOKIE).path("/");
    (jar.remove(removal), StatusCode::NO_CONTENT)
}

async fn attach_session(state: &AppState, jar: CookieJar) -> (CookieJar, SharedSession) {
    let presented = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_owned());
    let (id, session) = state.sessions.open(presented.as_deref()).await;
    if presented.as_deref() == Some(id.as_str()) {
        return (jar, session);
    }

    let cookie = Cookie::build((SESSION_COOKIE, id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), session)
}

fn describe(cache: &SessionCache) -> SessionResponse {
    let Some(dataset) = cache.peek() else {
        return SessionResponse {
            loaded: false,
            loaded_at: None,
            record_count: 0,
            unique_users: 0,
            usernames: Vec::new(),
            notice: None,
        };
    };

    let usernames: Vec<String> = distinct_usernames(dataset).into_iter().collect();
    SessionResponse {
        loaded: true,
        loaded_at: cache.loaded_at().map(|at| at.to_rfc3339()),
        record_count: dataset.len(),
        unique_users: usernames.len(),
        usernames,
        notice: dataset.is_empty().then(|| EMPTY_NOTICE.to_owned()),
    }
}
