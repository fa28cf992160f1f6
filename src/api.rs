//! HTTP API for the dashboard frontend
//!
//! Exposes the site feed and the assistant. The chat session is held behind a
//! mutex so the append-only transcript keeps a single writer even though the
//! handlers run concurrently.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::delta::ForecastSummary;
use crate::feed::SiteFeed;
use crate::intent::Topic;
use crate::models::SiteRecord;
use crate::responder;
use crate::session::{ChatMessage, ConversationSession};

/// Shared state for the API
pub struct AppState {
    feed: SiteFeed,
    session: Mutex<ConversationSession>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    #[must_use]
    pub fn new(feed: SiteFeed) -> SharedState {
        Arc::new(Self {
            feed,
            session: Mutex::new(ConversationSession::new()),
        })
    }
}

/// Site record plus presentation extras derived from it
#[derive(Serialize, Deserialize)]
pub struct ApiSite {
    #[serde(flatten)]
    pub site: SiteRecord,
    /// Map marker color for the site's AQI category
    pub marker_color: String,
}

impl From<&SiteRecord> for ApiSite {
    fn from(site: &SiteRecord) -> Self {
        Self {
            site: site.clone(),
            marker_color: site.marker_severity().color().to_string(),
        }
    }
}

/// One user turn sent to the assistant
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Free-text question
    pub message: String,
    /// Currently selected site, if any
    pub site_id: Option<u32>,
}

/// Assistant reply for one turn
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Topic the input was matched to
    pub topic: Topic,
    /// Appended assistant message
    pub message: ChatMessage,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/sites", get(get_sites))
        .route("/sites/{id}", get(get_site))
        .route("/sites/{id}/forecast-summary", get(get_forecast_summary))
        .route("/chat", post(post_chat))
        .route("/chat/history", get(get_history))
        .route("/chat/quick-questions", get(get_quick_questions))
        .with_state(state)
}

async fn get_sites(State(state): State<SharedState>) -> Json<Vec<ApiSite>> {
    let sites = state.feed.sites().iter().map(ApiSite::from).collect();
    Json(sites)
}

async fn get_site(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<Json<ApiSite>, StatusCode> {
    state
        .feed
        .by_id(id)
        .map(|site| Json(ApiSite::from(site)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_forecast_summary(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<Json<ForecastSummary>, StatusCode> {
    state
        .feed
        .by_id(id)
        .map(|site| Json(ForecastSummary::for_site(site)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn post_chat(
    State(state): State<SharedState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    // Unknown selection is a caller bug, not an empty context
    let site = match request.site_id {
        Some(id) => Some(state.feed.by_id(id).ok_or(StatusCode::NOT_FOUND)?),
        None => None,
    };

    let mut session = state.session.lock().expect("chat session lock poisoned");
    let (topic, message) = session.exchange(&request.message, site);
    let response = ChatResponse {
        topic,
        message: message.clone(),
    };
    Ok(Json(response))
}

async fn get_history(State(state): State<SharedState>) -> Json<Vec<ChatMessage>> {
    let session = state.session.lock().expect("chat session lock poisoned");
    Json(session.history().cloned().collect())
}

async fn get_quick_questions() -> Json<&'static [&'static str]> {
    Json(responder::QUICK_QUESTIONS)
}
