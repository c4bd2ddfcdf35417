use anyhow::{Context, Result};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::info;

use crate::chat::{ChatAgent, ConversationTurn, LyricsBlock, TrackRecord, WorkflowBlock};
use crate::mailing_list::MailingList;
use crate::session::SessionStore;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct ChatBody {
    #[serde(default)]
    pub message: String,
    pub email: String,
}

/// One assistant turn on the wire. `tracks` is always present (possibly
/// empty); `lyrics` and `workflow` serialize as explicit nulls when absent.
#[derive(Serialize)]
struct ChatResponseBody {
    message: String,
    tracks: Vec<TrackRecord>,
    lyrics: Option<LyricsBlock>,
    workflow: Option<WorkflowBlock>,
}

impl From<ConversationTurn> for ChatResponseBody {
    fn from(turn: ConversationTurn) -> Self {
        Self {
            message: turn.text,
            tracks: turn.tracks,
            lyrics: turn.lyrics,
            workflow: turn.workflow,
        }
    }
}

#[derive(Deserialize, Debug)]
struct CollectEmailBody {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
struct EmailsResponse {
    emails: Vec<String>,
    count: usize,
}

#[derive(Deserialize, Debug)]
struct SignoutBody {
    #[serde(default)]
    pub email: String,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

async fn chat(
    State(agent): State<GuardedChatAgent>,
    Json(body): Json<ChatBody>,
) -> Json<ChatResponseBody> {
    let turn = agent.handle_turn(&body.email, &body.message).await;
    Json(ChatResponseBody::from(turn))
}

async fn collect_email(
    State(mailing_list): State<GuardedMailingList>,
    Json(body): Json<CollectEmailBody>,
) -> Json<serde_json::Value> {
    if mailing_list.add(&body.email) {
        info!(email = %body.email, "Collected new mailing list signup");
    }
    Json(serde_json::json!({"status": "ok"}))
}

async fn get_emails(State(mailing_list): State<GuardedMailingList>) -> Json<EmailsResponse> {
    let emails = mailing_list.emails();
    let count = emails.len();
    Json(EmailsResponse { emails, count })
}

async fn signout(
    State(sessions): State<GuardedSessionStore>,
    Json(body): Json<SignoutBody>,
) -> StatusCode {
    sessions.clear(&body.email).await;
    StatusCode::OK
}

fn build_cors(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid allowed origin {:?}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    // Credentialed CORS forbids wildcards, so methods and headers are listed
    // explicitly.
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

pub fn make_app(
    config: ServerConfig,
    chat_agent: Arc<ChatAgent>,
    sessions: Arc<dyn SessionStore>,
    mailing_list: Arc<MailingList>,
) -> Result<Router> {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        chat_agent,
        sessions,
        mailing_list,
        hash: env!("GIT_HASH").to_owned(),
    };

    let api_routes: Router = Router::new()
        .route("/chat", post(chat))
        .route("/collect-email", post(collect_email))
        .route("/emails", get(get_emails))
        .route("/signout", post(signout))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path.clone() {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app = home_router
        .merge(api_routes)
        .layer(build_cors(&config.allowed_origins)?)
        .layer(middleware::from_fn_with_state(config, log_requests));

    Ok(app)
}

pub async fn run_server(
    config: ServerConfig,
    chat_agent: Arc<ChatAgent>,
    sessions: Arc<dyn SessionStore>,
    mailing_list: Arc<MailingList>,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, chat_agent, sessions, mailing_list)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    info!("Listening on port {}", port);
    Ok(axum::serve(listener, app).await?)
}
