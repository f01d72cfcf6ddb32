use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{
    DASHBOARD_PORT_SCAN_WIDTH, MAX_BOARD_ID_LENGTH, SERVER_SHUTDOWN_GRACE_PERIOD_MS, sleep_duration_millis,
};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::board::board_view::BoardView;
use crate::ui::board_manager::BoardManager;

#[derive(Debug, Deserialize)]
struct FilterRequest {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Deserialize)]
struct ExplanationRequest {
    #[serde(default)]
    explanation: String,
}

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

pub struct DashboardServer {
    board_manager: Arc<BoardManager>,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub fn new(board_manager: Arc<BoardManager>) -> Self {
        Self {
            board_manager,
            port: None,
            shutdown_tx: None,
        }
    }

    /// Bind to the first free port at or above `preferred_port` and serve in the background.
    pub async fn start(&mut self, preferred_port: u16) -> ReviewResult<u16> {
        let port = find_available_port(preferred_port).await?;
        self.port = Some(port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let routes = routes(Arc::clone(&self.board_manager));

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (_, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ReviewError::system_error("dashboard bind", &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 Dashboard server started on port {}", port);
        Ok(port)
    }

    pub fn url(&self, board_id: &str) -> Option<String> {
        self.port
            .map(|port| format!("http://127.0.0.1:{}/?board={}", port, board_id))
    }

    pub async fn shutdown(&mut self) -> ReviewResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ReviewError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Dashboard server shutdown complete");

        Ok(())
    }
}

/// Page plus JSON API. Exposed for in-process testing with `warp::test`.
pub fn routes(
    board_manager: Arc<BoardManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let page = warp::path::end()
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and_then(serve_dashboard_page);

    page.or(api_routes(board_manager))
}

fn api_routes(
    board_manager: Arc<BoardManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let manager_filter = warp::any().map(move || Arc::clone(&board_manager));

    let get_board = warp::path!("api" / "board" / String)
        .and(warp::get())
        .and(manager_filter.clone())
        .and_then(get_board_handler);

    let set_filter = warp::path!("api" / "board" / String / "filter")
        .and(warp::post())
        .and(warp::body::json())
        .and(manager_filter.clone())
        .and_then(set_filter_handler);

    let start_review = warp::path!("api" / "board" / String / "start")
        .and(warp::post())
        .and(manager_filter.clone())
        .and_then(start_review_handler);

    let submit_explanation = warp::path!("api" / "board" / String / "explanation")
        .and(warp::post())
        .and(warp::body::json())
        .and(manager_filter.clone())
        .and_then(submit_explanation_handler);

    let reload = warp::path!("api" / "board" / String / "reload")
        .and(warp::post())
        .and(manager_filter)
        .and_then(reload_handler);

    get_board
        .or(set_filter)
        .or(start_review)
        .or(submit_explanation)
        .or(reload)
}

async fn find_available_port(preferred_port: u16) -> ReviewResult<u16> {
    let end = preferred_port.saturating_add(DASHBOARD_PORT_SCAN_WIDTH);
    for port in preferred_port..end {
        if let Ok(listener) = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await {
            drop(listener);
            return Ok(port);
        }
    }
    Err(ReviewError::validation_error(
        "dashboard.port",
        &preferred_port.to_string(),
        "a free port within the scan range",
        Some("Pass --port with a different value"),
    ))
}

async fn serve_dashboard_page(params: HashMap<String, String>) -> Result<impl warp::Reply, Infallible> {
    let board_id = params.get("board")
        .map(|s| sanitize_board_id(s))
        .unwrap_or_default();

    let html = include_str!("static/index.html")
        .replace("{{BOARD_ID}}", &board_id);

    Ok(warp::reply::html(html))
}

pub fn sanitize_board_id(board_id: &str) -> String {
    board_id.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_BOARD_ID_LENGTH)
        .collect()
}

fn respond(result: ReviewResult<BoardView>) -> JsonReply {
    match result {
        Ok(view) => warp::reply::with_status(warp::reply::json(&view), StatusCode::OK),
        Err(e) => {
            log::warn!("⚠️ Dashboard request failed: {}", e);
            warp::reply::with_status(
                warp::reply::json(&json!({ "error": e.user_message() })),
                status_for(&e),
            )
        }
    }
}

fn status_for(error: &ReviewError) -> StatusCode {
    match error {
        ReviewError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        ReviewError::InvalidTransition { .. } => StatusCode::CONFLICT,
        ReviewError::ApiError { .. } | ReviewError::NetworkError { .. } => StatusCode::BAD_GATEWAY,
        ReviewError::SystemError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

fn checked_board_id(board_id: &str) -> ReviewResult<String> {
    let sanitized = sanitize_board_id(board_id);
    if sanitized.is_empty() {
        return Err(ReviewError::validation_error("board", board_id, "non-empty board id", None));
    }
    Ok(sanitized)
}

async fn get_board_handler(board_id: String, board_manager: Arc<BoardManager>) -> Result<JsonReply, Infallible> {
    Ok(respond(checked_board_id(&board_id).and_then(|id| board_manager.view(&id))))
}

async fn set_filter_handler(
    board_id: String,
    body: FilterRequest,
    board_manager: Arc<BoardManager>,
) -> Result<JsonReply, Infallible> {
    Ok(respond(
        checked_board_id(&board_id).and_then(|id| board_manager.set_filter(&id, &body.query)),
    ))
}

async fn start_review_handler(board_id: String, board_manager: Arc<BoardManager>) -> Result<JsonReply, Infallible> {
    Ok(respond(checked_board_id(&board_id).and_then(|id| board_manager.start_review(&id))))
}

async fn submit_explanation_handler(
    board_id: String,
    body: ExplanationRequest,
    board_manager: Arc<BoardManager>,
) -> Result<JsonReply, Infallible> {
    Ok(respond(
        checked_board_id(&board_id).and_then(|id| board_manager.submit_explanation(&id, &body.explanation)),
    ))
}

async fn reload_handler(board_id: String, board_manager: Arc<BoardManager>) -> Result<JsonReply, Infallible> {
    let result = match checked_board_id(&board_id) {
        Ok(id) => board_manager.reload(&id).await,
        Err(e) => Err(e),
    };
    Ok(respond(result))
}
