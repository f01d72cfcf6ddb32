use std::sync::Arc;
use serde_json::{json, Value};
use warp::http::StatusCode;
use finops_review::enums::review_phase::ReviewPhase;
use finops_review::errors::ReviewError;
use finops_review::structs::board::board_view::BoardView;
use finops_review::ui::board_manager::BoardManager;
use finops_review::ui::dashboard_server::routes;
use crate::common::{comparison_dataset, eventually, RecordingSink, StaticSource};

struct Dashboard {
    manager: Arc<BoardManager>,
    sink: Arc<RecordingSink>,
    board_id: String,
}

fn dashboard_with_source(source: StaticSource) -> Dashboard {
    let sink = Arc::new(RecordingSink::default());
    let manager = Arc::new(BoardManager::new(Arc::new(source), sink.clone(), "INC"));
    let board_id = manager.create_board(comparison_dataset());
    Dashboard { manager, sink, board_id }
}

fn dashboard() -> Dashboard {
    dashboard_with_source(StaticSource::new(Ok(comparison_dataset())))
}

impl Dashboard {
    async fn call(&self, method: &str, action: &str, body: Option<Value>) -> (StatusCode, Value) {
        let path = if action.is_empty() {
            format!("/api/board/{}", self.board_id)
        } else {
            format!("/api/board/{}/{}", self.board_id, action)
        };

        let mut request = warp::test::request().method(method).path(&path);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.reply(&routes(Arc::clone(&self.manager))).await;
        let value = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
        (response.status(), value)
    }

    async fn view(&self, method: &str, action: &str, body: Option<Value>) -> BoardView {
        let (status, value) = self.call(method, action, body).await;
        assert_eq!(status, StatusCode::OK, "unexpected response: {}", value);
        serde_json::from_value(value).unwrap()
    }
}

#[tokio::test]
async fn page_embeds_the_sanitized_board_id() {
    let board = dashboard();
    let filter = routes(Arc::clone(&board.manager));

    let response = warp::test::request()
        .path(&format!("/?board={}", board.board_id))
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8_lossy(response.body()).to_string();
    assert!(html.contains(&format!("const boardId = \"{}\"", board.board_id)));

    let response = warp::test::request()
        .path("/?board=%22%3Cscript%3E")
        .reply(&filter)
        .await;
    let html = String::from_utf8_lossy(response.body()).to_string();
    assert!(html.contains("const boardId = \"script\""));
}

#[tokio::test]
async fn board_view_carries_totals_and_formatted_rows() {
    let board = dashboard();

    let view = board.view("GET", "", None).await;

    assert_eq!(view.previous_total, "$165.00");
    assert_eq!(view.current_total, "$265.00");
    assert_eq!(view.total_trend, 1);
    assert_eq!(view.search_summary, "Showing all services");
    assert!(view.can_start_review);
    assert_eq!(view.phase, ReviewPhase::Idle);

    let glue = &view.rows[3];
    assert_eq!(glue.change_percent, "-");
    assert_eq!(glue.change, "+$50.00");
    assert!(glue.reviewable);
}

#[tokio::test]
async fn unknown_board_is_not_found() {
    let board = dashboard();
    let response = warp::test::request()
        .path("/api/board/missing")
        .reply(&routes(Arc::clone(&board.manager)))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"], "Review board 'missing' not found");
}

#[tokio::test]
async fn search_reports_matches() {
    let board = dashboard();

    let view = board.view("POST", "filter", Some(json!({ "query": "  AMAZON " }))).await;
    assert_eq!(view.query, "  AMAZON ");
    assert_eq!(view.search_summary, "Showing 3 of 5 services");
    assert_eq!(view.rows.iter().filter(|row| row.visible).count(), 3);

    let view = board.view("POST", "filter", Some(json!({ "query": "azure" }))).await;
    assert_eq!(view.search_summary, "No services found");
    assert!(!view.can_start_review);

    let view = board.view("POST", "filter", Some(json!({ "query": "" }))).await;
    assert_eq!(view.search_summary, "Showing all services");
}

#[tokio::test]
async fn full_review_submits_incidents_once() {
    let board = dashboard();

    let view = board.view("POST", "start", None).await;
    assert_eq!(view.phase, ReviewPhase::Active);
    let prompt = view.prompt.unwrap();
    assert_eq!(prompt.service, "Amazon EC2");
    assert_eq!(prompt.headline, "+$50.00 (+50.0%)");
    assert_eq!(prompt.progress, "1/3");

    let view = board.view("POST", "explanation", Some(json!({ "explanation": "launch traffic" }))).await;
    assert!(view.rows[0].completed);
    assert_eq!(view.prompt.unwrap().service, "AWS Lambda");

    let view = board.view("POST", "explanation", Some(json!({ "explanation": "" }))).await;
    let prompt = view.prompt.unwrap();
    assert_eq!(prompt.service, "AWS Glue");
    assert_eq!(prompt.headline, "+$50.00 (-)");

    let view = board.view("POST", "explanation", Some(json!({ "explanation": "new ETL pipeline" }))).await;
    assert_eq!(view.phase, ReviewPhase::Idle);
    assert!(view.prompt.is_none());
    let summary = view.last_summary.unwrap();
    assert_eq!(summary.reviewed_count, 3);
    assert_eq!(summary.incidents.len(), 2);

    let sink = Arc::clone(&board.sink);
    assert!(eventually(|| !sink.batches().is_empty()).await);
    let batches = board.sink.batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0][1].service, "AWS Glue");
    assert_eq!(batches[0][1].change_percent, 0.0);
}

#[tokio::test]
async fn narrowing_the_search_mid_review_ends_it_early() {
    let board = dashboard();

    let view = board.view("POST", "start", None).await;
    assert_eq!(view.prompt.unwrap().progress, "1/3");

    let view = board.view("POST", "filter", Some(json!({ "query": "ec2" }))).await;
    assert_eq!(view.phase, ReviewPhase::Active);
    assert_eq!(view.prompt.unwrap().service, "Amazon EC2");
    assert_eq!(view.search_summary, "Showing 1 of 5 services");

    let view = board.view("POST", "explanation", Some(json!({ "explanation": "launch traffic" }))).await;
    assert_eq!(view.phase, ReviewPhase::Idle);
    assert!(view.prompt.is_none());
    let summary = view.last_summary.unwrap();
    assert_eq!(summary.reviewed_count, 1);
    assert_eq!(summary.incidents.len(), 1);

    let sink = Arc::clone(&board.sink);
    assert!(eventually(|| !sink.batches().is_empty()).await);
    let batches = board.sink.batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 1);
    assert_eq!(batches[0][0].service, "Amazon EC2");
}

#[tokio::test]
async fn widening_the_search_mid_review_can_present_a_completed_row_again() {
    let board = dashboard();

    board.view("POST", "filter", Some(json!({ "query": "aws" }))).await;
    let view = board.view("POST", "start", None).await;
    assert_eq!(view.prompt.unwrap().service, "AWS Lambda");

    let view = board.view("POST", "explanation", Some(json!({ "explanation": "more invocations" }))).await;
    assert!(view.rows[2].completed);
    assert_eq!(view.prompt.unwrap().service, "AWS Glue");

    // Clearing the search puts EC2 back in front, so the cursor lands on Glue a second time.
    board.view("POST", "filter", Some(json!({ "query": "" }))).await;
    let view = board.view("POST", "explanation", Some(json!({ "explanation": "new ETL pipeline" }))).await;
    let prompt = view.prompt.unwrap();
    assert_eq!(prompt.service, "AWS Glue");
    assert_eq!(prompt.progress, "3/3");
    assert!(view.rows[3].completed && view.rows[3].active);
    assert!(!view.rows[0].completed);

    let view = board.view("POST", "explanation", Some(json!({ "explanation": "" }))).await;
    assert_eq!(view.phase, ReviewPhase::Idle);
    let summary = view.last_summary.unwrap();
    assert_eq!(summary.reviewed_count, 3);
    let services: Vec<_> = summary.incidents.iter().map(|i| i.service.as_str()).collect();
    assert_eq!(services, vec!["AWS Lambda", "AWS Glue"]);

    let sink = Arc::clone(&board.sink);
    assert!(eventually(|| !sink.batches().is_empty()).await);
    assert_eq!(board.sink.batches()[0].len(), 2);
}

#[tokio::test]
async fn review_that_records_nothing_does_not_submit() {
    let board = dashboard();

    board.view("POST", "filter", Some(json!({ "query": "lambda" }))).await;
    board.view("POST", "start", None).await;
    let view = board.view("POST", "explanation", Some(json!({ "explanation": "   " }))).await;

    let summary = view.last_summary.unwrap();
    assert_eq!(summary.reviewed_count, 1);
    assert!(summary.incidents.is_empty());

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(board.sink.batches().is_empty());
}

#[tokio::test]
async fn out_of_order_actions_conflict() {
    let board = dashboard();

    let (status, body) = board.call("POST", "explanation", Some(json!({ "explanation": "x" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Cannot submit an explanation while the review is idle");

    board.view("POST", "start", None).await;
    let (status, _) = board.call("POST", "start", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn reload_failure_keeps_the_board_and_reports_the_message() {
    let board = dashboard_with_source(StaticSource::new(Err(ReviewError::api_error(
        "/api/compare",
        Some(500),
        "Cost Explorer throttled the request",
    ))));

    let (status, body) = board.call("POST", "reload", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Cost Explorer throttled the request");

    let view = board.view("GET", "", None).await;
    assert_eq!(view.rows.len(), 5);
}

#[tokio::test]
async fn reload_discards_a_review_in_progress() {
    let board = dashboard();
    board.view("POST", "start", None).await;

    let view = board.view("POST", "reload", None).await;
    assert_eq!(view.phase, ReviewPhase::Idle);
    assert!(view.prompt.is_none());
    assert!(view.rows.iter().all(|row| !row.active && !row.completed));
}
