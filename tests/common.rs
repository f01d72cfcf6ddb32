use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;
use finops_review::errors::ReviewResult;
use finops_review::services::api_client::ApiClient;
use finops_review::structs::comparison_dataset::ComparisonDataset;
use finops_review::structs::config::api_config::ApiConfig;
use finops_review::structs::incident::Incident;
use finops_review::structs::submit_receipt::SubmitReceipt;
use finops_review::traits::comparison_source::ComparisonSource;
use finops_review::traits::incident_sink::IncidentSink;

pub fn comparison_json() -> Value {
    json!({
        "previous_month": { "name": "August 2026", "start": "2026-08-01", "end": "2026-08-31" },
        "current_month": { "name": "September 2026", "start": "2026-09-01", "end": "2026-09-30" },
        "comparison": [
            { "service": "Amazon EC2", "previous_cost": 100.0, "current_cost": 150.0, "change": 50.0, "change_percent": 50.0, "status": "increased" },
            { "service": "Amazon S3", "previous_cost": 40.0, "current_cost": 30.0, "change": -10.0, "change_percent": -25.0, "status": "decreased" },
            { "service": "AWS Lambda", "previous_cost": 20.0, "current_cost": 30.0, "change": 10.0, "change_percent": 50.0, "status": "increased" },
            { "service": "AWS Glue", "previous_cost": 0.0, "current_cost": 50.0, "change": 50.0, "change_percent": null, "status": "increased" },
            { "service": "Amazon Route 53", "previous_cost": 5.0, "current_cost": 5.0, "change": 0.0, "change_percent": 0.0, "status": "unchanged" }
        ]
    })
}

pub fn comparison_dataset() -> ComparisonDataset {
    serde_json::from_value(comparison_json()).expect("fixture matches the dataset shape")
}

/// Stand-in for the cost API. Every `POST /api/incidents` body is recorded.
pub struct FakeBackend {
    pub addr: SocketAddr,
    pub posted: Arc<Mutex<Vec<Value>>>,
}

impl FakeBackend {
    pub async fn start(compare_status: StatusCode, compare_body: String) -> Self {
        let posted = Arc::new(Mutex::new(Vec::new()));

        let compare = warp::path!("api" / "compare")
            .and(warp::get())
            .map(move || warp::reply::with_status(compare_body.clone(), compare_status));

        let store = Arc::clone(&posted);
        let submit = warp::path!("api" / "incidents")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |body: Value| {
                let count = body["incidents"].as_array().map(Vec::len).unwrap_or(0);
                store.lock().unwrap().push(body);
                warp::reply::json(&json!({ "message": format!("Saved {} incidents", count), "count": count }))
            });

        let store = Arc::clone(&posted);
        let list = warp::path!("api" / "incidents")
            .and(warp::get())
            .map(move || {
                let incidents: Vec<Value> = store
                    .lock()
                    .unwrap()
                    .iter()
                    .flat_map(|body| body["incidents"].as_array().cloned().unwrap_or_default())
                    .collect();
                warp::reply::json(&json!({ "count": incidents.len(), "incidents": incidents }))
            });

        let (addr, server) = warp::serve(compare.or(submit).or(list)).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { addr, posted }
    }

    pub async fn with_comparison() -> Self {
        Self::start(StatusCode::OK, comparison_json().to_string()).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: self.base_url(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    pub fn posted(&self) -> Vec<Value> {
        self.posted.lock().unwrap().clone()
    }
}

/// Source that always answers with the same result.
pub struct StaticSource {
    result: ReviewResult<ComparisonDataset>,
}

impl StaticSource {
    pub fn new(result: ReviewResult<ComparisonDataset>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl ComparisonSource for StaticSource {
    async fn fetch_comparison(&self) -> ReviewResult<ComparisonDataset> {
        self.result.clone()
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub batches: Mutex<Vec<Vec<Incident>>>,
}

impl RecordingSink {
    pub fn batches(&self) -> Vec<Vec<Incident>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl IncidentSink for RecordingSink {
    async fn submit(&self, incidents: Vec<Incident>) -> ReviewResult<SubmitReceipt> {
        let submitted = incidents.len();
        self.batches.lock().unwrap().push(incidents);
        Ok(SubmitReceipt {
            submitted,
            body: Value::Null,
        })
    }
}

/// Poll until `check` holds; background submissions run on their own task.
pub async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
