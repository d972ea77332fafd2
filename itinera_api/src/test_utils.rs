use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use itinera_core::planner::{PlannerParams, RoutePlanner};
use itinera_osrm::{OsrmClient, OsrmClientParams, Overview};
use parking_lot::Mutex;
use serde_json::Value;
use tower::ServiceExt;

use crate::app;
use crate::state::AppState;

pub fn test_app(osrm_url: &str) -> Router {
    let osrm = OsrmClient::new(
        OsrmClientParams {
            osrm_url: osrm_url.to_string(),
            timeout: Duration::from_secs(5),
            overview: Overview::Simplified,
        },
        reqwest::Client::new(),
    );

    app(Arc::new(AppState {
        planner: RoutePlanner::new(osrm, PlannerParams::default()),
    }))
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    (status, read_json(response).await)
}

/// An OSRM stand-in answering every `/route/v1` call with the same reply.
pub struct FakeOsrm {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeOsrm {
    /// `{profile}/{coordinates}` of each route request received.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

pub async fn spawn_fake_osrm(status: StatusCode, body: Value) -> FakeOsrm {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&requests);

    let router = Router::new().route(
        "/route/v1/{profile}/{coordinates}",
        get(
            move |Path((profile, coordinates)): Path<(String, String)>| async move {
                captured.lock().push(format!("{profile}/{coordinates}"));
                (status, Json(body))
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    FakeOsrm {
        url: format!("http://{addr}"),
        requests,
    }
}
