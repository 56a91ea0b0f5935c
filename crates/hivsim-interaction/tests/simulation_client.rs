use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use hivsim_core::simulation::{PayloadType, SimulationEngine, SimulationParameters};
use hivsim_interaction::SimulationClient;
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Engine router that records every request body it receives.
fn recording_engine(seen: Arc<Mutex<Vec<Value>>>) -> Router {
    Router::new().route(
        "/simulate",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(body.clone());
                let params: SimulationParameters = serde_json::from_value(body).unwrap();
                Json(hivsim_engine::simulate(&params))
            }
        }),
    )
}

#[tokio::test]
async fn test_run_against_reference_engine() {
    let base = spawn(hivsim_engine::router()).await;
    let client = SimulationClient::new(base);

    let result = client.run(&SimulationParameters::default()).await.unwrap();

    assert_eq!(result.len(), 200);
    assert_eq!(result.t.len(), result.time.len());
    assert_eq!(result.v.len(), result.time.len());
    assert_eq!(result.l.len(), result.time.len());
}

#[tokio::test]
async fn test_request_body_is_the_parameters() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let base = spawn(recording_engine(seen.clone())).await;
    let client = SimulationClient::new(base);

    let params = SimulationParameters {
        t_max: 200,
        therapy_start: 10,
        release_rate: 0.5,
        payload_type: PayloadType::ShRna,
    };
    client.simulate(&params).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        json!({
            "t_max": 200,
            "therapy_start": 10,
            "release_rate": 0.5,
            "payload_type": "shRNA",
        })
    );
}

#[tokio::test]
async fn test_unreachable_engine_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SimulationClient::new(format!("http://{}", addr));
    let err = client.run(&SimulationParameters::default()).await.unwrap_err();
    assert!(err.is_transport_failure());
}

#[tokio::test]
async fn test_malformed_body_is_transport_failure() {
    let router = Router::new().route("/simulate", post(|| async { "definitely not json" }));
    let client = SimulationClient::new(spawn(router).await);

    let err = client.run(&SimulationParameters::default()).await.unwrap_err();
    assert!(err.is_transport_failure());
}

#[tokio::test]
async fn test_incomplete_body_is_transport_failure() {
    let router = Router::new().route(
        "/simulate",
        post(|| async { Json(json!({ "time": [0, 1], "T": [1.0, 2.0] })) }),
    );
    let client = SimulationClient::new(spawn(router).await);

    let err = client.run(&SimulationParameters::default()).await.unwrap_err();
    assert!(err.is_transport_failure());
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let router = Router::new().route(
        "/simulate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = SimulationClient::new(spawn(router).await);

    let err = client.run(&SimulationParameters::default()).await.unwrap_err();
    assert!(err.is_transport_failure());
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_slow_engine_times_out() {
    let router = Router::new().route(
        "/simulate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "late"
        }),
    );
    let client = SimulationClient::new(spawn(router).await).with_timeout(Duration::from_millis(100));

    let err = client.run(&SimulationParameters::default()).await.unwrap_err();
    assert!(err.is_transport_failure());
}
