use hivsim_core::simulation::SimulationResult;
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn_engine() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        hivsim_engine::serve(listener).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_healthz() {
    let base = spawn_engine().await;
    let body = reqwest::get(format!("{}/healthz", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_simulate_default_body() {
    let base = spawn_engine().await;
    let response = reqwest::Client::new()
        .post(format!("{}/simulate", base))
        .json(&json!({
            "t_max": 200,
            "therapy_start": 30,
            "release_rate": 0.1,
            "payload_type": "siRNA",
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let result: SimulationResult = response.json().await.unwrap();
    assert_eq!(result.len(), 200);
    assert_eq!(result.t[0], 1000.0);
    assert_eq!(result.v[0], 50.0);
    assert_eq!(result.l[0], 300.0);
}

#[tokio::test]
async fn test_missing_fields_use_defaults() {
    let base = spawn_engine().await;
    let result: SimulationResult = reqwest::Client::new()
        .post(format!("{}/simulate", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(result.len(), 200);
}

#[tokio::test]
async fn test_invalid_parameters_are_unprocessable() {
    let base = spawn_engine().await;
    let response = reqwest::Client::new()
        .post(format!("{}/simulate", base))
        .json(&json!({ "release_rate": 0.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);

    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("release_rate"));
}

#[tokio::test]
async fn test_oversized_horizon_is_unprocessable() {
    let base = spawn_engine().await;
    let response = reqwest::Client::new()
        .post(format!("{}/simulate", base))
        .json(&json!({ "t_max": 1_000_000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn test_integral_float_days_are_accepted() {
    let base = spawn_engine().await;
    let response = reqwest::Client::new()
        .post(format!("{}/simulate", base))
        .json(&json!({ "t_max": 40.0, "therapy_start": 30.0 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let result: SimulationResult = response.json().await.unwrap();
    assert_eq!(result.len(), 40);
}
