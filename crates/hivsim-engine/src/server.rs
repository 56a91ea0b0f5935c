//! HTTP surface of the reference engine.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use hivsim_core::simulation::{SimulationParameters, SimulationResult};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::model;

/// Upper bound on simulated days per request.
pub const MAX_T_MAX: u32 = 100_000;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Builds the engine router: `POST /simulate`, `GET /healthz`.
pub fn router() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/simulate", post(simulate))
}

/// Serves the router on `listener` until the task is dropped.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("[Engine] Listening on http://{}", addr);
    }
    axum::serve(listener, router()).await
}

async fn healthz() -> &'static str {
    "ok"
}

async fn simulate(
    Json(params): Json<SimulationParameters>,
) -> Result<Json<SimulationResult>, (StatusCode, Json<ErrorResponse>)> {
    let unprocessable = |detail: String| {
        tracing::warn!("[Engine] Rejected parameters: {}", detail);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse { detail }))
    };

    params.validate().map_err(|e| unprocessable(e.to_string()))?;
    if params.t_max > MAX_T_MAX {
        return Err(unprocessable(format!("t_max must not exceed {}", MAX_T_MAX)));
    }

    tracing::info!(
        "[Engine] Simulating {} days, therapy from day {} at rate {} ({})",
        params.t_max,
        params.therapy_start,
        params.release_rate,
        params.payload_type
    );
    Ok(Json(model::simulate(&params)))
}
