use anyhow::{Context, Result};
use colored::Colorize;
use tokio::net::TcpListener;

/// Serves the reference simulation engine until the process is stopped.
pub async fn run(bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    let addr = listener.local_addr()?;

    println!(
        "{}",
        format!("Simulation engine listening on http://{}", addr).bright_green()
    );
    tracing::info!("[Serve] POST http://{}/simulate", addr);

    hivsim_engine::serve(listener)
        .await
        .context("Simulation engine stopped unexpectedly")
}
