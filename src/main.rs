//! clima — ingestion core of a two-sensor climate dashboard.
//!
//! Buffers temperature/humidity readings from a live feed (or a simulated
//! fallback) and logs windowed analytics on a fixed cadence, standing in
//! for the rendering layer that would normally poll the same interfaces.
//!
//! Run with:  `RUST_LOG=info clima`

use anyhow::Result;
use clima_analytics::{correlation_matrix, latest, summary, value_bounds, Metric};
use clima_core::{ConnectivityState, SampleStore, Window};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("clima v{} starting", env!("CARGO_PKG_VERSION"));

    let config = clima_config::load(clima_config::default_path())?;
    let store = Arc::new(SampleStore::new(config.buffer.max_points));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let state = clima_ingest::start(&config, Arc::clone(&store), shutdown_rx).await;
    info!("data source: {state}");

    let window = Window::from_minutes(config.polling.default_window_minutes);
    let mut ticker =
        tokio::time::interval(Duration::from_millis(config.polling.update_interval_ms));

    loop {
        tokio::select! {
            _ = ticker.tick() => info!("{}", render_status(state, &store, window)),
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                let _ = shutdown_tx.send(true);
                break;
            }
        }
    }

    Ok(())
}

/// One status line per poll — the stand-in for the rendering collaborator.
/// An empty window is reported as a placeholder, never an error.
fn render_status(state: ConnectivityState, store: &SampleStore, window: Window) -> String {
    let samples = store.query(window);

    let Some(current) = latest(&samples) else {
        return format!(
            "{state} · buffer {}/{} · waiting for valid data",
            store.len(),
            store.capacity()
        );
    };

    let mut line = format!(
        "{state} · buffer {}/{} · t={:.2}{} h={:.2}{}",
        store.len(),
        store.capacity(),
        current.temperature,
        Metric::Temperature.unit(),
        current.humidity,
        Metric::Humidity.unit(),
    );

    for metric in [Metric::Temperature, Metric::Humidity] {
        if let Some(s) = summary(&samples, metric) {
            let (lo, hi) = value_bounds(&samples, metric, metric.gauge_pad());
            line.push_str(&format!(
                " · {metric:?}: n={} avg={:.2} min={:.2} max={:.2} gauge=[{lo:.2}, {hi:.2}]",
                s.count, s.mean, s.min, s.max
            ));
        }
    }

    let corr = correlation_matrix(&samples);
    line.push_str(&format!(" · corr={:.3}", corr[0][1]));

    line
}
