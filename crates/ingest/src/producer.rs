use crate::simulate::spawn_simulator;
use crate::validate::{ingest_message, Ingest};
use clima_config::{DashConfig, LimitsConfig};
use clima_core::{ConnectivityState, SampleStore};
use clima_feed::{FeedClient, FeedStream};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

/// Decide where samples come from and start exactly one producer.
///
/// The live feed gets a single connection attempt.  Success wires its
/// payload stream through the validator into the store; failure starts the
/// simulator instead.  The choice is fixed for the process lifetime —
/// there is no reconnect and no later failover in either direction.
pub async fn start(
    config: &DashConfig,
    store: Arc<SampleStore>,
    shutdown: watch::Receiver<bool>,
) -> ConnectivityState {
    let client = FeedClient::new(
        &config.feed.addr,
        &config.feed.topic,
        Duration::from_millis(config.feed.connect_timeout_ms),
    );

    match client.connect().await {
        Ok(feed) => {
            spawn_forwarder(feed, store, config.limits.clone(), shutdown);
            ConnectivityState::Live
        }
        Err(e) => {
            warn!("live feed unavailable: {e}; falling back to simulation");
            spawn_simulator(
                store,
                config.limits.clone(),
                config.polling.update_interval_ms,
                shutdown,
            );
            ConnectivityState::Simulated
        }
    }
}

/// Forward raw feed payloads through validation into the store.
///
/// Rejections are logged and swallowed here so a bad payload can never
/// take the delivery path down.
fn spawn_forwarder(
    feed: FeedStream,
    store: Arc<SampleStore>,
    limits: LimitsConfig,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut payloads = feed.spawn_listener();

    tokio::spawn(async move {
        loop {
            tokio::select! {
                maybe = payloads.recv() => match maybe {
                    Some(raw) => match ingest_message(&raw, &limits) {
                        Ingest::Accepted(sample) => store.append(sample),
                        Ingest::Rejected(reason) => warn!("discarding feed payload: {reason}"),
                    },
                    None => break, // listener ended: feed closed the connection
                },
                _ = shutdown.changed() => break,
            }
        }
        info!("live producer stopped");
    });
}
