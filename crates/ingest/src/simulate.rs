use crate::validate::{ingest_reading, Ingest};
use clima_config::LimitsConfig;
use clima_core::SampleStore;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{info, warn};

/// Baselines the generator perturbs — a warm, humid study area.
const TEMP_BASELINE: f64 = 29.0;
const HUMIDITY_BASELINE: f64 = 80.0;
const NOISE: f64 = 0.5;

/// Spawn the fallback producer: a periodic task that synthesizes a
/// plausible reading every `interval_ms` and routes it through the same
/// validator as the live feed.
///
/// The wait between ticks also watches `shutdown`, so a stop request is
/// observed within one interval at worst.  The task also stops when the
/// shutdown sender is dropped.
pub fn spawn_simulator(
    store: Arc<SampleStore>,
    limits: LimitsConfig,
    interval_ms: u64,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    info!("starting simulated producer ({interval_ms} ms interval)");

    tokio::spawn(async move {
        let mut ticker = time::interval(Duration::from_millis(interval_ms));

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.changed() => {
                    info!("simulated producer stopping");
                    break;
                }
            }

            let (temperature, humidity) = synth_reading();
            match ingest_reading(temperature, humidity, &limits) {
                Ingest::Accepted(sample) => store.append(sample),
                // Only reachable if the configured limits exclude the baselines.
                Ingest::Rejected(reason) => warn!("discarding simulated reading: {reason}"),
            }
        }
    })
}

fn synth_reading() -> (f64, f64) {
    let mut rng = rand::thread_rng();
    (
        TEMP_BASELINE + rng.gen_range(-NOISE..=NOISE),
        HUMIDITY_BASELINE + rng.gen_range(-NOISE..=NOISE),
    )
}
