use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// One validated temperature/humidity reading.
///
/// Samples are created only by the ingestion validator, which stamps them
/// with local capture time — the feed carries no authoritative sample clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Capture time, assigned when the reading passed validation.
    pub timestamp: DateTime<Utc>,
    /// Temperature in °C.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

impl Sample {
    /// Build a sample stamped with the current time.
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            timestamp: Utc::now(),
            temperature,
            humidity,
        }
    }
}

/// Which producer feeds the store — decided once at startup and fixed for
/// the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    /// Samples arrive from the external feed.
    Live,
    /// The feed was unreachable; a local generator produces samples.
    Simulated,
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityState::Live => write!(f, "live"),
            ConnectivityState::Simulated => write!(f, "simulated"),
        }
    }
}

/// Recency filter applied to a store snapshot.  Not stored anywhere —
/// computed per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Every sample currently buffered.
    All,
    /// Samples newer than the given number of minutes.
    Minutes(u32),
}

impl Window {
    /// Window presets offered to the rendering layer.
    pub const PRESETS: [u32; 4] = [1, 5, 15, 60];

    /// `0` means "all data"; anything else is a minute count.
    pub fn from_minutes(minutes: u32) -> Self {
        if minutes == 0 {
            Window::All
        } else {
            Window::Minutes(minutes)
        }
    }
}
