use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `clima.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashConfig {
    /// Live feed connection parameters.
    pub feed: FeedConfig,
    /// In-memory sample buffer settings.
    pub buffer: BufferConfig,
    /// Polling cadence for the rendering layer.
    pub polling: PollingConfig,
    /// Validation bounds for inbound readings.
    pub limits: LimitsConfig,
}

/// Where the live feed lives and how long the startup connection attempt
/// may take.  The attempt happens exactly once; there is no reconnect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Broker address as `host:port`.
    pub addr: String,
    /// Subscription topic sent during the handshake.
    pub topic: String,
    /// Give up on the initial connection after this many milliseconds.
    pub connect_timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:1883".to_string(),
            topic: "study_area/climate".to_string(),
            connect_timeout_ms: 5_000,
        }
    }
}

/// In-memory sample buffer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Maximum number of samples held before the oldest are evicted.
    pub max_points: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self { max_points: 1500 }
    }
}

/// Polling cadence — shared by the rendering layer and the simulator tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Milliseconds between polls.
    pub update_interval_ms: u64,
    /// Window queried on each poll (minutes, 0 = all data).
    pub default_window_minutes: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 2_000,
            default_window_minutes: 5,
        }
    }
}

/// Bounds outside which a reading is treated as sensor/transport noise and
/// discarded rather than clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Exclusive lower temperature bound (°C).
    pub temp_min: f64,
    /// Exclusive upper temperature bound (°C).
    pub temp_max: f64,
    /// Inclusive lower humidity bound (%).
    pub humidity_min: f64,
    /// Inclusive upper humidity bound (%).
    pub humidity_max: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            temp_min: -10.0,
            temp_max: 60.0,
            humidity_min: 0.0,
            humidity_max: 100.0,
        }
    }
}
