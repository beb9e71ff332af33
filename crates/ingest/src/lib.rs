pub mod producer;
pub mod simulate;
pub mod validate;

pub use producer::start;
pub use simulate::spawn_simulator;
pub use validate::{ingest_message, ingest_reading, Ingest, RejectReason};
