pub mod error;
pub mod sample;
pub mod store;

pub use error::{ClimaError, Result};
pub use sample::{ConnectivityState, Sample, Window};
pub use store::SampleStore;
