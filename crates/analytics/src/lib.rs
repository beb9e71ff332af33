//! Pure computations over a window of samples.
//!
//! Everything in this crate is a total function of its input: empty or
//! degenerate windows produce sentinel values (`None`, the default unit
//! range, the identity matrix), never errors and never panics.

pub mod corr;
pub mod range;
pub mod stats;

pub use corr::correlation_matrix;
pub use range::{safe_range, value_bounds, DEFAULT_RANGE};
pub use stats::{latest, summary, Metric, Summary};
