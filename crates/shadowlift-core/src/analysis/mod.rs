//! Base-layer statistics and adaptive shadow tuning
//!
//! The shadow response adapts to each image: a display-domain histogram of
//! the base layer yields a handful of percentiles, and those drive the range,
//! gate, notch and midtone parameters used by the tone strategies.

mod histogram;
mod tuning;


pub use histogram::{build_histogram, percentile_from_histogram, HISTOGRAM_BINS};
pub use tuning::{BasePercentiles, ShadowTuning};
