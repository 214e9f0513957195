//! Seam traits for clock and metrics

mod clock;
mod metrics;
mod tracing_metrics;

pub use clock::{Clock, ManualClock, SystemClock};
pub use self::metrics::{NoopMetrics, WatchMetrics};
pub use tracing_metrics::TracingMetrics;

#[cfg(feature = "metrics")]
pub use self::metrics::MetricsCrateAdapter;
