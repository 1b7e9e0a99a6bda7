use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use std::time::Duration;

/// Telemetry sink handed to the HTTP layer.
#[cfg_attr(test, mockall::automock)]
pub trait MetricsRecorder: Send + Sync {
    /// Adds `value` (which may be negative) to the counter behind `event`.
    fn record_event(&self, event: StatsEvent, value: i64);

    /// Adds one observation to the latency histogram.
    fn record_duration(&self, duration: Duration);

    fn snapshot(&self) -> Stats;
}
