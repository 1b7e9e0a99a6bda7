use std::time::Duration;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_recorder::StatsRecorder;
use crate::stats::traits::metrics_recorder::MetricsRecorder;

impl StatsRecorder {
    pub fn new() -> StatsRecorder {
        StatsRecorder::default()
    }
}

impl MetricsRecorder for StatsRecorder {
    fn record_event(&self, event: StatsEvent, value: i64) {
        self.stats.update(event, value);
    }

    fn record_duration(&self, duration: Duration) {
        self.stats.observe(duration);
    }

    fn snapshot(&self) -> Stats {
        self.stats.snapshot()
    }
}
