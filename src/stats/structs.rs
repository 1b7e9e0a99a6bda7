//! Statistics data structures.

/// Snapshot of current statistics values.
pub mod stats;

/// Live atomic counters.
pub mod stats_atomics;

/// One cumulative histogram bucket.
pub mod latency_bucket;

/// Default `MetricsRecorder` backed by `StatsAtomics`.
pub mod stats_recorder;
