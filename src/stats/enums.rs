/// Counters that can be incremented.
pub mod stats_event;
