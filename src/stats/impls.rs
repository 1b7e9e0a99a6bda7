pub mod stats_event;
pub mod stats_atomics;
pub mod stats_recorder;
