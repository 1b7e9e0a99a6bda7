pub mod metrics_recorder;
