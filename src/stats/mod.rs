//! Request statistics and the metrics seam.
//!
//! The HTTP layer reports every request through the `MetricsRecorder`
//! trait. `StatsRecorder` is the in-process implementation: atomic counters
//! plus a fixed-bucket latency histogram, exported as JSON on `/stats` and
//! in Prometheus text format on `/metrics`.
//!
//! # Statistics Categories
//!
//! - Requests per endpoint
//! - Responses per status class
//! - Errors per `CertificateError` kind
//! - Request latency histogram
//!
//! # Example
//!
//! ```rust,ignore
//! use private_jwk::stats::enums::stats_event::StatsEvent;
//! use private_jwk::stats::structs::stats_recorder::StatsRecorder;
//! use private_jwk::stats::traits::metrics_recorder::MetricsRecorder;
//!
//! let recorder = StatsRecorder::new();
//! recorder.record_event(StatsEvent::RequestsJwk, 1);
//! let stats = recorder.snapshot();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

/// The metrics recording seam.
pub mod traits;
