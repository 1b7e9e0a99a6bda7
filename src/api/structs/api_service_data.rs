//! Shared data context for API request handlers.

use crate::certificate::structs::certificate_pipeline::CertificatePipeline;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::stats::traits::metrics_recorder::MetricsRecorder;
use std::sync::Arc;

/// Shared application data available to all API request handlers.
///
/// Injected into Actix-web's application data. Every field is an `Arc`
/// so the same pipeline, cache and recorder serve all worker threads.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
///     let pipeline = &data.pipeline;
///     let metrics = &data.metrics;
///     // ...
/// }
/// ```
pub struct ApiServiceData {
    /// The `load -> extract/describe -> encode` chain, with its optional cache.
    pub pipeline: Arc<CertificatePipeline>,

    /// Telemetry sink for request counters and latency.
    pub metrics: Arc<dyn MetricsRecorder>,

    /// Configuration for this API server instance.
    pub api_server_config: Arc<ApiServerConfig>,
}
