use crate::api::structs::api_service_data::ApiServiceData;
use crate::certificate::structs::certificate_pipeline::CertificatePipeline;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::stats::traits::metrics_recorder::MetricsRecorder;
use std::sync::Arc;
use std::time::Duration;

/// Deadline applied when `request_timeout` is not configured.
pub const DEFAULT_REQUEST_DEADLINE: Duration = Duration::from_secs(30);

impl std::fmt::Debug for ApiServiceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiServiceData")
            .field("pipeline", &self.pipeline)
            .field("api_server_config", &self.api_server_config)
            .finish_non_exhaustive()
    }
}

impl ApiServiceData {
    pub fn new(
        pipeline: Arc<CertificatePipeline>,
        metrics: Arc<dyn MetricsRecorder>,
        api_server_config: Arc<ApiServerConfig>,
    ) -> ApiServiceData {
        ApiServiceData {
            pipeline,
            metrics,
            api_server_config,
        }
    }

    /// How long one pipeline run may take before the request fails.
    pub fn request_deadline(&self) -> Duration {
        match self.api_server_config.request_timeout {
            Some(seconds) if seconds > 0 => Duration::from_secs(seconds),
            _ => DEFAULT_REQUEST_DEADLINE,
        }
    }
}
