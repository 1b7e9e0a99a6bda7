use std::sync::Arc;
use std::time::Instant;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::web::Data;
use crate::api::api::{api_service_error_response, api_service_finish, api_service_metadata_headers, api_service_pipeline_run};
use crate::api::impls::trace_context::TRACEPARENT_HEADER;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::trace_context::TraceContext;
use crate::stats::enums::stats_event::StatsEvent;

pub const CONTENT_TYPE_PKIX_CERT: &str = "application/pkix-cert";

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let started = Instant::now();
    let trace = TraceContext::from_request(&request);
    data.metrics.record_event(StatsEvent::RequestsCertificate, 1);

    let response = match api_service_pipeline_run(&data, &trace, "certificate", |pipeline| pipeline.certificate()).await {
        Ok(document) => {
            let mut builder = HttpResponse::Ok();
            api_service_metadata_headers(&mut builder, &document.metadata);
            builder
                .insert_header((TRACEPARENT_HEADER, trace.traceparent()))
                .content_type(CONTENT_TYPE_PKIX_CERT)
                .body(document.der)
        }
        Err(error) => api_service_error_response(&request, &data, &trace, started, &error),
    };

    api_service_finish(&data, started, &response);
    response
}
