use std::sync::Arc;
use std::time::Instant;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::{CacheControl, CacheDirective, ContentType};
use actix_web::web::Data;
use crate::api::api::{api_service_error_response, api_service_finish, api_service_metadata_headers, api_service_pipeline_run};
use crate::api::impls::trace_context::TRACEPARENT_HEADER;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::trace_context::TraceContext;
use crate::stats::enums::stats_event::StatsEvent;

#[tracing::instrument(level = "debug")]
pub async fn api_service_jwk_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let started = Instant::now();
    let trace = TraceContext::from_request(&request);
    data.metrics.record_event(StatsEvent::RequestsJwk, 1);

    let response = match api_service_pipeline_run(&data, &trace, "jwk", |pipeline| pipeline.jwk()).await {
        Ok(document) => {
            let mut builder = HttpResponse::Ok();
            api_service_metadata_headers(&mut builder, &document.metadata);
            builder
                .insert_header((TRACEPARENT_HEADER, trace.traceparent()))
                .insert_header(CacheControl(vec![CacheDirective::NoStore]))
                .content_type(ContentType::json())
                .json(&document.jwk)
        }
        Err(error) => api_service_error_response(&request, &data, &trace, started, &error),
    };

    api_service_finish(&data, started, &response);
    response
}
