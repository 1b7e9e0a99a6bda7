use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpResponseBuilder, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{error, info, warn};
use serde_json::json;
use crate::api::api_certificate::api_service_certificate_get;
use crate::api::api_jwk::api_service_jwk_get;
use crate::api::api_stats::{api_service_prom_get, api_service_stats_get};
use crate::api::impls::trace_context::TRACEPARENT_HEADER;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::trace_context::TraceContext;
use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::structs::certificate_metadata::CertificateMetadata;
use crate::certificate::structs::certificate_pipeline::CertificatePipeline;
use crate::stats::enums::stats_event::StatsEvent;

pub const HEADER_CERTIFICATE_EXPIRATION: &str = "X-Certificate-Expiration";
pub const HEADER_CERTIFICATE_THUMBPRINT: &str = "X-Certificate-Thumbprint";
pub const HEADER_CERTIFICATE_THUMBPRINT_ALGORITHM: &str = "X-Certificate-Thumbprint-Algorithm";
pub const HEADER_CERTIFICATE_SERIAL_NUMBER: &str = "X-Certificate-Serial-Number";

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .expose_headers(vec![
            HEADER_CERTIFICATE_EXPIRATION,
            HEADER_CERTIFICATE_THUMBPRINT,
            HEADER_CERTIFICATE_THUMBPRINT_ALGORITHM,
            HEADER_CERTIFICATE_SERIAL_NUMBER,
        ])
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(Arc::clone(&data)));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/api/certificate").route(web::get().to(api_service_certificate_get)));
        cfg.service(web::resource("/api/jwk").route(web::get().to(api_service_jwk_get)));
        cfg.service(web::resource("/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("/metrics").route(web::get().to(api_service_prom_get)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let config = Arc::clone(&data.api_server_config);
    info!("[API] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(api_service_cors())
            .configure(api_service_routes(Arc::clone(&data)))
    })
        .keep_alive(Duration::from_secs(config.keep_alive.unwrap_or(60)))
        .client_request_timeout(Duration::from_secs(config.request_timeout.unwrap_or(30)))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout.unwrap_or(30)))
        .workers(config.threads.unwrap_or(1).max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// Runs `run` against the shared pipeline on the blocking pool, bounded by
/// the request deadline. Timeouts and pool failures become `Unexpected`.
pub async fn api_service_pipeline_run<T, F>(
    data: &ApiServiceData,
    trace: &TraceContext,
    operation: &'static str,
    run: F,
) -> Result<T, CertificateError>
where
    T: Send + 'static,
    F: FnOnce(&CertificatePipeline) -> Result<T, CertificateError> + Send + 'static,
{
    let pipeline = Arc::clone(&data.pipeline);
    let trace_id = trace.trace_id.clone();
    let deadline = data.request_deadline();
    let task = web::block(move || {
        crate::instrument_with_sentry!(name = "certificate pipeline", op = operation, trace = trace_id.as_str(), {
            run(pipeline.as_ref())
        })
    });
    match tokio::time::timeout(deadline, task).await {
        Err(_) => Err(CertificateError::Unexpected(format!(
            "{operation} exceeded the request deadline of {}ms",
            deadline.as_millis()
        ))),
        Ok(Err(blocking)) => Err(CertificateError::Unexpected(format!("{operation} worker failed: {blocking}"))),
        Ok(Ok(result)) => result,
    }
}

pub fn api_service_status_code(error: &CertificateError) -> StatusCode
{
    if error.is_caller_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Adds the `X-Certificate-*` headers. Only called for successful responses.
pub fn api_service_metadata_headers(builder: &mut HttpResponseBuilder, metadata: &CertificateMetadata)
{
    builder
        .insert_header((HEADER_CERTIFICATE_EXPIRATION, metadata.not_after.as_str()))
        .insert_header((HEADER_CERTIFICATE_THUMBPRINT, metadata.thumbprint.as_str()))
        .insert_header((HEADER_CERTIFICATE_THUMBPRINT_ALGORITHM, metadata.thumbprint_algorithm.header_value()))
        .insert_header((HEADER_CERTIFICATE_SERIAL_NUMBER, metadata.serial_number.as_str()));
}

/// Logs the failure as one JSON line and renders the error body.
pub fn api_service_error_response(
    request: &HttpRequest,
    data: &ApiServiceData,
    trace: &TraceContext,
    started: Instant,
    error: &CertificateError,
) -> HttpResponse
{
    let status = api_service_status_code(error);
    data.metrics.record_event(StatsEvent::for_error(error), 1);

    let client_ip = request
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| String::from("unknown"));
    let entry = json!({
        "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "path": request.path(),
        "method": request.method().as_str(),
        "client_ip": client_ip,
        "status": status.as_u16(),
        "duration_ms": started.elapsed().as_secs_f64() * 1000.0,
        "error_kind": error.kind(),
        "error_message": error.message(),
        "trace_id": trace.trace_id,
        "span_id": trace.span_id,
    });
    if error.is_caller_error() {
        warn!("[API] {entry}");
    } else {
        error!("[API] {entry}");
    }
    if let CertificateError::Unexpected(_) = error {
        sentry::capture_error(error);
    }

    HttpResponse::build(status)
        .insert_header((TRACEPARENT_HEADER, trace.traceparent()))
        .content_type(ContentType::json())
        .json(json!({
            "status": error.kind(),
            "message": error.message()
        }))
}

/// Records latency and the status class of a finished request.
pub fn api_service_finish(data: &ApiServiceData, started: Instant, response: &HttpResponse)
{
    data.metrics.record_duration(started.elapsed());
    if let Some(event) = StatsEvent::for_status(response.status().as_u16()) {
        data.metrics.record_event(event, 1);
    }
}

pub async fn api_service_not_found(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let started = Instant::now();
    data.metrics.record_event(StatsEvent::RequestsNotFound, 1);
    info!("[API] {} {} not found", request.method(), request.path());

    let response = HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }));
    api_service_finish(&data, started, &response);
    response
}
