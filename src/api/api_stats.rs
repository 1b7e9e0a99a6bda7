use std::sync::Arc;
use std::time::Instant;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::api_service_finish;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

pub const PROMETHEUS_ID: &str = "private_jwk";

#[tracing::instrument(level = "debug")]
pub async fn api_service_stats_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let started = Instant::now();
    data.metrics.record_event(StatsEvent::RequestsStats, 1);

    let response = HttpResponse::Ok().content_type(ContentType::json()).json(data.metrics.snapshot());
    api_service_finish(&data, started, &response);
    response
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_prom_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let started = Instant::now();
    data.metrics.record_event(StatsEvent::RequestsStats, 1);

    let string_output = api_service_prom_render(PROMETHEUS_ID, &data.metrics.snapshot());
    let response = HttpResponse::Ok().content_type(ContentType::plaintext()).body(string_output);
    api_service_finish(&data, started, &response);
    response
}

pub fn api_service_prom_render(prometheus_id: &str, stats: &Stats) -> String
{
    let mut string_output = String::with_capacity(4096);

    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "gauge", "started", stats.started, true, Some(&format!("{prometheus_id} gauge metrics"))));

    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "requests_certificate", stats.requests_certificate, true, Some(&format!("{prometheus_id} counter metrics"))));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "requests_jwk", stats.requests_jwk, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "requests_stats", stats.requests_stats, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "requests_not_found", stats.requests_not_found, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "responses_2xx", stats.responses_2xx, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "responses_4xx", stats.responses_4xx, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "responses_5xx", stats.responses_5xx, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "errors_configuration", stats.errors_configuration, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "errors_certificate_load", stats.errors_certificate_load, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "errors_key_type", stats.errors_key_type, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "errors_unexpected", stats.errors_unexpected, false, None));

    string_output.push_str(&api_service_prom_generate_histogram(prometheus_id, stats));

    string_output
}

pub fn api_service_prom_generate_line(id: &str, type_metric: &str, metric: &str, value: i64, without_header: bool, description: Option<&str>) -> String
{
    if without_header {
        format!(
            "# HELP {}_{} {}\n# TYPE {}_{} {}\n{}_{}{{metric=\"{}\"}} {}\n",
            id, type_metric, description.unwrap_or(""),
            id, type_metric, type_metric,
            id, type_metric, metric, value
        )
    } else {
        format!("{id}_{type_metric}{{metric=\"{metric}\"}} {value}\n")
    }
}

/// Latency histogram in milliseconds, `le` labels included.
pub fn api_service_prom_generate_histogram(id: &str, stats: &Stats) -> String
{
    let mut output = format!(
        "# HELP {id}_request_duration_ms request latency in milliseconds\n# TYPE {id}_request_duration_ms histogram\n"
    );
    for bucket in &stats.latency_buckets {
        let le = match bucket.le_ms {
            Some(bound) => bound.to_string(),
            None => String::from("+Inf"),
        };
        output.push_str(&format!("{id}_request_duration_ms_bucket{{le=\"{le}\"}} {}\n", bucket.count));
    }
    output.push_str(&format!("{id}_request_duration_ms_sum {}\n", stats.latency_sum_ms));
    output.push_str(&format!("{id}_request_duration_ms_count {}\n", stats.latency_count));
    output
}
