use crate::api::structs::trace_context::TraceContext;
use actix_web::HttpRequest;
use uuid::Uuid;

pub const TRACEPARENT_HEADER: &str = "traceparent";

fn is_lower_hex(value: &str, length: usize) -> bool {
    value.len() == length && value.bytes().all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f'))
}

impl TraceContext {
    pub fn generate() -> TraceContext {
        TraceContext {
            trace_id: Uuid::new_v4().simple().to_string(),
            span_id: Self::new_span_id(),
            parent_span_id: None,
        }
    }

    /// Continues the caller's trace when `traceparent` is valid, otherwise
    /// starts a new one.
    pub fn from_request(request: &HttpRequest) -> TraceContext {
        request
            .headers()
            .get(TRACEPARENT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::parse_traceparent)
            .unwrap_or_else(Self::generate)
    }

    /// Parses `version-traceid-parentid-flags`, rejecting the all-zero ids
    /// and the reserved `ff` version.
    pub fn parse_traceparent(value: &str) -> Option<TraceContext> {
        let mut parts = value.trim().split('-');
        let version = parts.next()?;
        let trace_id = parts.next()?;
        let parent_id = parts.next()?;
        let flags = parts.next()?;
        if !is_lower_hex(version, 2) || version == "ff" {
            return None;
        }
        if version == "00" && parts.next().is_some() {
            return None;
        }
        if !is_lower_hex(trace_id, 32) || trace_id.bytes().all(|byte| byte == b'0') {
            return None;
        }
        if !is_lower_hex(parent_id, 16) || parent_id.bytes().all(|byte| byte == b'0') {
            return None;
        }
        if !is_lower_hex(flags, 2) {
            return None;
        }
        Some(TraceContext {
            trace_id: trace_id.to_string(),
            span_id: Self::new_span_id(),
            parent_span_id: Some(parent_id.to_string()),
        })
    }

    /// `traceparent` value identifying this request's span.
    pub fn traceparent(&self) -> String {
        format!("00-{}-{}-01", self.trace_id, self.span_id)
    }

    fn new_span_id() -> String {
        let mut span_id = Uuid::new_v4().simple().to_string();
        span_id.truncate(16);
        span_id
    }
}
