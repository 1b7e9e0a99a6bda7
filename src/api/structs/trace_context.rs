/// W3C trace context of one request.
///
/// `trace_id` is 32 lowercase hex digits and `span_id` 16. When the caller
/// sent a valid `traceparent`, its trace id is kept and its span becomes
/// `parent_span_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_id: String,
    pub span_id: String,
    pub parent_span_id: Option<String>,
}
