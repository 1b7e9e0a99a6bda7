use sentry::{
    Transaction,
    TransactionContext
};

/// Starts a Sentry transaction tagged with the request's trace id. Only
/// active at trace log level.
pub fn start_trace_transaction(name: &str, operation: &str, trace_id: Option<&str>) -> Option<Transaction> {
    if log::max_level() >= log::LevelFilter::Trace {
        let ctx = TransactionContext::new(name, operation);
        let transaction = sentry::start_transaction(ctx);
        if let Some(trace_id) = trace_id {
            transaction.set_tag("trace_id", trace_id);
        }
        Some(transaction)
    } else {
        None
    }
}

#[macro_export]
macro_rules! instrument_with_sentry {
    (name = $name:expr, op = $op:expr, trace = $trace:expr, $body:block) => {{
        let transaction = $crate::utils::sentry_tracing::start_trace_transaction($name, $op, Some($trace));
        let result = $body;
        if let Some(txn) = transaction {
            txn.finish();
        }
        result
    }};
    (name = $name:expr, op = $op:expr, $body:block) => {{
        let transaction = $crate::utils::sentry_tracing::start_trace_transaction($name, $op, None);
        let result = $body;
        if let Some(txn) = transaction {
            txn.finish();
        }
        result
    }};
}
