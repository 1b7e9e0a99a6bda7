/// Sentry transaction helpers.
pub mod sentry_tracing;
