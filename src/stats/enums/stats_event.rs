//! Statistics event types for tracking request metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all counters the HTTP layer can update.
///
/// # Categories
///
/// - **Requests**: Requests* variants, one per endpoint
/// - **Responses**: Responses* variants, one per status class
/// - **Errors**: Errors* variants, one per `CertificateError` kind
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsEvent {
    RequestsCertificate,
    RequestsJwk,
    RequestsStats,
    RequestsNotFound,
    Responses2xx,
    Responses4xx,
    Responses5xx,
    ErrorsConfiguration,
    ErrorsCertificateLoad,
    ErrorsKeyType,
    ErrorsUnexpected,
}
