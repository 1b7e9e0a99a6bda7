use crate::certificate::enums::certificate_error::CertificateError;
use crate::stats::enums::stats_event::StatsEvent;

impl StatsEvent {
    pub fn for_error(error: &CertificateError) -> StatsEvent {
        match error {
            CertificateError::Configuration(_) => StatsEvent::ErrorsConfiguration,
            CertificateError::CertificateLoad(_) => StatsEvent::ErrorsCertificateLoad,
            CertificateError::KeyType(_) => StatsEvent::ErrorsKeyType,
            CertificateError::Unexpected(_) => StatsEvent::ErrorsUnexpected,
        }
    }

    /// Response class counter for an HTTP status, if one is tracked.
    pub fn for_status(status: u16) -> Option<StatsEvent> {
        match status {
            200..=299 => Some(StatsEvent::Responses2xx),
            400..=499 => Some(StatsEvent::Responses4xx),
            500..=599 => Some(StatsEvent::Responses5xx),
            _ => None
        }
    }
}
