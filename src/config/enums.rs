/// Errors raised while reading, parsing or validating the configuration.
pub mod configuration_error;

/// Console log output format.
pub mod log_format;
