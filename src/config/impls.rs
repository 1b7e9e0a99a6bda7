pub mod certificate_config;
pub mod configuration;
pub mod configuration_error;
