/// Error raised while booting the service.
pub mod custom_error;
