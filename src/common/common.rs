use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use sha2::{Digest, Sha256};
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::log_format::LogFormat;
use crate::config::structs::configuration::Configuration;

/// Timestamp layout used by the `X-Certificate-Expiration` header.
pub const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let dispatch = match config.log_format {
        LogFormat::text => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Cyan)
                .debug(Color::Magenta)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            fern::Dispatch::new().format(move |out, message, record| {
                out.finish(format_args!(
                    "{} [{:width$}][{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                    colors.color(record.level()),
                    record.target(),
                    message,
                    width = 5
                ))
            })
        }
        LogFormat::json => {
            fern::Dispatch::new().format(|out, message, record| {
                out.finish(format_args!(
                    "{}",
                    serde_json::json!({
                        "timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Nanos, true),
                        "level": record.level().as_str(),
                        "target": record.target(),
                        "message": message.to_string()
                    })
                ))
            })
        }
    };

    if dispatch.level(level).chain(std::io::stdout()).apply().is_err() {
        return Err(CustomError::new("Failed to initialize logging."));
    }
    info!("logging initialized.");
    Ok(())
}

/// Unpadded base64url, the alphabet JWK members are written in.
pub fn base64url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

pub fn base64url_decode(data: &str) -> Result<Vec<u8>, CustomError> {
    URL_SAFE_NO_PAD.decode(data).map_err(|error| CustomError::new(&error.to_string()))
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&Sha256::digest(data));
    digest
}

pub fn format_utc_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(UTC_TIMESTAMP_FORMAT).to_string()
}
