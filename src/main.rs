use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use private_jwk::api::api::api_service;
use private_jwk::api::structs::api_service_data::ApiServiceData;
use private_jwk::cache::structs::certificate_cache::CertificateCache;
use private_jwk::certificate::structs::certificate_pipeline::CertificatePipeline;
use private_jwk::common::common::setup_logging;
use private_jwk::config::structs::configuration::Configuration;
use private_jwk::stats::structs::stats_recorder::StatsRecorder;
use private_jwk::stats::traits::metrics_recorder::MetricsRecorder;
use private_jwk::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[BOOT] Unable to set up logging: {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown signal handlers");
                    exit(1);
                }
            };

            let cache = if config.cache.enabled {
                info!("[BOOT] Certificate cache enabled (ttl: {:?}s, watch modified: {})", config.cache.ttl, config.cache.watch_modified);
                Some(Arc::new(CertificateCache::from_config(&config.cache)))
            } else {
                None
            };
            let pipeline = Arc::new(CertificatePipeline::new(Arc::new(config.certificate.clone()), cache));
            if pipeline.certificate_config().is_complete() {
                info!("[BOOT] Serving certificate {}", pipeline.certificate_config().path);
            } else {
                warn!("[BOOT] Certificate path or password is not configured, certificate requests will fail with 400");
            }
            let metrics: Arc<dyn MetricsRecorder> = Arc::new(StatsRecorder::new());

            let mut api_handles = Vec::new();
            let mut api_futures = Vec::new();

            for api_server_object in &config.api_server {
                if api_server_object.enabled {
                    let address: SocketAddr = match api_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(error) => {
                            error!("[BOOT] Invalid bind address {}: {error}", api_server_object.bind_address);
                            exit(1);
                        }
                    };

                    let data = Arc::new(ApiServiceData::new(
                        Arc::clone(&pipeline),
                        Arc::clone(&metrics),
                        Arc::new(api_server_object.clone())
                    ));
                    let (handle, future) = match api_service(address, data).await {
                        Ok(server) => server,
                        Err(error) => {
                            error!("[BOOT] Unable to bind API server on {address}: {error}");
                            sentry::capture_error(&error);
                            exit(1);
                        }
                    };

                    api_handles.push(handle);
                    api_futures.push(future);
                }
            }

            if api_futures.is_empty() {
                warn!("[BOOT] No API server is enabled, nothing to serve");
                tokio_shutdown.handle().await;
                info!("Shutdown request received, shutting down...");
            } else {
                tokio::select! {
                    result = try_join_all(api_futures) => {
                        if let Err(error) = result {
                            error!("[API] Server stopped with error: {error}");
                            sentry::capture_error(&error);
                            exit(1);
                        }
                        warn!("[API] All servers stopped, shutting down...");
                    }
                    _ = tokio_shutdown.handle() => {
                        info!("Shutdown request received, shutting down...");
                    }
                }
            }

            for handle in api_handles {
                handle.stop(true).await;
            }

            tokio::time::sleep(Duration::from_millis(100)).await;
            info!("Server shutting down completed");
            Ok(())
        })
}
