use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use shopscope_api::config::{ApiConfig, LoggingConfig};
use shopscope_api::{handlers, AnalysisState};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

/// Install the tracing subscriber; the returned guard must live until shutdown so the
/// log file is flushed.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_new(&logging.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = &logging.file {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("shopscope-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Some(guard)
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
        None
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_path) = ApiConfig::load()?;

    let _log_guard = init_tracing(&config.logging.clone().unwrap_or_default());
    tracing::info!("Using config {:?}", config_path);

    let state = web::Data::new(AnalysisState::from_config(&config)?);

    let server = config.server.clone().unwrap_or_default();
    let allowed_origins = config.cors.clone().unwrap_or_default().allowed_origins;

    tracing::info!("Server will listen on {}:{}", server.host, server.port);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await?;

    Ok(())
}
