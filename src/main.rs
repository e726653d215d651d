use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use portfolio_admin_api::{
    graceful_shutdown::stop_on_signal,
    middlewares::auth::AdminMiddleware,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    web::{cors::build_cors, payload::upload_form_config},
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Failed to load configuration")?;
    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let app_state = web::Data::new(
        AppState::new(&config).context("Failed to build data client")?
    );

    let server_addr = config.server_addr();
    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let app_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(upload_form_config(&app_config))
            .wrap(AdminMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&app_config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count.max(1))
    .disable_signals()
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run();

    tokio::spawn(stop_on_signal(server.handle()));

    server.await.context("Server terminated with an error")?;
    tracing::info!("Server stopped");
    Ok(())
}
