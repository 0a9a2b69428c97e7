use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    application::usecases::payex_callback::PayexCallbackUseCase,
    config::config_model::DotEnvyConfig,
    infrastructure::axum_http::{default_routers, routers},
};

pub fn app(config: &DotEnvyConfig, usecase: Arc<PayexCallbackUseCase>) -> Result<Router> {
    let app = Router::new()
        .fallback(default_routers::not_found)
        .merge(routers::payex_callback::routes(
            &config.payex.callback_path,
            usecase,
        ))
        .route("/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes()?))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

pub async fn start(config: Arc<DotEnvyConfig>, usecase: Arc<PayexCallbackUseCase>) -> Result<()> {
    let app = app(&config, usecase)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    info!(
        callback_path = %config.payex.callback_path,
        stage = %config.stage,
        "HTTP server running on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM signal handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
