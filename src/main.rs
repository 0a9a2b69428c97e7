use anyhow::Result;
use payex_store::{
    application::usecases::{payex_callback::PayexCallbackUseCase, response_store::ResponseStoreUseCase},
    config::config_loader,
    domain::repositories::{payex_gateway::PayexGateway, payex_responses::PayexResponseRepository},
    infrastructure::{
        axum_http::http_serve,
        payex::payex_client::PayexHttpClient,
        postgres::{postgres_connection, repositories::payex_responses::PayexResponsePostgres},
    },
    observability,
};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Payex callback service exited with error: {:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("payex-callback")?;

    let dotenvy_env = Arc::new(config_loader::load()?);
    info!(
        in_production = dotenvy_env.payex.in_production,
        "ENV has been loaded"
    );

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database.url)?;
    info!("Postgres connection has been established");

    postgres_connection::run_migrations(&postgres_pool)?;
    info!("Database migrations are up to date");

    let response_repository: Arc<dyn PayexResponseRepository + Send + Sync> =
        Arc::new(PayexResponsePostgres::new(Arc::new(postgres_pool)));
    let gateway: Arc<dyn PayexGateway + Send + Sync> =
        Arc::new(PayexHttpClient::new(
            &dotenvy_env.payex,
            dotenvy_env.server.gateway_timeout(),
        )?);

    let response_store = Arc::new(ResponseStoreUseCase::new(response_repository));
    let callback_usecase = Arc::new(PayexCallbackUseCase::new(gateway, response_store));

    http_serve::start(dotenvy_env, callback_usecase).await?;

    Ok(())
}
