mod config;

use anyhow::Result;
use config::ServiceContext;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init_observability(component: &str) -> Result<()> {
    let service_context = ServiceContext::from_env(component);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Local time, so `TZ=Europe/Stockholm` shows `+01:00` in logs.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()?;

    info!(
        service = %service_context.service_name,
        environment = %service_context.environment,
        component = %service_context.component,
        "Observability initialized"
    );

    Ok(())
}
