//! Backend entry-point: loads settings, seeds the stores and serves the API.

mod server;

#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use freemarket::example_data::{ExampleDataPorts, seed_example_data};
use freemarket::inbound::http::health::HealthState;
use freemarket::outbound::memory::InMemoryStores;
use freemarket::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let stores = InMemoryStores::default();
    if settings.seed_example_data {
        seed_stores(&stores).await;
    }

    let config = ServerConfig::new(settings.bind_addr());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(make_metrics()?);

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %settings.bind_addr(), "starting freemarket server");
    let server = create_server(health_state.clone(), &stores, config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

async fn seed_stores(stores: &InMemoryStores) {
    let ports = ExampleDataPorts {
        products: &*stores.products,
        stamp_cards: &*stores.stamp_cards,
        reviews: &*stores.reviews,
        rankings: &*stores.rankings,
        users: &*stores.users,
    };
    match seed_example_data(&ports).await {
        Ok(summary) => info!(?summary, "example data loaded"),
        Err(error) => warn!(%error, "example data seeding failed; starting empty"),
    }
}

#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<Option<PrometheusMetrics>> {
    PrometheusMetricsBuilder::new("freemarket")
        .endpoint("/metrics")
        .build()
        .map(Some)
        .map_err(|e| std::io::Error::other(format!("configure Prometheus metrics: {e}")))
}
