mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod services;
mod telemetry;

use config::AppConfig;
use container::Container;
use infrastructure::identity::credentials::CredentialError;
use infrastructure::identity::firebase::FirebaseIdentityProvider;
use telemetry::TelemetryError;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Credentials(#[from] CredentialError),
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    let provider = telemetry::configure(&config.service, &config.logging)?;

    let identity = FirebaseIdentityProvider::from_config(&config.firebase)?;

    let container = Arc::new(Container::new(Arc::new(identity)));

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting {}",
        config.service.name
    );

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    telemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
