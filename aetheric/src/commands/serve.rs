use aetheric_config::Config;
use aetheric_di::Provide;
use aetheric_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    // Inquiries are accepted even while the smtp server is down, so a failed
    // connection test must not prevent startup.
    if let Err(err) = email.ping().await {
        warn!("Failed to verify the smtp connection: {err}");
    }

    if config.http.allowed_origins.is_empty() {
        warn!("No allowed origins configured, accepting browser requests from any origin");
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, email);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
