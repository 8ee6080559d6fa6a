use std::sync::Arc;

use aetheric_api_rest::{RestServerConfig, RestServerRealIpConfig};
use aetheric_config::Config;
use aetheric_core_contact_impl::ContactServiceConfig;
use aetheric_di::provider;
use anyhow::Context;
use axum::http::HeaderValue;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Core
            ContactServiceConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Core
        contact_service_config: ContactServiceConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            allowed_origins: config
                .http
                .allowed_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("Invalid allowed origin {origin:?}"))
                })
                .collect::<anyhow::Result<_>>()?,
            real_ip: config.http.real_ip.as_ref().map(|real_ip| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip.header.clone(),
                    set_from: real_ip.set_from,
                })
            }),
        };

        // Core
        let contact_service_config = ContactServiceConfig {
            admin_email: Arc::new(
                config
                    .contact
                    .admin_email
                    .clone()
                    .unwrap_or_else(|| config.email.from.clone()),
            ),
        };

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Core
            contact_service_config,
        })
    }
}
