use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use aetheric_core_contact_contracts::ContactService;
use axum::{http::HeaderValue, Router};
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

aetheric_di::build! {
    #[derive(Debug, Clone)]
    pub struct RestServer<Contact> {
        contact: Contact,
        config: RestServerConfig,
    }
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub allowed_origins: AllowedOrigins,
    pub real_ip: Option<Arc<RestServerRealIpConfig>>,
}

#[derive(Debug, Clone)]
pub struct RestServerRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

/// Origins allowed to use the API from a browser. An empty set allows any
/// origin.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Arc<[HeaderValue]>);

impl AllowedOrigins {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    fn iter(&self) -> std::slice::Iter<'_, HeaderValue> {
        self.0.iter()
    }
}

impl FromIterator<HeaderValue> for AllowedOrigins {
    fn from_iter<I: IntoIterator<Item = HeaderValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact, config: RestServerConfig) -> Self {
        Self { contact, config }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port)).await?;
        self.serve_with(listener).await
    }

    /// Serves on an already bound listener, e.g. to let tests bind port 0.
    pub async fn serve_with(self, listener: TcpListener) -> anyhow::Result<()> {
        let router = self.router();
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(self.contact.into()));

        // Middlewares run outside in. The trace span reads the client ip and
        // request id from request extensions, so those two must stay further
        // out.
        let router = middlewares::cors::add(self.config.allowed_origins)(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        let router = middlewares::client_ip::add(self.config.real_ip)(router);
        middlewares::panic_handler::add(router)
    }
}
