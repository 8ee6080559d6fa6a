//! Determine the ip address of the client

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{from_fn, Next},
    Router,
};
use tracing::{debug, error, warn};

use crate::RestServerRealIpConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    real_ip_config: Option<Arc<RestServerRealIpConfig>>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        router.layer(from_fn(move |mut request: Request, next: Next| {
            let client_ip = ClientIp::from_request(&request, real_ip_config.as_deref());
            request.extensions_mut().insert(client_ip);
            next.run(request)
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientIp(pub IpAddr);

impl ClientIp {
    fn from_request(request: &Request, real_ip_config: Option<&RestServerRealIpConfig>) -> Self {
        let peer_ip = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .unwrap()
            .ip();

        let Some(RestServerRealIpConfig { header, set_from }) = real_ip_config else {
            return Self(peer_ip);
        };

        // Only the configured reverse proxy is trusted to set the header.
        if peer_ip != *set_from {
            if request.headers().contains_key(header) {
                debug!(%peer_ip, "ignoring real ip header from untrusted peer");
            }
            return Self(peer_ip);
        }

        match request.headers().get(header) {
            Some(value) => match value.to_str().ok().and_then(|ip| ip.parse().ok()) {
                Some(real_ip) => Self(real_ip),
                None => {
                    error!(%peer_ip, ?value, "failed to parse real ip header value");
                    Self(peer_ip)
                }
            },
            None => {
                warn!(%peer_ip, "real ip header not found");
                Self(peer_ip)
            }
        }
    }
}
