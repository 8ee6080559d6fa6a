//! Browser origin control for the contact endpoint

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{from_fn, Next},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{routes::error, AllowedOrigins};

pub fn add<S: Clone + Send + Sync + 'static>(
    allowed_origins: AllowedOrigins,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(if allowed_origins.is_empty() {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(allowed_origins.iter().cloned())
            });

        // The guard is layered outside the cors layer, so disallowed origins
        // are rejected before preflight handling.
        router
            .layer(cors)
            .layer(from_fn(move |request: Request, next: Next| {
                let allowed_origins = allowed_origins.clone();
                async move {
                    if let Some(origin) = request.headers().get(header::ORIGIN) {
                        if !allowed_origins.is_empty() && !allowed_origins.contains(origin) {
                            return error(StatusCode::FORBIDDEN, "Origin not allowed");
                        }
                    }
                    next.run(request).await
                }
            }))
    }
}
