//! Emit one tracing span per request

use std::time::Duration;

use axum::{extract::Request, response::Response, Router};
use tracing::{debug, Span};

use super::{client_ip::ClientIp, request_id::RequestId};

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        tower_http::trace::TraceLayer::new_for_http()
            .make_span_with(make_span)
            .on_request(on_request)
            .on_response(on_response)
            .on_body_chunk(())
            .on_eos(())
            .on_failure(()),
    )
}

fn make_span(request: &Request) -> Span {
    // Both extensions are inserted by middlewares layered further out.
    let request_id = *request.extensions().get::<RequestId>().unwrap();
    let client_ip = request.extensions().get::<ClientIp>().unwrap().0;
    let method = request.method();
    let route = request.uri();
    let version = request.version();

    tracing::debug_span!("http-request", %request_id, %client_ip, %method, %route, ?version)
}

fn on_request(_request: &Request, _span: &Span) {
    debug!("request received")
}

fn on_response(response: &Response, latency: Duration, _span: &Span) {
    debug!(status = %response.status(), ?latency, "request completed")
}
