use std::net::Ipv4Addr;

use aetheric_api_rest::{RestServer, RestServerConfig};
use aetheric_core_contact_contracts::MockContactService;
use aetheric_models::inquiry::{ContactInquiry, ContactInquiryDraft, ServiceCategory};
use axum::http::HeaderValue;
use tokio::net::TcpListener;

/// Serves the rest api on a random local port and returns its base url.
pub async fn spawn_server(contact: MockContactService, allowed_origins: &[&str]) -> String {
    let config = RestServerConfig {
        allowed_origins: allowed_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin).unwrap())
            .collect(),
        real_ip: None,
    };

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(RestServer::new(contact, config).serve_with(listener));

    format!("http://{addr}")
}

#[allow(dead_code, reason = "not used by every test binary")]
pub fn inquiry_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Max Mustermann",
        "email": "max.mustermann@example.de",
        "company": "Mustermann GmbH",
        "service": "Automation",
        "message": "Hello World!\nThis is a test.",
    })
}

#[allow(dead_code, reason = "not used by every test binary")]
pub fn inquiry() -> ContactInquiry {
    ContactInquiry::try_from(ContactInquiryDraft {
        name: "Max Mustermann".into(),
        email: "max.mustermann@example.de".into(),
        company: Some("Mustermann GmbH".into()),
        service: Some(ServiceCategory::Automation),
        message: "Hello World!\nThis is a test.".into(),
        honeypot: String::new(),
    })
    .unwrap()
}
