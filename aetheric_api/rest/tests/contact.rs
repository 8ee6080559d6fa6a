use aetheric_core_contact_contracts::MockContactService;
use aetheric_models::inquiry::ContactInquiry;
use axum::http::{header, StatusCode};

mod common;

#[tokio::test]
async fn submit_inquiry() {
    let contact = MockContactService::new().with_submit_inquiry(common::inquiry(), true);
    let url = common::spawn_server(contact, &[]).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/contact"))
        .json(&common::inquiry_payload())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!({
            "success": true,
            "message": "Your inquiry has been sent successfully!"
        })
    );
}

#[tokio::test]
async fn submit_inquiry_without_company() {
    let contact = MockContactService::new().with_submit_inquiry(
        ContactInquiry {
            company: None,
            ..common::inquiry()
        },
        true,
    );
    let url = common::spawn_server(contact, &[]).await;

    let mut payload = common::inquiry_payload();
    payload.as_object_mut().unwrap().remove("company");

    let response = reqwest::Client::new()
        .post(format!("{url}/api/contact"))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn submit_inquiry_ignores_unknown_fields() {
    let contact = MockContactService::new().with_submit_inquiry(common::inquiry(), true);
    let url = common::spawn_server(contact, &[]).await;

    let mut payload = common::inquiry_payload();
    payload["phone"] = "+49 123 456789".into();

    let response = reqwest::Client::new()
        .post(format!("{url}/api/contact"))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn submit_inquiry_relay_failed() {
    let contact = MockContactService::new().with_submit_inquiry(common::inquiry(), false);
    let url = common::spawn_server(contact, &[]).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/contact"))
        .json(&common::inquiry_payload())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!({"error": "Failed to send inquiry. Please try again later."})
    );
}

#[tokio::test]
async fn reject_missing_fields() {
    let url = common::spawn_server(MockContactService::new(), &[]).await;
    let client = reqwest::Client::new();

    let mut without_name = common::inquiry_payload();
    without_name.as_object_mut().unwrap().remove("name");
    let mut blank_name = common::inquiry_payload();
    blank_name["name"] = "   ".into();
    let mut without_service = common::inquiry_payload();
    without_service.as_object_mut().unwrap().remove("service");
    let mut blank_message = common::inquiry_payload();
    blank_message["message"] = "".into();
    // Missing fields are reported before the email shape.
    let mut also_invalid_email = common::inquiry_payload();
    also_invalid_email["name"] = "".into();
    also_invalid_email["email"] = "not-an-email".into();

    for payload in [
        serde_json::json!({}),
        without_name,
        blank_name,
        without_service,
        blank_message,
        also_invalid_email,
    ] {
        let response = client
            .post(format!("{url}/api/contact"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            serde_json::json!({"error": "Missing required fields"})
        );
    }
}

#[tokio::test]
async fn reject_invalid_email() {
    let url = common::spawn_server(MockContactService::new(), &[]).await;
    let client = reqwest::Client::new();

    let mut invalid_email = common::inquiry_payload();
    invalid_email["email"] = "max.mustermann(at)example.de".into();
    // The email shape is reported before the message length.
    let mut also_short_message = common::inquiry_payload();
    also_short_message["email"] = "not-an-email".into();
    also_short_message["message"] = "short".into();

    for payload in [invalid_email, also_short_message] {
        let response = client
            .post(format!("{url}/api/contact"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            serde_json::json!({"error": "Invalid email format"})
        );
    }
}

#[tokio::test]
async fn reject_short_message() {
    let url = common::spawn_server(MockContactService::new(), &[]).await;

    let mut payload = common::inquiry_payload();
    payload["message"] = "short".into();

    let response = reqwest::Client::new()
        .post(format!("{url}/api/contact"))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!({"error": "Message too short"})
    );
}

#[tokio::test]
async fn reject_malformed_body() {
    let url = common::spawn_server(MockContactService::new(), &[]).await;
    let client = reqwest::Client::new();

    let mut wrong_field_type = common::inquiry_payload();
    wrong_field_type["name"] = 42.into();
    let mut unknown_service = common::inquiry_payload();
    unknown_service["service"] = "Time Travel".into();

    let requests = [
        client
            .post(format!("{url}/api/contact"))
            .header(header::CONTENT_TYPE, "application/json")
            .body("{not json"),
        client
            .post(format!("{url}/api/contact"))
            .json(&wrong_field_type),
        client
            .post(format!("{url}/api/contact"))
            .json(&unknown_service),
    ];

    for request in requests {
        let response = request.send().await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            serde_json::json!({"error": "Malformed request body"})
        );
    }
}
