use std::sync::Arc;

use aetheric_core_contact_contracts::ContactService;
use aetheric_models::inquiry::{ContactInquiry, ContactInquiryDraft, InvalidContactInquiry};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};

use super::error;
use crate::models::contact::ApiInquiryAccepted;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit_inquiry))
        .with_state(service)
}

async fn submit_inquiry(
    service: State<Arc<impl ContactService>>,
    payload: Result<Json<ContactInquiryDraft>, JsonRejection>,
) -> Response {
    let Ok(Json(draft)) = payload else {
        return error(StatusCode::BAD_REQUEST, "Malformed request body");
    };

    let inquiry = match ContactInquiry::try_from(draft) {
        Ok(inquiry) => inquiry,
        Err(err) => {
            return error(
                StatusCode::BAD_REQUEST,
                match err {
                    InvalidContactInquiry::MissingFields => "Missing required fields",
                    InvalidContactInquiry::InvalidEmail => "Invalid email format",
                    InvalidContactInquiry::MessageTooShort => "Message too short",
                },
            )
        }
    };

    match service.submit_inquiry(inquiry).await {
        Ok(()) => Json(ApiInquiryAccepted::default()).into_response(),
        Err(err) => {
            tracing::error!("Failed to relay contact inquiry: {err}");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send inquiry. Please try again later.",
            )
        }
    }
}
