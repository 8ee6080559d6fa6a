use serde::Serialize;

/// Positive acknowledgment returned by the contact endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiInquiryAccepted {
    pub success: bool,
    pub message: &'static str,
}

impl Default for ApiInquiryAccepted {
    fn default() -> Self {
        Self {
            success: true,
            message: "Your inquiry has been sent successfully!",
        }
    }
}
