use std::sync::Arc;

use aetheric_extern_contracts::contact_api::{ContactApiService, SubmitInquiryError};
use aetheric_models::inquiry::ContactInquiryDraft;
use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::http::HttpClient;

aetheric_di::build! {
    #[derive(Debug, Clone)]
    pub struct ContactApiServiceImpl {
        config: ContactApiServiceConfig,
    }
    state {
        http: HttpClient,
    }
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    pub base_url: Arc<Url>,
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit_inquiry(&self, draft: &ContactInquiryDraft) -> Result<(), SubmitInquiryError> {
        let url = self
            .config
            .base_url
            .join("api/contact")
            .context("Failed to construct the contact endpoint url")?;

        let response = self
            .http
            .post(url)
            .json(draft)
            .send()
            .await
            .context("Failed to send the inquiry to the contact API")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let reason = match response.json::<RejectionResponse>().await {
            Ok(rejection) => rejection.error,
            Err(_) => status.to_string(),
        };

        Err(SubmitInquiryError::Rejected {
            status: status.as_u16(),
            reason,
        })
    }
}

#[derive(Deserialize)]
struct RejectionResponse {
    error: String,
}
