use std::future::Future;

use aetheric_models::inquiry::ContactInquiryDraft;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Submits a contact inquiry to the first-party contact API.
    fn submit_inquiry(
        &self,
        draft: &ContactInquiryDraft,
    ) -> impl Future<Output = Result<(), SubmitInquiryError>> + Send;
}

#[derive(Debug, Error)]
pub enum SubmitInquiryError {
    #[error("The inquiry was rejected ({status}): {reason}")]
    Rejected { status: u16, reason: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit_inquiry(
        mut self,
        draft: ContactInquiryDraft,
        result: Result<(), SubmitInquiryError>,
    ) -> Self {
        self.expect_submit_inquiry()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
