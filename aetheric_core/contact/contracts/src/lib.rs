use std::future::Future;

use aetheric_models::inquiry::ContactInquiry;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Relays a contact inquiry to the operator and acknowledges it to the
    /// submitter.
    ///
    /// Delivery is best-effort: a failure to send either email is logged but
    /// does not fail the operation. An error is returned only if the emails
    /// cannot be assembled in the first place.
    fn submit_inquiry(
        &self,
        inquiry: ContactInquiry,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit_inquiry(mut self, inquiry: ContactInquiry, result: bool) -> Self {
        self.expect_submit_inquiry()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(move |_| {
                Box::pin(std::future::ready(if result {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("relay failed"))
                }))
            });
        self
    }
}
