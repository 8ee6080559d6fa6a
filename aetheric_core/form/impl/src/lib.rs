use std::time::Duration;

use aetheric_core_form_contracts::ContactFormService;
use aetheric_extern_contracts::contact_api::ContactApiService;
use aetheric_models::form::{FieldErrors, FormField, FormPhase, FormState};
use aetheric_shared_contracts::time::TimeService;
use tracing::warn;

aetheric_di::build! {
    #[derive(Debug, Clone)]
    pub struct ContactFormServiceImpl<ContactApi, Time> {
        contact_api: ContactApi,
        time: Time,
        config: ContactFormServiceConfig,
    }
    state {
        state: FormState,
    }
}

#[derive(Debug, Clone)]
pub struct ContactFormServiceConfig {
    /// How long the success notice stays on screen.
    pub success_dismissal: Duration,
    /// How long the fake success notice stays on screen after a honeypot
    /// submission.
    pub trap_dismissal: Duration,
}

impl Default for ContactFormServiceConfig {
    fn default() -> Self {
        Self {
            success_dismissal: Duration::from_secs(2),
            trap_dismissal: Duration::from_millis(1500),
        }
    }
}

impl<ContactApi, Time> ContactFormService for ContactFormServiceImpl<ContactApi, Time>
where
    ContactApi: ContactApiService,
    Time: TimeService,
{
    fn state(&self) -> &FormState {
        &self.state
    }

    fn update_field(&mut self, field: FormField, value: String) {
        self.state.values.set(field, value);
        self.state.errors.clear(field);
    }

    fn validate(&self) -> FieldErrors {
        self.state.values.validate()
    }

    async fn submit(&mut self) {
        if self.state.phase != FormPhase::Editing {
            return;
        }

        // Bots fill the hidden field. Pretend success and drop the submission
        // without any network traffic.
        if !self.state.values.honeypot.is_empty() {
            self.state.phase = FormPhase::Success;
            self.state.dismiss_at = Some(self.time.now() + self.config.trap_dismissal);
            return;
        }

        let errors = self.state.values.validate();
        if !errors.is_empty() {
            self.state.errors = errors;
            return;
        }

        let draft = self.state.values.to_draft();
        self.state.phase = FormPhase::Submitting;

        match self.contact_api.submit_inquiry(&draft).await {
            Ok(()) => {
                self.state.values = Default::default();
                self.state.errors = Default::default();
                self.state.phase = FormPhase::Success;
                self.state.dismiss_at = Some(self.time.now() + self.config.success_dismissal);
            }
            Err(err) => {
                warn!("Failed to submit the inquiry: {err}");
                self.state.phase = FormPhase::Error;
            }
        }
    }

    fn retry(&mut self) {
        if self.state.phase == FormPhase::Error {
            self.state.phase = FormPhase::Editing;
        }
    }

    fn poll_dismissal(&mut self) {
        if self.state.phase == FormPhase::Success
            && self
                .state
                .dismiss_at
                .is_some_and(|deadline| self.time.now() >= deadline)
        {
            self.state.phase = FormPhase::Closed;
        }
    }

    fn close(&mut self) {
        self.state.phase = FormPhase::Closed;
    }
}

#[cfg(test)]
mod tests {
    use aetheric_extern_contracts::contact_api::{MockContactApiService, SubmitInquiryError};
    use aetheric_models::{
        form::{FieldError, FormValues},
        inquiry::{ContactInquiryDraft, ServiceCategory},
    };
    use aetheric_shared_contracts::time::MockTimeService;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn update_field_clears_only_its_error() {
        // Arrange
        let mut sut = make_sut(MockContactApiService::new(), MockTimeService::new());
        sut.state.errors.insert(FormField::Name, FieldError::Required);
        sut.state
            .errors
            .insert(FormField::Email, FieldError::Required);

        // Act
        sut.update_field(FormField::Name, "Ada Lovelace".into());

        // Assert
        assert_eq!(sut.state().values.name, "Ada Lovelace");
        assert_eq!(sut.state().errors.get(FormField::Name), None);
        assert_eq!(
            sut.state().errors.get(FormField::Email),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn validate_does_not_mutate() {
        // Arrange
        let sut = make_sut(MockContactApiService::new(), MockTimeService::new());

        // Act
        let errors = sut.validate();

        // Assert
        assert_eq!(errors.get(FormField::Name), Some(FieldError::Required));
        assert!(sut.state().errors.is_empty());
        assert_eq!(sut.state().phase, FormPhase::Editing);
    }

    #[tokio::test]
    async fn submit_publishes_validation_errors() {
        // Arrange
        let mut sut = make_sut(MockContactApiService::new(), MockTimeService::new());

        // Act
        sut.submit().await;

        // Assert
        assert_eq!(sut.state().phase, FormPhase::Editing);
        assert_eq!(
            sut.state().errors.get(FormField::Name),
            Some(FieldError::Required)
        );
        assert_eq!(
            sut.state().errors.get(FormField::Email),
            Some(FieldError::Required)
        );
        assert_eq!(
            sut.state().errors.get(FormField::Message),
            Some(FieldError::Required)
        );
    }

    #[tokio::test]
    async fn submit_success_resets_and_schedules_dismissal() {
        // Arrange
        let now = Utc::now();
        let contact_api =
            MockContactApiService::new().with_submit_inquiry(filled_draft(), Ok(()));
        let time = MockTimeService::new().with_now(now);

        let mut sut = make_sut(contact_api, time);
        sut.state.values = filled_values();

        // Act
        sut.submit().await;

        // Assert
        assert_eq!(sut.state().phase, FormPhase::Success);
        assert_eq!(sut.state().values, FormValues::default());
        assert!(sut.state().errors.is_empty());
        assert_eq!(
            sut.state().dismiss_at,
            Some(now + Duration::from_secs(2))
        );
    }

    #[tokio::test]
    async fn submit_failure_keeps_values_until_retry() {
        // Arrange
        let contact_api = MockContactApiService::new().with_submit_inquiry(
            filled_draft(),
            Err(SubmitInquiryError::Rejected {
                status: 500,
                reason: "Failed to send inquiry. Please try again later.".into(),
            }),
        );

        let mut sut = make_sut(contact_api, MockTimeService::new());
        sut.state.values = filled_values();

        // Act
        sut.submit().await;

        // Assert
        assert_eq!(sut.state().phase, FormPhase::Error);
        assert_eq!(sut.state().values, filled_values());
        assert_eq!(sut.state().dismiss_at, None);

        // Act
        sut.retry();

        // Assert
        assert_eq!(sut.state().phase, FormPhase::Editing);
        assert_eq!(sut.state().values, filled_values());
    }

    #[tokio::test]
    async fn submit_honeypot_pretends_success() {
        // Arrange
        let now = Utc::now();
        let time = MockTimeService::new().with_now(now);

        let mut sut = make_sut(MockContactApiService::new(), time);
        sut.state.values = FormValues {
            honeypot: "https://spam.example.com/".into(),
            ..Default::default()
        };

        // Act
        sut.submit().await;

        // Assert
        assert_eq!(sut.state().phase, FormPhase::Success);
        assert_eq!(sut.state().values.honeypot, "https://spam.example.com/");
        assert_eq!(
            sut.state().dismiss_at,
            Some(now + Duration::from_millis(1500))
        );
    }

    #[tokio::test]
    async fn submit_outside_editing_is_a_no_op() {
        for phase in [
            FormPhase::Submitting,
            FormPhase::Success,
            FormPhase::Error,
            FormPhase::Closed,
        ] {
            // Arrange
            let mut sut = make_sut(MockContactApiService::new(), MockTimeService::new());
            sut.state.values = filled_values();
            sut.state.phase = phase;

            // Act
            sut.submit().await;

            // Assert
            assert_eq!(sut.state().phase, phase);
        }
    }

    #[tokio::test]
    async fn poll_dismissal_closes_after_deadline() {
        // Arrange
        let now = Utc::now();
        let time = MockTimeService::new()
            .with_now(now)
            .with_now(now + Duration::from_secs(2));

        let mut sut = make_sut(MockContactApiService::new(), time);
        sut.state.phase = FormPhase::Success;
        sut.state.dismiss_at = Some(now + Duration::from_secs(2));

        // Act + Assert
        sut.poll_dismissal();
        assert_eq!(sut.state().phase, FormPhase::Success);

        sut.poll_dismissal();
        assert_eq!(sut.state().phase, FormPhase::Closed);
    }

    #[test]
    fn close() {
        // Arrange
        let mut sut = make_sut(MockContactApiService::new(), MockTimeService::new());

        // Act
        sut.close();

        // Assert
        assert_eq!(sut.state().phase, FormPhase::Closed);
    }

    fn make_sut(
        contact_api: MockContactApiService,
        time: MockTimeService,
    ) -> ContactFormServiceImpl<MockContactApiService, MockTimeService> {
        ContactFormServiceImpl {
            contact_api,
            time,
            config: Default::default(),
            state: Default::default(),
        }
    }

    fn filled_values() -> FormValues {
        FormValues {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: "Aetheric".into(),
            service: ServiceCategory::Analytics,
            message: "We need help automating support.".into(),
            honeypot: String::new(),
        }
    }

    fn filled_draft() -> ContactInquiryDraft {
        ContactInquiryDraft {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: Some("Aetheric".into()),
            service: Some(ServiceCategory::Analytics),
            message: "We need help automating support.".into(),
            honeypot: String::new(),
        }
    }
}
