use std::future::Future;

use aetheric_models::form::{FieldErrors, FormField, FormState};

/// Controller behind one rendered contact form.
pub trait ContactFormService: Send + Sync + 'static {
    /// Current form state, as the presentation layer should render it.
    fn state(&self) -> &FormState;

    /// Writes a field value, clearing an error previously reported for that
    /// field. Errors on other fields are kept.
    fn update_field(&mut self, field: FormField, value: String);

    /// Validates the current values without changing any state.
    fn validate(&self) -> FieldErrors;

    /// Submits the form.
    ///
    /// If the honeypot field has been filled in, the form pretends success
    /// without any network traffic. Otherwise invalid values are published to
    /// the form state, and valid ones are sent to the contact API in exactly
    /// one request. There are no retries: a failed submission parks the form
    /// in the `Error` phase until [`retry`](Self::retry) is called.
    fn submit(&mut self) -> impl Future<Output = ()> + Send;

    /// Returns from the `Error` phase to `Editing`.
    fn retry(&mut self);

    /// Transitions `Success` to `Closed` once the dismissal deadline has
    /// passed.
    fn poll_dismissal(&mut self);

    /// Dismisses the form.
    fn close(&mut self);
}
