pub mod emailjs;
pub mod validation;

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub use emailjs::{ConfigError, DispatchError, EmailJsClient, EmailJsConfig, TemplateParams};
pub use validation::{validate, ValidationError};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or email me directly.";

/// Delivers a contact message through a third-party relay.
///
/// One call is one delivery attempt; callers never retry on their own.
#[cfg_attr(test, mockall::automock)]
pub trait EmailDispatch {
    fn send(
        &self,
        config: EmailJsConfig,
        params: TemplateParams,
    ) -> impl Future<Output = Result<(), DispatchError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    fn to_params(&self) -> TemplateParams {
        TemplateParams {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

impl SubmissionStatus {
    /// Text shown under the submit button, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Failure => Some(FAILURE_MESSAGE),
            Self::Idle | Self::Submitting => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Sent,
    Failed,
    /// A dispatch was already in flight; nothing happened.
    AlreadySubmitting,
}

/// Everything the rendering layer needs to draw the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: FormState,
    pub status: SubmissionStatus,
    pub error: Option<ValidationError>,
}

#[derive(Debug, Default)]
struct Inner {
    fields: FormState,
    status: SubmissionStatus,
    error: Option<ValidationError>,
}

impl Inner {
    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            status: self.status,
            error: self.error,
        }
    }
}

type Observer = Box<dyn Fn(FormSnapshot) + Send + Sync>;

/// Marks a dispatch as failed if the submit future is dropped before the
/// relay answers, so the form never stays stuck in `Submitting`.
struct InFlight<'a, D: EmailDispatch> {
    form: &'a ContactForm<D>,
    settled: bool,
}

impl<D: EmailDispatch> Drop for InFlight<'_, D> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut inner = self.form.inner();
        if inner.status == SubmissionStatus::Submitting {
            log::warn!("contact message dispatch abandoned before completion");
            inner.status = SubmissionStatus::Failure;
            self.form.publish(inner);
        }
    }
}

pub struct ContactForm<D> {
    config: EmailJsConfig,
    dispatch: D,
    inner: Mutex<Inner>,
    observer: Option<Observer>,
}

impl<D: EmailDispatch> ContactForm<D> {
    pub fn new(config: EmailJsConfig, dispatch: D) -> Self {
        Self {
            config,
            dispatch,
            inner: Mutex::new(Inner::default()),
            observer: None,
        }
    }

    /// Called with a fresh snapshot after every state change.
    pub fn with_observer(mut self, observer: impl Fn(FormSnapshot) + Send + Sync + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    // The lock is only ever held for plain field access, so a poisoned
    // guard still holds consistent data.
    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Releases the lock before the observer runs.
    fn publish(&self, inner: MutexGuard<'_, Inner>) {
        let snapshot = inner.snapshot();
        drop(inner);
        if let Some(observer) = &self.observer {
            observer(snapshot);
        }
    }

    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        let mut inner = self.inner();
        inner.fields.set(field, value.into());
        inner.error = None;
        self.publish(inner);
    }

    pub fn fields(&self) -> FormState {
        self.inner().fields.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.inner().status
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.inner().error
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == SubmissionStatus::Submitting
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.inner().snapshot()
    }

    /// Validates the form and, if valid, hands it to the dispatch service once.
    ///
    /// Fields are cleared after a successful send and kept after a failed one.
    pub async fn submit(&self) -> SubmitOutcome {
        let params = {
            let mut inner = self.inner();
            if inner.status == SubmissionStatus::Submitting {
                return SubmitOutcome::AlreadySubmitting;
            }
            if let Err(reason) = validate(&inner.fields) {
                inner.status = SubmissionStatus::Idle;
                inner.error = Some(reason);
                self.publish(inner);
                return SubmitOutcome::Invalid(reason);
            }
            inner.error = None;
            inner.status = SubmissionStatus::Submitting;
            let params = inner.fields.to_params();
            self.publish(inner);
            params
        };

        log::debug!("dispatching contact message via service {}", self.config.service_id);
        let mut in_flight = InFlight {
            form: self,
            settled: false,
        };
        let result = self.dispatch.send(self.config.clone(), params).await;
        in_flight.settled = true;

        let mut inner = self.inner();
        let outcome = match result {
            Ok(()) => {
                inner.status = SubmissionStatus::Success;
                inner.fields = FormState::default();
                SubmitOutcome::Sent
            }
            Err(err) => {
                log::warn!("contact message dispatch failed: {err}");
                inner.status = SubmissionStatus::Failure;
                SubmitOutcome::Failed
            }
        };
        self.publish(inner);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use reqwest::StatusCode;
    use tokio::sync::Notify;

    use super::*;

    fn config() -> EmailJsConfig {
        EmailJsConfig::new("service_test", "template_test", "public_test")
    }

    fn fill(form: &ContactForm<impl EmailDispatch>) {
        form.update_field(FormField::Name, "Jane Doe");
        form.update_field(FormField::Email, "jane@example.com");
        form.update_field(FormField::Subject, "Hello");
        form.update_field(FormField::Message, "Interested in collaborating on a project");
    }

    fn rejected() -> DispatchError {
        DispatchError::Status {
            status: StatusCode::BAD_REQUEST,
            body: "The template ID is invalid".into(),
        }
    }

    /// Dispatch that blocks until released and counts calls.
    struct GatedDispatch {
        calls: Arc<AtomicUsize>,
        release: Arc<Notify>,
    }

    impl EmailDispatch for GatedDispatch {
        async fn send(
            &self,
            _config: EmailJsConfig,
            _params: TemplateParams,
        ) -> Result<(), DispatchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(())
        }
    }

    #[test]
    fn test_update_field_overwrites_single_field() {
        let form = ContactForm::new(config(), MockEmailDispatch::new());
        form.update_field(FormField::Subject, "first");
        form.update_field(FormField::Subject, "second");

        let fields = form.fields();
        assert_eq!(fields.subject, "second");
        assert_eq!(fields.get(FormField::Subject), "second");
        assert!(fields.name.is_empty());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_invalid_form_never_dispatches() {
        let mut dispatch = MockEmailDispatch::new();
        dispatch.expect_send().never();
        let form = ContactForm::new(config(), dispatch);
        form.update_field(FormField::Name, "Jane Doe");
        form.update_field(FormField::Email, "jane@example");
        form.update_field(FormField::Message, "Interested in collaborating");

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::InvalidEmail));
        assert_eq!(form.validation_error(), Some(ValidationError::InvalidEmail));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().email, "jane@example");
    }

    #[tokio::test]
    async fn test_editing_clears_validation_error() {
        let form = ContactForm::new(config(), MockEmailDispatch::new());
        assert_eq!(
            form.submit().await,
            SubmitOutcome::Invalid(ValidationError::MissingName)
        );
        form.update_field(FormField::Name, "J");
        assert_eq!(form.validation_error(), None);
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let mut dispatch = MockEmailDispatch::new();
        dispatch
            .expect_send()
            .once()
            .withf(|config, params| {
                config.service_id == "service_test"
                    && params.name == "Jane Doe"
                    && params.subject == "Hello"
            })
            .returning(|_, _| Box::pin(std::future::ready(Ok(()))));
        let form = ContactForm::new(config(), dispatch);
        fill(&form);

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.fields().is_empty());
        assert_eq!(form.status().message(), Some(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let mut dispatch = MockEmailDispatch::new();
        dispatch
            .expect_send()
            .once()
            .returning(|_, _| Box::pin(std::future::ready(Err(rejected()))));
        let form = ContactForm::new(config(), dispatch);
        fill(&form);
        let before = form.fields();

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.status(), SubmissionStatus::Failure);
        assert_eq!(form.fields(), before);
        assert_eq!(form.status().message(), Some(FAILURE_MESSAGE));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_retry_after_failure_dispatches_again() {
        let mut dispatch = MockEmailDispatch::new();
        let mut seq = mockall::Sequence::new();
        dispatch
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Box::pin(std::future::ready(Err(rejected()))));
        dispatch
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Box::pin(std::future::ready(Ok(()))));
        let form = ContactForm::new(config(), dispatch);
        fill(&form);

        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert_eq!(form.submit().await, SubmitOutcome::Sent);
        assert!(form.fields().is_empty());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(Notify::new());
        let form = ContactForm::new(
            config(),
            GatedDispatch {
                calls: calls.clone(),
                release: release.clone(),
            },
        );
        fill(&form);

        let first = form.submit();
        futures::pin_mut!(first);
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(form.is_submitting());

        assert_eq!(form.submit().await, SubmitOutcome::AlreadySubmitting);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        release.notify_one();
        assert_eq!(first.await, SubmitOutcome::Sent);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn test_dropped_submit_releases_form() {
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(Notify::new());
        let form = ContactForm::new(
            config(),
            GatedDispatch {
                calls: calls.clone(),
                release: release.clone(),
            },
        );
        fill(&form);

        {
            let pending = form.submit();
            futures::pin_mut!(pending);
            assert!(futures::poll!(pending.as_mut()).is_pending());
            assert!(form.is_submitting());
        }

        assert_eq!(form.status(), SubmissionStatus::Failure);
        assert_eq!(form.fields().name, "Jane Doe");

        release.notify_one();
        assert_eq!(form.submit().await, SubmitOutcome::Sent);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_observer_sees_every_transition() {
        let mut dispatch = MockEmailDispatch::new();
        dispatch
            .expect_send()
            .once()
            .returning(|_, _| Box::pin(std::future::ready(Err(rejected()))));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let form = ContactForm::new(config(), dispatch).with_observer({
            let seen = seen.clone();
            move |snapshot: FormSnapshot| seen.lock().unwrap().push(snapshot.status)
        });
        fill(&form);
        seen.lock().unwrap().clear();

        form.submit().await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![SubmissionStatus::Submitting, SubmissionStatus::Failure]
        );
    }

    #[tokio::test]
    async fn test_end_to_end_submission() {
        let mut dispatch = MockEmailDispatch::new();
        dispatch
            .expect_send()
            .once()
            .returning(|_, _| Box::pin(std::future::ready(Ok(()))));
        let form = ContactForm::new(config(), dispatch);
        form.update_field(FormField::Name, "Jane Doe");
        form.update_field(FormField::Email, "jane@example.com");
        form.update_field(FormField::Message, "Interested in collaborating on a project");

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(
            form.snapshot(),
            FormSnapshot {
                fields: FormState::default(),
                status: SubmissionStatus::Success,
                error: None,
            }
        );
    }
}
