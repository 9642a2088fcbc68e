//! Form submissions.
//!
//! The page carries two forms: the research contact form ("share your
//! vision") and the newsletter subscription. Neither talks to a backend on
//! its own. Submissions are validated here and handed to a [`FormSink`]
//! supplied by the embedding application through Leptos context; without
//! one, [`LoggingSink`] records them through `tracing`.

use std::sync::Arc;

use leptos::prelude::use_context;

use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("contact name"));
        }
        validate_email(&self.email)?;
        if self.message.trim().is_empty() {
            return Err(FormError::MissingField("message"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub email: String,
    pub consent: bool,
}

impl SubscriptionRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        validate_email(&self.email)?;
        if !self.consent {
            return Err(FormError::ConsentRequired);
        }
        Ok(())
    }
}

/// Accepts `local@domain.tld`: no whitespace, one `@`, a dot inside the domain.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::MissingField("email"));
    }

    let invalid = || FormError::InvalidEmail(email.to_string());
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.find('.') {
        Some(dot) if dot > 0 && !domain.ends_with('.') => Ok(()),
        _ => Err(invalid()),
    }
}

/// Receiver of validated form submissions.
pub trait FormSink: Send + Sync {
    fn contact(&self, submission: &ContactSubmission) -> Result<(), FormError>;
    fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), FormError>;
}

/// Default sink: logs and accepts everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl FormSink for LoggingSink {
    fn contact(&self, submission: &ContactSubmission) -> Result<(), FormError> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            chars = submission.message.chars().count(),
            "contact form submitted"
        );
        Ok(())
    }

    fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), FormError> {
        tracing::info!(email = %request.email, "newsletter subscription");
        Ok(())
    }
}

/// Shared handle stored in Leptos context.
#[derive(Clone)]
pub struct FormSinkHandle(Arc<dyn FormSink>);

impl FormSinkHandle {
    pub fn new(sink: impl FormSink + 'static) -> Self {
        Self(Arc::new(sink))
    }

    /// Validate, then forward to the sink.
    pub fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), FormError> {
        submission.validate()?;
        self.0.contact(submission)
    }

    /// Validate, then forward to the sink.
    pub fn submit_subscription(&self, request: &SubscriptionRequest) -> Result<(), FormError> {
        request.validate()?;
        self.0.subscribe(request)
    }
}

impl Default for FormSinkHandle {
    fn default() -> Self {
        Self::new(LoggingSink)
    }
}

/// Sink from context, or the logging sink when none was provided.
pub fn use_form_sink() -> FormSinkHandle {
    use_context::<FormSinkHandle>().unwrap_or_default()
}

/// What the status line under a form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sent,
    Failed(String),
}

impl FormStatus {
    pub fn from_result(result: Result<(), FormError>) -> Self {
        match result {
            Ok(()) => Self::Sent,
            Err(e) => {
                tracing::debug!(error = %e, "form rejected");
                Self::Failed(e.to_string())
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Sent => "Thanks! We'll be in touch.".into(),
            Self::Failed(reason) => reason.clone(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Idle => "form-status",
            Self::Sent => "form-status form-status-sent",
            Self::Failed(_) => "form-status form-status-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        contacts: Mutex<Vec<ContactSubmission>>,
        subscriptions: Mutex<Vec<SubscriptionRequest>>,
    }

    impl FormSink for Arc<RecordingSink> {
        fn contact(&self, submission: &ContactSubmission) -> Result<(), FormError> {
            self.contacts.lock().unwrap().push(submission.clone());
            Ok(())
        }

        fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), FormError> {
            self.subscriptions.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    struct RefusingSink;

    impl FormSink for RefusingSink {
        fn contact(&self, _: &ContactSubmission) -> Result<(), FormError> {
            Err(FormError::Rejected("backend offline".into()))
        }

        fn subscribe(&self, _: &SubscriptionRequest) -> Result<(), FormError> {
            Err(FormError::Rejected("backend offline".into()))
        }
    }

    fn contact() -> ContactSubmission {
        ContactSubmission {
            name: "Nick".into(),
            email: "nick@domain.ltd".into(),
            message: "A trustless MEV relay.".into(),
        }
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("nick@domain.ltd").is_ok());
        assert!(validate_email("  a.b@sub.example.org ").is_ok());

        assert_eq!(validate_email(""), Err(FormError::MissingField("email")));
        for bad in [
            "nick",
            "@domain.ltd",
            "nick@domain",
            "nick@.ltd",
            "nick@domain.",
            "ni ck@domain.ltd",
            "a@b@c.d",
        ] {
            assert_eq!(
                validate_email(bad),
                Err(FormError::InvalidEmail(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn contact_requires_every_field() {
        assert_eq!(contact().validate(), Ok(()));

        let missing_name = ContactSubmission {
            name: "   ".into(),
            ..contact()
        };
        assert_eq!(
            missing_name.validate(),
            Err(FormError::MissingField("contact name"))
        );

        let missing_message = ContactSubmission {
            message: String::new(),
            ..contact()
        };
        assert_eq!(
            missing_message.validate(),
            Err(FormError::MissingField("message"))
        );
    }

    #[test]
    fn subscription_requires_consent() {
        let request = SubscriptionRequest {
            email: "nick@domain.ltd".into(),
            consent: false,
        };
        assert_eq!(request.validate(), Err(FormError::ConsentRequired));
    }

    #[test]
    fn valid_submissions_reach_the_sink_once() {
        let sink = Arc::new(RecordingSink::default());
        let handle = FormSinkHandle::new(Arc::clone(&sink));

        handle.submit_contact(&contact()).expect("contact accepted");
        handle
            .submit_subscription(&SubscriptionRequest {
                email: "nick@domain.ltd".into(),
                consent: true,
            })
            .expect("subscription accepted");

        assert_eq!(*sink.contacts.lock().unwrap(), vec![contact()]);
        assert_eq!(sink.subscriptions.lock().unwrap().len(), 1);
    }

    #[test]
    fn invalid_submissions_never_reach_the_sink() {
        let sink = Arc::new(RecordingSink::default());
        let handle = FormSinkHandle::new(Arc::clone(&sink));

        let result = handle.submit_subscription(&SubscriptionRequest {
            email: "not-an-email".into(),
            consent: true,
        });

        assert!(matches!(result, Err(FormError::InvalidEmail(_))));
        assert!(sink.subscriptions.lock().unwrap().is_empty());
    }

    #[test]
    fn status_reflects_sink_outcome() {
        let handle = FormSinkHandle::new(RefusingSink);
        let status = FormStatus::from_result(handle.submit_contact(&contact()));

        assert_eq!(
            status,
            FormStatus::Failed("Submission failed: backend offline".into())
        );
        assert_eq!(status.class(), "form-status form-status-error");

        let sent = FormStatus::from_result(FormSinkHandle::default().submit_contact(&contact()));
        assert_eq!(sent, FormStatus::Sent);
        assert!(FormStatus::Idle.message().is_empty());
    }

    #[test]
    fn use_form_sink_falls_back_without_context() {
        let handle = use_form_sink();
        assert_eq!(handle.submit_contact(&contact()), Ok(()));
    }
}
