//! Contact form: field validation and the simulated send/reset cycle.

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use autolot_core::{InquiryId, ValueObject};
use autolot_events::Timer;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// A contact-form field with its own error slot (`#<id>Error`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Id of the element that displays this field's error.
    pub fn error_element_id(&self) -> String {
        format!("{}Error", self.id())
    }
}

/// Submitted form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ValueObject for ContactForm {}

/// Per-field error messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(Field::id).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Length in UTF-16 code units, the unit the browser's `value.length` uses.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

impl ContactForm {
    /// Check every field; all failures are reported together.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = BTreeMap::new();

        if utf16_len(self.name.trim()) < MIN_NAME_CHARS {
            errors.insert(Field::Name, "Please enter a valid name (at least 2 characters)");
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email address");
        }
        if self.subject.is_empty() {
            errors.insert(Field::Subject, "Please select a subject");
        }
        if utf16_len(self.message.trim()) < MIN_MESSAGE_CHARS {
            errors.insert(Field::Message, "Please enter a message (at least 10 characters)");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("a submission is already in progress")]
    Busy,
}

/// An accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub submitted_at: DateTime<Utc>,
    pub form: ContactForm,
}

/// Where the form is in its send cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    /// Form shown, button enabled.
    Idle,
    /// Button disabled with a spinner.
    Sending,
    /// Form hidden, success message shown.
    Sent,
}

/// State change produced by [`ContactSubmission::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionTransition {
    /// The simulated send finished.
    Delivered,
    /// The success message timed out; the form was cleared and re-shown.
    FormReset,
}

#[derive(Debug)]
pub struct ContactSubmission {
    state: SubmissionState,
    timer: Timer,
    submit_delay: Duration,
    reset_delay: Duration,
    current: Option<Inquiry>,
}

impl ContactSubmission {
    pub fn new(submit_delay: Duration, reset_delay: Duration) -> Self {
        Self {
            state: SubmissionState::Idle,
            timer: Timer::new(),
            submit_delay,
            reset_delay,
            current: None,
        }
    }

    /// Validate and start sending.
    pub fn submit(&mut self, now: Instant, form: ContactForm) -> Result<InquiryId, ContactError> {
        if self.state != SubmissionState::Idle {
            return Err(ContactError::Busy);
        }
        if let Err(errors) = form.validate() {
            tracing::debug!(%errors, "contact form rejected");
            return Err(ContactError::Invalid(errors));
        }

        let inquiry = Inquiry {
            id: InquiryId::new(),
            submitted_at: Utc::now(),
            form,
        };
        let id = inquiry.id;
        tracing::info!(inquiry_id = %id, subject = %inquiry.form.subject, "contact form sending");

        self.current = Some(inquiry);
        self.state = SubmissionState::Sending;
        self.timer.start(now, self.submit_delay);
        Ok(id)
    }

    /// Advance the cycle if its timer is due.
    pub fn tick(&mut self, now: Instant) -> Option<SubmissionTransition> {
        if !self.timer.fire(now) {
            return None;
        }
        match self.state {
            SubmissionState::Sending => {
                self.state = SubmissionState::Sent;
                self.timer.start(now, self.reset_delay);
                if let Some(inquiry) = &self.current {
                    tracing::info!(inquiry_id = %inquiry.id, "contact form delivered");
                }
                Some(SubmissionTransition::Delivered)
            }
            SubmissionState::Sent => {
                self.state = SubmissionState::Idle;
                self.current = None;
                Some(SubmissionTransition::FormReset)
            }
            SubmissionState::Idle => None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The submission being sent or just sent.
    pub fn current(&self) -> Option<&Inquiry> {
        self.current.as_ref()
    }

    pub fn form_visible(&self) -> bool {
        self.state != SubmissionState::Sent
    }

    pub fn success_visible(&self) -> bool {
        self.state == SubmissionState::Sent
    }

    pub fn button_disabled(&self) -> bool {
        self.state != SubmissionState::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            SubmissionState::Idle => "Send Message",
            SubmissionState::Sending | SubmissionState::Sent => "Sending...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "test-drive".into(),
            message: "Is the 2021 SUV still available?".into(),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission::new(Duration::from_millis(1500), Duration::from_millis(5000))
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(Field::Name),
            Some("Please enter a valid name (at least 2 characters)")
        );
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
        assert_eq!(errors.get(Field::Subject), Some("Please select a subject"));
        assert_eq!(
            errors.get(Field::Message),
            Some("Please enter a message (at least 10 characters)")
        );
        assert_eq!(errors.to_string(), "invalid fields: name, email, subject, message");
    }

    #[test]
    fn lengths_count_utf16_units() {
        // One astral-plane character is two UTF-16 units, enough for a name.
        let form = ContactForm {
            name: "\u{1F697}".into(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Ok(()));

        let form = ContactForm {
            name: "\u{e9}".into(),
            ..valid_form()
        };
        assert!(form.validate().unwrap_err().get(Field::Name).is_some());
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let form = ContactForm {
            name: "  A  ".into(),
            message: "   short   ".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Message]);
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last@dealer.example.com"] {
            let form = ContactForm { email: ok.into(), ..valid_form() };
            assert!(form.validate().is_ok(), "{ok}");
        }
        for bad in ["", "plain", "a@b", "a b@c.com", "@b.com", "a@@b.com"] {
            let form = ContactForm { email: bad.into(), ..valid_form() };
            assert!(form.validate().unwrap_err().get(Field::Email).is_some(), "{bad}");
        }
    }

    #[test]
    fn error_element_ids() {
        assert_eq!(Field::Email.error_element_id(), "emailError");
    }

    #[test]
    fn send_cycle_runs_on_timers() {
        let t0 = Instant::now();
        let mut sub = submission();

        let id = sub.submit(t0, valid_form()).unwrap();
        assert_eq!(sub.state(), SubmissionState::Sending);
        assert!(sub.button_disabled());
        assert_eq!(sub.button_label(), "Sending...");
        assert_eq!(sub.current().map(|i| i.id), Some(id));

        assert_eq!(sub.tick(t0 + Duration::from_millis(1000)), None);
        assert_eq!(sub.tick(t0 + Duration::from_millis(1500)), Some(SubmissionTransition::Delivered));
        assert!(sub.success_visible());
        assert!(!sub.form_visible());

        assert_eq!(sub.tick(t0 + Duration::from_millis(6000)), None);
        assert_eq!(sub.tick(t0 + Duration::from_millis(6500)), Some(SubmissionTransition::FormReset));
        assert_eq!(sub.state(), SubmissionState::Idle);
        assert!(sub.form_visible());
        assert!(!sub.button_disabled());
        assert_eq!(sub.button_label(), "Send Message");
        assert!(sub.current().is_none());
    }

    #[test]
    fn submit_while_busy_is_rejected() {
        let t0 = Instant::now();
        let mut sub = submission();
        sub.submit(t0, valid_form()).unwrap();
        assert_eq!(sub.submit(t0, valid_form()), Err(ContactError::Busy));
    }

    #[test]
    fn invalid_submit_leaves_form_idle() {
        let t0 = Instant::now();
        let mut sub = submission();
        let err = sub.submit(t0, ContactForm::default()).unwrap_err();
        assert!(matches!(err, ContactError::Invalid(ref e) if e.len() == 4));
        assert_eq!(sub.state(), SubmissionState::Idle);
        assert_eq!(sub.tick(t0 + Duration::from_secs(10)), None);
    }
}
