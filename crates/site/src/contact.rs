//! Contact form: validation and simulated submission.

use std::sync::OnceLock;
use std::time::Duration;

use nesh_i18n::LocaleResolver;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notification::NotificationCenter;

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("name, email and message are required")]
    MissingRequired,

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("message could not be delivered: {0}")]
    Transport(String),
}

impl ContactError {
    /// Dictionary key of the text shown to the visitor.
    pub fn message_key(&self) -> &'static str {
        match self {
            ContactError::MissingRequired => "form_error_required",
            ContactError::InvalidEmail(_) => "form_error_email",
            ContactError::Transport(_) => "form_error_send",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Required fields first, then the email shape. Subject is optional.
pub fn validate(message: &ContactMessage) -> Result<(), ContactError> {
    let blank = |s: &str| s.trim().is_empty();
    if blank(&message.name) || blank(&message.email) || blank(&message.message) {
        return Err(ContactError::MissingRequired);
    }
    if !is_valid_email(&message.email) {
        return Err(ContactError::InvalidEmail(message.email.clone()));
    }
    Ok(())
}

/// Delivers an accepted contact message.
pub trait MessageTransport {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), ContactError>>;
}

/// Waits a fixed delay and reports success. There is no backend.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    pub delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MessageTransport for SimulatedTransport {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(subject = %message.subject, "contact message accepted");
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

/// Busy state of the submit button; restores the idle state when dropped,
/// including when the submission future is dropped mid-flight.
struct Sending<'a> {
    button: &'a mut SubmitButton,
    idle_label: String,
}

impl<'a> Sending<'a> {
    fn begin(button: &'a mut SubmitButton, busy_label: &str) -> Self {
        let idle_label = std::mem::replace(&mut button.label, busy_label.to_string());
        button.disabled = true;
        Self { button, idle_label }
    }
}

impl Drop for Sending<'_> {
    fn drop(&mut self) {
        self.button.label = std::mem::take(&mut self.idle_label);
        self.button.disabled = false;
    }
}

pub struct ContactForm<T> {
    transport: T,
    pub fields: ContactMessage,
    button: SubmitButton,
}

impl<T: MessageTransport> ContactForm<T> {
    pub fn new(transport: T, locale: &LocaleResolver) -> Self {
        Self {
            transport,
            fields: ContactMessage::default(),
            button: SubmitButton {
                disabled: false,
                label: locale.translate("form_send").to_string(),
            },
        }
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Validate and send the current fields.
    ///
    /// Every outcome is also reported as a localized notification. Fields are
    /// cleared only after a successful send.
    pub async fn submit(
        &mut self,
        locale: &LocaleResolver,
        notifications: &mut NotificationCenter,
    ) -> Result<(), ContactError> {
        if let Err(err) = validate(&self.fields) {
            tracing::debug!(error = %err, "contact form rejected");
            notifications.error(locale.translate(err.message_key()));
            return Err(err);
        }

        let result = {
            let _sending = Sending::begin(&mut self.button, locale.translate("form_sending"));
            self.transport.send(&self.fields).await
        };

        match result {
            Ok(()) => {
                notifications.success(locale.translate("form_success"));
                self.fields = ContactMessage::default();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                notifications.error(locale.translate(err.message_key()));
                Err(err)
            }
        }
    }
}
