//! Contact form: field checks, `mailto:` composition and the simulated send.
//!
//! Nothing is sent over the network. A submission waits a short delay,
//! hands back a `mailto:` URI for the platform mail client and reports
//! success; a little later the form clears itself.

use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::constants::{CONTACT_RECIPIENT, CONTACT_RESET_DELAY, CONTACT_SEND_DELAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("email address is not valid")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("a submission is already in progress")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Every field is required; the email must look like `local@domain`.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors: Vec<FieldError> = Field::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .map(FieldError::Missing)
            .collect();

        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            errors.push(FieldError::InvalidEmail);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.message)
    }

    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body())
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// matching JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Sent,
}

/// Timings and recipient for [`ContactSubmission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSettings {
    pub recipient: String,
    pub send_delay: Duration,
    pub reset_delay: Duration,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            recipient: CONTACT_RECIPIENT.to_string(),
            send_delay: CONTACT_SEND_DELAY,
            reset_delay: CONTACT_RESET_DELAY,
        }
    }
}

/// Idle -> Sending -> Sent -> Idle, driven by the injected clock.
#[derive(Debug)]
pub struct ContactSubmission<C: Clock> {
    clock: C,
    settings: SubmissionSettings,
    form: ContactForm,
    status: SubmissionStatus,
    since: Duration,
}

impl<C: Clock> ContactSubmission<C> {
    pub fn new(clock: C, settings: SubmissionSettings) -> Self {
        Self {
            clock,
            settings,
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
            since: Duration::ZERO,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn status_message(&self) -> &'static str {
        match self.status {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Sending => "Sending...",
            SubmissionStatus::Sent => "Message sent successfully!",
        }
    }

    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.status != SubmissionStatus::Idle {
            return Err(SubmitError::Busy);
        }
        self.form.validate().map_err(SubmitError::Invalid)?;
        self.status = SubmissionStatus::Sending;
        self.since = self.clock.now();
        debug!(subject = %self.form.subject, "contact form submitted");
        Ok(())
    }

    /// Advances the submission timeline.
    ///
    /// Returns the `mailto:` URI once, at the moment the message counts as sent.
    pub fn update(&mut self) -> Option<String> {
        let now = self.clock.now();
        let mut uri = None;

        if self.status == SubmissionStatus::Sending && now >= self.since + self.settings.send_delay {
            uri = Some(self.form.mailto_uri(&self.settings.recipient));
            self.status = SubmissionStatus::Sent;
            self.since += self.settings.send_delay;
            info!(recipient = %self.settings.recipient, "contact message handed to mail client");
        }

        if self.status == SubmissionStatus::Sent && now >= self.since + self.settings.reset_delay {
            self.form.clear();
            self.status = SubmissionStatus::Idle;
        }

        uri
    }
}
