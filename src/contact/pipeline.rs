//! Client side of a contact submission: validate, relay, report

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::button::SubmitButton;
use super::form::{ContactForm, FieldErrors, RelayRequest};
use super::relay::{MailRelay, RelayResponse, ERROR_MESSAGE, SENT_MESSAGE};

pub const FALLBACK_FAILURE: &str = "Failed to send email";

#[derive(Debug, Error)]
pub enum RelayError {
    /// The relay answered but refused; carries its message
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Where submissions are delivered
#[async_trait]
pub trait InquiryRelay: Send + Sync {
    /// Deliver one submission, returning the relay's confirmation message
    async fn deliver(&self, request: &RelayRequest) -> Result<String, RelayError>;
}

/// Posts submissions as JSON to a remote relay endpoint
#[derive(Clone)]
pub struct HttpRelay {
    http: Client,
    endpoint: String,
}

impl std::fmt::Debug for HttpRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRelay")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl HttpRelay {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, RelayError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InquiryRelay for HttpRelay {
    async fn deliver(&self, request: &RelayRequest) -> Result<String, RelayError> {
        debug!(endpoint = %self.endpoint, "posting contact submission");
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        // A body that is not JSON still counts; only the status decides then
        let reply: RelayResponse = response.json().await.unwrap_or_default();

        if !status.is_success() || reply.success == Some(false) {
            let reason = reply
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_FAILURE.to_string());
            return Err(RelayError::Rejected(reason));
        }
        Ok(reply.message.unwrap_or_else(|| SENT_MESSAGE.to_string()))
    }
}

/// Same-process delivery straight through the mailer.
///
/// SMTP details stay in the relay's log; the visitor sees the same
/// message a remote relay would answer with.
#[async_trait]
impl InquiryRelay for MailRelay {
    async fn deliver(&self, request: &RelayRequest) -> Result<String, RelayError> {
        self.relay(request)
            .await
            .map(|()| SENT_MESSAGE.to_string())
            .map_err(|_| RelayError::Rejected(ERROR_MESSAGE.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notice shown after a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success() -> Self {
        Self {
            kind: ToastKind::Success,
            message: "Email sent successfully!".to_string(),
        }
    }

    pub fn error(reason: &str) -> Self {
        Self {
            kind: ToastKind::Error,
            message: format!("Error: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FieldErrors),
    Sent(Toast),
    Failed(Toast),
}

impl SubmitOutcome {
    pub fn toast(&self) -> Option<&Toast> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Sent(toast) | SubmitOutcome::Failed(toast) => Some(toast),
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitOutcome::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Drives one form through validation, delivery and the button states
pub struct ContactPipeline {
    relay: Arc<dyn InquiryRelay>,
    button: SubmitButton,
    default_country_code: String,
}

impl ContactPipeline {
    pub fn new(relay: Arc<dyn InquiryRelay>, button: SubmitButton, default_country_code: &str) -> Self {
        Self {
            relay,
            button,
            default_country_code: default_country_code.to_string(),
        }
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Invalid input never reaches the relay. On success the form is cleared;
    /// on failure the visitor's input is kept for a retry.
    ///
    /// The success revert timer only shows when the pipeline outlives the
    /// call; a per-request pipeline drops its button once the page is
    /// rendered and the browser runs the revert instead.
    pub async fn submit(&self, form: &mut ContactForm) -> SubmitOutcome {
        if let Err(errors) = form.check() {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "contact form rejected");
            return SubmitOutcome::Invalid(errors);
        }

        let request = form.to_relay_request();
        self.button.begin_sending();

        match self.relay.deliver(&request).await {
            Ok(_) => {
                form.reset(&self.default_country_code);
                self.button.succeed();
                SubmitOutcome::Sent(Toast::success())
            }
            Err(e) => {
                warn!(error = %e, "contact submission failed");
                self.button.fail();
                let reason = match &e {
                    RelayError::Rejected(message) => message.clone(),
                    RelayError::Transport(_) => FALLBACK_FAILURE.to_string(),
                };
                SubmitOutcome::Failed(Toast::error(&reason))
            }
        }
    }
}
