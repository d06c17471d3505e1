//! Mail relay: turns a contact submission into a notification email

use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use super::form::RelayRequest;
use super::mailer::{MailError, Mailer, Notification};
use crate::config::MailConfig;
use crate::helpers::{html_escape, whatsapp_link};

pub const SENT_MESSAGE: &str = "Email sent successfully";
pub const ERROR_MESSAGE: &str = "Error sending email";

/// JSON body returned by `POST /api/v1/sendMail`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl RelayResponse {
    pub fn sent() -> Self {
        Self {
            message: Some(SENT_MESSAGE.to_string()),
            ..Self::default()
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            message: Some(ERROR_MESSAGE.to_string()),
            error: Some(reason.into()),
            success: None,
        }
    }
}

/// Prefilled WhatsApp reply to the visitor
pub fn whatsapp_greeting(request: &RelayRequest) -> String {
    format!(
        "Hello {} from {}, I received your message: \"{}\". How can I help you further?",
        request.name, request.company_name, request.message
    )
}

pub fn build_notification(request: &RelayRequest, mail: &MailConfig) -> Notification {
    let text = format!(
        "Name: {}\nCompany: {}\nEmail: {}\nPhone: {}\nMessage: {}\n",
        request.name, request.company_name, request.email, request.phone, request.message
    );

    let whatsapp = whatsapp_link(&request.phone, &whatsapp_greeting(request));
    let name = html_escape(&request.name);
    let company = html_escape(&request.company_name);
    let email = html_escape(&request.email);
    let phone = html_escape(&request.phone);
    let message = html_escape(&request.message);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background-color: #ed1c24; padding: 20px; text-align: center;">
    <h1 style="color: white; margin: 0;">Winnow Management Solutions</h1>
  </div>
  <div style="padding: 20px;">
    <h2 style="color: #333;">New Contact Form Submission</h2>
    <p style="margin-bottom: 10px;"><strong>Name:</strong> {name}</p>
    <p style="margin-bottom: 10px;"><strong>Company:</strong> {company}</p>
    <p style="margin-bottom: 10px;">
      <strong>Email:</strong> {email}
      <a href="mailto:{email}" style="display: inline-block; margin-left: 10px; padding: 5px 10px; background-color: #4CAF50; color: white; text-decoration: none; border-radius: 3px;">Send Email</a>
    </p>
    <p style="margin-bottom: 10px;">
      <strong>Phone:</strong> {phone}
      <a href="tel:{phone}" style="display: inline-block; margin-left: 10px; padding: 5px 10px; background-color: #008CBA; color: white; text-decoration: none; border-radius: 3px;">Call</a>
      <a href="{whatsapp}" style="display: inline-block; margin-left: 10px; padding: 5px 10px; background-color: #25D366; color: white; text-decoration: none; border-radius: 3px;">WhatsApp</a>
    </p>
    <p style="margin-bottom: 10px;"><strong>Message:</strong></p>
    <p style="background-color: #f4f4f4; padding: 10px; border-radius: 4px;">{message}</p>
  </div>
  <div style="background-color: #f4f4f4; padding: 10px; text-align: center; font-size: 12px; color: #666;">
    <p>This is an automated message. Please do not reply directly to this email.</p>
  </div>
</div>
"#
    );

    let reply_to = request.email.trim();
    Notification {
        from: format!("\"Contact Form\" <{}>", mail.from_address),
        to: mail.to_address.clone(),
        reply_to: reply_to
            .parse::<Mailbox>()
            .is_ok()
            .then(|| reply_to.to_string()),
        subject: format!("New Contact Form Submission from {}", request.name),
        text,
        html,
    }
}

/// Server side of the contact form: one email per submission
#[derive(Clone)]
pub struct MailRelay {
    mailer: Arc<dyn Mailer>,
    config: MailConfig,
}

impl std::fmt::Debug for MailRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailRelay")
            .field("to", &self.config.to_address)
            .finish_non_exhaustive()
    }
}

impl MailRelay {
    pub fn new(mailer: Arc<dyn Mailer>, config: MailConfig) -> Self {
        Self { mailer, config }
    }

    pub async fn relay(&self, request: &RelayRequest) -> Result<(), MailError> {
        let notification = build_notification(request, &self.config);
        match self.mailer.send(&notification).await {
            Ok(()) => {
                info!(name = %request.name, "contact notification relayed");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to relay contact notification");
                Err(e)
            }
        }
    }
}
