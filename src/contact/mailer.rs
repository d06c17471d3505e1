//! Outbound email over SMTP

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::{MailConfig, SmtpSecurity};

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid {role} address {address:?}: {reason}")]
    Address {
        role: &'static str,
        address: String,
        reason: String,
    },

    #[error("failed to build email: {0}")]
    Build(String),

    #[error("SMTP configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Transport(String),
}

/// One email ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Full mailbox, display name allowed (`"Contact Form" <a@b.c>`)
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), MailError>;
}

/// Sends mail through the configured SMTP server
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("transport", &"<AsyncSmtpTransport>")
            .finish()
    }
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        Ok(Self {
            transport: build_transport(config)?,
            host: config.host.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, notification: &Notification) -> Result<(), MailError> {
        let message = build_message(notification)?;
        debug!(to = %notification.to, subject = %notification.subject, "sending email");
        self.transport.send(message).await.map_err(|e| {
            error!(error = %e, host = %self.host, "SMTP send failed");
            MailError::Transport(e.to_string())
        })?;
        info!(to = %notification.to, "email sent");
        Ok(())
    }
}

fn mailbox(role: &'static str, address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e: lettre::address::AddressError| MailError::Address {
        role,
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Assemble a plain-text + HTML alternative message
pub fn build_message(notification: &Notification) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(mailbox("from", &notification.from)?)
        .to(mailbox("to", &notification.to)?)
        .subject(&notification.subject);

    if let Some(reply_to) = &notification.reply_to {
        builder = builder.reply_to(mailbox("reply-to", reply_to)?);
    }

    builder
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(notification.text.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(notification.html.clone()),
                ),
        )
        .map_err(|e| MailError::Build(e.to_string()))
}

fn build_transport(config: &MailConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
    let builder = match config.security {
        SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| MailError::Config(format!("SMTP TLS relay error: {e}")))?,
        SmtpSecurity::StartTls => {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| MailError::Config(format!("SMTP STARTTLS relay error: {e}")))?
        }
        SmtpSecurity::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
    };

    let builder = builder.port(config.port);

    let builder = match (&config.username, &config.password) {
        (Some(user), Some(pass)) => builder.credentials(Credentials::new(user.clone(), pass.clone())),
        _ => builder,
    };

    Ok(builder.build())
}
