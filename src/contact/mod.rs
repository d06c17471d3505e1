//! Contact inquiries: form validation, submission and the mail relay

mod button;
mod form;
mod mailer;
mod pipeline;
mod relay;

pub use button::{SubmitButton, SubmitState};
pub use form::{ContactForm, FieldErrors, RelayRequest, INVALID_PHONE, PHONE_RE};
pub use mailer::{build_message, MailError, Mailer, Notification, SmtpMailer};
pub use pipeline::{
    ContactPipeline, HttpRelay, InquiryRelay, RelayError, SubmitOutcome, Toast, ToastKind,
    FALLBACK_FAILURE,
};
pub use relay::{
    build_notification, whatsapp_greeting, MailRelay, RelayResponse, ERROR_MESSAGE, SENT_MESSAGE,
};

#[cfg(test)]
pub(crate) use relay::tests::RecordingMailer;
