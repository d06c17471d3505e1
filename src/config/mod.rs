//! Configuration module

mod site;

pub use site::CompanyConfig;
pub use site::ContactConfig;
pub use site::MailConfig;
pub use site::NewsConfig;
pub use site::SiteConfig;
pub use site::SmtpSecurity;
pub use site::WhatsAppConfig;
