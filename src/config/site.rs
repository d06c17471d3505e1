//! Site configuration (_config.yml plus environment overrides)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub url: String,
    pub language: String,

    // Directory
    pub static_dir: String,

    // Sections
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub company: CompanyConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Winnow Management Solutions".to_string(),
            description: "Streamline your anti-money laundering processes with cutting-edge solutions. Stay compliant, reduce risks, and protect your business.".to_string(),
            keywords: vec![
                "AML".to_string(),
                "Compliance Consultancy".to_string(),
                "Risk Management".to_string(),
                "UAE".to_string(),
            ],
            url: "https://winnowms.com".to_string(),
            language: "en".to_string(),

            static_dir: "static".to_string(),

            news: NewsConfig::default(),
            mail: MailConfig::default(),
            contact: ContactConfig::default(),
            company: CompanyConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load the file when it exists, fall back to defaults otherwise, then
    /// apply environment overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override settings from environment variables.
    ///
    /// `lookup` is injected so tests don't have to touch the process env.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("CONTENT_API_URL") {
            self.news.api_base_url = v;
        }

        if let Some(v) = get("EMAIL_HOST") {
            self.mail.host = v;
        }
        if let Some(port) = get("EMAIL_PORT").and_then(|v| v.trim().parse().ok()) {
            self.mail.port = port;
        }
        if let Some(v) = get("EMAIL_SECURE") {
            self.mail.security = SmtpSecurity::from_env_flag(&v);
        }
        if let Some(v) = get("EMAIL_USER") {
            self.mail.username = Some(v);
        }
        if let Some(v) = get("EMAIL_PASS") {
            self.mail.password = Some(v);
        }
        if let Some(v) = get("EMAIL_FROM") {
            self.mail.from_address = v;
        }
        if let Some(v) = get("EMAIL_TO") {
            self.mail.to_address = v;
        }

        if let Some(v) = get("CONTACT_RELAY_URL") {
            self.contact.relay_url = Some(v);
        }

        if let Some(v) = get("FB_URL") {
            self.company.facebook_url = v;
        }
        if let Some(v) = get("TWITTER_URL") {
            self.company.twitter_url = v;
        }
        if let Some(v) = get("LINKEDIN_URL") {
            self.company.linkedin_url = v;
        }
        if let Some(v) = get("INSTAGRAM_URL") {
            self.company.instagram_url = v;
        }
        if let Some(v) = get("TELEPHONE_NUMBER") {
            self.company.telephone = v;
        }
        if let Some(v) = get("SUPPORT_EMAIL") {
            self.company.support_email = v;
        }
        if let Some(v) = get("WHATSAPP_COUNTRY_CODE") {
            self.company.whatsapp.country_code = v;
        }
        if let Some(v) = get("WHATSAPP_NUMBER") {
            self.company.whatsapp.number = v;
        }
        if let Some(v) = get("WHATSAPP_MESSAGE") {
            self.company.whatsapp.message = v;
        }
    }
}

/// Remote content API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub api_base_url: String,
    pub per_page: u32,
    pub timeout_secs: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://winnowms-backend.azurewebsites.net/api".to_string(),
            per_page: 12,
            timeout_secs: 10,
        }
    }
}

/// How the SMTP connection is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Implicit TLS from the first byte (usually port 465)
    Tls,
    /// Plain connection upgraded with STARTTLS (usually port 587)
    StartTls,
    /// No encryption, for local relays only
    None,
}

impl SmtpSecurity {
    /// Interpret `EMAIL_SECURE`: "true" means implicit TLS, "none" disables
    /// encryption, anything else falls back to STARTTLS.
    pub fn from_env_flag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "tls" => SmtpSecurity::Tls,
            "none" | "off" => SmtpSecurity::None,
            _ => SmtpSecurity::StartTls,
        }
    }
}

/// Outbound SMTP settings for the contact relay
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub security: SmtpSecurity,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_address: String,
    pub to_address: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 587,
            security: SmtpSecurity::StartTls,
            username: None,
            password: None,
            from_address: "noreply@winnowms.com".to_string(),
            to_address: "info@winnowms.com".to_string(),
        }
    }
}

/// Contact form settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Relay endpoint the form posts to. Defaults to this server's own
    /// `/api/v1/sendMail` when unset.
    pub relay_url: Option<String>,
    pub success_reset_secs: u64,
    pub default_country_code: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            relay_url: None,
            success_reset_secs: 5,
            default_country_code: "+1".to_string(),
        }
    }
}

/// Company details shown in the footer and contact section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyConfig {
    pub name: String,
    pub legal_name: String,
    pub address: String,
    pub telephone: String,
    pub support_email: String,
    pub portal_url: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub instagram_url: String,
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "Winnow Management Solutions".to_string(),
            legal_name: "Winnow Management Solutions LLC".to_string(),
            address: "Shams Business Center, Sharjah Media City Freezone, Al Messanad, Sharjah, UAE.".to_string(),
            telephone: "+971-52-6794027".to_string(),
            support_email: "info@winnowms.com".to_string(),
            portal_url: "https://aml.winnowms.com".to_string(),
            facebook_url: "#".to_string(),
            twitter_url: "#".to_string(),
            linkedin_url: "#".to_string(),
            instagram_url: "#".to_string(),
            whatsapp: WhatsAppConfig::default(),
        }
    }
}

/// Floating WhatsApp call-to-action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsAppConfig {
    pub country_code: String,
    pub number: String,
    pub message: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            country_code: "971".to_string(),
            number: "526794027".to_string(),
            message: "Hello, I would like to know more about your services.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Winnow Management Solutions");
        assert_eq!(config.news.per_page, 12);
        assert_eq!(config.news.timeout_secs, 10);
        assert_eq!(config.contact.success_reset_secs, 5);
        assert_eq!(config.contact.default_country_code, "+1");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Test Site
news:
  api_base_url: http://localhost:9000/api
  per_page: 6
mail:
  host: smtp.example.com
  port: 465
  security: tls
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Test Site");
        assert_eq!(config.news.api_base_url, "http://localhost:9000/api");
        assert_eq!(config.news.per_page, 6);
        // Untouched fields keep their defaults
        assert_eq!(config.news.timeout_secs, 10);
        assert_eq!(config.mail.port, 465);
        assert_eq!(config.mail.security, SmtpSecurity::Tls);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: From File\nstatic_dir: assets\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "From File");
        assert_eq!(config.static_dir, "assets");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(dir.path().join("nope.yml")).unwrap();
        assert_eq!(config.news.per_page, 12);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("EMAIL_HOST", "smtp.gmail.com"),
            ("EMAIL_PORT", "465"),
            ("EMAIL_SECURE", "true"),
            ("EMAIL_USER", "bot"),
            ("EMAIL_PASS", "secret"),
            ("EMAIL_TO", "ops@example.com"),
            ("TELEPHONE_NUMBER", "+971000"),
            ("WHATSAPP_NUMBER", "555"),
            ("EMAIL_FROM", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.mail.host, "smtp.gmail.com");
        assert_eq!(config.mail.port, 465);
        assert_eq!(config.mail.security, SmtpSecurity::Tls);
        assert_eq!(config.mail.username.as_deref(), Some("bot"));
        assert_eq!(config.mail.password.as_deref(), Some("secret"));
        assert_eq!(config.mail.to_address, "ops@example.com");
        assert_eq!(config.company.telephone, "+971000");
        assert_eq!(config.company.whatsapp.number, "555");
        // Blank values are ignored
        assert_eq!(config.mail.from_address, "noreply@winnowms.com");
    }

    #[test]
    fn test_smtp_security_flag() {
        assert_eq!(SmtpSecurity::from_env_flag("true"), SmtpSecurity::Tls);
        assert_eq!(SmtpSecurity::from_env_flag("false"), SmtpSecurity::StartTls);
        assert_eq!(SmtpSecurity::from_env_flag("none"), SmtpSecurity::None);
    }
}
