//! Contact form input and validation

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

lazy_static! {
    /// E.164-like: optional plus, no leading zero, 2 to 15 digits
    pub static ref PHONE_RE: Regex = Regex::new(r"^\+?[1-9]\d{1,14}$").expect("valid phone regex");
}

pub const INVALID_PHONE: &str = "Invalid phone number.";

/// What the visitor typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,

    #[validate(required(message = "Company name is required."))]
    pub company_name: Option<String>,

    #[validate(email(message = "Invalid email address."))]
    pub email: String,

    #[validate(required(message = "Country code is required."))]
    pub country_code: Option<String>,

    /// Local number, without the country code
    pub phone: String,

    #[validate(length(min = 10, message = "Message must be at least 10 characters."))]
    pub message: String,
}

impl ContactForm {
    /// Empty form with the country picker preset
    pub fn blank(default_country_code: &str) -> Self {
        Self {
            country_code: Some(default_country_code.to_string()),
            ..Self::default()
        }
    }

    /// Country code and local number joined, as sent to the relay
    pub fn full_phone(&self) -> String {
        format!(
            "{}{}",
            self.country_code.as_deref().unwrap_or("").trim(),
            self.phone.trim()
        )
    }

    /// Run every field rule. Errors are keyed by the form's field names.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Err(report) = self.validate() {
            for (field, failures) in report.field_errors() {
                if let Some(first) = failures.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    errors.insert(&camel_case(&field.to_string()), message);
                }
            }
        }

        if !PHONE_RE.is_match(&self.full_phone()) {
            errors.insert("phone", INVALID_PHONE.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Payload for the mail relay
    pub fn to_relay_request(&self) -> RelayRequest {
        RelayRequest {
            name: self.name.trim().to_string(),
            company_name: self.company_name.clone().unwrap_or_default(),
            email: self.email.trim().to_string(),
            phone: self.full_phone(),
            message: self.message.clone(),
        }
    }

    /// Clear every field, keeping the default country code
    pub fn reset(&mut self, default_country_code: &str) {
        *self = Self::blank(default_country_code);
    }
}

/// Body of `POST /api/v1/sendMail`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayRequest {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Field name -> first failing rule's message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: String) {
        self.0.insert(field.to_string(), message);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// `company_name` -> `companyName`
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Amina".to_string(),
            company_name: Some("Gold Souk Traders".to_string()),
            email: "amina@example.com".to_string(),
            country_code: Some("+971".to_string()),
            phone: "526794027".to_string(),
            message: "Please call me about AML training.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().check(), Ok(()));
    }

    #[test]
    fn test_sloppy_input_reports_each_field() {
        let form = ContactForm {
            name: "Jo".to_string(),
            email: "bad".to_string(),
            phone: "123".to_string(),
            message: "short".to_string(),
            ..ContactForm::default()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.len(), 4, "{:?}", errors);
        assert_eq!(errors.get("email"), Some("Invalid email address."));
        assert_eq!(
            errors.get("message"),
            Some("Message must be at least 10 characters.")
        );
        assert!(errors.contains("companyName"));
        assert!(errors.contains("countryCode"));
        // Two characters is long enough
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_short_name() {
        let form = ContactForm {
            name: "J".to_string(),
            ..valid_form()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_phone_is_checked_with_country_code() {
        let mut form = valid_form();
        form.phone = "52-679".to_string();
        assert_eq!(form.check().unwrap_err().get("phone"), Some(INVALID_PHONE));

        form.country_code = Some("+0".to_string());
        form.phone = "526794027".to_string();
        assert!(form.check().unwrap_err().contains("phone"));

        form.country_code = Some("+44".to_string());
        form.phone = "1234567890123456".to_string();
        assert!(form.check().unwrap_err().contains("phone"));
    }

    #[test]
    fn test_empty_company_name_is_present() {
        let form = ContactForm {
            company_name: Some(String::new()),
            ..valid_form()
        };
        assert_eq!(form.check(), Ok(()));
    }

    #[test]
    fn test_relay_request_concatenates_phone() {
        let request = valid_form().to_relay_request();
        assert_eq!(request.phone, "+971526794027");
        assert_eq!(request.company_name, "Gold Souk Traders");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["companyName"], "Gold Souk Traders");
    }

    #[test]
    fn test_reset_keeps_country_code() {
        let mut form = valid_form();
        form.reset("+1");
        assert_eq!(form, ContactForm::blank("+1"));
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let form: ContactForm = serde_json::from_str(
            r#"{"name":"Amina","companyName":"X","email":"a@b.co","countryCode":"+1","phone":"5550100","message":"0123456789"}"#,
        )
        .unwrap();
        assert_eq!(form.company_name.as_deref(), Some("X"));
        assert_eq!(form.check(), Ok(()));
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("company_name"), "companyName");
        assert_eq!(camel_case("email"), "email");
        assert_eq!(camel_case("countryCode"), "countryCode");
    }
}
