//! Landing page: hero, about, services and the contact section

use serde::Serialize;

use crate::config::SiteConfig;
use crate::contact::{ContactForm, FieldErrors, SubmitState, Toast};
use crate::helpers::whatsapp_link;
use crate::theme::{HighlightIcon, ServiceIcon};

pub struct Service {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub icon: ServiceIcon,
}

pub const SERVICES: [Service; 12] = [
    Service {
        title: "AML Compliance Advisor",
        items: &[
            "Tailored services based on your requirements.",
            "Contract for annually/Quarterly/monthly.",
        ],
        icon: ServiceIcon::ShieldCheck,
    },
    Service {
        title: "AML/CFT Policy/Procedures",
        items: &[
            "Custom made AML manuals and policies opt for your business and in accordance with regulator's guidance.",
            "Regular update of policies based on the update from the MOE, UAE/FATF/CPI/BI.",
        ],
        icon: ServiceIcon::FileText,
    },
    Service {
        title: "MLRO Services",
        items: &["End to end compliance services"],
        icon: ServiceIcon::UserCheck,
    },
    Service {
        title: "Sanction Screening Tool",
        items: &[
            "Screening against 100+ sanctions including UAE, UN list.",
            "PEP check",
            "Adverse media check",
        ],
        icon: ServiceIcon::Search,
    },
    Service {
        title: "KYC Review and Verification",
        items: &[
            "Client on boarding form",
            "KYC documents verification",
            "GOAML reporting (DPMSR/SAR/STR etc)",
        ],
        icon: ServiceIcon::UserPlus,
    },
    Service {
        title: "Risk Assessment",
        items: &[
            "Enterprise-wide risk assessment",
            "Clients/Suppliers Risk assessment",
        ],
        icon: ServiceIcon::BarChart,
    },
    Service {
        title: "Assistance in Mandatory Registration (GOAML)",
        items: &["GOAML registration", "EOCN subscription"],
        icon: ServiceIcon::FileSignature,
    },
    Service {
        title: "Periodic Inspection Assistance",
        items: &["RAP, Onsite inspection report, Compliance meeting."],
        icon: ServiceIcon::ClipboardList,
    },
    Service {
        title: "AML Training",
        items: &[
            "Training to MLRO/Senior management",
            "Training to first/second line defence staffs",
        ],
        icon: ServiceIcon::GraduationCap,
    },
    Service {
        title: "AML Independent Review",
        items: &["Annual AML review GAP analysis"],
        icon: ServiceIcon::FileSearch,
    },
    Service {
        title: "Grievance Filing",
        items: &["Assistance in grievance filing"],
        icon: ServiceIcon::MessageSquare,
    },
    Service {
        title: "Guidance on Management Work",
        items: &[
            "Assistance in Survey/Registration work",
            "Other management works.",
        ],
        icon: ServiceIcon::Briefcase,
    },
];

const HIGHLIGHTS: [(&str, HighlightIcon); 3] = [
    ("Enhanced Security", HighlightIcon::ShieldCheck),
    ("Improved Efficiency", HighlightIcon::TrendingUp),
    ("Regulatory Compliance", HighlightIcon::Lock),
];

const ABOUT_CARDS: [(&str, &str, HighlightIcon); 3] = [
    (
        "Our Expertise",
        "Our team specializes in navigating the complex regulatory landscapes of the DNFBP, Financial Institutions, and Insurance sectors. With extensive experience in these highly regulated industries, we possess a deep understanding of the unique compliance and risk management challenges that our clients face.",
        HighlightIcon::Globe,
    ),
    (
        "Our Approach",
        "We provide expert guidance and tailored compliance solutions to help businesses navigate regulatory landscapes and achieve operational excellence. Our approach is rooted in deep industry knowledge and a commitment to staying ahead of regulatory changes.",
        HighlightIcon::Shield,
    ),
    (
        "Our Mission",
        "We are dedicated to ensuring our clients meet industry and regulatory standards, mitigating risks and fostering trust. Our mission is to empower businesses with the tools and knowledge they need to thrive in complex regulatory environments.",
        HighlightIcon::Target,
    ),
];

/// Dialing codes offered by the country picker
pub const COUNTRY_CODES: [(&str, &str); 12] = [
    ("+1", "United States / Canada"),
    ("+44", "United Kingdom"),
    ("+91", "India"),
    ("+92", "Pakistan"),
    ("+961", "Lebanon"),
    ("+962", "Jordan"),
    ("+965", "Kuwait"),
    ("+966", "Saudi Arabia"),
    ("+968", "Oman"),
    ("+971", "United Arab Emirates"),
    ("+973", "Bahrain"),
    ("+974", "Qatar"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCard {
    pub title: &'static str,
    pub items: Vec<&'static str>,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub code: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Rendered state of the contact form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSection {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub state: SubmitState,
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub toast: Option<Toast>,
    /// Delay before a success label reverts, for the browser
    pub revert_ms: u64,
    pub countries: Vec<CountryOption>,
}

impl ContactSection {
    pub fn new(
        form: ContactForm,
        errors: FieldErrors,
        state: SubmitState,
        toast: Option<Toast>,
        revert_ms: u64,
    ) -> Self {
        let selected = form.country_code.clone().unwrap_or_default();
        let countries = COUNTRY_CODES
            .iter()
            .map(|&(code, name)| CountryOption {
                code,
                label: format!("{} ({})", name, code),
                selected: code == selected,
            })
            .collect();
        Self {
            form,
            errors,
            button_label: state.label(),
            button_disabled: state.is_disabled(),
            state,
            toast,
            revert_ms,
            countries,
        }
    }

    /// Fresh form as first shown
    pub fn blank(site: &SiteConfig) -> Self {
        Self::new(
            ContactForm::blank(&site.contact.default_country_code),
            FieldErrors::default(),
            SubmitState::Idle,
            None,
            site.contact.success_reset_secs * 1000,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingView {
    pub highlights: Vec<Card>,
    pub about: Vec<Card>,
    pub services: Vec<ServiceCard>,
    pub contact: ContactSection,
    pub whatsapp_href: String,
}

impl LandingView {
    pub fn new(site: &SiteConfig, contact: ContactSection) -> Self {
        let whatsapp = &site.company.whatsapp;
        Self {
            highlights: HIGHLIGHTS
                .iter()
                .map(|&(text, icon)| Card {
                    title: text,
                    text: "",
                    icon: icon.svg(),
                })
                .collect(),
            about: ABOUT_CARDS
                .iter()
                .map(|&(title, text, icon)| Card {
                    title,
                    text,
                    icon: icon.svg(),
                })
                .collect(),
            services: SERVICES
                .iter()
                .map(|s| ServiceCard {
                    title: s.title,
                    items: s.items.to_vec(),
                    icon: s.icon.svg(),
                })
                .collect(),
            contact,
            whatsapp_href: whatsapp_link(
                &format!("{}{}", whatsapp.country_code, whatsapp.number),
                &whatsapp.message,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_icons_follow_table() {
        let view = LandingView::new(&SiteConfig::default(), ContactSection::blank(&SiteConfig::default()));
        assert_eq!(view.services.len(), 12);
        assert_eq!(view.services[0].title, "AML Compliance Advisor");
        assert_eq!(view.services[0].icon, ServiceIcon::ShieldCheck.svg());
        assert_eq!(view.services[8].icon, ServiceIcon::GraduationCap.svg());
        assert_eq!(view.about[2].title, "Our Mission");
        assert_eq!(view.highlights.len(), 3);
    }

    #[test]
    fn test_whatsapp_href() {
        let mut site = SiteConfig::default();
        site.company.whatsapp.country_code = "971".to_string();
        site.company.whatsapp.number = "52 679 4027".to_string();
        site.company.whatsapp.message = "Hi there".to_string();
        let view = LandingView::new(&site, ContactSection::blank(&site));
        assert_eq!(view.whatsapp_href, "https://wa.me/971526794027?text=Hi%20there");
    }

    #[test]
    fn test_blank_contact_section() {
        let section = ContactSection::blank(&SiteConfig::default());
        assert_eq!(section.button_label, "Send Inquiry");
        assert_eq!(section.form.country_code.as_deref(), Some("+1"));
        assert_eq!(section.revert_ms, 5000);
        let selected: Vec<_> = section.countries.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].code, "+1");
    }
}
