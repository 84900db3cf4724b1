use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One portfolio entry recorded from the public form.
///
/// Field names match the store's column names on the wire. The store assigns
/// `id` and `created_at`; `selected_date` is the only field mutated after
/// creation, and its presence is the sole signal that a submission belongs to
/// the Selected partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    pub portfolio_url: String,
    pub design_focus: String,
    pub opportunities: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
}

impl Submission {
    pub fn is_selected(&self) -> bool {
        self.selected_date.is_some()
    }

    /// Calendar date of submission as the `YYYY-MM-DD` string the dashboard
    /// sorts and displays.
    pub fn submission_date(&self) -> String {
        self.created_at.date_naive().to_string()
    }

    pub fn location_str(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn bio_str(&self) -> &str {
        self.bio.as_deref().unwrap_or("")
    }
}

/// Payload accepted from the public form. Everything except the
/// store-assigned fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubmission {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    pub portfolio_url: String,
    pub design_focus: String,
    pub opportunities: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl NewSubmission {
    /// Field-level validation, checked before any remote call. Returns a map
    /// of field name to message for every violation found.
    pub fn validate(&self) -> Result<(), HashMap<String, String>> {
        let mut errors = HashMap::new();

        for (field, value) in [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("portfolio_url", &self.portfolio_url),
            ("design_focus", &self.design_focus),
            ("opportunities", &self.opportunities),
        ] {
            if value.trim().is_empty() {
                errors.insert(field.to_string(), "This field is required".to_string());
            }
        }

        if !errors.contains_key("email") && !is_plausible_email(&self.email) {
            errors.insert("email".to_string(), "Invalid email address".to_string());
        }

        if !errors.contains_key("portfolio_url") && !is_http_url(&self.portfolio_url) {
            errors.insert(
                "portfolio_url".to_string(),
                "Must be an absolute http(s) URL".to_string(),
            );
        }

        if let Some(linkedin) = self.linkedin_url.as_deref() {
            if !linkedin.trim().is_empty() && !is_http_url(linkedin) {
                errors.insert(
                    "linkedin_url".to_string(),
                    "Must be an absolute http(s) URL".to_string(),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        _ => false,
    }
}

fn is_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Display label for a design-focus code. Unrecognized values pass through
/// verbatim.
pub fn design_focus_label(value: &str) -> &str {
    match value {
        "ui-ux" => "UI/UX Design",
        "graphic" => "Graphic Design",
        "branding" => "Branding",
        "illustration" => "Illustration",
        "web" => "Web Design",
        "mobile" => "Mobile App Design",
        "product" => "Product Design",
        "motion" => "Motion Graphics",
        "other" => "Other",
        other => other,
    }
}

/// Display label for an opportunity-seeking code. Unrecognized values pass
/// through verbatim.
pub fn opportunities_label(value: &str) -> &str {
    match value {
        "freelance" => "Freelance Projects",
        "full-time" => "Full-time Positions",
        "collaboration" => "Design Collaborations",
        "portfolio-flex" => "Just Flexing My Portfolio",
        "feedback" => "Looking for Feedback",
        "networking" => "Networking & Community",
        other => other,
    }
}
