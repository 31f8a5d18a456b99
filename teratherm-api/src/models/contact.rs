use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

pub const CONTACT_COLLECTION: &str = "contactmessage";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactSource {
    #[default]
    Website,
    Landing,
    Other,
}

impl ContactSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "website" => Some(Self::Website),
            "landing" => Some(Self::Landing),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Landing => "landing",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ContactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact form payload as it arrives on the wire.
///
/// `source` is kept as a plain string so that an unknown value is reported
/// together with every other field violation instead of failing decoding.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 2, max = 120, message = "Name must be 2-120 characters"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
    #[validate(length(min = 5, max = 4000, message = "Message must be 5-4000 characters"))]
    pub message: String,
    #[serde(default = "default_source", deserialize_with = "null_as_default_source")]
    #[validate(custom(function = "validate_source"))]
    pub source: String,
}

fn default_source() -> String {
    ContactSource::default().as_str().to_string()
}

fn null_as_default_source<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_source))
}

/// Require a dotted domain, e.g. reject `user@localhost`.
///
/// Addresses without an `@` are left to the `email` check.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };
    if domain.contains('.') && domain.split('.').all(|label| !label.is_empty()) {
        return Ok(());
    }
    let mut err = ValidationError::new("email_domain");
    err.message = Some("Email domain must contain a dot".into());
    Err(err)
}

fn validate_source(source: &str) -> Result<(), ValidationError> {
    if ContactSource::parse(source).is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("source");
    err.message = Some("Source must be one of: website, landing, other".into());
    Err(err)
}

/// A validated contact submission, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub source: ContactSource,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build the record from a request that already passed `validate()`.
    pub fn from_request(request: ContactRequest) -> Self {
        let now = Utc::now();
        Self {
            source: ContactSource::parse(&request.source).unwrap_or_default(),
            name: request.name,
            email: request.email,
            message: request.message,
            created_at: now,
            updated_at: now,
        }
    }
}
