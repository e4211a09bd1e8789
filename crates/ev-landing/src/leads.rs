//! Lead-capture validation and the contract with the spreadsheet endpoint
//! that stores submissions.

use crate::catalog::Catalog;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MIN_PHONE_DIGITS: usize = 9;
const MAX_PHONE_DIGITS: usize = 15;
const MAX_FIELD_LEN: usize = 120;

/// Form payload as posted by the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub program: String,
    pub model: String,
}

/// A validated lead ready to be forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub program: String,
    pub model: String,
    #[serde(skip)]
    pub submitted_at: DateTime<Utc>,
}

impl LeadRecord {
    /// Body in the shape the spreadsheet endpoint expects.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "phone": self.phone,
            "location": self.location,
            "program": self.program,
            "model": self.model,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("phone number '{0}' is not a valid Indonesian mobile number")]
    InvalidPhone(String),
    #[error("model '{0}' is not in the catalog")]
    UnknownModel(String),
}

impl LeadSubmission {
    pub fn validate(self, catalog: &Catalog) -> Result<LeadRecord, LeadError> {
        self.validate_at(catalog, Utc::now())
    }

    pub fn validate_at(
        self,
        catalog: &Catalog,
        submitted_at: DateTime<Utc>,
    ) -> Result<LeadRecord, LeadError> {
        let name = required("name", &self.name)?;
        let location = required("location", &self.location)?;
        let program = required("program", &self.program)?;
        let model = required("model", &self.model)?;
        let phone = normalize_phone(&self.phone)?;

        if catalog.model(&model).is_none() {
            return Err(LeadError::UnknownModel(model));
        }

        Ok(LeadRecord {
            name,
            phone,
            location,
            program,
            model,
            submitted_at,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, LeadError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LeadError::MissingField(field));
    }
    if trimmed.chars().count() > MAX_FIELD_LEN {
        return Err(LeadError::FieldTooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(trimmed.to_string())
}

/// Accepts `08…`, `628…` and `+628…` forms and returns `08…`.
pub fn normalize_phone(raw: &str) -> Result<String, LeadError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LeadError::MissingField("phone"));
    }

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')');
    if !trimmed.chars().all(allowed) || trimmed.chars().skip(1).any(|c| c == '+') {
        return Err(LeadError::InvalidPhone(raw.to_string()));
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let local = if let Some(rest) = digits.strip_prefix("62") {
        format!("0{rest}")
    } else {
        digits
    };

    let valid_length = (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&local.len());
    if !local.starts_with("08") || !valid_length {
        return Err(LeadError::InvalidPhone(raw.to_string()));
    }

    Ok(local)
}

/// Reply body of the spreadsheet endpoint: `{success: true}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadGatewayResponse {
    Accepted { success: bool },
    Rejected { error: String },
}

impl LeadGatewayResponse {
    pub fn into_result(self) -> Result<(), LeadGatewayError> {
        match self {
            LeadGatewayResponse::Accepted { success: true } => Ok(()),
            LeadGatewayResponse::Accepted { success: false } => Err(LeadGatewayError::Rejected(
                "endpoint reported success=false".to_string(),
            )),
            LeadGatewayResponse::Rejected { error } => Err(LeadGatewayError::Rejected(error)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadGatewayError {
    #[error("lead endpoint rejected the submission: {0}")]
    Rejected(String),
    #[error("lead endpoint unreachable: {0}")]
    Transport(String),
    #[error("lead endpoint returned an unreadable reply: {0}")]
    Protocol(String),
}

/// Outbound hook that stores a validated lead.
#[async_trait]
pub trait LeadGateway: Send + Sync {
    async fn forward(&self, lead: &LeadRecord) -> Result<(), LeadGatewayError>;
}
