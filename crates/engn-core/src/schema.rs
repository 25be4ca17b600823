//! Demo-request schema.
//!
//! Turns an untyped JSON request body into a [`NewLead`] or a list of
//! field-level [`Issue`]s. Parsing never panics and never stops at the first
//! problem: every violated rule on every field is reported, in field order.
//!
//! Two variants exist:
//!
//! - [`SchemaVariant::Standard`]: the shared server schema. Name of at least
//!   two characters, a valid email, any non-empty model, free-form company
//!   and message.
//! - [`SchemaVariant::ContactForm`]: the richer contact-form schema. Adds a
//!   100-character name cap, a 500-character message cap, restricts the model
//!   to [`ModelInterest`], and validates an optional `contactNo`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::model::{ModelInterest, NewLead};
use crate::phone::{self, PhoneCheck};

const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 100;
const MAX_MESSAGE_CHARS: usize = 500;

/// Machine-readable category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Field missing or of the wrong JSON type.
    InvalidType,
    /// String shorter than allowed.
    TooSmall,
    /// String longer than allowed.
    TooBig,
    /// String present but malformed (email).
    InvalidString,
    /// Value outside a fixed set of options.
    InvalidEnumValue,
    /// Domain rule (phone number checks).
    Custom,
}

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    /// Field path; empty when the body as a whole is wrong.
    pub path: Vec<String>,
    pub message: String,
}

impl Issue {
    fn field(code: IssueCode, field: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            path: vec![field.to_owned()],
            message: message.into(),
        }
    }

    /// An issue about the body as a whole rather than one field.
    #[must_use]
    pub fn root(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// The first path segment, if any.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

/// A rejected submission. Always holds at least one issue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed with {} issue(s)", issues.len())]
pub struct ValidationFailure {
    pub issues: Vec<Issue>,
}

impl ValidationFailure {
    /// Wrap a single body-level issue.
    #[must_use]
    pub fn root(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::root(code, message)],
        }
    }
}

/// Which set of rules a [`LeadSchema`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaVariant {
    Standard,
    #[default]
    ContactForm,
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::ContactForm => "contact",
        })
    }
}

/// Returned by [`SchemaVariant::from_str`] for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lead schema '{0}', expected 'standard' or 'contact'")]
pub struct UnknownVariant(pub String);

impl FromStr for SchemaVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "basic" => Ok(Self::Standard),
            "contact" | "contact-form" | "strict" => Ok(Self::ContactForm),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

/// Validator for demo-request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeadSchema {
    variant: SchemaVariant,
}

impl LeadSchema {
    #[must_use]
    pub const fn new(variant: SchemaVariant) -> Self {
        Self { variant }
    }

    #[must_use]
    pub const fn standard() -> Self {
        Self::new(SchemaVariant::Standard)
    }

    #[must_use]
    pub const fn contact_form() -> Self {
        Self::new(SchemaVariant::ContactForm)
    }

    #[must_use]
    pub const fn variant(&self) -> SchemaVariant {
        self.variant
    }

    const fn is_strict(&self) -> bool {
        matches!(self.variant, SchemaVariant::ContactForm)
    }

    /// Validate a request body.
    ///
    /// Unknown fields are ignored. Optional fields that are absent, `null`,
    /// or blank normalize to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure`] listing every violated rule when the
    /// body is not an object or any field breaks a rule.
    pub fn parse(&self, body: &Value) -> Result<NewLead, ValidationFailure> {
        let Some(fields) = body.as_object() else {
            return Err(ValidationFailure::root(
                IssueCode::InvalidType,
                format!("Expected object, received {}", type_name(body)),
            ));
        };

        let mut issues = Vec::new();

        let full_name = required_string(fields, "fullName", &mut issues);
        if let Some(name) = &full_name {
            self.check_name(name, &mut issues);
        }

        let email = required_string(fields, "email", &mut issues);
        if let Some(email) = &email {
            if !email.validate_email() {
                issues.push(Issue::field(
                    IssueCode::InvalidString,
                    "email",
                    "Please enter a valid email address",
                ));
            }
        }

        let company = optional_string(fields, "company", &mut issues);

        let model_interest = required_string(fields, "modelInterest", &mut issues);
        if let Some(model) = &model_interest {
            self.check_model(model, &mut issues);
        }

        let message = optional_string(fields, "message", &mut issues);
        if let Some(message) = &message {
            if self.is_strict() && message.chars().count() > MAX_MESSAGE_CHARS {
                issues.push(Issue::field(
                    IssueCode::TooBig,
                    "message",
                    "Message cannot exceed 500 characters",
                ));
            }
        }

        let contact_no = if self.is_strict() {
            optional_string(fields, "contactNo", &mut issues)
                .and_then(|raw| check_contact_no(&raw, &mut issues))
        } else {
            None
        };

        match (full_name, email, model_interest) {
            (Some(full_name), Some(email), Some(model_interest)) if issues.is_empty() => {
                Ok(NewLead {
                    full_name,
                    email,
                    company,
                    model_interest,
                    message,
                    contact_no,
                })
            }
            _ => Err(ValidationFailure { issues }),
        }
    }

    fn check_name(&self, name: &str, issues: &mut Vec<Issue>) {
        let chars = name.chars().count();
        if chars < MIN_NAME_CHARS {
            issues.push(Issue::field(
                IssueCode::TooSmall,
                "fullName",
                "Full name must be at least 2 characters",
            ));
        } else if self.is_strict() && chars > MAX_NAME_CHARS {
            issues.push(Issue::field(
                IssueCode::TooBig,
                "fullName",
                "Full name is too long",
            ));
        }
    }

    fn check_model(&self, model: &str, issues: &mut Vec<Issue>) {
        if model.is_empty() {
            let message = if self.is_strict() {
                "Please select a model of interest"
            } else {
                "Please select a model"
            };
            issues.push(Issue::field(IssueCode::TooSmall, "modelInterest", message));
        } else if self.is_strict() && model.parse::<ModelInterest>().is_err() {
            let options = ModelInterest::ALL
                .iter()
                .map(|m| format!("'{m}'"))
                .collect::<Vec<_>>()
                .join(" | ");
            issues.push(Issue::field(
                IssueCode::InvalidEnumValue,
                "modelInterest",
                format!("Invalid model of interest. Expected {options}, received '{model}'"),
            ));
        }
    }
}

/// Run the phone rules, returning the E.164 form on success.
fn check_contact_no(raw: &str, issues: &mut Vec<Issue>) -> Option<String> {
    match phone::check(raw) {
        PhoneCheck::Valid(e164) => Some(e164),
        PhoneCheck::Invalid(messages) => {
            issues.extend(
                messages
                    .into_iter()
                    .map(|m| Issue::field(IssueCode::Custom, "contactNo", m)),
            );
            None
        }
    }
}

fn required_string(
    fields: &Map<String, Value>,
    name: &str,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    match fields.get(name) {
        None => {
            issues.push(Issue::field(IssueCode::InvalidType, name, "Required"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(expected_string(name, other));
            None
        }
    }
}

/// Absent, `null`, and blank strings all become `None`.
fn optional_string(
    fields: &Map<String, Value>,
    name: &str,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    match fields.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(expected_string(name, other));
            None
        }
    }
}

fn expected_string(name: &str, got: &Value) -> Issue {
    Issue::field(
        IssueCode::InvalidType,
        name,
        format!("Expected string, received {}", type_name(got)),
    )
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
