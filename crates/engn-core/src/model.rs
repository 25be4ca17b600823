//! Lead and user records.
//!
//! Field names serialize in camelCase so the JSON matches what the
//! front-end form posts and what `GET /api/leads` returns.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated demo request, ready to be stored.
///
/// Produced only by [`LeadSchema::parse`](crate::schema::LeadSchema::parse);
/// carries exactly the recognized fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub full_name: String,
    pub email: String,
    pub company: Option<String>,
    pub model_interest: String,
    pub message: Option<String>,
    /// E.164 contact number, contact-form schema only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
}

/// A stored demo request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Store-assigned identifier, strictly increasing from 1.
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub company: Option<String>,
    pub model_interest: String,
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    /// Server receipt time. Never taken from the client.
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Attach an id and receipt time to a validated submission.
    #[must_use]
    pub fn from_new(id: u64, new: NewLead, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: new.full_name,
            email: new.email,
            company: new.company,
            model_interest: new.model_interest,
            message: new.message,
            contact_no: new.contact_no,
            created_at,
        }
    }
}

/// Product tiers offered in the contact form's model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelInterest {
    Base,
    Smart,
    Ultra,
    Custom,
}

impl ModelInterest {
    /// Every tier, in the order the form lists them.
    pub const ALL: [Self; 4] = [Self::Base, Self::Smart, Self::Ultra, Self::Custom];

    /// Wire value posted by the form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Smart => "smart",
            Self::Ultra => "ultra",
            Self::Custom => "custom",
        }
    }

    /// Label shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "Base Model",
            Self::Smart => "Smart Model",
            Self::Ultra => "Ultra Model",
            Self::Custom => "Custom Solution",
        }
    }
}

impl fmt::Display for ModelInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`ModelInterest`] wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model '{0}'")]
pub struct UnknownModel(pub String);

impl FromStr for ModelInterest {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownModel(s.to_owned()))
    }
}

/// Input for [`UserStore::create_user`](crate::user::UserStore::create_user).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A stored user account. The password is kept only as a salted digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Hex-encoded random salt.
    pub salt: String,
    /// Hex-encoded `SHA-256(salt || password)`.
    pub password_hash: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn model_interest_round_trips_through_str() {
        for model in ModelInterest::ALL {
            assert_eq!(model.as_str().parse::<ModelInterest>().unwrap(), model);
        }
        assert!("premium".parse::<ModelInterest>().is_err());
    }

    #[test]
    fn lead_serializes_camel_case_and_skips_missing_contact() {
        let lead = Lead::from_new(
            7,
            NewLead {
                full_name: "Asha Rao".to_owned(),
                email: "asha@example.com".to_owned(),
                company: None,
                model_interest: "smart".to_owned(),
                message: Some("hello".to_owned()),
                contact_no: None,
            },
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        );

        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["fullName"], "Asha Rao");
        assert_eq!(json["modelInterest"], "smart");
        assert!(json["company"].is_null());
        assert!(json.get("contactNo").is_none());
        assert!(json["createdAt"].as_str().unwrap().starts_with("2023-11-14T"));
    }
}
