//! Company record and validated name
//!
//! The on-disk shape is open: fields this crate does not know about are kept
//! in `extra` and written back untouched.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// A persisted company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique identifier, assigned once at creation
    pub id: String,

    /// Display name
    pub name: String,

    /// ISO-8601 creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// ISO-8601 time of the last update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Fields written by other producers
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    /// Build a new record with a fresh id and both timestamps set to now
    pub fn new(name: CompanyName) -> Self {
        let now = timestamp_now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into_inner(),
            created_at: Some(now.clone()),
            updated_at: Some(now),
            extra: Map::new(),
        }
    }

    /// Replace the name and refresh `updated_at`
    pub fn rename(&mut self, name: CompanyName) {
        self.name = name.into_inner();
        self.updated_at = Some(timestamp_now());
    }
}

/// Current UTC time as `2026-01-02T03:04:05.678Z`
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Name validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name is required")]
    Missing,
}

/// A company name that is known to be present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    /// Validate a raw name
    pub fn parse(raw: impl Into<String>) -> Result<Self, NameError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(NameError::Missing);
        }
        Ok(Self(raw))
    }

    /// Validate an optional name, as it arrives from a request body
    pub fn from_optional(raw: Option<&str>) -> Result<Self, NameError> {
        match raw {
            Some(name) => Self::parse(name),
            None => Err(NameError::Missing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_company_has_id_and_matching_timestamps() {
        let company = Company::new(CompanyName::parse("Acme").unwrap());

        assert!(Uuid::parse_str(&company.id).is_ok());
        assert_eq!(company.name, "Acme");
        assert!(company.created_at.is_some());
        assert_eq!(company.created_at, company.updated_at);
    }

    #[test]
    fn test_rename_keeps_id_and_created_at() {
        let mut company = Company::new(CompanyName::parse("Acme").unwrap());
        let id = company.id.clone();
        let created = company.created_at.clone();

        company.rename(CompanyName::parse("Acme Corp").unwrap());

        assert_eq!(company.id, id);
        assert_eq!(company.created_at, created);
        assert_eq!(company.name, "Acme Corp");
    }

    #[test]
    fn test_serializes_camel_case() {
        let company = Company::new(CompanyName::parse("Acme").unwrap());
        let value = serde_json::to_value(&company).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_extra_fields_survive_round_trip() {
        let raw = json!({
            "id": "c-1",
            "name": "Acme",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "industry": "anvils",
            "tags": ["roadrunner"]
        });

        let company: Company = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(company.extra["industry"], "anvils");

        let back = serde_json::to_value(&company).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_timestamps_are_optional_on_read() {
        let company: Company = serde_json::from_value(json!({"id": "x", "name": "y"})).unwrap();
        assert!(company.created_at.is_none());

        let back = serde_json::to_value(&company).unwrap();
        assert_eq!(back, json!({"id": "x", "name": "y"}));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        // 2026-01-02T03:04:05.678Z
        assert_eq!(ts.len(), 24);
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(CompanyName::parse(""), Err(NameError::Missing));
        assert_eq!(CompanyName::from_optional(None), Err(NameError::Missing));
        assert_eq!(CompanyName::parse("Acme").unwrap().as_str(), "Acme");
        assert_eq!(NameError::Missing.to_string(), "Name is required");
    }
}
