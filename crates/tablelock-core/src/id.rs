//! Identifier newtypes for lockable tables and lock holders.
//!
//! Both are non-empty strings. Keeping them distinct stops a holder id from
//! being passed where a table id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Identity of a lockable resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(String);

/// Identity of the party holding (or requesting) a lock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolderId(String);

impl TableId {
    /// Builds a table id, rejecting empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        non_blank(raw.into())
            .map(TableId)
            .ok_or(ValidationError::InvalidTableId)
    }

    /// Reads a table id out of an optional JSON field.
    pub fn from_json(value: Option<&Value>) -> Result<Self, ValidationError> {
        match value {
            Some(Value::String(s)) => Self::new(s.as_str()),
            _ => Err(ValidationError::InvalidTableId),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl HolderId {
    /// Builds a holder id, rejecting empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        non_blank(raw.into())
            .map(HolderId)
            .ok_or(ValidationError::InvalidHolderId)
    }

    /// Reads a holder id out of an optional JSON field.
    pub fn from_json(value: Option<&Value>) -> Result<Self, ValidationError> {
        match value {
            Some(Value::String(s)) => Self::new(s.as_str()),
            _ => Err(ValidationError::InvalidHolderId),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_blank(raw: String) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_id_rejects_blank() {
        assert_eq!(TableId::new(""), Err(ValidationError::InvalidTableId));
        assert_eq!(TableId::new("   "), Err(ValidationError::InvalidTableId));
        assert_eq!(TableId::new("T1").unwrap().as_str(), "T1");
    }

    #[test]
    fn holder_id_rejects_blank() {
        assert_eq!(HolderId::new("\t"), Err(ValidationError::InvalidHolderId));
        assert_eq!(format!("{}", HolderId::new("alice").unwrap()), "alice");
    }

    #[test]
    fn from_json_requires_string() {
        assert_eq!(
            TableId::from_json(Some(&json!(42))),
            Err(ValidationError::InvalidTableId)
        );
        assert_eq!(TableId::from_json(None), Err(ValidationError::InvalidTableId));
        assert_eq!(
            HolderId::from_json(Some(&json!(null))),
            Err(ValidationError::InvalidHolderId)
        );
        assert_eq!(
            HolderId::from_json(Some(&json!("bob"))).unwrap().as_str(),
            "bob"
        );
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = TableId::new("T1").unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("T1"));
    }
}
