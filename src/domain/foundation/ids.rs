//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Longest catalog identifier accepted (activity and segment ids).
const MAX_CATALOG_ID_LEN: usize = 64;

/// Catalog ids are stable keys shared with external stores, so they are
/// restricted to a URL- and file-name-safe alphabet.
fn validate_catalog_id(field: &str, id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if id.len() > MAX_CATALOG_ID_LEN {
        return Err(ValidationError::out_of_range(
            field,
            1,
            MAX_CATALOG_ID_LEN as i64,
            id.len() as i64,
        ));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::invalid_format(
            field,
            "only ASCII letters, digits, '-' and '_' are allowed",
        ));
    }
    Ok(())
}

/// Identifier of a single activity (a training day) in a program catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivityId(String);

impl ActivityId {
    /// Creates an ActivityId, validating the catalog id alphabet.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_catalog_id("activity_id", &id)?;
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ActivityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ActivityId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityId> for String {
    fn from(id: ActivityId) -> Self {
        id.0
    }
}

/// Identifier of a segment (a training week) in a program catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SegmentId(String);

impl SegmentId {
    /// Creates a SegmentId, validating the catalog id alphabet.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_catalog_id("segment_id", &id)?;
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SegmentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SegmentId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SegmentId> for String {
    fn from(id: SegmentId) -> Self {
        id.0
    }
}

/// User identifier issued by the external authentication backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user-authored routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineId(Uuid);

impl RoutineId {
    /// Creates a new random RoutineId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a RoutineId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoutineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoutineId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a new random NotificationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_id_accepts_catalog_style_ids() {
        let id = ActivityId::new("w1d1").unwrap();
        assert_eq!(id.as_str(), "w1d1");
        assert!(ActivityId::new("week-1_day-3").is_ok());
    }

    #[test]
    fn activity_id_rejects_empty_string() {
        match ActivityId::new("") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "activity_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn activity_id_rejects_whitespace_and_path_characters() {
        assert!(ActivityId::new("w1 d1").is_err());
        assert!(ActivityId::new("../w1d1").is_err());
    }

    #[test]
    fn segment_id_rejects_overlong_ids() {
        let long = "w".repeat(MAX_CATALOG_ID_LEN + 1);
        assert!(matches!(
            SegmentId::new(long),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn segment_id_deserialization_is_validated() {
        let ok: Result<SegmentId, _> = serde_json::from_str("\"week1\"");
        assert_eq!(ok.unwrap().as_str(), "week1");

        let bad: Result<SegmentId, _> = serde_json::from_str("\"week 1\"");
        assert!(bad.is_err());
    }

    #[test]
    fn activity_id_serializes_as_plain_string() {
        let id = ActivityId::new("w2d5").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"w2d5\"");
    }

    #[test]
    fn user_id_rejects_blank_string() {
        assert!(UserId::new("   ").is_err());
        assert_eq!(UserId::new("user-123").unwrap().as_str(), "user-123");
    }

    #[test]
    fn routine_id_parses_from_string() {
        let id = RoutineId::new();
        let parsed: RoutineId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn routine_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<RoutineId>().is_err());
    }
}
