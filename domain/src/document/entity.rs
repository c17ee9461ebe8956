//! Named entity value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label assigned to an entity by the recognizer (Value Object)
///
/// Serialized with the short uppercase names statistical recognizers use
/// (`ORG`, `PERSON`, `DATE`); anything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Organization,
    Person,
    Date,
    Other(String),
}

impl EntityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Organization => "ORG",
            EntityLabel::Person => "PERSON",
            EntityLabel::Date => "DATE",
            EntityLabel::Other(s) => s,
        }
    }

    pub fn is_organization(&self) -> bool {
        matches!(self, EntityLabel::Organization)
    }

    pub fn is_person(&self) -> bool {
        matches!(self, EntityLabel::Person)
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidLabel(s.to_string()));
        }
        Ok(match trimmed.to_ascii_uppercase().as_str() {
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            "PERSON" | "PER" => EntityLabel::Person,
            "DATE" => EntityLabel::Date,
            _ => EntityLabel::Other(trimmed.to_string()),
        })
    }
}

impl Serialize for EntityLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntityLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A labeled span of the source document (Value Object)
///
/// `start..end` is a half-open byte range into the text the recognizer saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two entities share at least one byte of the source
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && other.start < self.end
    }
}
