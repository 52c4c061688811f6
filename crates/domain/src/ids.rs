use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum length accepted for a character identifier.
const MAX_ID_LENGTH: usize = 128;

/// Identifier of a player character record.
///
/// Character ids are opaque strings chosen by whoever created the record
/// (seed files use readable slugs such as `briv`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterId(String);

impl CharacterId {
    /// Create a validated character id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the id is empty after trimming or
    /// longer than 128 characters.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("Character id cannot be empty"));
        }
        if trimmed.len() > MAX_ID_LENGTH {
            return Err(DomainError::invalid_id(format!(
                "Character id cannot exceed {} characters",
                MAX_ID_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CharacterId> for String {
    fn from(value: CharacterId) -> Self {
        value.0
    }
}
