use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a dream team
///
/// Serialized as the hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(Uuid);

impl TeamId {
    /// Generates a fresh random team id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TeamId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team name value object
///
/// # Invariants
/// - Leading and trailing whitespace is removed
/// - Never empty after trimming
///
/// Deserialization goes through the same check, so a stored document with a
/// blank name is rejected instead of producing an invalid team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new TeamName
    ///
    /// # Returns
    /// * `Ok(TeamName)` - Trimmed, non-empty name
    /// * `Err(String)` - If the name is blank
    ///
    /// # Example
    /// ```
    /// use dreamteam_api::domain::team::value_objects::TeamName;
    ///
    /// let name = TeamName::new("  Showtime  ").expect("valid name");
    /// assert_eq!(name.as_str(), "Showtime");
    /// assert!(TeamName::new("   ").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, String> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
