use serde::{Deserialize, Serialize};
use std::fmt;

/// Username value object
///
/// # Invariants
/// - Surrounding whitespace is removed
/// - Between 1 and 32 characters after trimming
/// - Compared case-insensitively when checking for duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub const MAX_LEN: usize = 32;

    /// Creates a new Username value object
    ///
    /// # Returns
    /// * `Ok(Username)` - If the username is valid
    /// * `Err(String)` - If it is blank or too long
    ///
    /// # Example
    /// ```
    /// use dreamteam_api::domain::user::value_objects::Username;
    ///
    /// let username = Username::new(" magic32 ").expect("valid username");
    /// assert_eq!(username.as_str(), "magic32");
    /// ```
    pub fn new(username: impl AsRef<str>) -> Result<Self, String> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(format!(
                "Username must be at most {} characters",
                Self::MAX_LEN
            ));
        }
        Ok(Username(trimmed.to_string()))
    }

    /// Returns the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for uniqueness and login lookup
    pub fn matches(&self, other: &Username) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl TryFrom<String> for Username {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
