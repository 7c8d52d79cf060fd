use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::AppError;

const MIN_LENGTH: usize = 1;
const MAX_LENGTH: usize = 200;
const NAME_PATTERN: &str = r"^[a-zA-Z0-9\s\-_.áéíóúÁÉÍÓÚñÑ]+$";

/// Validated display name shared by franchises, branches and products.
///
/// The stored value is trimmed. Two names are considered equal for
/// uniqueness purposes when they match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName {
    value: String,
}

impl EntityName {
    pub fn new(value: &str) -> Result<Self, AppError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "Name cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() < MIN_LENGTH || trimmed.chars().count() > MAX_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Name must be between {} and {} characters",
                MIN_LENGTH, MAX_LENGTH
            )));
        }

        let re = Regex::new(NAME_PATTERN).expect("name pattern is valid");
        if !re.is_match(trimmed) {
            return Err(AppError::ValidationError(
                "Name can only contain letters, numbers, spaces, hyphens, underscores and dots"
                    .to_string(),
            ));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Case-insensitive comparison used by the duplicate-name invariants.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.value.to_lowercase() == other.trim().to_lowercase()
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EntityName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EntityName::new(&value)
    }
}

impl From<EntityName> for String {
    fn from(name: EntityName) -> Self {
        name.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = EntityName::new("Acme Store-1_v2.0").unwrap();
        assert_eq!(name.as_str(), "Acme Store-1_v2.0");
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = EntityName::new("  North  ").unwrap();
        assert_eq!(name.as_str(), "North");
    }

    #[test]
    fn test_accented_letters_are_allowed() {
        assert!(EntityName::new("Sucursal Peñón").is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(matches!(
            EntityName::new("   "),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_name_over_200_chars_is_rejected() {
        let long = "a".repeat(201);
        let err = EntityName::new(&long).unwrap_err();
        assert!(err.to_string().contains("between 1 and 200"));
    }

    #[test]
    fn test_name_of_exactly_200_chars_is_accepted() {
        let max = "a".repeat(200);
        assert!(EntityName::new(&max).is_ok());
    }

    #[test]
    fn test_invalid_characters_are_rejected() {
        for bad in ["semi;colon", "at@sign", "slash/name", "emoji🙂"] {
            assert!(EntityName::new(bad).is_err(), "expected rejection: {}", bad);
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        let name = EntityName::new("North").unwrap();
        assert!(name.matches_ignore_case("north"));
        assert!(name.matches_ignore_case("  NORTH "));
        assert!(!name.matches_ignore_case("south"));
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let name = EntityName::new("Acme").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Acme\"");
        let back: EntityName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);

        let bad: Result<EntityName, _> = serde_json::from_str("\"no;good\"");
        assert!(bad.is_err());
    }
}
