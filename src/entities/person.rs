// Person record - the name fields shared by doctors and patients
// Doctor and Patient compose this struct instead of inheriting from it;
// both delegate their name accessors and setters here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RecordError, Result};

// ============================================================================
// NAME VALIDATION
// ============================================================================

/// Shared rule for first/last names and specialties: non-empty and purely
/// alphabetic. An empty string fails the check, matching `str.isalpha`.
pub(crate) fn validate_alphabetic(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(char::is_alphabetic) {
        return Err(RecordError::NotAlphabetic { field });
    }
    Ok(())
}

// ============================================================================
// PERSON
// ============================================================================

/// Validated first/last name pair
///
/// Setters validate before assignment: a failed set leaves the old value
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Result<Self> {
        validate_alphabetic("first_name", first_name)?;
        validate_alphabetic("last_name", last_name)?;

        Ok(Person {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        validate_alphabetic("first_name", value)?;
        self.first_name = value.to_string();
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        validate_alphabetic("last_name", value)?;
        self.last_name = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "First Name: {}\nLast Name: {}",
            self.first_name, self.last_name
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
