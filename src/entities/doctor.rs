// Doctor record - a person plus a validated specialty
// Patients hold a shared handle to their attending doctor, so the handle
// type lives here next to the record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::entities::person::{validate_alphabetic, Person};
use crate::error::Result;

/// Shared, non-owning handle to a doctor. Several patients can reference the
/// same doctor; edits through one handle are visible through all of them.
pub type DoctorRef = Arc<RwLock<Doctor>>;

// ============================================================================
// DOCTOR
// ============================================================================

/// Doctor record: name fields plus specialty, all under the same
/// alphabetic-only rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    person: Person,
    specialty: String,
}

impl Doctor {
    pub fn new(first_name: &str, last_name: &str, specialty: &str) -> Result<Self> {
        validate_alphabetic("specialty", specialty)?;

        Ok(Doctor {
            person: Person::new(first_name, last_name)?,
            specialty: specialty.to_string(),
        })
    }

    /// Wrap in a shared handle for assignment to patients
    pub fn into_ref(self) -> DoctorRef {
        Arc::new(RwLock::new(self))
    }

    pub fn first_name(&self) -> &str {
        self.person.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.person.last_name()
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.person.set_last_name(value)
    }

    pub fn set_specialty(&mut self, value: &str) -> Result<()> {
        validate_alphabetic("specialty", value)?;
        self.specialty = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t- Doctor -\n{}\nSpecialty: {}",
            self.person, self.specialty
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;

    #[test]
    fn test_doctor_creation() {
        let doctor = Doctor::new("Thomas", "Edison", "Surgery").unwrap();
        assert_eq!(doctor.first_name(), "Thomas");
        assert_eq!(doctor.last_name(), "Edison");
        assert_eq!(doctor.specialty(), "Surgery");
    }

    #[test]
    fn test_doctor_rejects_non_alphabetic_specialty() {
        assert_eq!(
            Doctor::new("F", "L", "1"),
            Err(RecordError::NotAlphabetic { field: "specialty" })
        );
        assert!(Doctor::new("F", "L", "").is_err());
    }

    #[test]
    fn test_doctor_set_specialty() {
        let mut doctor = Doctor::new("F", "L", "S").unwrap();
        doctor.set_specialty("Cardiology").unwrap();
        assert_eq!(doctor.specialty(), "Cardiology");

        assert!(doctor.set_specialty("s1").is_err());
        assert_eq!(doctor.specialty(), "Cardiology");
    }

    #[test]
    fn test_doctor_name_setters_delegate_validation() {
        let mut doctor = Doctor::new("F", "L", "S").unwrap();
        doctor.set_first_name("ff").unwrap();
        assert_eq!(doctor.first_name(), "ff");
        assert!(doctor.set_last_name("2").is_err());
    }

    #[test]
    fn test_shared_handle_sees_edits() {
        let doctor = Doctor::new("F", "L", "S").unwrap().into_ref();
        let other = Arc::clone(&doctor);

        doctor.write().unwrap().set_specialty("Oncology").unwrap();
        assert_eq!(other.read().unwrap().specialty(), "Oncology");
    }

    #[test]
    fn test_doctor_display() {
        let doctor = Doctor::new("F", "L", "S").unwrap();
        assert_eq!(
            doctor.to_string(),
            "\t- Doctor -\nFirst Name: F\nLast Name: L\nSpecialty: S"
        );
    }
}
