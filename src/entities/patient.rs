// Patient record - person fields plus admission state and billing identity
// The patient id comes from a process-wide monotonic counter: ids are unique,
// never reused and never decremented for the lifetime of the process.

use chrono::Duration;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::date::Date;
use crate::entities::doctor::DoctorRef;
use crate::entities::person::Person;
use crate::error::{RecordError, Result};

/// Shared, non-owning handle to a patient. A bill keeps one of these so a
/// discharge recorded after the bill was opened still shows up in it.
pub type PatientRef = Arc<RwLock<Patient>>;

// ============================================================================
// ID ALLOCATION
// ============================================================================

static NEXT_PATIENT_ID: AtomicU64 = AtomicU64::new(0);

/// Allocate the next patient id. Starts at 1; atomic so concurrent admissions
/// can never hand out the same id twice.
fn next_patient_id() -> u64 {
    NEXT_PATIENT_ID.fetch_add(1, Ordering::Relaxed) + 1
}

// ============================================================================
// PATIENT
// ============================================================================

/// Patient record
///
/// Immutable after construction: id, birthday, admission date.
/// Mutable with validation: names, discharge date.
/// Mutable without validation: age, attending doctor (type-enforced).
#[derive(Debug, Clone)]
pub struct Patient {
    id: u64,
    person: Person,
    age: i32,
    birthday: Date,
    attending_doctor: DoctorRef,
    admission_date: Date,
    discharge_date: Option<Date>,
}

impl Patient {
    pub fn new(
        first_name: &str,
        last_name: &str,
        age: i32,
        birthday: Date,
        attending_doctor: DoctorRef,
        admission_date: Date,
    ) -> Result<Self> {
        Ok(Patient {
            id: next_patient_id(),
            person: Person::new(first_name, last_name)?,
            age,
            birthday,
            attending_doctor,
            admission_date,
            discharge_date: None,
        })
    }

    /// Wrap in a shared handle for attachment to bills
    pub fn into_ref(self) -> PatientRef {
        Arc::new(RwLock::new(self))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        self.person.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.person.last_name()
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn birthday(&self) -> Date {
        self.birthday
    }

    pub fn attending_doctor(&self) -> DoctorRef {
        Arc::clone(&self.attending_doctor)
    }

    pub fn admission_date(&self) -> Date {
        self.admission_date
    }

    pub fn discharge_date(&self) -> Option<Date> {
        self.discharge_date
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.person.set_last_name(value)
    }

    /// No range check: any integer age is accepted
    pub fn set_age(&mut self, value: i32) {
        self.age = value;
    }

    pub fn set_attending_doctor(&mut self, doctor: DoctorRef) {
        self.attending_doctor = doctor;
    }

    /// Record a discharge date; it must fall strictly after the admission
    /// date (a zero or negative day difference is rejected)
    pub fn set_discharge_date(&mut self, value: Date) -> Result<()> {
        if (value - self.admission_date).num_days() <= 0 {
            return Err(RecordError::DischargeNotAfterAdmission);
        }
        self.discharge_date = Some(value);
        Ok(())
    }

    /// Set the discharge date to today's date, skipping the
    /// strictly-after-admission check. A same-day admission can be
    /// discharged this way even though the setter would reject it.
    pub fn update_discharge_date_to_today(&mut self) {
        self.discharge_date = Some(Date::today());
    }

    /// Length of stay: discharge minus admission, or today minus admission
    /// while the patient is still in
    pub fn duration(&self) -> Duration {
        let until = self.discharge_date.unwrap_or_else(Date::today);
        until - self.admission_date
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let discharged = self
            .discharge_date
            .map(|d| d.format("%d/%m/%Y"))
            .unwrap_or_default();
        let doctor = self.attending_doctor.read().unwrap();

        write!(
            f,
            "\t- Patient -\n\
             ID: {}\n\
             {}\n\
             Age: {}\n\
             Birthday: {}\n\
             Admitted date: {}\n\
             Discharged date: {}\n\
             Duration: {} days\n\
             \n\
             Attending physician:\n\
             {}",
            self.id,
            self.person,
            self.age,
            self.birthday.format("%d/%m/%Y"),
            self.admission_date.format("%d/%m/%Y"),
            discharged,
            self.duration().num_days(),
            *doctor,
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
