// Record types for people in the hospital
//
// Person carries the validated name fields; Doctor and Patient compose it
// rather than inheriting from it, and each adds its own guarded fields.

pub mod doctor;
pub mod patient;
pub mod person;

pub use doctor::{Doctor, DoctorRef};
pub use patient::{Patient, PatientRef};
pub use person::Person;
