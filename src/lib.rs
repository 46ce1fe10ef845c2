// Care Ledger - Core Library
// Hospital administrative records: people, calendar dates, itemized billing

pub mod billing;
pub mod date;
pub mod entities;
pub mod error;

// Re-export commonly used types
pub use billing::{Bill, CategoryRegistry, ChargeItem};
pub use date::Date;
pub use entities::{Doctor, DoctorRef, Patient, PatientRef, Person};
pub use error::{ErrorKind, RecordError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use std::sync::Arc;

    fn days_ago(days: i64) -> Date {
        Date::from(Local::now().date_naive() - Duration::days(days))
    }

    // End-to-end walkthrough of two admissions and an eight-day stay.
    // Admissions are pinned to eight days before today so the
    // discharge-to-today step is deterministic without a frozen clock.
    #[test]
    fn test_admission_to_discharge_scenario() {
        let registry = CategoryRegistry::with_defaults();

        let doctor_lee = Doctor::new("Xiao", "Lee", "Medicine").unwrap().into_ref();
        let doctor_edison = Doctor::new("Thomas", "Edison", "Surgery")
            .unwrap()
            .into_ref();

        // Two patients admitted the same day
        let chis = Patient::new(
            "Chis",
            "A",
            18,
            Date::new(2011, 3, 13).unwrap(),
            Arc::clone(&doctor_lee),
            days_ago(8),
        )
        .unwrap()
        .into_ref();

        let sasara = Patient::new(
            "Sasara",
            "Satou",
            21,
            Date::new(2010, 4, 1).unwrap(),
            Arc::clone(&doctor_edison),
            days_ago(8),
        )
        .unwrap()
        .into_ref();

        // A name correction and a birthday passing mid-stay
        sasara.write().unwrap().set_last_name("Sato").unwrap();
        assert_eq!(sasara.read().unwrap().last_name(), "Sato");
        let age = sasara.read().unwrap().age();
        sasara.write().unwrap().set_age(age + 1);
        assert_eq!(sasara.read().unwrap().age(), 22);

        // A transfer of care
        chis.write()
            .unwrap()
            .set_attending_doctor(Arc::clone(&doctor_edison));

        let mut first_bill = Bill::new(Arc::clone(&chis), registry.clone());
        first_bill.add_charge(20, "doctor", None).unwrap();
        first_bill.add_charge(42, "medicine", None).unwrap();
        first_bill.add_charge(20, "doctor", None).unwrap();
        first_bill
            .add_charge(20, "doctor", Some("rehabilitation treatment"))
            .unwrap();

        let mut second_bill = Bill::new(Arc::clone(&sasara), registry.clone());
        second_bill.add_charge(20, "doctor", None).unwrap();
        second_bill
            .add_charge(20, "doctor", Some("wound disinfection"))
            .unwrap();
        second_bill.add_charge(42, "medicine", None).unwrap();
        second_bill.add_charge(20, "doctor", None).unwrap();

        // Wrong medicine on the second bill: cancel it, prescribe again
        let removed = second_bill.remove_charge(2).unwrap();
        assert_eq!(removed.cost(), 42);
        assert_eq!(second_bill.len(), 3);

        second_bill.add_charge(32, "medicine", None).unwrap();
        assert_eq!(second_bill.len(), 4);
        assert_eq!(second_bill[3].cost(), 32);

        // Re-categorize described items under a category added on the fly
        registry.add_category("treatment").unwrap();
        for bill in [&mut first_bill, &mut second_bill] {
            for i in 0..bill.len() {
                if bill[i].description().is_some() {
                    let item = bill.get_mut(i).unwrap();
                    item.set_category("treatment", &registry).unwrap();
                }
            }
        }
        assert_eq!(first_bill[3].category(), "treatment");
        assert_eq!(second_bill[1].category(), "treatment");

        // Discharge the first patient today, eight days after admission,
        // and add the room rental fees for the stay
        chis.write().unwrap().update_discharge_date_to_today();
        let stay_days = chis.read().unwrap().duration().num_days();
        assert_eq!(stay_days, 8);

        for _ in 0..stay_days {
            first_bill.add_charge(22, "room", None).unwrap();
        }

        // 20 + 42 + 20 + 20 + 8 * 22
        assert_eq!(first_bill.total_fee(), 278);

        // The bill renders the discharged patient and the new doctor
        let text = first_bill.to_string();
        assert!(text.contains("Edison"));
        assert!(text.contains("Duration: 8 days"));
        assert!(text.ends_with("Total: 278"));
    }
}
