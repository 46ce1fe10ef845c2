use anyhow::Result;
use std::sync::Arc;

// Use library instead of local modules
use care_ledger::{Bill, CategoryRegistry, Date, Doctor, Patient};

fn main() -> Result<()> {
    println!("🏥 Care Ledger - admission to discharge walkthrough");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Staff on duty
    let doctor_lee = Doctor::new("Xiao", "Lee", "Medicine")?.into_ref();
    let doctor_edison = Doctor::new("Thomas", "Edison", "Surgery")?.into_ref();
    println!("\n🩺 Doctors registered:");
    println!("{}", *doctor_lee.read().unwrap());
    println!("{}", *doctor_edison.read().unwrap());

    // 2. Admission
    let patient = Patient::new(
        "Chis",
        "A",
        18,
        Date::new(2011, 3, 13)?,
        Arc::clone(&doctor_lee),
        Date::today(),
    )?
    .into_ref();
    println!("\n📋 Patient admitted:");
    println!("{}", *patient.read().unwrap());

    // 3. Open a bill and charge the stay
    let registry = CategoryRegistry::with_defaults();
    println!("\n💳 Charge categories: {registry}");

    let mut bill = Bill::new(Arc::clone(&patient), registry.clone());
    bill.add_charge(20, "doctor", None)?;
    bill.add_charge(42, "medicine", None)?;
    bill.add_charge(20, "doctor", Some("rehabilitation treatment"))?;
    println!("✓ Added {} charges", bill.len());

    // 4. A charge entered by mistake
    let removed = bill.remove_charge(1)?;
    println!("✓ Cancelled wrong charge: {removed}");
    bill.add_charge(32, "medicine", None)?;

    // 5. New category arrives mid-stay
    registry.add_category("treatment")?;
    println!("✓ Category list is now: {registry}");

    // 6. Discharge and final bill
    patient.write().unwrap().update_discharge_date_to_today();
    let stay_days = patient.read().unwrap().duration().num_days();
    for _ in 0..stay_days {
        bill.add_charge(22, "room", None)?;
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    bill.show();

    // 7. Charge lines as JSON, for downstream tooling
    println!("\n📦 Charge export:");
    println!("{}", serde_json::to_string_pretty(bill.charges())?);

    Ok(())
}
