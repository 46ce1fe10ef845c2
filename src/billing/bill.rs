// Bill - the ordered charge history for one patient
// Owns its charge items; holds a shared handle to the patient so the bill
// renders whatever the patient record says at print time.

use std::fmt;
use std::ops::Index;
use std::slice::SliceIndex;
use std::sync::Arc;

use crate::billing::category::CategoryRegistry;
use crate::billing::charge::ChargeItem;
use crate::entities::patient::PatientRef;
use crate::error::{RecordError, Result};

// ============================================================================
// BILL
// ============================================================================

/// Ordered collection of charge items tied to exactly one patient
///
/// The patient association is fixed at construction. Charges validate
/// against the bill's category registry as they are added.
#[derive(Debug, Clone)]
pub struct Bill {
    patient: PatientRef,
    registry: CategoryRegistry,
    charges: Vec<ChargeItem>,
}

impl Bill {
    pub fn new(patient: PatientRef, registry: CategoryRegistry) -> Self {
        Bill {
            patient,
            registry,
            charges: Vec::new(),
        }
    }

    /// Shared handle to the billed patient
    pub fn patient(&self) -> PatientRef {
        Arc::clone(&self.patient)
    }

    /// Registry handle this bill validates charges against
    pub fn registry(&self) -> CategoryRegistry {
        self.registry.clone()
    }

    /// Build and append a charge, surfacing the item's validation errors
    pub fn add_charge(
        &mut self,
        cost: i64,
        category: &str,
        description: Option<&str>,
    ) -> Result<()> {
        let charge = ChargeItem::new(cost, category, description, &self.registry)?;
        self.charges.push(charge);
        Ok(())
    }

    /// Remove and return the charge at `index`
    pub fn remove_charge(&mut self, index: usize) -> Result<ChargeItem> {
        if index >= self.charges.len() {
            return Err(RecordError::IndexOutOfRange {
                index,
                len: self.charges.len(),
            });
        }
        Ok(self.charges.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&ChargeItem> {
        self.charges.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ChargeItem> {
        self.charges.get_mut(index)
    }

    /// All charges, in the order they were added
    pub fn charges(&self) -> &[ChargeItem] {
        &self.charges
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Sum of all charge costs; 0 for an empty bill
    pub fn total_fee(&self) -> i64 {
        self.charges.iter().map(ChargeItem::cost).sum()
    }

    /// Print the rendered bill to stdout
    pub fn show(&self) {
        println!("{self}");
    }
}

// Single index returns one item, a range returns an ordered sub-slice.
// Out-of-range access panics like `Vec` indexing does.
impl<I: SliceIndex<[ChargeItem]>> Index<I> for Bill {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.charges[index]
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patient = self.patient.read().unwrap();

        writeln!(f, "\t- Bill -")?;
        writeln!(f)?;
        writeln!(f, "{}", *patient)?;
        writeln!(f)?;
        writeln!(f, "\t- Charge History -")?;
        for charge in &self.charges {
            writeln!(f, "{charge}")?;
        }
        write!(f, "\nTotal: {}", self.total_fee())
    }
}

// ============================================================================
// TESTS
// ============================================================================
