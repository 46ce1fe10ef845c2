// Charge line item - one billed cost with a category and optional note
// The category is checked against the registry when the item is built or
// re-categorized, and never again after that.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::billing::category::CategoryRegistry;
use crate::error::Result;

// ============================================================================
// CHARGE ITEM
// ============================================================================

/// One line on a bill: immutable cost, re-categorizable category, free-form
/// description
///
/// Items add together and add to plain numbers in either operand order,
/// yielding the numeric sum of costs:
///
/// `&a + &b`, `&a + 2`, `2 + &a`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeItem {
    cost: i64,
    category: String,
    description: Option<String>,
}

impl ChargeItem {
    /// Build a charge. The category must case-insensitively match the
    /// registry as it stands right now; later registry changes neither
    /// revalidate nor invalidate this item.
    pub fn new(
        cost: i64,
        category: &str,
        description: Option<&str>,
        registry: &CategoryRegistry,
    ) -> Result<Self> {
        registry.check(category)?;

        Ok(ChargeItem {
            cost,
            category: category.to_string(),
            description: description.map(str::to_string),
        })
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Re-categorize, validating against the registry at the time of the call
    pub fn set_category(&mut self, value: &str, registry: &CategoryRegistry) -> Result<()> {
        registry.check(value)?;
        self.category = value.to_string();
        Ok(())
    }

    pub fn set_description(&mut self, value: Option<&str>) {
        self.description = value.map(str::to_string);
    }
}

// ============================================================================
// SUMMATION
// ============================================================================

impl Add for &ChargeItem {
    type Output = i64;

    fn add(self, other: &ChargeItem) -> i64 {
        self.cost + other.cost
    }
}

impl Add<i64> for &ChargeItem {
    type Output = i64;

    fn add(self, other: i64) -> i64 {
        self.cost + other
    }
}

impl Add<&ChargeItem> for i64 {
    type Output = i64;

    fn add(self, other: &ChargeItem) -> i64 {
        self + other.cost
    }
}

impl fmt::Display for ChargeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.category,
            self.cost,
            self.description.as_deref().unwrap_or_default()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
