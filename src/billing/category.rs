// Category registry - the allowed charge categories
// An explicit registry object instead of hidden class-level state: the bill
// (or the caller) owns a handle, and clones of a handle share one list.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::entities::person::validate_alphabetic;
use crate::error::{RecordError, Result};

/// Categories every new registry starts with
const DEFAULT_CATEGORIES: [&str; 3] = ["medicine", "doctor", "room"];

// ============================================================================
// CATEGORY REGISTRY
// ============================================================================

/// Ordered, case-insensitive list of allowed charge categories
///
/// Matching is case-insensitive; stored names are lower-cased on entry.
/// Duplicate entries are permitted: `add_category` appends without a dedup
/// check. Charge items validate against the registry at the time of the
/// call only, so adding a category later never revalidates existing items.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    names: Arc<RwLock<Vec<String>>>,
}

impl CategoryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        CategoryRegistry {
            names: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a registry pre-loaded with the default categories
    pub fn with_defaults() -> Self {
        let registry = CategoryRegistry::new();
        for name in DEFAULT_CATEGORIES {
            registry
                .add_category(name)
                .expect("default categories are alphabetic");
        }
        registry
    }

    /// Append a category. It must be purely alphabetic; it is stored
    /// lower-cased, and duplicates are silently allowed.
    pub fn add_category(&self, name: &str) -> Result<()> {
        validate_alphabetic("category", name)?;
        self.names.write().unwrap().push(name.to_lowercase());
        Ok(())
    }

    /// Case-insensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.names.read().unwrap().iter().any(|c| *c == needle)
    }

    /// Validate a candidate category against the current list
    pub(crate) fn check(&self, category: &str) -> Result<()> {
        if !self.contains(category) {
            return Err(RecordError::UnknownCategory {
                category: category.to_string(),
                allowed: self.names().join(", "),
            });
        }
        Ok(())
    }

    /// Snapshot of the current names, in insertion order
    pub fn names(&self) -> Vec<String> {
        self.names.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.names.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().unwrap().is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Display for CategoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}

// ============================================================================
// TESTS
// ============================================================================
