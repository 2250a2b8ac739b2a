//! Constraint lookup tables consulted by the selection tree

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed lookup tables for the selection constraints
///
/// The tree consults these but does not own their meaning: they are supplied
/// at construction, either from the built-in defaults or from the `rules`
/// section of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionRules {
    /// Labels of categories in which at most one direct-child leaf may be
    /// checked at a time
    #[serde(default)]
    pub single_select: Vec<String>,

    /// Dependent value -> base value whose checked flag is forced on when
    /// the dependent is toggled while the base is unselected
    #[serde(default)]
    pub requires_base: HashMap<String, String>,

    /// Values ordered to the front of the selected list, most recently
    /// selected first
    #[serde(default)]
    pub priority: Vec<String>,
}

impl SelectionRules {
    pub fn is_single_select(&self, category_label: &str) -> bool {
        self.single_select.iter().any(|l| l == category_label)
    }

    pub fn base_for(&self, value: &str) -> Option<&str> {
        self.requires_base.get(value).map(String::as_str)
    }

    pub fn is_priority(&self, value: &str) -> bool {
        self.priority.iter().any(|v| v == value)
    }
}
