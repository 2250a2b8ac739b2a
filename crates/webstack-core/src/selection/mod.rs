//! Selection state and constraint rules
//!
//! This module provides:
//! - `SelectionTree`, the owner of the catalog forest and the ordered
//!   selected list
//! - `SelectionRules`, the constraint lookup tables (single-select
//!   categories, base requirements, priority values)
//! - `SelectionEvent` and `SelectionError`

pub mod rules;
pub mod tree;

pub use rules::SelectionRules;
pub use tree::{SelectionError, SelectionEvent, SelectionTree};
