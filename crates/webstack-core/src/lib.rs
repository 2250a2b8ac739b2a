//! Webstack Core - Library for selection-driven project scaffolding
//!
//! This library lets a front end build a project-scaffolding plan by
//! toggling items in a nested catalog of frameworks, languages, styling
//! libraries and extra packages, then turns the resulting selection into
//! shell commands.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Catalog** - the category/dependency forest, its YAML file
//!   format, and the built-in defaults
//! - **Layer 2: Selection engine** - `SelectionTree` enforcing the
//!   constraint rules (single-choice categories, forced base dependencies,
//!   priority ordering of the selected list)
//! - **Layer 3: Commands** - plan generation from the ordered selection and
//!   sequential execution
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use webstack_core::catalog::builtin_catalog;
//! use webstack_core::selection::SelectionTree;
//!
//! let catalog = builtin_catalog();
//! let mut tree = SelectionTree::new(catalog.nodes, catalog.rules);
//! tree.toggle("frontend-vite")?;
//! tree.toggle("frontend-ts")?;
//! let plan = webstack_core::commands::build_plan(tree.selected_values(), "my-project");
//! ```

pub mod catalog;
pub mod commands;
pub mod runtime;
pub mod selection;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{builtin_catalog, Catalog, Category, Dependency, Node};
pub use commands::{build_plan, CommandPlan};
pub use selection::{SelectionError, SelectionEvent, SelectionRules, SelectionTree};

#[cfg(feature = "tui")]
pub use tui::run;
