//! Selection state over the catalog forest
//!
//! `SelectionTree` owns the forest for the lifetime of a session and keeps
//! two representations of the user's choices in step: the `checked` flag on
//! each leaf, and the ordered, deduplicated list of selected values that
//! command generation consumes. All operations are synchronous and run to
//! completion; concurrent callers must serialize mutations themselves.

use thiserror::Error;

use crate::catalog::{Category, Dependency, Node};
use crate::selection::rules::SelectionRules;

/// Structured outcome of a mutating operation
///
/// The presentation layer decides how to surface these. A non-empty event
/// vec also signals that the tree changed and should be re-rendered; there
/// is no batching, so programmatic callers get one vec per mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected { label: String, value: String },
    Deselected { label: String, value: String },
    /// A base dependency's checked flag was forced on because a dependent
    /// of it was toggled; the base itself was not toggled
    BaseSelected { value: String },
    Cleared,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no dependency with value '{0}' in the catalog")]
    DependencyNotFound(String),

    #[error("no category labelled '{0}' in the catalog")]
    CategoryNotFound(String),
}

/// Owner of the catalog forest and the ordered selection list
pub struct SelectionTree {
    nodes: Vec<Node>,
    rules: SelectionRules,
    selected: Vec<String>,
}

impl SelectionTree {
    /// Take ownership of a catalog forest
    ///
    /// Any `checked` flags preset in the forest are reset: a session always
    /// starts with nothing selected.
    pub fn new(nodes: Vec<Node>, rules: SelectionRules) -> Self {
        let mut tree = Self {
            nodes,
            rules,
            selected: Vec::new(),
        };
        clear_leaves(&mut tree.nodes);
        tree
    }

    pub fn rules(&self) -> &SelectionRules {
        &self.rules
    }

    /// Immediate children of the category with the given label, or the
    /// forest roots when no label is given
    pub fn children_of(&self, category_label: Option<&str>) -> Result<&[Node], SelectionError> {
        match category_label {
            None => Ok(&self.nodes),
            Some(label) => self
                .find_category_by_label(label)
                .map(|cat| cat.children.as_slice())
                .ok_or_else(|| SelectionError::CategoryNotFound(label.to_string())),
        }
    }

    /// Depth-first search for the first category with a matching label
    ///
    /// Labels are not guaranteed unique across the forest; the first match
    /// in traversal order wins.
    pub fn find_category_by_label(&self, label: &str) -> Option<&Category> {
        find_category(&self.nodes, label)
    }

    /// The category that has the dependency with this value as a direct
    /// child, or None for root-level or unknown dependencies
    pub fn find_nearest_parent_category(&self, value: &str) -> Option<&Category> {
        parent_category(&self.nodes, value)
    }

    pub fn find_dependency(&self, value: &str) -> Option<&Dependency> {
        find_dependency(&self.nodes, value)
    }

    /// Whether a value is in the selected list
    ///
    /// Note this is list membership, not the `checked` flag: a base forced
    /// on by a dependent has its flag set without being listed.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// Ordered values of the current selection. Treat as a snapshot; the
    /// slice is invalidated by the next mutation.
    pub fn selected_values(&self) -> &[String] {
        &self.selected
    }

    /// Flip a dependency's selection, applying the constraint rules
    ///
    /// In order: checked siblings in a single-select category are
    /// unchecked, a required base dependency's flag is forced on, then the
    /// dependency itself is flipped and mirrored into the selected list
    /// (priority values at the front, everything else appended).
    pub fn toggle(&mut self, value: &str) -> Result<Vec<SelectionEvent>, SelectionError> {
        let label = find_dependency(&self.nodes, value)
            .ok_or_else(|| SelectionError::DependencyNotFound(value.to_string()))?
            .label
            .clone();

        let mut events = Vec::new();

        // Only one direct-child leaf of a single-select category may stay
        // checked; nested grandchildren are not governed.
        let single_select = parent_category(&self.nodes, value)
            .is_some_and(|cat| self.rules.is_single_select(&cat.label));
        if single_select {
            if let Some(parent) = parent_category_mut(&mut self.nodes, value) {
                let mut unchecked = Vec::new();
                for child in &mut parent.children {
                    if let Node::Dependency(dep) = child {
                        if dep.value != value && dep.checked {
                            dep.checked = false;
                            unchecked.push(dep.value.clone());
                        }
                    }
                }
                self.selected.retain(|v| !unchecked.contains(v));
            }
        }

        // A dependent forces its base's checked flag on, anywhere in the
        // forest. The base enters the selected list only when toggled
        // itself, and the guard tests list membership rather than the flag,
        // so a previously forced flag does not suppress a repeat force.
        if let Some(base) = self.rules.base_for(value).map(str::to_string) {
            if !self.is_selected(&base) {
                if let Some(dep) = find_dependency_mut(&mut self.nodes, &base) {
                    dep.checked = true;
                    events.push(SelectionEvent::BaseSelected { value: base });
                }
            }
        }

        // Flip and mirror into the selected list.
        let now_checked = match find_dependency_mut(&mut self.nodes, value) {
            Some(dep) => {
                dep.checked = !dep.checked;
                dep.checked
            }
            None => return Err(SelectionError::DependencyNotFound(value.to_string())),
        };

        if now_checked {
            if self.rules.is_priority(value) {
                self.selected.insert(0, value.to_string());
            } else {
                self.selected.push(value.to_string());
            }
            events.push(SelectionEvent::Selected {
                label,
                value: value.to_string(),
            });
        } else {
            self.selected.retain(|v| v != value);
            events.push(SelectionEvent::Deselected {
                label,
                value: value.to_string(),
            });
        }

        Ok(events)
    }

    /// Uncheck every leaf in the forest, at any depth, and empty the
    /// selected list. Forced base flags are cleared like everything else.
    pub fn clear(&mut self) -> Vec<SelectionEvent> {
        clear_leaves(&mut self.nodes);
        self.selected.clear();
        vec![SelectionEvent::Cleared]
    }
}

fn find_dependency<'a>(nodes: &'a [Node], value: &str) -> Option<&'a Dependency> {
    for node in nodes {
        match node {
            Node::Dependency(dep) if dep.value == value => return Some(dep),
            Node::Dependency(_) => {}
            Node::Category(cat) => {
                if let Some(found) = find_dependency(&cat.children, value) {
                    return Some(found);
                }
            }
        }
    }
    None
}

fn find_dependency_mut<'a>(nodes: &'a mut [Node], value: &str) -> Option<&'a mut Dependency> {
    for node in nodes {
        match node {
            Node::Dependency(dep) if dep.value == value => return Some(dep),
            Node::Dependency(_) => {}
            Node::Category(cat) => {
                if let Some(found) = find_dependency_mut(&mut cat.children, value) {
                    return Some(found);
                }
            }
        }
    }
    None
}

fn find_category<'a>(nodes: &'a [Node], label: &str) -> Option<&'a Category> {
    for node in nodes {
        if let Node::Category(cat) = node {
            if cat.label == label {
                return Some(cat);
            }
            if let Some(found) = find_category(&cat.children, label) {
                return Some(found);
            }
        }
    }
    None
}

fn parent_category<'a>(nodes: &'a [Node], value: &str) -> Option<&'a Category> {
    for node in nodes {
        if let Node::Category(cat) = node {
            let direct_child = cat
                .children
                .iter()
                .any(|c| matches!(c, Node::Dependency(dep) if dep.value == value));
            if direct_child {
                return Some(cat);
            }
            if let Some(found) = parent_category(&cat.children, value) {
                return Some(found);
            }
        }
    }
    None
}

fn parent_category_mut<'a>(nodes: &'a mut [Node], value: &str) -> Option<&'a mut Category> {
    for node in nodes {
        if let Node::Category(cat) = node {
            let direct_child = cat
                .children
                .iter()
                .any(|c| matches!(c, Node::Dependency(dep) if dep.value == value));
            if direct_child {
                return Some(cat);
            }
            if let Some(found) = parent_category_mut(&mut cat.children, value) {
                return Some(found);
            }
        }
    }
    None
}

fn clear_leaves(nodes: &mut [Node]) {
    for node in nodes {
        match node {
            Node::Dependency(dep) => dep.checked = false,
            Node::Category(cat) => clear_leaves(&mut cat.children),
        }
    }
}
