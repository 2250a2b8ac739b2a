//! Catalog data model and YAML document format

use serde::{Deserialize, Serialize};

use crate::selection::SelectionRules;

/// A selectable leaf item
///
/// Identity is `value`; `label` is the display name and is only unique
/// among siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub label: String,

    /// Stable identifier used in selections and command generation
    pub value: String,

    /// Current selection flag, mutated in place by the selection tree
    #[serde(default)]
    pub checked: bool,

    /// Icon identifier for the presentation layer (an identifier, not a path)
    #[serde(default)]
    pub icon: String,
}

/// A grouping node. Categories may nest arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,

    #[serde(default = "default_collapsible")]
    pub collapsible: bool,

    pub children: Vec<Node>,
}

fn default_collapsible() -> bool {
    true
}

/// A node in the catalog forest
///
/// Untagged: a YAML mapping with a `children` field is a category, one with
/// a `value` field is a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Category(Category),
    Dependency(Dependency),
}

impl Node {
    pub fn label(&self) -> &str {
        match self {
            Node::Category(cat) => &cat.label,
            Node::Dependency(dep) => &dep.label,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Node::Category(_))
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Node::Category(cat) => Some(cat),
            Node::Dependency(_) => None,
        }
    }

    pub fn as_dependency(&self) -> Option<&Dependency> {
        match self {
            Node::Category(_) => None,
            Node::Dependency(dep) => Some(dep),
        }
    }
}

/// On-disk catalog document (`--catalog-file` / `WEBSTACK_CATALOG`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Semver version for CLI compatibility checking
    pub version: String,

    /// The category/dependency forest
    pub catalog: Vec<Node>,

    /// Constraint rule overrides; the built-in rules apply when omitted
    #[serde(default)]
    pub rules: Option<SelectionRules>,
}

/// A resolved catalog: the forest plus the rules that govern it
#[derive(Debug, Clone)]
pub struct Catalog {
    pub version: String,
    pub nodes: Vec<Node>,
    pub rules: SelectionRules,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
version: 0.1.0
catalog:
  - label: Frameworks
    children:
      - label: Vite
        value: frontend-vite
        icon: vite
      - label: Next.js
        value: frontend-next
  - label: Styles
    children:
      - label: Tailwind CSS
        value: tailwind
      - label: Component Libraries
        children:
          - label: shadcn/ui
            value: shadcn
rules:
  single_select: [Frameworks]
  requires_base:
    shadcn: tailwind
  priority: [frontend-vite]
"#;

    #[test]
    fn test_parse_catalog_file() {
        let file: CatalogFile = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(file.version, "0.1.0");
        assert_eq!(file.catalog.len(), 2);

        let rules = file.rules.unwrap();
        assert!(rules.is_single_select("Frameworks"));
        assert_eq!(rules.base_for("shadcn"), Some("tailwind"));
        assert!(rules.is_priority("frontend-vite"));
    }

    #[test]
    fn test_children_field_distinguishes_categories() {
        let file: CatalogFile = serde_yaml::from_str(SAMPLE).unwrap();

        let frameworks = file.catalog[0].as_category().unwrap();
        assert_eq!(frameworks.label, "Frameworks");
        assert_eq!(frameworks.children.len(), 2);

        let vite = frameworks.children[0].as_dependency().unwrap();
        assert_eq!(vite.value, "frontend-vite");
        assert!(frameworks.children[0].as_category().is_none());
    }

    #[test]
    fn test_nested_category_parses() {
        let file: CatalogFile = serde_yaml::from_str(SAMPLE).unwrap();

        let styles = file.catalog[1].as_category().unwrap();
        let libs = styles.children[1].as_category().unwrap();
        assert_eq!(libs.label, "Component Libraries");
        assert_eq!(libs.children[0].as_dependency().unwrap().value, "shadcn");
    }

    #[test]
    fn test_dependency_defaults() {
        let file: CatalogFile = serde_yaml::from_str(SAMPLE).unwrap();

        let frameworks = file.catalog[0].as_category().unwrap();
        let vite = frameworks.children[0].as_dependency().unwrap();
        assert!(!vite.checked);
        assert_eq!(vite.icon, "vite");

        // icon defaults to empty when omitted
        let next = frameworks.children[1].as_dependency().unwrap();
        assert_eq!(next.icon, "");

        // collapsible defaults to true
        assert!(frameworks.collapsible);
    }

    #[test]
    fn test_rules_default_to_none() {
        let yaml = "version: 0.1.0\ncatalog: []\n";
        let file: CatalogFile = serde_yaml::from_str(yaml).unwrap();
        assert!(file.rules.is_none());
    }
}
