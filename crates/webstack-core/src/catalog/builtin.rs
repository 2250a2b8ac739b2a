//! Built-in catalog and default constraint rules
//!
//! Used when no catalog file is supplied. The shipped catalog covers the
//! common React stack: one framework, one language, one styling choice,
//! plus freely combinable component libraries and extras.

use std::collections::HashMap;

use crate::catalog::model::{Catalog, Category, Dependency, Node};
use crate::selection::SelectionRules;

fn dependency(label: &str, value: &str, icon: &str) -> Node {
    Node::Dependency(Dependency {
        label: label.to_string(),
        value: value.to_string(),
        checked: false,
        icon: icon.to_string(),
    })
}

fn category(label: &str, children: Vec<Node>) -> Node {
    Node::Category(Category {
        label: label.to_string(),
        collapsible: true,
        children,
    })
}

/// The catalog compiled into the binary
pub fn builtin_catalog() -> Catalog {
    Catalog {
        version: env!("CARGO_PKG_VERSION").to_string(),
        nodes: vec![
            category(
                "Frameworks",
                vec![
                    dependency("Vite", "frontend-vite", "vite"),
                    dependency("React (Create React App)", "frontend-react", "react"),
                    dependency("Next.js", "frontend-next", "nextjs"),
                ],
            ),
            category(
                "Languages",
                vec![
                    dependency("TypeScript", "frontend-ts", "typescript"),
                    dependency("JavaScript", "frontend-js", "javascript"),
                ],
            ),
            category(
                "Styles",
                vec![
                    dependency("Tailwind CSS", "tailwind", "tailwind"),
                    dependency("Styled Components", "styled-components", "styledcomponents"),
                    dependency("Sass", "sass", "sass"),
                    category(
                        "Component Libraries",
                        vec![
                            dependency("shadcn/ui", "shadcn", "shadcn"),
                            dependency("Radix UI", "radixui", "radix"),
                        ],
                    ),
                ],
            ),
            category(
                "Other Libraries",
                vec![
                    dependency("React Router", "react-router", "reactrouter"),
                    dependency("Axios", "axios", "axios"),
                    dependency("React Data Table", "react-datatable", "datatable"),
                    dependency("Zustand", "zustand", "zustand"),
                ],
            ),
        ],
        rules: default_rules(),
    }
}

/// Constraint rules applied when a catalog file does not override them
pub fn default_rules() -> SelectionRules {
    SelectionRules {
        single_select: vec![
            "Frameworks".to_string(),
            "Languages".to_string(),
            "Styles".to_string(),
        ],
        requires_base: HashMap::from([
            ("shadcn".to_string(), "tailwind".to_string()),
            ("radixui".to_string(), "tailwind".to_string()),
        ]),
        priority: vec![
            "frontend-ts".to_string(),
            "frontend-vite".to_string(),
            "frontend-react".to_string(),
            "frontend-next".to_string(),
        ],
    }
}
