//! Shell command generation from the selected list
//!
//! The ordered selection decides the ordered plan: the framework scaffold
//! (if any) comes first, then one install block per selected library in
//! selection order. Language values never produce commands of their own;
//! they pick the template variant of the scaffold.

use std::path::Path;

/// Base directory name for scaffolded apps
pub const BASE_APP_NAME: &str = "my-project";

const FRAMEWORK_VALUES: &[&str] = &["frontend-vite", "frontend-react", "frontend-next"];
const LANGUAGE_VALUES: &[&str] = &["frontend-ts", "frontend-js"];

/// One shell command in a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    /// Full command line, run through `sh -c`
    pub line: String,

    /// Run inside the scaffolded app directory rather than the workspace
    pub in_app_dir: bool,
}

/// Ordered list of commands derived from a selection
#[derive(Debug, Clone)]
pub struct CommandPlan {
    /// Directory the framework scaffold will create
    pub app_dir: String,

    /// Whether a framework scaffold command is present
    pub scaffolds_app: bool,

    pub commands: Vec<PlannedCommand>,

    /// Selected values no command is known for
    pub skipped: Vec<String>,
}

/// Build the command plan for an ordered list of selected values
pub fn build_plan(selected: &[String], app_dir: &str) -> CommandPlan {
    let typescript = selected.iter().any(|v| v == "frontend-ts");
    let mut commands = Vec::new();
    let mut skipped = Vec::new();

    // First framework wins, vite > react > next precedence.
    let scaffold = if selected.iter().any(|v| v == "frontend-vite") {
        Some(format!(
            "npm create vite@latest {} -- --template {}",
            app_dir,
            if typescript { "react-ts" } else { "react" }
        ))
    } else if selected.iter().any(|v| v == "frontend-react") {
        Some(if typescript {
            format!("npx create-react-app@latest {} --template typescript", app_dir)
        } else {
            format!("npx create-react-app@latest {}", app_dir)
        })
    } else if selected.iter().any(|v| v == "frontend-next") {
        Some(format!(
            "npx create-next-app@latest {} {} --no-tailwind --eslint --src-dir --app --import-alias '@/*' --yes",
            app_dir,
            if typescript { "--typescript" } else { "--javascript" }
        ))
    } else {
        None
    };

    let scaffolds_app = scaffold.is_some();
    if let Some(line) = scaffold {
        commands.push(PlannedCommand {
            line,
            in_app_dir: false,
        });
        commands.push(PlannedCommand {
            line: "npm install".to_string(),
            in_app_dir: true,
        });
    }

    // Library installs in selection order.
    for value in selected {
        if FRAMEWORK_VALUES.contains(&value.as_str()) || LANGUAGE_VALUES.contains(&value.as_str())
        {
            continue;
        }
        match library_commands(value) {
            Some(lines) => commands.extend(lines.into_iter().map(|line| PlannedCommand {
                line,
                in_app_dir: true,
            })),
            None => skipped.push(value.clone()),
        }
    }

    CommandPlan {
        app_dir: app_dir.to_string(),
        scaffolds_app,
        commands,
        skipped,
    }
}

fn library_commands(value: &str) -> Option<Vec<String>> {
    let lines: &[&str] = match value {
        "tailwind" => &[
            "npm install -D tailwindcss postcss autoprefixer",
            "npx tailwindcss init -p",
        ],
        "shadcn" => &["npx shadcn@latest init"],
        "radixui" => &["npm install @radix-ui/themes"],
        "styled-components" => &["npm install styled-components"],
        "sass" => &["npm install -D sass"],
        "react-router" => &["npm install react-router-dom"],
        "axios" => &["npm install axios"],
        "react-datatable" => &["npm install react-data-table-component"],
        "zustand" => &["npm install zustand"],
        _ => return None,
    };
    Some(lines.iter().map(|s| s.to_string()).collect())
}

/// Pick a directory name that does not collide with an existing entry,
/// suffixing `-1`, `-2`, ... as needed
pub fn unique_app_dir(parent: &Path, base_name: &str) -> String {
    if !parent.join(base_name).exists() {
        return base_name.to_string();
    }
    let mut n = 1;
    loop {
        let candidate = format!("{}-{}", base_name, n);
        if !parent.join(&candidate).exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Generate the "next steps" instructions shown after the plan has run
pub fn next_steps(plan: &CommandPlan) -> Vec<String> {
    let mut steps = Vec::new();
    if plan.scaffolds_app {
        steps.push(format!("cd {}", plan.app_dir));
    }
    steps.push("npm run dev".to_string());
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vite_with_typescript() {
        let plan = build_plan(&values(&["frontend-ts", "frontend-vite"]), "my-project");

        assert!(plan.scaffolds_app);
        assert_eq!(
            plan.commands[0].line,
            "npm create vite@latest my-project -- --template react-ts"
        );
        assert!(!plan.commands[0].in_app_dir);
        assert_eq!(plan.commands[1].line, "npm install");
        assert!(plan.commands[1].in_app_dir);
    }

    #[test]
    fn test_vite_without_typescript() {
        let plan = build_plan(&values(&["frontend-vite"]), "my-project");
        assert!(plan.commands[0].line.ends_with("--template react"));
    }

    #[test]
    fn test_create_react_app_template_flag() {
        let plan = build_plan(&values(&["frontend-ts", "frontend-react"]), "app");
        assert_eq!(
            plan.commands[0].line,
            "npx create-react-app@latest app --template typescript"
        );

        let plan = build_plan(&values(&["frontend-react"]), "app");
        assert_eq!(plan.commands[0].line, "npx create-react-app@latest app");
    }

    #[test]
    fn test_next_app_language_flag() {
        let plan = build_plan(&values(&["frontend-next"]), "app");
        assert!(plan.commands[0].line.contains("--javascript"));

        let plan = build_plan(&values(&["frontend-next", "frontend-ts"]), "app");
        assert!(plan.commands[0].line.contains("--typescript"));
        assert!(plan.commands[0].line.contains("--no-tailwind"));
    }

    #[test]
    fn test_framework_precedence_vite_first() {
        let plan = build_plan(&values(&["frontend-next", "frontend-vite"]), "app");
        assert!(plan.commands[0].line.starts_with("npm create vite@latest"));
    }

    #[test]
    fn test_library_installs_follow_selection_order() {
        let plan = build_plan(
            &values(&["frontend-vite", "axios", "sass", "react-router"]),
            "app",
        );

        let lines: Vec<&str> = plan.commands.iter().map(|c| c.line.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "npm create vite@latest app -- --template react",
                "npm install",
                "npm install axios",
                "npm install -D sass",
                "npm install react-router-dom",
            ]
        );
        assert!(plan.commands[2..].iter().all(|c| c.in_app_dir));
    }

    #[test]
    fn test_tailwind_installs_and_initializes() {
        let plan = build_plan(&values(&["tailwind"]), "app");
        let lines: Vec<&str> = plan.commands.iter().map(|c| c.line.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "npm install -D tailwindcss postcss autoprefixer",
                "npx tailwindcss init -p",
            ]
        );
    }

    #[test]
    fn test_unknown_value_is_skipped() {
        let plan = build_plan(&values(&["frontend-vite", "left-pad"]), "app");
        assert_eq!(plan.skipped, vec!["left-pad".to_string()]);
        assert!(plan.commands.iter().all(|c| !c.line.contains("left-pad")));
    }

    #[test]
    fn test_language_only_selection_produces_nothing() {
        let plan = build_plan(&values(&["frontend-ts"]), "app");
        assert!(!plan.scaffolds_app);
        assert!(plan.commands.is_empty());
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn test_libraries_without_framework() {
        let plan = build_plan(&values(&["axios"]), "app");
        assert!(!plan.scaffolds_app);
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(plan.commands[0].line, "npm install axios");
    }

    #[test]
    fn test_unique_app_dir() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(unique_app_dir(dir.path(), "my-project"), "my-project");

        std::fs::create_dir(dir.path().join("my-project")).unwrap();
        assert_eq!(unique_app_dir(dir.path(), "my-project"), "my-project-1");

        std::fs::create_dir(dir.path().join("my-project-1")).unwrap();
        assert_eq!(unique_app_dir(dir.path(), "my-project"), "my-project-2");
    }

    #[test]
    fn test_next_steps() {
        let plan = build_plan(&values(&["frontend-vite"]), "my-app");
        assert_eq!(
            next_steps(&plan),
            vec!["cd my-app".to_string(), "npm run dev".to_string()]
        );

        let plan = build_plan(&values(&["axios"]), "my-app");
        assert_eq!(next_steps(&plan), vec!["npm run dev".to_string()]);
    }
}
