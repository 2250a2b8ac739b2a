//! Charm-style CLI prompts using cliclack

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::catalog::{self, Catalog, Node};
use crate::commands::{build_plan, next_steps, run_plan, unique_app_dir, CommandPlan, BASE_APP_NAME};
use crate::runtime::check;
use crate::selection::{SelectionEvent, SelectionTree};

// Sentinel menu values; category listings are never this long.
const MENU_DONE: usize = usize::MAX;
const MENU_RESET: usize = usize::MAX - 1;
const MENU_BACK: usize = usize::MAX - 2;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Catalog file to use instead of the built-in catalog
    pub catalog_file: Option<PathBuf>,

    /// Directory name for the scaffolded app
    pub app_name: Option<String>,

    /// Dependency values to select up front (non-interactive mode)
    pub select: Option<Vec<String>>,

    /// Print the command plan without running it
    pub dry_run: bool,

    /// Skip the Node.js/npm runtime check
    pub skip_runtime_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("Webstack")?;

    // Step 1: Check the npm toolchain
    if args.skip_runtime_check {
        cliclack::log::info("Skipping runtime check")?;
    } else {
        handle_runtime_check(&args)?;
    }

    // Step 2: Resolve the catalog and build the selection tree
    let catalog = load_catalog(&args, cli_version)?;
    let mut tree = SelectionTree::new(catalog.nodes, catalog.rules);

    // Step 3: Select dependencies
    if let Some(values) = &args.select {
        apply_preselection(&mut tree, values)?;
    } else {
        select_dependencies(&mut tree)?;
    }

    if tree.selected_values().is_empty() {
        cliclack::outro("Nothing selected.")?;
        return Ok(());
    }
    cliclack::log::success(format!("Selected: {}", tree.selected_values().join(", ")))?;

    // Step 4: Resolve the app directory
    let app_dir = select_app_dir(&args)?;

    // Step 5: Build and preview the plan
    let plan = build_plan(tree.selected_values(), &app_dir);
    preview_plan(&plan)?;

    if plan.commands.is_empty() {
        cliclack::outro("Nothing to run.")?;
        return Ok(());
    }

    if args.dry_run {
        cliclack::outro("Dry run - no commands executed.")?;
        return Ok(());
    }

    // Step 6: Confirm and run
    let confirm = if args.yes {
        true
    } else {
        cliclack::confirm("Run these commands?")
            .initial_value(true)
            .interact()?
    };
    if !confirm {
        cliclack::outro("Setup cancelled.")?;
        return Ok(());
    }

    let workspace = std::env::current_dir()?;
    run_plan(&plan, &workspace).await?;

    // Step 7: Show next steps
    print_next_steps(&plan)?;

    Ok(())
}

fn handle_runtime_check(args: &CreateArgs) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match check::check_runtimes() {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| {
                    if r.available {
                        format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
                    } else {
                        format!("{} (not installed)", r.name)
                    }
                })
                .collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing runtimes");
            cliclack::log::error(format!("{}", e))?;

            if args.yes {
                cliclack::log::info("Continuing anyway (--yes mode)")?;
                return Ok(());
            }

            let action: &str = cliclack::select("What would you like to do?")
                .item(
                    "docs",
                    format!("Open the Node.js download page ({})", check::NODE_DOWNLOAD_URL),
                    "",
                )
                .item("skip", "Skip and continue anyway", "")
                .interact()?;

            match action {
                "docs" => {
                    check::open_node_docs()?;
                    cliclack::outro("After installing Node.js, run this command again.")?;
                    std::process::exit(0);
                }
                "skip" => {
                    cliclack::log::info("Continuing without a verified npm toolchain")?;
                }
                _ => {}
            }
            Ok(())
        }
    }
}

fn load_catalog(args: &CreateArgs, cli_version: &str) -> Result<Catalog> {
    let catalog = match &args.catalog_file {
        Some(path) => {
            cliclack::log::info(format!("Using catalog from {}", path.display()))?;
            catalog::load_catalog_file(path)?
        }
        None => {
            if let Ok(env_path) = std::env::var(catalog::CATALOG_ENV) {
                cliclack::log::info(format!("Using catalog from ${}", catalog::CATALOG_ENV))?;
                catalog::load_catalog_file(Path::new(&env_path))?
            } else {
                catalog::builtin_catalog()
            }
        }
    };

    if let Some(warning) = catalog::check_compatibility(
        cli_version,
        &catalog.version,
        "cargo install webstack-tools --force",
    ) {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    Ok(catalog)
}

fn apply_preselection(tree: &mut SelectionTree, values: &[String]) -> Result<()> {
    for value in values {
        match tree.toggle(value) {
            Ok(events) => log_events(&events)?,
            Err(e) => cliclack::log::warning(format!("{}", e))?,
        }
    }
    Ok(())
}

fn log_events(events: &[SelectionEvent]) -> Result<()> {
    for event in events {
        match event {
            SelectionEvent::Selected { label, .. } => {
                cliclack::log::success(format!("{} selected.", label))?;
            }
            SelectionEvent::Deselected { label, .. } => {
                cliclack::log::info(format!("{} deselected.", label))?;
            }
            SelectionEvent::BaseSelected { value } => {
                cliclack::log::info(format!("{} selected.", value))?;
            }
            SelectionEvent::Cleared => {
                cliclack::log::info("Selections cleared.")?;
            }
        }
    }
    Ok(())
}

/// Interactive selection loop over the catalog forest
fn select_dependencies(tree: &mut SelectionTree) -> Result<()> {
    loop {
        let roots: Vec<MenuEntry> = tree.children_of(None)?.iter().map(MenuEntry::from).collect();

        let mut select = cliclack::select("Pick a category");
        for (idx, entry) in roots.iter().enumerate() {
            select = select.item(idx, entry.display(), entry.hint());
        }
        select = select.item(MENU_RESET, "Reset selections", "start over");
        select = select.item(MENU_DONE, "Done", "review and continue");

        match select.interact()? {
            MENU_DONE => return Ok(()),
            MENU_RESET => {
                let events = tree.clear();
                log_events(&events)?;
            }
            idx => {
                let entry = &roots[idx];
                match &entry.value {
                    Some(value) => {
                        let events = tree.toggle(value)?;
                        log_events(&events)?;
                    }
                    None => browse_category(tree, &entry.label)?,
                }
            }
        }
    }
}

/// Toggle leaves inside one category, descending into nested categories
fn browse_category(tree: &mut SelectionTree, category_label: &str) -> Result<()> {
    loop {
        let entries: Vec<MenuEntry> = tree
            .children_of(Some(category_label))?
            .iter()
            .map(MenuEntry::from)
            .collect();

        let mut select = cliclack::select(format!("{} - toggle an item", category_label));
        for (idx, entry) in entries.iter().enumerate() {
            select = select.item(idx, entry.display(), entry.hint());
        }
        select = select.item(MENU_BACK, "Back", "");

        let choice: usize = select.interact()?;
        if choice == MENU_BACK {
            return Ok(());
        }

        let entry = &entries[choice];
        match &entry.value {
            Some(value) => {
                let events = tree.toggle(value)?;
                log_events(&events)?;
            }
            None => browse_category(tree, &entry.label)?,
        }
    }
}

/// Snapshot of one node for menu rendering, detached from the tree borrow
struct MenuEntry {
    label: String,
    /// None for categories
    value: Option<String>,
    checked: bool,
}

impl From<&Node> for MenuEntry {
    fn from(node: &Node) -> Self {
        match node {
            Node::Category(cat) => MenuEntry {
                label: cat.label.clone(),
                value: None,
                checked: false,
            },
            Node::Dependency(dep) => MenuEntry {
                label: dep.label.clone(),
                value: Some(dep.value.clone()),
                checked: dep.checked,
            },
        }
    }
}

impl MenuEntry {
    fn display(&self) -> String {
        match &self.value {
            Some(_) => format!("[{}] {}", if self.checked { "x" } else { " " }, self.label),
            None => self.label.clone(),
        }
    }

    fn hint(&self) -> &str {
        match &self.value {
            Some(value) => value.as_str(),
            None => "category",
        }
    }
}

fn select_app_dir(args: &CreateArgs) -> Result<String> {
    let base = match &args.app_name {
        Some(name) => name.clone(),
        None => {
            if args.yes {
                BASE_APP_NAME.to_string()
            } else {
                cliclack::input("App directory name")
                    .placeholder(BASE_APP_NAME)
                    .default_input(BASE_APP_NAME)
                    .interact()?
            }
        }
    };

    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let unique = unique_app_dir(&current_dir, &base);
    if unique != base {
        cliclack::log::info(format!("Directory {} exists, using {}", base, unique))?;
    }
    Ok(unique)
}

fn preview_plan(plan: &CommandPlan) -> Result<()> {
    for value in &plan.skipped {
        cliclack::log::warning(format!("No command known for '{}', skipping", value))?;
    }

    if plan.commands.is_empty() {
        cliclack::log::warning("Selection produced no commands")?;
        return Ok(());
    }

    if !plan.scaffolds_app {
        cliclack::log::warning("No framework selected - installs run in the current directory")?;
    }

    cliclack::log::info(format!(
        "Planned commands:\n{}",
        plan.commands
            .iter()
            .map(|c| format!("  $ {}", c.line))
            .collect::<Vec<_>>()
            .join("\n")
    ))?;

    Ok(())
}

fn print_next_steps(plan: &CommandPlan) -> Result<()> {
    let steps = next_steps(plan);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
