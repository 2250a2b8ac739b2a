//! Webstack CLI - Interactive scaffolding for frontend projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use webstack_core::catalog::{self, Node};
use webstack_core::tui::CreateArgs;
use webstack_core::SelectionRules;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "webstack-tools")]
#[command(about = "Interactive CLI for scaffolding frontend projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new frontend project
    Create(CliCreateArgs),
    /// Print the resolved dependency catalog (for development use)
    Catalog(CatalogArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Catalog file to use instead of the built-in catalog
    #[arg(long = "catalog-file")]
    pub catalog_file: Option<PathBuf>,

    /// Directory name for the scaffolded app
    #[arg(short, long)]
    pub app_name: Option<String>,

    /// Dependency values to select (comma-separated, e.g. frontend-vite,frontend-ts,tailwind)
    #[arg(short, long, value_delimiter = ',')]
    pub select: Option<Vec<String>>,

    /// Print the command plan without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the Node.js/npm runtime check
    #[arg(long = "skip-runtime-check")]
    pub skip_runtime_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            catalog_file: args.catalog_file,
            app_name: args.app_name,
            select: args.select,
            dry_run: args.dry_run,
            skip_runtime_check: args.skip_runtime_check,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Catalog file to resolve instead of the built-in catalog
    #[arg(long = "catalog-file")]
    pub catalog_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Create(create_args)) => {
            let result = webstack_core::run(create_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Catalog(catalog_args)) => print_catalog(&catalog_args),
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = webstack_core::run(CreateArgs::default(), CLI_VERSION).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}

fn print_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = catalog::resolve_catalog(args.catalog_file.as_deref())?;

    println!(
        "{} (catalog version {})",
        "Dependency catalog".cyan().bold(),
        catalog.version
    );
    println!();
    print_nodes(&catalog.nodes, &catalog.rules, 0);

    Ok(())
}

fn print_nodes(nodes: &[Node], rules: &SelectionRules, depth: usize) {
    let indent = "  ".repeat(depth + 1);
    for node in nodes {
        match node {
            Node::Category(cat) => {
                let marker = if rules.is_single_select(&cat.label) {
                    " (single choice)".dimmed().to_string()
                } else {
                    String::new()
                };
                println!("{}{}{}", indent, cat.label.bold(), marker);
                print_nodes(&cat.children, rules, depth + 1);
            }
            Node::Dependency(dep) => {
                println!(
                    "{}{} {}",
                    indent,
                    dep.label,
                    format!("({})", dep.value).dimmed()
                );
            }
        }
    }
}
