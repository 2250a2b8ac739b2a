//! Runtime detection for the npm toolchain

use anyhow::Result;
use colored::Colorize;
use std::process::Command;

/// Where to send users who are missing Node.js
pub const NODE_DOWNLOAD_URL: &str = "https://nodejs.org/en/download";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    let output = Command::new("node").arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "Node.js",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Node.js",
            version: None,
            available: false,
        },
    }
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    let output = Command::new("npm").arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "npm",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "npm",
            version: None,
            available: false,
        },
    }
}

/// Check if git is available
pub fn check_git() -> RuntimeInfo {
    let output = Command::new("git").arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "git",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "git",
            version: None,
            available: false,
        },
    }
}

/// Check the toolchain the generated commands need
///
/// Node.js and npm are hard requirements. git is advisory: create-next-app
/// initializes a repository when it is present, but nothing fails without
/// it.
pub fn check_runtimes() -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    let node = check_node();
    if node.available {
        results.push(node);
    } else {
        missing.push("Node.js (install from https://nodejs.org)");
    }

    let npm = check_npm();
    if npm.available {
        results.push(npm);
    } else {
        missing.push("npm (ships with Node.js, https://nodejs.org)");
    }

    results.push(check_git());

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required runtimes:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}

/// Open the Node.js download page in the default browser
pub fn open_node_docs() -> Result<()> {
    println!(
        "{}",
        "Opening the Node.js download page in your browser...".cyan()
    );
    open::that(NODE_DOWNLOAD_URL)?;
    Ok(())
}
