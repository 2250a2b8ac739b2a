//! Sequential execution of a command plan
//!
//! Commands run through `sh -c` with streamed output. The first failure
//! stops the plan; there is no retry or rollback.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::commands::plan::CommandPlan;

/// Timeout for a single command (framework scaffolds pull a lot of
/// packages on a cold npm cache)
const COMMAND_TIMEOUT: Duration = Duration::from_secs(600);

/// Run every command in the plan in order, stopping at the first failure
pub async fn run_plan(plan: &CommandPlan, workspace: &Path) -> Result<()> {
    let app_path = workspace.join(&plan.app_dir);

    for cmd in &plan.commands {
        // Without a framework scaffold there is no app directory; installs
        // land in the workspace itself.
        let cwd: &Path = if cmd.in_app_dir && plan.scaffolds_app {
            &app_path
        } else {
            workspace
        };
        run_shell(&cmd.line, cwd).await?;
    }

    Ok(())
}

/// Run one command, streaming its output with a timeout
async fn run_shell(line: &str, cwd: &Path) -> Result<()> {
    println!();
    println!("{} {}", "Running:".dimmed(), line.yellow());
    println!();

    let mut child = TokioCommand::new("sh")
        .arg("-c")
        .arg(line)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child.stdout.take().expect("Failed to capture stdout");
    let stderr = child.stderr.take().expect("Failed to capture stderr");

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    // Stream output with timeout
    let output_task = async {
        loop {
            tokio::select! {
                out = stdout_reader.next_line() => {
                    match out {
                        Ok(Some(out)) => println!("  {}", out),
                        Ok(None) => break,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            break;
                        }
                    }
                }
                out = stderr_reader.next_line() => {
                    match out {
                        Ok(Some(out)) => eprintln!("  {}", out.yellow()),
                        Ok(None) => {}
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                        }
                    }
                }
            }
        }
    };

    match timeout(COMMAND_TIMEOUT, output_task).await {
        Ok(_) => {}
        Err(_) => {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "Command timed out after {} seconds:\n{}",
                COMMAND_TIMEOUT.as_secs(),
                line
            );
        }
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(status)) => {
            println!();
            if status.success() {
                Ok(())
            } else {
                anyhow::bail!(
                    "Command failed with exit code {}:\n{}",
                    status.code().unwrap_or(-1),
                    line
                );
            }
        }
        Ok(Err(e)) => {
            anyhow::bail!("Failed to wait for command: {}", e);
        }
        Err(_) => {
            let _ = child.kill().await;
            anyhow::bail!("Command hung after closing its output:\n{}", line);
        }
    }
}
