//! Toolchain detection
//!
//! This module provides:
//! - Node.js/npm/git detection via `--version` probes
//! - The docs recovery path for missing Node.js installs

pub mod check;

pub use check::{
    check_git, check_node, check_npm, check_runtimes, open_node_docs, RuntimeInfo,
    NODE_DOWNLOAD_URL,
};
