//! Version comparison for CLI and catalog compatibility

use semver::Version;

/// Compare CLI version against catalog version
/// Returns a warning message if the CLI is older than the catalog expects
pub fn check_compatibility(
    cli_version: &str,
    catalog_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = match Version::parse(cli_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let catalog_ver = match Version::parse(catalog_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    if cli_ver < catalog_ver {
        Some(format!(
            "This catalog was designed for CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            catalog_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_older_than_catalog() {
        let warning = check_compatibility("0.1.0", "0.2.0", "cargo install webstack-tools --force");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_same_as_catalog() {
        let warning = check_compatibility("0.1.0", "0.1.0", "cargo install webstack-tools --force");
        assert!(warning.is_none());
    }

    #[test]
    fn test_cli_newer_than_catalog() {
        let warning = check_compatibility("0.2.0", "0.1.0", "cargo install webstack-tools --force");
        assert!(warning.is_none());
    }

    #[test]
    fn test_invalid_versions() {
        // Should return None (no warning) for invalid versions
        let warning = check_compatibility("invalid", "0.1.0", "cargo install webstack-tools --force");
        assert!(warning.is_none());
    }
}
