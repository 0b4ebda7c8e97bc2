use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::paths;

/// Package manager used when nothing else is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory new projects are created under
    pub cwd: PathBuf,
    /// Root holding the `<short>.json` / `<short>.zip` template pairs
    pub templates_dir: PathBuf,
    /// Program invoked as `<program> install [libraries]`
    pub package_manager: String,
}

impl Config {
    /// Load configuration, letting explicit values win over the defaults
    pub fn load(templates_dir: Option<PathBuf>, package_manager: Option<String>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
        let templates_dir = templates_dir.unwrap_or_else(paths::default_templates_dir);
        let package_manager = package_manager
            .filter(|pm| !pm.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string());

        log::debug!(
            "config: cwd={} templates={} package_manager={}",
            cwd.display(),
            templates_dir.display(),
            package_manager
        );

        Ok(Self {
            cwd,
            templates_dir,
            package_manager,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() -> Result<()> {
        let config = Config::load(None, None)?;
        assert_eq!(config.package_manager, "npm");
        assert_eq!(config.cwd, std::env::current_dir()?);
        Ok(())
    }

    #[test]
    fn test_load_overrides() -> Result<()> {
        let config = Config::load(Some(PathBuf::from("/srv/templates")), Some("pnpm".into()))?;
        assert_eq!(config.templates_dir, PathBuf::from("/srv/templates"));
        assert_eq!(config.package_manager, "pnpm");
        Ok(())
    }

    #[test]
    fn test_blank_package_manager_falls_back() -> Result<()> {
        let config = Config::load(None, Some("  ".into()))?;
        assert_eq!(config.package_manager, DEFAULT_PACKAGE_MANAGER);
        Ok(())
    }
}
