//! @acp:module "Init Command"
//! @acp:summary "Write a default configuration file"
//! @acp:domain nutrition
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::catalog::NutrientKind;
use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Where to write the config
    pub path: PathBuf,
    /// Overwrite an existing config
    pub force: bool,
    /// Dataset path to record in the config
    pub data: Option<PathBuf>,
    /// Default nutrient to record in the config
    pub nutrient: Option<NutrientKind>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        bail!("{} already exists", options.path.display());
    }

    let mut config = Config::default();
    if let Some(data) = options.data {
        config.dataset.path = data;
    }
    if let Some(nutrient) = options.nutrient {
        config.default_nutrient = nutrient;
    }

    if let Some(parent) = options.path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    config.save(&options.path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );
    println!("  Dataset: {}", config.dataset_path().display());
    println!("  Default nutrient: {}", config.default_nutrient);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("conf").join(".nutrient.config.json");

        execute_init(InitOptions {
            path: path.clone(),
            force: false,
            data: Some(PathBuf::from("foods.csv")),
            nutrient: Some(NutrientKind::Sodium),
        })
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("foods.csv"));
        assert_eq!(config.default_nutrient, NutrientKind::Sodium);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".nutrient.config.json");
        std::fs::write(&path, "{}").unwrap();

        let options = InitOptions {
            path: path.clone(),
            force: false,
            data: None,
            nutrient: None,
        };
        assert!(execute_init(options.clone()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        execute_init(InitOptions { force: true, ..options }).unwrap();
        assert!(Config::load(&path).is_ok());
    }
}
