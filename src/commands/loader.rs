//! @acp:module "Session Loader"
//! @acp:summary "Shared dataset loading for commands that need a session"
//! @acp:domain nutrition
//! @acp:layer handler

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::NutrientKind;
use crate::config::Config;
use crate::dataset;
use crate::session::Session;

/// Where to read foods from and which nutrient to start on
#[derive(Debug, Clone, Default)]
pub struct DataOptions {
    /// Dataset path override; falls back to the config's path
    pub data: Option<PathBuf>,
    /// Nutrient override; falls back to the config's default
    pub nutrient: Option<NutrientKind>,
}

/// Load the dataset and open a session on it
pub async fn load_session(options: &DataOptions, config: &Config) -> Result<Session> {
    let catalog = config.catalog()?;
    let path = options
        .data
        .clone()
        .unwrap_or_else(|| config.dataset_path().to_path_buf());
    let nutrient = options.nutrient.unwrap_or(config.default_nutrient);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Loading {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let loaded = dataset::load(&path, &catalog).await;
    spinner.finish_and_clear();

    let records = match loaded {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{} Failed to load {}", style("✗").red(), path.display());
            eprintln!("  Set dataset.path in the config or pass --data <FILE>");
            return Err(e).with_context(|| format!("loading dataset {}", path.display()));
        }
    };

    Ok(Session::new(records, catalog, nutrient))
}
