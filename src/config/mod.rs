//! @acp:module "Configuration"
//! @acp:summary "Tool configuration loading, defaults, and catalog resolution"
//! @acp:domain nutrition
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::{
    Catalog, Category, Columns, NutrientKind, NutrientProfile, PortionTable, Unit,
};
use crate::error::{NutrientError, Result};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".nutrient.config.json";

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/foods.csv")
}

fn default_category_column() -> String {
    crate::catalog::record::DEFAULT_CATEGORY_COLUMN.to_string()
}

fn default_name_column() -> String {
    crate::catalog::record::DEFAULT_NAME_COLUMN.to_string()
}

/// @acp:summary "Main configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the composition table lives and how its columns are named
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Nutrient selected when a command does not name one
    #[serde(default)]
    pub default_nutrient: NutrientKind,

    /// Per-nutrient column and threshold overrides
    #[serde(default)]
    pub nutrients: NutrientsConfig,

    /// Portion overrides in grams, keyed by category label or key
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub portions: BTreeMap<String, f64>,
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Dataset path, relative paths resolved by the caller's working directory
    pub fn dataset_path(&self) -> &Path {
        &self.dataset.path
    }

    pub fn columns(&self) -> Columns {
        Columns {
            category: self.dataset.category_column.clone(),
            name: self.dataset.name_column.clone(),
        }
    }

    /// @acp:summary "Resolve profiles and portions, rejecting invalid numbers"
    pub fn catalog(&self) -> Result<Catalog> {
        let mut profiles = Vec::with_capacity(NutrientKind::all().len());
        for &kind in NutrientKind::all() {
            let profile = self.nutrients.get(kind).resolve(kind);
            check_amount(&format!("{kind} content_threshold"), profile.content_threshold, true)?;
            check_amount(&format!("{kind} daily_limit"), profile.daily_limit, true)?;
            profiles.push(profile);
        }

        let mut portions = PortionTable::new();
        for (name, &grams) in &self.portions {
            match Category::from_name(name) {
                Some(category) => {
                    check_amount(&format!("portion for {name}"), grams, false)?;
                    portions = portions.with_override(category, grams);
                }
                None => tracing::warn!("Ignoring portion override for unknown category: {}", name),
            }
        }

        Ok(Catalog::new(profiles, portions, self.columns()))
    }
}

fn check_amount(what: &str, value: f64, allow_zero: bool) -> Result<()> {
    let valid = value.is_finite() && if allow_zero { value >= 0.0 } else { value > 0.0 };
    if valid {
        Ok(())
    } else {
        let expected = if allow_zero { "non-negative" } else { "positive" };
        Err(NutrientError::InvalidConfig(format!(
            "{what} must be a {expected} number, got {value}"
        )))
    }
}

/// @acp:summary "Dataset location and column names"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,

    #[serde(default = "default_category_column")]
    pub category_column: String,

    #[serde(default = "default_name_column")]
    pub name_column: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            category_column: default_category_column(),
            name_column: default_name_column(),
        }
    }
}

/// @acp:summary "Settings for every tracked nutrient"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientsConfig {
    #[serde(default = "NutrientSettings::potassium")]
    pub potassium: NutrientSettings,

    #[serde(default = "NutrientSettings::sodium")]
    pub sodium: NutrientSettings,

    #[serde(default = "NutrientSettings::fructose")]
    pub fructose: NutrientSettings,
}

impl NutrientsConfig {
    pub fn get(&self, kind: NutrientKind) -> &NutrientSettings {
        match kind {
            NutrientKind::Potassium => &self.potassium,
            NutrientKind::Sodium => &self.sodium,
            NutrientKind::Fructose => &self.fructose,
        }
    }
}

impl Default for NutrientsConfig {
    fn default() -> Self {
        Self {
            potassium: NutrientSettings::potassium(),
            sodium: NutrientSettings::sodium(),
            fructose: NutrientSettings::fructose(),
        }
    }
}

/// @acp:summary "Column and thresholds for one nutrient; unset fields use built-ins"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    /// Unit override; inferred from the column label when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,

    /// Per-100 g low/high cutoff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_threshold: Option<f64>,

    /// Daily upper limit compared against the selection total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_limit: Option<f64>,
}

impl NutrientSettings {
    fn builtin(kind: NutrientKind) -> Self {
        let profile = NutrientProfile::builtin(kind);
        Self {
            column: Some(profile.column),
            unit: None,
            content_threshold: Some(profile.content_threshold),
            daily_limit: Some(profile.daily_limit),
        }
    }

    fn potassium() -> Self {
        Self::builtin(NutrientKind::Potassium)
    }

    fn sodium() -> Self {
        Self::builtin(NutrientKind::Sodium)
    }

    fn fructose() -> Self {
        Self::builtin(NutrientKind::Fructose)
    }

    /// Fill unset fields from the built-in profile
    pub fn resolve(&self, kind: NutrientKind) -> NutrientProfile {
        let builtin = NutrientProfile::builtin(kind);
        let column = self.column.clone().unwrap_or(builtin.column);
        let unit = self
            .unit
            .or_else(|| Unit::from_column(&column))
            .unwrap_or(builtin.unit);

        NutrientProfile {
            kind,
            column,
            unit,
            content_threshold: self.content_threshold.unwrap_or(builtin.content_threshold),
            daily_limit: self.daily_limit.unwrap_or(builtin.daily_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_builtins() {
        let catalog = Config::default().catalog().unwrap();
        for &kind in NutrientKind::all() {
            assert_eq!(catalog.profile(kind), &NutrientProfile::builtin(kind));
        }
        assert_eq!(catalog.portions().grams(Some(Category::Dairy)), 200.0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{
            "default_nutrient": "sodium",
            "nutrients": { "sodium": { "daily_limit": 2000 } },
            "portions": { "肉類": 100, "egg": 60, "snacks": 30 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_nutrient, NutrientKind::Sodium);
        assert_eq!(config.dataset, DatasetConfig::default());

        let catalog = config.catalog().unwrap();
        let sodium = catalog.profile(NutrientKind::Sodium);
        assert_eq!(sodium.daily_limit, 2000.0);
        assert_eq!(sodium.content_threshold, 200.0);
        assert_eq!(sodium.column, "鈉(mg)");
        assert_eq!(catalog.profile(NutrientKind::Potassium).daily_limit, 1600.0);
        assert_eq!(catalog.portions().grams(Some(Category::Meat)), 100.0);
        assert_eq!(catalog.portions().grams(Some(Category::Egg)), 60.0);
    }

    #[test]
    fn test_unit_inferred_from_custom_column() {
        let settings = NutrientSettings {
            column: Some("fructose(g)".to_string()),
            ..Default::default()
        };
        let profile = settings.resolve(NutrientKind::Sodium);
        assert_eq!(profile.unit, Unit::Gram);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let mut config = Config::default();
        config.nutrients.fructose.daily_limit = Some(-1.0);
        assert!(matches!(config.catalog(), Err(NutrientError::InvalidConfig(_))));

        let mut config = Config::default();
        config.portions.insert("dairy".to_string(), 0.0);
        assert!(matches!(config.catalog(), Err(NutrientError::InvalidConfig(_))));
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);

        let mut config = Config::default();
        config.default_nutrient = NutrientKind::Fructose;
        config.portions.insert("meat".to_string(), 120.0);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
