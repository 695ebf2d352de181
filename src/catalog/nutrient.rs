//! @acp:module "Nutrient Kinds"
//! @acp:summary "Tracked nutrients, units, and their threshold profiles"
//! @acp:domain nutrition
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NutrientError;

/// Nutrients the tool can analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientKind {
    #[default]
    Potassium,
    Sodium,
    Fructose,
}

impl NutrientKind {
    /// Get all tracked nutrients
    pub fn all() -> &'static [NutrientKind] {
        &[
            NutrientKind::Potassium,
            NutrientKind::Sodium,
            NutrientKind::Fructose,
        ]
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            NutrientKind::Potassium => "potassium",
            NutrientKind::Sodium => "sodium",
            NutrientKind::Fructose => "fructose",
        }
    }

    /// Dataset label without the unit suffix
    pub fn label(&self) -> &'static str {
        match self {
            NutrientKind::Potassium => "鉀",
            NutrientKind::Sodium => "鈉",
            NutrientKind::Fructose => "果糖",
        }
    }

    /// Default dataset column holding this nutrient per 100 g
    pub fn default_column(&self) -> &'static str {
        match self {
            NutrientKind::Potassium => "鉀(mg)",
            NutrientKind::Sodium => "鈉(mg)",
            NutrientKind::Fructose => "果糖(g)",
        }
    }

    /// Per-100 g cutoff separating low from high content foods
    pub fn default_content_threshold(&self) -> f64 {
        match self {
            NutrientKind::Potassium | NutrientKind::Sodium => 200.0,
            NutrientKind::Fructose => 5.0,
        }
    }

    /// Recommended daily upper limit
    pub fn default_daily_limit(&self) -> f64 {
        match self {
            NutrientKind::Potassium => 1600.0,
            NutrientKind::Sodium => 2300.0,
            NutrientKind::Fructose => 50.0,
        }
    }

    pub fn default_unit(&self) -> Unit {
        match self {
            NutrientKind::Potassium | NutrientKind::Sodium => Unit::Milligram,
            NutrientKind::Fructose => Unit::Gram,
        }
    }

    /// Parse a nutrient from its name, symbol, or dataset label
    pub fn from_name(name: &str) -> Option<NutrientKind> {
        match name.trim().to_lowercase().as_str() {
            "potassium" | "k" | "鉀" => Some(NutrientKind::Potassium),
            "sodium" | "na" | "鈉" => Some(NutrientKind::Sodium),
            "fructose" | "果糖" => Some(NutrientKind::Fructose),
            _ => None,
        }
    }
}

impl fmt::Display for NutrientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NutrientKind {
    type Err = NutrientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NutrientKind::from_name(s).ok_or_else(|| NutrientError::UnknownNutrient(s.to_string()))
    }
}

/// Unit a nutrient column is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "mg")]
    Milligram,
    #[serde(rename = "g")]
    Gram,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Milligram => "mg",
            Unit::Gram => "g",
        }
    }

    /// Infer the unit from a column label such as `鉀(mg)`
    pub fn from_column(column: &str) -> Option<Unit> {
        let column = column.trim().to_lowercase();
        if column.ends_with("(mg)") || column.ends_with("（mg）") {
            Some(Unit::Milligram)
        } else if column.ends_with("(g)") || column.ends_with("（g）") {
            Some(Unit::Gram)
        } else {
            None
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Resolved settings for one nutrient: where to read it and how to judge it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientProfile {
    pub kind: NutrientKind,
    pub column: String,
    pub unit: Unit,
    pub content_threshold: f64,
    pub daily_limit: f64,
}

impl NutrientProfile {
    /// Built-in profile for a nutrient
    pub fn builtin(kind: NutrientKind) -> Self {
        Self {
            kind,
            column: kind.default_column().to_string(),
            unit: kind.default_unit(),
            content_threshold: kind.default_content_threshold(),
            daily_limit: kind.default_daily_limit(),
        }
    }
}
