//! @acp:module "Catalog"
//! @acp:summary "Domain types: categories, nutrients, records, and resolved thresholds"
//! @acp:domain nutrition
//! @acp:layer model
//!
//! A [`Catalog`] is the resolved, configuration-driven view of the fixed
//! domain tables: one [`NutrientProfile`] per nutrient and a [`PortionTable`].
//! The engine reads thresholds and portions only through it.

pub mod category;
pub mod nutrient;
pub mod record;

use std::collections::HashMap;

pub use category::{color_for, Category, FALLBACK_COLOR, FALLBACK_PORTION_GRAMS, UNKNOWN_CATEGORY_LABEL};
pub use nutrient::{NutrientKind, NutrientProfile, Unit};
pub use record::{normalize_name, parse_nutrient_value, Columns, FoodRecord};

/// Portion size per category, with overrides applied over the built-ins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortionTable {
    overrides: HashMap<Category, f64>,
}

impl PortionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the portion for one category
    pub fn with_override(mut self, category: Category, grams: f64) -> Self {
        self.overrides.insert(category, grams);
        self
    }

    /// Portion in grams; unknown categories use the fallback
    pub fn grams(&self, category: Option<Category>) -> f64 {
        match category {
            Some(c) => self.overrides.get(&c).copied().unwrap_or_else(|| c.portion_grams()),
            None => FALLBACK_PORTION_GRAMS,
        }
    }
}

/// Nutrient profiles and portion table resolved from configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    profiles: HashMap<NutrientKind, NutrientProfile>,
    portions: PortionTable,
    columns: Columns,
}

impl Catalog {
    pub fn new(profiles: Vec<NutrientProfile>, portions: PortionTable, columns: Columns) -> Self {
        let mut by_kind: HashMap<NutrientKind, NutrientProfile> = NutrientKind::all()
            .iter()
            .map(|&k| (k, NutrientProfile::builtin(k)))
            .collect();
        for profile in profiles {
            by_kind.insert(profile.kind, profile);
        }

        Self {
            profiles: by_kind,
            portions,
            columns,
        }
    }

    /// Profile for a nutrient; every kind always has one
    pub fn profile(&self, kind: NutrientKind) -> &NutrientProfile {
        &self.profiles[&kind]
    }

    /// Profiles in [`NutrientKind::all`] order
    pub fn profiles(&self) -> Vec<&NutrientProfile> {
        NutrientKind::all().iter().map(|&k| self.profile(k)).collect()
    }

    pub fn portions(&self) -> &PortionTable {
        &self.portions
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new(), PortionTable::default(), Columns::default())
    }
}
