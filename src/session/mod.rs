//! @acp:module "Session"
//! @acp:summary "Controller owning the dataset, active nutrient, and selection"
//! @acp:domain nutrition
//! @acp:layer service
//!
//! The session is the only holder of mutable state. Every query goes through
//! the engine's pure functions with the session's state passed explicitly.

use serde::Serialize;

use crate::catalog::{color_for, Catalog, Category, FoodRecord, NutrientKind, NutrientProfile, Unit};
use crate::engine::{self, FoodEntry, SelectionSet};
use crate::error::{NutrientError, Result};

/// Which side of the content threshold a list holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    High,
}

/// Deduplicated foods of one category, ready to display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub category: Option<Category>,
    pub label: String,
    pub color: &'static str,
    pub entries: Vec<FoodEntry>,
}

/// Everything a front end needs to draw the current nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientView {
    pub profile: NutrientProfile,
    pub low: Vec<CategoryView>,
    pub high: Vec<CategoryView>,
}

impl NutrientView {
    pub fn side(&self, level: Level) -> &[CategoryView] {
        match level {
            Level::Low => &self.low,
            Level::High => &self.high,
        }
    }

    /// All entries across both sides, low first
    pub fn entries(&self) -> impl Iterator<Item = &FoodEntry> {
        self.low
            .iter()
            .chain(self.high.iter())
            .flat_map(|group| group.entries.iter())
    }
}

/// Running total for the active nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientTotal {
    pub kind: NutrientKind,
    pub total: f64,
    pub limit: f64,
    pub unit: Unit,
    pub exceeds: bool,
}

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
}

/// @acp:summary "Interactive state for one lookup session"
#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<FoodRecord>,
    catalog: Catalog,
    active: NutrientKind,
    selection: SelectionSet,
}

impl Session {
    /// Start a session; records outside the allowed categories are dropped
    pub fn new(records: Vec<FoodRecord>, catalog: Catalog, nutrient: NutrientKind) -> Self {
        let total = records.len();
        let records = engine::filter_to_allowed_categories(&records);
        tracing::debug!("Kept {} of {} records in allowed categories", records.len(), total);

        Self {
            records,
            catalog,
            active: nutrient,
            selection: engine::reset_selection(),
        }
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn nutrient(&self) -> NutrientKind {
        self.active
    }

    pub fn profile(&self) -> &NutrientProfile {
        self.catalog.profile(self.active)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Switch the active nutrient; the selection is always cleared
    pub fn select_nutrient(&mut self, nutrient: NutrientKind) {
        tracing::debug!("Switching nutrient {} -> {}", self.active, nutrient);
        self.active = nutrient;
        self.selection = engine::reset_selection();
    }

    /// Low/high lists grouped by category for the active nutrient
    pub fn view(&self) -> NutrientView {
        let profile = self.profile();
        let (low, high) = engine::partition_by_threshold(&self.records, profile);

        NutrientView {
            profile: profile.clone(),
            low: self.category_views(low, profile),
            high: self.category_views(high, profile),
        }
    }

    fn category_views(&self, records: Vec<&FoodRecord>, profile: &NutrientProfile) -> Vec<CategoryView> {
        engine::group_by_category(records)
            .into_iter()
            .map(|group| CategoryView {
                category: group.category,
                label: group
                    .category
                    .map(|c| c.label().to_string())
                    .unwrap_or_else(|| crate::catalog::UNKNOWN_CATEGORY_LABEL.to_string()),
                color: color_for(group.category),
                entries: engine::dedupe_by_name(group.records, profile),
            })
            .collect()
    }

    /// Toggle the food whose normalized name matches `name`
    ///
    /// A name listed more than once resolves to its highest-value entry.
    pub fn toggle(&mut self, name: &str) -> Result<ToggleOutcome> {
        let key = crate::catalog::normalize_name(name);
        let view = self.view();
        let entry = view
            .entries()
            .filter(|e| e.name == key)
            .fold(None, |best: Option<&FoodEntry>, e| match best {
                Some(b) if b.content >= e.content => Some(b),
                _ => Some(e),
            })
            .ok_or_else(|| NutrientError::UnknownFood(name.to_string()))?;

        Ok(self.toggle_record(&entry.record))
    }

    /// Toggle one specific record, as when a listed entry is picked
    pub fn toggle_record(&mut self, record: &FoodRecord) -> ToggleOutcome {
        if engine::toggle_selection(&mut self.selection, record) {
            ToggleOutcome::Selected
        } else {
            ToggleOutcome::Deselected
        }
    }

    /// The selected record standing for `name`, if any
    pub fn selected_record(&self, name: &str) -> Option<&FoodRecord> {
        let key = crate::catalog::normalize_name(name);
        self.selection.iter().find(|r| r.normalized_name() == key)
    }

    /// Whether a food (by any spelling of its name) is selected
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_record(name).is_some()
    }

    /// Normalized names of the selection, in pick order
    pub fn selected_names(&self) -> Vec<String> {
        self.selection.names()
    }

    pub fn total(&self) -> NutrientTotal {
        let profile = self.profile();
        let total = engine::compute_total(&self.selection, profile, self.catalog.portions());

        NutrientTotal {
            kind: self.active,
            total: total.total,
            limit: profile.daily_limit,
            unit: profile.unit,
            exceeds: total.exceeds_threshold,
        }
    }

    /// Clear the selection without changing nutrient
    pub fn clear(&mut self) {
        self.selection = engine::reset_selection();
    }

    /// Entries whose normalized name contains `query`
    pub fn search(&self, query: &str) -> Vec<FoodEntry> {
        let query = query.trim();
        self.view()
            .entries()
            .filter(|e| e.name.contains(query))
            .cloned()
            .collect()
    }
}
