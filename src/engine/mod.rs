//! @acp:module "Nutrient Selection Engine"
//! @acp:summary "Pure filter, partition, grouping, selection, and total functions"
//! @acp:domain nutrition
//! @acp:layer service
//!
//! # Pipeline
//!
//! 1. **Filter** records to the allowed categories
//! 2. **Partition** by the active nutrient's content threshold into low/high
//! 3. **Group** each side by category, keeping insertion order
//! 4. **Toggle** foods in and out of a [`SelectionSet`]
//! 5. **Total** the selection, scaled to portion size, against the daily limit
//!
//! None of these return errors. A missing or unparsable nutrient value counts
//! as zero, and a record without a known category uses the fallback portion.

use serde::Serialize;

use crate::catalog::{Category, FoodRecord, NutrientProfile, PortionTable};

/// Nutrient value of a record, zero when missing or unparsable
pub fn content_of(record: &FoodRecord, profile: &NutrientProfile) -> f64 {
    record.value(&profile.column).unwrap_or(0.0)
}

/// Keep records whose category is one of the allowed set, in order
pub fn filter_to_allowed_categories(records: &[FoodRecord]) -> Vec<FoodRecord> {
    records
        .iter()
        .filter(|r| r.category().is_some())
        .cloned()
        .collect()
}

/// Split records into `(low, high)` around the profile's content threshold
///
/// A value equal to the threshold is low.
pub fn partition_by_threshold<'a>(
    records: &'a [FoodRecord],
    profile: &NutrientProfile,
) -> (Vec<&'a FoodRecord>, Vec<&'a FoodRecord>) {
    records
        .iter()
        .partition(|r| content_of(r, profile) <= profile.content_threshold)
}

/// Records sharing a category, in the order they were seen
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    /// `None` collects records without a recognized category
    pub category: Option<Category>,
    pub records: Vec<&'a FoodRecord>,
}

/// Group records by category
///
/// Groups appear in first-appearance order; records keep input order within
/// each group.
pub fn group_by_category<'a, I>(records: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a FoodRecord>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    for record in records {
        let category = record.category();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.records.push(record),
            None => groups.push(CategoryGroup {
                category,
                records: vec![record],
            }),
        }
    }
    groups
}

/// One displayable food: a normalized name and its representative record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodEntry {
    pub name: String,
    pub content: f64,
    pub record: FoodRecord,
}

/// Collapse records with the same normalized name into one entry
///
/// The record with the highest nutrient value represents the name; the first
/// one wins a tie. Entries keep the position of the name's first appearance.
pub fn dedupe_by_name<'a, I>(records: I, profile: &NutrientProfile) -> Vec<FoodEntry>
where
    I: IntoIterator<Item = &'a FoodRecord>,
{
    let mut entries: Vec<FoodEntry> = Vec::new();
    for record in records {
        let name = record.normalized_name();
        let content = content_of(record, profile);
        match entries.iter_mut().find(|e| e.name == name) {
            Some(entry) if entry.content < content => {
                entry.content = content;
                entry.record = record.clone();
            }
            Some(_) => {}
            None => entries.push(FoodEntry {
                name,
                content,
                record: record.clone(),
            }),
        }
    }
    entries
}

/// The user's picks, unique by normalized name, in pick order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionSet {
    items: Vec<FoodRecord>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodRecord> {
        self.items.iter()
    }

    /// Whether a record with this normalized name is selected
    pub fn contains_name(&self, normalized: &str) -> bool {
        self.items.iter().any(|r| r.normalized_name() == normalized)
    }

    /// Normalized names in pick order
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(FoodRecord::normalized_name).collect()
    }
}

/// Remove the record's name from the selection if present, otherwise append it
///
/// Returns `true` when the record ends up selected.
pub fn toggle_selection(selection: &mut SelectionSet, record: &FoodRecord) -> bool {
    let key = record.normalized_name();
    match selection.items.iter().position(|r| r.normalized_name() == key) {
        Some(index) => {
            selection.items.remove(index);
            tracing::debug!("Deselected {}", key);
            false
        }
        None => {
            selection.items.push(record.clone());
            tracing::debug!("Selected {}", key);
            true
        }
    }
}

/// Portion-adjusted sum of the selection against the daily limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Total {
    pub total: f64,
    pub exceeds_threshold: bool,
}

/// Sum `value * portion / 100` over the selection and compare to the daily limit
pub fn compute_total(
    selection: &SelectionSet,
    profile: &NutrientProfile,
    portions: &PortionTable,
) -> Total {
    let total: f64 = selection
        .iter()
        .map(|r| content_of(r, profile) * portions.grams(r.category()) / 100.0)
        .sum();

    Total {
        total,
        exceeds_threshold: total > profile.daily_limit,
    }
}

/// A fresh, empty selection
pub fn reset_selection() -> SelectionSet {
    SelectionSet::new()
}
