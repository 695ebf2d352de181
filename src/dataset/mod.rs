//! @acp:module "Dataset Loader"
//! @acp:summary "Read the food-composition table into records"
//! @acp:domain nutrition
//! @acp:layer io
//!
//! The table is delimited text with a header row. Only the category and
//! sample-name columns are required; a missing nutrient column is logged and
//! every value for that nutrient reads as absent.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::catalog::{Catalog, Columns, FoodRecord};
use crate::error::{NutrientError, Result};

const BOM: char = '\u{feff}';

/// Load the dataset from disk
pub async fn load<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<Vec<FoodRecord>> {
    let path = path.as_ref();
    tracing::debug!("Reading dataset from {}", path.display());

    let bytes = tokio::fs::read(path).await?;
    let records = from_reader(bytes.as_slice(), catalog)?;

    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a dataset from any reader
pub fn from_reader<R: Read>(reader: R, catalog: &Catalog) -> Result<Vec<FoodRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BOM).trim().to_string())
        .collect();

    check_columns(&headers, catalog)?;

    let columns = catalog.columns();
    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let fields: HashMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        records.push(FoodRecord::from_fields(fields, columns));
    }

    Ok(records)
}

fn check_columns(headers: &[String], catalog: &Catalog) -> Result<()> {
    let has = |column: &str| headers.iter().any(|h| h == column);
    let Columns { category, name } = catalog.columns();

    for required in [category, name] {
        if !has(required) {
            return Err(NutrientError::MissingColumn(required.clone()));
        }
    }

    for profile in catalog.profiles() {
        if !has(&profile.column) {
            tracing::warn!(
                "Dataset has no '{}' column; {} values will read as zero",
                profile.column,
                profile.kind
            );
        }
    }

    Ok(())
}
