#![forbid(unsafe_code)]

//! @acp:module "Nutrient Library"
//! @acp:summary "Food-composition lookup split by nutrient content with a running daily total"
//! @acp:domain nutrition
//! @acp:layer api
//! @acp:stability stable
//!
//! # nutrient
//!
//! Loads a food-composition table, partitions foods into low and high
//! content for potassium, sodium or fructose, and totals a selection of
//! foods (scaled to typical portions) against a daily limit.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutrient::{dataset, Config, NutrientKind, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let catalog = config.catalog()?;
//!     let records = dataset::load(config.dataset_path(), &catalog).await?;
//!
//!     let mut session = Session::new(records, catalog, NutrientKind::Potassium);
//!     session.toggle("香蕉")?;
//!     println!("{:.2}", session.total().total);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod render;
pub mod session;

// Re-exports
pub use catalog::{
    Catalog, Category, Columns, FoodRecord, NutrientKind, NutrientProfile, PortionTable, Unit,
};
pub use config::Config;
pub use engine::{
    compute_total, dedupe_by_name, filter_to_allowed_categories, group_by_category,
    partition_by_threshold, reset_selection, toggle_selection, CategoryGroup, FoodEntry,
    SelectionSet, Total,
};
pub use error::{NutrientError, Result};
pub use render::{renderer_for, JsonRenderer, RenderFormat, Renderer, TextRenderer};
pub use session::{CategoryView, Level, NutrientTotal, NutrientView, Session, ToggleOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
