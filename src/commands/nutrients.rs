//! @acp:module "Reference Commands"
//! @acp:summary "List nutrient profiles and food categories"
//! @acp:domain nutrition
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde_json::json;

use crate::catalog::{Category, NutrientProfile};
use crate::config::Config;
use crate::render::{hex_to_ansi256, RenderFormat};

/// Execute the nutrients command
pub fn execute_nutrients(config: &Config, format: RenderFormat) -> Result<()> {
    let catalog = config.catalog()?;
    let profiles: Vec<&NutrientProfile> = catalog.profiles();

    if format == RenderFormat::Json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    println!("{}", style("Nutrients").bold());
    println!("{}", "=".repeat(60));
    for profile in profiles {
        let marker = if profile.kind == config.default_nutrient { "*" } else { " " };
        println!(
            "{} {:<10} column {:<10} low ≤ {} {} / 100g   daily limit {} {}",
            marker,
            style(profile.kind.name()).cyan(),
            profile.column,
            profile.content_threshold,
            profile.unit,
            profile.daily_limit,
            profile.unit
        );
    }
    Ok(())
}

/// Execute the categories command
pub fn execute_categories(config: &Config, format: RenderFormat) -> Result<()> {
    let catalog = config.catalog()?;
    let portions = catalog.portions();

    if format == RenderFormat::Json {
        let rows: Vec<_> = Category::all()
            .iter()
            .map(|&c| {
                json!({
                    "key": c.key(),
                    "label": c.label(),
                    "portion_grams": portions.grams(Some(c)),
                    "color": c.color(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", style("Categories").bold());
    println!("{}", "=".repeat(60));
    for &category in Category::all() {
        let label = match hex_to_ansi256(category.color()) {
            Some(index) => style(category.label()).color256(index).to_string(),
            None => category.label().to_string(),
        };
        println!(
            "  {:<10} {}  portion {} g  {}",
            category.key(),
            label,
            portions.grams(Some(category)),
            category.color()
        );
    }
    Ok(())
}
