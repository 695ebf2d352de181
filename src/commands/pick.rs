//! @acp:module "Pick Command"
//! @acp:summary "Interactive multi-select of foods with a running total"
//! @acp:domain nutrition
//! @acp:layer handler
//!
//! Terminal counterpart of clicking foods on a page: the user toggles foods
//! with a multi-select, switches nutrient (which clears the picks), and
//! watches the total against the daily limit.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use super::loader::{load_session, DataOptions};
use crate::catalog::{FoodRecord, NutrientKind};
use crate::config::Config;
use crate::engine::FoodEntry;
use crate::render::{Renderer, TextRenderer};
use crate::session::{Level, Session};

/// Options for the pick command
#[derive(Debug, Clone, Default)]
pub struct PickOptions {
    pub data: DataOptions,
}

const ACTIONS: &[&str] = &[
    "Select foods",
    "Switch nutrient",
    "Show lists",
    "Show selection",
    "Clear selection",
    "Quit",
];

/// Execute the pick command
pub async fn execute_pick(options: PickOptions, config: &Config) -> Result<()> {
    let mut session = load_session(&options.data, config).await?;
    let renderer = TextRenderer::new();
    let theme = ColorfulTheme::default();

    println!(
        "{} {} foods loaded",
        style("✓").green(),
        session.records().len()
    );

    loop {
        println!();
        renderer.render_total(&session.total(), &mut std::io::stdout())?;

        let action = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => select_foods(&mut session, &theme)?,
            1 => switch_nutrient(&mut session, &theme)?,
            2 => renderer.render_view(&session.view(), session.selection(), &mut std::io::stdout())?,
            3 => renderer.render_selection(session.selection(), &mut std::io::stdout())?,
            4 => {
                session.clear();
                println!("{} Selection cleared", style("✓").green());
            }
            _ => break,
        }
    }

    Ok(())
}

fn select_foods(session: &mut Session, theme: &ColorfulTheme) -> Result<()> {
    let view = session.view();
    let unit = view.profile.unit;

    let mut entries = Vec::new();
    let mut items = Vec::new();
    for level in [Level::Low, Level::High] {
        let tag = match level {
            Level::Low => "low",
            Level::High => "high",
        };
        for group in view.side(level) {
            for entry in &group.entries {
                items.push(format!(
                    "{} ({} {} / 100g, {}, {})",
                    entry.name, entry.content, unit, group.label, tag
                ));
                entries.push(entry);
            }
        }
    }

    if items.is_empty() {
        println!("{} No foods to choose from", style("!").yellow());
        return Ok(());
    }

    let defaults: Vec<bool> = entries
        .iter()
        .map(|e| session.selected_record(&e.name) == Some(&e.record))
        .collect();
    let chosen = MultiSelect::with_theme(theme)
        .with_prompt("Toggle foods (space to pick, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    apply_choices(session, &entries, &chosen);
    Ok(())
}

/// Bring the selection in line with the ticked entries
///
/// Entries sharing a name are one food: the first ticked entry of a name is
/// the record kept, and each name changes state at most once.
fn apply_choices(session: &mut Session, entries: &[&FoodEntry], chosen: &[usize]) {
    let mut wanted: Vec<(&str, Option<&FoodRecord>)> = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let ticked = chosen.contains(&index).then_some(&entry.record);
        match wanted.iter_mut().find(|(name, _)| *name == entry.name) {
            Some((_, record)) => {
                if record.is_none() {
                    *record = ticked;
                }
            }
            None => wanted.push((entry.name.as_str(), ticked)),
        }
    }

    for (name, record) in wanted {
        let current = session.selected_record(name).cloned();
        match (current, record) {
            (Some(current), Some(record)) if current != *record => {
                session.toggle_record(&current);
                session.toggle_record(record);
            }
            (Some(current), None) => {
                session.toggle_record(&current);
            }
            (None, Some(record)) => {
                session.toggle_record(record);
            }
            _ => {}
        }
    }
}

fn switch_nutrient(session: &mut Session, theme: &ColorfulTheme) -> Result<()> {
    let kinds = NutrientKind::all();
    let items: Vec<String> = kinds
        .iter()
        .map(|k| format!("{} ({})", k.name(), k.label()))
        .collect();
    let current = kinds.iter().position(|&k| k == session.nutrient()).unwrap_or(0);

    let index = Select::with_theme(theme)
        .with_prompt("Nutrient")
        .items(&items)
        .default(current)
        .interact()?;

    session.select_nutrient(kinds[index]);
    println!(
        "{} Now tracking {}; selection cleared",
        style("✓").green(),
        kinds[index]
    );
    Ok(())
}
