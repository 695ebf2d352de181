//! @acp:module "Total Command"
//! @acp:summary "Toggle named foods and report the portion-adjusted total"
//! @acp:domain nutrition
//! @acp:layer handler

use anyhow::Result;
use console::style;

use super::loader::{load_session, DataOptions};
use crate::config::Config;
use crate::error::NutrientError;
use crate::render::{renderer_for, RenderFormat};
use crate::session::Session;

/// Options for the total command
#[derive(Debug, Clone, Default)]
pub struct TotalOptions {
    pub data: DataOptions,
    /// Foods to toggle, in order; naming a food twice deselects it
    pub foods: Vec<String>,
    pub format: RenderFormat,
}

/// Execute the total command
pub async fn execute_total(options: TotalOptions, config: &Config) -> Result<()> {
    let mut session = load_session(&options.data, config).await?;
    apply_toggles(&mut session, &options.foods)?;

    let renderer = renderer_for(options.format);
    let mut stdout = std::io::stdout().lock();
    if options.format == RenderFormat::Text {
        renderer.render_selection(session.selection(), &mut stdout)?;
    }
    renderer.render_total(&session.total(), &mut stdout)?;
    Ok(())
}

/// Toggle each food in order, suggesting close names for unknown ones
pub fn apply_toggles(session: &mut Session, foods: &[String]) -> Result<()> {
    for food in foods {
        match session.toggle(food) {
            Ok(outcome) => tracing::debug!("{} -> {:?}", food, outcome),
            Err(NutrientError::UnknownFood(name)) => {
                eprintln!("{} Unknown food: {}", style("✗").red(), name);
                let matches = session.search(&name);
                if !matches.is_empty() {
                    let names: Vec<_> = matches.iter().take(10).map(|e| e.name.as_str()).collect();
                    eprintln!("  Did you mean: {}", names.join(", "));
                }
                return Err(NutrientError::UnknownFood(name).into());
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
