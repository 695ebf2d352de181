//! @acp:module "List Command"
//! @acp:summary "Show foods split into low and high content for a nutrient"
//! @acp:domain nutrition
//! @acp:layer handler

use anyhow::Result;

use super::loader::{load_session, DataOptions};
use crate::config::Config;
use crate::render::{renderer_for, RenderFormat};
use crate::session::{Level, NutrientView, Session};

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub data: DataOptions,
    /// Only show one side of the threshold
    pub level: Option<Level>,
    pub format: RenderFormat,
}

/// Execute the list command
pub async fn execute_list(options: ListOptions, config: &Config) -> Result<()> {
    let session = load_session(&options.data, config).await?;
    let view = filtered_view(&session, options.level);

    let renderer = renderer_for(options.format);
    let mut stdout = std::io::stdout().lock();
    renderer.render_view(&view, session.selection(), &mut stdout)?;
    Ok(())
}

/// Session view with the other side emptied when a level is requested
pub fn filtered_view(session: &Session, level: Option<Level>) -> NutrientView {
    let mut view = session.view();
    match level {
        Some(Level::Low) => view.high.clear(),
        Some(Level::High) => view.low.clear(),
        None => {}
    }
    view
}
