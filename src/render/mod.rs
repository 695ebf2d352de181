//! @acp:module "Render Contract"
//! @acp:summary "Trait for front-end adapters that draw session state"
//! @acp:domain nutrition
//! @acp:layer presentation
//!
//! Front ends differ only in how they draw the same three things: the
//! low/high view, the current selection, and the running total.
//!
//! - Text (terminal, colored by category)
//! - JSON (for scripting)

mod json;
mod text;

use std::io::Write;

pub use json::JsonRenderer;
pub use text::{hex_to_ansi256, TextRenderer};

use crate::engine::SelectionSet;
use crate::error::Result;
use crate::session::{NutrientTotal, NutrientView};

/// Front-end adapter trait - implement for each output surface
pub trait Renderer {
    /// Draw the grouped low/high lists, marking selected foods
    fn render_view(
        &self,
        view: &NutrientView,
        selection: &SelectionSet,
        out: &mut dyn Write,
    ) -> Result<()>;

    /// Draw the picked foods in pick order
    fn render_selection(&self, selection: &SelectionSet, out: &mut dyn Write) -> Result<()>;

    /// Draw the running total against the daily limit
    fn render_total(&self, total: &NutrientTotal, out: &mut dyn Write) -> Result<()>;
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
}

/// Pick the adapter for a format
pub fn renderer_for(format: RenderFormat) -> Box<dyn Renderer> {
    match format {
        RenderFormat::Text => Box::new(TextRenderer::new()),
        RenderFormat::Json => Box::new(JsonRenderer),
    }
}
