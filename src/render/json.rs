//! JSON adapter

use std::io::Write;

use serde::Serialize;

use super::Renderer;
use crate::engine::SelectionSet;
use crate::error::Result;
use crate::session::{NutrientTotal, NutrientView};

/// Pretty-printed JSON, one document per call
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct ViewDocument<'a> {
    #[serde(flatten)]
    view: &'a NutrientView,
    selected: Vec<String>,
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

impl Renderer for JsonRenderer {
    fn render_view(
        &self,
        view: &NutrientView,
        selection: &SelectionSet,
        out: &mut dyn Write,
    ) -> Result<()> {
        let document = ViewDocument {
            view,
            selected: selection.names(),
        };
        write_json(&document, out)
    }

    fn render_selection(&self, selection: &SelectionSet, out: &mut dyn Write) -> Result<()> {
        write_json(&selection.names(), out)
    }

    fn render_total(&self, total: &NutrientTotal, out: &mut dyn Write) -> Result<()> {
        write_json(total, out)
    }
}
