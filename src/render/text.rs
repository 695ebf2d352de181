//! Terminal adapter

use std::io::Write;

use console::style;

use super::Renderer;
use crate::engine::SelectionSet;
use crate::error::Result;
use crate::session::{CategoryView, Level, NutrientTotal, NutrientView};

const NO_DATA: &str = "無資料";
const NOTHING_SELECTED: &str = "沒有選擇任何食品。";

/// Plain terminal output; headings take their category's color
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    /// Disable colors regardless of terminal support
    plain: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that never emits escape codes
    pub fn plain() -> Self {
        Self { plain: true }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        match hex_to_ansi256(color) {
            Some(index) if !self.plain => style(text).color256(index).bold().to_string(),
            _ => text.to_string(),
        }
    }

    fn mark(&self, text: &str, selected: bool) -> String {
        if !selected {
            return text.to_string();
        }
        if self.plain {
            format!("* {text}")
        } else {
            format!("{} {}", style("✓").green(), style(text).green().bold())
        }
    }

    fn render_side(
        &self,
        level: Level,
        groups: &[CategoryView],
        view: &NutrientView,
        selection: &SelectionSet,
        out: &mut dyn Write,
    ) -> Result<()> {
        let profile = &view.profile;
        let (title, cmp) = match level {
            Level::Low => ("低含量", "≤"),
            Level::High => ("高含量", ">"),
        };
        writeln!(
            out,
            "── {title} ({cmp} {} {} / 100g) ──",
            profile.content_threshold, profile.unit
        )?;

        if groups.is_empty() {
            writeln!(out, "  (none)")?;
            return Ok(());
        }

        for group in groups {
            writeln!(out, "■ {}", self.paint(&group.label, group.color))?;
            for entry in &group.entries {
                let content = if entry.content == 0.0 {
                    NO_DATA.to_string()
                } else {
                    entry.content.to_string()
                };
                let name = self.mark(&entry.name, selection.contains_name(&entry.name));
                writeln!(out, "    {name}  {content}")?;
            }
        }
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render_view(
        &self,
        view: &NutrientView,
        selection: &SelectionSet,
        out: &mut dyn Write,
    ) -> Result<()> {
        let profile = &view.profile;
        writeln!(
            out,
            "{} (每日建議上限 {} {})",
            profile.kind.label(),
            profile.daily_limit,
            profile.unit
        )?;
        self.render_side(Level::Low, &view.low, view, selection, out)?;
        self.render_side(Level::High, &view.high, view, selection, out)?;
        Ok(())
    }

    fn render_selection(&self, selection: &SelectionSet, out: &mut dyn Write) -> Result<()> {
        if selection.is_empty() {
            writeln!(out, "{NOTHING_SELECTED}")?;
            return Ok(());
        }
        for name in selection.names() {
            writeln!(out, "  - {name}")?;
        }
        Ok(())
    }

    fn render_total(&self, total: &NutrientTotal, out: &mut dyn Write) -> Result<()> {
        let amount = format!("{:.2} {}", total.total, total.unit);
        let amount = if total.exceeds && !self.plain {
            style(amount).red().bold().to_string()
        } else {
            amount
        };
        write!(
            out,
            "{} 總計: {} (每日建議上限 {} {})",
            total.kind.label(),
            amount,
            total.limit,
            total.unit
        )?;
        if total.exceeds {
            write!(out, "  ⚠ 超過每日建議上限")?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Nearest xterm 256-color cube index for a `#RRGGBB` color
pub fn hex_to_ansi256(hex: &str) -> Option<u8> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let level = |c: u8| ((c as u16 * 5 + 127) / 255) as u8;
    Some(16 + 36 * level(r) + 6 * level(g) + level(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, FoodRecord, NutrientKind};
    use crate::session::Session;

    fn session() -> Session {
        let records = vec![
            FoodRecord::new("鮮乳(全脂)", "乳品類").with_value("鉀(mg)", "150"),
            FoodRecord::new("白飯", "穀物類"),
            FoodRecord::new("菠菜", "蔬菜類").with_value("鉀(mg)", "510"),
        ];
        Session::new(records, Catalog::default(), NutrientKind::Potassium)
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_hex_to_ansi256() {
        assert_eq!(hex_to_ansi256("#000000"), Some(16));
        assert_eq!(hex_to_ansi256("#FFFFFF"), Some(231));
        assert_eq!(hex_to_ansi256("#FF0000"), Some(196));
        assert_eq!(hex_to_ansi256("F4F4F4"), Some(231));
        assert_eq!(hex_to_ansi256("#FFF"), None);
        assert_eq!(hex_to_ansi256("#GG0000"), None);
    }

    #[test]
    fn test_render_view_marks_selection() {
        let mut session = session();
        session.toggle("鮮乳").unwrap();
        let renderer = TextRenderer::plain();

        let text = render(|out| renderer.render_view(&session.view(), session.selection(), out));
        assert!(text.starts_with("鉀 (每日建議上限 1600 mg)"));
        assert!(text.contains("── 低含量 (≤ 200 mg / 100g) ──"));
        assert!(text.contains("■ 乳品類"));
        assert!(text.contains("* 鮮乳  150"));
        assert!(text.contains("白飯  無資料"));
        assert!(text.contains("    菠菜  510"));
    }

    #[test]
    fn test_render_empty_selection() {
        let renderer = TextRenderer::plain();
        let text = render(|out| renderer.render_selection(&SelectionSet::new(), out));
        assert_eq!(text, "沒有選擇任何食品。\n");
    }

    #[test]
    fn test_render_total_warning() {
        let mut session = session();
        session.toggle("菠菜").unwrap();
        let renderer = TextRenderer::plain();

        let text = render(|out| renderer.render_total(&session.total(), out));
        assert_eq!(text, "鉀 總計: 510.00 mg (每日建議上限 1600 mg)\n");

        let mut total = session.total();
        total.total = 1700.0;
        total.exceeds = true;
        let text = render(|out| renderer.render_total(&total, out));
        assert!(text.contains("1700.00 mg"));
        assert!(text.contains("⚠ 超過每日建議上限"));
    }
}
