//! Tab bar: the two query tabs at the top of the screen.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Tabs, Widget},
};

pub const TAB_LABELS: [&str; 2] = ["F1 Processo", "F2 Jurisprudência"];

/// Renders the 1-line tab strip.
///
/// A `●` suffix marks tabs with a request in flight. Keybinding hints are
/// right-aligned in the same row.
pub struct TabBar<'a> {
    active: usize,
    loading: [bool; 2],
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: usize, loading: [bool; 2], theme: &'a Theme) -> Self {
        Self { active, loading, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = TAB_LABELS
            .iter()
            .zip(self.loading)
            .map(|(label, loading)| {
                let marker = if loading { " ●" } else { "" };
                Line::from(format!(" {label}{marker} "))
            })
            .collect();

        Tabs::new(labels)
            .select(self.active)
            .highlight_style(self.theme.border_focused.add_modifier(Modifier::REVERSED))
            .divider("")
            .render(area, buf);

        let hint = " Ctrl+c:sair  ?:ajuda ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, self.theme.dim);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_tab_is_marked() {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(1, [false, true], &theme).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains("F1 Processo "));
        assert!(row.contains("F2 Jurisprudência ●"));
        assert!(row.trim_end().ends_with("?:ajuda"));
    }
}
