//! Help popup: centred floating overlay listing the keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("F1  /  F2", "Consulta de processo / jurisprudência"),
    ("Tab  /  Shift+Tab", "Próximo / campo anterior"),
    ("Enter", "Consultar, ou adicionar palavra-chave"),
    ("↑  /  ↓", "Trocar estado, ou rolar o resultado"),
    ("←  /  →", "Mover cursor, ou escolher sugestão"),
    ("PageUp  /  Ctrl+u", "Rolar resultado para cima"),
    ("PageDown  /  Ctrl+d", "Rolar resultado para baixo"),
    ("Ctrl+n", "Nova consulta"),
    ("Ctrl+r", "Gerar resumo das movimentações"),
    ("Esc", "Sair do campo / fechar aviso"),
    (":", "Comandos: q, help, theme, novo, pagina, regra"),
    ("?", "Mostrar / ocultar esta ajuda"),
    ("q  /  Ctrl+c", "Sair"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(72, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" juris: atalhos (? para fechar) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<22}"), self.theme.result_label),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
