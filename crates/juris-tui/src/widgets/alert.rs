//! Error and notice surfaces: inline alert box, toast and modal.

use std::time::{Duration, Instant};

use crate::theme::Theme;
use crate::widgets::help::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

/// A transient notification with an expiry time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Bordered box with a title and a wrapped message.
pub struct AlertBox<'a> {
    title: &'a str,
    message: &'a str,
    style: Style,
}

impl<'a> AlertBox<'a> {
    pub fn error(message: &'a str, theme: &Theme) -> Self {
        Self { title: "Erro na consulta", message, style: theme.alert_error }
    }

    pub fn new(title: &'a str, message: &'a str, style: Style) -> Self {
        Self { title, message, style }
    }
}

impl Widget for AlertBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.title), self.style))
            .border_style(self.style);
        Paragraph::new(Line::from(Span::styled(self.message, self.style)))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Toast in the top-right corner.
pub struct ToastPopup<'a> {
    toast: &'a Toast,
    theme: &'a Theme,
}

impl<'a> ToastPopup<'a> {
    pub fn new(toast: &'a Toast, theme: &'a Theme) -> Self {
        Self { toast, theme }
    }
}

impl Widget for ToastPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.toast.message.chars().count() as u16 + 4)
            .max(20)
            .min(area.width.saturating_sub(2));
        if width == 0 {
            return;
        }
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height: 3.min(area.height),
        };
        Clear.render(rect, buf);
        AlertBox::new("Aviso", &self.toast.message, self.theme.toast).render(rect, buf);
    }
}

/// Centred modal, closed with `Esc` or `Enter`.
pub struct Modal<'a> {
    title: &'a str,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str, message: &'a str, theme: &'a Theme) -> Self {
        Self { title, message, theme }
    }
}

impl Widget for Modal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(60, 7, area);
        Clear.render(popup, buf);
        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.title), self.theme.alert_not_found))
            .title_bottom(Span::styled(" Esc/Enter para fechar ", self.theme.dim))
            .border_style(self.theme.alert_not_found);
        Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(format!("❌ {}", self.message), self.theme.alert_not_found)),
        ])
        .wrap(Wrap { trim: true })
        .block(block)
        .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn toast_expires_after_ttl() {
        let now = Instant::now();
        let toast = Toast::new("x", now, Duration::from_secs(4));
        assert!(!toast.expired(now + Duration::from_secs(3)));
        assert!(toast.expired(now + Duration::from_secs(4)));
    }

    #[test]
    fn alert_box_shows_title_and_message() {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        AlertBox::error("Erro na consulta: 500", &theme).render(area, &mut buf);
        let out = screen(&buf);
        assert!(out.contains("Erro na consulta "));
        assert!(out.contains("Erro na consulta: 500"));
    }

    #[test]
    fn modal_is_centred_and_closable() {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Modal::new("Processo não encontrado", "Sem registros", &theme).render(area, &mut buf);
        let out = screen(&buf);
        assert!(out.contains("Sem registros"));
        assert!(out.contains("Processo não encontrado"));
        assert!(out.contains("Esc/Enter para fechar"));
    }
}
