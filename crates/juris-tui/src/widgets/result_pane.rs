//! Scrollable result pane shared by both tabs.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Scroll up one line (pane focused) |
//! | `↓` / `j` | Scroll down one line (pane focused) |
//! | `PageUp` / `Ctrl+u` | Scroll up one page (any focus) |
//! | `PageDown` / `Ctrl+d` | Scroll down one page (any focus) |
//!
//! `offset` is the first visible row. Long lines wrap, so the row count is
//! estimated from line widths at render time and cached, together with the
//! viewport height, for clamping in `handle()`.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
        Wrap,
    },
};

#[derive(Debug, Default)]
pub struct ResultPaneState {
    pub offset: usize,
    last_height: Cell<usize>,
    last_len: Cell<usize>,
}

impl ResultPaneState {
    fn page(&self) -> usize {
        self.last_height.get().max(1)
    }

    fn max_offset(&self) -> usize {
        self.last_len.get().saturating_sub(self.page())
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let before = self.offset;
        match event {
            AppEvent::Nav(Direction::Up) => self.offset = self.offset.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.offset = (self.offset + 1).min(self.max_offset()),
            AppEvent::ScrollUp => self.offset = self.offset.saturating_sub(self.page()),
            AppEvent::ScrollDown => {
                self.offset = (self.offset + self.page()).min(self.max_offset())
            }
            _ => return,
        }
        if before != self.offset {
            tracing::debug!(offset = self.offset, "results: scrolled");
        }
    }

    /// Back to the top, e.g. when a new result arrives.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

pub struct ResultPane<'a> {
    state: &'a ResultPaneState,
    lines: Vec<Line<'a>>,
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultPane<'a> {
    pub fn new(
        state: &'a ResultPaneState,
        lines: Vec<Line<'a>>,
        title: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, lines, title, focused, theme }
    }
}

impl Widget for ResultPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.title), self.theme.result_title))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        let width = (inner.width as usize).max(1);
        let total: usize = self
            .lines
            .iter()
            .map(|l| l.width().div_ceil(width).max(1))
            .sum();
        self.state.last_height.set(height);
        self.state.last_len.set(total);

        let offset = self.state.offset.min(total.saturating_sub(height));
        Paragraph::new(self.lines)
            .wrap(Wrap { trim: false })
            .scroll((offset as u16, 0))
            .render(inner, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total.saturating_sub(height)).position(offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight).render(
                area.inner(Margin { vertical: 1, horizontal: 0 }),
                buf,
                &mut sb_state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::from(format!("linha {i}"))).collect()
    }

    fn render(state: &ResultPaneState, n: usize, height: u16) -> Buffer {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 30, height);
        let mut buf = Buffer::empty(area);
        ResultPane::new(state, lines(n), "Resultado", false, &theme).render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn scrolling_is_clamped_to_content() {
        let mut state = ResultPaneState::default();
        render(&state, 20, 7); // 5 visible lines
        state.handle(&AppEvent::ScrollDown);
        assert_eq!(state.offset, 5);
        for _ in 0..10 {
            state.handle(&AppEvent::ScrollDown);
        }
        assert_eq!(state.offset, 15);
        state.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(state.offset, 14);
        state.handle(&AppEvent::ScrollUp);
        state.handle(&AppEvent::ScrollUp);
        state.handle(&AppEvent::ScrollUp);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn short_content_does_not_scroll() {
        let mut state = ResultPaneState::default();
        render(&state, 3, 10);
        state.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn wrapped_lines_count_as_rows() {
        let mut state = ResultPaneState::default();
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 12, 5);
        let mut buf = Buffer::empty(area);
        // 10 columns inside the borders: 25 chars wrap onto 3 rows.
        let long = vec![Line::from("x".repeat(25)), Line::from("fim")];
        ResultPane::new(&state, long, "R", false, &theme).render(area, &mut buf);
        state.handle(&AppEvent::ScrollDown);
        assert_eq!(state.offset, 1);
    }

    #[test]
    fn renders_from_offset() {
        let mut state = ResultPaneState::default();
        render(&state, 20, 7);
        state.handle(&AppEvent::Nav(Direction::Down));
        let buf = render(&state, 20, 7);
        assert!(row(&buf, 1).contains("linha 1"), "got {:?}", row(&buf, 1));
        assert!(row(&buf, 0).contains("Resultado"));
    }
}
