//! Vim-style command bar, a single-line overlay at the bottom of the screen.
//!
//! Opened with `:` outside text fields. `Enter` parses and runs the command;
//! `Escape` cancels. A parse error keeps the bar open and is shown in place
//! of the prompt until the next key.
//!
//! See [`crate::commands::Command`] for the accepted commands.

use crate::event::AppEvent;
use crate::theme::Theme;
use crate::widgets::text_input::TextInputState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

#[derive(Debug, Default)]
pub struct CommandBarState {
    /// The text typed after the `:` prefix.
    pub input: TextInputState,
    /// Error from the last failed command, cleared on the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    /// Editing keys while the bar is open. `Enter`/`Escape` belong to the
    /// app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;
        self.input.handle(event);
    }

    /// Absolute terminal column of the text cursor within `area`.
    ///
    /// The `:` glyph occupies column 0, so the cursor starts at column 1.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = 1 + self.input.value[..self.input.cursor].chars().count() as u16;
        (area.x + col).min(area.right().saturating_sub(1))
    }
}

pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(format!("E  {err}"), self.theme.alert_error))
        } else {
            Line::from(vec![
                Span::styled(":", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(self.state.input.value.as_str()),
            ])
        };

        buf.set_style(area, self.theme.border_command_bar);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Direction;

    #[test]
    fn char_insert_and_backspace() {
        let mut s = CommandBarState::default();
        for c in "foo".chars() {
            s.handle(&AppEvent::Char(c));
        }
        assert_eq!(s.input.value, "foo");
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input.value, "fo");
        assert_eq!(s.cursor_col(Rect::new(0, 0, 80, 1)), 3);
    }

    #[test]
    fn error_cleared_on_next_key() {
        let mut s = CommandBarState::default();
        s.error = Some("oops".to_string());
        s.handle(&AppEvent::Nav(Direction::Left));
        assert!(s.error.is_none());
    }

    #[test]
    fn renders_prompt_or_error() {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 20, 1);
        let mut s = CommandBarState::default();
        s.input.set("novo");
        let mut buf = Buffer::empty(area);
        CommandBar::new(&s, &theme).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with(":novo"));

        s.error = Some("comando".into());
        let mut buf = Buffer::empty(area);
        CommandBar::new(&s, &theme).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with("E  comando"));
    }
}
