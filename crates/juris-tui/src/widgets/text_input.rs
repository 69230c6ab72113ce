//! Single-line text input: a bordered box with a label in the title.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct TextInputState {
    pub value: String,
    /// Byte offset of the cursor within `value`.
    pub cursor: usize,
    /// Maximum number of characters; `None` for unlimited.
    pub max_chars: Option<usize>,
}

impl TextInputState {
    pub fn with_max_chars(max: usize) -> Self {
        Self {
            max_chars: Some(max),
            ..Self::default()
        }
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Apply an editing event. Returns `true` if the event was consumed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                if self.max_chars.is_some_and(|max| self.value.chars().count() >= max) {
                    return true;
                }
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.value.remove(prev);
                    self.cursor = prev;
                }
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = self.prev_boundary();
                true
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.value.len() {
                    self.cursor = self.value[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.value.len());
                }
                true
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct TextInput<'a> {
    state: &'a TextInputState,
    label: &'a str,
    placeholder: &'a str,
    /// Text shown after the value, e.g. the state name after its sigla.
    suffix: Option<&'a str>,
    focused: bool,
    disabled: bool,
    theme: &'a Theme,
}

impl<'a> TextInput<'a> {
    pub fn new(state: &'a TextInputState, label: &'a str, theme: &'a Theme) -> Self {
        Self {
            state,
            label,
            placeholder: "",
            suffix: None,
            focused: false,
            disabled: false,
            theme,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn suffix(mut self, suffix: Option<&'a str>) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Absolute terminal position of the text cursor within `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.value[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.label), self.theme.form_label))
            .border_style(self.theme.border(self.focused && !self.disabled));
        let inner = block.inner(area);
        block.render(area, buf);

        let value_style = if self.disabled {
            self.theme.form_disabled
        } else {
            self.theme.form_input
        };

        let line = if self.state.value.is_empty() && !self.focused {
            Line::from(Span::styled(self.placeholder, self.theme.form_placeholder))
        } else {
            let mut spans = vec![Span::styled(self.state.value.as_str(), value_style)];
            if let Some(suffix) = self.suffix {
                spans.push(Span::styled(format!(": {suffix}"), self.theme.dim));
            }
            Line::from(spans)
        };
        Paragraph::new(line).render(inner, buf);
    }
}
