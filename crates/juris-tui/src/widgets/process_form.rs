//! Process lookup form: process number plus state.
//!
//! The state field accepts a typed sigla (upper-cased, two letters) or can
//! be cycled through the 27 states with `↑`/`↓`.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::text_input::{TextInput, TextInputState};
use juris_core::states::{self, STATES};
use juris_core::validation::{validate_process_query, ProcessNumberRule};
use juris_core::{ProcessQuery, ValidationError};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessField {
    #[default]
    Numero,
    Estado,
}

/// What the form asks the app shell to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
}

#[derive(Debug, Clone)]
pub struct ProcessFormState {
    pub numero: TextInputState,
    pub estado: TextInputState,
    pub field: ProcessField,
    pub errors: Vec<ValidationError>,
    /// Inline error banner from the last failed request.
    pub alert: Option<String>,
    pub loading: bool,
}

impl Default for ProcessFormState {
    fn default() -> Self {
        Self {
            numero: TextInputState::default(),
            estado: TextInputState::with_max_chars(2),
            field: ProcessField::default(),
            errors: Vec::new(),
            alert: None,
            loading: false,
        }
    }
}

impl ProcessFormState {
    pub fn handle(&mut self, event: &AppEvent) -> Option<FormAction> {
        if let AppEvent::Enter = event {
            return Some(FormAction::Submit);
        }
        if self.loading {
            return None;
        }
        match self.field {
            ProcessField::Numero => {
                if self.numero.handle(event) {
                    self.clear_error("numeroProcesso");
                }
            }
            ProcessField::Estado => match event {
                AppEvent::Char(c) => {
                    for upper in c.to_uppercase() {
                        self.estado.handle(&AppEvent::Char(upper));
                    }
                    self.clear_error("estado");
                }
                AppEvent::Nav(Direction::Up) => self.cycle_state(false),
                AppEvent::Nav(Direction::Down) => self.cycle_state(true),
                other => {
                    if self.estado.handle(other) {
                        self.clear_error("estado");
                    }
                }
            },
        }
        None
    }

    /// Move to the next field. Returns `false` when already on the last one.
    pub fn focus_next(&mut self) -> bool {
        match self.field {
            ProcessField::Numero => {
                self.field = ProcessField::Estado;
                true
            }
            ProcessField::Estado => false,
        }
    }

    /// Move to the previous field. Returns `false` when already on the first.
    pub fn focus_prev(&mut self) -> bool {
        match self.field {
            ProcessField::Estado => {
                self.field = ProcessField::Numero;
                true
            }
            ProcessField::Numero => false,
        }
    }

    /// Run the form rules, keeping the errors for display.
    pub fn validate(&mut self, rule: ProcessNumberRule) -> Option<ProcessQuery> {
        match validate_process_query(&self.numero.value, &self.estado.value, rule) {
            Ok(query) => {
                self.errors.clear();
                self.estado.set(&query.estado);
                Some(query)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "process form: validation failed");
                self.errors = errors;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn clear_error(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }

    /// Step through the state table in form order, wrapping at both ends.
    fn cycle_state(&mut self, forward: bool) {
        let len = STATES.len();
        let next = match STATES.get_index(self.estado.value.as_str()) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        if let Some((sigla, _)) = STATES.index(next) {
            self.estado.set(sigla);
            self.clear_error("estado");
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ProcessForm<'a> {
    state: &'a ProcessFormState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ProcessForm<'a> {
    pub fn new(state: &'a ProcessFormState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Rows the form occupies: the input row plus one line for messages.
    pub const HEIGHT: u16 = 4;

    fn input_areas(area: Rect) -> [Rect; 2] {
        let [row, _] = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).areas(row)
    }

    /// Terminal cursor position for the focused text field.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let [numero_area, estado_area] = Self::input_areas(area);
        match self.state.field {
            ProcessField::Numero => {
                TextInput::new(&self.state.numero, "", self.theme).cursor_position(numero_area)
            }
            ProcessField::Estado => {
                TextInput::new(&self.state.estado, "", self.theme).cursor_position(estado_area)
            }
        }
    }
}

impl Widget for ProcessForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [numero_area, estado_area] = Self::input_areas(area);
        let message_area = Rect {
            y: area.y + 3,
            height: area.height.saturating_sub(3).min(1),
            ..area
        };
        let s = self.state;

        TextInput::new(&s.numero, "Número do Processo", self.theme)
            .placeholder("Digite o número do processo (apenas números)")
            .focused(self.focused && s.field == ProcessField::Numero)
            .disabled(s.loading)
            .render(numero_area, buf);

        TextInput::new(&s.estado, "Estado", self.theme)
            .placeholder("Selecione um estado (↑/↓)")
            .suffix(states::state_name(&s.estado.value))
            .focused(self.focused && s.field == ProcessField::Estado)
            .disabled(s.loading)
            .render(estado_area, buf);

        let message = if s.loading {
            Line::from(Span::styled(" Consultando...", self.theme.loading))
        } else if !s.errors.is_empty() {
            let text = s
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(" · ");
            Line::from(Span::styled(format!(" {text}"), self.theme.field_error))
        } else {
            Line::from(Span::styled(" Enter: consultar  Ctrl+n: nova consulta", self.theme.dim))
        };
        Paragraph::new(message).render(message_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_str(form: &mut ProcessFormState, s: &str) {
        for c in s.chars() {
            form.handle(&AppEvent::Char(c));
        }
    }

    #[test]
    fn enter_requests_submit() {
        let mut form = ProcessFormState::default();
        assert_eq!(form.handle(&AppEvent::Enter), Some(FormAction::Submit));
    }

    #[test]
    fn state_field_upper_cases_and_caps_length() {
        let mut form = ProcessFormState::default();
        form.focus_next();
        type_str(&mut form, "toX");
        assert_eq!(form.estado.value, "TO");
    }

    #[test]
    fn state_field_cycles_in_form_order() {
        let mut form = ProcessFormState::default();
        form.field = ProcessField::Estado;
        form.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(form.estado.value, "AC");
        form.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(form.estado.value, "TO");
        form.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(form.estado.value, "SE");
    }

    #[test]
    fn validate_collects_both_errors() {
        let mut form = ProcessFormState::default();
        type_str(&mut form, "123");
        assert!(form.validate(ProcessNumberRule::MinDigits).is_none());
        assert!(form.error_for("numeroProcesso").is_some());
        assert_eq!(form.error_for("estado"), Some("Selecione um estado"));
    }

    #[test]
    fn typing_clears_that_fields_error() {
        let mut form = ProcessFormState::default();
        form.validate(ProcessNumberRule::MinDigits);
        form.handle(&AppEvent::Char('1'));
        assert!(form.error_for("numeroProcesso").is_none());
        assert!(form.error_for("estado").is_some());
    }

    #[test]
    fn valid_form_builds_trimmed_query() {
        let mut form = ProcessFormState::default();
        form.numero.set(" 00277463920218272729 ");
        form.estado.set("to");
        let query = form.validate(ProcessNumberRule::ExactDigits).unwrap();
        assert_eq!(query, ProcessQuery::new("00277463920218272729", "TO"));
        assert_eq!(form.estado.value, "TO");
    }

    #[test]
    fn focus_moves_between_two_fields() {
        let mut form = ProcessFormState::default();
        assert!(!form.focus_prev());
        assert!(form.focus_next());
        assert!(!form.focus_next());
        assert_eq!(form.field, ProcessField::Estado);
    }

    #[test]
    fn loading_form_ignores_edits() {
        let mut form = ProcessFormState::default();
        form.loading = true;
        form.handle(&AppEvent::Char('1'));
        assert!(form.numero.is_empty());
    }
}
