//! Case-law search form: theme, keyword entry and the suggestion strip.
//!
//! # Fields
//!
//! | Field | Enter | Other keys |
//! |-------|-------|------------|
//! | Tema | submit | text editing |
//! | Palavra-chave | add keyword, or submit when empty | `Backspace` on empty removes the last keyword |
//! | Sugestões | add the selected suggestion | `←`/`→` select, `Backspace` removes it again |

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::process_form::FormAction;
use crate::widgets::text_input::{TextInput, TextInputState};
use juris_core::keywords::{KeywordSet, SUGGESTED_KEYWORDS};
use juris_core::query::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use juris_core::validation::validate_jurisprudence_query;
use juris_core::{JurisprudenceQuery, ValidationError};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JurisprudenceField {
    #[default]
    Tema,
    Keyword,
    Suggestions,
}

#[derive(Debug, Clone)]
pub struct JurisprudenceFormState {
    pub tema: TextInputState,
    pub keyword: TextInputState,
    pub keywords: KeywordSet,
    /// Index into [`SUGGESTED_KEYWORDS`].
    pub suggestion: usize,
    pub field: JurisprudenceField,
    pub page: u32,
    pub page_size: u32,
    pub errors: Vec<ValidationError>,
    pub alert: Option<String>,
    pub loading: bool,
}

impl Default for JurisprudenceFormState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl JurisprudenceFormState {
    pub fn new(page_size: u32) -> Self {
        Self {
            tema: TextInputState::default(),
            keyword: TextInputState::default(),
            keywords: KeywordSet::new(),
            suggestion: 0,
            field: JurisprudenceField::default(),
            page: DEFAULT_PAGE,
            page_size,
            errors: Vec::new(),
            alert: None,
            loading: false,
        }
    }

    pub fn handle(&mut self, event: &AppEvent) -> Option<FormAction> {
        if self.loading {
            return matches!(event, AppEvent::Enter).then_some(FormAction::Submit);
        }
        match self.field {
            JurisprudenceField::Tema => match event {
                AppEvent::Enter => return Some(FormAction::Submit),
                other => {
                    if self.tema.handle(other) {
                        self.errors.retain(|e| e.field != "tema");
                    }
                }
            },
            JurisprudenceField::Keyword => match event {
                AppEvent::Enter if self.keyword.value.trim().is_empty() => {
                    return Some(FormAction::Submit);
                }
                AppEvent::Enter => {
                    let added = self.keywords.add(&self.keyword.value);
                    tracing::debug!(keyword = %self.keyword.value, added, "keyword entered");
                    self.keyword.clear();
                }
                AppEvent::Backspace if self.keyword.is_empty() => {
                    let removed = self.keywords.pop();
                    tracing::debug!(?removed, "keyword removed");
                }
                other => {
                    self.keyword.handle(other);
                }
            },
            JurisprudenceField::Suggestions => match event {
                AppEvent::Nav(Direction::Left) => {
                    self.suggestion =
                        (self.suggestion + SUGGESTED_KEYWORDS.len() - 1) % SUGGESTED_KEYWORDS.len();
                }
                AppEvent::Nav(Direction::Right) => {
                    self.suggestion = (self.suggestion + 1) % SUGGESTED_KEYWORDS.len();
                }
                AppEvent::Enter => {
                    self.keywords.add(SUGGESTED_KEYWORDS[self.suggestion]);
                }
                AppEvent::Backspace => {
                    self.keywords.remove(SUGGESTED_KEYWORDS[self.suggestion]);
                }
                _ => {}
            },
        }
        None
    }

    /// Whether the focused field takes free text.
    pub fn is_text_field(&self) -> bool {
        self.field != JurisprudenceField::Suggestions
    }

    pub fn focus_next(&mut self) -> bool {
        self.field = match self.field {
            JurisprudenceField::Tema => JurisprudenceField::Keyword,
            JurisprudenceField::Keyword => JurisprudenceField::Suggestions,
            JurisprudenceField::Suggestions => return false,
        };
        true
    }

    pub fn focus_prev(&mut self) -> bool {
        self.field = match self.field {
            JurisprudenceField::Suggestions => JurisprudenceField::Keyword,
            JurisprudenceField::Keyword => JurisprudenceField::Tema,
            JurisprudenceField::Tema => return false,
        };
        true
    }

    /// The query as currently filled in, before validation.
    pub fn query(&self) -> JurisprudenceQuery {
        JurisprudenceQuery {
            tema: self.tema.value.clone(),
            palavras_chave: self.keywords.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn validate(&mut self) -> Option<JurisprudenceQuery> {
        match validate_jurisprudence_query(&self.query()) {
            Ok(query) => {
                self.errors.clear();
                Some(query)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "jurisprudence form: validation failed");
                self.errors = errors;
                None
            }
        }
    }

    /// Clear every field; the page size survives.
    pub fn reset(&mut self) {
        *self = Self::new(self.page_size);
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct JurisprudenceForm<'a> {
    state: &'a JurisprudenceFormState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> JurisprudenceForm<'a> {
    pub const HEIGHT: u16 = 10;

    pub fn new(state: &'a JurisprudenceFormState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    fn rows(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area)
    }

    fn keyword_row(row: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Fill(2), Constraint::Fill(3)]).areas(row)
    }

    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let [tema_row, keyword_row, _, _] = Self::rows(area);
        match self.state.field {
            JurisprudenceField::Tema => {
                Some(TextInput::new(&self.state.tema, "", self.theme).cursor_position(tema_row))
            }
            JurisprudenceField::Keyword => {
                let [input, _] = Self::keyword_row(keyword_row);
                Some(TextInput::new(&self.state.keyword, "", self.theme).cursor_position(input))
            }
            JurisprudenceField::Suggestions => None,
        }
    }
}

impl Widget for JurisprudenceForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let s = self.state;
        let t = self.theme;
        let [tema_row, keyword_row, suggestion_row, message_row] = Self::rows(area);
        let [keyword_input, chips_area] = Self::keyword_row(keyword_row);

        TextInput::new(&s.tema, "Tema da Consulta", t)
            .placeholder("Ex.: responsabilidade civil por erro médico")
            .focused(self.focused && s.field == JurisprudenceField::Tema)
            .disabled(s.loading)
            .render(tema_row, buf);

        TextInput::new(&s.keyword, "Palavras-chave", t)
            .placeholder("Digite e tecle Enter")
            .focused(self.focused && s.field == JurisprudenceField::Keyword)
            .disabled(s.loading)
            .render(keyword_input, buf);

        // Selected keywords
        let chips_block = Block::bordered()
            .title(Span::styled(
                format!(" Selecionadas ({}) ", s.keywords.len()),
                t.form_label,
            ))
            .border_style(t.border(false));
        let chips_inner = chips_block.inner(chips_area);
        chips_block.render(chips_area, buf);
        let chips: Vec<Span> = s
            .keywords
            .iter()
            .flat_map(|k| [Span::styled(format!("[{k}]"), t.keyword_chip), Span::raw(" ")])
            .collect();
        Paragraph::new(Line::from(chips)).render(chips_inner, buf);

        // Suggestion strip
        let suggestions_focused = self.focused && s.field == JurisprudenceField::Suggestions;
        let strip_block = Block::bordered()
            .title(Span::styled(" Sugestões (←/→, Enter adiciona) ", t.form_label))
            .border_style(t.border(suggestions_focused));
        let strip_inner = strip_block.inner(suggestion_row);
        strip_block.render(suggestion_row, buf);
        let strip: Vec<Span> = SUGGESTED_KEYWORDS
            .iter()
            .enumerate()
            .flat_map(|(i, k)| {
                let used = s.keywords.contains(k);
                let mut style = if used { t.suggestion_used } else { t.suggestion };
                if suggestions_focused && i == s.suggestion {
                    style = style.add_modifier(ratatui::style::Modifier::REVERSED);
                }
                let text = if used { format!("✓ {k}") } else { format!("+ {k}") };
                [Span::styled(text, style), Span::raw("  ")]
            })
            .collect();
        Paragraph::new(Line::from(strip))
            .wrap(Wrap { trim: true })
            .render(strip_inner, buf);

        let message = if s.loading {
            Line::from(Span::styled(" IA Analisando Jurisprudências...", t.loading))
        } else if !s.errors.is_empty() {
            let text = s
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(" · ");
            Line::from(Span::styled(format!(" {text}"), t.field_error))
        } else {
            Line::from(Span::styled(
                format!(" Enter: gerar jurisprudência  página {}  :pagina <n>", s.page),
                t.dim,
            ))
        };
        Paragraph::new(message).render(message_row, buf);
    }
}
