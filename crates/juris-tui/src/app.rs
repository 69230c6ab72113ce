//! Top-level application state and the main event loop.
//!
//! [`AppState`] holds everything on screen and turns key events into
//! [`Request`]s without touching the network. [`App::run`] sets up the
//! terminal, spawns each request on the tokio runtime, feeds the
//! [`Response`]s back through a channel and tears everything down cleanly
//! on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        alert::{AlertBox, Modal, Toast, ToastPopup},
        analysis,
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        jurisprudence_form::{JurisprudenceField, JurisprudenceForm, JurisprudenceFormState},
        process_card::{self, SummaryState},
        process_form::{FormAction, ProcessField, ProcessForm, ProcessFormState},
        result_pane::{ResultPane, ResultPaneState},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use juris_core::config::{Config, ErrorPresentation};
use juris_core::validation::ProcessNumberRule;
use juris_core::{
    JurisprudenceOutcome, JurisprudenceQuery, ProcessOutcome, ProcessQuery, ProcessSummary,
    QueryError, SummaryRequest,
};
use juris_webhooks::WebhookClient;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::{runtime::Handle, sync::mpsc};

// ---------------------------------------------------------------------------
// Tabs, focus, requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Process,
    Jurisprudence,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::Process => 0,
            Tab::Jurisprudence => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Tab::Process),
            1 => Some(Tab::Jurisprudence),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A field of the active tab's form.
    Form,
    Results,
    /// Vim-style `:` command line is active.
    Command,
}

/// Work the shell asks the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Process(ProcessQuery),
    Jurisprudence(JurisprudenceQuery),
    Summary(SummaryRequest),
}

/// Completed work, sent back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Process(Result<ProcessOutcome, QueryError>),
    Jurisprudence(Result<JurisprudenceOutcome, QueryError>),
    Summary(Result<ProcessSummary, QueryError>),
}

impl Request {
    pub fn lane(&self) -> Lane {
        match self {
            Request::Process(_) => Lane::Process,
            Request::Jurisprudence(_) => Lane::Jurisprudence,
            Request::Summary(_) => Lane::Summary,
        }
    }
}

impl Response {
    pub fn lane(&self) -> Lane {
        match self {
            Response::Process(_) => Lane::Process,
            Response::Jurisprudence(_) => Lane::Jurisprudence,
            Response::Summary(_) => Lane::Summary,
        }
    }
}

/// Which kind of in-flight work a request or response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Process,
    Jurisprudence,
    Summary,
}

/// Per-lane counters. A lane's counter moves whenever its view is
/// replaced, so a response stamped with an older value is stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generations {
    process: u64,
    jurisprudence: u64,
    summary: u64,
}

impl Generations {
    pub fn get(&self, lane: Lane) -> u64 {
        match lane {
            Lane::Process => self.process,
            Lane::Jurisprudence => self.jurisprudence,
            Lane::Summary => self.summary,
        }
    }

    fn bump(&mut self, lane: Lane) {
        let counter = match lane {
            Lane::Process => &mut self.process,
            Lane::Jurisprudence => &mut self.jurisprudence,
            Lane::Summary => &mut self.summary,
        };
        *counter = counter.wrapping_add(1);
    }
}

/// Run one request against the webhooks.
pub async fn perform(client: &WebhookClient, request: Request) -> Response {
    match request {
        Request::Process(query) => Response::Process(client.lookup_process(&query).await),
        Request::Jurisprudence(query) => {
            Response::Jurisprudence(client.search_jurisprudence(&query).await)
        }
        Request::Summary(request) => Response::Summary(client.summarize_movements(&request).await),
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ProcessTab {
    pub form: ProcessFormState,
    pub outcome: Option<ProcessOutcome>,
    pub summary: SummaryState,
    pub results: ResultPaneState,
}

#[derive(Debug, Default)]
pub struct JurisprudenceTab {
    pub form: JurisprudenceFormState,
    pub outcome: Option<JurisprudenceOutcome>,
    pub results: ResultPaneState,
}

pub struct AppState {
    pub process: ProcessTab,
    pub jurisprudence: JurisprudenceTab,
    pub active: Tab,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    /// Process-number rule in force; `:regra` changes it for the session.
    pub rule: ProcessNumberRule,
    pub summary_enabled: bool,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub toast: Option<Toast>,
    /// "Not found" message shown as a modal in toast mode.
    pub modal: Option<String>,
    pub generations: Generations,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, summary_enabled: bool) -> Self {
        let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
            Theme::load_default()
        });
        Self {
            process: ProcessTab::default(),
            jurisprudence: JurisprudenceTab {
                form: JurisprudenceFormState::new(config.ui.page_size),
                ..JurisprudenceTab::default()
            },
            active: Tab::Process,
            focus: Focus::Form,
            prev_focus: Focus::Form,
            theme,
            rule: config.validation.process_number_rule,
            config,
            summary_enabled,
            show_help: false,
            command_bar: CommandBarState::default(),
            toast: None,
            modal: None,
            generations: Generations::default(),
            quit: false,
        }
    }

    /// Whether letters should type characters rather than trigger shortcuts.
    pub fn is_insert_mode(&self) -> bool {
        match self.focus {
            Focus::Command => true,
            Focus::Results => false,
            Focus::Form => match self.active {
                Tab::Process => true,
                Tab::Jurisprudence => self.jurisprudence.form.is_text_field(),
            },
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Option<Request> {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return None;
        }

        if self.modal.is_some() {
            match event {
                AppEvent::Escape | AppEvent::Enter => self.modal = None,
                AppEvent::Quit => self.quit = true,
                _ => {}
            }
            return None;
        }

        // Command mode intercepts all events.
        if self.focus == Focus::Command {
            return self.handle_command(event);
        }

        let insert = self.is_insert_mode();
        match event {
            AppEvent::Char('?') if !insert => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') if !insert => {
                tracing::debug!(prev_focus = ?self.focus, "entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::SwitchTab(index) => {
                if let Some(tab) = Tab::from_index(index) {
                    tracing::debug!(?tab, "switch tab");
                    self.active = tab;
                    self.focus = Focus::Form;
                }
            }
            AppEvent::NewQuery => self.new_query(),
            AppEvent::Summarize => return self.request_summary(),
            AppEvent::FocusNext => self.focus_next(),
            AppEvent::FocusPrev => self.focus_prev(),
            AppEvent::ScrollUp | AppEvent::ScrollDown => self.results_mut().handle(&event),
            AppEvent::Escape => match self.focus {
                Focus::Form => self.focus = Focus::Results,
                _ => self.toast = None,
            },
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            other => return self.dispatch_to_focused(other),
        }
        None
    }

    fn handle_command(&mut self, event: AppEvent) -> Option<Request> {
        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.command_bar.clear();
                self.focus = self.prev_focus;
            }
            AppEvent::Enter => {
                let input = self.command_bar.input.value.clone();
                match Command::parse(&input) {
                    Ok(cmd) => {
                        tracing::debug!(command = ?cmd, "executing command");
                        self.command_bar.clear();
                        self.focus = self.prev_focus;
                        return execute_command(self, cmd);
                    }
                    Err(msg) if msg.is_empty() => {
                        self.command_bar.clear();
                        self.focus = self.prev_focus;
                    }
                    Err(msg) => self.command_bar.error = Some(msg),
                }
            }
            AppEvent::Quit => self.quit = true,
            other => self.command_bar.handle(&other),
        }
        None
    }

    /// Route an event to the widget that owns the current focus.
    fn dispatch_to_focused(&mut self, event: AppEvent) -> Option<Request> {
        match self.focus {
            Focus::Form => {
                let action = match self.active {
                    Tab::Process => self.process.form.handle(&event),
                    Tab::Jurisprudence => self.jurisprudence.form.handle(&event),
                };
                match action {
                    Some(FormAction::Submit) => self.submit(),
                    None => None,
                }
            }
            Focus::Results => {
                self.results_mut().handle(&event);
                None
            }
            Focus::Command => None,
        }
    }

    fn results_mut(&mut self) -> &mut ResultPaneState {
        match self.active {
            Tab::Process => &mut self.process.results,
            Tab::Jurisprudence => &mut self.jurisprudence.results,
        }
    }

    fn focus_next(&mut self) {
        if self.focus == Focus::Form {
            let moved = match self.active {
                Tab::Process => self.process.form.focus_next(),
                Tab::Jurisprudence => self.jurisprudence.form.focus_next(),
            };
            if !moved {
                self.focus = Focus::Results;
            }
        } else {
            match self.active {
                Tab::Process => self.process.form.field = ProcessField::Numero,
                Tab::Jurisprudence => self.jurisprudence.form.field = JurisprudenceField::Tema,
            }
            self.focus = Focus::Form;
        }
        tracing::debug!(focus = ?self.focus, "focus next");
    }

    fn focus_prev(&mut self) {
        if self.focus == Focus::Form {
            let moved = match self.active {
                Tab::Process => self.process.form.focus_prev(),
                Tab::Jurisprudence => self.jurisprudence.form.focus_prev(),
            };
            if !moved {
                self.focus = Focus::Results;
            }
        } else {
            match self.active {
                Tab::Process => self.process.form.field = ProcessField::Estado,
                Tab::Jurisprudence => {
                    self.jurisprudence.form.field = JurisprudenceField::Suggestions
                }
            }
            self.focus = Focus::Form;
        }
        tracing::debug!(focus = ?self.focus, "focus prev");
    }

    // -- Requests ----------------------------------------------------------

    /// Validate and submit the active tab's form.
    pub fn submit(&mut self) -> Option<Request> {
        match self.active {
            Tab::Process => self.submit_process(),
            Tab::Jurisprudence => self.submit_jurisprudence(),
        }
    }

    fn submit_process(&mut self) -> Option<Request> {
        let tab = &mut self.process;
        if tab.form.loading {
            tracing::debug!("process submit ignored: request in flight");
            return None;
        }
        let query = tab.form.validate(self.rule)?;
        tab.form.loading = true;
        tab.form.alert = None;
        tab.outcome = None;
        tab.summary = SummaryState::Idle;
        tab.results.reset();
        self.modal = None;
        self.generations.bump(Lane::Process);
        self.generations.bump(Lane::Summary);
        Some(Request::Process(query))
    }

    pub fn submit_jurisprudence(&mut self) -> Option<Request> {
        let tab = &mut self.jurisprudence;
        if tab.form.loading {
            tracing::debug!("jurisprudence submit ignored: request in flight");
            return None;
        }
        let query = tab.form.validate()?;
        tab.form.loading = true;
        tab.form.alert = None;
        tab.outcome = None;
        tab.results.reset();
        self.generations.bump(Lane::Jurisprudence);
        Some(Request::Jurisprudence(query))
    }

    fn request_summary(&mut self) -> Option<Request> {
        if self.active != Tab::Process {
            return None;
        }
        if self.process.outcome.as_ref().and_then(ProcessOutcome::record).is_none() {
            self.report(Tab::Process, "Consulte um processo antes de gerar o resumo".to_string());
            return None;
        }
        if !self.summary_enabled {
            self.report(Tab::Process, QueryError::NotConfigured("resumo").to_string());
            return None;
        }
        if self.process.summary == SummaryState::Loading {
            return None;
        }
        let record = self.process.outcome.as_ref().and_then(ProcessOutcome::record)?;
        let request = SummaryRequest::from(record);
        self.process.summary = SummaryState::Loading;
        self.generations.bump(Lane::Summary);
        Some(Request::Summary(request))
    }

    /// Clear the active tab's form and result. Ignored while that tab's
    /// lookup is in flight; a pending summary is abandoned.
    pub fn new_query(&mut self) {
        let loading = match self.active {
            Tab::Process => self.process.form.loading,
            Tab::Jurisprudence => self.jurisprudence.form.loading,
        };
        if loading {
            tracing::debug!(tab = ?self.active, "new query ignored: request in flight");
            return;
        }
        tracing::debug!(tab = ?self.active, "new query");
        match self.active {
            Tab::Process => {
                self.process = ProcessTab::default();
                self.generations.bump(Lane::Process);
                self.generations.bump(Lane::Summary);
            }
            Tab::Jurisprudence => {
                self.jurisprudence.form.reset();
                self.jurisprudence.outcome = None;
                self.jurisprudence.results.reset();
                self.generations.bump(Lane::Jurisprudence);
            }
        }
        self.modal = None;
        self.focus = Focus::Form;
    }

    // -- Responses ---------------------------------------------------------

    /// Apply a response produced by a request issued at `generation`,
    /// dropping it when its lane has moved on since.
    pub fn apply_stamped(&mut self, generation: u64, response: Response) {
        let lane = response.lane();
        let current = self.generations.get(lane);
        if generation != current {
            tracing::debug!(?lane, generation, current, "dropping stale response");
            return;
        }
        self.apply(response);
    }

    pub fn apply(&mut self, response: Response) {
        match response {
            Response::Process(result) => {
                self.process.form.loading = false;
                match result {
                    Ok(ProcessOutcome::NotFound(nf))
                        if self.config.ui.error_presentation == ErrorPresentation::Toast =>
                    {
                        tracing::debug!("process not found, opening modal");
                        self.modal = Some(nf.mensagem);
                    }
                    Ok(outcome) => {
                        self.process.outcome = Some(outcome);
                        self.process.results.reset();
                    }
                    Err(e) => self.report(Tab::Process, e.to_string()),
                }
            }
            Response::Jurisprudence(result) => {
                self.jurisprudence.form.loading = false;
                match result {
                    Ok(outcome) => {
                        self.jurisprudence.outcome = Some(outcome);
                        self.jurisprudence.results.reset();
                    }
                    Err(e) => self.report(Tab::Jurisprudence, e.to_string()),
                }
            }
            Response::Summary(_) if self.process.summary != SummaryState::Loading => {
                tracing::debug!("summary dropped: none pending");
            }
            Response::Summary(result) => match result {
                Ok(summary) => self.process.summary = SummaryState::Ready(summary),
                Err(e) => match self.config.ui.error_presentation {
                    ErrorPresentation::Inline => {
                        self.process.summary = SummaryState::Failed(e.to_string())
                    }
                    ErrorPresentation::Toast => {
                        self.process.summary = SummaryState::Idle;
                        self.report(Tab::Process, e.to_string());
                    }
                },
            },
        }
    }

    /// Show an error the configured way.
    fn report(&mut self, tab: Tab, message: String) {
        tracing::debug!(?tab, %message, "reporting error");
        match self.config.ui.error_presentation {
            ErrorPresentation::Inline => match tab {
                Tab::Process => self.process.form.alert = Some(message),
                Tab::Jurisprudence => self.jurisprudence.form.alert = Some(message),
            },
            ErrorPresentation::Toast => {
                let ttl = Duration::from_secs(self.config.ui.toast_seconds);
                self.toast = Some(Toast::new(message, Instant::now(), ttl));
            }
        }
    }

    /// Expire the toast.
    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.expired(now)) {
            self.toast = None;
        }
    }

    fn loading(&self) -> [bool; 2] {
        [
            self.process.form.loading || self.process.summary == SummaryState::Loading,
            self.jurisprudence.form.loading,
        ]
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    client: WebhookClient,
    runtime: Handle,
    tx: mpsc::UnboundedSender<(u64, Response)>,
    rx: mpsc::UnboundedReceiver<(u64, Response)>,
}

impl App {
    pub fn new(config: Config, client: WebhookClient, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = AppState::new(config, client.has_summary());
        Self { state, client, runtime, tx, rx }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            while let Ok((generation, response)) = self.rx.try_recv() {
                self.state.apply_stamped(generation, response);
            }
            self.state.tick(Instant::now());

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                // Use insert-mode mapping when a text widget is focused
                let app_event = if self.state.is_insert_mode() {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    if let Some(request) = self.state.handle(ev) {
                        self.spawn(request);
                    }
                }
            }
        }
        Ok(())
    }

    fn spawn(&self, request: Request) {
        let generation = self.state.generations.get(request.lane());
        tracing::debug!(?request, generation, "spawning request");
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let response = perform(&client, request).await;
            // The receiver is gone only after the UI has exited.
            let _ = tx.send((generation, response));
        });
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line tab bar | body | 1-line status / command bar
    let [tab_area, body, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        TabBar::new(state.active.index(), state.loading(), &state.theme),
        tab_area,
    );

    let form_focused = state.focus == Focus::Form
        || (state.focus == Focus::Command && state.prev_focus == Focus::Form);
    let results_focused = state.focus == Focus::Results;
    let theme = &state.theme;

    let (form_height, alert) = match state.active {
        Tab::Process => (ProcessForm::HEIGHT, state.process.form.alert.as_deref()),
        Tab::Jurisprudence => (
            JurisprudenceForm::HEIGHT,
            state.jurisprudence.form.alert.as_deref(),
        ),
    };
    let [form_area, alert_area, result_area] = Layout::vertical([
        Constraint::Length(form_height),
        Constraint::Length(if alert.is_some() { 3 } else { 0 }),
        Constraint::Fill(1),
    ])
    .areas(body);

    if let Some(message) = alert {
        frame.render_widget(AlertBox::error(message, theme), alert_area);
    }

    let mut cursor = None;
    match state.active {
        Tab::Process => {
            let tab = &state.process;
            let form = ProcessForm::new(&tab.form, form_focused, theme);
            if state.focus == Focus::Form {
                cursor = Some(form.cursor_position(form_area));
            }
            frame.render_widget(form, form_area);

            let lines = match &tab.outcome {
                Some(outcome) => {
                    process_card::lines(outcome, &tab.summary, state.summary_enabled, theme)
                }
                None => placeholder(tab.form.loading, "Consultando...", theme),
            };
            frame.render_widget(
                ResultPane::new(&tab.results, lines, "Resultado", results_focused, theme),
                result_area,
            );
        }
        Tab::Jurisprudence => {
            let tab = &state.jurisprudence;
            let form = JurisprudenceForm::new(&tab.form, form_focused, theme);
            if state.focus == Focus::Form {
                cursor = form.cursor_position(form_area);
            }
            frame.render_widget(form, form_area);

            let lines = match &tab.outcome {
                Some(outcome) => analysis::lines(outcome, theme),
                None => placeholder(tab.form.loading, "IA Analisando Jurisprudências...", theme),
            };
            frame.render_widget(
                ResultPane::new(&tab.results, lines, "Jurisprudência", results_focused, theme),
                result_area,
            );
        }
    }

    frame.render_widget(StatusLine { state }, status_area);

    if let Some(toast) = &state.toast {
        frame.render_widget(ToastPopup::new(toast, theme), body);
    }
    if let Some(message) = &state.modal {
        frame.render_widget(Modal::new("Processo não encontrado", message, theme), area);
    }
    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), area);
    }

    // Command bar overlays the status row
    if state.focus == Focus::Command {
        frame.render_widget(CommandBar::new(&state.command_bar, theme), status_area);
        let col = state.command_bar.cursor_col(status_area);
        frame.set_cursor_position((col, status_area.y));
        return;
    }

    if state.is_insert_mode() && !state.show_help && state.modal.is_none() {
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}

fn placeholder(loading: bool, loading_text: &str, theme: &Theme) -> Vec<Line<'static>> {
    if loading {
        vec![Line::from(Span::styled(loading_text.to_string(), theme.loading))]
    } else {
        vec![Line::from(Span::styled(
            "Preencha o formulário e tecle Enter.",
            theme.dim,
        ))]
    }
}

struct StatusLine<'a> {
    state: &'a AppState,
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let s = self.state;
        let resumo = if s.summary_enabled { "ativo" } else { "desativado" };
        let text = format!(" regra: {}  resumo IA: {resumo}  :comandos", s.rule);
        Paragraph::new(Line::from(Span::styled(text, s.theme.dim))).render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
