//! One-shot queries for the `processo` and `jurisprudencia` subcommands.
//!
//! Each query validates its input with the same rules as the TUI forms,
//! calls the webhook once and renders the result either as the plain-text
//! card the TUI would show or as JSON.

use anyhow::{bail, Result};
use juris_core::validation::{validate_jurisprudence_query, validate_process_query, ProcessNumberRule};
use juris_core::{
    JurisprudenceOutcome, JurisprudenceQuery, ProcessOutcome, ProcessSummary, QueryError,
    SummaryRequest, ValidationError,
};
use juris_tui::theme::Theme;
use juris_tui::widgets::{analysis, process_card, process_card::SummaryState};
use juris_webhooks::WebhookClient;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// A process lookup plus the optional movement summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReport {
    pub outcome: ProcessOutcome,
    /// `None` when no summary was asked for or the process was not found.
    pub summary: Option<Result<ProcessSummary, QueryError>>,
}

fn reject(errors: Vec<ValidationError>) -> anyhow::Error {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::anyhow!(joined)
}

/// Validate, look up, and when `with_summary` is set summarize the
/// movements of a found process.
///
/// A summary failure is kept in the report; only the lookup itself fails
/// the query.
pub async fn lookup_process(
    client: &WebhookClient,
    numero: &str,
    estado: &str,
    rule: ProcessNumberRule,
    with_summary: bool,
) -> Result<ProcessReport> {
    let query = validate_process_query(numero, estado, rule).map_err(reject)?;
    let outcome = client.lookup_process(&query).await?;

    let summary = match outcome.record() {
        Some(record) if with_summary => {
            Some(client.summarize_movements(&SummaryRequest::from(record)).await)
        }
        _ => None,
    };
    Ok(ProcessReport { outcome, summary })
}

/// Validate and run one case-law search.
pub async fn search_jurisprudence(
    client: &WebhookClient,
    tema: &str,
    keywords: &[String],
    page: u32,
    page_size: u32,
) -> Result<JurisprudenceOutcome> {
    let mut query = JurisprudenceQuery::new(tema);
    for keyword in keywords {
        query.palavras_chave.add(keyword);
    }
    query.page = page;
    query.page_size = page_size;

    let query = validate_jurisprudence_query(&query).map_err(reject)?;
    Ok(client.search_jurisprudence(&query).await?)
}

pub fn render_process(report: &ProcessReport, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut value = serde_json::to_value(&report.outcome)?;
            if let (Some(summary), Some(object)) = (&report.summary, value.as_object_mut()) {
                let entry = match summary {
                    Ok(s) => serde_json::json!({ "resumo": s.resumo }),
                    Err(e) => serde_json::json!({ "erro": e.to_string() }),
                };
                object.insert("resumoIA".to_string(), entry);
            }
            Ok(serde_json::to_string_pretty(&value)?)
        }
        Format::Text => {
            let theme = Theme::load_default();
            let summary = match &report.summary {
                None => SummaryState::Idle,
                Some(Ok(s)) => SummaryState::Ready(s.clone()),
                Some(Err(e)) => SummaryState::Failed(e.to_string()),
            };
            let lines = process_card::lines(&report.outcome, &summary, false, &theme);
            Ok(juris_tui::plain_text(&lines))
        }
    }
}

pub fn render_jurisprudence(outcome: &JurisprudenceOutcome, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(outcome)?),
        Format::Text => {
            let theme = Theme::load_default();
            Ok(juris_tui::plain_text(&analysis::lines(outcome, &theme)))
        }
    }
}

/// `SIGLA  Nome` per line, in picker order.
pub fn render_states() -> String {
    juris_core::states::all()
        .map(|(sigla, nome)| format!("{sigla}  {nome}\n"))
        .collect()
}

/// Refuse an empty summary endpoint up front so `--resumo` fails loudly
/// instead of printing a card with an inline error.
pub fn require_summary(client: &WebhookClient) -> Result<()> {
    if !client.has_summary() {
        bail!(QueryError::NotConfigured("resumo"));
    }
    Ok(())
}
