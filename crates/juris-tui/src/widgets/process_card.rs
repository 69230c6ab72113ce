//! Lines for the process result card.
//!
//! The card is built as plain [`Line`]s so the same content feeds the
//! scrollable [`ResultPane`](super::result_pane::ResultPane) and the
//! headless CLI output.

use crate::theme::Theme;
use juris_core::display::{format_date_br, or_not_informed, StatusKind, NOT_INFORMED};
use juris_core::markdown::{format_summary, Span as MdSpan, SummaryBlock};
use juris_core::{NotFoundResult, ProcessOutcome, ProcessRecord, ProcessSummary};
use ratatui::text::{Line, Span};

/// Progress of the AI movement summary for the displayed process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryState {
    #[default]
    Idle,
    Loading,
    Ready(ProcessSummary),
    Failed(String),
}

pub fn lines(
    outcome: &ProcessOutcome,
    summary: &SummaryState,
    summary_enabled: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    match outcome {
        ProcessOutcome::NotFound(result) => not_found_lines(result, theme),
        ProcessOutcome::Found(record) => {
            let mut out = record_lines(record, theme);
            out.extend(summary_lines(summary, summary_enabled, theme));
            out
        }
    }
}

pub fn not_found_lines(result: &NotFoundResult, theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        format!("❌ {}", result.mensagem),
        theme.alert_not_found,
    ))]
}

pub fn record_lines(record: &ProcessRecord, theme: &Theme) -> Vec<Line<'static>> {
    let status = or_not_informed(record.status.as_deref());
    let badge_style = match record.status.as_deref() {
        Some(s) if !s.trim().is_empty() => theme.status_style(StatusKind::classify(s)),
        _ => theme.dim,
    };

    let mut out = vec![
        Line::from(vec![
            Span::styled(
                format!("Processo {}", or_not_informed(record.numero_processo.as_deref())),
                theme.result_title,
            ),
            Span::raw("  "),
            Span::styled(format!(" {status} "), badge_style),
        ]),
        Line::from(Span::styled(
            or_not_informed(record.tribunal.as_deref()).to_string(),
            theme.dim,
        )),
        Line::default(),
        heading("📄 Dados do Processo", theme),
        field("Vara", record.vara.as_deref(), theme),
        Line::from(vec![
            Span::styled("  Data de Distribuição: ", theme.result_label),
            Span::raw(
                record
                    .data_distribuicao
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .map(format_date_br)
                    .unwrap_or_else(|| NOT_INFORMED.to_string()),
            ),
        ]),
        field("Classe", record.classe.as_deref(), theme),
        field("Assunto", record.assunto.as_deref(), theme),
        Line::default(),
        heading("👥 Partes do Processo", theme),
    ];

    let partes = record.partes.as_ref();
    out.push(field("Requerente", partes.and_then(|p| p.requerente.as_deref()), theme));
    out.push(field("Requerido", partes.and_then(|p| p.requerido.as_deref()), theme));
    out.push(Line::default());

    out.push(heading(
        &format!("🕓 Movimentações ({})", record.movimentacoes.len()),
        theme,
    ));
    if record.movimentacoes.is_empty() {
        out.push(Line::from(Span::styled("  Nenhuma movimentação registrada", theme.dim)));
    }
    for mov in &record.movimentacoes {
        out.push(Line::from(vec![
            Span::styled(format!("  {:<12}", format_date_br(&mov.data)), theme.result_label),
            Span::raw(mov.descricao.clone()),
        ]));
    }
    out
}

fn summary_lines(summary: &SummaryState, enabled: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    match summary {
        SummaryState::Idle if enabled => {
            out.push(Line::default());
            out.push(Line::from(Span::styled(
                "  Ctrl+r: gerar resumo das movimentações com IA",
                theme.dim,
            )));
        }
        SummaryState::Idle => {}
        SummaryState::Loading => {
            out.push(Line::default());
            out.push(Line::from(Span::styled("  Gerando resumo...", theme.loading)));
        }
        SummaryState::Ready(s) => {
            out.push(Line::default());
            out.push(heading("🤖 Resumo das Movimentações", theme));
            out.extend(summary_block_lines(&format_summary(&s.resumo), theme));
        }
        SummaryState::Failed(message) => {
            out.push(Line::default());
            out.push(Line::from(Span::styled(format!("  {message}"), theme.alert_error)));
        }
    }
    out
}

/// Render parsed summary blocks.
pub fn summary_block_lines(blocks: &[SummaryBlock], theme: &Theme) -> Vec<Line<'static>> {
    blocks
        .iter()
        .map(|block| match block {
            SummaryBlock::Heading { level, spans } => {
                let indent = if *level <= 2 { "" } else { "  " };
                let mut line = vec![Span::styled(indent.to_string(), theme.heading)];
                line.extend(spans.iter().map(|s| Span::styled(s.text.clone(), theme.heading)));
                Line::from(line)
            }
            SummaryBlock::Bullet(spans) => {
                let mut line = vec![Span::raw("  • ")];
                line.extend(styled(spans, theme));
                Line::from(line)
            }
            SummaryBlock::Paragraph(spans) => Line::from(styled(spans, theme)),
            SummaryBlock::Blank => Line::default(),
        })
        .collect()
}

fn styled(spans: &[MdSpan], theme: &Theme) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|s| {
            if s.bold {
                Span::styled(s.text.clone(), theme.bold)
            } else {
                Span::raw(s.text.clone())
            }
        })
        .collect()
}

fn heading(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), theme.heading))
}

fn field(label: &str, value: Option<&str>, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), theme.result_label),
        Span::raw(or_not_informed(value).to_string()),
    ])
}
