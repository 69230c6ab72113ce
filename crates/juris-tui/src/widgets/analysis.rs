//! Lines for a case-law result: the structured document list or the
//! sectioned AI narrative.

use crate::theme::Theme;
use juris_core::display::{format_date_br, or_not_informed, page_count};
use juris_core::{AnalysisSection, JurisprudenceItem, JurisprudenceOutcome, JurisprudenceResult};
use ratatui::text::{Line, Span};

pub fn lines(outcome: &JurisprudenceOutcome, theme: &Theme) -> Vec<Line<'static>> {
    match outcome {
        JurisprudenceOutcome::Structured(result) => structured_lines(result, theme),
        JurisprudenceOutcome::Narrative { sections, .. } => section_lines(sections, theme),
    }
}

pub fn structured_lines(result: &JurisprudenceResult, theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::from(vec![
            Span::styled(format!("📊 Total: {} itens", result.total), theme.result_label),
            Span::raw("   "),
            Span::styled(
                format!(
                    "📄 Página: {} de {}",
                    result.page,
                    page_count(result.total, result.page_size)
                ),
                theme.result_label,
            ),
        ]),
        Line::default(),
    ];

    if result.data.is_empty() {
        out.push(Line::from(Span::styled(
            "Nenhuma jurisprudência encontrada com os critérios informados",
            theme.heading,
        )));
        out.push(Line::from(Span::styled(
            "Tente ajustar os termos da consulta ou as palavras-chave para obter resultados.",
            theme.dim,
        )));
        return out;
    }

    for item in &result.data {
        out.extend(item_lines(item, theme));
        out.push(Line::default());
    }
    out
}

fn item_lines(item: &JurisprudenceItem, theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::from(Span::styled(format!("📌 {}", item.titulo), theme.result_title)),
        labelled("Ministro", or_not_informed(Some(item.ministro.as_str())).to_string(), theme),
        labelled("Órgão Julgador", or_not_informed(Some(item.orgao_julgador.as_str())).to_string(), theme),
        labelled("Julgamento", format_date_br(&item.julgamento_data), theme),
    ];
    if let Some(publicacao) = item.publicacao_data.as_deref().filter(|p| !p.trim().is_empty()) {
        out.push(labelled("Publicação", format_date_br(publicacao), theme));
    }
    out.push(Line::from(Span::styled("  Ementa:", theme.result_label)));
    let ementa = if item.ementa.trim().is_empty() {
        "Ementa indisponível"
    } else {
        item.ementa.as_str()
    };
    out.extend(ementa.lines().map(|l| Line::from(format!("    {l}"))));
    if !item.inteiro_teor_url.is_empty() {
        out.push(Line::from(vec![
            Span::styled("  🔗 Ver Inteiro Teor: ", theme.result_label),
            Span::styled(item.inteiro_teor_url.clone(), theme.link),
        ]));
    }
    out
}

pub fn section_lines(sections: &[AnalysisSection], theme: &Theme) -> Vec<Line<'static>> {
    let count = sections.len();
    let mut out = vec![
        Line::from(vec![
            Span::styled("Análise Jurídica Completa", theme.result_title),
            Span::styled(format!("   ✅ {count} Seções"), theme.dim),
        ]),
        Line::default(),
    ];
    for (i, section) in sections.iter().enumerate() {
        out.push(Line::from(vec![
            Span::styled(
                format!("{} {}", section.emoji, section.titulo),
                theme.section_style(section.emoji),
            ),
            Span::styled(format!("  Seção {} de {count}", i + 1), theme.dim),
        ]));
        out.extend(section.conteudo.lines().map(|l| Line::from(l.to_string())));
        out.push(Line::default());
    }
    out
}

fn labelled(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), theme.result_label),
        Span::raw(value),
    ])
}
