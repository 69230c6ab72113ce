//! Minimal line-oriented Markdown for AI movement summaries.
//!
//! Only what the summary webhook actually emits is recognised: `##` / `###`
//! headings, `•` / `-` bullets, blank lines and `**bold**` spans. Everything
//! else is a paragraph.

use regex::Regex;
use std::sync::LazyLock;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern must compile"));

/// A run of text with uniform weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: false }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryBlock {
    Heading { level: u8, spans: Vec<Span> },
    Bullet(Vec<Span>),
    Paragraph(Vec<Span>),
    Blank,
}

/// Split a summary into blocks, one per input line.
pub fn format_summary(text: &str) -> Vec<SummaryBlock> {
    text.lines().map(block).collect()
}

fn block(line: &str) -> SummaryBlock {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return SummaryBlock::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix("### ") {
        return SummaryBlock::Heading { level: 3, spans: inline(rest.trim()) };
    }
    if let Some(rest) = trimmed.strip_prefix("## ") {
        return SummaryBlock::Heading { level: 2, spans: inline(rest.trim()) };
    }
    if let Some(rest) = trimmed.strip_prefix("• ").or_else(|| trimmed.strip_prefix("- ")) {
        return SummaryBlock::Bullet(inline(rest.trim()));
    }
    SummaryBlock::Paragraph(inline(trimmed))
}

/// Split a line into plain and bold spans. An unmatched `**` stays literal.
pub fn inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in BOLD_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::plain(&text[last..whole.start()]));
        }
        spans.push(Span::bold(inner.as_str()));
        last = whole.end();
    }
    if last < text.len() {
        spans.push(Span::plain(&text[last..]));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognises_block_kinds() {
        let out = format_summary("## Resumo\n### Detalhes\n• item um\n- item dois\n\nTexto final");
        assert_eq!(
            out,
            vec![
                SummaryBlock::Heading { level: 2, spans: vec![Span::plain("Resumo")] },
                SummaryBlock::Heading { level: 3, spans: vec![Span::plain("Detalhes")] },
                SummaryBlock::Bullet(vec![Span::plain("item um")]),
                SummaryBlock::Bullet(vec![Span::plain("item dois")]),
                SummaryBlock::Blank,
                SummaryBlock::Paragraph(vec![Span::plain("Texto final")]),
            ]
        );
    }

    #[test]
    fn bold_spans_split_the_line() {
        assert_eq!(
            inline("Status: **Em andamento** desde **2021**"),
            vec![
                Span::plain("Status: "),
                Span::bold("Em andamento"),
                Span::plain(" desde "),
                Span::bold("2021"),
            ]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(inline("a ** b"), vec![Span::plain("a ** b")]);
        assert_eq!(inline("****"), vec![Span::plain("****")]);
    }

    #[test]
    fn heading_needs_a_space() {
        assert_eq!(
            format_summary("###sem espaço"),
            vec![SummaryBlock::Paragraph(vec![Span::plain("###sem espaço")])]
        );
    }

    #[test]
    fn empty_line_yields_no_spans() {
        assert!(inline("").is_empty());
    }
}
