//! Section parser. Splits an AI case-law narrative into labelled sections.
//!
//! The narrative marks each section with one of six emoji followed by a
//! bold title, e.g. `📌**Resumo**`. Parsing falls back in a fixed order:
//!
//! 1. emoji + `**title**` markers;
//! 2. bare emoji, paired with the text that follows each one;
//! 3. a single "Análise Completa" section holding the whole text.
//!
//! Downstream rendering depends on that order, so the cascade must not be
//! collapsed into a single heuristic.

use crate::types::AnalysisSection;
use regex::Regex;
use std::sync::LazyLock;

pub const FALLBACK_EMOJI: &str = "📋";
pub const FALLBACK_TITLE: &str = "Análise Completa";

const JUDGE: &str = "\u{1F9D1}\u{200D}\u{2696}\u{FE0F}";

/// The six section emoji in presentation order.
pub const SECTION_EMOJI: [&str; 6] = ["📌", JUDGE, "📄", "\u{2696}\u{FE0F}", "📚", "🔍"];

static SECTION_TITLES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "📌" => "Resumo Geral",
    "\u{1F9D1}\u{200D}\u{2696}\u{FE0F}" => "Decisão",
    "📄" => "Contexto do Caso",
    "\u{2696}\u{FE0F}" => "Fundamentação",
    "📚" => "Consequência Jurídica",
    "🔍" => "Observações Finais",
};

// The judge sequence is listed before the bare scales so the leftmost match
// at a 🧑 consumes the whole sequence.
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&emoji_alternation()).expect("section emoji pattern must compile")
});

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"({})\*\*[^*]+\*\*", emoji_alternation());
    Regex::new(&pattern).expect("section marker pattern must compile")
});

fn emoji_alternation() -> String {
    SECTION_EMOJI
        .iter()
        .map(|e| regex::escape(e))
        .collect::<Vec<_>>()
        .join("|")
}

/// Title for one of the six section emoji.
pub fn title_for(emoji: &str) -> Option<&'static str> {
    SECTION_TITLES.get(emoji).copied()
}

/// Parse a narrative into ordered sections. Never returns an empty vector.
pub fn parse_sections(text: &str) -> Vec<AnalysisSection> {
    let cleaned = clean(text);

    let markers: Vec<(usize, usize, &str)> = MARKER_RE
        .captures_iter(&cleaned)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let emoji = caps.get(1)?;
            Some((whole.start(), whole.end(), emoji.as_str()))
        })
        .collect();

    let sections = if markers.is_empty() {
        match bare_emoji_sections(&cleaned) {
            Some(sections) => sections,
            None => {
                tracing::debug!("sections: no structure, single catch-all");
                return vec![catch_all(cleaned)];
            }
        }
    } else {
        marker_sections(&cleaned, &markers)
    };

    if sections.is_empty() {
        tracing::debug!("sections: nothing emitted, single catch-all");
        return vec![catch_all(cleaned)];
    }
    tracing::debug!(count = sections.len(), "sections: parsed");
    sections
}

fn marker_sections(cleaned: &str, markers: &[(usize, usize, &str)]) -> Vec<AnalysisSection> {
    markers
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, end, emoji))| {
            let next = markers.get(i + 1).map_or(cleaned.len(), |&(start, _, _)| start);
            section(emoji, cleaned[end..next].trim())
        })
        .collect()
}

/// `None` when the bare split finds at most one segment.
fn bare_emoji_sections(cleaned: &str) -> Option<Vec<AnalysisSection>> {
    let mut parts = Vec::new();
    let mut last = 0;
    for m in EMOJI_RE.find_iter(cleaned) {
        parts.push(&cleaned[last..m.start()]);
        parts.push(m.as_str());
        last = m.end();
    }
    parts.push(&cleaned[last..]);
    parts.retain(|p| !p.trim().is_empty());

    if parts.len() <= 1 {
        return None;
    }

    // Segments are consumed strictly in (emoji, text) pairs from the start,
    // so a leading preface shifts every pair and nothing is emitted.
    Some(
        parts
            .chunks(2)
            .filter_map(|pair| match pair {
                [emoji, content] => section(emoji, content.trim()),
                _ => None,
            })
            .collect(),
    )
}

fn section(emoji: &str, content: &str) -> Option<AnalysisSection> {
    if content.is_empty() {
        return None;
    }
    let (&emoji, &titulo) = SECTION_TITLES.get_entry(emoji)?;
    Some(AnalysisSection {
        emoji,
        titulo,
        conteudo: content.to_string(),
    })
}

fn catch_all(conteudo: String) -> AnalysisSection {
    AnalysisSection {
        emoji: FALLBACK_EMOJI,
        titulo: FALLBACK_TITLE,
        conteudo,
    }
}

/// Drop zero-width characters and surrounding whitespace.
///
/// U+200D is kept only inside 🧑‍⚖️, where it is part of the emoji itself;
/// removing it would split the judge marker into 🧑 and ⚖️.
fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev = None;
    while let Some(c) = chars.next() {
        match c {
            '\u{200B}' | '\u{200C}' | '\u{FEFF}' => continue,
            '\u{200D}' if prev == Some('\u{1F9D1}') && chars.peek() == Some(&'\u{2696}') => {}
            '\u{200D}' => continue,
            _ => {}
        }
        out.push(c);
        prev = Some(c);
    }
    out.trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
