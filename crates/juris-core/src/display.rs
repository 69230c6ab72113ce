//! Presentation helpers shared by the TUI and the headless cards.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const NOT_INFORMED: &str = "Não informado";

/// The value, or "Não informado" when missing or blank.
pub fn or_not_informed(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_INFORMED,
    }
}

/// Render an ISO date or RFC 3339 timestamp as `dd/mm/yyyy`.
///
/// Anything that does not parse (including dates already in Brazilian
/// format) is returned unchanged.
pub fn format_date_br(value: &str) -> String {
    let trimmed = value.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Colour class of a process status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Active,
    Closed,
}

impl StatusKind {
    pub fn classify(status: &str) -> Self {
        match status.trim() {
            "Arquivado" | "Concluído" => StatusKind::Closed,
            _ => StatusKind::Active,
        }
    }
}

/// Number of pages for a result page, at least 1.
pub fn page_count(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}
