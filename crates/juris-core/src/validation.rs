//! Form validation for the two query forms.
//!
//! Each form collects every field error instead of stopping at the first
//! one, so the front end can mark all offending fields at once.

use crate::error::ValidationError;
use crate::query::{JurisprudenceQuery, ProcessQuery};
use crate::states::canonical_sigla;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Length every CNJ process number is checked against.
pub const PROCESS_NUMBER_DIGITS: usize = 20;

pub const MAX_PAGE_SIZE: u32 = 100;

/// How the length of a process number is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessNumberRule {
    /// At least [`PROCESS_NUMBER_DIGITS`] digits.
    #[default]
    MinDigits,
    /// Exactly [`PROCESS_NUMBER_DIGITS`] digits.
    ExactDigits,
}

impl ProcessNumberRule {
    fn accepts(self, len: usize) -> bool {
        match self {
            ProcessNumberRule::MinDigits => len >= PROCESS_NUMBER_DIGITS,
            ProcessNumberRule::ExactDigits => len == PROCESS_NUMBER_DIGITS,
        }
    }

    fn length_message(self) -> String {
        match self {
            ProcessNumberRule::MinDigits => format!(
                "O número do processo deve ter pelo menos {PROCESS_NUMBER_DIGITS} dígitos"
            ),
            ProcessNumberRule::ExactDigits => format!(
                "O número do processo deve ter exatamente {PROCESS_NUMBER_DIGITS} dígitos"
            ),
        }
    }
}

impl FromStr for ProcessNumberRule {
    type Err = String;

    /// Accepts the CLI spellings (`minimo`, `exato`) and the config ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimo" | "mínimo" | "min_digits" => Ok(ProcessNumberRule::MinDigits),
            "exato" | "exact_digits" => Ok(ProcessNumberRule::ExactDigits),
            other => Err(format!("regra desconhecida: '{other}' (use minimo ou exato)")),
        }
    }
}

impl fmt::Display for ProcessNumberRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessNumberRule::MinDigits => f.write_str("minimo"),
            ProcessNumberRule::ExactDigits => f.write_str("exato"),
        }
    }
}

/// Check a process number on its own.
pub fn validate_process_number(
    numero: &str,
    rule: ProcessNumberRule,
) -> Result<(), ValidationError> {
    let numero = numero.trim();
    let field = "numeroProcesso";
    if numero.is_empty() {
        return Err(ValidationError::new(field, "Número do processo é obrigatório"));
    }
    if !numero.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            "O número do processo deve conter apenas dígitos",
        ));
    }
    if !rule.accepts(numero.len()) {
        return Err(ValidationError::new(field, rule.length_message()));
    }
    Ok(())
}

/// Check a state sigla, returning its canonical upper-case form.
pub fn validate_state(estado: &str) -> Result<&'static str, ValidationError> {
    let estado = estado.trim();
    if estado.is_empty() {
        return Err(ValidationError::new("estado", "Selecione um estado"));
    }
    canonical_sigla(estado)
        .ok_or_else(|| ValidationError::new("estado", format!("Estado inválido: {estado}")))
}

/// Validate the process form and build the request body.
pub fn validate_process_query(
    numero: &str,
    estado: &str,
    rule: ProcessNumberRule,
) -> Result<ProcessQuery, Vec<ValidationError>> {
    let numero_result = validate_process_number(numero, rule);
    let estado_result = validate_state(estado);
    match (numero_result, estado_result) {
        (Ok(()), Ok(sigla)) => Ok(ProcessQuery::new(numero.trim(), sigla)),
        (numero_result, estado_result) => Err(numero_result
            .err()
            .into_iter()
            .chain(estado_result.err())
            .collect()),
    }
}

/// Validate a jurisprudence query; the returned copy has `tema` trimmed.
pub fn validate_jurisprudence_query(
    query: &JurisprudenceQuery,
) -> Result<JurisprudenceQuery, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let tema = query.tema.trim();
    if tema.is_empty() {
        errors.push(ValidationError::new(
            "tema",
            "Por favor, preencha o tema da consulta.",
        ));
    }
    if query.page < 1 {
        errors.push(ValidationError::new("page", "A página deve ser maior ou igual a 1"));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&query.page_size) {
        errors.push(ValidationError::new(
            "pageSize",
            format!("O tamanho da página deve estar entre 1 e {MAX_PAGE_SIZE}"),
        ));
    }
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "validation: jurisprudence form rejected");
        return Err(errors);
    }
    Ok(JurisprudenceQuery {
        tema: tema.to_string(),
        ..query.clone()
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
