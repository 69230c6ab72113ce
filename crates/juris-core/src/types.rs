//! Core types for juris-core.
//!
//! The webhook payloads are untyped and change shape between deployments, so
//! every record here is built by a single boundary function
//! ([`crate::normalize`], [`crate::unwrap_envelope`]) rather than by a
//! derived `Deserialize`. The types only derive `Serialize`, which the
//! headless `--json` output and the summary request use.

use serde::Serialize;

/// One judicial case as returned by the process-lookup webhook.
///
/// All scalar fields are optional: the rendering layer substitutes
/// "Não informado" for anything missing. Keys the normalizer does not know
/// are kept in `extra` so nothing the source sent is lost.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_processo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tribunal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_distribuicao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vara: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assunto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partes: Option<Parties>,
    /// Movements in source order (most relevant first). Never re-sorted.
    pub movimentacoes: Vec<Movement>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Plaintiff / defendant names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requerente: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requerido: Option<String>,
}

/// A single docket movement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Movement {
    pub data: String,
    pub descricao: String,
}

/// The "process not found" business outcome. Not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundResult {
    pub mensagem: String,
}

/// Result of normalizing one process-lookup response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resultado", rename_all = "snake_case")]
pub enum ProcessOutcome {
    #[serde(rename = "encontrado")]
    Found(ProcessRecord),
    #[serde(rename = "nao_encontrado")]
    NotFound(NotFoundResult),
}

impl ProcessOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProcessOutcome::NotFound(_))
    }

    pub fn record(&self) -> Option<&ProcessRecord> {
        match self {
            ProcessOutcome::Found(record) => Some(record),
            ProcessOutcome::NotFound(_) => None,
        }
    }
}

/// One labelled block of an AI-generated case-law analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSection {
    pub emoji: &'static str,
    pub titulo: &'static str,
    pub conteudo: String,
}

/// One case-law document returned by the jurisprudence webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JurisprudenceItem {
    #[serde(rename = "idDocumento")]
    pub id_documento: String,
    pub titulo: String,
    pub ministro: String,
    pub orgao_julgador: String,
    pub ementa: String,
    pub julgamento_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicacao_data: Option<String>,
    pub inteiro_teor_url: String,
}

/// A page of structured case-law results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisprudenceResult {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub data: Vec<JurisprudenceItem>,
}

impl Default for JurisprudenceResult {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            page_size: 10,
            data: Vec::new(),
        }
    }
}

/// Result of unwrapping one jurisprudence-webhook response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "formato", rename_all = "snake_case")]
pub enum JurisprudenceOutcome {
    #[serde(rename = "estruturado")]
    Structured(JurisprudenceResult),
    #[serde(rename = "narrativo")]
    Narrative {
        text: String,
        sections: Vec<AnalysisSection>,
    },
}

/// AI summary of a process' movements, as Markdown-flavoured text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub resumo: String,
}
