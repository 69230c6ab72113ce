//! Request bodies sent to the webhooks.

use crate::keywords::KeywordSet;
use crate::types::{Movement, ProcessRecord};
use serde::Serialize;

/// `{numeroProcesso, estado}` for the process-lookup webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessQuery {
    pub numero_processo: String,
    pub estado: String,
}

impl ProcessQuery {
    pub fn new(numero_processo: impl Into<String>, estado: impl Into<String>) -> Self {
        Self {
            numero_processo: numero_processo.into(),
            estado: estado.into(),
        }
    }
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// `{tema, palavrasChave, page, pageSize}` for the jurisprudence webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisprudenceQuery {
    pub tema: String,
    pub palavras_chave: KeywordSet,
    pub page: u32,
    pub page_size: u32,
}

impl Default for JurisprudenceQuery {
    fn default() -> Self {
        Self {
            tema: String::new(),
            palavras_chave: KeywordSet::new(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl JurisprudenceQuery {
    pub fn new(tema: impl Into<String>) -> Self {
        Self {
            tema: tema.into(),
            ..Self::default()
        }
    }
}

/// Body of the movement-summary webhook, taken from a rendered record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub numero_processo: String,
    pub tribunal: String,
    pub status: String,
    pub classe: String,
    pub assunto: String,
    pub movimentacoes: Vec<Movement>,
}

impl From<&ProcessRecord> for SummaryRequest {
    fn from(record: &ProcessRecord) -> Self {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            numero_processo: field(&record.numero_processo),
            tribunal: field(&record.tribunal),
            status: field(&record.status),
            classe: field(&record.classe),
            assunto: field(&record.assunto),
            movimentacoes: record.movimentacoes.clone(),
        }
    }
}
