//! Jurisprudence response envelope.
//!
//! The jurisprudence webhook either answers with the structured page
//! directly, or wraps it as a JSON *string* under `resumoIA` (sometimes
//! prefixed with a stray `=`), or puts free AI narrative text in the same
//! field. [`unwrap_envelope`] decides which of those it got.

use crate::error::QueryError;
use crate::fields::{count_or, text};
use crate::sections::parse_sections;
use crate::types::{JurisprudenceItem, JurisprudenceOutcome, JurisprudenceResult};
use serde_json::{json, Map, Value};

const ENVELOPE_KEY: &str = "resumoIA";

/// Decode a raw response body.
///
/// An empty body is an error. A body that is not JSON is treated as plain
/// narrative text and wrapped as `{"resumoIA": body}`.
pub fn decode_body(body: &str) -> Result<Value, QueryError> {
    if body.is_empty() {
        return Err(QueryError::EmptyResponse);
    }
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!(error = %e, "envelope: body is not JSON, treating as narrative");
            Ok(json!({ ENVELOPE_KEY: body }))
        }
    }
}

/// Classify a decoded jurisprudence response.
pub fn unwrap_envelope(response: Value) -> JurisprudenceOutcome {
    let Some(raw) = envelope_text(&response) else {
        tracing::debug!("envelope: no resumoIA, top level is the result");
        return JurisprudenceOutcome::Structured(structured_from(&response));
    };

    let candidate = raw
        .strip_prefix('=')
        .filter(|rest| rest.starts_with('{'))
        .unwrap_or(raw.as_str());

    match serde_json::from_str::<Value>(candidate) {
        Ok(parsed) if has_data(&parsed) => {
            tracing::debug!("envelope: structured result inside resumoIA");
            JurisprudenceOutcome::Structured(structured_from(&parsed))
        }
        Ok(_) | Err(_) => {
            tracing::debug!(len = raw.len(), "envelope: narrative resumoIA");
            let sections = parse_sections(&raw);
            JurisprudenceOutcome::Narrative { text: raw, sections }
        }
    }
}

/// `resumoIA` as text. Empty strings, `null`, `false` and `0` count as
/// absent; other non-string values are re-serialized.
fn envelope_text(response: &Value) -> Option<String> {
    match response.as_object()?.get(ENVELOPE_KEY)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

// `data` must be present and not one of the falsy scalars.
fn has_data(parsed: &Value) -> bool {
    let Some(data) = parsed.as_object().and_then(|o| o.get("data")) else {
        return false;
    };
    match data {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) | Value::Bool(true) => true,
    }
}

fn structured_from(value: &Value) -> JurisprudenceResult {
    let defaults = JurisprudenceResult::default();
    let Some(obj) = value.as_object() else {
        return defaults;
    };
    JurisprudenceResult {
        total: count_or(obj, "total", defaults.total),
        page: count_or(obj, "page", defaults.page),
        page_size: count_or(obj, "pageSize", defaults.page_size),
        data: obj
            .get("data")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_object).map(item_from).collect())
            .unwrap_or_default(),
    }
}

fn item_from(obj: &Map<String, Value>) -> JurisprudenceItem {
    let field = |key: &str| text(obj, key).unwrap_or_default();
    JurisprudenceItem {
        id_documento: field("idDocumento"),
        titulo: field("titulo"),
        ministro: field("ministro"),
        orgao_julgador: field("orgao_julgador"),
        ementa: field("ementa"),
        julgamento_data: field("julgamento_data"),
        publicacao_data: text(obj, "publicacao_data").filter(|d| !d.is_empty()),
        inteiro_teor_url: field("inteiro_teor_url"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
