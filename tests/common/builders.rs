//! Test builders for raw webhook payloads.
//!
//! These produce the untyped JSON the webhooks send, so harnesses can vary
//! one field at a time without hand-writing whole documents.

use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// RawProcessBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a process-lookup response body.
///
/// ```rust
/// let raw = RawProcessBuilder::new("00277463920218272729")
///     .tribunal("TJTO")
///     .movement("2023-03-02", "Conclusos")
///     .build();
/// ```
#[derive(Default)]
pub struct RawProcessBuilder {
    fields: Map<String, Value>,
    movements: Vec<Value>,
}

impl RawProcessBuilder {
    pub fn new(numero: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("numeroProcesso".into(), Value::String(numero.into()));
        Self { fields, movements: Vec::new() }
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn tribunal(self, tribunal: &str) -> Self {
        self.field("tribunal", tribunal)
    }

    pub fn status(self, status: &str) -> Self {
        self.field("status", status)
    }

    pub fn parties(self, requerente: &str, requerido: &str) -> Self {
        self.field("partes", json!({ "requerente": requerente, "requerido": requerido }))
    }

    pub fn movement(mut self, data: &str, descricao: &str) -> Self {
        self.movements.push(json!({ "data": data, "descricao": descricao }));
        self
    }

    pub fn build(mut self) -> Value {
        if !self.movements.is_empty() {
            self.fields.insert("movimentacoes".into(), Value::Array(self.movements));
        }
        Value::Object(self.fields)
    }

    /// The body wrapped in a one-element array.
    pub fn build_wrapped(self) -> Value {
        Value::Array(vec![self.build()])
    }
}

// ---------------------------------------------------------------------------
// Narratives
// ---------------------------------------------------------------------------

/// Join `(emoji, title, content)` triples into a marker-style narrative.
pub fn narrative(sections: &[(&str, &str, &str)]) -> String {
    sections
        .iter()
        .map(|(emoji, title, content)| format!("{emoji}**{title}**{content}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap any value as the `resumoIA` envelope.
pub fn envelope(resumo: impl Into<Value>) -> Value {
    json!({ "resumoIA": resumo.into() })
}
