//! Normalizer: turns a decoded process-lookup response into a [`ProcessOutcome`].
//!
//! Checks are applied in order: array unwrap → `status` sentinel →
//! `mensagem` marker → process record. The function never fails; anything
//! that is not recognisably "not found" becomes a (possibly empty) record.
//! A body that is not an object survives as `extra["_raw"]`.

use crate::fields::{text, value_text};
use crate::types::{Movement, NotFoundResult, Parties, ProcessOutcome, ProcessRecord};
use serde_json::{Map, Value};

/// Sentinel value of the `status` field for a missing process.
pub const NOT_FOUND_STATUS: &str = "nao_encontrado";

/// Substring of `mensagem` that marks a missing process even without `status`.
pub const NOT_FOUND_MARKER: &str = "❌ Processo não encontrado";

/// Message used when the sentinel arrives without a usable `mensagem`.
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Processo não encontrado no tribunal informado.";

/// `extra` key holding a body that was not a JSON object.
pub const RAW_KEY: &str = "_raw";

/// Tribunal abbreviations expanded to their display name.
static TRIBUNAL_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "TJTO" => "Tribunal de Justiça do Tocantins - TO",
};

const KNOWN_KEYS: &[&str] = &[
    "numeroProcesso",
    "tribunal",
    "dataDistribuicao",
    "vara",
    "assunto",
    "status",
    "classe",
    "partes",
    "movimentacoes",
];

/// Normalize the decoded body of a process-lookup response.
pub fn normalize(raw: Value) -> ProcessOutcome {
    let working = match raw {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        other => other,
    };

    let empty = Map::new();
    let obj = working.as_object().unwrap_or(&empty);

    if text(obj, "status").as_deref() == Some(NOT_FOUND_STATUS) {
        let mensagem = text(obj, "mensagem")
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_NOT_FOUND_MESSAGE.to_string());
        tracing::debug!(%mensagem, "normalizer: status sentinel");
        return ProcessOutcome::NotFound(NotFoundResult { mensagem });
    }

    if let Some(mensagem) = text(obj, "mensagem").filter(|m| m.contains(NOT_FOUND_MARKER)) {
        tracing::debug!(%mensagem, "normalizer: message marker");
        return ProcessOutcome::NotFound(NotFoundResult { mensagem });
    }

    let mut record = record_from(obj);
    match working {
        Value::Object(_) | Value::Null => {}
        Value::Array(ref items) if items.is_empty() => {}
        other => {
            tracing::debug!(raw = %other, "normalizer: non-object body kept as raw");
            record.extra.insert(RAW_KEY.to_string(), other);
        }
    }
    tracing::debug!(
        numero = record.numero_processo.as_deref().unwrap_or(""),
        movements = record.movimentacoes.len(),
        "normalizer: process record"
    );
    ProcessOutcome::Found(record)
}

/// Expand a known tribunal abbreviation; other values pass through.
pub fn expand_tribunal(tribunal: &str) -> &str {
    TRIBUNAL_NAMES.get(tribunal).copied().unwrap_or(tribunal)
}

fn record_from(obj: &Map<String, Value>) -> ProcessRecord {
    let extra = obj
        .iter()
        .filter(|(k, _)| !KNOWN_KEYS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    ProcessRecord {
        numero_processo: text(obj, "numeroProcesso").map(|n| n.trim().to_string()),
        tribunal: text(obj, "tribunal").map(|t| expand_tribunal(&t).to_string()),
        data_distribuicao: text(obj, "dataDistribuicao"),
        vara: text(obj, "vara"),
        assunto: text(obj, "assunto"),
        status: text(obj, "status"),
        classe: text(obj, "classe"),
        partes: obj.get("partes").and_then(Value::as_object).map(parties_from),
        movimentacoes: obj
            .get("movimentacoes")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(movement_from).collect())
            .unwrap_or_default(),
        extra,
    }
}

// One deployment sends `autor`/`reu` instead of `requerente`/`requerido`.
fn parties_from(obj: &Map<String, Value>) -> Parties {
    Parties {
        requerente: text(obj, "requerente").or_else(|| text(obj, "autor")),
        requerido: text(obj, "requerido").or_else(|| text(obj, "reu")),
    }
}

fn movement_from(value: &Value) -> Option<Movement> {
    let obj = value.as_object()?;
    let data = obj.get("data").and_then(value_text).unwrap_or_default();
    let descricao = obj.get("descricao").and_then(value_text).unwrap_or_default();
    if data.is_empty() && descricao.is_empty() {
        return None;
    }
    Some(Movement { data, descricao })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn found(outcome: ProcessOutcome) -> ProcessRecord {
        match outcome {
            ProcessOutcome::Found(record) => record,
            other => panic!("expected a process record, got {other:?}"),
        }
    }

    fn not_found(outcome: ProcessOutcome) -> String {
        match outcome {
            ProcessOutcome::NotFound(nf) => nf.mensagem,
            other => panic!("expected not-found, got {other:?}"),
        }
    }

    #[test]
    fn status_sentinel_uses_message() {
        let out = normalize(json!({"status": "nao_encontrado", "mensagem": "Sem registros"}));
        assert_eq!(not_found(out), "Sem registros");
    }

    #[rstest]
    #[case::absent(json!({"status": "nao_encontrado"}))]
    #[case::empty(json!({"status": "nao_encontrado", "mensagem": ""}))]
    #[case::null(json!({"status": "nao_encontrado", "mensagem": null}))]
    fn status_sentinel_defaults_message(#[case] raw: Value) {
        assert_eq!(not_found(normalize(raw)), DEFAULT_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn message_marker_without_status() {
        let msg = "❌ Processo não encontrado no TJSP";
        let out = normalize(json!({"mensagem": msg}));
        assert_eq!(not_found(out), msg);
    }

    #[test]
    fn message_without_marker_is_a_record() {
        let out = normalize(json!({"mensagem": "Consulta realizada", "vara": "1ª Vara"}));
        let record = found(out);
        assert_eq!(record.vara.as_deref(), Some("1ª Vara"));
        assert_eq!(record.extra.get("mensagem"), Some(&json!("Consulta realizada")));
    }

    #[test]
    fn array_wrapped_uses_first_element() {
        let out = normalize(json!([
            {"status": "nao_encontrado", "mensagem": "primeiro"},
            {"numeroProcesso": "segundo"}
        ]));
        assert_eq!(not_found(out), "primeiro");
    }

    #[test]
    fn empty_array_is_an_empty_record() {
        let record = found(normalize(json!([])));
        assert_eq!(record, ProcessRecord::default());
    }

    #[test]
    fn null_is_an_empty_record() {
        assert_eq!(found(normalize(Value::Null)), ProcessRecord::default());
    }

    #[rstest]
    #[case::number(json!(42), json!(42))]
    #[case::string(json!("texto"), json!("texto"))]
    #[case::boolean(json!(true), json!(true))]
    #[case::first_of_array(json!(["texto", {"numeroProcesso": "x"}]), json!("texto"))]
    fn non_objects_are_kept_raw(#[case] raw: Value, #[case] kept: Value) {
        let record = found(normalize(raw));
        assert_eq!(record.extra.get(RAW_KEY), Some(&kept));
        assert_eq!(record.extra.len(), 1);
        assert_eq!(record.numero_processo, None);
    }

    #[test]
    fn trims_number_and_expands_tjto() {
        let record = found(normalize(json!({
            "numeroProcesso": "  00277463920218272729 \n",
            "tribunal": "TJTO",
            "status": "Em andamento"
        })));
        assert_eq!(record.numero_processo.as_deref(), Some("00277463920218272729"));
        assert_eq!(
            record.tribunal.as_deref(),
            Some("Tribunal de Justiça do Tocantins - TO")
        );
        assert_eq!(record.status.as_deref(), Some("Em andamento"));
    }

    #[test]
    fn other_tribunals_pass_through() {
        let record = found(normalize(json!({"tribunal": " TJSP "})));
        assert_eq!(record.tribunal.as_deref(), Some(" TJSP "));
    }

    #[test]
    fn other_fields_are_not_trimmed() {
        let record = found(normalize(json!({"vara": " 2ª Vara Cível ", "assunto": "x "})));
        assert_eq!(record.vara.as_deref(), Some(" 2ª Vara Cível "));
        assert_eq!(record.assunto.as_deref(), Some("x "));
    }

    #[test]
    fn movements_keep_source_order() {
        let record = found(normalize(json!({
            "movimentacoes": [
                {"data": "20/05/2022", "descricao": "Sentença proferida"},
                {"data": "10/04/2022", "descricao": "Audiência realizada"},
                {"data": "15/03/2021", "descricao": "Processo distribuído"}
            ]
        })));
        let descs: Vec<_> = record.movimentacoes.iter().map(|m| m.descricao.as_str()).collect();
        assert_eq!(
            descs,
            ["Sentença proferida", "Audiência realizada", "Processo distribuído"]
        );
    }

    #[test]
    fn malformed_movements_are_skipped() {
        let record = found(normalize(json!({
            "movimentacoes": ["texto", {}, {"descricao": "Conclusos"}]
        })));
        assert_eq!(
            record.movimentacoes,
            vec![Movement { data: String::new(), descricao: "Conclusos".into() }]
        );
    }

    #[test]
    fn parties_accept_alternate_keys() {
        let record = found(normalize(json!({"partes": {"autor": "Ana", "reu": "Beto"}})));
        assert_eq!(
            record.partes,
            Some(Parties { requerente: Some("Ana".into()), requerido: Some("Beto".into()) })
        );
    }

    #[test]
    fn numeric_process_number_is_coerced() {
        let record = found(normalize(json!({"numeroProcesso": 123})));
        assert_eq!(record.numero_processo.as_deref(), Some("123"));
    }
}
