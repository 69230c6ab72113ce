#![allow(unused)]
//! Jurisprudence envelope integration harness.
//!
//! # What this covers
//!
//! - **Body decoding**: empty bodies fail, non-JSON bodies become
//!   narratives.
//! - **Structured pages**: at the top level, inside `resumoIA` as a JSON
//!   string, with and without the stray `=` prefix.
//! - **Narratives**: any `resumoIA` that does not parse into a page with
//!   `data` is kept verbatim and split into sections.
//!
//! # Running
//!
//! ```sh
//! cargo test --test envelope_harness
//! ```

mod common;
use common::*;
use juris_core::{decode_body, unwrap_envelope, JurisprudenceOutcome, QueryError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn outcome(body: &str) -> JurisprudenceOutcome {
    unwrap_envelope(decode_body(body).expect("body decodes"))
}

#[test]
fn empty_body_is_an_error() {
    assert_eq!(decode_body(""), Err(QueryError::EmptyResponse));
}

#[test]
fn top_level_page() {
    let out = outcome(JURIS_STRUCTURED);
    let page = assert_structured!(out);
    assert_eq!(page.total, 2);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].orgao_julgador, "Terceira Turma");
    assert_eq!(page.data[0].publicacao_data.as_deref(), Some("2023-05-15"));
    assert_eq!(page.data[1].publicacao_data, None);
}

#[test]
fn equals_prefixed_page_inside_envelope() {
    let out = outcome(JURIS_EQUALS_PREFIXED);
    let page = assert_structured!(out);
    assert_eq!((page.total, page.page, page.page_size), (1, 2, 5));
    assert_eq!(page.data[0].titulo, "HC 1");
}

#[test]
fn non_json_body_is_a_narrative() {
    let out = outcome(NARRATIVE_MARKERS);
    let (text, sections) = assert_narrative!(out);
    assert_eq!(text, NARRATIVE_MARKERS);
    assert_section_titles!(*sections, ["Resumo Geral", "Decisão", "Consequência Jurídica"]);
}

#[test]
fn envelope_narrative_is_kept_verbatim() {
    let out = unwrap_envelope(envelope(NARRATIVE_BARE));
    let (text, sections) = assert_narrative!(out);
    assert_eq!(text, NARRATIVE_BARE);
    assert_eq!(sections.len(), 2);
}

#[rstest]
#[case::no_data(r#"{"total":3}"#)]
#[case::empty_string_data(r#"{"data":""}"#)]
#[case::null_data(r#"{"data":null}"#)]
#[case::zero_data(r#"{"data":0}"#)]
fn page_without_usable_data_is_narrative(#[case] inner: &str) {
    let out = unwrap_envelope(envelope(inner));
    let (text, _) = assert_narrative!(out);
    assert_eq!(text, inner);
}

#[rstest]
#[case::null(json!(null))]
#[case::empty(json!(""))]
#[case::falsy(json!(false))]
#[case::zero(json!(0))]
#[case::float_zero(json!(0.0))]
fn absent_envelope_means_top_level_page(#[case] resumo: serde_json::Value) {
    let out = unwrap_envelope(json!({ "resumoIA": resumo, "total": 7, "data": [] }));
    let page = assert_structured!(out);
    assert_eq!(page.total, 7);
    assert!(page.data.is_empty());
}
