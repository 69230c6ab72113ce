//! Domain-specific assertion macros for juris harnesses.
//!
//! These add context to failures so it is clear which outcome shape was
//! expected and what actually came back.

// ---------------------------------------------------------------------------
// Process outcomes
// ---------------------------------------------------------------------------

/// Assert a `ProcessOutcome` is `NotFound` with the given message.
///
/// ```rust
/// assert_not_found!(outcome, "Sem registros");
/// ```
#[macro_export]
macro_rules! assert_not_found {
    ($outcome:expr, $mensagem:expr) => {{
        let outcome: &juris_core::ProcessOutcome = &$outcome;
        let expected: &str = $mensagem;
        match outcome {
            juris_core::ProcessOutcome::NotFound(nf) if nf.mensagem == expected => {}
            juris_core::ProcessOutcome::NotFound(nf) => panic!(
                "assert_not_found! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, nf.mensagem
            ),
            juris_core::ProcessOutcome::Found(record) => panic!(
                "assert_not_found! failed: got a record instead.\n  {:?}",
                record
            ),
        }
    }};
}

/// Unwrap a `ProcessOutcome::Found`, panicking with the not-found message
/// otherwise. Evaluates to `&ProcessRecord`.
#[macro_export]
macro_rules! assert_found {
    ($outcome:expr) => {{
        match &$outcome {
            juris_core::ProcessOutcome::Found(record) => record,
            juris_core::ProcessOutcome::NotFound(nf) => panic!(
                "assert_found! failed: outcome is NotFound({:?})",
                nf.mensagem
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Jurisprudence outcomes
// ---------------------------------------------------------------------------

/// Assert the titles of parsed sections, in order.
///
/// ```rust
/// assert_section_titles!(sections, ["Resumo Geral", "Decisão"]);
/// ```
#[macro_export]
macro_rules! assert_section_titles {
    ($sections:expr, [$($title:expr),* $(,)?]) => {{
        let sections: &[juris_core::AnalysisSection] = &$sections;
        let actual: Vec<&str> = sections.iter().map(|s| s.titulo).collect();
        let expected: Vec<&str> = vec![$($title),*];
        pretty_assertions::assert_eq!(actual, expected, "section titles differ");
    }};
}

/// Unwrap a `JurisprudenceOutcome::Structured`. Evaluates to
/// `&JurisprudenceResult`.
#[macro_export]
macro_rules! assert_structured {
    ($outcome:expr) => {{
        match &$outcome {
            juris_core::JurisprudenceOutcome::Structured(result) => result,
            other => panic!("assert_structured! failed: got {:?}", other),
        }
    }};
}

/// Unwrap a `JurisprudenceOutcome::Narrative`. Evaluates to
/// `(&String, &Vec<AnalysisSection>)`.
#[macro_export]
macro_rules! assert_narrative {
    ($outcome:expr) => {{
        match &$outcome {
            juris_core::JurisprudenceOutcome::Narrative { text, sections } => (text, sections),
            other => panic!("assert_narrative! failed: got {:?}", other),
        }
    }};
}
