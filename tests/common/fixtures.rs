//! Webhook payload corpora, as the deployed webhooks actually send them.

/// A complete process record from the TJTO deployment.
pub const PROCESS_FOUND: &str = r#"{
    "numeroProcesso": " 00277463920218272729 ",
    "tribunal": "TJTO",
    "dataDistribuicao": "2021-06-14",
    "vara": "2ª Vara Cível de Palmas",
    "assunto": "Indenização por Dano Moral",
    "status": "Em andamento",
    "classe": "Procedimento Comum Cível",
    "partes": { "requerente": "Maria da Silva", "requerido": "Banco Exemplo S.A." },
    "movimentacoes": [
        { "data": "2023-03-02", "descricao": "Conclusos para sentença" },
        { "data": "2022-11-20", "descricao": "Audiência de conciliação realizada" }
    ],
    "ultimaAtualizacao": "2023-03-02T10:00:00Z"
}"#;

/// `status` sentinel with a message.
pub const PROCESS_NOT_FOUND_STATUS: &str =
    r#"{"status":"nao_encontrado","mensagem":"Nenhum processo com esse número no TJSP."}"#;

/// No `status`, only the marker in `mensagem`.
pub const PROCESS_NOT_FOUND_MARKER: &str =
    r#"{"mensagem":"❌ Processo não encontrado. Verifique o número informado."}"#;

/// Some deployments wrap the record in a one-element array.
pub const PROCESS_ARRAY_WRAPPED: &str =
    r#"[{"numeroProcesso":"123","tribunal":"TJSP","status":"Arquivado"}]"#;

/// Every shape the process normalizer must accept without failing.
pub const CORPUS_PROCESS: &[&str] = &[
    PROCESS_FOUND,
    PROCESS_NOT_FOUND_STATUS,
    PROCESS_NOT_FOUND_MARKER,
    PROCESS_ARRAY_WRAPPED,
    "[]",
    "null",
    "42",
    r#""texto""#,
    r#"{"movimentacoes":"não é lista"}"#,
    r#"{"partes":[1,2,3]}"#,
];

/// Structured case-law page at the top level.
pub const JURIS_STRUCTURED: &str = r#"{
    "total": 2,
    "page": 1,
    "pageSize": 10,
    "data": [
        {
            "idDocumento": "STJ-1",
            "titulo": "REsp 1.234.567/SP",
            "ministro": "Nancy Andrighi",
            "orgao_julgador": "Terceira Turma",
            "ementa": "Usucapião extraordinária. Requisitos.",
            "julgamento_data": "2023-05-09",
            "publicacao_data": "2023-05-15",
            "inteiro_teor_url": "https://stj.example/1"
        },
        {
            "idDocumento": "STJ-2",
            "titulo": "AgInt no AREsp 7.654/RJ",
            "ministro": "Raul Araújo",
            "orgao_julgador": "Quarta Turma",
            "ementa": "Posse. Animus domini.",
            "julgamento_data": "2022-10-03",
            "inteiro_teor_url": "https://stj.example/2"
        }
    ]
}"#;

/// The structured page serialized into `resumoIA`, with the stray `=`.
pub const JURIS_EQUALS_PREFIXED: &str = r#"{"resumoIA":"={\"total\":1,\"page\":2,\"pageSize\":5,\"data\":[{\"idDocumento\":\"X\",\"titulo\":\"HC 1\"}]}"}"#;

/// Narrative with emoji + bold title markers.
pub const NARRATIVE_MARKERS: &str = "📌**Resumo**A turma reconheceu a usucapião.\n\u{1F9D1}\u{200D}\u{2696}\u{FE0F}**Decisão**Recurso provido.\n📚**Precedentes**REsp 1.234.567/SP.";

/// Narrative with bare emoji and no titles.
pub const NARRATIVE_BARE: &str = "📌 Síntese do entendimento. 🔍 Ver também a Súmula 237.";

/// Narrative without any recognised structure.
pub const NARRATIVE_PLAIN: &str = "Não foram encontrados precedentes relevantes para o tema.";
