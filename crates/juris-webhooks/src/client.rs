use juris_core::config::WebhooksConfig;
use juris_core::{
    decode_body, normalize, unwrap_envelope, JurisprudenceOutcome, JurisprudenceQuery,
    ProcessOutcome, ProcessQuery, ProcessSummary, QueryError, SummaryRequest,
};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// The three webhooks, for logging and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Process,
    Jurisprudence,
    Summary,
}

impl Endpoint {
    fn label(self) -> &'static str {
        match self {
            Endpoint::Process => "consulta de processos",
            Endpoint::Jurisprudence => "jurisprudência",
            Endpoint::Summary => "resumo",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    resumo: String,
}

/// HTTP client for the process, jurisprudence and summary webhooks.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    process_url: String,
    jurisprudence_url: String,
    summary_url: String,
    timeout: Duration,
}

impl WebhookClient {
    pub fn new(config: &WebhooksConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            process_url: config.process_url.trim().to_string(),
            jurisprudence_url: config.jurisprudence_url.trim().to_string(),
            summary_url: config.summary_url.trim().to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Budget applied to the jurisprudence request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a summary endpoint is configured.
    pub fn has_summary(&self) -> bool {
        !self.summary_url.is_empty()
    }

    fn url(&self, endpoint: Endpoint) -> Result<&str, QueryError> {
        let url = match endpoint {
            Endpoint::Process => &self.process_url,
            Endpoint::Jurisprudence => &self.jurisprudence_url,
            Endpoint::Summary => &self.summary_url,
        };
        if url.is_empty() {
            return Err(QueryError::NotConfigured(endpoint.label()));
        }
        Ok(url)
    }

    /// Look up one process. A missing process is `Ok(ProcessOutcome::NotFound)`.
    pub async fn lookup_process(&self, query: &ProcessQuery) -> Result<ProcessOutcome, QueryError> {
        let endpoint = Endpoint::Process;
        let url = self.url(endpoint)?;
        let started = Instant::now();
        info!(%url, numero = %query.numero_processo, estado = %query.estado, "webhooks: process lookup");

        let resp = self.post(endpoint, url, query).await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "webhooks: process lookup rejected");
            return Err(QueryError::Http {
                status: status.as_u16(),
                message: format!("Erro na consulta: {}", status.as_u16()),
            });
        }

        let body = resp.text().await.map_err(|e| self.transport(endpoint, e))?;
        let value = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "webhooks: process lookup returned invalid JSON");
            QueryError::Decode(e.to_string())
        })?;
        let outcome = normalize(value);
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            not_found = outcome.is_not_found(),
            "webhooks: process lookup done"
        );
        Ok(outcome)
    }

    /// Search case law. The whole exchange, body included, is bounded by
    /// [`WebhookClient::timeout`]; on expiry the request is dropped.
    pub async fn search_jurisprudence(
        &self,
        query: &JurisprudenceQuery,
    ) -> Result<JurisprudenceOutcome, QueryError> {
        let endpoint = Endpoint::Jurisprudence;
        let url = self.url(endpoint)?;
        let started = Instant::now();
        info!(
            %url,
            tema = %query.tema,
            keywords = query.palavras_chave.len(),
            page = query.page,
            "webhooks: jurisprudence search"
        );

        let body = tokio::time::timeout(self.timeout, self.jurisprudence_body(url, query))
            .await
            .map_err(|_| {
                warn!(seconds = self.timeout.as_secs(), "webhooks: jurisprudence search timed out");
                QueryError::Timeout { seconds: self.timeout.as_secs() }
            })??;

        let outcome = unwrap_envelope(decode_body(&body)?);
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            structured = matches!(outcome, JurisprudenceOutcome::Structured(_)),
            "webhooks: jurisprudence search done"
        );
        Ok(outcome)
    }

    async fn jurisprudence_body(
        &self,
        url: &str,
        query: &JurisprudenceQuery,
    ) -> Result<String, QueryError> {
        let endpoint = Endpoint::Jurisprudence;
        let resp = self.post(endpoint, url, query).await?;
        let status = resp.status();
        if !status.is_success() {
            // The server's own error text wins over the generic status line.
            let text = resp.text().await.unwrap_or_default();
            let message = if text.is_empty() {
                format!("Erro {}: {}", status.as_u16(), status.canonical_reason().unwrap_or(""))
            } else {
                text
            };
            warn!(status = status.as_u16(), %message, "webhooks: jurisprudence search rejected");
            return Err(QueryError::Http { status: status.as_u16(), message });
        }
        resp.text().await.map_err(|e| self.transport(endpoint, e))
    }

    /// Ask the AI webhook to summarise a process' movements.
    pub async fn summarize_movements(
        &self,
        request: &SummaryRequest,
    ) -> Result<ProcessSummary, QueryError> {
        let endpoint = Endpoint::Summary;
        let url = self.url(endpoint)?;
        let started = Instant::now();
        info!(%url, movements = request.movimentacoes.len(), "webhooks: movement summary");

        let resp = self.post(endpoint, url, request).await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "webhooks: movement summary rejected");
            return Err(QueryError::Http {
                status: status.as_u16(),
                message: format!("Erro ao gerar resumo: {}", status.as_u16()),
            });
        }

        let body = resp.text().await.map_err(|e| self.transport(endpoint, e))?;
        if body.is_empty() {
            return Err(QueryError::EmptyResponse);
        }
        let parsed: SummaryResponse =
            serde_json::from_str(&body).map_err(|e| QueryError::Decode(e.to_string()))?;
        info!(elapsed_ms = started.elapsed().as_millis() as u64, "webhooks: movement summary done");
        Ok(ProcessSummary { resumo: parsed.resumo })
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        url: &str,
        body: &T,
    ) -> Result<reqwest::Response, QueryError> {
        self.client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport(endpoint, e))
    }

    fn transport(&self, endpoint: Endpoint, err: reqwest::Error) -> QueryError {
        warn!(%endpoint, error = %err, "webhooks: transport failure");
        if err.is_timeout() {
            QueryError::Timeout { seconds: self.timeout.as_secs() }
        } else {
            QueryError::Connection(err.to_string())
        }
    }
}
