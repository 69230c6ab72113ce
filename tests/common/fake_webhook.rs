//! Fake webhook server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `POST /processo`, `POST /jurisprudencia` and
//! `POST /resumo`, each answering with whatever [`Reply`] the test set for
//! it, and records every JSON body it receives.
//!
//! # Example
//!
//! ```rust,no_run
//! let hook = FakeWebhook::start().await.unwrap();
//! hook.reply(Route::Process, Reply::json(PROCESS_FOUND)).await;
//! let client = WebhookClient::new(&hook.config());
//! ```

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use juris_core::config::{Config, WebhooksConfig};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Process,
    Jurisprudence,
    Summary,
}

impl Route {
    fn path(self) -> &'static str {
        match self {
            Route::Process => "/processo",
            Route::Jurisprudence => "/jurisprudencia",
            Route::Summary => "/resumo",
        }
    }
}

/// What one route answers with.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into(), delay: Duration::ZERO }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into(), delay: Duration::ZERO }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
struct HookState {
    replies: HashMap<Route, Reply>,
    received: Vec<(Route, serde_json::Value)>,
}

/// Handle to the running fake webhook server.
pub struct FakeWebhook {
    addr: SocketAddr,
    state: Arc<Mutex<HookState>>,
}

impl FakeWebhook {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(HookState::default()));

        let app = Router::new()
            .route(Route::Process.path(), post(process))
            .route(Route::Jurisprudence.path(), post(jurisprudence))
            .route(Route::Summary.path(), post(summary))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, route: Route) -> String {
        format!("{}{}", self.base_url(), route.path())
    }

    /// Webhook config pointing every endpoint at this server.
    pub fn config(&self) -> WebhooksConfig {
        WebhooksConfig {
            process_url: self.url(Route::Process),
            jurisprudence_url: self.url(Route::Jurisprudence),
            summary_url: self.url(Route::Summary),
            ..Config::defaults().webhooks
        }
    }

    pub async fn reply(&self, route: Route, reply: Reply) {
        self.state.lock().await.replies.insert(route, reply);
    }

    /// JSON bodies received on `route`, oldest first.
    pub async fn received(&self, route: Route) -> Vec<serde_json::Value> {
        self.state
            .lock()
            .await
            .received
            .iter()
            .filter(|(r, _)| *r == route)
            .map(|(_, body)| body.clone())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn process(State(state): State<Arc<Mutex<HookState>>>, body: Bytes) -> Response {
    answer(Route::Process, state, body).await
}

async fn jurisprudence(State(state): State<Arc<Mutex<HookState>>>, body: Bytes) -> Response {
    answer(Route::Jurisprudence, state, body).await
}

async fn summary(State(state): State<Arc<Mutex<HookState>>>, body: Bytes) -> Response {
    answer(Route::Summary, state, body).await
}

async fn answer(route: Route, state: Arc<Mutex<HookState>>, body: Bytes) -> Response {
    let reply = {
        let mut s = state.lock().await;
        let parsed = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        s.received.push((route, parsed));
        s.replies.get(&route).cloned()
    };
    let Some(reply) = reply else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [("content-type", "application/json")], reply.body).into_response()
}
