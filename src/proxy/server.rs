//! HTTP server for the rewrite proxy.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ProxySettings;
use crate::rewrite::{ChatCompletionRequest, ChatMessage, RewriteRequest};
use crate::traits::{json_headers, Headers, HttpClient};

/// Route the studio posts rewrite requests to.
pub const REWRITE_ROUTE: &str = "/api/rewrite";

/// Shared state for the proxy handlers.
#[derive(Clone)]
pub struct ProxyState {
    pub http: Arc<dyn HttpClient>,
    pub settings: Arc<ProxySettings>,
}

impl ProxyState {
    pub fn new(http: Arc<dyn HttpClient>, settings: ProxySettings) -> Self {
        Self {
            http,
            settings: Arc::new(settings),
        }
    }

    fn upstream_headers(&self) -> Headers {
        let mut headers = json_headers();
        if let Some(key) = &self.settings.api_key {
            headers.insert("Authorization".to_string(), format!("Bearer {}", key));
        }
        headers
    }

    fn completion_request(&self, request: &RewriteRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::user(request.prompt())],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }
}

/// Build the proxy router.
pub fn router(state: ProxyState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(REWRITE_ROUTE, post(rewrite_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the proxy on `settings.bind`.
pub async fn start_rewrite_proxy(
    http: Arc<dyn HttpClient>,
    settings: ProxySettings,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let addr = settings.bind;
    start_rewrite_proxy_on(addr, http, settings).await
}

/// Start the proxy on a specific address.
///
/// Returns the server task and the bound address (useful with port 0).
pub async fn start_rewrite_proxy_on(
    addr: SocketAddr,
    http: Arc<dyn HttpClient>,
    settings: ProxySettings,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let app = router(ProxyState::new(http, settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("Rewrite proxy listening on http://{}{}", actual_addr, REWRITE_ROUTE);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Rewrite proxy error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

/// Forward a rewrite request upstream and relay the completion.
///
/// 200 with the upstream JSON on success; 500 `{"error": <body>}` when the
/// upstream answers non-2xx; 502 when it cannot be reached or its body is
/// not JSON.
async fn rewrite_handler(
    State(state): State<ProxyState>,
    Json(request): Json<RewriteRequest>,
) -> Response {
    tracing::info!(
        title_len = request.title.len(),
        description_len = request.description.len(),
        "Rewrite proxy request"
    );

    let body = match serde_json::to_string(&state.completion_request(&request)) {
        Ok(body) => body,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    let upstream = match state
        .http
        .post(&state.settings.upstream, &body, &state.upstream_headers())
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Upstream unreachable: {}", e);
            return error_response(StatusCode::BAD_GATEWAY, e.to_string());
        }
    };

    if !upstream.is_success() {
        let detail = upstream.text_lossy();
        tracing::warn!(status = upstream.status, "Upstream error: {}", detail);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, detail);
    }

    match upstream.json::<Value>() {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => {
            tracing::error!("Upstream returned invalid JSON: {}", e);
            error_response(
                StatusCode::BAD_GATEWAY,
                format!("upstream returned invalid JSON: {}", e),
            )
        }
    }
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(json!({ "error": detail }))).into_response()
}
