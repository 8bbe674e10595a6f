//! Proxy pass-through para el despliegue serverless
//!
//! Reenvía cualquier llamada /api/proxy/* al origen del backend:
//! copia el método, el cuerpo y la cabecera Authorization, y devuelve
//! status, cabeceras y cuerpo tal cual (quitando solo
//! transfer-encoding). Plomería pura, sin lógica de negocio.

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use http::header::{AUTHORIZATION, CONTENT_TYPE, TRANSFER_ENCODING};
use serde_json::json;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::environment::EnvironmentConfig;

/// Estado compartido del proxy
#[derive(Clone)]
pub struct ProxyState {
    pub http: reqwest::Client,
    pub backend_url: String,
}

impl ProxyState {
    pub fn new(config: &EnvironmentConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            backend_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Crear el router del proxy
pub fn proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/proxy", any(forward_root))
        .route("/api/proxy/*path", any(forward))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(35)))
        .layer(ConcurrencyLimitLayer::new(64))
        .with_state(state)
}

async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward_to(state, method, &path, query, headers, body).await
}

async fn forward_root(
    State(state): State<ProxyState>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward_to(state, method, "", query, headers, body).await
}

async fn forward_to(
    state: ProxyState,
    method: Method,
    path: &str,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut url = format!("{}/{}", state.backend_url, path.trim_start_matches('/'));
    if let Some(q) = query {
        url = format!("{}?{}", url, q);
    }

    let mut request = state
        .http
        .request(method.clone(), &url)
        .header(CONTENT_TYPE, "application/json");

    if let Some(auth) = headers.get(AUTHORIZATION) {
        request = request.header(AUTHORIZATION, auth.clone());
    }

    if method != Method::GET && method != Method::HEAD && !body.is_empty() {
        request = request.body(body.to_vec());
    }

    match request.send().await {
        Ok(upstream) => {
            let status = upstream.status();

            let mut response_headers = HeaderMap::new();
            for (name, value) in upstream.headers() {
                if *name == TRANSFER_ENCODING {
                    continue;
                }
                response_headers.insert(name.clone(), value.clone());
            }

            let bytes = upstream.bytes().await.unwrap_or_default();
            (status, response_headers, bytes).into_response()
        }
        Err(e) => {
            error!("❌ Error conectando al backend: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error conectando al backend" })),
            )
                .into_response()
        }
    }
}
